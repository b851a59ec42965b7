//! Error types for the remittance generator.

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, RemessaError>;

/// Errors that can occur while reading input or generating a remittance file.
#[derive(Error, Debug)]
pub enum RemessaError {
    /// Failed to open or read an input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// A guide row that would become a detail record is missing a field
    /// or carries a value that cannot be coerced to its expected shape
    #[error("Invalid guide at row {row}: {message}")]
    InvalidGuide { row: usize, message: String },

    /// The company profile file is empty or unusable
    #[error("Invalid company profile: {0}")]
    InvalidCompany(String),

    /// No guide reached the completed state, so there is nothing to remit
    #[error("No completed guides to include in the remittance file")]
    NoEligibleRecords,

    /// Strict mode only: a value does not fit its fixed-width field
    #[error("Value for {field} does not fit in {width} positions")]
    FieldOverflow { field: &'static str, width: usize },

    /// Missing input file arguments
    #[error("Missing arguments. Usage: remessa-engine <guides.csv> <company.csv> [output-dir]")]
    MissingArgument,
}
