//! Remitting company profile.

use crate::error::{RemessaError, Result};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::io::Read;

/// Identification of the company originating the remittance.
///
/// Values are stored as entered; the record assembler normalizes them
/// (digit stripping, padding, clipping) when the file is built. The tax
/// id may carry punctuation, e.g. "03.781.919/0001-58".
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyProfile {
    /// Display name; the file uses at most 30 characters of it
    pub name: String,

    /// 14-digit CNPJ, punctuation allowed
    pub tax_id: String,

    /// Bank agency, up to 5 digits
    pub bank_agency: String,

    /// Bank account, up to 12 digits
    pub bank_account: String,

    /// Account check digit, 1 character
    pub check_digit: String,
}

/// Reads the company profile from a one-row CSV file.
pub fn read_company<R: Read>(reader: R) -> Result<CompanyProfile> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    match csv_reader.deserialize::<CompanyProfile>().next() {
        Some(Ok(profile)) => Ok(profile),
        Some(Err(e)) => Err(e.into()),
        None => Err(RemessaError::InvalidCompany(
            "profile file has no data row".into(),
        )),
    }
}
