//! Payment guide models for CSV parsing and internal representation.
//!
//! Guides arrive from the extraction front end as CSV rows. Rows are
//! validated here, before any record assembly: a completed guide that
//! cannot be coerced into shape aborts the whole run instead of leaking
//! a corrupt detail record into the file.

use crate::decimal::Decimal2;
use crate::error::{RemessaError, Result};
use crate::format::strip_non_digits;
use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use serde::Deserialize;
use std::io::Read;
use std::str::FromStr;

/// Processing state of a guide, as reported by the extraction front end.
///
/// Only `Completed` guides participate in file generation; the rest are
/// filtered out silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideStatus {
    Pending,
    Processing,
    Completed,
    Error,
}

impl FromStr for GuideStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(GuideStatus::Pending),
            "processing" => Ok(GuideStatus::Processing),
            "completed" => Ok(GuideStatus::Completed),
            "error" => Ok(GuideStatus::Error),
            other => Err(format!("unknown status '{}'", other)),
        }
    }
}

/// Raw guide row as read from CSV.
///
/// All fields are kept as strings; coercion and validation happen in
/// [`GuideRecord::parse`] so that row numbers can be attached to errors.
#[derive(Debug, Deserialize)]
pub struct GuideRecord {
    /// Typeable barcode line, possibly with separators
    pub barcode: String,

    /// Amount in currency units, e.g. "1234.56"
    pub amount: String,

    /// Due date in DD/MM/YYYY form
    pub due_date: String,

    /// Two-letter state code, e.g. "SP"
    pub state: String,

    /// pending, processing, completed or error
    pub status: String,
}

impl GuideRecord {
    /// Parses just the status column.
    pub fn status(&self) -> std::result::Result<GuideStatus, String> {
        GuideStatus::from_str(&self.status)
    }

    /// Validates and coerces the row into a [`PaymentGuide`].
    pub fn parse(&self, row: usize) -> Result<PaymentGuide> {
        let invalid = |message: String| RemessaError::InvalidGuide { row, message };

        let status = self.status().map_err(&invalid)?;

        let barcode_line = strip_non_digits(&self.barcode);
        if barcode_line.is_empty() {
            return Err(invalid("barcode line has no digits".into()));
        }

        let amount = Decimal2::from_str(&self.amount)
            .map_err(|e| invalid(format!("amount '{}': {}", self.amount, e)))?;
        if amount.is_negative() {
            return Err(invalid(format!("amount '{}' is negative", self.amount)));
        }

        let due_date = NaiveDate::parse_from_str(self.due_date.trim(), "%d/%m/%Y")
            .map_err(|e| invalid(format!("due date '{}': {}", self.due_date, e)))?;

        let state = self.state.trim().to_uppercase();
        if state.len() != 2 || !state.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid(format!("state code '{}'", self.state)));
        }

        Ok(PaymentGuide {
            barcode_line,
            amount,
            due_date,
            state,
            status,
        })
    }
}

/// A validated payment guide ready for record assembly.
#[derive(Debug, Clone)]
pub struct PaymentGuide {
    /// Digits-only typeable line, at most 48 characters
    pub barcode_line: String,

    /// Amount in currency units
    pub amount: Decimal2,

    /// Guide due date
    pub due_date: NaiveDate,

    /// Two-letter uppercase state code
    pub state: String,

    /// Processing state
    pub status: GuideStatus,
}

impl PaymentGuide {
    /// Returns `true` if this guide will be emitted as a detail record.
    pub fn is_eligible(&self) -> bool {
        self.status == GuideStatus::Completed
    }
}

/// Reads guides from a CSV reader.
///
/// A malformed row that would have become a detail record aborts the read.
/// Malformed rows whose status already excludes them from the file are
/// logged at warn level and skipped; extraction failures routinely leave
/// such rows with incomplete data.
pub fn read_guides<R: Read>(reader: R) -> Result<Vec<PaymentGuide>> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut guides = Vec::new();

    for (row_idx, result) in csv_reader.deserialize::<GuideRecord>().enumerate() {
        let row = row_idx + 2; // 1-indexed, accounting for header row
        let record = result?;

        match record.parse(row) {
            Ok(guide) => {
                debug!("Row {}: read guide {} / {}", row, guide.state, guide.due_date);
                guides.push(guide);
            }
            Err(e) => {
                if matches!(record.status(), Ok(s) if s != GuideStatus::Completed) {
                    warn!("Row {}: skipping ineligible guide: {}", row, e);
                } else {
                    return Err(e);
                }
            }
        }
    }

    Ok(guides)
}
