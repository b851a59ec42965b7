//! Fixed-width field formatting primitives for the CNAB 240 layout.
//!
//! Pure functions, no I/O and no state. Overflow is handled by clipping:
//! numeric fields keep the first `width` characters of the zero-padded
//! string, text fields keep the first `width` characters of the value.
//! Strict width checks, when wanted, happen in the record assembler
//! before these functions run.

use crate::decimal::Decimal2;

/// Every CNAB 240 record is exactly this many characters wide.
pub const RECORD_WIDTH: usize = 240;

/// Left-pads a number with zeros up to `width`, clipping overflow.
pub fn pad_numeric(value: u64, width: usize) -> String {
    pad_digits(&value.to_string(), width)
}

/// Left-pads a digit string with zeros up to `width`, clipping overflow.
///
/// The input is expected to be pre-normalized with [`strip_non_digits`];
/// whatever characters it carries are emitted as-is.
pub fn pad_digits(value: &str, width: usize) -> String {
    let padded = format!("{:0>width$}", value);
    padded.chars().take(width).collect()
}

/// Right-pads text with spaces up to `width`, clipping overflow.
pub fn pad_text(value: &str, width: usize) -> String {
    let mut out: String = value.chars().take(width).collect();
    for _ in out.chars().count()..width {
        out.push(' ');
    }
    out
}

/// Formats a monetary amount as zero-padded cents.
pub fn to_cents_fixed(amount: Decimal2, width: usize) -> String {
    pad_digits(&amount.to_cents().to_string(), width)
}

/// Removes every character that is not an ASCII digit.
pub fn strip_non_digits(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Pads or clips an assembled record to exactly [`RECORD_WIDTH`] characters.
///
/// Every record must pass through here before being appended to the file.
pub fn enforce_record_width(record: &str) -> String {
    pad_text(record, RECORD_WIDTH)
}
