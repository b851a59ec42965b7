//! CNAB 240 record assembly.
//!
//! Builds the five record kinds of a Sispag tax-payment remittance file:
//! file header, lot header, one Segment O detail per completed guide, lot
//! trailer and file trailer. Records are appended in order, each forced to
//! exactly 240 characters, and joined with CRLF without a trailing
//! terminator.
//!
//! The generator carries no I/O: it maps an in-memory guide list plus a
//! company profile to an in-memory file body, so independent invocations
//! can run in parallel. The generation timestamp is sampled once per call
//! and reused for every time-dependent field.

use crate::company::CompanyProfile;
use crate::decimal::Decimal2;
use crate::error::{RemessaError, Result};
use crate::format::{
    enforce_record_width, pad_digits, pad_numeric, pad_text, strip_non_digits, to_cents_fixed,
    RECORD_WIDTH,
};
use crate::guide::PaymentGuide;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use log::debug;

/// Lot number of the single payment lot in the file.
const PAYMENT_LOT: &str = "0001";
/// Reserved lot numbers for the file-level header and trailer.
const FILE_HEADER_LOT: &str = "0000";
const FILE_TRAILER_LOT: &str = "9999";

/// Lot-level layout version for Sispag.
const LOT_LAYOUT_VERSION: &str = "030";
/// Operation C = debit from the company account.
const OPERATION_DEBIT: char = 'C';
/// Service 22 = tax payment.
const SERVICE_TAX_PAYMENT: &str = "22";
/// Payment form 91 = state tax guide (GNRE) sub-layout.
const FORM_GNRE: &str = "91";
/// Movement 000 = inclusion.
const MOVEMENT_INCLUSION: &str = "000";
/// Enrollment type 2 = CNPJ.
const ENROLLMENT_CNPJ: char = '2';
/// Currency tag for Real.
const CURRENCY_TAG: &str = "REA";

/// Bank-layout constants, injectable so the codec can be retargeted
/// without touching the record builders.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// 3-digit bank code
    pub bank_code: String,

    /// Bank display name, up to 30 characters used
    pub bank_name: String,

    /// 3-digit file layout version
    pub layout_version: String,
}

impl LayoutConfig {
    /// The Itau Sispag layout this generator was validated against.
    pub fn itau() -> Self {
        LayoutConfig {
            bank_code: "341".to_string(),
            bank_name: "BANCO ITAU S.A.".to_string(),
            layout_version: "080".to_string(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::itau()
    }
}

/// What to do when a value exceeds its fixed field width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Clip silently, reference-compatible behavior.
    Truncate,

    /// Reject the run with [`RemessaError::FieldOverflow`]. Applies to
    /// identity and monetary fields; display text always clips.
    Reject,
}

/// The CNAB 240 remittance generator.
///
/// # Example
///
/// ```no_run
/// use remessa_engine::{CnabGenerator, LayoutConfig, read_company, read_guides};
/// use std::fs::File;
/// use std::io::BufReader;
///
/// let guides = read_guides(BufReader::new(File::open("guides.csv")?))?;
/// let company = read_company(BufReader::new(File::open("company.csv")?))?;
/// let body = CnabGenerator::new(LayoutConfig::itau(), company).generate(&guides)?;
/// # Ok::<(), remessa_engine::RemessaError>(())
/// ```
pub struct CnabGenerator {
    layout: LayoutConfig,
    company: CompanyProfile,
    overflow: OverflowPolicy,
}

impl CnabGenerator {
    /// Creates a generator with the reference truncate-on-overflow behavior.
    pub fn new(layout: LayoutConfig, company: CompanyProfile) -> Self {
        CnabGenerator {
            layout,
            company,
            overflow: OverflowPolicy::Truncate,
        }
    }

    /// Creates a generator that rejects oversized field values.
    pub fn strict(layout: LayoutConfig, company: CompanyProfile) -> Self {
        CnabGenerator {
            layout,
            company,
            overflow: OverflowPolicy::Reject,
        }
    }

    /// Generates the file body, stamping it with the current local time.
    pub fn generate(&self, guides: &[PaymentGuide]) -> Result<String> {
        self.generate_at(guides, Local::now().naive_local())
    }

    /// Generates the file body with an explicit generation timestamp.
    ///
    /// Deterministic: identical guides, profile and timestamp produce a
    /// byte-identical body.
    pub fn generate_at(
        &self,
        guides: &[PaymentGuide],
        generated_at: NaiveDateTime,
    ) -> Result<String> {
        let eligible: Vec<&PaymentGuide> = guides.iter().filter(|g| g.is_eligible()).collect();
        if eligible.is_empty() {
            return Err(RemessaError::NoEligibleRecords);
        }

        let tax_id = strip_non_digits(&self.company.tax_id);

        let mut records: Vec<String> = Vec::with_capacity(eligible.len() + 4);
        records.push(self.file_header(&tax_id, generated_at)?);
        records.push(self.lot_header(&tax_id)?);

        // Sum before converting to cents; one conversion at the trailer.
        let mut total = Decimal2::ZERO;
        let mut detail_count: u64 = 0;

        for guide in &eligible {
            total += guide.amount;
            detail_count += 1;
            records.push(self.detail(guide, detail_count)?);
        }

        records.push(self.lot_trailer(detail_count, total)?);
        records.push(self.file_trailer(records.len() as u64 + 1)?);

        debug!(
            "Assembled {} records, {} details, total {}",
            records.len(),
            detail_count,
            total
        );

        Ok(records.join("\r\n"))
    }

    /// Zero-padded numeric field with an optional strict width check.
    fn numeric_field(&self, field: &'static str, digits: &str, width: usize) -> Result<String> {
        if self.overflow == OverflowPolicy::Reject && digits.chars().count() > width {
            return Err(RemessaError::FieldOverflow { field, width });
        }
        Ok(pad_digits(digits, width))
    }

    /// Monetary field in cents with an optional strict width check.
    fn amount_field(&self, field: &'static str, amount: Decimal2, width: usize) -> Result<String> {
        if self.overflow == OverflowPolicy::Reject
            && amount.to_cents().to_string().len() > width
        {
            return Err(RemessaError::FieldOverflow { field, width });
        }
        Ok(to_cents_fixed(amount, width))
    }

    fn file_header(&self, tax_id: &str, generated_at: NaiveDateTime) -> Result<String> {
        let mut r = String::with_capacity(RECORD_WIDTH);
        r.push_str(&self.layout.bank_code); // 001-003 bank
        r.push_str(FILE_HEADER_LOT); // 004-007 lot
        r.push('0'); // 008     record type
        r.push_str(&pad_text("", 6)); // 009-014 blanks
        r.push_str(&self.layout.layout_version); // 015-017 layout version
        r.push(ENROLLMENT_CNPJ); // 018     enrollment type
        r.push_str(&self.numeric_field("tax id", tax_id, 14)?); // 019-032 CNPJ
        r.push_str(&pad_text("", 20)); // 033-052 agreement, blank for Sispag
        r.push_str(&self.numeric_field(
            "bank agency",
            &strip_non_digits(&self.company.bank_agency),
            5,
        )?); // 053-057 agency
        r.push(' '); // 058     blank
        r.push_str(&self.numeric_field(
            "bank account",
            &strip_non_digits(&self.company.bank_account),
            12,
        )?); // 059-070 account
        r.push(' '); // 071     blank
        r.push_str(&pad_text(&self.company.check_digit, 1)); // 072     check digit
        r.push_str(&pad_text(&self.company.name, 30)); // 073-102 company name
        r.push_str(&pad_text(&self.layout.bank_name, 30)); // 103-132 bank name
        r.push_str(&pad_text("", 10)); // 133-142 blanks
        r.push('1'); // 143     remittance code
        r.push_str(&generated_at.format("%d%m%Y").to_string()); // 144-151 generation date
        r.push_str(&generated_at.format("%H%M%S").to_string()); // 152-157 generation time
        r.push_str(&pad_numeric(1, 9)); // 158-166 file sequence
        r.push_str(&self.layout.layout_version); // 167-171 lot layout tag
        r.push_str("00");
        Ok(enforce_record_width(&r)) // 172-240 reserved
    }

    fn lot_header(&self, tax_id: &str) -> Result<String> {
        let mut r = String::with_capacity(RECORD_WIDTH);
        r.push_str(&self.layout.bank_code); // 001-003 bank
        r.push_str(PAYMENT_LOT); // 004-007 lot
        r.push('1'); // 008     record type
        r.push(OPERATION_DEBIT); // 009     operation
        r.push_str(SERVICE_TAX_PAYMENT); // 010-011 service
        r.push_str(FORM_GNRE); // 012-013 payment form
        r.push_str(LOT_LAYOUT_VERSION); // 014-016 lot layout
        r.push(' '); // 017     blank
        r.push(ENROLLMENT_CNPJ); // 018     enrollment type
        r.push_str(&self.numeric_field("tax id", tax_id, 14)?); // 019-032 CNPJ
        r.push_str(&pad_text("", 20)); // 033-052 agreement, blank for Sispag
        r.push_str(&self.numeric_field(
            "bank agency",
            &strip_non_digits(&self.company.bank_agency),
            5,
        )?); // 053-057 agency
        r.push(' '); // 058     blank
        r.push_str(&self.numeric_field(
            "bank account",
            &strip_non_digits(&self.company.bank_account),
            12,
        )?); // 059-070 account
        r.push(' '); // 071     blank
        r.push_str(&pad_text(&self.company.check_digit, 1)); // 072     check digit
        r.push_str(&pad_text(&self.company.name, 30)); // 073-102 company name
        r.push_str(&pad_text("", 30)); // 103-132 message
        r.push_str(&pad_text("", 10)); // 133-142 address, blank for taxes
        r.push_str(&pad_text("", 30)); // 143-172 blanks
        r.push_str(&pad_text("", 30)); // 173-202 blanks
        r.push_str(&pad_text("", 10)); // 203-212 blanks
        r.push_str(&pad_numeric(0, 8)); // 213-220 credit date, zeros
        Ok(enforce_record_width(&r)) // 221-240 blanks
    }

    /// Segment O detail record for one completed guide.
    fn detail(&self, guide: &PaymentGuide, seq: u64) -> Result<String> {
        if self.overflow == OverflowPolicy::Reject && guide.barcode_line.chars().count() > 48 {
            return Err(RemessaError::FieldOverflow {
                field: "barcode line",
                width: 48,
            });
        }

        let due = guide.due_date.format("%d%m%Y").to_string();
        // Echoed back by the bank in the return file.
        let reference = format!("GNRE-{}-{}-{}", guide.state, due, pad_numeric(seq, 2));

        let mut r = String::with_capacity(RECORD_WIDTH);
        r.push_str(&self.layout.bank_code); // 001-003 bank
        r.push_str(PAYMENT_LOT); // 004-007 lot
        r.push('3'); // 008     record type
        r.push_str(&pad_numeric(seq, 5)); // 009-013 sequence within lot
        r.push('O'); // 014     segment
        r.push_str(MOVEMENT_INCLUSION); // 015-017 movement
        r.push_str(&pad_text(&guide.barcode_line, 48)); // 018-065 typeable line
        r.push_str(&pad_text(&format!("GNRE {}", guide.state), 30)); // 066-095 taxpayer label
        r.push_str(&due); // 096-103 due date
        r.push_str(CURRENCY_TAG); // 104-106 currency
        r.push_str(&pad_numeric(0, 15)); // 107-121 other entities, zeros
        r.push_str(&self.amount_field("amount", guide.amount, 15)?); // 122-136 amount
        r.push_str(&due); // 137-144 payment date, due date reused
        r.push_str(&pad_numeric(0, 15)); // 145-159 paid amount, scheduled payments carry zero
        r.push_str(&pad_text("", 3)); // 160-162 blanks
        r.push_str(&pad_numeric(0, 9)); // 163-171 zeros
        r.push_str(&pad_text("", 3)); // 172-174 blanks
        r.push_str(&pad_text(&reference, 20)); // 175-194 reference
        Ok(enforce_record_width(&r)) // 195-240 blanks
    }

    fn lot_trailer(&self, detail_count: u64, total: Decimal2) -> Result<String> {
        let mut r = String::with_capacity(RECORD_WIDTH);
        r.push_str(&self.layout.bank_code); // 001-003 bank
        r.push_str(PAYMENT_LOT); // 004-007 lot
        r.push('5'); // 008     record type
        r.push_str(&pad_text("", 9)); // 009-017 blanks
        r.push_str(&pad_numeric(detail_count + 2, 6)); // 018-023 records in lot
        r.push_str(&self.amount_field("lot total", total, 18)?); // 024-041 summed amounts
        r.push_str(&pad_numeric(0, 18)); // 042-059 currency quantity, zeros
        r.push_str(&pad_numeric(0, 6)); // 060-065 debit notice, zeros
        Ok(enforce_record_width(&r)) // 066-240 blanks
    }

    fn file_trailer(&self, record_count: u64) -> Result<String> {
        let mut r = String::with_capacity(RECORD_WIDTH);
        r.push_str(&self.layout.bank_code); // 001-003 bank
        r.push_str(FILE_TRAILER_LOT); // 004-007 lot
        r.push('9'); // 008     record type
        r.push_str(&pad_text("", 9)); // 009-017 blanks
        r.push_str(&pad_numeric(1, 6)); // 018-023 lot count
        r.push_str(&pad_numeric(record_count, 6)); // 024-029 records in file
        r.push_str(&pad_numeric(0, 6)); // 030-035 reconciliation accounts, zeros
        Ok(enforce_record_width(&r)) // 036-240 blanks
    }
}

/// Suggested remittance file name for a generation date.
///
/// DOS-style 8-character name: SPG + month + day + sequence, the sequence
/// clipped to a single digit, plus the .txt extension.
pub fn remessa_filename(date: NaiveDate) -> String {
    let mut name = format!("SPG{:02}{:02}01", date.month(), date.day());
    name.truncate(8);
    format!("{}.txt", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::GuideStatus;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn company() -> CompanyProfile {
        CompanyProfile {
            name: "FASM COMERCIO DE ARTIGOS DO VESTUARIO LTDA".to_string(),
            tax_id: "03781919000158".to_string(),
            bank_agency: "01529".to_string(),
            bank_account: "000000070940".to_string(),
            check_digit: "2".to_string(),
        }
    }

    fn guide(amount: &str, due: (i32, u32, u32), state: &str, status: GuideStatus) -> PaymentGuide {
        PaymentGuide {
            barcode_line: "8".repeat(48),
            amount: Decimal2::from_str(amount).unwrap(),
            due_date: NaiveDate::from_ymd_opt(due.0, due.1, due.2).unwrap(),
            state: state.to_string(),
            status,
        }
    }

    fn stamp() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(14, 25, 33)
            .unwrap()
    }

    fn generate(guides: &[PaymentGuide]) -> String {
        CnabGenerator::new(LayoutConfig::itau(), company())
            .generate_at(guides, stamp())
            .unwrap()
    }

    #[test]
    fn test_every_record_is_240_chars() {
        let guides = vec![
            guide("10.00", (2025, 3, 15), "SP", GuideStatus::Completed),
            guide("20.00", (2025, 3, 16), "RJ", GuideStatus::Completed),
        ];
        let body = generate(&guides);

        let records: Vec<&str> = body.split("\r\n").collect();
        assert_eq!(records.len(), 6);
        for record in &records {
            assert_eq!(record.chars().count(), 240);
        }
    }

    #[test]
    fn test_record_order_and_types() {
        let guides = vec![guide("10.00", (2025, 3, 15), "SP", GuideStatus::Completed)];
        let body = generate(&guides);

        let records: Vec<&str> = body.split("\r\n").collect();
        assert_eq!(&records[0][..8], "34100000");
        assert_eq!(&records[1][..8], "34100011");
        assert_eq!(&records[2][..8], "34100013");
        assert_eq!(&records[3][..8], "34100015");
        assert_eq!(&records[4][..8], "34199999");
    }

    #[test]
    fn test_detail_fields_for_reference_example() {
        let guides = vec![guide("1234.56", (2025, 3, 15), "SP", GuideStatus::Completed)];
        let body = generate(&guides);
        let detail = body.split("\r\n").nth(2).unwrap();

        assert_eq!(&detail[8..13], "00001"); // sequence
        assert_eq!(&detail[13..14], "O"); // segment
        assert_eq!(&detail[14..17], "000"); // movement
        assert_eq!(&detail[17..65], "8".repeat(48)); // typeable line
        assert_eq!(&detail[65..95], format!("{:<30}", "GNRE SP"));
        assert_eq!(&detail[95..103], "15032025"); // due date
        assert_eq!(&detail[103..106], "REA");
        assert_eq!(&detail[121..136], "000000000123456"); // amount in cents
        assert_eq!(&detail[136..144], "15032025"); // payment date
        assert_eq!(&detail[144..159], "0".repeat(15)); // paid amount
        assert_eq!(&detail[174..194], "GNRE-SP-15032025-01 ");
    }

    #[test]
    fn test_short_barcode_is_space_padded() {
        let mut g = guide("10.00", (2025, 3, 15), "SP", GuideStatus::Completed);
        g.barcode_line = "12345".to_string();
        let body = generate(&[g]);
        let detail = body.split("\r\n").nth(2).unwrap();

        assert_eq!(&detail[17..65], format!("{:<48}", "12345"));
    }

    #[test]
    fn test_file_header_identification() {
        let guides = vec![guide("10.00", (2025, 3, 15), "SP", GuideStatus::Completed)];
        let body = generate(&guides);
        let header = body.split("\r\n").next().unwrap();

        assert_eq!(&header[14..17], "080"); // layout version
        assert_eq!(&header[17..18], "2"); // enrollment type
        assert_eq!(&header[18..32], "03781919000158"); // CNPJ
        assert_eq!(&header[52..57], "01529"); // agency
        assert_eq!(&header[58..70], "000000070940"); // account
        assert_eq!(&header[71..72], "2"); // check digit
        assert_eq!(&header[102..132], format!("{:<30}", "BANCO ITAU S.A."));
        assert_eq!(&header[142..143], "1"); // remittance code
        assert_eq!(&header[143..151], "10032025"); // generation date
        assert_eq!(&header[151..157], "142533"); // generation time
        assert_eq!(&header[157..166], "000000001");
        assert_eq!(&header[166..171], "08000");
    }

    #[test]
    fn test_company_name_longer_than_30_is_truncated() {
        let guides = vec![guide("10.00", (2025, 3, 15), "SP", GuideStatus::Completed)];
        let body = generate(&guides);
        let header = body.split("\r\n").next().unwrap();

        // 42-character fixture name clips to its first 30 characters.
        assert_eq!(&header[72..102], "FASM COMERCIO DE ARTIGOS DO VE");
    }

    #[test]
    fn test_lot_header_operation_fields() {
        let guides = vec![guide("10.00", (2025, 3, 15), "SP", GuideStatus::Completed)];
        let body = generate(&guides);
        let lot = body.split("\r\n").nth(1).unwrap();

        assert_eq!(&lot[8..9], "C"); // debit operation
        assert_eq!(&lot[9..11], "22"); // tax payment service
        assert_eq!(&lot[11..13], "91"); // GNRE form
        assert_eq!(&lot[13..16], "030"); // lot layout
        assert_eq!(&lot[212..220], "00000000"); // credit date
    }

    #[test]
    fn test_trailer_counts_and_total() {
        let guides = vec![
            guide("10.00", (2025, 3, 15), "SP", GuideStatus::Completed),
            guide("20.50", (2025, 3, 16), "RJ", GuideStatus::Completed),
            guide("5.25", (2025, 3, 17), "MG", GuideStatus::Completed),
        ];
        let body = generate(&guides);
        let records: Vec<&str> = body.split("\r\n").collect();

        let lot_trailer = records[5];
        assert_eq!(&lot_trailer[17..23], "000005"); // 3 details + header + trailer
        assert_eq!(&lot_trailer[23..41], "000000000000003575"); // 35.75 in cents

        let file_trailer = records[6];
        assert_eq!(&file_trailer[17..23], "000001"); // lot count
        assert_eq!(&file_trailer[23..29], "000007"); // all records including itself
    }

    #[test]
    fn test_trailer_total_matches_per_detail_cents_for_fractional_input() {
        let guides = vec![
            guide("10.005", (2025, 3, 15), "SP", GuideStatus::Completed),
            guide("10.005", (2025, 3, 16), "RJ", GuideStatus::Completed),
        ];
        let body = generate(&guides);
        let records: Vec<&str> = body.split("\r\n").collect();

        // Each amount settles to 10.01 at ingestion, so per-detail cents
        // and the summed trailer total agree.
        assert_eq!(&records[2][121..136], "000000000001001");
        assert_eq!(&records[3][121..136], "000000000001001");
        assert_eq!(&records[4][23..41], "000000000000002002");
    }

    #[test]
    fn test_only_completed_guides_become_details() {
        let guides = vec![
            guide("10.00", (2025, 3, 15), "SP", GuideStatus::Completed),
            guide("99.00", (2025, 3, 15), "SP", GuideStatus::Pending),
            guide("99.00", (2025, 3, 15), "SP", GuideStatus::Processing),
            guide("99.00", (2025, 3, 15), "SP", GuideStatus::Error),
            guide("20.00", (2025, 3, 16), "RJ", GuideStatus::Completed),
        ];
        let body = generate(&guides);
        let records: Vec<&str> = body.split("\r\n").collect();

        assert_eq!(records.len(), 6); // 2 details + 4 structural records
        assert_eq!(&records[2][121..136], "000000000001000");
        assert_eq!(&records[3][121..136], "000000000002000");
    }

    #[test]
    fn test_no_eligible_guides_is_an_error() {
        let guides = vec![
            guide("10.00", (2025, 3, 15), "SP", GuideStatus::Pending),
            guide("20.00", (2025, 3, 16), "RJ", GuideStatus::Error),
        ];
        let result = CnabGenerator::new(LayoutConfig::itau(), company())
            .generate_at(&guides, stamp());
        assert!(matches!(result, Err(RemessaError::NoEligibleRecords)));

        let result = CnabGenerator::new(LayoutConfig::itau(), company()).generate_at(&[], stamp());
        assert!(matches!(result, Err(RemessaError::NoEligibleRecords)));
    }

    #[test]
    fn test_frozen_clock_output_is_byte_identical() {
        let guides = vec![guide("10.00", (2025, 3, 15), "SP", GuideStatus::Completed)];
        assert_eq!(generate(&guides), generate(&guides));
    }

    #[test]
    fn test_no_trailing_terminator() {
        let guides = vec![guide("10.00", (2025, 3, 15), "SP", GuideStatus::Completed)];
        let body = generate(&guides);
        assert!(!body.ends_with('\n'));
        assert!(!body.ends_with('\r'));
    }

    #[test]
    fn test_custom_layout_is_injectable() {
        let layout = LayoutConfig {
            bank_code: "999".to_string(),
            bank_name: "BANCO TESTE".to_string(),
            layout_version: "100".to_string(),
        };
        let guides = vec![guide("10.00", (2025, 3, 15), "SP", GuideStatus::Completed)];
        let body = CnabGenerator::new(layout, company())
            .generate_at(&guides, stamp())
            .unwrap();

        for record in body.split("\r\n") {
            assert_eq!(&record[..3], "999");
        }
        let header = body.split("\r\n").next().unwrap();
        assert_eq!(&header[14..17], "100");
    }

    #[test]
    fn test_strict_mode_rejects_oversized_tax_id() {
        let mut profile = company();
        profile.tax_id = "123456789012345".to_string(); // 15 digits
        let guides = vec![guide("10.00", (2025, 3, 15), "SP", GuideStatus::Completed)];

        let result = CnabGenerator::strict(LayoutConfig::itau(), profile)
            .generate_at(&guides, stamp());
        assert!(matches!(
            result,
            Err(RemessaError::FieldOverflow { field: "tax id", width: 14 })
        ));
    }

    #[test]
    fn test_strict_mode_rejects_oversized_barcode() {
        let mut g = guide("10.00", (2025, 3, 15), "SP", GuideStatus::Completed);
        g.barcode_line = "8".repeat(49);

        let result = CnabGenerator::strict(LayoutConfig::itau(), company())
            .generate_at(&[g], stamp());
        assert!(matches!(result, Err(RemessaError::FieldOverflow { .. })));
    }

    #[test]
    fn test_truncate_mode_clips_oversized_tax_id() {
        let mut profile = company();
        profile.tax_id = "123456789012345".to_string();
        let guides = vec![guide("10.00", (2025, 3, 15), "SP", GuideStatus::Completed)];

        let body = CnabGenerator::new(LayoutConfig::itau(), profile)
            .generate_at(&guides, stamp())
            .unwrap();
        let header = body.split("\r\n").next().unwrap();
        assert_eq!(&header[18..32], "12345678901234");
    }

    #[test]
    fn test_remessa_filename() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(remessa_filename(date), "SPG03050.txt");

        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(remessa_filename(date), "SPG12310.txt");
    }
}
