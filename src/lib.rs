//! # Remessa Engine
//!
//! Generates Itau CNAB 240 (Sispag) remittance files for batches of GNRE
//! state tax guides.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: amounts carry exactly 2 decimal places
//!   via `rust_decimal`; cents conversion rounds half away from zero
//! - **Byte-exact output**: every record is exactly 240 characters,
//!   records are CRLF-joined with no trailing terminator
//! - **Pure generation**: the codec maps in-memory guides to an in-memory
//!   file body; the generation timestamp is sampled once per call
//! - **All-or-nothing**: a malformed eligible guide or an empty eligible
//!   set fails the run, never a partial file
//!
//! ## Example
//!
//! ```no_run
//! use remessa_engine::{read_guides, CnabGenerator, LayoutConfig};
//! use std::io::Cursor;
//!
//! let csv = "barcode,amount,due_date,state,status\n\
//!            8589000002184616282926002407031907787022,1234.56,15/03/2025,SP,completed\n";
//! let guides = read_guides(Cursor::new(csv)).unwrap();
//! let company = remessa_engine::read_company(Cursor::new(
//!     "name,tax_id,bank_agency,bank_account,check_digit\nACME LTDA,03781919000158,01529,70940,2\n",
//! ))
//! .unwrap();
//!
//! let body = CnabGenerator::new(LayoutConfig::itau(), company)
//!     .generate(&guides)
//!     .unwrap();
//! ```

pub mod company;
pub mod decimal;
pub mod error;
pub mod format;
pub mod generator;
pub mod guide;

pub use company::{read_company, CompanyProfile};
pub use decimal::Decimal2;
pub use error::{RemessaError, Result};
pub use generator::{remessa_filename, CnabGenerator, LayoutConfig, OverflowPolicy};
pub use guide::{read_guides, GuideRecord, GuideStatus, PaymentGuide};
