//! Remessa Engine CLI
//!
//! Reads extracted payment guides and a company profile from CSV and
//! emits an Itau CNAB 240 (Sispag) remittance file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- guides.csv company.csv > remessa.txt
//! cargo run -- guides.csv company.csv out/   # writes out/SPGmmdd0.txt
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use chrono::Local;
use remessa_engine::{
    read_company, read_guides, remessa_filename, CnabGenerator, LayoutConfig, RemessaError, Result,
};
use std::env;
use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::Path;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        return Err(RemessaError::MissingArgument);
    }

    let guides = read_guides(BufReader::new(File::open(&args[1])?))?;
    let company = read_company(BufReader::new(File::open(&args[2])?))?;

    let generator = CnabGenerator::new(LayoutConfig::itau(), company);
    let body = generator.generate(&guides)?;

    match args.get(3) {
        Some(dir) => {
            let path = Path::new(dir).join(remessa_filename(Local::now().date_naive()));
            fs::write(&path, body.as_bytes())?;
            eprintln!("Wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(body.as_bytes())?;
        }
    }

    Ok(())
}
