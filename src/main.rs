//! Wallet Ledger CLI
//!
//! Loads an account snapshot and prints the accounts as CSV.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- accounts.snapshot > accounts.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `info` to control logging verbosity

use std::env;
use std::io;
use std::process;
use wallet_ledger::{LedgerError, Result, Service};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(LedgerError::MissingArgument);
    }

    let mut service = Service::new();
    service.import_from_file(&args[1])?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    service.write_accounts(handle)?;

    Ok(())
}
