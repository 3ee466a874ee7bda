//! fieldcheck CLI entry point
//!
//! Exit codes:
//! - 0: record accepted / command succeeded
//! - 1: configuration, schema, or I/O failure
//! - 2: record rejected by its schema
//!
//! All logic is delegated to the CLI module.

use fieldcheck::cli;

fn main() {
    match cli::run() {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("{}: {}", e.code(), e);
            std::process::exit(1);
        }
    }
}
