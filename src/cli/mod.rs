//! CLI module for fieldcheck
//!
//! Provides command-line interface for:
//! - validate: check one record against a schema
//! - schemas: list registered schemas
//! - check-schema: verify a schema file

mod args;
mod commands;
mod io;
mod logging;

pub use args::{Cli, Command};
pub use commands::{build_registry, check_schema, run_command, schemas, validate, Outcome};
pub use io::{read_record, write_error, write_response};

use crate::config::Config;
use crate::error::Result;

/// Parses arguments, loads configuration, installs logging, and runs the command.
pub fn run() -> Result<Outcome> {
    let cli = Cli::parse_args();
    let config = Config::load(&cli.config)?;
    logging::init(&config);
    run_command(cli.command, &config)
}
