//! CLI argument definitions using clap
//!
//! Commands:
//! - fieldcheck validate --schema <name|path> [--record <path>]
//! - fieldcheck schemas
//! - fieldcheck check-schema <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fieldcheck - declarative JSON record validation
#[derive(Parser, Debug)]
#[command(name = "fieldcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, default_value = "./fieldcheck.json")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate one JSON record
    Validate {
        /// Registered schema name, or path to a schema file
        #[arg(long)]
        schema: String,

        /// Record file; reads stdin when omitted
        #[arg(long)]
        record: Option<PathBuf>,
    },

    /// List registered schema names
    Schemas,

    /// Check that a schema file is well formed
    CheckSchema {
        /// Path to schema file
        path: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validate() {
        let cli = Cli::try_parse_from([
            "fieldcheck",
            "validate",
            "--schema",
            "customer",
            "--record",
            "payload.json",
        ])
        .unwrap();

        assert_eq!(cli.config, PathBuf::from("./fieldcheck.json"));
        match cli.command {
            Command::Validate { schema, record } => {
                assert_eq!(schema, "customer");
                assert_eq!(record, Some(PathBuf::from("payload.json")));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli =
            Cli::try_parse_from(["fieldcheck", "schemas", "--config", "/etc/fc.json"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("/etc/fc.json"));
        assert!(matches!(cli.command, Command::Schemas));
    }

    #[test]
    fn test_validate_requires_schema() {
        assert!(Cli::try_parse_from(["fieldcheck", "validate"]).is_err());
    }
}
