//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - list: list tools in the catalog
//! - show: print a tool's descriptor
//! - check: validate a call payload against a tool's schema

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Toolvet - vet MCP tool call payloads against their descriptors
#[derive(Parser, Debug)]
#[command(name = "toolvet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Descriptor file or directory, overriding the config
    #[arg(short = 't', long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List tools in the catalog
    List,

    /// Print a tool's descriptor as wire JSON
    Show {
        /// Tool name to show
        tool: String,
    },

    /// Validate a call payload against a tool's input schema
    Check {
        /// Tool name to check against
        tool: String,

        /// Payload as inline JSON, or @path to read it from a file
        payload: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_list() {
        let cli = Cli::try_parse_from(["toolvet", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List));
        assert!(!cli.is_verbose());
    }

    #[test]
    fn test_cli_parses_show() {
        let cli = Cli::try_parse_from(["toolvet", "show", "ping"]).unwrap();
        assert!(matches!(cli.command, Commands::Show { ref tool } if tool == "ping"));
    }

    #[test]
    fn test_cli_parses_check_with_globals() {
        let cli = Cli::try_parse_from([
            "toolvet",
            "--verbose",
            "--catalog",
            "descriptors",
            "check",
            "ping",
            r#"{"message": "hi"}"#,
        ])
        .unwrap();

        assert!(cli.is_verbose());
        assert_eq!(cli.catalog.as_deref(), Some(std::path::Path::new("descriptors")));
        match cli.command {
            Commands::Check { ref tool, ref payload } => {
                assert_eq!(tool, "ping");
                assert!(payload.contains("message"));
            }
            _ => panic!("expected check subcommand"),
        }
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["toolvet"]).is_err());
    }
}
