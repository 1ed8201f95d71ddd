//! CLI module for toolvet - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for listing catalog
//! tools, showing descriptors, and checking call payloads.

pub mod commands;

pub use commands::Cli;
