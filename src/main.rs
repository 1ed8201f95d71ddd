use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use log::info;
use std::fs;
use std::path::PathBuf;

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::Config;

use toolvet::catalog::ToolCatalog;
use toolvet::review::submit_review_descriptor;
use toolvet::validate::validate;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toolvet")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("toolvet.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// Resolve the catalog to operate on: CLI override, then config, then the
/// built-in GitHub review descriptor.
fn load_catalog(cli: &Cli, config: &Config) -> Result<ToolCatalog> {
    if let Some(path) = &cli.catalog {
        let catalog = if path.is_dir() {
            ToolCatalog::from_dir(path)
        } else {
            ToolCatalog::from_file(path)
        };
        return catalog.map_err(|e| eyre!("{}", e));
    }

    if let Some(path) = &config.catalog.path {
        return ToolCatalog::from_file(path).map_err(|e| eyre!("{}", e));
    }

    if let Some(dir) = &config.catalog.dir {
        return ToolCatalog::from_dir(dir).map_err(|e| eyre!("{}", e));
    }

    info!("No catalog configured, using built-in descriptors");
    let mut catalog = ToolCatalog::new();
    catalog
        .register(submit_review_descriptor())
        .map_err(|e| eyre!("{}", e))?;
    Ok(catalog)
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    let catalog = load_catalog(cli, config)?;
    info!(
        "Catalog snapshot at {} with {} tool(s)",
        catalog.loaded_at(),
        catalog.len()
    );

    match &cli.command {
        Commands::List => handle_list_command(&catalog),
        Commands::Show { tool } => handle_show_command(&catalog, tool),
        Commands::Check { tool, payload } => handle_check_command(&catalog, tool, payload),
    }
}

fn handle_list_command(catalog: &ToolCatalog) -> Result<()> {
    info!("Listing {} catalog tool(s)", catalog.len());

    if catalog.is_empty() {
        println!("{}", "Catalog is empty".yellow());
        return Ok(());
    }

    for name in catalog.list() {
        let descriptor = catalog
            .get(name)
            .ok_or_else(|| eyre!("Catalog lost tool '{}' mid-listing", name))?;

        let title = descriptor
            .annotations
            .as_ref()
            .map(|annotations| annotations.title.as_str())
            .unwrap_or("-");
        let access = if descriptor.read_only() {
            "read-only".green()
        } else {
            "mutating".red()
        };

        println!("{}  {}  [{}]", name.cyan(), title, access);
    }

    Ok(())
}

fn handle_show_command(catalog: &ToolCatalog, tool: &str) -> Result<()> {
    info!("Showing descriptor for: {}", tool);

    let descriptor = catalog
        .get(tool)
        .ok_or_else(|| eyre!("Tool '{}' not found in catalog", tool))?;

    let json = serde_json::to_string_pretty(descriptor).context("Failed to serialize descriptor")?;
    println!("{}", json);
    println!("{} {}", "fingerprint:".cyan(), descriptor.fingerprint());

    Ok(())
}

fn handle_check_command(catalog: &ToolCatalog, tool: &str, payload: &str) -> Result<()> {
    info!("Checking payload for: {}", tool);

    let descriptor = catalog
        .get(tool)
        .ok_or_else(|| eyre!("Tool '{}' not found in catalog", tool))?;

    let raw = read_payload(payload)?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).context("Payload is not valid JSON")?;

    match validate(descriptor, &value) {
        Ok(call) => {
            println!("{} {}", "valid:".green(), tool);
            for (name, arg) in &call.args {
                let rendered = serde_json::to_string(arg).unwrap_or_else(|_| "?".to_string());
                println!("  {} = {}", name.cyan(), rendered);
            }
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "invalid:".red(), e);
            Err(eyre!("Payload rejected: {}", e))
        }
    }
}

/// Payloads are inline JSON, or @path to read a file
fn read_payload(payload: &str) -> Result<String> {
    if let Some(path) = payload.strip_prefix('@') {
        return fs::read_to_string(path).context(format!("Failed to read payload file {}", path));
    }
    Ok(payload.to_string())
}

fn main() -> Result<()> {
    setup_logging()?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref())?;

    run_application(&cli, &config)
}
