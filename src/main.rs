//! Contact Registry - Main entry point
//!
//! Reads one JSON contact per stdin line, registers each one, and prints the
//! resulting registry as a JSON array on stdout. Rejections are logged to stderr.

use anyhow::{Context, Result};
use contact_registry::{import_contacts, write_contacts, Config, ContactRegistry};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging (stderr only; stdout carries the JSON result)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        phone_length = config.phone_length,
        phone_prefix = %config.phone_prefix,
        "Configuration loaded"
    );

    let registry = ContactRegistry::with_rules(config.phone_rules());

    let report = import_contacts(io::stdin().lock(), &registry)
        .context("Failed to read stdin")?;
    info!(
        registered = report.registered,
        duplicates = report.duplicates,
        invalid = report.invalid,
        malformed = report.malformed,
        "Import finished"
    );
    info!("{}", registry.metrics().summary());

    write_contacts(io::stdout().lock(), &registry)
        .context("Failed to write contacts")?;

    Ok(())
}
