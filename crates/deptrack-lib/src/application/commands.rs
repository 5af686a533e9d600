//! Command execution
//!
//! Wires the CLI configuration to the resolver pipeline. This is the only
//! layer using anyhow; the library modules keep their structured errors.

use crate::application::CliConfig;
use crate::logger::Logger;
use crate::resolver;
use anyhow::{Context, Result};

/// Run the resolve pipeline for the loaded configuration and print the
/// closure report to stdout.
pub fn execute_command(config: CliConfig) -> Result<()> {
    Logger::init(config.logger)?;

    let report = resolver::resolve_path(&config.input)
        .with_context(|| format!("failed to resolve {}", config.input.display()))?;
    println!("{report}");
    Ok(())
}
