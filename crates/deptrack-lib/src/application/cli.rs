//! CLI surface

use crate::primitives::{LogLevel, LogOutput, LoggerConfig};
use clap::Parser;
use std::path::PathBuf;

/// deptrack CLI - library dependency closure tracking
#[derive(Debug, Clone, Parser)]
#[command(name = "deptrack")]
#[command(about = "Flatten library dependency declarations into full transitive closures")]
#[command(version)]
pub struct Cli {
    /// Input file of declaration lines
    #[arg(help = "Input file with one '<name> depends on <dep> ...' line per library")]
    pub input: PathBuf,

    /// Log verbosity
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Increase log verbosity (-v warnings, -vv info, -vvv debug, -vvvv trace)"
    )]
    pub verbose: u8,

    /// Log output stream
    #[arg(long, value_enum, default_value = "stderr", help = "Stream for log output")]
    pub log_output: LogOutput,
}

/// Configuration loaded from the CLI
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub input: PathBuf,
    pub logger: LoggerConfig,
}

impl CliConfig {
    /// Load configuration from command line arguments
    pub fn load() -> Self {
        Self::from_cli(Cli::parse())
    }

    /// Build configuration from already-parsed arguments
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            input: cli.input,
            logger: LoggerConfig {
                level: LogLevel::from_verbosity(cli.verbose),
                output: cli.log_output,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
