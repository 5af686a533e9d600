//! # Application Module
//!
//! CLI surface and command execution.

pub mod cli;
pub mod commands;

pub use cli::{Cli, CliConfig};
pub use commands::execute_command;
