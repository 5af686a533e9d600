//! # deptrack Library
//!
//! Library dependency closure tracking.
//!
//! Reads adjacency-list declarations (`"X depends on Y Z"`, one per line),
//! computes every declared library's full transitive dependency set while
//! expanding shared sub-dependencies once and collapsing dependency cycles
//! without looping, and renders the result as sorted, deduplicated report
//! lines.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types and shared errors
//! - [`logger`] - Structured logging setup
//! - [`resolver`] - Parsing, graph construction, closure engine, formatting
//! - [`application`] - CLI interface and command execution
//!
//! ## Quick Start
//!
//! ```
//! let report = deptrack_lib::resolve_lines([
//!     "X depends on Y R",
//!     "Y depends on Z",
//! ])
//! .unwrap();
//! assert_eq!(report, "X depends on R Y Z\nY depends on Z");
//! ```

pub mod application;
pub mod logger;
pub mod primitives;
pub mod resolver;

// Re-export commonly used types for convenience
pub use application::{Cli, CliConfig, execute_command};
pub use logger::Logger;
pub use primitives::{LogLevel, LogOutput, LoggerConfig, LoggerError};
pub use resolver::{
    Closures, DependencyGraph, GraphError, LibraryNode, ParseError, ResolveError, SourceError,
    format_closures, parse_line, resolve_lines, resolve_path, resolve_reader,
};

use anyhow::Result;

/// Load the CLI configuration and run the resolver end to end.
pub fn main() -> Result<()> {
    let config = CliConfig::load();
    execute_command(config)
}
