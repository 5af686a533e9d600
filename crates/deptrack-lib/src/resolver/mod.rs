//! # Resolver Module
//!
//! The dependency closure pipeline: declaration parsing, graph construction,
//! transitive closure computation, and report formatting.
//!
//! ## Modules
//!
//! - [`parsing`] - Declaration line parsing
//! - [`graph`] - Dependency graph and transitive closure engine
//! - [`format`] - Closure report rendering
//! - [`source`] - Input line acquisition

pub mod format;
pub mod graph;
pub mod parsing;
pub mod source;

pub use format::format_closures;
pub use graph::{Closures, DependencyGraph, GraphError, LibraryNode};
pub use parsing::{ParseError, parse_line};
pub use source::{SourceError, collect_lines, read_lines};

use std::io::BufRead;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Any failure on the way from raw input to the final report
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Failed to parse input: {source}")]
    Parse {
        #[from]
        source: ParseError,
    },

    #[error("Failed to build dependency graph: {source}")]
    Graph {
        #[from]
        source: GraphError,
    },

    #[error("Failed to acquire input: {source}")]
    Source {
        #[from]
        source: SourceError,
    },
}

/// Build a dependency graph from declaration lines.
///
/// The graph is fully materialized before any closure computation; the first
/// malformed line or repeated declaration aborts the build.
pub fn build_graph<'a, I>(lines: I) -> Result<DependencyGraph, ResolveError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut graph = DependencyGraph::new();
    for line in lines {
        let (name, dependencies) = parse_line(line)?;
        graph.declare(&name, &dependencies)?;
    }
    Ok(graph)
}

/// Resolve already-acquired declaration lines into the formatted report.
pub fn resolve_lines<'a, I>(lines: I) -> Result<String, ResolveError>
where
    I: IntoIterator<Item = &'a str>,
{
    let graph = build_graph(lines)?;
    let closures = graph.transitive_closures();
    Ok(format_closures(&graph, &closures))
}

/// Resolve a declaration file into the formatted report.
pub fn resolve_path(path: &Path) -> Result<String, ResolveError> {
    let lines = read_lines(path)?;
    debug!(path = %path.display(), lines = lines.len(), "resolving input file");
    resolve_lines(lines.iter().map(String::as_str))
}

/// Resolve declaration lines from a buffered reader into the formatted
/// report.
pub fn resolve_reader<R: BufRead>(reader: R) -> Result<String, ResolveError> {
    let lines = collect_lines(reader)?;
    resolve_lines(lines.iter().map(String::as_str))
}
