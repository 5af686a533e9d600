//! Closure report rendering

use crate::resolver::graph::{Closures, DependencyGraph};

/// Render the closure table as the final report.
///
/// One line per declared library, in declaration order:
/// `"<name> depends on <dep> ..."` with the closure members sorted ascending
/// and space-joined. Lines are newline-joined with no trailing newline. A
/// library whose closure is empty renders as `"<name> depends on"` with no
/// trailing space.
pub fn format_closures(graph: &DependencyGraph, closures: &Closures) -> String {
    let mut lines = Vec::new();
    for name in graph.declared_names() {
        let line = match closures.get(name) {
            Some(deps) if !deps.is_empty() => {
                let joined = deps
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("{name} depends on {joined}")
            }
            _ => format!("{name} depends on"),
        };
        lines.push(line);
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    include!("format.test.rs");
}
