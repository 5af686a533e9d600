//! Declaration line parsing
//!
//! One line declares one library: `"<name> depends on <dep> [<dep> ...]"`.
//! Names are arbitrary non-whitespace tokens; the dependency list has no
//! length limit.

use std::collections::HashSet;
use thiserror::Error;

/// Errors raised while parsing a declaration line
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Malformed line: {line:?}. Expected format: '<name> depends on <dep> [<dep> ...]'")]
    MalformedLine { line: String },
}

/// Parse one declaration line into its library name and immediate
/// dependency list.
///
/// Duplicate dependency tokens within the line are dropped, first occurrence
/// wins. Fails when the `depends on` connective is missing or misplaced, the
/// name is missing, the dependency list is empty, or the line is blank.
pub fn parse_line(line: &str) -> Result<(String, Vec<String>), ParseError> {
    let malformed = || ParseError::MalformedLine {
        line: line.to_string(),
    };

    let mut tokens = line.split_whitespace();
    let name = tokens.next().ok_or_else(malformed)?;
    if tokens.next() != Some("depends") || tokens.next() != Some("on") {
        return Err(malformed());
    }

    let mut dependencies = Vec::new();
    let mut seen = HashSet::new();
    for token in tokens {
        if seen.insert(token) {
            dependencies.push(token.to_string());
        }
    }
    if dependencies.is_empty() {
        return Err(malformed());
    }

    Ok((name.to_string(), dependencies))
}

#[cfg(test)]
mod tests {
    include!("parsing.test.rs");
}
