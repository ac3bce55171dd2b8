//! Crate-level error types.

use std::fmt;

/// Errors produced by the strider crate.
#[derive(Debug)]
pub enum StriderError {
    /// Terrain height query failure.
    ///
    /// Never swallowed: a guessed height would silently break the grounded
    /// invariant (the viewpoint floats or falls through the surface).
    HeightQuery(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for StriderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeightQuery(msg) => {
                write!(f, "height query error: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for StriderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StriderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
