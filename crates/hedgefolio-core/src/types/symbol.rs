//! Instrument symbol.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Ticker symbol of an instrument (e.g. `AAPL`, `KO`).
///
/// Stored upper-case so `aapl` and `AAPL` compare equal; the hedge
/// calculator relies on this to detect a self-hedge.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Creates a symbol, trimming whitespace and upper-casing.
    pub fn new(s: impl AsRef<str>) -> Self {
        Symbol(s.as_ref().trim().to_ascii_uppercase())
    }

    /// Returns the symbol as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Symbol {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidSymbol {
                reason: "symbol is empty".to_string(),
            });
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '='))
        {
            return Err(CoreError::InvalidSymbol {
                reason: format!("'{trimmed}' contains unsupported characters"),
            });
        }
        Ok(Symbol::new(trimmed))
    }
}

impl TryFrom<String> for Symbol {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Symbol::new(s)
    }
}
