//! Error types for market data fetches.

use thiserror::Error;

use hedgefolio_core::CoreError;

/// Result type for price source operations.
pub type FetchResult<T> = Result<T, DataFetchError>;

/// Failure to obtain prices from a market data source.
#[derive(Debug, Error)]
pub enum DataFetchError {
    /// The source has no data for the symbol.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    /// The symbol exists but has no prices in the requested range.
    #[error("no prices for {symbol} between {start} and {end}")]
    EmptyRange {
        /// Requested symbol.
        symbol: String,
        /// Range start (inclusive).
        start: String,
        /// Range end (exclusive).
        end: String,
    },

    /// Source data could not be read.
    #[error("IO error reading {path}: {message}")]
    Io {
        /// Path being read.
        path: String,
        /// Underlying error.
        message: String,
    },

    /// Source data could not be parsed.
    #[error("parse error in {source_name}: {message}")]
    Parse {
        /// File or feed being parsed.
        source_name: String,
        /// What went wrong.
        message: String,
    },

    /// Parsed data was not a valid price series or request.
    #[error("invalid data: {0}")]
    InvalidData(#[from] CoreError),
}

impl DataFetchError {
    /// Creates a parse error.
    pub fn parse(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Creates an IO error.
    pub fn io(path: impl Into<String>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
