//! Error types for the pinyin-transform library.
//!
//! All errors are represented by the [`PinyinTransformError`] enum. Errors
//! raised while expanding a single token are recovered inside the pinyin
//! filter and never reach the consumer of the token stream; the variants
//! here surface configuration problems, upstream failures and misuse of the
//! stream protocol.
//!
//! # Examples
//!
//! ```
//! use pinyin_transform::error::{PinyinTransformError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PinyinTransformError::invalid_config("variant_mode must be 1, 2 or 3"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for pinyin-transform operations.
#[derive(Error, Debug)]
pub enum PinyinTransformError {
    /// I/O errors (reading dictionaries, stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A romanizer could not produce a reading for a run of Chinese text
    #[error("Romanization error: {0}")]
    Romanization(String),

    /// Phrase dictionary errors (malformed entries, bad syllables)
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Invalid construction-time configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Invalid operation (e.g. pulling from a finished stream)
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with PinyinTransformError.
pub type Result<T> = std::result::Result<T, PinyinTransformError>;

impl PinyinTransformError {
    /// Create a new romanization error.
    pub fn romanization<S: Into<String>>(msg: S) -> Self {
        PinyinTransformError::Romanization(msg.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        PinyinTransformError::Dictionary(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        PinyinTransformError::Configuration(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        PinyinTransformError::InvalidOperation(msg.into())
    }

    /// Whether this error was caused by invalid configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            PinyinTransformError::Configuration(_) | PinyinTransformError::Dictionary(_)
        )
    }
}
