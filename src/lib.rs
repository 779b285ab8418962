//! # pinyin-transform
//!
//! A token filter that makes Chinese text searchable by pinyin.
//!
//! Tokens containing Chinese characters are expanded into romanized
//! variants (full syllables, initials or both) stacked on the original
//! token's position, so a query like `zhongguo` or `zg` matches `中国`.
//!
//! ## Features
//!
//! - Pull-based, resettable filter stream ([`analysis::source::TokenSource`])
//! - Phrase dictionary and heteronym (all readings) romanization
//! - Configurable from JSON or factory-style string arguments
//! - Drop-in [`analysis::token_filter::Filter`] for analyzer pipelines

pub mod analysis;
pub mod cli;
pub mod error;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, PinyinAnalyzer, PipelineAnalyzer};
    pub use crate::analysis::pinyin::{PhraseDictionary, Romanizer, RomanizerKind, VariantMode};
    pub use crate::analysis::source::{TokenSource, TokenizerSource, VecTokenSource};
    pub use crate::analysis::token::{Token, TokenStream, TokenType};
    pub use crate::analysis::token_filter::Filter;
    pub use crate::analysis::token_filter::pinyin::{
        PinyinTransformConfig, PinyinTransformFilter, PinyinTransformStream,
    };
    pub use crate::error::{PinyinTransformError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
