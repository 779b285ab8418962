//! Core analyzer trait definition.
//!
//! An analyzer is a complete text processing pipeline:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`](super::pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains
//! - [`PinyinAnalyzer`](super::pinyin::PinyinAnalyzer) - Whitespace tokenization with pinyin expansion
//!
//! # Examples
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use pinyin_transform::analysis::analyzer::analyzer::Analyzer;
//! use pinyin_transform::analysis::token::TokenStream;
//! use pinyin_transform::error::Result;
//!
//! struct MyAnalyzer;
//!
//! impl Analyzer for MyAnalyzer {
//!     fn analyze(&self, text: &str) -> Result<TokenStream> {
//!         Ok(Box::new(std::iter::empty()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "my_analyzer"
//!     }
//! }
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so one analyzer can serve many threads;
/// each call to [`analyze`](Self::analyze) produces an independent stream.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use pinyin_transform::analysis::analyzer::analyzer::Analyzer;
    /// use pinyin_transform::analysis::analyzer::pinyin::PinyinAnalyzer;
    ///
    /// let analyzer = PinyinAnalyzer::new();
    /// let tokens: Vec<_> = analyzer.analyze("中国").unwrap().collect();
    ///
    /// assert_eq!(tokens[0].text, "中国");
    /// assert_eq!(tokens[1].text, "zhongguo");
    /// ```
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
