//! Analyzer preset for searching Chinese text with pinyin.
//!
//! # Pipeline
//!
//! 1. WhitespaceTokenizer
//! 2. PinyinTransformFilter
//!
//! # Examples
//!
//! ```
//! use pinyin_transform::analysis::analyzer::analyzer::Analyzer;
//! use pinyin_transform::analysis::analyzer::pinyin::PinyinAnalyzer;
//!
//! let analyzer = PinyinAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("中国 CBSi").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "中国");
//! assert_eq!(tokens[1].text, "zhongguo");
//! assert_eq!(tokens[2].text, "CBSi");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::pinyin::{PinyinTransformConfig, PinyinTransformFilter};
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::Result;

/// Whitespace tokenization followed by pinyin expansion.
pub struct PinyinAnalyzer {
    inner: PipelineAnalyzer,
}

impl PinyinAnalyzer {
    /// Create an analyzer with the default pinyin settings.
    pub fn new() -> Self {
        Self::with_filter(PinyinTransformFilter::new())
    }

    /// Create an analyzer from a filter configuration.
    pub fn from_config(config: PinyinTransformConfig) -> Result<Self> {
        Ok(Self::with_filter(PinyinTransformFilter::from_config(config)?))
    }

    /// Create an analyzer with a custom tokenizer in front of the filter.
    pub fn with_tokenizer(
        tokenizer: Arc<dyn Tokenizer>,
        config: PinyinTransformConfig,
    ) -> Result<Self> {
        let filter = PinyinTransformFilter::from_config(config)?;
        let inner = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(filter))
            .with_name("pinyin");
        Ok(PinyinAnalyzer { inner })
    }

    fn with_filter(filter: PinyinTransformFilter) -> Self {
        let inner = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(filter))
            .with_name("pinyin");
        PinyinAnalyzer { inner }
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for PinyinAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for PinyinAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "pinyin"
    }
}

impl std::fmt::Debug for PinyinAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinyinAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
