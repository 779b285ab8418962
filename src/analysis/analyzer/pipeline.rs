//! Pipeline analyzer that combines tokenizers and filters.
//!
//! The pipeline tokenizes the input and then applies its token filters in
//! the order they were added.
//!
//! # Examples
//!
//! ```
//! use pinyin_transform::analysis::analyzer::analyzer::Analyzer;
//! use pinyin_transform::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use pinyin_transform::analysis::token_filter::pinyin::PinyinTransformFilter;
//! use pinyin_transform::analysis::tokenizer::WhitespaceTokenizer;
//! use std::sync::Arc;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
//!     .add_filter(Arc::new(PinyinTransformFilter::new()))
//!     .with_name("chinese_search");
//!
//! let tokens: Vec<_> = analyzer.analyze("银行 CBSi").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "银行");
//! assert_eq!(tokens[1].kind(), "pinyin");
//! assert_eq!(tokens[2].text, "CBSi");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// The custom name of this analyzer.
    pub fn pipeline_name(&self) -> &str {
        &self.name
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        // The custom name is not 'static; see `pipeline_name`.
        "pipeline"
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::pinyin::VariantMode;
    use crate::analysis::token::Token;
    use crate::analysis::token_filter::pinyin::{PinyinTransformConfig, PinyinTransformFilter};
    use crate::analysis::tokenizer::{UnicodeWordTokenizer, WhitespaceTokenizer};

    #[test]
    fn test_pipeline_without_filters() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()));
        let tokens: Vec<Token> = analyzer.analyze("中国 银行").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(analyzer.pipeline_name(), "pipeline_whitespace");
        assert!(analyzer.filters().is_empty());
    }

    #[test]
    fn test_pipeline_with_pinyin_filter() {
        let config = PinyinTransformConfig {
            emit_original: false,
            variant_mode: VariantMode::Initials,
            ..Default::default()
        };
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(PinyinTransformFilter::from_config(config).unwrap()))
            .with_name("initials");

        let tokens: Vec<Token> = analyzer.analyze("中国 hello 北京").unwrap().collect();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();

        // Without originals, tokens that have no variants disappear.
        assert_eq!(texts, vec!["zg", "bj"]);
        assert_eq!(analyzer.pipeline_name(), "initials");
    }

    #[test]
    fn test_unicode_word_tokenizer_splits_below_threshold() {
        // Word-boundary segmentation yields single ideographs, which stay
        // under the default two-character threshold.
        let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(PinyinTransformFilter::new()));

        let tokens: Vec<Token> = analyzer.analyze("中国").unwrap().collect();
        assert!(tokens.iter().all(|t| t.kind() != "pinyin"));
    }

    #[test]
    fn test_debug_lists_filters() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(PinyinTransformFilter::new()));
        let debug = format!("{analyzer:?}");

        assert!(debug.contains("whitespace"));
        assert!(debug.contains("pinyin_transform"));
    }
}
