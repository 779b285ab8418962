//! Analyzer implementations that combine tokenizers and filters.

pub mod analyzer;
pub mod pinyin;
pub mod pipeline;

pub use analyzer::Analyzer;
pub use pinyin::PinyinAnalyzer;
pub use pipeline::PipelineAnalyzer;
