//! Text analysis module.
//!
//! Tokenizers split text into tokens, the pinyin token filter stacks
//! romanized variants on Chinese tokens, and analyzers tie both into one
//! pipeline.

pub mod analyzer;
pub mod pinyin;
pub mod source;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use source::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
