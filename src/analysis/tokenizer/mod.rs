//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split raw text into the tokens that feed the pinyin filter.
//! Every tokenizer tags its tokens with a [`TokenType`] computed by
//! [`classify`], so Chinese tokens arrive as [`TokenType::Cjk`].

use crate::analysis::token::{TokenStream, TokenType};
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Classify a word by the scripts it contains.
///
/// - All numeric → Num
/// - All Hiragana → Hiragana
/// - All Katakana → Katakana
/// - Contains Hangul → Hangul
/// - Contains CJK → Cjk
/// - ASCII alphanumeric → Alphanum
/// - All punctuation → Punctuation
/// - Otherwise → Other
pub fn classify(word: &str) -> TokenType {
    if word.is_empty() {
        return TokenType::Other;
    }

    if word.chars().all(|c| c.is_numeric()) {
        return TokenType::Num;
    }

    if word.chars().all(|c| matches!(c, '\u{3040}'..='\u{309F}')) {
        return TokenType::Hiragana;
    }

    if word.chars().all(|c| matches!(c, '\u{30A0}'..='\u{30FF}')) {
        return TokenType::Katakana;
    }

    if word
        .chars()
        .any(|c| matches!(c, '\u{AC00}'..='\u{D7AF}' | '\u{1100}'..='\u{11FF}'))
    {
        return TokenType::Hangul;
    }

    if word.chars().any(|c| {
        matches!(c,
            '\u{4E00}'..='\u{9FFF}' |  // CJK Unified Ideographs
            '\u{3400}'..='\u{4DBF}' |  // CJK Extension A
            '\u{20000}'..='\u{2A6DF}' | // CJK Extension B
            '\u{2A700}'..='\u{2B73F}' | // CJK Extension C
            '\u{2B740}'..='\u{2B81F}' | // CJK Extension D
            '\u{2B820}'..='\u{2CEAF}'   // CJK Extension E
        )
    }) {
        return TokenType::Cjk;
    }

    if word
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return TokenType::Alphanum;
    }

    if word.chars().all(|c| c.is_ascii_punctuation()) {
        return TokenType::Punctuation;
    }

    TokenType::Other
}

// Individual tokenizer modules
pub mod unicode_word;
pub mod whitespace;
pub mod whole;

// Re-export all tokenizers for convenient access
pub use unicode_word::UnicodeWordTokenizer;
pub use whitespace::WhitespaceTokenizer;
pub use whole::WholeTokenizer;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("中国"), TokenType::Cjk);
        assert_eq!(classify("CBSi"), TokenType::Alphanum);
        assert_eq!(classify("2024"), TokenType::Num);
        assert_eq!(classify("あすから"), TokenType::Hiragana);
        assert_eq!(classify("カタカナ"), TokenType::Katakana);
        assert_eq!(classify("한국"), TokenType::Hangul);
        assert_eq!(classify("!?"), TokenType::Punctuation);
        assert_eq!(classify("中華人民共和國凪のあすから我们，。"), TokenType::Cjk);
        assert_eq!(classify(""), TokenType::Other);
    }
}
