//! Pull-based token sources.
//!
//! A [`TokenSource`] is the upstream end of a resettable token pipeline: the
//! consumer pulls one token at a time and may rewind the source to replay the
//! stream. The pinyin filter stream is itself a `TokenSource`, so sources
//! and filters chain.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use pinyin_transform::analysis::source::{TokenSource, TokenizerSource};
//! use pinyin_transform::analysis::tokenizer::WhitespaceTokenizer;
//!
//! let mut source = TokenizerSource::new(Arc::new(WhitespaceTokenizer::new()), "中国 银行").unwrap();
//! assert_eq!(source.next_token().unwrap().unwrap().text, "中国");
//! assert_eq!(source.next_token().unwrap().unwrap().text, "银行");
//! assert!(source.next_token().unwrap().is_none());
//!
//! source.reset().unwrap();
//! assert_eq!(source.next_token().unwrap().unwrap().text, "中国");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{PinyinTransformError, Result};

/// Trait for pull-based, resettable token producers.
pub trait TokenSource {
    /// Pull the next token, or `None` at the end of the stream.
    fn next_token(&mut self) -> Result<Option<Token>>;

    /// Rewind to the beginning of the stream.
    fn reset(&mut self) -> Result<()>;
}

impl<S: TokenSource + ?Sized> TokenSource for Box<S> {
    fn next_token(&mut self) -> Result<Option<Token>> {
        (**self).next_token()
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}

/// An in-memory list of tokens that can be replayed.
#[derive(Clone, Debug, Default)]
pub struct VecTokenSource {
    tokens: Vec<Token>,
    cursor: usize,
}

impl VecTokenSource {
    /// Create a source over `tokens`.
    pub fn new(tokens: Vec<Token>) -> Self {
        VecTokenSource { tokens, cursor: 0 }
    }
}

impl TokenSource for VecTokenSource {
    fn next_token(&mut self) -> Result<Option<Token>> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        Ok(token)
    }

    fn reset(&mut self) -> Result<()> {
        self.cursor = 0;
        Ok(())
    }
}

/// Tokenizes a text and replays it on reset.
pub struct TokenizerSource {
    tokenizer: Arc<dyn Tokenizer>,
    text: String,
    tokens: TokenStream,
}

impl TokenizerSource {
    /// Create a source that tokenizes `text` with `tokenizer`.
    pub fn new<S: Into<String>>(tokenizer: Arc<dyn Tokenizer>, text: S) -> Result<Self> {
        let text = text.into();
        let tokens = tokenizer.tokenize(&text)?;
        Ok(TokenizerSource {
            tokenizer,
            text,
            tokens,
        })
    }

    /// Replace the input text and rewind.
    pub fn set_text<S: Into<String>>(&mut self, text: S) -> Result<()> {
        self.text = text.into();
        self.reset()
    }

    /// The current input text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl TokenSource for TokenizerSource {
    fn next_token(&mut self) -> Result<Option<Token>> {
        Ok(self.tokens.next())
    }

    fn reset(&mut self) -> Result<()> {
        self.tokens = self.tokenizer.tokenize(&self.text)?;
        Ok(())
    }
}

impl fmt::Debug for TokenizerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenizerSource")
            .field("tokenizer", &self.tokenizer.name())
            .field("text", &self.text)
            .finish()
    }
}

/// Adapts a one-shot [`TokenStream`]. It cannot be rewound.
pub struct StreamSource {
    tokens: TokenStream,
}

impl StreamSource {
    /// Wrap a token stream.
    pub fn new(tokens: TokenStream) -> Self {
        StreamSource { tokens }
    }
}

impl TokenSource for StreamSource {
    fn next_token(&mut self) -> Result<Option<Token>> {
        Ok(self.tokens.next())
    }

    fn reset(&mut self) -> Result<()> {
        Err(PinyinTransformError::invalid_operation(
            "a one-shot token stream cannot be reset",
        ))
    }
}

impl fmt::Debug for StreamSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamSource").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::IntoTokenStream;
    use crate::analysis::tokenizer::WhitespaceTokenizer;

    #[test]
    fn test_vec_source_replays() {
        let mut source = VecTokenSource::new(vec![Token::new("a", 0), Token::new("b", 1)]);

        assert_eq!(source.next_token().unwrap().unwrap().text, "a");
        assert_eq!(source.next_token().unwrap().unwrap().text, "b");
        assert!(source.next_token().unwrap().is_none());
        assert!(source.next_token().unwrap().is_none());

        source.reset().unwrap();
        assert_eq!(source.next_token().unwrap().unwrap().text, "a");
    }

    #[test]
    fn test_tokenizer_source_set_text() {
        let mut source = TokenizerSource::new(Arc::new(WhitespaceTokenizer::new()), "中国").unwrap();
        assert_eq!(source.next_token().unwrap().unwrap().text, "中国");
        assert!(source.next_token().unwrap().is_none());

        source.set_text("银行 卡").unwrap();
        assert_eq!(source.text(), "银行 卡");
        assert_eq!(source.next_token().unwrap().unwrap().text, "银行");
        assert_eq!(source.next_token().unwrap().unwrap().text, "卡");
    }

    #[test]
    fn test_stream_source_cannot_reset() {
        let mut source = StreamSource::new(vec![Token::new("x", 0)].into_token_stream());
        assert_eq!(source.next_token().unwrap().unwrap().text, "x");
        assert!(source.next_token().unwrap().is_none());
        assert!(matches!(
            source.reset(),
            Err(PinyinTransformError::InvalidOperation(_))
        ));
    }
}
