//! Pinyin transform filter.
//!
//! Expands tokens that contain Chinese text into romanized (pinyin) variants
//! stacked on the original token's position, so that text typed in Latin
//! letters matches Chinese text in the index.
//!
//! For each upstream token the stream emits, in order:
//!
//! 1. the original token, unchanged (unless `emit_original` is off);
//! 2. one token per distinct variant, typed [`TokenType::Pinyin`], with the
//!    original's offsets and a position increment of zero.
//!
//! Tokens with fewer than `min_chinese_chars` Chinese characters produce no
//! variants. A romanization failure is logged and treated the same way; it
//! never ends the stream.
//!
//! # Examples
//!
//! ```
//! use pinyin_transform::analysis::token::Token;
//! use pinyin_transform::analysis::token_filter::Filter;
//! use pinyin_transform::analysis::token_filter::pinyin::{PinyinTransformConfig, PinyinTransformFilter};
//! use pinyin_transform::analysis::pinyin::VariantMode;
//!
//! let config = PinyinTransformConfig {
//!     variant_mode: VariantMode::Both,
//!     ..Default::default()
//! };
//! let filter = PinyinTransformFilter::from_config(config).unwrap();
//!
//! let tokens = vec![Token::with_offsets("中国", 0, 0, 6)];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! assert_eq!(result.len(), 3);
//! assert_eq!(result[0].text, "中国");
//! assert!(result[1..].iter().any(|t| t.text == "zhongguo"));
//! assert!(result[1..].iter().any(|t| t.text == "zg"));
//! assert!(result[1..].iter().all(|t| t.position_increment == 0 && t.kind() == "pinyin"));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::analysis::pinyin::dictionary::PhraseDictionary;
use crate::analysis::pinyin::expander::{VariantExpander, VariantIter, VariantMode};
use crate::analysis::pinyin::romanizer::{Romanizer, RomanizerKind};
use crate::analysis::pinyin::scanner::chinese_char_count;
use crate::analysis::source::{StreamSource, TokenSource};
use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::token_filter::Filter;
use crate::error::{PinyinTransformError, Result};

/// Construction-time settings of the pinyin filter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PinyinTransformConfig {
    /// Re-emit the original token before its variants (default: true).
    pub emit_original: bool,

    /// Which romanized forms to produce (default: full).
    pub variant_mode: VariantMode,

    /// Minimum number of Chinese characters a token needs before it is
    /// expanded (default: 2). Values below 1 are treated as 1.
    #[serde(deserialize_with = "deserialize_min_chinese_chars")]
    pub min_chinese_chars: usize,

    /// Built-in romanization backend (default: dictionary).
    pub romanizer: RomanizerKind,

    /// Optional phrase dictionary file (JSON).
    pub dictionary: Option<PathBuf>,

    /// Optional cap on the number of combinatorial candidates per pass.
    /// Must be at least 1.
    #[serde(deserialize_with = "deserialize_max_combinations")]
    pub max_combinations: Option<usize>,
}

impl Default for PinyinTransformConfig {
    fn default() -> Self {
        PinyinTransformConfig {
            emit_original: true,
            variant_mode: VariantMode::Full,
            min_chinese_chars: 2,
            romanizer: RomanizerKind::Dictionary,
            dictionary: None,
            max_combinations: None,
        }
    }
}

impl PinyinTransformConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PinyinTransformError::invalid_config(e.to_string()))
    }

    /// Parse a configuration from string arguments, as handed over by a
    /// filter factory. Unknown keys are rejected.
    ///
    /// Keys: `emit_original`, `variant_mode` (`1|2|3` or `full|initials|both`),
    /// `min_chinese_chars`, `romanizer` (`dictionary|heteronym`), `dictionary`
    /// (path) and `max_combinations`.
    pub fn from_args(args: &HashMap<String, String>) -> Result<Self> {
        let mut args = args.clone();
        let mut config = PinyinTransformConfig::default();

        if let Some(value) = args.remove("emit_original") {
            config.emit_original = parse_bool("emit_original", &value)?;
        }
        if let Some(value) = args.remove("variant_mode") {
            config.variant_mode = VariantMode::parse(&value)?;
        }
        if let Some(value) = args.remove("min_chinese_chars") {
            config.min_chinese_chars = clamp_min_chinese_chars(parse_int("min_chinese_chars", &value)?);
        }
        if let Some(value) = args.remove("romanizer") {
            config.romanizer = RomanizerKind::parse(&value).ok_or_else(|| {
                PinyinTransformError::invalid_config(format!("unknown romanizer '{value}'"))
            })?;
        }
        if let Some(value) = args.remove("dictionary") {
            config.dictionary = Some(PathBuf::from(value));
        }
        if let Some(value) = args.remove("max_combinations") {
            let max = parse_int("max_combinations", &value)?;
            config.max_combinations =
                Some(check_max_combinations(max).map_err(PinyinTransformError::invalid_config)?);
        }

        if !args.is_empty() {
            let mut unknown: Vec<_> = args.into_iter().collect();
            unknown.sort();
            return Err(PinyinTransformError::invalid_config(format!(
                "Unknown parameters: {unknown:?}"
            )));
        }

        Ok(config)
    }

    /// The effective threshold, never below 1.
    pub fn effective_min_chinese_chars(&self) -> usize {
        self.min_chinese_chars.max(1)
    }
}

/// Clamp a signed threshold to the effective range `1..`.
pub fn clamp_min_chinese_chars(min: i64) -> usize {
    usize::try_from(min.max(1)).unwrap_or(usize::MAX)
}

fn check_max_combinations(max: i64) -> std::result::Result<usize, String> {
    if max < 1 {
        return Err(format!("max_combinations must be at least 1, got {max}"));
    }
    usize::try_from(max).map_err(|_| format!("max_combinations {max} is out of range"))
}

fn deserialize_min_chinese_chars<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    i64::deserialize(deserializer).map(clamp_min_chinese_chars)
}

fn deserialize_max_combinations<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<i64>::deserialize(deserializer)? {
        Some(max) => check_max_combinations(max).map(Some).map_err(D::Error::custom),
        None => Ok(None),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    value.trim().parse().map_err(|_| {
        PinyinTransformError::invalid_config(format!("{key} must be true or false, got '{value}'"))
    })
}

fn parse_int(key: &str, value: &str) -> Result<i64> {
    value.trim().parse().map_err(|_| {
        PinyinTransformError::invalid_config(format!("{key} must be an integer, got '{value}'"))
    })
}

/// A filter that adds pinyin variants after Chinese tokens.
///
/// The filter itself is immutable and shareable across threads; every call to
/// [`stream`](Self::stream) or [`Filter::filter`] creates an independent
/// [`PinyinTransformStream`] holding the per-stream state.
#[derive(Clone, Debug)]
pub struct PinyinTransformFilter {
    config: PinyinTransformConfig,
    expander: VariantExpander,
}

impl PinyinTransformFilter {
    /// Create a filter with the default configuration.
    pub fn new() -> Self {
        let config = PinyinTransformConfig::default();
        let romanizer = config.romanizer.build(None);
        Self::with_romanizer(config, romanizer)
    }

    /// Create a filter from a configuration, loading its phrase dictionary.
    ///
    /// Fails if the dictionary cannot be read or holds invalid entries.
    pub fn from_config(config: PinyinTransformConfig) -> Result<Self> {
        if config.max_combinations == Some(0) {
            return Err(PinyinTransformError::invalid_config(
                "max_combinations must be at least 1, got 0",
            ));
        }
        let dictionary = match &config.dictionary {
            Some(path) => Some(Arc::new(PhraseDictionary::load_from_file(path)?)),
            None => None,
        };
        let romanizer = config.romanizer.build(dictionary);
        Ok(Self::with_romanizer(config, romanizer))
    }

    /// Create a filter from a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_config(PinyinTransformConfig::from_json(json)?)
    }

    /// Create a filter from factory-style string arguments.
    pub fn from_args(args: &HashMap<String, String>) -> Result<Self> {
        Self::from_config(PinyinTransformConfig::from_args(args)?)
    }

    /// Create a filter with a custom romanizer. The `romanizer` and
    /// `dictionary` settings of `config` are not used.
    pub fn with_romanizer(mut config: PinyinTransformConfig, romanizer: Arc<dyn Romanizer>) -> Self {
        config.min_chinese_chars = config.effective_min_chinese_chars();
        let expander = VariantExpander::new(romanizer, config.variant_mode)
            .with_max_combinations(config.max_combinations);

        log::debug!(
            "pinyin filter: romanizer={}, mode={}, min_chinese_chars={}, emit_original={}",
            expander.romanizer().name(),
            config.variant_mode,
            config.min_chinese_chars,
            config.emit_original
        );

        PinyinTransformFilter { config, expander }
    }

    /// The effective configuration.
    pub fn config(&self) -> &PinyinTransformConfig {
        &self.config
    }

    /// Start a new stream pulling from `input`.
    pub fn stream<S: TokenSource>(&self, input: S) -> PinyinTransformStream<S> {
        PinyinTransformStream {
            input,
            expander: self.expander.clone(),
            emit_original: self.config.emit_original,
            min_chinese_chars: self.config.min_chinese_chars,
            state: None,
            finished: false,
        }
    }
}

impl Default for PinyinTransformFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// The stream is consumed as an [`Iterator`], so upstream errors end it
/// after a `warn` log instead of surfacing to the caller.
impl Filter for PinyinTransformFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(self.stream(StreamSource::new(tokens))))
    }

    fn name(&self) -> &'static str {
        "pinyin_transform"
    }
}

/// State of the upstream token currently being expanded.
struct FilterState {
    /// The buffered upstream token.
    token: Token,
    original_emitted: bool,
    /// Whether any token has been emitted for `token` yet.
    emitted: bool,
    pending: Option<VariantIter>,
}

impl FilterState {
    fn new(token: Token) -> Self {
        FilterState {
            token,
            original_emitted: false,
            emitted: false,
            pending: None,
        }
    }

    fn original(&mut self) -> Token {
        self.original_emitted = true;
        self.emitted = true;
        self.token.clone()
    }

    /// Build a variant token. The first token emitted for an upstream token
    /// carries its position increment; every later one stacks on it.
    fn variant(&mut self, text: String) -> Token {
        let increment = if self.emitted {
            0
        } else {
            self.token.position_increment
        };
        self.emitted = true;

        self.token
            .with_text(text)
            .with_original_text(self.token.text.clone())
            .with_token_type(TokenType::Pinyin)
            .with_position_increment(increment)
    }
}

/// Compute the variants of `token`, or `None` if it has none.
fn expand_token(
    expander: &VariantExpander,
    min_chinese_chars: usize,
    token: &Token,
) -> Option<VariantIter> {
    if chinese_char_count(&token.text) < min_chinese_chars {
        return None;
    }

    match expander.expand(&token.text) {
        Ok(variants) if variants.is_empty() => None,
        Ok(variants) => {
            log::debug!(
                "expanded '{}' into {} pinyin variant(s)",
                token.text,
                variants.len()
            );
            Some(variants.into_iter())
        }
        Err(e) => {
            log::warn!("skipping pinyin expansion of '{}': {}", token.text, e);
            None
        }
    }
}

/// A pinyin filter applied to one upstream source.
///
/// Pull tokens with [`TokenSource::next_token`] or use the stream as an
/// [`Iterator`]. After the end of the stream has been reported, further pulls
/// fail with [`PinyinTransformError::InvalidOperation`] until
/// [`TokenSource::reset`] is called.
pub struct PinyinTransformStream<S> {
    input: S,
    expander: VariantExpander,
    emit_original: bool,
    min_chinese_chars: usize,
    state: Option<FilterState>,
    finished: bool,
}

impl<S> PinyinTransformStream<S> {
    /// The upstream source.
    pub fn input(&self) -> &S {
        &self.input
    }

    /// Consume the stream and return the upstream source.
    pub fn into_inner(self) -> S {
        self.input
    }
}

impl<S: TokenSource> TokenSource for PinyinTransformStream<S> {
    fn next_token(&mut self) -> Result<Option<Token>> {
        if self.finished {
            return Err(PinyinTransformError::invalid_operation(
                "token stream already ended; reset it before pulling again",
            ));
        }

        loop {
            let mut state = match self.state.take() {
                Some(state) => state,
                None => match self.input.next_token()? {
                    Some(token) => FilterState::new(token),
                    None => {
                        self.finished = true;
                        return Ok(None);
                    }
                },
            };

            if self.emit_original && !state.original_emitted && state.pending.is_none() {
                let original = state.original();
                self.state = Some(state);
                return Ok(Some(original));
            }

            if state.pending.is_none() {
                state.pending = expand_token(&self.expander, self.min_chinese_chars, &state.token);
            }

            if let Some(variant) = state.pending.as_mut().and_then(Iterator::next) {
                let token = state.variant(variant);
                self.state = Some(state);
                return Ok(Some(token));
            }

            // Nothing left for this token; fetch the next one.
        }
    }

    /// Rewind the upstream source, then drop the buffered token. If the
    /// upstream cannot rewind, the stream keeps its position and state.
    fn reset(&mut self) -> Result<()> {
        self.input.reset()?;
        self.state = None;
        self.finished = false;
        Ok(())
    }
}

/// Infallible view of the stream, used by [`Filter::filter`].
///
/// An upstream error or a protocol violation is logged at `warn` and ends
/// the iteration. Pull through [`TokenSource::next_token`] to observe the
/// error instead.
impl<S: TokenSource> Iterator for PinyinTransformStream<S> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) => token,
            Err(e) => {
                log::warn!("pinyin token stream stopped: {e}");
                self.finished = true;
                None
            }
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for PinyinTransformStream<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PinyinTransformStream")
            .field("input", &self.input)
            .field("mode", &self.expander.mode())
            .field("emit_original", &self.emit_original)
            .field("min_chinese_chars", &self.min_chinese_chars)
            .field("buffered", &self.state.as_ref().map(|s| s.token.text.as_str()))
            .field("finished", &self.finished)
            .finish()
    }
}
