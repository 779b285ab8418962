//! Chinese-to-pinyin building blocks used by the pinyin token filter.
//!
//! - [`scanner`] - Chinese character classification and run detection
//! - [`romanizer`] - The [`Romanizer`] trait and its built-in backends
//! - [`dictionary`] - User phrase readings for dictionary mode
//! - [`expander`] - Turns a token text into its set of romanized variants

pub mod dictionary;
pub mod expander;
pub mod romanizer;
pub mod scanner;

pub use dictionary::PhraseDictionary;
pub use expander::{VariantExpander, VariantIter, VariantMode, VariantSet};
pub use romanizer::{HeteronymRomanizer, PhraseRomanizer, Reading, Romanizer, RomanizerKind};
pub use scanner::{ChineseRun, chinese_char_count, chinese_runs, is_chinese};
