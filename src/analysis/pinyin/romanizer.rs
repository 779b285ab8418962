//! Romanization backends.
//!
//! A [`Romanizer`] turns a run of Chinese characters into pinyin. Backends
//! answer in one of two shapes, and the expander picks its strategy from
//! the shape:
//!
//! - [`Reading::Phrase`]: one deterministic reading for the whole run
//!   (dictionary mode).
//! - [`Reading::PerCharacter`]: every candidate reading of every character,
//!   to be combined exhaustively (lookup mode).
//!
//! Two backends ship with the crate, both backed by the `pinyin` crate's
//! character data:
//!
//! - [`PhraseRomanizer`] resolves user dictionary phrases first, then falls
//!   back to each character's most common reading.
//! - [`HeteronymRomanizer`] lists all readings of each character.

use std::fmt::Debug;
use std::sync::Arc;

use pinyin::{ToPinyin, ToPinyinMulti};
use serde::{Deserialize, Serialize};

use crate::analysis::pinyin::dictionary::PhraseDictionary;
use crate::error::Result;

/// Readings produced for one run of Chinese characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reading {
    /// A single resolved reading, one syllable per romanized character.
    Phrase(Vec<String>),
    /// Candidate readings per character, in character order. A character
    /// without any known reading has an empty list.
    PerCharacter(Vec<Vec<String>>),
}

/// Trait for engines that romanize runs of Chinese text.
///
/// Implementations must be stateless with respect to calls: the same run
/// always yields the same reading.
pub trait Romanizer: Send + Sync + Debug {
    /// Romanize a run of Chinese characters.
    fn romanize(&self, run: &str) -> Result<Reading>;

    /// Get the name of this romanizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Selects which built-in backend a filter uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RomanizerKind {
    /// Whole-phrase romanization ([`PhraseRomanizer`]).
    #[default]
    Dictionary,
    /// Per-character combinatorial romanization ([`HeteronymRomanizer`]).
    Heteronym,
}

impl RomanizerKind {
    /// Parse a kind from its configuration name.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dictionary" | "phrase" => Some(RomanizerKind::Dictionary),
            "heteronym" | "lookup" => Some(RomanizerKind::Heteronym),
            _ => None,
        }
    }

    /// Build the backend, optionally consulting a phrase dictionary.
    pub fn build(&self, dictionary: Option<Arc<PhraseDictionary>>) -> Arc<dyn Romanizer> {
        match self {
            RomanizerKind::Dictionary => Arc::new(PhraseRomanizer { dictionary }),
            RomanizerKind::Heteronym => Arc::new(HeteronymRomanizer { dictionary }),
        }
    }
}

/// Most common plain reading of a character.
fn default_reading(c: char) -> Option<&'static str> {
    c.to_pinyin().map(|p| p.plain())
}

/// All distinct plain readings of a character, most common first.
fn all_readings(c: char) -> Vec<String> {
    let mut readings: Vec<String> = Vec::new();
    if let Some(multi) = c.to_pinyin_multi() {
        for p in multi {
            let plain = p.plain();
            // Tonal variants collapse to the same plain syllable.
            if !readings.iter().any(|r| r == plain) {
                readings.push(plain.to_string());
            }
        }
    }
    readings
}

/// A piece of a run: a dictionary phrase or a lone character.
enum Segment<'a> {
    Phrase(&'a [String]),
    Char(char),
}

/// Split `run` into dictionary phrases (longest match first) and single
/// characters, visiting them in order.
fn segment<'a, F>(dictionary: Option<&'a PhraseDictionary>, run: &str, mut visit: F)
where
    F: FnMut(Segment<'a>),
{
    let mut rest = run;
    while let Some(c) = rest.chars().next() {
        if let Some((len, syllables)) = dictionary.and_then(|d| d.longest_prefix(rest)) {
            visit(Segment::Phrase(syllables));
            rest = &rest[len..];
        } else {
            visit(Segment::Char(c));
            rest = &rest[c.len_utf8()..];
        }
    }
}

/// Dictionary-mode romanizer: one deterministic reading per run.
#[derive(Clone, Debug, Default)]
pub struct PhraseRomanizer {
    dictionary: Option<Arc<PhraseDictionary>>,
}

impl PhraseRomanizer {
    /// Create a romanizer that uses default character readings only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a romanizer that resolves phrases from `dictionary` first.
    pub fn with_dictionary(dictionary: Arc<PhraseDictionary>) -> Self {
        PhraseRomanizer {
            dictionary: Some(dictionary),
        }
    }
}

impl Romanizer for PhraseRomanizer {
    fn romanize(&self, run: &str) -> Result<Reading> {
        let mut syllables = Vec::with_capacity(run.len() / 3);
        segment(self.dictionary.as_deref(), run, |segment| match segment {
            Segment::Phrase(phrase) => syllables.extend_from_slice(phrase),
            Segment::Char(c) => {
                if let Some(reading) = default_reading(c) {
                    syllables.push(reading.to_string());
                }
            }
        });
        Ok(Reading::Phrase(syllables))
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}

/// Lookup-mode romanizer: every reading of every character.
///
/// Characters covered by a dictionary phrase get exactly the phrase's
/// syllable, which prunes the combinations for known words.
#[derive(Clone, Debug, Default)]
pub struct HeteronymRomanizer {
    dictionary: Option<Arc<PhraseDictionary>>,
}

impl HeteronymRomanizer {
    /// Create a romanizer over the built-in heteronym data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a romanizer that pins dictionary phrases to their reading.
    pub fn with_dictionary(dictionary: Arc<PhraseDictionary>) -> Self {
        HeteronymRomanizer {
            dictionary: Some(dictionary),
        }
    }
}

impl Romanizer for HeteronymRomanizer {
    fn romanize(&self, run: &str) -> Result<Reading> {
        let mut readings = Vec::with_capacity(run.len() / 3);
        segment(self.dictionary.as_deref(), run, |segment| match segment {
            Segment::Phrase(phrase) => readings.extend(phrase.iter().map(|s| vec![s.clone()])),
            Segment::Char(c) => readings.push(all_readings(c)),
        });
        Ok(Reading::PerCharacter(readings))
    }

    fn name(&self) -> &'static str {
        "heteronym"
    }
}
