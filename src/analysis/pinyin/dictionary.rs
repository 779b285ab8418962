//! User phrase dictionary for dictionary-mode romanization.
//!
//! Maps multi-character Chinese phrases to the reading they must take as a
//! whole, overriding the per-character default reading. This is how a
//! polyphone like 重 reads `chong` in 重庆 but `zhong` in 重要.
//!
//! The JSON format is a single object of phrase → space-separated syllables:
//!
//! ```json
//! {
//!   "重庆": "chong qing",
//!   "银行": "yin hang"
//! }
//! ```

use std::path::Path;

use ahash::AHashMap;

use crate::analysis::pinyin::scanner::is_chinese;
use crate::error::{PinyinTransformError, Result};

/// Phrase → syllables dictionary with longest-prefix lookup.
#[derive(Clone, Debug, Default)]
pub struct PhraseDictionary {
    entries: AHashMap<String, Vec<String>>,
    /// Length in characters of the longest phrase
    max_phrase_chars: usize,
}

impl PhraseDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a dictionary from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PinyinTransformError::dictionary(format!(
                "Failed to read phrase dictionary file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let dictionary = Self::from_json(&content).map_err(|e| match e {
            PinyinTransformError::Json(err) => PinyinTransformError::dictionary(format!(
                "Failed to parse phrase dictionary JSON from '{}': {}",
                path.display(),
                err
            )),
            other => other,
        })?;

        log::info!(
            "loaded {} phrase readings from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Parse a dictionary from a JSON object string.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: AHashMap<String, String> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Build a dictionary from `(phrase, syllables)` pairs.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for (phrase, reading) in entries {
            dictionary.insert(phrase, reading.as_ref())?;
        }
        Ok(dictionary)
    }

    /// Add one phrase with its space-separated reading.
    ///
    /// Fails if the phrase is not entirely Chinese, if a syllable contains
    /// anything but letters, or if the syllable count differs from the
    /// character count.
    pub fn insert<S: Into<String>>(&mut self, phrase: S, reading: &str) -> Result<()> {
        let phrase = phrase.into();
        let char_count = phrase.chars().count();

        if char_count == 0 || !phrase.chars().all(is_chinese) {
            return Err(PinyinTransformError::dictionary(format!(
                "phrase '{phrase}' must be a non-empty run of Chinese characters"
            )));
        }

        let syllables: Vec<String> = reading
            .split_whitespace()
            .map(|s| s.to_lowercase())
            .collect();

        if let Some(bad) = syllables
            .iter()
            .find(|s| !s.chars().all(|c| c.is_ascii_alphabetic() || c == 'ü'))
        {
            return Err(PinyinTransformError::dictionary(format!(
                "syllable '{bad}' of '{phrase}' is not plain pinyin"
            )));
        }

        if syllables.len() != char_count {
            return Err(PinyinTransformError::dictionary(format!(
                "reading '{reading}' has {} syllables for {char_count} characters of '{phrase}'",
                syllables.len()
            )));
        }

        self.max_phrase_chars = self.max_phrase_chars.max(char_count);
        self.entries.insert(phrase, syllables);
        Ok(())
    }

    /// Look up the reading of an exact phrase.
    pub fn get(&self, phrase: &str) -> Option<&[String]> {
        self.entries.get(phrase).map(Vec::as_slice)
    }

    /// Find the longest phrase that prefixes `text`.
    ///
    /// Returns the matched length in bytes and its syllables.
    pub fn longest_prefix(&self, text: &str) -> Option<(usize, &[String])> {
        if self.entries.is_empty() {
            return None;
        }

        // Byte ends of the first `max_phrase_chars` characters.
        let ends: Vec<usize> = text
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .take(self.max_phrase_chars)
            .collect();

        ends.iter()
            .rev()
            .find_map(|&end| self.get(&text[..end]).map(|syllables| (end, syllables)))
    }

    /// Number of phrases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no phrases.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length in characters of the longest phrase.
    pub fn max_phrase_chars(&self) -> usize {
        self.max_phrase_chars
    }
}
