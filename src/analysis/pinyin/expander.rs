//! Variant expansion: from token text to the set of romanized variants.
//!
//! The expander finds the Chinese runs in a text, asks the [`Romanizer`] for
//! their readings and builds the deduplicated [`VariantSet`] for the
//! configured [`VariantMode`]. The strategy follows the shape of the
//! readings:
//!
//! - Whole-phrase readings are substituted in place of each run, keeping the
//!   surrounding text: `"ab中国"` → `"abzhongguo"` / `"abzg"`.
//! - Per-character readings are combined exhaustively over every Chinese
//!   character of the text; non-Chinese text contributes nothing:
//!   `"重庆"` → `{"zhongqing", "chongqing"}`.

use std::collections::hash_set;
use std::fmt;
use std::sync::Arc;

use ahash::AHashSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::analysis::pinyin::romanizer::{Reading, Romanizer};
use crate::analysis::pinyin::scanner::{ChineseRun, chinese_runs};
use crate::error::{PinyinTransformError, Result};

/// Which romanized forms to produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VariantMode {
    /// Complete syllables: 中国 → `zhongguo` (code 1).
    #[default]
    Full,
    /// First letter of each syllable: 中国 → `zg` (code 2).
    Initials,
    /// Both of the above (code 3).
    Both,
}

impl VariantMode {
    /// Map a numeric configuration code to a mode.
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            1 => Ok(VariantMode::Full),
            2 => Ok(VariantMode::Initials),
            3 => Ok(VariantMode::Both),
            other => Err(PinyinTransformError::invalid_config(format!(
                "variant mode must be 1 (full), 2 (initials) or 3 (both), got {other}"
            ))),
        }
    }

    /// Parse a mode from a name or numeric code.
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        if let Ok(code) = value.parse::<i64>() {
            return Self::from_code(code);
        }
        match value.to_ascii_lowercase().as_str() {
            "full" => Ok(VariantMode::Full),
            "initials" | "first_letter" => Ok(VariantMode::Initials),
            "both" => Ok(VariantMode::Both),
            _ => Err(PinyinTransformError::invalid_config(format!(
                "unknown variant mode '{value}'"
            ))),
        }
    }

    /// Numeric configuration code of this mode.
    pub fn code(&self) -> u8 {
        match self {
            VariantMode::Full => 1,
            VariantMode::Initials => 2,
            VariantMode::Both => 3,
        }
    }

    /// Configuration name of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantMode::Full => "full",
            VariantMode::Initials => "initials",
            VariantMode::Both => "both",
        }
    }

    fn wants_full(&self) -> bool {
        matches!(self, VariantMode::Full | VariantMode::Both)
    }

    fn wants_initials(&self) -> bool {
        matches!(self, VariantMode::Initials | VariantMode::Both)
    }
}

impl fmt::Display for VariantMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for VariantMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for VariantMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Code(i64),
            Name(String),
        }

        let mode = match Repr::deserialize(deserializer)? {
            Repr::Code(code) => VariantMode::from_code(code),
            Repr::Name(name) => VariantMode::parse(&name),
        };
        mode.map_err(serde::de::Error::custom)
    }
}

/// Iterator that drains a [`VariantSet`].
pub type VariantIter = hash_set::IntoIter<String>;

/// Unordered set of unique variant strings produced for one token.
#[derive(Clone, Debug)]
pub struct VariantSet {
    variants: AHashSet<String>,
}

impl VariantSet {
    /// Create an empty set.
    pub fn new() -> Self {
        VariantSet {
            variants: AHashSet::new(),
        }
    }

    /// Add a variant; returns `false` if it was already present.
    pub fn insert(&mut self, variant: String) -> bool {
        self.variants.insert(variant)
    }

    /// Whether `variant` is in the set.
    pub fn contains(&self, variant: &str) -> bool {
        self.variants.contains(variant)
    }

    /// Number of variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Iterate over the variants in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(String::as_str)
    }
}

impl Default for VariantSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<String> for VariantSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.variants.extend(iter);
    }
}

impl IntoIterator for VariantSet {
    type Item = String;
    type IntoIter = VariantIter;

    fn into_iter(self) -> Self::IntoIter {
        self.variants.into_iter()
    }
}

/// First letter of a syllable.
fn initial(syllable: &str) -> &str {
    syllable
        .char_indices()
        .nth(1)
        .map_or(syllable, |(i, _)| &syllable[..i])
}

/// Builds variant sets for token texts.
#[derive(Clone, Debug)]
pub struct VariantExpander {
    romanizer: Arc<dyn Romanizer>,
    mode: VariantMode,
    max_combinations: Option<usize>,
}

impl VariantExpander {
    /// Create an expander producing `mode` variants through `romanizer`.
    pub fn new(romanizer: Arc<dyn Romanizer>, mode: VariantMode) -> Self {
        VariantExpander {
            romanizer,
            mode,
            max_combinations: None,
        }
    }

    /// Cap the combinatorial fan-out. Once a polyphone would grow the
    /// candidate set past `max`, it and every later character only use their
    /// first reading.
    pub fn with_max_combinations(mut self, max: Option<usize>) -> Self {
        self.max_combinations = max.map(|m| m.max(1));
        self
    }

    /// The configured mode.
    pub fn mode(&self) -> VariantMode {
        self.mode
    }

    /// The romanizer in use.
    pub fn romanizer(&self) -> &Arc<dyn Romanizer> {
        &self.romanizer
    }

    /// Expand `text` into its variant set.
    ///
    /// Fails if the romanizer fails on any run of the text.
    pub fn expand(&self, text: &str) -> Result<VariantSet> {
        let readings = chinese_runs(text)
            .map(|run| Ok((run, self.romanizer.romanize(run.text)?)))
            .collect::<Result<Vec<_>>>()?;

        let mut variants = VariantSet::new();
        if readings.is_empty() {
            return Ok(variants);
        }

        let whole_phrase = readings
            .iter()
            .all(|(_, reading)| matches!(reading, Reading::Phrase(_)));

        if whole_phrase {
            for initials in self.passes() {
                let variant = substitute(text, &readings, initials);
                if !variant.trim().is_empty() {
                    variants.insert(variant);
                }
            }
        } else {
            let per_char: Vec<Vec<String>> = readings
                .into_iter()
                .flat_map(|(_, reading)| match reading {
                    Reading::PerCharacter(chars) => chars,
                    Reading::Phrase(syllables) => syllables.into_iter().map(|s| vec![s]).collect(),
                })
                .collect();

            for initials in self.passes() {
                variants.extend(self.combine(&per_char, initials));
            }
        }

        Ok(variants)
    }

    /// The passes to run: `false` for full syllables, `true` for initials.
    fn passes(&self) -> impl Iterator<Item = bool> {
        let full = self.mode.wants_full().then_some(false);
        let initials = self.mode.wants_initials().then_some(true);
        full.into_iter().chain(initials)
    }

    /// Cartesian product of the per-character readings, deduplicated after
    /// every step. Characters without readings are skipped.
    fn combine(&self, per_char: &[Vec<String>], initials: bool) -> AHashSet<String> {
        let mut partials: AHashSet<String> = AHashSet::new();
        let mut seeded = false;
        let mut capped = false;

        for readings in per_char.iter().filter(|r| !r.is_empty()) {
            let mut choices: Vec<&str> = Vec::with_capacity(readings.len());
            for reading in readings {
                let mapped = if initials { initial(reading) } else { reading.as_str() };
                if !choices.contains(&mapped) {
                    choices.push(mapped);
                }
            }

            let fan_out = partials.len().max(1) * choices.len();
            if self.max_combinations.is_some_and(|max| fan_out > max) {
                capped = true;
            }
            // Once capped, every later character keeps its first reading.
            if capped {
                choices.truncate(1);
            }

            if !seeded {
                partials = choices.iter().map(|c| c.to_string()).collect();
                seeded = true;
                continue;
            }

            partials = partials
                .iter()
                .flat_map(|prefix| choices.iter().map(move |c| format!("{prefix}{c}")))
                .collect();
        }

        partials
    }
}

/// Replace every run in `text` with its phrase reading.
fn substitute(text: &str, readings: &[(ChineseRun<'_>, Reading)], initials: bool) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut last = 0;

    for (run, reading) in readings {
        out.push_str(&text[last..run.start]);
        if let Reading::Phrase(syllables) = reading {
            for syllable in syllables {
                out.push_str(if initials { initial(syllable) } else { syllable });
            }
        }
        last = run.end;
    }
    out.push_str(&text[last..]);
    out
}
