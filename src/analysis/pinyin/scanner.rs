//! Chinese character classification and run scanning.
//!
//! A character counts as Chinese when its code point lies in the core CJK
//! Unified Ideographs block `U+4E00..=U+9FA5`. The tail of the block
//! (`U+9FA6..=U+9FFF`) and the extension blocks are deliberately excluded, so
//! they never trigger expansion.
//!
//! # Examples
//!
//! ```
//! use pinyin_transform::analysis::pinyin::scanner::{chinese_char_count, chinese_runs};
//!
//! let runs: Vec<_> = chinese_runs("ab中国cd银行").collect();
//! assert_eq!(runs.len(), 2);
//! assert_eq!(runs[0].text, "中国");
//! assert_eq!(runs[1].text, "银行");
//! assert_eq!(chinese_char_count("ab中国cd银行"), 4);
//! ```

use std::ops::RangeInclusive;

/// Code points classified as Chinese.
pub const CHINESE_RANGE: RangeInclusive<char> = '\u{4E00}'..='\u{9FA5}';

/// Returns `true` if `c` is a Chinese character.
#[inline]
pub fn is_chinese(c: char) -> bool {
    CHINESE_RANGE.contains(&c)
}

/// Number of Chinese characters in `text`.
pub fn chinese_char_count(text: &str) -> usize {
    text.chars().filter(|&c| is_chinese(c)).count()
}

/// A maximal contiguous span of Chinese characters inside a token's text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChineseRun<'a> {
    /// The characters of the run.
    pub text: &'a str,
    /// Byte index of the first character in the scanned text.
    pub start: usize,
    /// Byte index one past the last character in the scanned text.
    pub end: usize,
}

impl ChineseRun<'_> {
    /// Number of characters in the run.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Lazy iterator over the Chinese runs of a text, left to right.
#[derive(Clone, Debug)]
pub struct ChineseRuns<'a> {
    text: &'a str,
    cursor: usize,
}

/// Scan `text` for Chinese runs.
pub fn chinese_runs(text: &str) -> ChineseRuns<'_> {
    ChineseRuns { text, cursor: 0 }
}

impl<'a> Iterator for ChineseRuns<'a> {
    type Item = ChineseRun<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.cursor..];
        let (skip, _) = rest.char_indices().find(|&(_, c)| is_chinese(c))?;
        let start = self.cursor + skip;
        let len = self.text[start..]
            .char_indices()
            .find(|&(_, c)| !is_chinese(c))
            .map(|(i, _)| i)
            .unwrap_or(self.text.len() - start);
        let end = start + len;
        self.cursor = end;

        Some(ChineseRun {
            text: &self.text[start..end],
            start,
            end,
        })
    }
}
