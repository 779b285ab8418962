//! Command line argument parsing for the pinyin-transform CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::pinyin::{RomanizerKind, VariantMode};

/// pinyin-transform - Expand Chinese tokens into searchable pinyin variants
#[derive(Parser, Debug, Clone)]
#[command(name = "pinyin-transform")]
#[command(about = "Expand Chinese tokens into searchable pinyin variants")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PinyinArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PinyinArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze text and print the resulting tokens
    Analyze(AnalyzeArgs),

    /// Validate a phrase dictionary or filter configuration file
    Check(CheckArgs),
}

/// Arguments for analyzing text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze (reads lines from stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Tokenizer placed in front of the pinyin filter
    #[arg(short, long, default_value = "whitespace")]
    pub tokenizer: TokenizerChoice,

    /// JSON filter configuration used as the base for the options below
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Romanization backend
    #[arg(short, long)]
    pub romanizer: Option<RomanizerChoice>,

    /// Variant mode: 1|full, 2|initials or 3|both
    #[arg(short, long, value_parser = parse_variant_mode)]
    pub mode: Option<VariantMode>,

    /// Minimum number of Chinese characters before a token is expanded
    #[arg(long, allow_negative_numbers = true)]
    pub min_chinese_chars: Option<i64>,

    /// Suppress the original tokens and print only pinyin variants
    #[arg(long)]
    pub no_original: bool,

    /// Phrase dictionary file (JSON object of phrase to syllables)
    #[arg(short, long)]
    pub dictionary: Option<PathBuf>,

    /// Cap on combinatorial candidates per token
    #[arg(long)]
    pub max_combinations: Option<usize>,
}

/// Arguments for checking a file
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Path to the file to check
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// What kind of file PATH is
    #[arg(short, long, default_value = "dictionary")]
    pub kind: CheckKind,
}

/// Tokenizers available in the CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenizerChoice {
    /// Split on whitespace
    Whitespace,
    /// Split on Unicode word boundaries (one token per ideograph)
    UnicodeWord,
    /// The whole input as one token
    Whole,
}

/// Romanization backends available in the CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RomanizerChoice {
    /// One reading per phrase, using the dictionary when given
    Dictionary,
    /// Every combination of character readings
    Heteronym,
}

impl From<RomanizerChoice> for RomanizerKind {
    fn from(choice: RomanizerChoice) -> Self {
        match choice {
            RomanizerChoice::Dictionary => RomanizerKind::Dictionary,
            RomanizerChoice::Heteronym => RomanizerKind::Heteronym,
        }
    }
}

/// File kinds accepted by `check`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    /// Phrase dictionary
    Dictionary,
    /// Filter configuration
    Config,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

fn parse_variant_mode(value: &str) -> std::result::Result<VariantMode, String> {
    VariantMode::parse(value).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_analyze_command() {
        let args = PinyinArgs::try_parse_from([
            "pinyin-transform",
            "analyze",
            "中国 银行",
            "--mode",
            "both",
            "--min-chinese-chars",
            "-1",
            "--no-original",
            "--romanizer",
            "heteronym",
        ])
        .unwrap();

        if let Command::Analyze(analyze_args) = args.command {
            assert_eq!(analyze_args.text.as_deref(), Some("中国 银行"));
            assert_eq!(analyze_args.mode, Some(VariantMode::Both));
            assert_eq!(analyze_args.min_chinese_chars, Some(-1));
            assert!(analyze_args.no_original);
            assert_eq!(analyze_args.romanizer, Some(RomanizerChoice::Heteronym));
            assert_eq!(analyze_args.tokenizer, TokenizerChoice::Whitespace);
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_analyze_mode_codes() {
        let args =
            PinyinArgs::try_parse_from(["pinyin-transform", "analyze", "中国", "-m", "2"]).unwrap();
        if let Command::Analyze(analyze_args) = args.command {
            assert_eq!(analyze_args.mode, Some(VariantMode::Initials));
        } else {
            panic!("Expected Analyze command");
        }

        assert!(PinyinArgs::try_parse_from(["pinyin-transform", "analyze", "x", "-m", "7"]).is_err());
    }

    #[test]
    fn test_check_command() {
        let args = PinyinArgs::try_parse_from([
            "pinyin-transform",
            "check",
            "phrases.json",
        ])
        .unwrap();

        if let Command::Check(check_args) = args.command {
            assert_eq!(check_args.path, PathBuf::from("phrases.json"));
            assert_eq!(check_args.kind, CheckKind::Dictionary);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = PinyinArgs::try_parse_from(["pinyin-transform", "analyze", "x"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = PinyinArgs::try_parse_from(["pinyin-transform", "-vv", "analyze", "x"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = PinyinArgs::try_parse_from(["pinyin-transform", "--quiet", "analyze", "x"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            PinyinArgs::try_parse_from(["pinyin-transform", "--format", "json", "analyze", "x"])
                .unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
