//! Command implementations for the pinyin-transform CLI.

use std::fs;
use std::io::{self, BufRead};
use std::path::Path;
use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PinyinAnalyzer};
use crate::analysis::pinyin::PhraseDictionary;
use crate::analysis::token_filter::pinyin::{clamp_min_chinese_chars, PinyinTransformConfig};
use crate::analysis::tokenizer::{
    Tokenizer, UnicodeWordTokenizer, WhitespaceTokenizer, WholeTokenizer,
};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: PinyinArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args, &args),
        Command::Check(check_args) => check(check_args, &args),
    }
}

/// Analyze the given text, or every non-empty stdin line.
fn analyze(args: &AnalyzeArgs, cli_args: &PinyinArgs) -> Result<()> {
    let config = build_config(args)?;
    let analyzer = PinyinAnalyzer::with_tokenizer(create_tokenizer(args.tokenizer), config)?;

    if let Some(text) = &args.text {
        return output_analysis(&analyze_text(&analyzer, text)?, cli_args);
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        output_analysis(&analyze_text(&analyzer, &line)?, cli_args)?;
    }

    Ok(())
}

/// Validate a dictionary or configuration file.
fn check(args: &CheckArgs, cli_args: &PinyinArgs) -> Result<()> {
    let dictionary = match args.kind {
        CheckKind::Dictionary => Some(PhraseDictionary::load_from_file(&args.path)?),
        CheckKind::Config => {
            let config = load_config(&args.path)?;
            match &config.dictionary {
                Some(path) => Some(PhraseDictionary::load_from_file(path)?),
                None => None,
            }
        }
    };

    log::info!("{} passed validation", args.path.display());

    output_check(
        &CheckResult {
            path: args.path.to_string_lossy().to_string(),
            kind: args.kind,
            entries: dictionary.as_ref().map_or(0, |d| d.len()),
            max_phrase_chars: dictionary.as_ref().map_or(0, |d| d.max_phrase_chars()),
        },
        cli_args,
    )
}

/// Run `analyzer` over `text` and collect the result.
pub fn analyze_text(analyzer: &dyn Analyzer, text: &str) -> Result<AnalysisResult> {
    let tokens = analyzer.analyze(text)?.map(|t| TokenRow::from(&t)).collect();
    Ok(AnalysisResult {
        input: text.to_string(),
        tokens,
    })
}

/// Merge the configuration file (if any) with the command line options.
pub fn build_config(args: &AnalyzeArgs) -> Result<PinyinTransformConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => PinyinTransformConfig::default(),
    };

    if let Some(romanizer) = args.romanizer {
        config.romanizer = romanizer.into();
    }
    if let Some(mode) = args.mode {
        config.variant_mode = mode;
    }
    if let Some(min) = args.min_chinese_chars {
        config.min_chinese_chars = clamp_min_chinese_chars(min);
    }
    if args.no_original {
        config.emit_original = false;
    }
    if let Some(dictionary) = &args.dictionary {
        config.dictionary = Some(dictionary.clone());
    }
    if args.max_combinations.is_some() {
        config.max_combinations = args.max_combinations;
    }

    Ok(config)
}

/// Load a JSON configuration. A relative dictionary path is resolved
/// against the directory of the configuration file.
fn load_config(path: &Path) -> Result<PinyinTransformConfig> {
    let content = fs::read_to_string(path)?;
    let mut config = PinyinTransformConfig::from_json(&content)?;

    if let (Some(dictionary), Some(base)) = (&config.dictionary, path.parent()) {
        if dictionary.is_relative() {
            config.dictionary = Some(base.join(dictionary));
        }
    }

    Ok(config)
}

fn create_tokenizer(choice: TokenizerChoice) -> Arc<dyn Tokenizer> {
    match choice {
        TokenizerChoice::Whitespace => Arc::new(WhitespaceTokenizer::new()),
        TokenizerChoice::UnicodeWord => Arc::new(UnicodeWordTokenizer::new()),
        TokenizerChoice::Whole => Arc::new(WholeTokenizer::new()),
    }
}
