//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::cli::args::{CheckKind, OutputFormat, PinyinArgs};
use crate::error::Result;

/// One analyzed token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRow {
    pub text: String,
    pub kind: String,
    pub position: usize,
    pub position_increment: usize,
    pub start_offset: usize,
    pub end_offset: usize,
}

impl From<&Token> for TokenRow {
    fn from(token: &Token) -> Self {
        TokenRow {
            text: token.text.clone(),
            kind: token.kind().to_string(),
            position: token.position,
            position_increment: token.position_increment,
            start_offset: token.start_offset,
            end_offset: token.end_offset,
        }
    }
}

/// Result structure for text analysis.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub input: String,
    pub tokens: Vec<TokenRow>,
}

/// Result structure for file checks.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResult {
    pub path: String,
    pub kind: CheckKind,
    pub entries: usize,
    pub max_phrase_chars: usize,
}

/// Output an analysis result in the selected format.
pub fn output_analysis(result: &AnalysisResult, args: &PinyinArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{}", result.input);
            }
            for row in &result.tokens {
                println!("{}", format_token_row(row));
            }
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output a check result in the selected format.
pub fn output_check(result: &CheckResult, args: &PinyinArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("{} is valid", result.path);
            }
            println!("entries: {}", result.entries);
            println!("max_phrase_chars: {}", result.max_phrase_chars);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &PinyinArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a token as `position [start,end] (kind) text`. Stacked tokens
/// (increment 0) are indented under the token they share a position with.
fn format_token_row(row: &TokenRow) -> String {
    let indent = if row.position_increment == 0 { "  " } else { "" };
    format!(
        "{indent}{} [{},{}] ({}) {}",
        row.position, row.start_offset, row.end_offset, row.kind, row.text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::TokenType;

    #[test]
    fn test_token_row_from_token() {
        let token = Token::with_offsets("zhongguo", 3, 0, 6)
            .with_token_type(TokenType::Pinyin)
            .with_position_increment(0);
        let row = TokenRow::from(&token);

        assert_eq!(row.kind, "pinyin");
        assert_eq!(row.position, 3);
        assert_eq!(row.position_increment, 0);
        assert_eq!((row.start_offset, row.end_offset), (0, 6));
    }

    #[test]
    fn test_format_token_row() {
        let original = TokenRow::from(&Token::with_offsets("中国", 0, 0, 6));
        assert_eq!(format_token_row(&original), "0 [0,6] (word) 中国");

        let variant = TokenRow::from(
            &Token::with_offsets("zg", 0, 0, 6)
                .with_token_type(TokenType::Pinyin)
                .with_position_increment(0),
        );
        assert_eq!(format_token_row(&variant), "  0 [0,6] (pinyin) zg");
    }
}
