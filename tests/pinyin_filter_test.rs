//! Integration tests for the pinyin transform filter over the bundled
//! character data.

use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

use pinyin_transform::prelude::*;
use tempfile::NamedTempFile;

fn cjk(text: &str, position: usize, start: usize) -> Token {
    Token::with_offsets(text, position, start, start + text.len()).with_token_type(TokenType::Cjk)
}

fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

fn bundled_dictionary() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources/pinyin/phrases.json")
}

#[test]
fn test_full_pinyin_variant() -> Result<()> {
    let filter = PinyinTransformFilter::from_config(PinyinTransformConfig {
        min_chinese_chars: 1,
        ..Default::default()
    })?;

    let tokens: Vec<Token> = filter.stream(VecTokenSource::new(vec![cjk("中国", 0, 0)])).collect();

    assert_eq!(texts(&tokens), vec!["中国", "zhongguo"]);
    assert_eq!(tokens[0].kind(), "cjk");
    assert_eq!(tokens[0].position_increment, 1);
    assert_eq!(tokens[1].kind(), "pinyin");
    assert_eq!(tokens[1].position_increment, 0);
    Ok(())
}

#[test]
fn test_initials_variant() -> Result<()> {
    let filter = PinyinTransformFilter::from_config(PinyinTransformConfig {
        min_chinese_chars: 1,
        variant_mode: VariantMode::Initials,
        ..Default::default()
    })?;

    let tokens: Vec<Token> = filter.stream(VecTokenSource::new(vec![cjk("中国", 0, 0)])).collect();
    assert!(texts(&tokens).contains(&"zg"));
    Ok(())
}

#[test]
fn test_latin_token_is_untouched_in_every_configuration() -> Result<()> {
    let token = Token::with_offsets("CBSi", 0, 0, 4);

    for romanizer in [RomanizerKind::Dictionary, RomanizerKind::Heteronym] {
        for variant_mode in [VariantMode::Full, VariantMode::Initials, VariantMode::Both] {
            for min_chinese_chars in [0, 1, 2] {
                let filter = PinyinTransformFilter::from_config(PinyinTransformConfig {
                    romanizer,
                    variant_mode,
                    min_chinese_chars,
                    ..Default::default()
                })?;
                let tokens: Vec<Token> =
                    filter.stream(VecTokenSource::new(vec![token.clone()])).collect();
                assert_eq!(tokens, vec![token.clone()]);
            }
        }
    }
    Ok(())
}

#[test]
fn test_polyphone_combinations_share_second_syllable() -> Result<()> {
    let filter = PinyinTransformFilter::from_config(PinyinTransformConfig {
        romanizer: RomanizerKind::Heteronym,
        emit_original: false,
        ..Default::default()
    })?;

    let tokens: Vec<Token> = filter.stream(VecTokenSource::new(vec![cjk("重庆", 0, 0)])).collect();
    let variants = texts(&tokens);

    assert!(variants.contains(&"zhongqing"));
    assert!(variants.contains(&"chongqing"));
    assert!(variants.iter().all(|v| v.ends_with("qing")));
    assert_eq!(tokens[0].position_increment, 1);
    assert!(tokens[1..].iter().all(|t| t.position_increment == 0));
    Ok(())
}

#[test]
fn test_single_chinese_char_below_threshold() -> Result<()> {
    let filter = PinyinTransformFilter::new();
    let token = Token::with_offsets("a中b", 0, 0, 5);

    let tokens: Vec<Token> = filter.stream(VecTokenSource::new(vec![token.clone()])).collect();
    assert_eq!(tokens, vec![token]);
    Ok(())
}

#[test]
fn test_mixed_text_keeps_literals() -> Result<()> {
    let filter = PinyinTransformFilter::from_config(PinyinTransformConfig {
        variant_mode: VariantMode::Both,
        ..Default::default()
    })?;

    let tokens: Vec<Token> = filter
        .stream(VecTokenSource::new(vec![Token::with_offsets("ab中国cd", 0, 0, 10)]))
        .collect();
    let variants = texts(&tokens[1..]);

    assert_eq!(variants.len(), 2);
    assert!(variants.contains(&"abzhongguocd"));
    assert!(variants.contains(&"abzgcd"));
    Ok(())
}

#[test]
fn test_phrase_dictionary_overrides_default_reading() -> Result<()> {
    let filter = PinyinTransformFilter::from_config(PinyinTransformConfig {
        emit_original: false,
        dictionary: Some(bundled_dictionary()),
        ..Default::default()
    })?;

    let input = vec![cjk("银行", 0, 0), cjk("行业", 1, 7)];
    let tokens: Vec<Token> = filter.stream(VecTokenSource::new(input)).collect();

    assert_eq!(texts(&tokens), vec!["yinhang", "hangye"]);
    assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (7, 13));
    Ok(())
}

#[test]
fn test_factory_arguments() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(file, r#"{{"重庆": "chong qing"}}"#)?;

    let args: HashMap<String, String> = [
        ("variant_mode", "both"),
        ("emit_original", "false"),
        ("dictionary", file.path().to_str().unwrap()),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let filter = PinyinTransformFilter::from_args(&args)?;
    let tokens: Vec<Token> = filter.stream(VecTokenSource::new(vec![cjk("重庆", 0, 0)])).collect();

    let mut variants = texts(&tokens);
    variants.sort();
    assert_eq!(variants, vec!["chongqing", "cq"]);
    Ok(())
}

#[test]
fn test_invalid_dictionary_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"重庆": "chong"}}"#).unwrap();

    let err = PinyinTransformFilter::from_config(PinyinTransformConfig {
        dictionary: Some(file.path().to_path_buf()),
        ..Default::default()
    })
    .unwrap_err();
    assert!(err.is_config_error());
}

#[test]
fn test_json_config() -> Result<()> {
    let filter = PinyinTransformFilter::from_json(
        r#"{"emit_original": false, "variant_mode": 2, "min_chinese_chars": 1}"#,
    )?;

    assert!(!filter.config().emit_original);
    assert_eq!(filter.config().variant_mode, VariantMode::Initials);

    let tokens: Vec<Token> = filter.stream(VecTokenSource::new(vec![cjk("中", 0, 0)])).collect();
    assert_eq!(texts(&tokens), vec!["z"]);
    Ok(())
}

#[test]
fn test_stream_replays_after_reset() -> Result<()> {
    let filter = PinyinTransformFilter::from_config(PinyinTransformConfig {
        variant_mode: VariantMode::Both,
        ..Default::default()
    })?;
    let source = TokenizerSource::new(
        std::sync::Arc::new(pinyin_transform::analysis::tokenizer::WhitespaceTokenizer::new()),
        "中国 银行",
    )?;
    let mut stream = filter.stream(source);

    let mut first = Vec::new();
    while let Some(token) = stream.next_token()? {
        first.push(token);
    }
    assert!(stream.next_token().is_err());

    stream.reset()?;
    let second: Vec<Token> = stream.by_ref().collect();

    assert_eq!(first.len(), 6);
    assert_eq!(texts(&first), texts(&second));
    Ok(())
}

#[test]
fn test_filter_is_shareable_across_threads() -> Result<()> {
    let filter = std::sync::Arc::new(PinyinTransformFilter::new());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let filter = std::sync::Arc::clone(&filter);
            std::thread::spawn(move || {
                let tokens: Vec<Token> = filter
                    .stream(VecTokenSource::new(vec![cjk("中国", i, 0)]))
                    .collect();
                tokens.len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
    Ok(())
}
