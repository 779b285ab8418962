//! Criterion benchmarks for the pinyin transform filter.
//!
//! Covers:
//! - Phrase (dictionary) romanization through the analyzer
//! - Heteronym expansion with and without a combination cap
//! - Raw filter stream throughput over pre-tokenized input

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use pinyin_transform::analysis::analyzer::analyzer::Analyzer;
use pinyin_transform::analysis::analyzer::pinyin::PinyinAnalyzer;
use pinyin_transform::analysis::pinyin::{RomanizerKind, VariantMode};
use pinyin_transform::analysis::source::VecTokenSource;
use pinyin_transform::analysis::token::{Token, TokenType};
use pinyin_transform::analysis::token_filter::pinyin::{
    PinyinTransformConfig, PinyinTransformFilter,
};

/// Generate whitespace separated lines of Chinese words and ASCII terms.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = [
        "中国", "银行", "重庆", "长江", "行业", "音乐", "快乐", "北京", "上海", "CBSi", "search",
        "2024", "数据", "结构", "重要", "银行卡", "中华人民共和国",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 10 + (i % 20);
        let doc_words: Vec<&str> = (0..doc_length)
            .map(|j| words[(i * 7 + j * 3) % words.len()])
            .collect();
        documents.push(doc_words.join(" "));
    }
    documents
}

fn generate_tokens(document: &str) -> Vec<Token> {
    document
        .split(' ')
        .enumerate()
        .map(|(position, word)| Token::new(word, position).with_token_type(TokenType::Cjk))
        .collect()
}

/// Benchmark analyzer throughput in dictionary mode.
fn bench_phrase_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("phrase_analysis");

    let analyzer = PinyinAnalyzer::from_config(PinyinTransformConfig {
        variant_mode: VariantMode::Both,
        ..Default::default()
    })
    .unwrap();
    let texts = generate_test_documents(1000);

    group.bench_function("analyze_single_document", |b| {
        b.iter(|| {
            let tokens: Vec<Token> = analyzer.analyze(black_box(&texts[0])).unwrap().collect();
            black_box(tokens)
        })
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("analyze_batch_documents", |b| {
        b.iter(|| {
            for text in texts.iter().take(100) {
                let tokens: Vec<Token> = analyzer.analyze(black_box(text)).unwrap().collect();
                black_box(tokens);
            }
        })
    });

    group.finish();
}

/// Benchmark combinatorial expansion.
fn bench_heteronym_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("heteronym_expansion");
    let texts = generate_test_documents(100);

    for (name, max_combinations) in [("uncapped", None), ("capped_16", Some(16))] {
        let filter = PinyinTransformFilter::from_config(PinyinTransformConfig {
            romanizer: RomanizerKind::Heteronym,
            variant_mode: VariantMode::Both,
            max_combinations,
            ..Default::default()
        })
        .unwrap();

        group.throughput(Throughput::Elements(texts.len() as u64));
        group.bench_function(name, |b| {
            b.iter_with_setup(
                || texts.iter().map(|t| generate_tokens(t)).collect::<Vec<_>>(),
                |batches| {
                    for tokens in batches {
                        let out: Vec<Token> = filter.stream(VecTokenSource::new(tokens)).collect();
                        black_box(out);
                    }
                },
            )
        });
    }

    group.finish();
}

/// Benchmark the stream with expansion disabled by a high threshold.
fn bench_passthrough(c: &mut Criterion) {
    let mut group = c.benchmark_group("passthrough");

    let filter = PinyinTransformFilter::from_config(PinyinTransformConfig {
        min_chinese_chars: 100,
        ..Default::default()
    })
    .unwrap();
    let tokens = generate_tokens(&generate_test_documents(1)[0]);

    group.throughput(Throughput::Elements(tokens.len() as u64));
    group.bench_function("below_threshold", |b| {
        b.iter(|| {
            let out: Vec<Token> = filter
                .stream(VecTokenSource::new(black_box(tokens.clone())))
                .collect();
            black_box(out)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_phrase_analysis,
    bench_heteronym_expansion,
    bench_passthrough
);

criterion_main!(benches);
