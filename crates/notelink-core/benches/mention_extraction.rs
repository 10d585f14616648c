//! Benchmark: excerpt extraction vs. parser-free counting

use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use notelink_config::MatchStrategy;
use notelink_core::{Keyword, MentionService};
use notelink_parser::CmarkParser;

fn document(paragraphs: usize) -> String {
    (0..paragraphs)
        .map(|i| {
            if i % 3 == 0 {
                format!("Paragraph {i} links to [Target](:/abc123#sec{i}) among other words.")
            } else {
                format!("Paragraph {i} is filler text with a [different](:/def456) link.")
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn benchmark_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("mention_extraction");
    let keyword = Keyword::parse("abc123").expect("keyword");
    let syntax = MentionService::new(Arc::new(CmarkParser::new()));
    let regex = syntax.clone().with_strategy(MatchStrategy::Regex);

    for paragraphs in [10, 100, 1000] {
        let content = document(paragraphs);

        group.bench_with_input(BenchmarkId::new("count_only", paragraphs), &content, |b, content| {
            b.iter(|| syntax.extract_mentions(black_box(&keyword), black_box(content), 0))
        });
        group.bench_with_input(BenchmarkId::new("syntax", paragraphs), &content, |b, content| {
            b.iter(|| syntax.extract_mentions(black_box(&keyword), black_box(content), 120))
        });
        group.bench_with_input(BenchmarkId::new("regex", paragraphs), &content, |b, content| {
            b.iter(|| regex.extract_mentions(black_box(&keyword), black_box(content), 120))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_extraction);
criterion_main!(benches);
