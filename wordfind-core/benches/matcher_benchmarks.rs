//! Benchmarks for segmentation and fuzzy matching

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use wordfind_core::{
    AnnotatedText, Config, ExclusionList, ExecutionMode, FuzzyMatcher, NoProgress, PhraseList,
    Scorer, Segmenter, WordList,
};

/// Generate annotated text with roughly `sentences` sentences
fn generate_text(sentences: usize) -> AnnotatedText {
    let base = [
        "The committee reviewed the quarterly budget in detail.",
        "Several red flags were raised about the blue team expenses.",
        "A wilting flower on the windowsill caught everyone's attention.",
        "Nobody mentioned the confidential memo during the meeting.",
    ];
    let mut text = String::new();
    for i in 0..sentences {
        if i % 8 == 0 {
            text.push_str("[newParagraph]\n");
        }
        if i % 40 == 39 {
            text.push_str(&format!("[lastRenderedPageBreak{}]\n", i / 40 + 1));
        }
        text.push_str(base[i % base.len()]);
        text.push(' ');
    }
    AnnotatedText::from(text)
}

fn word_list() -> PhraseList {
    PhraseList::from_word_list(&WordList::parse(
        "red\nblue\nbudget\nconfidential\nwilting flowers\nred flags\nquarterly report",
    ))
}

fn bench_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmentation");

    for count in [100, 1_000, 10_000] {
        let text = generate_text(count);
        group.throughput(Throughput::Bytes(text.as_str().len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &text, |b, text| {
            let segmenter = Segmenter::default();
            b.iter(|| segmenter.segment(black_box(text)));
        });
    }

    group.finish();
}

fn bench_execution_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("execution_modes");
    let phrases = word_list();
    let exclusions = ExclusionList::empty();

    for count in [100, 1_000] {
        let sentences = Segmenter::default().segment(&generate_text(count));
        group.throughput(Throughput::Elements(sentences.len() as u64));

        for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
            let config = Config::builder()
                .execution_mode(mode)
                .build()
                .expect("Valid config");
            let matcher = FuzzyMatcher::new(&phrases, &exclusions, &config);

            group.bench_with_input(
                BenchmarkId::new(format!("{mode:?}").to_lowercase(), count),
                &sentences,
                |b, sentences| {
                    b.iter(|| {
                        let mut batch = sentences.clone();
                        matcher
                            .match_all(&mut batch, mode, None, &NoProgress)
                            .expect("Matching succeeds");
                        black_box(batch)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_scorers(c: &mut Criterion) {
    let mut group = c.benchmark_group("scorers");
    let pairs = [
        ("flowers", "flower"),
        ("confidential", "confidentiality"),
        ("red", "rods"),
        ("quarterly", "quartely"),
    ];

    for scorer in Scorer::ALL {
        group.bench_function(scorer.as_str(), |b| {
            b.iter(|| {
                for (a, other) in pairs {
                    black_box(scorer.score(black_box(a), black_box(other)));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_segmentation, bench_execution_modes, bench_scorers);
criterion_main!(benches);
