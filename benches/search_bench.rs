use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use verse_agent::core::{Catalog, Language, LocalizedText, SelectionEngine, VerseRecord};

/// A catalog of `size` generated verses; only the last one mentions "needle".
fn synthetic_catalog(size: usize) -> Catalog {
    let records = (0..size)
        .map(|i| {
            let reference: &'static str = Box::leak(format!("Book {}:{}", i / 30 + 1, i % 30 + 1).into_boxed_str());
            let word = if i + 1 == size { "needle" } else { "haystack" };
            let text: &'static str = Box::leak(format!("Verse {i} speaks of the {word}.").into_boxed_str());
            VerseRecord::new(reference, LocalizedText { en: text, fr: text, sw: text, rw: text })
        })
        .collect();
    Catalog::from_records(records).unwrap()
}

fn bench_builtin_search(c: &mut Criterion) {
    let engine = SelectionEngine::new(Catalog::builtin());

    c.bench_function("builtin_search_hit", |b| {
        b.iter(|| engine.search(black_box("shepherd"), black_box("en")))
    });
    c.bench_function("builtin_search_miss", |b| {
        b.iter(|| engine.search(black_box("nonexistent-zzz"), black_box("rw")))
    });
}

fn bench_large_catalog(c: &mut Criterion) {
    let catalog = synthetic_catalog(10_000);
    let engine = SelectionEngine::new(&catalog);

    c.bench_function("search_last_of_10k", |b| {
        b.iter(|| engine.search_in(black_box("NEEDLE"), Language::Fr))
    });
    c.bench_function("search_all_10k", |b| {
        b.iter(|| engine.search_all(black_box("haystack"), Language::Sw))
    });
    c.bench_function("random_10k", |b| b.iter(|| engine.random()));
}

criterion_group!(benches, bench_builtin_search, bench_large_catalog);
criterion_main!(benches);
