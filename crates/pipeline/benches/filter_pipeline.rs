//! Benchmarks for the search pipeline
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic collection so the benchmark does not depend on a
//! fixture file.

use chrono::NaiveDate;
use content_loader::{Category, ContentItem};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pipeline::{sort_items, FilterPipeline};
use search_state::{Dimension, FilterState, SearchContext, SortMode, Taxonomy};
use std::sync::Arc;

fn synthetic_collection(size: u32) -> Vec<ContentItem> {
    let regions = ["Asia", "Europe", "Africa", "UK"];
    let subtopics = ["Aircraft", "Training", "Honours", "Remembrance"];
    let base = NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid base date");

    (0..size)
        .map(|id| {
            let category = Category::ALL[id as usize % Category::ALL.len()];
            ContentItem::new(
                id,
                format!("Story {} about {}", id, subtopics[id as usize % 4]),
                format!("Coverage from {}", regions[id as usize % 4]),
                category,
            )
            .with_date(base + chrono::Duration::days(i64::from(id % 1500)))
            .with_tags([subtopics[id as usize % 4], regions[(id as usize + 1) % 4]])
        })
        .collect()
}

fn bench_text_search(c: &mut Criterion) {
    let items = synthetic_collection(10_000);
    let pipeline = FilterPipeline::standard(Arc::new(Taxonomy::builtin()));
    let context = SearchContext::new("aircraft", FilterState::new());

    c.bench_function("text_search_10k", |b| {
        b.iter(|| {
            let matches = pipeline.apply(black_box(&items), black_box(&context)).unwrap();
            black_box(matches)
        })
    });
}

fn bench_full_filter_and_sort(c: &mut Criterion) {
    let items = synthetic_collection(10_000);
    let taxonomy = Arc::new(Taxonomy::builtin());
    let pipeline = FilterPipeline::standard(taxonomy.clone());
    let filters = FilterState::new()
        .toggle(&taxonomy, Dimension::Region, "Europe")
        .toggle(&taxonomy, Dimension::ParentTopic, "Operations")
        .with_sort(SortMode::Latest);
    let context = SearchContext::new("story", filters);

    c.bench_function("filter_and_sort_10k", |b| {
        b.iter(|| {
            let mut matches = pipeline.apply(black_box(&items), black_box(&context)).unwrap();
            sort_items(&mut matches, SortMode::Latest);
            black_box(matches)
        })
    });
}

criterion_group!(benches, bench_text_search, bench_full_filter_and_sort);
criterion_main!(benches);
