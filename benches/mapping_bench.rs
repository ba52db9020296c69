//! Mapping throughput benchmarks.
//!
//! Phase 1 runs once per corpus, phase 2 once per record, so the per-record
//! mapper is the hot path.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `categorize` | Inventory + categorization over a 1 000-record corpus |
//! | `map_record` | Single-record mapping for accepted and rejected shapes |
//! | `pipeline` | Full two-phase run, sequential vs rayon |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench mapping_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use unify::{FieldCategories, FieldInventory, Pipeline, RawRecord, SchemaMapper};
use unify_core::{MappingConfig, NumberedRecord, RejectedPayload};

fn corpus(n: usize) -> Vec<NumberedRecord> {
    (0..n)
        .map(|i| {
            let value = match i % 3 {
                0 => serde_json::json!({
                    "id": format!("evt-{i}"),
                    "timestamp": 1_722_506_400 + i,
                    "event_type": "tick",
                    "user_id": format!("u-{}", i % 11),
                }),
                1 => serde_json::json!({
                    "transaction_id": format!("txn-{i}"),
                    "created_at": "2024-08-01T10:00:00Z",
                    "payment_method": "card",
                    "transaction_type": "purchase",
                }),
                _ => serde_json::json!({"message": format!("line {i}")}),
            };
            let record: RawRecord = value.as_object().cloned().unwrap_or_default();
            (i + 1, record)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Categorization
// ---------------------------------------------------------------------------

fn categorize_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("categorize");
    let records = corpus(1_000);
    group.throughput(Throughput::Elements(records.len() as u64));
    group.bench_function("1000_records", |b| {
        b.iter(|| {
            let inventory = FieldInventory::from_records(records.iter().map(|(_, r)| r));
            black_box(FieldCategories::categorize(inventory.vocabulary()))
        })
    });
    group.finish();
}

// ---------------------------------------------------------------------------
// Single record
// ---------------------------------------------------------------------------

fn map_record_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_record");
    let records = corpus(3);
    let inventory = FieldInventory::from_records(records.iter().map(|(_, r)| r));
    let categories = FieldCategories::categorize(inventory.vocabulary());
    let mapper = SchemaMapper::new(&categories, RejectedPayload::Retain);

    group.throughput(Throughput::Elements(1));
    for (name, (line, record)) in ["epoch_seconds", "vendor_iso", "rejected"]
        .into_iter()
        .zip(&records)
    {
        group.bench_with_input(BenchmarkId::new("shape", name), record, |b, record| {
            b.iter(|| black_box(mapper.map(record, *line)))
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Full pipeline
// ---------------------------------------------------------------------------

fn pipeline_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let records = corpus(10_000);
    group.throughput(Throughput::Elements(records.len() as u64));

    for parallel in [false, true] {
        let pipeline = Pipeline::new(MappingConfig {
            rejected_payload: RejectedPayload::Drop,
            parallel,
        });
        let label = if parallel { "rayon" } else { "sequential" };
        group.bench_function(BenchmarkId::new("10000_records", label), |b| {
            b.iter(|| black_box(pipeline.run(&records)))
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion registration
// ---------------------------------------------------------------------------

criterion_group!(mapping_benches, categorize_bench, map_record_bench, pipeline_bench);
criterion_main!(mapping_benches);
