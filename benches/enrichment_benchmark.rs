use aqi_processor::analyzers::{AirQualityAnalyzer, RecordFilter};
use aqi_processor::models::RawRecord;
use aqi_processor::processors::{compute_aqi, Enricher};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// Create test data for benchmarking
fn create_test_records(count: usize) -> Vec<RawRecord> {
    let countries = ["Ukraine", "France", "Germany", "Poland"];
    let locations = ["Kyiv", "Paris", "Berlin", "Warsaw"];

    (0..count)
        .map(|i| {
            let day = (i % 28) + 1;
            let hour = i % 24;
            RawRecord::new(
                countries[i % countries.len()].to_string(),
                locations[i % locations.len()].to_string(),
                format!("2024-05-{:02} {:02}:00", day, hour),
                (i % 300) as f64 * 0.5,
                (i % 600) as f64 * 0.5,
            )
        })
        .collect()
}

fn benchmark_aqi_computation(c: &mut Criterion) {
    c.bench_function("compute_aqi", |b| {
        b.iter(|| compute_aqi(black_box(40.0), black_box(100.0)))
    });
}

fn benchmark_enrichment(c: &mut Criterion) {
    let mut group = c.benchmark_group("enrichment");

    for size in [1_000, 10_000] {
        let records = create_test_records(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            let enricher = Enricher::new();
            b.iter(|| enricher.enrich(black_box(records.clone())).unwrap())
        });
    }

    group.finish();
}

fn benchmark_filtering(c: &mut Criterion) {
    let table = Enricher::new()
        .enrich(create_test_records(10_000))
        .unwrap();
    let analyzer = AirQualityAnalyzer::from_table(table);
    let filter = RecordFilter::new()
        .with_country("Ukraine")
        .with_start_date("2024-05-10")
        .with_end_date("2024-05-20");

    c.bench_function("filter_10k", |b| {
        b.iter(|| analyzer.filtered(black_box(&filter)))
    });
}

criterion_group!(
    benches,
    benchmark_aqi_computation,
    benchmark_enrichment,
    benchmark_filtering
);
criterion_main!(benches);
