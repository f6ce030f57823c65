use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seven_day_plot::{aggregate, compute_window, dew_point, MemoryStore, Sample, SampleStore};

/// Eight days of 5 minute samples.
fn dense_week() -> MemoryStore {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    (0..8 * 24 * 12)
        .map(|i| Sample {
            temp_out: Some(10.0 + (i % 40) as f64 * 0.1),
            hum_out: Some(60.0 + (i % 30) as f64),
            wind_ave: Some(3.5),
            wind_gust: Some(7.0),
            pressure: Some(1010.0),
            rain: Some(if i % 17 == 0 { 0.3 } else { 0.0 }),
            ..Sample::new(start + Duration::minutes(5 * i))
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let store = dense_week();
    let latest = store.latest().unwrap();
    let window = compute_window(latest.as_ref(), &Utc).unwrap();
    c.bench_function("aggregate_dense_week", |b| {
        b.iter(|| aggregate(black_box(&store), black_box(&window), dew_point))
    });
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
