//! Benchmarks the end-to-end compute pipeline: anga fan-out, sunrise/sunset
//! refinement, and muhurta partitioning, against the default (tabular ->
//! analytic) provider chain.

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use panchangam_core::{CalculationMethodRequest, GeographicLocation, PanchangamConfig, PanchangamRequest};
use panchangam_orchestrator::PanchangamOrchestrator;
use tokio::runtime::Runtime;

fn bench_request(latitude: f64, longitude: f64) -> PanchangamRequest {
    PanchangamRequest {
        date: Utc::now(),
        location: GeographicLocation { latitude, longitude, altitude_m: 0.0, timezone: "Asia/Kolkata".to_string() },
        region: Some("Karnataka".to_string()),
        method: CalculationMethodRequest::Auto,
        ayanamsa: None,
    }
}

fn bench_single_compute(c: &mut Criterion) {
    let runtime = Runtime::new().unwrap();
    let orchestrator = PanchangamOrchestrator::new(PanchangamConfig::default());
    let request = bench_request(12.9716, 77.5946);

    c.bench_function("compute_single_location", |b| {
        b.iter(|| runtime.block_on(async { black_box(orchestrator.compute(request.clone()).await.unwrap()) }))
    });
}

fn bench_varied_latitudes(c: &mut Criterion) {
    let runtime = Runtime::new().unwrap();
    let orchestrator = PanchangamOrchestrator::new(PanchangamConfig::default());

    let mut group = c.benchmark_group("compute_by_latitude");
    for latitude in [0.0, 12.9716, 28.6139, 51.5, 66.5] {
        let request = bench_request(latitude, 77.5946);
        group.bench_with_input(BenchmarkId::new("latitude", latitude as i64), &request, |b, request| {
            b.iter(|| runtime.block_on(async { black_box(orchestrator.compute(request.clone()).await.unwrap()) }))
        });
    }
    group.finish();
}

fn bench_cached_repeat(c: &mut Criterion) {
    let runtime = Runtime::new().unwrap();
    let orchestrator = PanchangamOrchestrator::new(PanchangamConfig::default());
    let request = bench_request(12.9716, 77.5946);

    runtime.block_on(async {
        orchestrator.compute(request.clone()).await.unwrap();
    });

    c.bench_function("compute_repeat_same_instant", |b| {
        b.iter(|| runtime.block_on(async { black_box(orchestrator.compute(request.clone()).await.unwrap()) }))
    });
}

criterion_group!(benches, bench_single_compute, bench_varied_latitudes, bench_cached_repeat);
criterion_main!(benches);
