use clap::Parser;
use hdrhistogram::Histogram;
use rand::Rng;
use serde::Serialize;
use std::time::Instant;
use tracing::info;
use vector_metrics::core::hardware::CpuFeatures;
use vector_metrics::core::ranking::mapk;
use vector_metrics::core::similarity::{euclidean_distance, pearson_similarity};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Vector dimension for the distance / correlation benchmarks.
    #[arg(short, long, default_value_t = 128)]
    dim: usize,

    /// Timed calls per vector metric.
    #[arg(short, long, default_value_t = 100_000)]
    iterations: usize,

    /// Queries in the mAP@k batch.
    #[arg(short, long, default_value_t = 1_000)]
    queries: usize,

    /// Rank cutoff for mAP@k.
    #[arg(short, long, default_value_t = 10)]
    k: usize,
}

#[derive(Serialize)]
struct VectorMetricReport {
    metric: &'static str,
    calls: usize,
    p50_ns: u64,
    p99_ns: u64,
    max_ns: u64,
    calls_per_sec: f64,
}

#[derive(Serialize)]
struct RankingReport {
    queries: usize,
    k: usize,
    passes: usize,
    batches_per_sec: f64,
}

#[derive(Serialize)]
struct BenchReport {
    dim: usize,
    simd_active: bool,
    vector_metrics: Vec<VectorMetricReport>,
    mapk: RankingReport,
}

fn bench_vector_metric<F>(
    metric: &'static str,
    iterations: usize,
    mut call: F,
) -> VectorMetricReport
where
    F: FnMut() -> f64,
{
    let mut hist = Histogram::<u64>::new(3).unwrap();
    let start = Instant::now();
    for _ in 0..iterations {
        let t = Instant::now();
        let _ = call();
        hist.record(t.elapsed().as_nanos() as u64).unwrap();
    }
    let elapsed = start.elapsed();

    VectorMetricReport {
        metric,
        calls: iterations,
        p50_ns: hist.value_at_quantile(0.50),
        p99_ns: hist.value_at_quantile(0.99),
        max_ns: hist.max(),
        calls_per_sec: iterations as f64 / elapsed.as_secs_f64(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let features = CpuFeatures::detect();
    info!(
        "benchmarking dim={} iterations={} (avx2={}, fma={})",
        args.dim, args.iterations, features.avx2, features.fma
    );

    let mut rng = rand::thread_rng();
    let x: Vec<f64> = (0..args.dim).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let y: Vec<f64> = (0..args.dim).map(|_| rng.gen_range(-1.0..1.0)).collect();

    let mut vector_metrics = Vec::new();
    info!("timing euclidean_distance...");
    vector_metrics.push(bench_vector_metric(
        "euclidean_distance",
        args.iterations,
        || euclidean_distance(&x, &y).unwrap(),
    ));
    info!("timing pearson_similarity...");
    vector_metrics.push(bench_vector_metric(
        "pearson_similarity",
        args.iterations,
        || pearson_similarity(&x, &y).unwrap(),
    ));

    // Ranked-list batch: item universe sized so hits are common but not total.
    info!("timing mapk over {} queries...", args.queries);
    let universe = (args.k * 10) as u32;
    let actual: Vec<Vec<u32>> = (0..args.queries)
        .map(|_| (0..args.k).map(|_| rng.gen_range(0..universe)).collect())
        .collect();
    let predicted: Vec<Vec<u32>> = (0..args.queries)
        .map(|_| (0..args.k * 2).map(|_| rng.gen_range(0..universe)).collect())
        .collect();

    let passes = 100;
    let start = Instant::now();
    for _ in 0..passes {
        let _ = mapk(&actual, &predicted, args.k)?;
    }
    let elapsed = start.elapsed();

    let report = BenchReport {
        dim: args.dim,
        simd_active: features.simd_active(),
        vector_metrics,
        mapk: RankingReport {
            queries: args.queries,
            k: args.k,
            passes,
            batches_per_sec: passes as f64 / elapsed.as_secs_f64(),
        },
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
