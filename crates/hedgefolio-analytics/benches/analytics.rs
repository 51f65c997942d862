//! Benchmarks for hedge ratio and frontier calculations.
//!
//! Run with: cargo bench -p hedgefolio-analytics

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use hedgefolio_analytics::prelude::*;
use hedgefolio_core::{Date, PriceSeries, Symbol};

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// Deterministic pseudo-random walk of `n` daily prices.
fn price_walk(symbol: &str, n: usize, seed: u64) -> PriceSeries {
    let start = Date::from_ymd(2019, 1, 1).unwrap();
    let mut state = seed;
    let mut price = 100.0;
    let pairs = (0..n)
        .map(|i| {
            state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            let u = (state >> 11) as f64 / (1u64 << 53) as f64;
            price *= 1.0 + (u - 0.5) * 0.04;
            (start.add_days(i as i64), price)
        })
        .collect();
    PriceSeries::from_pairs(Symbol::new(symbol), pairs).unwrap()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_hedge_ratio(c: &mut Criterion) {
    let mut group = c.benchmark_group("hedge_ratio");
    for n in [252usize, 1260] {
        let base = price_walk("AAPL", n, 7);
        let hedge = price_walk("KO", n, 11);
        group.bench_with_input(BenchmarkId::new("compute", n), &n, |b, _| {
            b.iter(|| compute_hedge_ratio(black_box(&base), black_box(&hedge)));
        });
        group.bench_with_input(BenchmarkId::new("analyze", n), &n, |b, _| {
            b.iter(|| analyze_hedge(black_box(&base), black_box(&hedge)));
        });
    }
    group.finish();
}

fn bench_portfolio(c: &mut Criterion) {
    let first = price_walk("AAPL", 1260, 3);
    let second = price_walk("JNJ", 1260, 5);
    c.bench_function("portfolio_statistics_5y", |b| {
        b.iter(|| {
            compute_portfolio_statistics(
                black_box(&first),
                black_box(&second),
                0.5,
                TRADING_DAYS_PER_YEAR,
            )
        });
    });

    let portfolio = TwoAssetPortfolio::with_correlation(0.12, 0.06, 0.25, 0.15, 0.3);
    let mut group = c.benchmark_group("frontier");
    for steps in [100usize, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter(|| black_box(portfolio).frontier(steps));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hedge_ratio, bench_portfolio);
criterion_main!(benches);
