//! Portfolio command implementation.
//!
//! Annualized statistics, the efficient frontier and the minimum-variance
//! allocation for two assets over a lookback period.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use hedgefolio_analytics::portfolio::{
    MinVariancePolicy, PortfolioPoint, PortfolioStatistics, PortfolioStatsEngine,
};
use hedgefolio_core::{Date, Lookback};
use hedgefolio_traits::PriceSource;

use crate::cli::OutputFormat;
use crate::commands::{
    parse_date, parse_period, parse_symbol, validate_weight, warn_outside_universe, Context,
};
use crate::output::{format_percent, print_header, print_json_value, print_rows, KeyValue};

/// Arguments for the portfolio command.
#[derive(Args, Debug)]
pub struct PortfolioArgs {
    /// First asset (e.g. AAPL)
    #[arg(long)]
    pub first: String,

    /// Second asset (e.g. JNJ)
    #[arg(long)]
    pub second: String,

    /// Lookback period (e.g. 2y, 6mo, 90d). Defaults to the first configured period.
    #[arg(short, long)]
    pub period: Option<String>,

    /// Last date of the lookback (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub as_of: Option<String>,

    /// Weight of the first asset, between 0 and 1. Defaults to the configured weight.
    #[arg(short, long)]
    pub weight: Option<f64>,

    /// Show every sampled frontier point
    #[arg(long)]
    pub frontier: bool,

    /// Allow a minimum-variance weight outside [0, 1] (short positions)
    #[arg(long)]
    pub unconstrained: bool,
}

/// Full JSON report.
#[derive(Serialize)]
struct PortfolioReport<'a> {
    period: Lookback,
    as_of: Date,
    weight: f64,
    #[serde(flatten)]
    stats: &'a PortfolioStatistics,
}

#[derive(Serialize, Tabled)]
struct AssetRow {
    #[tabled(rename = "Stock")]
    stock: String,
    #[tabled(rename = "Mean")]
    mean: String,
    #[tabled(rename = "Standard Deviation")]
    std_dev: String,
}

#[derive(Serialize, Tabled)]
struct PointRow {
    #[tabled(rename = "Point")]
    label: String,
    #[tabled(rename = "Weight")]
    weight: String,
    #[tabled(rename = "Expected Return")]
    expected_return: String,
    #[tabled(rename = "Standard Deviation")]
    std_dev: String,
}

impl PointRow {
    fn new(label: impl Into<String>, point: &PortfolioPoint) -> Self {
        Self {
            label: label.into(),
            weight: format_percent(point.weight),
            expected_return: format_percent(point.expected_return),
            std_dev: format_percent(point.standard_deviation),
        }
    }
}

/// Execute the portfolio command.
pub fn execute(args: PortfolioArgs, format: OutputFormat, ctx: &Context) -> Result<()> {
    let first = parse_symbol(&args.first)?;
    let second = parse_symbol(&args.second)?;
    let universe = &ctx.config.universe.portfolio;
    warn_outside_universe(&first, "first", universe.first.contains(&first));
    warn_outside_universe(&second, "second", universe.second.contains(&second));

    let period = match args.period.as_deref() {
        Some(p) => parse_period(p)?,
        None => universe.default_period(),
    };
    let as_of = args.as_of.as_deref().map(parse_date).transpose()?.unwrap_or_else(Date::today);
    let weight = validate_weight(args.weight.unwrap_or(universe.default_weight))?;

    let mut settings = ctx.config.analytics.portfolio_settings();
    if args.unconstrained {
        settings = settings.with_min_variance_policy(MinVariancePolicy::Unconstrained);
    }

    let source = ctx.price_source()?;
    let first_prices = source.fetch_daily_adjusted_close_period(&first, period, as_of)?;
    let second_prices = source.fetch_daily_adjusted_close_period(&second, period, as_of)?;
    let stats = PortfolioStatsEngine::new(settings).compute(&first_prices, &second_prices, weight)?;

    match format {
        OutputFormat::Table => {
            print_header(&format!(
                "Portfolio: {} / {} ({} to {})",
                first, second, period, as_of
            ));
            print_rows(&asset_rows(&stats), format)?;
            print_rows(&summary(&stats), format)?;
            print_header("Marked Points");
            print_rows(&marker_rows(&stats), format)?;
            if args.frontier {
                print_header("Efficient Frontier");
                print_rows(&frontier_rows(&stats), format)?;
            }
        }
        OutputFormat::Json => {
            print_json_value(&PortfolioReport {
                period,
                as_of,
                weight,
                stats: &stats,
            })?;
        }
        OutputFormat::Csv => {
            if args.frontier {
                print_rows(&frontier_rows(&stats), format)?;
            } else {
                print_rows(&marker_rows(&stats), format)?;
            }
        }
        OutputFormat::Minimal => {
            println!("{:.4}", stats.min_variance_weight.applied);
        }
    }

    Ok(())
}

fn asset_rows(stats: &PortfolioStatistics) -> Vec<AssetRow> {
    let pair = &stats.pair_stats;
    vec![
        AssetRow {
            stock: pair.first.to_string(),
            mean: format_percent(pair.mean1),
            std_dev: format_percent(pair.std1),
        },
        AssetRow {
            stock: pair.second.to_string(),
            mean: format_percent(pair.mean2),
            std_dev: format_percent(pair.std2),
        },
    ]
}

fn summary(stats: &PortfolioStatistics) -> Vec<KeyValue> {
    let pair = &stats.pair_stats;
    let mv = &stats.min_variance_weight;
    let mut rows = vec![
        KeyValue::from_number("Correlation", pair.correlation, 4),
        KeyValue::new("Observations", pair.observations.to_string()),
        KeyValue::from_percent(format!("Min-variance weight in {}", pair.first), mv.applied),
    ];
    if mv.clamped {
        rows.push(KeyValue::new(
            "Unconstrained weight",
            format!("{} (clamped)", format_percent(mv.unconstrained)),
        ));
    }
    rows
}

fn marker_rows(stats: &PortfolioStatistics) -> Vec<PointRow> {
    let pair = &stats.pair_stats;
    vec![
        PointRow::new("Portfolio", &stats.chosen_point),
        PointRow::new("Minimum variance", &stats.min_variance_point),
        PointRow::new(pair.first.to_string(), &stats.asset1_point),
        PointRow::new(pair.second.to_string(), &stats.asset2_point),
    ]
}

fn frontier_rows(stats: &PortfolioStatistics) -> Vec<PointRow> {
    stats
        .frontier
        .iter()
        .enumerate()
        .map(|(i, point)| PointRow::new(i.to_string(), point))
        .collect()
}
