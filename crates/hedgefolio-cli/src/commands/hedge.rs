//! Hedge command implementation.
//!
//! Calculates the minimum-variance hedge ratio of a base instrument against
//! a hedging instrument over a date range.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use hedgefolio_analytics::hedging::{analyze_hedge, HedgeAnalysis};
use hedgefolio_core::Date;
use hedgefolio_traits::PriceSource;

use crate::cli::OutputFormat;
use crate::commands::{parse_date, parse_symbol, warn_outside_universe, Context};
use crate::output::{format_number, print_header, print_json_value, print_rows, KeyValue};

/// Arguments for the hedge command.
#[derive(Args, Debug)]
pub struct HedgeArgs {
    /// Instrument to hedge (e.g. AAPL)
    #[arg(short, long)]
    pub base: String,

    /// Hedging instrument (e.g. KO)
    #[arg(long)]
    pub hedge: String,

    /// Start date (YYYY-MM-DD, inclusive). Defaults to the configured start.
    #[arg(short, long)]
    pub start: Option<String>,

    /// End date (YYYY-MM-DD, exclusive). Defaults to the configured end.
    #[arg(short, long)]
    pub end: Option<String>,

    /// Show the daily-change scatter points and trend line values
    #[arg(long)]
    pub scatter: bool,

    /// Show aligned prices and the hedged position
    #[arg(long)]
    pub prices: bool,
}

/// Full JSON report.
#[derive(Serialize)]
struct HedgeReport<'a> {
    start: Date,
    end: Date,
    #[serde(flatten)]
    analysis: &'a HedgeAnalysis,
}

#[derive(Serialize, Tabled)]
struct ScatterRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Base Change")]
    base_change: String,
    #[tabled(rename = "Hedge Change")]
    hedge_change: String,
    #[tabled(rename = "Trend")]
    trend: String,
}

#[derive(Serialize, Tabled)]
struct PriceRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Base")]
    base: String,
    #[tabled(rename = "Hedge")]
    hedge: String,
    #[tabled(rename = "Hedged Price")]
    hedged: String,
    #[tabled(rename = "Hedged Change")]
    hedged_change: String,
}

/// Execute the hedge command.
pub fn execute(args: HedgeArgs, format: OutputFormat, ctx: &Context) -> Result<()> {
    let base = parse_symbol(&args.base)?;
    let hedge = parse_symbol(&args.hedge)?;
    warn_outside_universe(&base, "base", ctx.config.is_hedge_base(&base));
    warn_outside_universe(&hedge, "hedge", ctx.config.is_hedge_instrument(&hedge));

    let universe = &ctx.config.universe.hedging;
    let start = args.start.as_deref().map(parse_date).transpose()?.unwrap_or(universe.start);
    let end = args.end.as_deref().map(parse_date).transpose()?.unwrap_or(universe.end);

    let source = ctx.price_source()?;
    let base_prices = source.fetch_daily_adjusted_close(&base, start, end)?;
    let hedge_prices = source.fetch_daily_adjusted_close(&hedge, start, end)?;
    let analysis = analyze_hedge(&base_prices, &hedge_prices)?;

    match format {
        OutputFormat::Table => {
            print_header(&format!("Hedge Ratio: {} hedged with {}", base, hedge));
            print_rows(&summary(&analysis, start, end), format)?;
            if args.scatter {
                print_header("Daily Changes");
                print_rows(&scatter_rows(&analysis), format)?;
            }
            if args.prices {
                print_header("Hedged Position");
                print_rows(&price_rows(&analysis), format)?;
            }
        }
        OutputFormat::Json => {
            print_json_value(&HedgeReport {
                start,
                end,
                analysis: &analysis,
            })?;
        }
        OutputFormat::Csv => {
            if args.scatter {
                print_rows(&scatter_rows(&analysis), format)?;
            } else if args.prices {
                print_rows(&price_rows(&analysis), format)?;
            } else {
                print_rows(&summary(&analysis, start, end), format)?;
            }
        }
        OutputFormat::Minimal => {
            println!("{:.6}", analysis.hedge.ratio);
        }
    }

    Ok(())
}

fn summary(analysis: &HedgeAnalysis, start: Date, end: Date) -> Vec<KeyValue> {
    let ratio = &analysis.hedge;
    let trend = &analysis.scatter.trend;
    vec![
        KeyValue::new("Period", format!("{} to {}", start, end)),
        KeyValue::new("Observations", ratio.observations.to_string()),
        KeyValue::from_number(
            format!("Std dev of daily change ({})", ratio.base),
            ratio.std_base,
            4,
        ),
        KeyValue::from_number(
            format!("Std dev of daily change ({})", ratio.hedge),
            ratio.std_hedge,
            4,
        ),
        KeyValue::from_number(
            format!("Correlation ({} vs {})", ratio.base, ratio.hedge),
            ratio.correlation,
            4,
        ),
        KeyValue::from_number("Hedge ratio", ratio.ratio, 4),
        KeyValue::from_number(
            format!("Optimal no. stocks in {} to hedge", ratio.hedge),
            ratio.hedge_quantity(1.0),
            2,
        ),
        KeyValue::new(
            "Trend line",
            format!(
                "{} = {:.4} + {:.4} * {}",
                ratio.hedge, trend.intercept, trend.slope, ratio.base
            ),
        ),
        KeyValue::from_number("Trend line R²", trend.r_squared, 4),
        KeyValue::from_percent("Variance reduction", analysis.variance_reduction),
    ]
}

fn scatter_rows(analysis: &HedgeAnalysis) -> Vec<ScatterRow> {
    let scatter = &analysis.scatter;
    scatter
        .dates
        .iter()
        .zip(scatter.points())
        .map(|(date, (x, y))| ScatterRow {
            date: date.to_string(),
            base_change: format!("{:.4}", x),
            hedge_change: format!("{:.4}", y),
            trend: format_number(scatter.trend.predict(x), 4),
        })
        .collect()
}

fn price_rows(analysis: &HedgeAnalysis) -> Vec<PriceRow> {
    let hedged = &analysis.hedged;
    hedged
        .dates
        .iter()
        .zip(&hedged.prices)
        .enumerate()
        .map(|(i, (date, price))| PriceRow {
            date: date.to_string(),
            base: format!("{:.4}", hedged.base_prices[i]),
            hedge: format!("{:.4}", hedged.hedge_prices[i]),
            hedged: format!("{:.4}", price),
            hedged_change: i
                .checked_sub(1)
                .and_then(|j| hedged.changes.get(j))
                .map_or_else(String::new, |c| format!("{:.4}", c)),
        })
        .collect()
}

