//! Universe command implementation.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use hedgefolio_config::UniverseConfig;
use hedgefolio_core::Symbol;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_header, print_json_value, print_rows};

#[derive(Serialize, Tabled)]
struct UniverseRow {
    #[tabled(rename = "Universe")]
    universe: &'static str,
    #[tabled(rename = "Role")]
    role: &'static str,
    #[tabled(rename = "Choices")]
    choices: String,
}

/// Execute the universe command.
pub fn execute(format: OutputFormat, ctx: &Context) -> Result<()> {
    let universe = &ctx.config.universe;
    match format {
        OutputFormat::Json => print_json_value(universe)?,
        OutputFormat::Minimal => {
            for row in rows(universe) {
                println!("{}.{}: {}", row.universe, row.role, row.choices);
            }
        }
        OutputFormat::Table | OutputFormat::Csv => {
            if format == OutputFormat::Table {
                print_header("Instrument Universes");
            }
            print_rows(&rows(universe), format)?;
        }
    }
    Ok(())
}

fn rows(universe: &UniverseConfig) -> Vec<UniverseRow> {
    let hedging = &universe.hedging;
    let portfolio = &universe.portfolio;
    vec![
        UniverseRow {
            universe: "hedging",
            role: "base",
            choices: join(&hedging.base),
        },
        UniverseRow {
            universe: "hedging",
            role: "hedge",
            choices: join(&hedging.hedge),
        },
        UniverseRow {
            universe: "hedging",
            role: "window",
            choices: format!("{} to {}", hedging.start, hedging.end),
        },
        UniverseRow {
            universe: "portfolio",
            role: "first",
            choices: join(&portfolio.first),
        },
        UniverseRow {
            universe: "portfolio",
            role: "second",
            choices: join(&portfolio.second),
        },
        UniverseRow {
            universe: "portfolio",
            role: "periods",
            choices: portfolio
                .periods
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        },
        UniverseRow {
            universe: "portfolio",
            role: "weight",
            choices: format!("{:.2}", portfolio.default_weight),
        },
    ]
}

fn join(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(Symbol::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
