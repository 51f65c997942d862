//! Hedging calculations for a base position and one hedging instrument.

mod analysis;
mod hedge_ratio;

pub use analysis::*;
pub use hedge_ratio::*;
