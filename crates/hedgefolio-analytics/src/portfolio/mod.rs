//! Two-asset portfolio statistics.
//!
//! Annualized return and volatility for two instruments, the efficient
//! frontier sampled over the allocation weight, and the analytic
//! minimum-variance allocation.

mod engine;
mod frontier;
mod pair_stats;
mod settings;

pub use engine::*;
pub use frontier::*;
pub use pair_stats::*;
pub use settings::*;
