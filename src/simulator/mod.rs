//! Monte Carlo balance harness for the encounter loop.
//!
//! Runs many spawn-attack-reward cycles against a template character and
//! aggregates win rate, round counts, xp/gold accrual, and per-item drop
//! counts. Seeded runs reproduce exactly.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::run_simulation;
