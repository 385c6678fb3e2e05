//! civlab: Civic Macroeconomics Lab.
//!
//! Simulates how policy levers move GDP, inflation, and inequality for a catalog
//! of scenarios, asks a chat completion service for a short tradeoff analysis,
//! and writes plain-text reports.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    FeedbackMode, ScenarioSummary, SimulateOptions, SimulationResult, init, init_at, scenario,
    scenario_at, scenarios, scenarios_at, simulate, simulate_at,
};
pub use domain::{AppError, LeverValues, OutcomeSet, Scenario, compose_report, parse_report};
