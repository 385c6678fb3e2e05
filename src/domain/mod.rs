pub mod app_config;
pub mod error;
pub mod feedback_prompt;
pub mod levers;
pub mod outcome;
pub mod report;
pub mod scenario;

pub use app_config::{AppConfig, CONFIG_FILE, CatalogConfig, CompletionConfig};
pub use error::AppError;
pub use feedback_prompt::{FEEDBACK_TEMPLATE, render_feedback_prompt};
pub use levers::LeverValues;
pub use outcome::{Outcome, OutcomeSet, calculate};
pub use report::{ParsedReport, compose_report, parse_report};
pub use scenario::{CatalogError, LeverDefinition, Scenario, ScenarioCatalog};
