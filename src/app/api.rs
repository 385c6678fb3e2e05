//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::completion_http::HttpCompletionClient;
use crate::adapters::workspace_filesystem::FilesystemWorkspaceStore;
use crate::app::{
    AppContext,
    commands::{init, scenarios, simulate},
};
use crate::ports::{CompletionClient, MockCompletionClient};

pub use crate::app::commands::scenarios::ScenarioSummary;
pub use crate::app::commands::simulate::{SimulateOptions, SimulationResult};
pub use crate::domain::{AppError, LeverValues, Scenario};

/// How narrative feedback is produced for a simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedbackMode {
    /// Call the configured completion endpoint.
    #[default]
    Remote,
    /// Use the offline canned narrative.
    Mock,
    /// Render the prompt and stop before sending it.
    PromptPreview,
    /// No feedback.
    Disabled,
}

fn load_context(
    path: PathBuf,
    config_path: Option<&str>,
) -> Result<AppContext<FilesystemWorkspaceStore>, AppError> {
    AppContext::load(FilesystemWorkspaceStore::new(path), config_path)
}

/// Write the default configuration and scenario catalog to the current directory.
pub fn init() -> Result<Vec<String>, AppError> {
    init_at(std::env::current_dir()?)
}

/// Write the default configuration and scenario catalog at the specified path.
pub fn init_at(path: impl Into<PathBuf>) -> Result<Vec<String>, AppError> {
    let workspace = FilesystemWorkspaceStore::new(path.into());
    init::execute(&workspace)
}

// =============================================================================
// Scenario Catalog API
// =============================================================================

pub fn scenarios(config_path: Option<&str>) -> Result<Vec<ScenarioSummary>, AppError> {
    scenarios_at(std::env::current_dir()?, config_path)
}

/// List scenarios in catalog order.
pub fn scenarios_at(
    path: impl Into<PathBuf>,
    config_path: Option<&str>,
) -> Result<Vec<ScenarioSummary>, AppError> {
    let ctx = load_context(path.into(), config_path)?;
    scenarios::list(&ctx)
}

pub fn scenario(name: &str, config_path: Option<&str>) -> Result<Scenario, AppError> {
    scenario_at(std::env::current_dir()?, name, config_path)
}

/// Show one scenario with its lever definitions.
pub fn scenario_at(
    path: impl Into<PathBuf>,
    name: &str,
    config_path: Option<&str>,
) -> Result<Scenario, AppError> {
    let ctx = load_context(path.into(), config_path)?;
    scenarios::show(&ctx, name)
}

// =============================================================================
// Simulate Command API
// =============================================================================

/// Run a simulation in the current directory.
pub fn simulate(
    options: SimulateOptions,
    mode: FeedbackMode,
    config_path: Option<&str>,
) -> Result<SimulationResult, AppError> {
    simulate_at(std::env::current_dir()?, options, mode, config_path)
}

/// Run a simulation against the workspace at the specified path.
///
/// The API key is read only in [`FeedbackMode::Remote`]. When it is missing the
/// outcomes are still returned and the failure is reported through
/// [`SimulationResult::feedback`].
pub fn simulate_at(
    path: impl Into<PathBuf>,
    options: SimulateOptions,
    mode: FeedbackMode,
    config_path: Option<&str>,
) -> Result<SimulationResult, AppError> {
    let ctx = load_context(path.into(), config_path)?;

    let feedback: simulate::Feedback<Box<dyn CompletionClient>> = match mode {
        FeedbackMode::Disabled => simulate::Feedback::Disabled,
        FeedbackMode::PromptPreview => simulate::Feedback::PromptPreview,
        FeedbackMode::Mock => simulate::Feedback::Generate(Ok(
            Box::new(MockCompletionClient) as Box<dyn CompletionClient>
        )),
        FeedbackMode::Remote => simulate::Feedback::Generate(
            HttpCompletionClient::from_env_with_config(&ctx.config().completion)
                .map(|client| Box::new(client) as Box<dyn CompletionClient>),
        ),
    };

    simulate::execute(&ctx, options, feedback)
}
