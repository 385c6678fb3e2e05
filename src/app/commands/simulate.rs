//! `simulate`: compute outcomes for a scenario and request narrative feedback.

use std::path::PathBuf;

use crate::adapters::assets::read_asset;
use crate::app::AppContext;
use crate::app::commands::scenarios::find_scenario;
use crate::domain::{
    AppError, CompletionConfig, FEEDBACK_TEMPLATE, LeverValues, OutcomeSet, Scenario, calculate,
    compose_report, render_feedback_prompt,
};
use crate::ports::{CompletionClient, CompletionRequest, WorkspaceStore};

/// What to do about narrative feedback for one simulation.
pub enum Feedback<C> {
    /// Skip feedback entirely.
    Disabled,
    /// Render the prompt but do not send it.
    PromptPreview,
    /// Send the prompt with the given client. A client that could not be built
    /// (for example because the API key is missing) is recorded as a feedback failure.
    Generate(Result<C, AppError>),
}

/// Options for a single simulation.
#[derive(Debug, Clone, Default)]
pub struct SimulateOptions {
    pub scenario: String,
    /// User-chosen lever values; levers left out take their defaults.
    pub levers: LeverValues,
    /// Write a text report to this path, relative to the workspace root.
    pub report: Option<PathBuf>,
}

/// Result of a simulation.
///
/// Outcomes and feedback are independently fallible: a feedback failure is
/// stored in `feedback` and never prevents outcomes from being returned.
#[derive(Debug)]
pub struct SimulationResult {
    pub scenario: Scenario,
    pub levers: LeverValues,
    pub outcomes: OutcomeSet,
    pub prompt: Option<String>,
    pub feedback: Option<Result<String, AppError>>,
    pub report_path: Option<PathBuf>,
}

impl SimulationResult {
    pub fn feedback_text(&self) -> Option<&str> {
        match &self.feedback {
            Some(Ok(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn feedback_error(&self) -> Option<&AppError> {
        match &self.feedback {
            Some(Err(err)) => Some(err),
            _ => None,
        }
    }
}

pub fn execute<W, C>(
    ctx: &AppContext<W>,
    options: SimulateOptions,
    feedback: Feedback<C>,
) -> Result<SimulationResult, AppError>
where
    W: WorkspaceStore,
    C: CompletionClient,
{
    let catalog = ctx.catalog()?;
    let scenario = find_scenario(&catalog, &options.scenario)?.clone();
    let levers = LeverValues::resolve(&scenario, &options.levers)?;
    let outcomes = calculate(&scenario.name, &levers);

    let (prompt, feedback) = match feedback {
        Feedback::Disabled => (None, None),
        Feedback::PromptPreview => {
            (Some(build_prompt(&scenario.name, &levers, &outcomes)?), None)
        }
        Feedback::Generate(client) => {
            let (prompt, result) = generate_feedback(
                &scenario.name,
                &levers,
                &outcomes,
                client,
                &ctx.config().completion,
            );
            (prompt, Some(result))
        }
    };

    let report_path = match options.report {
        Some(path) => {
            let feedback_text = match &feedback {
                Some(Ok(text)) => Some(text.as_str()),
                _ => None,
            };
            let report = compose_report(&scenario.name, &levers, &outcomes, feedback_text);
            ctx.workspace().write_file(&path.to_string_lossy(), &report)?;
            tracing::info!(path = %path.display(), "Wrote report");
            Some(path)
        }
        None => None,
    };

    Ok(SimulationResult { scenario, levers, outcomes, prompt, feedback, report_path })
}

fn build_prompt(
    scenario: &str,
    levers: &LeverValues,
    outcomes: &OutcomeSet,
) -> Result<String, AppError> {
    let template = read_asset(FEEDBACK_TEMPLATE)
        .ok_or_else(|| AppError::PromptRender(format!("template not found: {}", FEEDBACK_TEMPLATE)))?;
    render_feedback_prompt(&template, scenario, levers, outcomes)
}

fn generate_feedback<C: CompletionClient>(
    scenario: &str,
    levers: &LeverValues,
    outcomes: &OutcomeSet,
    client: Result<C, AppError>,
    config: &CompletionConfig,
) -> (Option<String>, Result<String, AppError>) {
    let prompt = match build_prompt(scenario, levers, outcomes) {
        Ok(prompt) => prompt,
        Err(err) => return (None, Err(err)),
    };

    let result = client.and_then(|client| {
        let request = CompletionRequest {
            model: config.model.clone(),
            prompt: prompt.clone(),
            temperature: config.temperature,
        };
        client.complete(&request)
    });

    if let Err(err) = &result {
        tracing::warn!(scenario, error = %err, "Feedback generation failed");
    }
    (Some(prompt), result)
}
