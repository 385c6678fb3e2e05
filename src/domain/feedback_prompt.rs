//! Feedback prompt rendering.

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::domain::AppError;
use crate::domain::levers::LeverValues;
use crate::domain::outcome::OutcomeSet;

/// Path of the feedback prompt template inside the embedded asset catalog.
pub const FEEDBACK_TEMPLATE: &str = "prompts/feedback_prompt.j2";

#[derive(Debug, Serialize)]
struct LeverLine {
    name: String,
    value: String,
}

#[derive(Debug, Serialize)]
struct OutcomeLine {
    label: &'static str,
    value: String,
}

/// Render the feedback prompt for one simulation.
///
/// Lever values are shown in their shortest form (`2`, `7.25`); outcome values
/// always carry two decimals.
pub fn render_feedback_prompt(
    template: &str,
    scenario: &str,
    levers: &LeverValues,
    outcomes: &OutcomeSet,
) -> Result<String, AppError> {
    let levers: Vec<LeverLine> = levers
        .iter()
        .map(|(name, value)| LeverLine { name: name.to_string(), value: value.to_string() })
        .collect();
    let outcomes: Vec<OutcomeLine> = outcomes
        .iter()
        .map(|(outcome, value)| OutcomeLine { label: outcome.label(), value: format!("{:.2}", value) })
        .collect();

    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    env.render_str(
        template,
        minijinja::context! { scenario => scenario, levers => levers, outcomes => outcomes },
    )
    .map_err(|err| AppError::PromptRender(format!("{}: {}", FEEDBACK_TEMPLATE, err)))
}
