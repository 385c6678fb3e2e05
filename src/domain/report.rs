//! Plain-text simulation reports.

use crate::domain::AppError;
use crate::domain::levers::LeverValues;
use crate::domain::outcome::{Outcome, OutcomeSet, format_rounded};

const TITLE: &str = "Civic Macroeconomics Lab Report";
const SCENARIO_PREFIX: &str = "Scenario: ";
const LEVERS_HEADER: &str = "Policy Levers:";
const OUTCOMES_HEADER: &str = "Economic Outcomes:";
const FEEDBACK_HEADER: &str = "AI Feedback:";
const FEEDBACK_UNAVAILABLE: &str = "(feedback unavailable)";
const ITEM_PREFIX: &str = "- ";

/// Contents recovered from a report produced by [`compose_report`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReport {
    pub scenario: String,
    pub levers: LeverValues,
    /// Outcome values as rounded in the report.
    pub outcomes: OutcomeSet,
    pub feedback: Option<String>,
}

/// Compose the downloadable text report for one simulation.
///
/// Feedback is copied verbatim; when it is absent a fixed placeholder is written.
pub fn compose_report(
    scenario: &str,
    levers: &LeverValues,
    outcomes: &OutcomeSet,
    feedback: Option<&str>,
) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(TITLE.len()));
    out.push_str("\n\n");

    out.push_str(&format!("{}{}\n\n", SCENARIO_PREFIX, scenario));

    out.push_str(LEVERS_HEADER);
    out.push('\n');
    for (name, value) in levers.iter() {
        out.push_str(&format!("{}{}: {}\n", ITEM_PREFIX, name, value));
    }
    out.push('\n');

    out.push_str(OUTCOMES_HEADER);
    out.push('\n');
    for (outcome, value) in outcomes.iter() {
        out.push_str(&format!("{}{}: {}\n", ITEM_PREFIX, outcome.label(), format_rounded(value)));
    }
    out.push('\n');

    out.push_str(FEEDBACK_HEADER);
    out.push('\n');
    out.push_str(feedback.unwrap_or(FEEDBACK_UNAVAILABLE));
    out
}

/// Parse a report produced by [`compose_report`].
pub fn parse_report(text: &str) -> Result<ParsedReport, AppError> {
    let (head, feedback) = text
        .split_once(&format!("\n{}\n", FEEDBACK_HEADER))
        .ok_or_else(|| AppError::ReportParse(format!("missing '{}' section", FEEDBACK_HEADER)))?;

    let mut scenario = None;
    let mut levers = LeverValues::new();
    let mut outcomes: Vec<(Outcome, f64)> = Vec::new();
    let mut section = None;

    for line in head.lines() {
        if let Some(name) = line.strip_prefix(SCENARIO_PREFIX) {
            scenario = Some(name.to_string());
            continue;
        }
        if line == LEVERS_HEADER || line == OUTCOMES_HEADER {
            section = Some(line);
            continue;
        }
        let Some(item) = line.strip_prefix(ITEM_PREFIX) else {
            continue;
        };
        let (name, value) = split_item(item)?;
        match section {
            Some(LEVERS_HEADER) => levers.insert(name, value),
            Some(OUTCOMES_HEADER) => {
                let outcome = Outcome::from_label(name).ok_or_else(|| {
                    AppError::ReportParse(format!("unknown outcome '{}'", name))
                })?;
                outcomes.push((outcome, value));
            }
            _ => {
                return Err(AppError::ReportParse(format!("item outside a section: '{}'", line)));
            }
        }
    }

    let scenario = scenario
        .ok_or_else(|| AppError::ReportParse(format!("missing '{}' line", SCENARIO_PREFIX.trim())))?;
    let lookup = |target: Outcome| {
        outcomes
            .iter()
            .find(|(outcome, _)| *outcome == target)
            .map(|(_, value)| *value)
            .ok_or_else(|| AppError::ReportParse(format!("missing outcome '{}'", target.label())))
    };
    let outcomes = OutcomeSet {
        gdp: lookup(Outcome::Gdp)?,
        inflation_rate: lookup(Outcome::InflationRate)?,
        gini_coefficient: lookup(Outcome::GiniCoefficient)?,
    };
    let feedback = (feedback != FEEDBACK_UNAVAILABLE).then(|| feedback.to_string());

    Ok(ParsedReport { scenario, levers, outcomes, feedback })
}

fn split_item(item: &str) -> Result<(&str, f64), AppError> {
    let (name, raw) = item
        .rsplit_once(": ")
        .ok_or_else(|| AppError::ReportParse(format!("malformed item '{}'", item)))?;
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| AppError::ReportParse(format!("invalid number in '{}'", item)))?;
    Ok((name, value))
}
