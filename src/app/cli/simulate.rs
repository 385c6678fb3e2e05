//! Simulate command implementation.

use std::io::ErrorKind;
use std::path::PathBuf;

use clap::Args;
use dialoguer::{Error as DialoguerError, Input, Select};

use crate::app::api::{FeedbackMode, SimulateOptions, SimulationResult};
use crate::domain::outcome::format_rounded;
use crate::domain::{AppError, LeverValues, Scenario};

const BAR_WIDTH: usize = 40;

#[derive(Args)]
pub struct SimulateArgs {
    /// Scenario name (prompted when omitted)
    scenario: Option<String>,
    /// Lever value as NAME=VALUE; repeat for several levers
    #[arg(short, long = "lever", value_name = "NAME=VALUE")]
    levers: Vec<String>,
    /// Skip narrative feedback
    #[arg(long, conflicts_with_all = ["mock", "prompt_preview"])]
    no_feedback: bool,
    /// Use the offline mock narrative instead of the completion API
    #[arg(long, conflicts_with = "prompt_preview")]
    mock: bool,
    /// Print the feedback prompt without sending it
    #[arg(long)]
    prompt_preview: bool,
    /// Write a text report (default name: civlab-report-<timestamp>.txt)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    report: Option<Option<PathBuf>>,
}

impl SimulateArgs {
    fn feedback_mode(&self) -> FeedbackMode {
        if self.no_feedback {
            FeedbackMode::Disabled
        } else if self.mock {
            FeedbackMode::Mock
        } else if self.prompt_preview {
            FeedbackMode::PromptPreview
        } else {
            FeedbackMode::Remote
        }
    }
}

pub fn run_simulate(args: SimulateArgs, config: Option<&str>) -> Result<(), AppError> {
    let mode = args.feedback_mode();

    let mut levers = LeverValues::new();
    for raw in &args.levers {
        let (name, value) = LeverValues::parse_assignment(raw)?;
        levers.insert(name, value);
    }

    let scenario = match args.scenario {
        Some(name) => name,
        None => {
            let Some(scenario) = prompt_scenario(config)? else {
                return Ok(());
            };
            if args.levers.is_empty() {
                let Some(chosen) = prompt_levers(&scenario)? else {
                    return Ok(());
                };
                levers = chosen;
            }
            scenario.name
        }
    };

    let report = args.report.map(|path| path.unwrap_or_else(default_report_path));
    let options = SimulateOptions { scenario, levers, report };
    let result = crate::app::api::simulate(options, mode, config)?;

    print_result(&result, mode);
    Ok(())
}

fn default_report_path() -> PathBuf {
    PathBuf::from(format!("civlab-report-{}.txt", chrono::Local::now().format("%Y%m%d-%H%M%S")))
}

fn prompt_scenario(config: Option<&str>) -> Result<Option<Scenario>, AppError> {
    let summaries = crate::app::api::scenarios(config)?;
    let items: Vec<String> =
        summaries.iter().map(|s| format!("{}: {}", s.name, s.description)).collect();

    let selection = match Select::new()
        .with_prompt("Select scenario")
        .items(&items)
        .default(0)
        .interact_opt()
    {
        Ok(selection) => selection,
        Err(err) if is_interrupted(&err) => None,
        Err(err) => return Err(AppError::Prompt(format!("Failed to select scenario: {}", err))),
    };

    match selection {
        Some(index) => crate::app::api::scenario(&summaries[index].name, config).map(Some),
        None => Ok(None),
    }
}

fn prompt_levers(scenario: &Scenario) -> Result<Option<LeverValues>, AppError> {
    let mut levers = LeverValues::new();
    for lever in &scenario.levers {
        let (min, max) = (lever.min, lever.max);
        let input = Input::<f64>::new()
            .with_prompt(format!("{} [{} to {}]", lever.label(), min, max))
            .default(lever.default)
            .validate_with(move |value: &f64| -> Result<(), String> {
                if value.is_finite() && (min..=max).contains(value) {
                    Ok(())
                } else {
                    Err(format!("must be between {} and {}", min, max))
                }
            })
            .interact_text();
        let value: f64 = match input {
            Ok(value) => value,
            Err(err) if is_interrupted(&err) => return Ok(None),
            Err(err) => {
                return Err(AppError::Prompt(format!("Failed to read '{}': {}", lever.name, err)));
            }
        };
        levers.insert(lever.name.clone(), value);
    }
    Ok(Some(levers))
}

fn is_interrupted(err: &DialoguerError) -> bool {
    matches!(err, DialoguerError::IO(io) if io.kind() == ErrorKind::Interrupted)
}

fn print_result(result: &SimulationResult, mode: FeedbackMode) {
    println!("Scenario: {}", result.scenario.name);
    println!();
    println!("Policy Levers:");
    for (name, value) in result.levers.iter() {
        println!("  • {}: {}", name, value);
    }
    println!();

    println!("Economic Outcomes:");
    let rows: Vec<(&str, f64)> =
        result.outcomes.iter().map(|(outcome, value)| (outcome.label(), value)).collect();
    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let max = rows.iter().map(|(_, value)| value.max(0.0)).fold(0.0, f64::max);
    for (label, value) in &rows {
        println!(
            "  {:<label_width$}  {:>10}  {}",
            label,
            format_rounded(*value),
            bar(*value, max),
            label_width = label_width
        );
    }

    if let (FeedbackMode::PromptPreview, Some(prompt)) = (mode, &result.prompt) {
        println!();
        println!("Feedback prompt:");
        println!("{}", prompt);
    }

    match &result.feedback {
        Some(Ok(text)) => {
            println!();
            println!("AI Feedback:");
            println!("{}", text);
        }
        Some(Err(err)) => {
            println!();
            println!("{}", feedback_warning(err));
        }
        None => {}
    }

    if let Some(path) = &result.report_path {
        println!();
        println!("✅ Report written to {}", path.display());
    }
}

fn feedback_warning(err: &AppError) -> String {
    if err.is_feedback_failure() {
        format!("⚠️  Feedback unavailable: {}", err)
    } else {
        format!("⚠️  Feedback failed unexpectedly: {}", err)
    }
}

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let width = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(width.max(1))
}
