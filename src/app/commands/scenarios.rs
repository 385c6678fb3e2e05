//! Scenario catalog queries.

use crate::app::AppContext;
use crate::domain::{AppError, Scenario, ScenarioCatalog};
use crate::ports::WorkspaceStore;

/// Summary row for listing scenarios.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSummary {
    pub name: String,
    pub description: String,
    pub lever_count: usize,
}

pub fn list<W: WorkspaceStore>(ctx: &AppContext<W>) -> Result<Vec<ScenarioSummary>, AppError> {
    let catalog = ctx.catalog()?;
    Ok(catalog
        .scenarios()
        .iter()
        .map(|scenario| ScenarioSummary {
            name: scenario.name.clone(),
            description: scenario.description.clone(),
            lever_count: scenario.levers.len(),
        })
        .collect())
}

pub fn show<W: WorkspaceStore>(ctx: &AppContext<W>, name: &str) -> Result<Scenario, AppError> {
    let catalog = ctx.catalog()?;
    find_scenario(&catalog, name).cloned()
}

/// Look up a scenario, failing with the list of available names.
pub fn find_scenario<'a>(catalog: &'a ScenarioCatalog, name: &str) -> Result<&'a Scenario, AppError> {
    catalog.find(name).ok_or_else(|| AppError::ScenarioNotFound {
        name: name.to_string(),
        available: catalog.names().join(", "),
    })
}
