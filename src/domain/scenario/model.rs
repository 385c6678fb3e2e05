use serde::Deserialize;
use std::collections::HashSet;

use super::error::CatalogError;

/// A single adjustable numeric policy input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LeverDefinition {
    pub name: String,
    pub unit: String,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl LeverDefinition {
    /// Whether `value` lies inside the declared bounds.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    /// Label shown next to the input, e.g. `Interest Rate (%)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.unit)
    }

    fn validate(&self, scenario: &str) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::Invalid(format!(
                "Scenario '{}' has a lever with an empty name",
                scenario
            )));
        }
        if self.unit.trim().is_empty() {
            return Err(CatalogError::Invalid(format!(
                "Lever '{}' in scenario '{}' has an empty unit",
                self.name, scenario
            )));
        }
        if !(self.min.is_finite() && self.max.is_finite() && self.default.is_finite()) {
            return Err(CatalogError::Invalid(format!(
                "Lever '{}' in scenario '{}' has non-finite bounds",
                self.name, scenario
            )));
        }
        if self.min > self.max {
            return Err(CatalogError::Invalid(format!(
                "Lever '{}' in scenario '{}': min {} exceeds max {}",
                self.name, scenario, self.min, self.max
            )));
        }
        if !self.contains(self.default) {
            return Err(CatalogError::Invalid(format!(
                "Lever '{}' in scenario '{}': default {} is outside [{}, {}]",
                self.name, scenario, self.default, self.min, self.max
            )));
        }
        Ok(())
    }
}

/// A named bundle of description plus levers presented together.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub name: String,
    pub description: String,
    pub levers: Vec<LeverDefinition>,
}

impl Scenario {
    pub fn lever(&self, name: &str) -> Option<&LeverDefinition> {
        self.levers.iter().find(|lever| lever.name == name)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::Invalid("Scenario name must not be empty".into()));
        }
        if self.description.trim().is_empty() {
            return Err(CatalogError::Invalid(format!(
                "Scenario '{}' has an empty description",
                self.name
            )));
        }
        if self.levers.is_empty() {
            return Err(CatalogError::Invalid(format!(
                "Scenario '{}' must declare at least one lever",
                self.name
            )));
        }

        let mut seen = HashSet::new();
        for lever in &self.levers {
            lever.validate(&self.name)?;
            if !seen.insert(lever.name.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "Duplicate lever '{}' in scenario '{}'",
                    lever.name, self.name
                )));
            }
        }
        Ok(())
    }
}

/// Immutable list of scenarios, loaded once per process.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
}

impl ScenarioCatalog {
    /// Parse and validate a catalog from its YAML source.
    pub fn parse_yaml(content: &str) -> Result<Self, CatalogError> {
        let catalog: ScenarioCatalog = serde_yaml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn names(&self) -> Vec<&str> {
        self.scenarios.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn find(&self, name: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.name == name)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.scenarios.is_empty() {
            return Err(CatalogError::Invalid("Catalog must contain at least one scenario".into()));
        }

        let mut seen = HashSet::new();
        for scenario in &self.scenarios {
            scenario.validate()?;
            if !seen.insert(scenario.name.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "Duplicate scenario name '{}'",
                    scenario.name
                )));
            }
        }
        Ok(())
    }
}
