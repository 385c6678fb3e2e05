//! Lever values chosen for a single simulation request.

use crate::domain::AppError;
use crate::domain::scenario::Scenario;

/// Ordered mapping from lever name to the value chosen by the user.
///
/// Insertion order is preserved because it drives the order of lines in the
/// feedback prompt and in saved reports.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeverValues {
    entries: Vec<(String, f64)>,
}

impl LeverValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, replacing an existing entry with the same name in place.
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.iter().find(|(existing, _)| existing == name).map(|(_, value)| *value)
    }

    /// Lenient lookup used by the calculator: absent levers count as zero.
    pub fn value_or_zero(&self, name: &str) -> f64 {
        self.get(name).unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Build the full set of values for `scenario`.
    ///
    /// Levers without an override take their declared default. Overrides must
    /// name a lever of the scenario and lie within its bounds. The result
    /// follows the scenario's lever order.
    pub fn resolve(scenario: &Scenario, overrides: &LeverValues) -> Result<Self, AppError> {
        for (name, _) in overrides.iter() {
            if scenario.lever(name).is_none() {
                return Err(AppError::UnknownLever {
                    scenario: scenario.name.clone(),
                    lever: name.to_string(),
                });
            }
        }

        let mut resolved = LeverValues::new();
        for lever in &scenario.levers {
            let value = overrides.get(&lever.name).unwrap_or(lever.default);
            if !lever.contains(value) {
                return Err(AppError::LeverOutOfRange {
                    lever: lever.name.clone(),
                    value,
                    min: lever.min,
                    max: lever.max,
                });
            }
            resolved.insert(lever.name.clone(), value);
        }
        Ok(resolved)
    }

    /// Parse a `NAME=VALUE` assignment as given on the command line.
    pub fn parse_assignment(raw: &str) -> Result<(String, f64), AppError> {
        let (name, value) =
            raw.split_once('=').ok_or_else(|| AppError::InvalidLeverAssignment(raw.to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidLeverAssignment(raw.to_string()));
        }
        let value = value
            .trim()
            .parse::<f64>()
            .map_err(|_| AppError::InvalidLeverAssignment(raw.to_string()))?;
        Ok((name.to_string(), value))
    }
}
