//! Scenario catalog: named policy scenarios and the levers they expose.

mod error;
mod model;

pub use error::CatalogError;
pub use model::{LeverDefinition, Scenario, ScenarioCatalog};
