#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Scenario catalog invalid: {0}")]
    Invalid(String),

    #[error("YAML format error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
