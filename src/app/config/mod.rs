mod load_catalog;
mod load_config;

pub use load_catalog::load_catalog;
pub use load_config::load_config;
