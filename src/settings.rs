use std::path::PathBuf;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment};
use serde::Deserialize;

const ENV_PREFIX: &str = "RESTAURANTS";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Key of the item list in the scraper's export.
    pub collection_key: String,
    pub error_log: PathBuf,
    pub excerpt_chars: usize,
}

impl Settings {
    /// Defaults, overridden by `RESTAURANTS_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(
            Config::builder().add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true)),
        )
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .set_default("input", "results.json")?
            .set_default("output", "parsed_restaurants_paris.json")?
            .set_default("collection_key", "selection1")?
            .set_default("error_log", "parse_errors.log")?
            .set_default("excerpt_chars", 500_i64)?
            .build()?
            .try_deserialize()
    }
}
