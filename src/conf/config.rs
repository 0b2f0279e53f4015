use std::path::Path;

use crate::{
    conf::SourceConfig,
    core::AggregatorError::{self, ConfigParsingError},
};
use config::{Config as CConfig, ConfigBuilder, builder::DefaultState};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "AGGREGATOR";

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
}

impl Config {
    pub fn from_str(toml_str: &str) -> Result<Config, AggregatorError> {
        let builder = CConfig::builder()
            .add_source(config::File::from_str(toml_str, config::FileFormat::Toml));
        Self::build(builder)
    }

    /// Loads a TOML file, then applies `AGGREGATOR_SOURCE__*` overrides.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Config, AggregatorError> {
        let builder = CConfig::builder()
            .add_source(config::File::from(path.as_ref()).format(config::FileFormat::Toml))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            );
        Self::build(builder)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Config, AggregatorError> {
        builder
            .build()
            .map_err(|e| ConfigParsingError(e.to_string()))?
            .try_deserialize::<Config>()
            .map_err(|e| ConfigParsingError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_correct_toml() {
        let toml = r#"
        [source]
        root = "/data/aggregator"
        job = "DailyReport"
        max_days_back = 3
        "#;
        let conf = Config::from_str(toml);
        assert_eq!(
            conf,
            Ok(Config {
                source: SourceConfig {
                    root: Some(String::from("/data/aggregator")),
                    job: Some(String::from("DailyReport")),
                    max_days_back: 3,
                }
            })
        );
    }

    #[test]
    fn load_empty_toml_uses_defaults() {
        let conf = Config::from_str("").unwrap();
        assert_eq!(conf, Config::default());
        assert_eq!(conf.source.max_days_back, 7);
    }

    #[test]
    fn reject_unknown_fields() {
        let toml = r#"
        [source]
        delimiter = ";"
        "#;
        assert!(matches!(
            Config::from_str(toml),
            Err(ConfigParsingError(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[source]\njob = \"Weekly\"").unwrap();

        let conf = Config::from_file(file.path()).unwrap();
        assert_eq!(conf.source.job.as_deref(), Some("Weekly"));
        assert_eq!(conf.source.root, None);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let result = Config::from_file("/nonexistent/aggregator.toml");
        assert!(matches!(result, Err(ConfigParsingError(_))));
    }
}
