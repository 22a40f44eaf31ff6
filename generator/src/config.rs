//! Configuration management for the vineyard dataset generator
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code (reproduce the reference dataset)
//! 2. Optional configuration file (config/generator.toml or any supported format)
//! 3. Environment variable overrides with VINHA_ prefix

use std::path::PathBuf;

use chrono::NaiveDate;
use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::DateRange;

use crate::error::{GeneratorError, GeneratorResult};

/// Main generator configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Directory holding every generated table
    pub output_dir: PathBuf,

    /// Plot & climate stage configuration
    pub climate: ClimateConfig,

    /// Soil & productivity stage configuration
    pub productivity: ProductivityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClimateConfig {
    /// Seed of the stage's random generator
    pub seed: u64,

    /// First day of the climate series
    ///
    /// The table keeps its fixed name `clima_diario_2019_2024.csv` whatever
    /// range is configured here.
    pub start_date: NaiveDate,

    /// Last day of the climate series (inclusive)
    pub end_date: NaiveDate,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProductivityConfig {
    /// Seed of the stage's random generator
    pub seed: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_layered("config/generator", "VINHA")
    }

    /// Defaults, then the optional file `file_stem.*`, then `{env_prefix}_*`
    /// variables with `__` between nested keys
    fn load_layered(file_stem: &str, env_prefix: &str) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let config = config::Config::builder()
            // Start with default values
            .set_default("output_dir", defaults.output_dir.to_string_lossy().into_owned())?
            .set_default("climate.seed", defaults.climate.seed)?
            .set_default("climate.start_date", defaults.climate.start_date.to_string())?
            .set_default("climate.end_date", defaults.climate.end_date.to_string())?
            .set_default("productivity.seed", defaults.productivity.seed)?
            .add_source(File::with_name(file_stem).required(false))
            // Override with environment variables (VINHA_ prefix)
            .add_source(
                Environment::with_prefix(env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// The climate series' date range
    pub fn date_range(&self) -> GeneratorResult<DateRange> {
        DateRange::new(self.climate.start_date, self.climate.end_date).ok_or_else(|| {
            GeneratorError::Configuration(format!(
                "climate.start_date {} is after climate.end_date {}",
                self.climate.start_date, self.climate.end_date
            ))
        })
    }

    /// Same configuration writing into another directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("data/synthetic"),
            climate: ClimateConfig::default(),
            productivity: ProductivityConfig::default(),
        }
    }
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            start_date: NaiveDate::from_ymd_opt(2019, 1, 1).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default(),
        }
    }
}

impl Default for ProductivityConfig {
    fn default() -> Self {
        Self { seed: 123 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range_is_six_years() {
        let range = Config::default().date_range().unwrap();
        assert_eq!(range.len_days(), 2192);
        assert_eq!(range.years(), 2019..=2024);
    }

    #[test]
    fn test_reversed_range_is_configuration_error() {
        let mut config = Config::default();
        config.climate.end_date = NaiveDate::from_ymd_opt(2018, 12, 31).unwrap();
        assert!(matches!(
            config.date_range(),
            Err(GeneratorError::Configuration(_))
        ));
    }

    // ========================================================================
    // Layered Loading Tests
    // ========================================================================

    fn write_file(dir: &std::path::Path, content: &str) -> String {
        std::fs::write(dir.join("generator.toml"), content).unwrap();
        dir.join("generator").to_string_lossy().into_owned()
    }

    #[test]
    fn test_load_without_file_or_env_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let stem = dir.path().join("absent").to_string_lossy().into_owned();

        let config = Config::load_layered(&stem, "VINHA_DEFAULTS_TEST").unwrap();
        assert_eq!(config.output_dir, PathBuf::from("data/synthetic"));
        assert_eq!(config.climate.seed, 42);
        assert_eq!(config.climate.start_date, NaiveDate::from_ymd_opt(2019, 1, 1).unwrap());
        assert_eq!(config.climate.end_date, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(config.productivity.seed, 123);
    }

    #[test]
    fn test_load_applies_env_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let stem = dir.path().join("absent").to_string_lossy().into_owned();
        std::env::set_var("VINHA_ENV_TEST_OUTPUT_DIR", "/tmp/vinha-env");
        std::env::set_var("VINHA_ENV_TEST_CLIMATE__SEED", "7");
        std::env::set_var("VINHA_ENV_TEST_CLIMATE__START_DATE", "2020-01-01");

        let config = Config::load_layered(&stem, "VINHA_ENV_TEST").unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/vinha-env"));
        assert_eq!(config.climate.seed, 7);
        assert_eq!(config.climate.start_date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(config.climate.end_date, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(config.productivity.seed, 123);
        assert_eq!(config.date_range().unwrap().len_days(), 1827);
    }

    #[test]
    fn test_load_reads_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let stem = write_file(
            dir.path(),
            r#"
output_dir = "out/file"

[climate]
seed = 9
end_date = "2019-12-31"

[productivity]
seed = 5
"#,
        );

        let config = Config::load_layered(&stem, "VINHA_FILE_TEST").unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out/file"));
        assert_eq!(config.climate.seed, 9);
        assert_eq!(config.climate.start_date, NaiveDate::from_ymd_opt(2019, 1, 1).unwrap());
        assert_eq!(config.date_range().unwrap().len_days(), 365);
        assert_eq!(config.productivity.seed, 5);
    }

    #[test]
    fn test_env_takes_precedence_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let stem = write_file(dir.path(), "[climate]\nseed = 9\n\n[productivity]\nseed = 5\n");
        std::env::set_var("VINHA_PRECEDENCE_TEST_CLIMATE__SEED", "11");

        let config = Config::load_layered(&stem, "VINHA_PRECEDENCE_TEST").unwrap();
        assert_eq!(config.climate.seed, 11);
        assert_eq!(config.productivity.seed, 5);
    }

    #[test]
    fn test_load_rejects_unparsable_date() {
        let dir = tempfile::tempdir().unwrap();
        let stem = write_file(dir.path(), "[climate]\nstart_date = \"not-a-date\"\n");

        assert!(Config::load_layered(&stem, "VINHA_BAD_DATE_TEST").is_err());
    }

    #[test]
    fn test_with_output_dir() {
        let config = Config::default().with_output_dir("/tmp/vinha");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/vinha"));
        assert_eq!(config.climate.seed, 42);
        assert_eq!(config.productivity.seed, 123);
    }
}
