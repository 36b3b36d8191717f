//! Dashboard configuration.

use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use ratescope_chart::SeriesSelection;
use ratescope_core::series::{EndDatePolicy, DEFAULT_SEED, DEFAULT_STEP_SIZE};
use ratescope_core::{RateRecord, SeriesBuilder};

pub use ratescope_core::{DEFAULT_DATE_COLUMN, DEFAULT_DATE_FORMAT, DEFAULT_RATE_COLUMN};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

/// Default rate history file.
pub const DEFAULT_DATA_FILE: &str = "data/bankrate.csv";
/// Default log filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Everything needed to load a history, build the series and show the
/// first chart.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    /// Rate history CSV.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Header of the column holding change dates.
    #[serde(default = "default_date_column")]
    pub date_column: String,

    /// Header of the column holding the rate in percent.
    #[serde(default = "default_rate_column")]
    pub rate_column: String,

    /// `strftime` pattern for the date column.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Random walk step magnitude.
    #[serde(default = "default_step_size")]
    pub step_size: f64,

    /// Random walk seed.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Where the daily calendar stops.
    #[serde(default)]
    pub end_date: EndDatePolicy,

    /// Lines drawn before any interaction.
    #[serde(default)]
    pub default_selection: SeriesSelection,

    /// Initial dark-mode switch position.
    #[serde(default = "default_true")]
    pub dark_theme: bool,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_date_column() -> String {
    DEFAULT_DATE_COLUMN.to_string()
}

fn default_rate_column() -> String {
    DEFAULT_RATE_COLUMN.to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_step_size() -> f64 {
    DEFAULT_STEP_SIZE
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            date_column: default_date_column(),
            rate_column: default_rate_column(),
            date_format: default_date_format(),
            step_size: DEFAULT_STEP_SIZE,
            seed: DEFAULT_SEED,
            end_date: EndDatePolicy::default(),
            default_selection: SeriesSelection::default(),
            dark_theme: true,
            log_filter: default_log_filter(),
        }
    }
}

impl DashboardConfig {
    /// Loads and validates a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Sets the data file.
    #[must_use]
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    /// Sets the random walk seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the end-date policy.
    #[must_use]
    pub fn with_end_date(mut self, end_date: EndDatePolicy) -> Self {
        self.end_date = end_date;
        self
    }

    /// Series builder carrying this configuration's walk and calendar settings.
    pub fn series_builder(&self, records: impl Into<Vec<RateRecord>>) -> SeriesBuilder {
        SeriesBuilder::new(records)
            .end_date_policy(self.end_date)
            .step_size(self.step_size)
            .seed(self.seed)
    }
}

fn is_valid_date_format(format: &str) -> bool {
    let mut has_field = false;
    for item in StrftimeItems::new(format) {
        match item {
            Item::Error => return false,
            Item::Numeric(..) | Item::Fixed(..) => has_field = true,
            _ => {}
        }
    }
    has_field
}

impl Validate for DashboardConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.data_file.as_os_str().is_empty() {
            errors.push(ValidationError::new("data_file", "Data file cannot be empty"));
        }

        if self.date_column.trim().is_empty() {
            errors.push(ValidationError::new(
                "date_column",
                "Date column cannot be empty",
            ));
        }

        if self.rate_column.trim().is_empty() {
            errors.push(ValidationError::new(
                "rate_column",
                "Rate column cannot be empty",
            ));
        }

        if self.date_column.trim() == self.rate_column.trim() {
            errors.push(ValidationError::with_rule(
                "rate_column",
                "Rate column must differ from date column",
                "distinct_columns",
            ));
        }

        if !is_valid_date_format(&self.date_format) {
            errors.push(ValidationError::with_rule(
                "date_format",
                format!("Invalid date format '{}'", self.date_format),
                "valid_strftime",
            ));
        }

        if !self.step_size.is_finite() || self.step_size < 0.0 {
            errors.push(ValidationError::with_rule(
                "step_size",
                format!(
                    "Step size {} must be finite and non-negative",
                    self.step_size
                ),
                "valid_step_size",
            ));
        }

        if self.log_filter.trim().is_empty() {
            errors.push(ValidationError::new(
                "log_filter",
                "Log filter cannot be empty",
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratescope_core::Date;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.data_file, PathBuf::from("data/bankrate.csv"));
        assert_eq!(config.date_column, "Date Changed");
        assert_eq!(config.rate_column, "Rate");
        assert_eq!(config.date_format, "%d %b %y");
        assert_eq!(config.step_size, 0.05);
        assert_eq!(config.seed, 41);
        assert_eq!(config.end_date, EndDatePolicy::LastRecord);
        assert_eq!(config.default_selection, SeriesSelection::Both);
        assert!(config.dark_theme);
        assert_eq!(config.log_filter, "info");
        assert!(config.is_valid());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = DashboardConfig::from_toml_str("").unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = DashboardConfig::from_toml_str(
            r#"
            data_file = "rates/boe.csv"
            seed = 7
            end_date = "2024-01-31"
            default_selection = "Random Walk"
            dark_theme = false
            "#,
        )
        .unwrap();

        assert_eq!(config.data_file, PathBuf::from("rates/boe.csv"));
        assert_eq!(config.seed, 7);
        assert_eq!(
            config.end_date,
            EndDatePolicy::Fixed(Date::from_ymd(2024, 1, 31).unwrap())
        );
        assert_eq!(config.default_selection, SeriesSelection::RandomWalk);
        assert!(!config.dark_theme);
        assert_eq!(config.step_size, 0.05);
    }

    #[test]
    fn test_selection_spellings() {
        for (text, expected) in [
            ("random-walk", SeriesSelection::RandomWalk),
            ("random_walk", SeriesSelection::RandomWalk),
            ("rate", SeriesSelection::Rate),
            ("Bank Rate", SeriesSelection::Rate),
            ("both", SeriesSelection::Both),
        ] {
            let config =
                DashboardConfig::from_toml_str(&format!("default_selection = \"{text}\""))
                    .unwrap();
            assert_eq!(config.default_selection, expected, "{text}");
        }

        let err = DashboardConfig::from_toml_str("default_selection = \"lines\"").unwrap_err();
        assert!(matches!(err, ConfigError::Deserialization(_)));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = DashboardConfig::from_toml_str("colour = \"red\"").unwrap_err();
        assert!(matches!(err, ConfigError::Deserialization(_)));
    }

    #[test]
    fn test_bad_end_date_is_rejected() {
        let err = DashboardConfig::from_toml_str("end_date = \"tomorrow\"").unwrap_err();
        assert!(matches!(err, ConfigError::Deserialization(_)));
    }

    #[test]
    fn test_validation() {
        let config = DashboardConfig {
            step_size: -0.1,
            rate_column: String::new(),
            ..DashboardConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.field == "step_size"));
        assert!(errors.iter().any(|e| e.field == "rate_column"));

        let err = DashboardConfig::from_toml_str("step_size = nan").unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "step_size"));
    }

    #[test]
    fn test_date_format_validation() {
        assert!(is_valid_date_format("%d %b %y"));
        assert!(is_valid_date_format("%Y-%m-%d"));
        assert!(!is_valid_date_format("%Q"));
        assert!(!is_valid_date_format("no fields"));
        assert!(!is_valid_date_format(""));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = DashboardConfig::default()
            .with_seed(99)
            .with_end_date(EndDatePolicy::Today);
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("end_date = \"today\""));
        assert!(text.contains("default_selection = \"Both\""));
        assert_eq!(DashboardConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_series_builder() {
        let d = |day| Date::from_ymd(2023, 1, day).unwrap();
        let records = vec![RateRecord::new(d(1), 5.0), RateRecord::new(d(5), 5.25)];
        let config = DashboardConfig::default()
            .with_seed(3)
            .with_end_date(EndDatePolicy::Fixed(d(10)));

        let series = config.series_builder(records).build().unwrap();
        assert_eq!(series.len(), 10);
        assert_eq!(series.seed(), 3);
        assert_eq!(series.last_date(), d(10));
    }
}
