//! Effective configuration and series loading shared by all commands.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use ratescope_chart::ChartProjector;
use ratescope_config::DashboardConfig;
use ratescope_core::{DailySeries, RateHistorySource};
use ratescope_ext_file::CsvRateHistorySource;

use crate::cli::{Cli, OutputFormat};
use crate::error::CliResult;

/// Configuration file picked up from the working directory.
const LOCAL_CONFIG: &str = "ratescope.toml";

/// Global options plus the configuration they resolve to.
#[derive(Debug)]
pub struct Context {
    /// Effective configuration.
    pub config: DashboardConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Suppress headers and status lines.
    pub quiet: bool,
}

impl Context {
    /// Resolves the configuration: `--config`, then `./ratescope.toml`,
    /// then defaults. `--data` overrides the configured data file.
    pub fn load(cli: &Cli) -> CliResult<Self> {
        let config_path = cli
            .config
            .clone()
            .or_else(|| Some(PathBuf::from(LOCAL_CONFIG)).filter(|p| p.is_file()));

        let mut config = match &config_path {
            Some(path) => DashboardConfig::from_file(path)?,
            None => DashboardConfig::default(),
        };
        if let Some(data) = &cli.data {
            config = config.with_data_file(data);
        }

        Ok(Self {
            config,
            config_path,
            format: cli.format,
            quiet: cli.quiet,
        })
    }

    /// Human-readable origin of the configuration.
    pub fn config_origin(&self) -> String {
        self.config_path
            .as_deref()
            .map_or_else(|| "defaults".to_string(), |p| p.display().to_string())
    }

    /// Rate history source described by the configuration.
    pub fn source(&self) -> CsvRateHistorySource {
        CsvRateHistorySource::new(&self.config.data_file)
            .with_columns(&self.config.date_column, &self.config.rate_column)
            .with_date_format(&self.config.date_format)
    }

    /// Loads the history and builds the daily series.
    pub fn load_series(&self) -> CliResult<DailySeries> {
        load_series_from(&self.source(), &self.config)
    }

    /// Loads the series and binds a projector to it.
    pub fn projector(&self) -> CliResult<ChartProjector> {
        Ok(ChartProjector::from(self.load_series()?))
    }

    /// Data file path.
    pub fn data_file(&self) -> &Path {
        &self.config.data_file
    }
}

/// Loads `source` and builds a series with the configured walk and calendar.
pub fn load_series_from(
    source: &dyn RateHistorySource,
    config: &DashboardConfig,
) -> CliResult<DailySeries> {
    debug!(source = %source.describe(), "loading rate history");
    let records = source.load()?;
    let series = config.series_builder(records).build()?;
    info!(
        days = series.len(),
        first = %series.first_date(),
        last = %series.last_date(),
        "series ready"
    );
    Ok(series)
}
