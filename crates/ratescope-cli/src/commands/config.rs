//! Config command implementation.
//!
//! Shows and checks the effective dashboard configuration.

use anyhow::Result;
use clap::{Args, Subcommand};

use ratescope_config::DashboardConfig;

use crate::cli::OutputFormat;
use crate::context::Context;
use crate::output::{
    print_csv, print_error, print_header, print_json, print_success, print_table, KeyValue,
};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Check that the data file loads and builds a series
    Validate,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(ctx),
        ConfigCommand::Validate => execute_validate(ctx),
    }
}

fn config_rows(config: &DashboardConfig) -> Vec<KeyValue> {
    vec![
        KeyValue::new("data_file", config.data_file.display().to_string()),
        KeyValue::new("date_column", config.date_column.as_str()),
        KeyValue::new("rate_column", config.rate_column.as_str()),
        KeyValue::new("date_format", config.date_format.as_str()),
        KeyValue::new("step_size", config.step_size.to_string()),
        KeyValue::new("seed", config.seed.to_string()),
        KeyValue::new("end_date", config.end_date.to_string()),
        KeyValue::new("default_selection", config.default_selection.to_string()),
        KeyValue::new("dark_theme", config.dark_theme.to_string()),
        KeyValue::new("log_filter", config.log_filter.as_str()),
    ]
}

/// Show the effective configuration.
fn execute_show(ctx: &Context) -> Result<()> {
    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header(&format!("Configuration ({})", ctx.config_origin()));
            }
            print_table(&config_rows(&ctx.config))?;
        }
        OutputFormat::Json => print_json(&ctx.config)?,
        OutputFormat::Csv => print_csv(&config_rows(&ctx.config))?,
        OutputFormat::Minimal => print!("{}", ctx.config.to_toml_string()?),
    }
    Ok(())
}

/// Load the data file and build the series with the effective configuration.
fn execute_validate(ctx: &Context) -> Result<()> {
    let series = match ctx.load_series() {
        Ok(series) => series,
        Err(err) => {
            if ctx.format == OutputFormat::Table {
                print_error(&err.to_string());
            }
            return Err(err.into());
        }
    };

    match ctx.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "valid": true,
            "config": ctx.config_origin(),
            "data_file": ctx.data_file().display().to_string(),
            "days": series.len(),
        }))?,
        OutputFormat::Table | OutputFormat::Csv | OutputFormat::Minimal => {
            if !ctx.quiet {
                print_success(&format!("Configuration OK ({})", ctx.config_origin()));
            }
            print_success(&format!(
                "{}: {} days from {} to {}",
                ctx.data_file().display(),
                series.len(),
                series.first_date(),
                series.last_date()
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_rows_cover_every_field() {
        let rows = config_rows(&DashboardConfig::default());
        let keys: Vec<_> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "data_file",
                "date_column",
                "rate_column",
                "date_format",
                "step_size",
                "seed",
                "end_date",
                "default_selection",
                "dark_theme",
                "log_filter",
            ]
        );
        assert_eq!(rows[6].value, "last-record");
        assert_eq!(rows[7].value, "Both");
    }
}
