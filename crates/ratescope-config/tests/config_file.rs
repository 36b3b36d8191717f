//! Loading configuration files from disk.

use std::io::Write;

use ratescope_config::prelude::*;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn loads_a_complete_file() {
    let file = write_config(
        r#"
        data_file = "/srv/rates/bankrate.csv"
        date_column = "Date"
        rate_column = "Bank Rate"
        date_format = "%Y-%m-%d"
        step_size = 0.1
        seed = 1234
        end_date = "last-record"
        default_selection = "Rate"
        dark_theme = false
        log_filter = "ratescope=debug"
        "#,
    );

    let config = DashboardConfig::from_file(file.path()).unwrap();
    assert_eq!(config.date_column, "Date");
    assert_eq!(config.rate_column, "Bank Rate");
    assert_eq!(config.date_format, "%Y-%m-%d");
    assert_eq!(config.step_size, 0.1);
    assert_eq!(config.seed, 1234);
    assert!(!config.dark_theme);
    assert_eq!(config.log_filter, "ratescope=debug");
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = DashboardConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn invalid_values_fail_validation() {
    let file = write_config(
        r#"
        date_format = "%Q"
        step_size = -1.0
        "#,
    );

    let err = DashboardConfig::from_file(file.path()).unwrap_err();
    match err {
        ConfigError::MultipleValidationErrors(errors) => {
            let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
            assert_eq!(fields, vec!["date_format", "step_size"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_toml_is_a_deserialization_error() {
    let file = write_config("seed = \"forty-one\"");
    let err = DashboardConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Deserialization(_)));
}

#[test]
fn written_config_reloads() {
    let config = DashboardConfig::default().with_data_file("elsewhere.csv");
    let file = write_config(&config.to_toml_string().unwrap());
    assert_eq!(DashboardConfig::from_file(file.path()).unwrap(), config);
}
