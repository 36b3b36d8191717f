//! Ratescope Configuration Layer
//!
//! TOML configuration for the Ratescope dashboard: where the rate history
//! lives and how to read it, the random walk seed and step, where the daily
//! calendar ends, and the initial chart state.
//!
//! Every field has a default, and loaded files are validated before use.
//!
//! # Example
//!
//! ```rust
//! use ratescope_config::{DashboardConfig, Validate};
//!
//! let config = DashboardConfig::from_toml_str(
//!     r#"
//!     data_file = "rates/boe.csv"
//!     seed = 7
//!     end_date = "today"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.seed, 7);
//! assert_eq!(config.date_column, "Date Changed");
//! assert!(config.is_valid());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod dashboard;
mod error;

pub use dashboard::{
    DashboardConfig, DEFAULT_DATA_FILE, DEFAULT_DATE_COLUMN, DEFAULT_DATE_FORMAT,
    DEFAULT_LOG_FILTER, DEFAULT_RATE_COLUMN,
};
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::dashboard::DashboardConfig;
    pub use crate::error::{ConfigError, ConfigResult, Validate};
}
