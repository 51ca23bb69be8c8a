//! Configuration loading and management for the Shift Payroll Engine.
//!
//! This module loads the payroll settings (working-day label, default
//! hourly wage, HTTP bind address) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use shift_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Default wage: {}", config.config().default_hourly_wage);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{DEFAULT_BIND_ADDRESS, DEFAULT_WORKING_DAY_LABEL, PayrollConfig, ServerConfig};
