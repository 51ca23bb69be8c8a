//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `payroll.yaml`.

use serde::Deserialize;

use crate::models::HourlyWage;

/// The work type label that marks a paid working day by default.
pub const DEFAULT_WORKING_DAY_LABEL: &str = "勤務";

/// The default HTTP bind address.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Socket address the API listens on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

fn default_working_day_label() -> String {
    DEFAULT_WORKING_DAY_LABEL.to_string()
}

/// The payroll configuration loaded from `payroll.yaml`.
///
/// Every field is optional in the file and falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayrollConfig {
    /// The `work_type` value that marks a paid working day.
    #[serde(default = "default_working_day_label")]
    pub working_day_label: String,
    /// The wage applied when a request does not carry one.
    #[serde(default)]
    pub default_hourly_wage: HourlyWage,
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            working_day_label: default_working_day_label(),
            default_hourly_wage: HourlyWage::ZERO,
            server: ServerConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_defaults() {
        let config = PayrollConfig::default();
        assert_eq!(config.working_day_label, "勤務");
        assert_eq!(config.default_hourly_wage, HourlyWage::ZERO);
        assert_eq!(config.server.bind_address, "0.0.0.0:3000");
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config: PayrollConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, PayrollConfig::default());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
default_hourly_wage: "1150"
server:
  bind_address: "127.0.0.1:8080"
"#;
        let config: PayrollConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.working_day_label, "勤務");
        assert_eq!(config.default_hourly_wage.rate(), Decimal::from(1150));
        assert_eq!(config.server.bind_address, "127.0.0.1:8080");
    }

    #[test]
    fn test_negative_default_wage_is_rejected() {
        let result = serde_yaml::from_str::<PayrollConfig>("default_hourly_wage: \"-1\"");
        assert!(result.is_err());
    }
}
