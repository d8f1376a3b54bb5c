//! TOML-based dashboard configuration.

use std::collections::HashSet;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::{Catalog, Measure, default_measures};
use crate::dashboard::Dashboard;
use crate::model::horizon::{DEFAULT_HORIZON_YEARS, Horizon};
use crate::model::params::{
    BASELINE_USAGE_KWH, ELECTRICITY_RATE_USD_PER_KWH, ModelParams, SOLAR_BILL_USD_PER_YEAR,
    SOLAR_MONTHLY_RATE_USD,
};
use crate::model::selection::Selection;

/// Longest projection a configuration may request.
pub const MAX_HORIZON_YEARS: u32 = 100;

/// Top-level configuration parsed from TOML.
///
/// Every section has defaults matching the built-in constants and catalog.
/// Load with [`DashboardConfig::from_toml_file`] or use
/// [`DashboardConfig::baseline`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    /// Model constants.
    #[serde(default)]
    pub model: ModelConfig,
    /// Display surface settings.
    #[serde(default)]
    pub dashboard: DisplayConfig,
    /// Measure catalog, in checklist order.
    #[serde(default = "default_measures")]
    pub measures: Vec<Measure>,
}

/// Model constants.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// Baseline annual usage (kWh, > 0).
    pub baseline_usage_kwh: f64,
    /// Electricity price ($/kWh, > 0).
    pub electricity_rate_usd_per_kwh: f64,
    /// Flat yearly bill with solar ($, > 0).
    pub solar_bill_usd_per_year: f64,
    /// Solar subscription rate ($/month, > 0).
    pub solar_monthly_rate_usd: f64,
    /// Projection length in years (1..=[`MAX_HORIZON_YEARS`]).
    pub horizon_years: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            baseline_usage_kwh: BASELINE_USAGE_KWH,
            electricity_rate_usd_per_kwh: ELECTRICITY_RATE_USD_PER_KWH,
            solar_bill_usd_per_year: SOLAR_BILL_USD_PER_YEAR,
            solar_monthly_rate_usd: SOLAR_MONTHLY_RATE_USD,
            horizon_years: DEFAULT_HORIZON_YEARS,
        }
    }
}

/// Display surface settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// HTTP bind address.
    pub bind: String,
    /// Measures checked when the dashboard opens.
    pub default_selection: Vec<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8050".to_string(),
            default_selection: vec!["M1".to_string()],
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"model.horizon_years"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}: {}", self.field, self.message)
    }
}

impl Error for ConfigError {}

impl DashboardConfig {
    /// Returns the built-in configuration.
    pub fn baseline() -> Self {
        Self {
            model: ModelConfig::default(),
            dashboard: DisplayConfig::default(),
            measures: default_measures(),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("config", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let m = &self.model;

        for (field, value) in [
            ("model.baseline_usage_kwh", m.baseline_usage_kwh),
            ("model.electricity_rate_usd_per_kwh", m.electricity_rate_usd_per_kwh),
            ("model.solar_bill_usd_per_year", m.solar_bill_usd_per_year),
            ("model.solar_monthly_rate_usd", m.solar_monthly_rate_usd),
        ] {
            if !(value.is_finite() && value > 0.0) {
                errors.push(ConfigError::new(field, "must be a finite number > 0"));
            }
        }
        if !(1..=MAX_HORIZON_YEARS).contains(&m.horizon_years) {
            errors.push(ConfigError::new(
                "model.horizon_years",
                format!("must be between 1 and {MAX_HORIZON_YEARS}"),
            ));
        }

        if self.measures.is_empty() {
            errors.push(ConfigError::new("measures", "must list at least one measure"));
        }
        let mut seen = HashSet::new();
        for (i, measure) in self.measures.iter().enumerate() {
            if measure.id.trim().is_empty() {
                errors.push(ConfigError::new(format!("measures[{i}].id"), "must not be empty"));
            } else if measure.id != measure.id.trim() {
                // Selections are parsed with surrounding whitespace stripped.
                errors.push(ConfigError::new(
                    format!("measures[{i}].id"),
                    "must not start or end with whitespace",
                ));
            } else if measure.id.contains(',') {
                errors.push(ConfigError::new(
                    format!("measures[{i}].id"),
                    "must not contain ','",
                ));
            } else if !seen.insert(measure.id.as_str()) {
                errors.push(ConfigError::new(
                    format!("measures[{i}].id"),
                    format!("duplicate id \"{}\"", measure.id),
                ));
            }
            if !(measure.annual_savings_kwh.is_finite() && measure.annual_savings_kwh > 0.0) {
                errors.push(ConfigError::new(
                    format!("measures[{i}].annual_savings_kwh"),
                    "must be a finite number > 0",
                ));
            }
        }

        for id in &self.dashboard.default_selection {
            if !self.measures.iter().any(|m| &m.id == id) {
                errors.push(ConfigError::new(
                    "dashboard.default_selection",
                    format!("unknown measure \"{id}\""),
                ));
            }
        }

        errors
    }

    /// Projection parameters for the model section.
    ///
    /// # Panics
    ///
    /// Panics if `model.horizon_years` is zero; call [`Self::validate`] first.
    pub fn params(&self) -> ModelParams {
        let m = &self.model;
        ModelParams {
            baseline_usage_kwh: m.baseline_usage_kwh,
            electricity_rate_usd_per_kwh: m.electricity_rate_usd_per_kwh,
            solar_bill_usd_per_year: m.solar_bill_usd_per_year,
            solar_monthly_rate_usd: m.solar_monthly_rate_usd,
            horizon: Horizon::new(m.horizon_years),
        }
    }

    /// Builds the immutable dashboard from a validated configuration.
    pub fn build(&self) -> Dashboard {
        Dashboard::new(
            Catalog::new(self.measures.clone()),
            self.params(),
            Selection::new(self.dashboard.default_selection.iter().cloned()),
        )
    }
}
