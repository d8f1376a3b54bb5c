//! Fixed model constants and the immutable parameter set built from them.

use super::horizon::Horizon;

/// Household consumption before any measure is applied (kWh/year).
pub const BASELINE_USAGE_KWH: f64 = 12_000.0;
/// Grid electricity price ($/kWh).
pub const ELECTRICITY_RATE_USD_PER_KWH: f64 = 0.12;
/// Flat yearly utility bill assumed once solar is installed ($/year).
pub const SOLAR_BILL_USD_PER_YEAR: f64 = 800.0;
/// Fixed solar subscription rate ($/month).
pub const SOLAR_MONTHLY_RATE_USD: f64 = 100.0;

/// Parameters shared by both calculators and the chart builders.
///
/// Built once at startup and passed by reference; nothing mutates it.
///
/// # Examples
///
/// ```
/// use solar_savings::model::params::ModelParams;
///
/// let p = ModelParams::default();
/// assert_eq!(p.baseline_usage_kwh, 12_000.0);
/// assert_eq!(p.solar_rate_per_year_usd(), 1_200.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ModelParams {
    /// Baseline annual usage (kWh).
    pub baseline_usage_kwh: f64,
    /// Electricity price ($/kWh).
    pub electricity_rate_usd_per_kwh: f64,
    /// Yearly bill with solar ($).
    pub solar_bill_usd_per_year: f64,
    /// Solar subscription rate ($/month).
    pub solar_monthly_rate_usd: f64,
    /// Projection window.
    pub horizon: Horizon,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            baseline_usage_kwh: BASELINE_USAGE_KWH,
            electricity_rate_usd_per_kwh: ELECTRICITY_RATE_USD_PER_KWH,
            solar_bill_usd_per_year: SOLAR_BILL_USD_PER_YEAR,
            solar_monthly_rate_usd: SOLAR_MONTHLY_RATE_USD,
            horizon: Horizon::default(),
        }
    }
}

impl ModelParams {
    /// Yearly bill without solar at baseline usage ($).
    pub fn baseline_bill_per_year_usd(&self) -> f64 {
        self.baseline_usage_kwh * self.electricity_rate_usd_per_kwh
    }

    /// Solar subscription cost over twelve months ($).
    pub fn solar_rate_per_year_usd(&self) -> f64 {
        self.solar_monthly_rate_usd * 12.0
    }
}
