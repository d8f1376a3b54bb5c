//! Savings calculator: selected measures to a year-by-year projection.

use serde::Serialize;

use super::error::ModelError;
use super::params::ModelParams;
use super::selection::Selection;
use crate::catalog::Catalog;

/// Energy and cost savings projected over the horizon for one selection.
///
/// Recomputed on every selection change; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsProjection {
    /// Horizon year indices, aligned with every series below.
    pub years: Vec<u32>,
    /// Baseline usage minus total savings (kWh/year). Not clamped at zero.
    pub reduced_annual_usage_kwh: f64,
    /// Sum of the selected measures' annual savings (kWh/year).
    pub total_annual_savings_kwh: f64,
    /// Energy saved by the end of each year (kWh).
    pub cumulative_energy_savings_kwh: Vec<f64>,
    /// Money saved by the end of each year ($).
    pub cumulative_cost_savings_usd: Vec<f64>,
}

/// Projects savings for `selected` over `params.horizon`.
///
/// Annual savings are constant, so the cumulative value for year `y` is the
/// annual total scaled by `y`.
///
/// # Errors
///
/// Returns [`ModelError::UnknownMeasure`] for the first identifier not in
/// `catalog`; no partial projection is produced.
///
/// # Examples
///
/// ```
/// use solar_savings::catalog::Catalog;
/// use solar_savings::model::params::ModelParams;
/// use solar_savings::model::savings::compute_savings;
/// use solar_savings::model::selection::Selection;
///
/// let p = compute_savings(&Catalog::default(), &ModelParams::default(), &Selection::new(["M1"]))
///     .unwrap();
/// assert_eq!(p.total_annual_savings_kwh, 100.0);
/// assert_eq!(p.cumulative_energy_savings_kwh[9], 1000.0);
/// ```
pub fn compute_savings(
    catalog: &Catalog,
    params: &ModelParams,
    selected: &Selection,
) -> Result<SavingsProjection, ModelError> {
    let mut total_annual_savings_kwh = 0.0;
    for id in selected.iter() {
        total_annual_savings_kwh += catalog.lookup(id)?.annual_savings_kwh;
    }

    let cumulative_energy_savings_kwh = params.horizon.accumulate(total_annual_savings_kwh);
    let cumulative_cost_savings_usd = cumulative_energy_savings_kwh
        .iter()
        .map(|kwh| kwh * params.electricity_rate_usd_per_kwh)
        .collect();

    Ok(SavingsProjection {
        years: params.horizon.years().to_vec(),
        reduced_annual_usage_kwh: params.baseline_usage_kwh - total_annual_savings_kwh,
        total_annual_savings_kwh,
        cumulative_energy_savings_kwh,
        cumulative_cost_savings_usd,
    })
}
