//! Utility cost model: bills with and without solar.

use serde::Serialize;

use super::params::ModelParams;

/// Year-by-year utility bills and the gap between them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UtilityProjection {
    /// Horizon year indices.
    pub years: Vec<u32>,
    /// Accumulated bill paying the grid rate at baseline usage ($).
    pub yearly_bill_without_solar_usd: Vec<f64>,
    /// Accumulated bill at the flat solar rate ($).
    pub yearly_bill_with_solar_usd: Vec<f64>,
    /// `without - with`, per year ($).
    pub cumulative_savings_usd: Vec<f64>,
}

/// Projects utility bills over `params.horizon`.
///
/// Independent of any selection; the output only depends on `params`.
pub fn compute_utility_costs(params: &ModelParams) -> UtilityProjection {
    let horizon = &params.horizon;
    let without = horizon.accumulate(params.baseline_bill_per_year_usd());
    let with = horizon.accumulate(params.solar_bill_usd_per_year);
    let savings = without.iter().zip(&with).map(|(w, s)| w - s).collect();

    UtilityProjection {
        years: horizon.years().to_vec(),
        yearly_bill_without_solar_usd: without,
        yearly_bill_with_solar_usd: with,
        cumulative_savings_usd: savings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_year_matches_constants() {
        let u = compute_utility_costs(&ModelParams::default());
        assert!((u.yearly_bill_without_solar_usd[0] - 1_440.0).abs() < 1e-9);
        assert_eq!(u.yearly_bill_with_solar_usd[0], 800.0);
        assert!((u.cumulative_savings_usd[0] - 640.0).abs() < 1e-9);
    }

    #[test]
    fn every_series_spans_the_horizon() {
        let u = compute_utility_costs(&ModelParams::default());
        assert_eq!(u.years.len(), 10);
        assert_eq!(u.yearly_bill_without_solar_usd.len(), 10);
        assert_eq!(u.yearly_bill_with_solar_usd.len(), 10);
        assert_eq!(u.cumulative_savings_usd.len(), 10);
        assert!((u.cumulative_savings_usd[9] - 6_400.0).abs() < 1e-6);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let params = ModelParams::default();
        assert_eq!(compute_utility_costs(&params), compute_utility_costs(&params));
    }
}
