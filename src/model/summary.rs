//! Horizon-end summary derived from the two projections.

use std::fmt;

use serde::Serialize;

use super::savings::SavingsProjection;
use super::utility::UtilityProjection;

/// CO₂ emitted per grid kWh (kg, US average).
pub const KG_CO2_PER_KWH: f64 = 0.6;
/// CO₂ a mature tree absorbs per year (kg).
pub const KG_CO2_PER_TREE_YEAR: f64 = 22.0;

/// Headline figures for one selection.
///
/// Computed post-hoc from the projections so the summary never disagrees
/// with the charted series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionSummary {
    /// Number of years projected.
    pub horizon_years: usize,
    /// Annual energy saved by the selected measures (kWh).
    pub annual_savings_kwh: f64,
    /// Annual usage after the measures (kWh).
    pub reduced_annual_usage_kwh: f64,
    /// Energy saved by the final horizon year (kWh).
    pub total_energy_savings_kwh: f64,
    /// Money saved by the final horizon year ($).
    pub total_cost_savings_usd: f64,
    /// Utility bill difference by the final horizon year ($).
    pub total_utility_savings_usd: f64,
    /// CO₂ avoided by the saved energy (kg).
    pub co2_avoided_kg: f64,
    /// Tree-years of absorption equivalent to `co2_avoided_kg`.
    pub tree_years_equivalent: f64,
}

impl ProjectionSummary {
    /// Summarises the last horizon year of both projections.
    pub fn from_projections(savings: &SavingsProjection, utility: &UtilityProjection) -> Self {
        let total_energy = savings
            .cumulative_energy_savings_kwh
            .last()
            .copied()
            .unwrap_or(0.0);
        let co2 = total_energy * KG_CO2_PER_KWH;

        Self {
            horizon_years: savings.years.len(),
            annual_savings_kwh: savings.total_annual_savings_kwh,
            reduced_annual_usage_kwh: savings.reduced_annual_usage_kwh,
            total_energy_savings_kwh: total_energy,
            total_cost_savings_usd: savings
                .cumulative_cost_savings_usd
                .last()
                .copied()
                .unwrap_or(0.0),
            total_utility_savings_usd: utility.cumulative_savings_usd.last().copied().unwrap_or(0.0),
            co2_avoided_kg: co2,
            tree_years_equivalent: co2 / KG_CO2_PER_TREE_YEAR,
        }
    }
}

impl fmt::Display for ProjectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Savings Summary ({} years) ---", self.horizon_years)?;
        writeln!(f, "Annual savings:        {:.0} kWh", self.annual_savings_kwh)?;
        writeln!(f, "Reduced annual usage:  {:.0} kWh", self.reduced_annual_usage_kwh)?;
        writeln!(f, "Energy saved:          {:.0} kWh", self.total_energy_savings_kwh)?;
        writeln!(f, "Cost saved:            {:.2} USD", self.total_cost_savings_usd)?;
        writeln!(f, "Utility savings:       {:.2} USD", self.total_utility_savings_usd)?;
        write!(
            f,
            "CO2 avoided:           {:.1} kg ({:.1} tree-years)",
            self.co2_avoided_kg, self.tree_years_equivalent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::model::params::ModelParams;
    use crate::model::savings::compute_savings;
    use crate::model::selection::Selection;
    use crate::model::utility::compute_utility_costs;

    fn summary_for(ids: &[&str]) -> ProjectionSummary {
        let params = ModelParams::default();
        let savings = compute_savings(
            &Catalog::default(),
            &params,
            &Selection::new(ids.iter().copied()),
        )
        .expect("known ids should project");
        ProjectionSummary::from_projections(&savings, &compute_utility_costs(&params))
    }

    #[test]
    fn takes_final_year_values() {
        let s = summary_for(&["M1", "M2"]);
        assert_eq!(s.horizon_years, 10);
        assert_eq!(s.annual_savings_kwh, 250.0);
        assert_eq!(s.total_energy_savings_kwh, 2_500.0);
        assert!((s.total_cost_savings_usd - 300.0).abs() < 1e-9);
        assert!((s.total_utility_savings_usd - 6_400.0).abs() < 1e-6);
    }

    #[test]
    fn environmental_equivalents() {
        let s = summary_for(&["M1"]);
        assert!((s.co2_avoided_kg - 600.0).abs() < 1e-9);
        assert!((s.tree_years_equivalent - 600.0 / 22.0).abs() < 1e-9);
    }

    #[test]
    fn display_lists_each_figure() {
        let text = summary_for(&["M3"]).to_string();
        assert!(text.starts_with("--- Savings Summary (10 years) ---"));
        assert!(text.contains("Annual savings:        50 kWh"));
        assert!(text.contains("Reduced annual usage:  11950 kWh"));
        assert!(text.contains("Cost saved:            60.00 USD"));
    }
}
