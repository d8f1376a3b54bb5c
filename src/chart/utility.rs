use super::{ChartSpec, Layout, LineStyle, Mode, scatter, style};
use crate::model::params::ModelParams;
use crate::model::utility::UtilityProjection;

pub const UTILITY_TITLE: &str = "Utility Bill Comparison: With and Without Solar";

/// Bills with and without solar, the flat solar rate, and their gap.
pub fn build_utility_chart(params: &ModelParams, utility: &UtilityProjection) -> ChartSpec {
    let years = &utility.years;
    let flat_rate = vec![params.solar_rate_per_year_usd(); years.len()];

    ChartSpec {
        data: vec![
            scatter(
                "Yearly Bill Without Solar",
                years,
                utility.yearly_bill_without_solar_usd.clone(),
                Mode::LinesMarkers,
                LineStyle::solid(style::WITHOUT_SOLAR_COLOR, style::PRIMARY_WIDTH),
            ),
            scatter(
                "Yearly Bill With Solar",
                years,
                utility.yearly_bill_with_solar_usd.clone(),
                Mode::LinesMarkers,
                LineStyle::solid(style::WITH_SOLAR_COLOR, style::PRIMARY_WIDTH),
            ),
            scatter(
                "Fixed Solar Rate ($)",
                years,
                flat_rate,
                Mode::Lines,
                LineStyle::dashed(style::SOLAR_RATE_COLOR),
            ),
            scatter(
                "Cumulative Savings",
                years,
                utility.cumulative_savings_usd.clone(),
                Mode::LinesMarkers,
                LineStyle::solid(style::UTILITY_SAVINGS_COLOR, style::PRIMARY_WIDTH),
            ),
        ],
        layout: Layout::time_series(UTILITY_TITLE, "Years", "Cost (USD)"),
    }
}
