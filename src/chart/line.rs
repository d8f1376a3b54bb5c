use super::{ChartSpec, Layout, LineStyle, Mode, scatter, style};
use crate::model::params::ModelParams;
use crate::model::savings::SavingsProjection;

pub const SAVINGS_LINE_TITLE: &str = "Cumulative Energy and Cost Savings Over Time";

/// Cumulative energy and cost savings, plus baseline usage for scale.
pub fn build_savings_line(params: &ModelParams, projection: &SavingsProjection) -> ChartSpec {
    let years = &projection.years;
    let baseline = years
        .iter()
        .map(|&y| params.baseline_usage_kwh * f64::from(y))
        .collect();

    ChartSpec {
        data: vec![
            scatter(
                "Cumulative Energy Savings (kWh)",
                years,
                projection.cumulative_energy_savings_kwh.clone(),
                Mode::LinesMarkers,
                LineStyle::solid(style::ENERGY_COLOR, style::PRIMARY_WIDTH),
            ),
            scatter(
                "Cumulative Cost Savings (USD)",
                years,
                projection.cumulative_cost_savings_usd.clone(),
                Mode::LinesMarkers,
                LineStyle::solid(style::COST_COLOR, style::PRIMARY_WIDTH),
            ),
            scatter(
                "Baseline Energy Usage (kWh)",
                years,
                baseline,
                Mode::Lines,
                LineStyle::dashed(style::BASELINE_COLOR),
            ),
        ],
        layout: Layout::time_series(SAVINGS_LINE_TITLE, "Years", "Savings"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::chart::Dash;
    use crate::model::savings::compute_savings;
    use crate::model::selection::Selection;

    #[test]
    fn three_traces_over_the_horizon() {
        let params = ModelParams::default();
        let projection =
            compute_savings(&Catalog::default(), &params, &Selection::new(["M2"])).unwrap();
        let spec = build_savings_line(&params, &projection);

        let traces: Vec<_> = spec.scatter_traces().collect();
        assert_eq!(traces.len(), 3);
        for t in &traces {
            assert_eq!(t.x, (1..=10).collect::<Vec<u32>>());
            assert_eq!(t.y.len(), 10);
        }
        assert_eq!(traces[0].y[1], 300.0);
        assert_eq!(traces[2].y[2], 36_000.0);
        assert_eq!(traces[2].mode, Mode::Lines);
        assert_eq!(traces[2].line.dash, Some(Dash::Dash));
        assert_eq!(traces[0].line.color, "green");
        assert_eq!(spec.layout.title.text, SAVINGS_LINE_TITLE);
    }
}
