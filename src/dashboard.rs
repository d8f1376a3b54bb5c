//! Selection-change handler shared by every display surface.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::chart::{ChartSpec, build_pie, build_savings_line, build_utility_chart};
use crate::model::error::ModelError;
use crate::model::params::ModelParams;
use crate::model::savings::{SavingsProjection, compute_savings};
use crate::model::selection::Selection;
use crate::model::summary::ProjectionSummary;
use crate::model::utility::{UtilityProjection, compute_utility_costs};

/// The three charts returned for one selection, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSet {
    pub pie: ChartSpec,
    pub line: ChartSpec,
    pub utility: ChartSpec,
}

/// Both projections for one selection, aligned on the same years.
#[derive(Debug, Clone, PartialEq)]
pub struct Projections {
    pub savings: SavingsProjection,
    pub utility: UtilityProjection,
}

impl Projections {
    /// Headline figures for these projections.
    pub fn summary(&self) -> ProjectionSummary {
        ProjectionSummary::from_projections(&self.savings, &self.utility)
    }
}

/// Immutable catalog and model parameters, plus the checklist default.
///
/// Holds no state that changes between invocations, so a single instance is
/// shared read-only by all surfaces.
#[derive(Debug, Clone)]
pub struct Dashboard {
    catalog: Catalog,
    params: ModelParams,
    default_selection: Selection,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(Catalog::default(), ModelParams::default(), Selection::new(["M1"]))
    }
}

impl Dashboard {
    /// Creates a dashboard from validated parts.
    pub fn new(catalog: Catalog, params: ModelParams, default_selection: Selection) -> Self {
        Self {
            catalog,
            params,
            default_selection,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    /// Selection the checklist starts with.
    pub fn default_selection(&self) -> &Selection {
        &self.default_selection
    }

    /// Runs both calculators for `selected`.
    ///
    /// The utility projection is recomputed on every call even though it
    /// does not depend on the selection.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownMeasure`] if `selected` names a measure
    /// outside the catalog.
    pub fn project(&self, selected: &Selection) -> Result<Projections, ModelError> {
        Ok(Projections {
            savings: compute_savings(&self.catalog, &self.params, selected)?,
            utility: compute_utility_costs(&self.params),
        })
    }

    /// Recomputes the pie, line, and utility charts for a new selection.
    ///
    /// Pure in `selected`: equal selections give equal chart sets.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownMeasure`] before any chart is built if
    /// `selected` names a measure outside the catalog.
    pub fn handle_selection_change(&self, selected: &Selection) -> Result<ChartSet, ModelError> {
        let projections = self.project(selected)?;
        Ok(ChartSet {
            pie: build_pie(&self.catalog, selected)?,
            line: build_savings_line(&self.params, &projections.savings),
            utility: build_utility_chart(&self.params, &projections.utility),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_returns_pie_line_utility() {
        let dashboard = Dashboard::default();
        let charts = dashboard
            .handle_selection_change(&Selection::new(["M1", "M3"]))
            .expect("known ids should chart");
        assert_eq!(charts.pie.pie_trace().map(|p| p.values.len()), Some(2));
        assert_eq!(charts.line.scatter_traces().count(), 3);
        assert_eq!(charts.utility.scatter_traces().count(), 4);
    }

    #[test]
    fn handler_is_byte_for_byte_idempotent() {
        let dashboard = Dashboard::default();
        let selection = Selection::new(["M2", "M1"]);
        let a = dashboard.handle_selection_change(&selection).unwrap();
        let b = dashboard.handle_selection_change(&selection).unwrap();
        assert_eq!(
            serde_json::to_vec(&a).unwrap(),
            serde_json::to_vec(&b).unwrap()
        );
    }

    #[test]
    fn handler_accepts_empty_selection() {
        let charts = Dashboard::default()
            .handle_selection_change(&Selection::default())
            .expect("empty selection should chart");
        assert_eq!(charts.pie.pie_trace().map(|p| p.labels.len()), Some(0));
        let energy = charts.line.scatter_traces().next().unwrap();
        assert!(energy.y.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn handler_rejects_unknown_measure() {
        let err = Dashboard::default()
            .handle_selection_change(&Selection::new(["M1", "X"]))
            .unwrap_err();
        assert_eq!(err.to_string(), "unknown measure identifier \"X\"");
    }

    #[test]
    fn default_selection_is_first_measure() {
        let d = Dashboard::default();
        assert_eq!(d.default_selection().iter().collect::<Vec<_>>(), vec!["M1"]);
    }
}
