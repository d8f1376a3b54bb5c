//! API response and query types.

use serde::{Deserialize, Serialize};

use crate::catalog::Measure;
use crate::model::selection::Selection;
use crate::model::summary::ProjectionSummary;

/// Checklist contents: every catalog measure plus the initial selection.
#[derive(Debug, Serialize)]
pub struct MeasuresResponse {
    /// Catalog measures in checklist order.
    pub measures: Vec<Measure>,
    /// Identifiers checked when the page loads.
    pub default_selection: Selection,
}

/// Headline figures for one selection.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// The selection the summary was computed for.
    pub selection: Selection,
    /// Horizon-end figures.
    pub summary: ProjectionSummary,
}

/// Selection query shared by the chart, summary, and CSV endpoints.
///
/// `measures` is a comma-separated id list. Absent means the default
/// selection; present but empty means no measures.
#[derive(Debug, Deserialize)]
pub struct SelectionQuery {
    pub measures: Option<String>,
}

impl SelectionQuery {
    /// Resolves the query against the dashboard's default selection.
    pub fn resolve(&self, default: &Selection) -> Selection {
        self.measures
            .as_deref()
            .map_or_else(|| default.clone(), Selection::parse_list)
    }
}

/// Error response body for 4xx/5xx errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_measures_means_default() {
        let q = SelectionQuery { measures: None };
        let default = Selection::new(["M1"]);
        assert_eq!(q.resolve(&default), default);
    }

    #[test]
    fn empty_measures_means_nothing_selected() {
        let q = SelectionQuery {
            measures: Some(String::new()),
        };
        assert!(q.resolve(&Selection::new(["M1"])).is_empty());
    }

    #[test]
    fn listed_measures_are_parsed_in_order() {
        let q = SelectionQuery {
            measures: Some("M3,M1".to_string()),
        };
        let ids: Vec<String> = q
            .resolve(&Selection::default())
            .iter()
            .map(String::from)
            .collect();
        assert_eq!(ids, vec!["M3", "M1"]);
    }
}
