//! Request handlers for the dashboard endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse};
use tracing::{debug, error, warn};

use super::INDEX_HTML;
use super::types::{ErrorResponse, MeasuresResponse, SelectionQuery, SummaryResponse};
use crate::dashboard::{ChartSet, Dashboard};
use crate::io::export::write_csv;
use crate::model::error::ModelError;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_selection(err: &ModelError) -> ApiError {
    warn!(%err, "rejected selection");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// Serves the dashboard page.
///
/// `GET /` → 200 + HTML
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Lists the checklist options and the initial selection.
///
/// `GET /api/measures` → 200 + `MeasuresResponse` JSON
pub async fn get_measures(State(dashboard): State<Arc<Dashboard>>) -> Json<MeasuresResponse> {
    Json(MeasuresResponse {
        measures: dashboard.catalog().measures().to_vec(),
        default_selection: dashboard.default_selection().clone(),
    })
}

/// Recomputes the three charts for a selection.
///
/// `GET /api/charts?measures=M1,M2` → 200 + `ChartSet` JSON
/// `GET /api/charts?measures=BOGUS` → 400 + `ErrorResponse`
pub async fn get_charts(
    State(dashboard): State<Arc<Dashboard>>,
    Query(query): Query<SelectionQuery>,
) -> Result<Json<ChartSet>, ApiError> {
    let selection = query.resolve(dashboard.default_selection());
    debug!(?selection, "selection changed");
    dashboard
        .handle_selection_change(&selection)
        .map(Json)
        .map_err(|e| bad_selection(&e))
}

/// Horizon-end figures for a selection.
///
/// `GET /api/summary?measures=M1` → 200 + `SummaryResponse` JSON
pub async fn get_summary(
    State(dashboard): State<Arc<Dashboard>>,
    Query(query): Query<SelectionQuery>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let selection = query.resolve(dashboard.default_selection());
    let projections = dashboard
        .project(&selection)
        .map_err(|e| bad_selection(&e))?;
    Ok(Json(SummaryResponse {
        selection,
        summary: projections.summary(),
    }))
}

/// Per-year projection table as CSV.
///
/// `GET /api/projection.csv?measures=M1` → 200 + `text/csv`
pub async fn get_projection_csv(
    State(dashboard): State<Arc<Dashboard>>,
    Query(query): Query<SelectionQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let selection = query.resolve(dashboard.default_selection());
    let projections = dashboard
        .project(&selection)
        .map_err(|e| bad_selection(&e))?;

    let mut buf = Vec::new();
    write_csv(&projections, &mut buf).map_err(|e| {
        error!(%e, "csv export failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("csv export failed: {e}"),
            }),
        )
    })?;

    Ok(([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], buf))
}
