//! Integration tests for the HTTP surface.

#![cfg(feature = "api")]

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::util::ServiceExt;

use solar_savings::api::router;
use solar_savings::config::DashboardConfig;

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn charts_endpoint_matches_direct_handler_call() {
    let dashboard = common::default_dashboard();
    let expected = serde_json::to_value(
        dashboard
            .handle_selection_change(&common::select(&["M3", "M2"]))
            .unwrap(),
    )
    .unwrap();

    let (status, json) = get_json(router(Arc::new(dashboard)), "/api/charts?measures=M3,M2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, expected);
    assert_eq!(
        json["pie"]["data"][0]["labels"],
        serde_json::json!(["LED Lighting", "Smart Thermostat"])
    );
}

#[tokio::test]
async fn charts_line_traces_carry_styling() {
    let app = router(Arc::new(common::default_dashboard()));
    let (status, json) = get_json(app, "/api/charts?measures=M1").await;
    assert_eq!(status, StatusCode::OK);

    let line = &json["line"];
    assert_eq!(
        line["layout"]["title"]["text"],
        "Cumulative Energy and Cost Savings Over Time"
    );
    assert_eq!(line["layout"]["plot_bgcolor"], "rgba(245, 245, 245, 1)");
    assert_eq!(line["data"][0]["name"], "Cumulative Energy Savings (kWh)");
    assert_eq!(line["data"][0]["line"]["color"], "green");
    assert_eq!(line["data"][2]["line"]["dash"], "dash");
    assert_eq!(line["data"][0]["y"][9], 1000.0);

    let utility = &json["utility"];
    assert_eq!(utility["data"][2]["name"], "Fixed Solar Rate ($)");
    assert_eq!(utility["data"][2]["y"][0], 1200.0);
}

#[tokio::test]
async fn configured_catalog_drives_every_endpoint() {
    let cfg = DashboardConfig::from_toml_str(
        r#"
[model]
horizon_years = 5

[dashboard]
default_selection = ["SOLAR"]

[[measures]]
id = "SOLAR"
label = "Attic Fan"
annual_savings_kwh = 80.0
"#,
    )
    .expect("config should parse");
    assert!(cfg.validate().is_empty());
    let dashboard = Arc::new(cfg.build());

    let (status, measures) = get_json(router(dashboard.clone()), "/api/measures").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(measures["measures"][0]["id"], "SOLAR");

    let (status, charts) = get_json(router(dashboard.clone()), "/api/charts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(charts["line"]["data"][0]["x"], serde_json::json!([1, 2, 3, 4, 5]));

    let (status, summary) = get_json(router(dashboard), "/api/summary?measures=M1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(summary["error"].as_str().unwrap().contains("M1"));
}
