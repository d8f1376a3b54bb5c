//! Renderer-independent chart specifications and their builders.
//!
//! A [`ChartSpec`] serializes to `{ "data": [...], "layout": {...} }` using
//! Plotly field names, so the browser surface passes it through untouched
//! while the terminal surface reads the same traces.

mod line;
mod pie;
/// Color and background constants attached as presentation metadata.
pub mod style;
mod utility;

use serde::Serialize;

pub use line::{SAVINGS_LINE_TITLE, build_savings_line};
pub use pie::{PIE_TITLE, build_pie};
pub use utility::{UTILITY_TITLE, build_utility_chart};

/// One chart: traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// Traces in drawing order.
    pub data: Vec<Trace>,
    /// Title, axes, and background.
    pub layout: Layout,
}

/// A single data series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    /// Donut/pie slices.
    Pie(PieTrace),
    /// Line series over the horizon.
    Scatter(ScatterTrace),
}

/// Pie slices: parallel label and value vectors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Inner radius fraction; `> 0` draws a donut.
    pub hole: f64,
}

/// A named series of `(year, value)` points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub x: Vec<u32>,
    pub y: Vec<f64>,
    pub mode: Mode,
    pub name: String,
    pub line: LineStyle,
}

/// Whether points get markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mode {
    #[serde(rename = "lines")]
    Lines,
    #[serde(rename = "lines+markers")]
    LinesMarkers,
}

/// Stroke styling for a scatter trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<Dash>,
}

impl LineStyle {
    /// Solid stroke of the given width.
    pub fn solid(color: &str, width: f64) -> Self {
        Self {
            color: color.to_string(),
            width: Some(width),
            dash: None,
        }
    }

    /// Dashed stroke at the renderer's default width.
    pub fn dashed(color: &str) -> Self {
        Self {
            color: color.to_string(),
            width: None,
            dash: Some(Dash::Dash),
        }
    }
}

/// Dash pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dash {
    Dash,
}

/// Chart-level presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<String>,
}

impl Layout {
    /// Layout carrying only a title.
    pub fn titled(text: &str) -> Self {
        Self {
            title: Title::new(text),
            xaxis: None,
            yaxis: None,
            plot_bgcolor: None,
            hovermode: None,
        }
    }

    /// Layout for a series-over-years chart with the shared background.
    pub fn time_series(text: &str, x_title: &str, y_title: &str) -> Self {
        Self {
            title: Title::new(text),
            xaxis: Some(Axis::titled(x_title)),
            yaxis: Some(Axis::titled(y_title)),
            plot_bgcolor: Some(style::PLOT_BACKGROUND.to_string()),
            hovermode: Some("x".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
}

impl Axis {
    pub fn titled(text: &str) -> Self {
        Self {
            title: Title::new(text),
        }
    }
}

impl ChartSpec {
    /// Scatter traces only, in drawing order.
    pub fn scatter_traces(&self) -> impl Iterator<Item = &ScatterTrace> {
        self.data.iter().filter_map(|t| match t {
            Trace::Scatter(s) => Some(s),
            Trace::Pie(_) => None,
        })
    }

    /// The first pie trace, if any.
    pub fn pie_trace(&self) -> Option<&PieTrace> {
        self.data.iter().find_map(|t| match t {
            Trace::Pie(p) => Some(p),
            Trace::Scatter(_) => None,
        })
    }
}

/// Builds a scatter trace over `years`.
pub(crate) fn scatter(
    name: &str,
    years: &[u32],
    y: Vec<f64>,
    mode: Mode,
    line: LineStyle,
) -> Trace {
    Trace::Scatter(ScatterTrace {
        x: years.to_vec(),
        y,
        mode,
        name: name.to_string(),
        line,
    })
}
