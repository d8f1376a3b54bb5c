//! Color constants and auto-scaling helpers for the TUI.

use ratatui::style::Color;

/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Highlighted checklist row.
pub const CURSOR_FG: Color = Color::Yellow;
/// Pie slice bars.
pub const SLICE_COLOR: Color = Color::Green;
/// Error text.
pub const ERROR_FG: Color = Color::Red;

/// Maps a chart-spec color name onto the terminal palette.
pub fn trace_color(name: &str) -> Color {
    match name {
        "green" => Color::Green,
        "blue" => Color::Blue,
        "cyan" => Color::Cyan,
        "gray" => Color::DarkGray,
        "lightgray" => Color::Gray,
        _ => Color::White,
    }
}

/// Computes Y-axis bounds across all series with 10% padding.
pub fn auto_bounds_y(series: &[Vec<(f64, f64)>]) -> [f64; 2] {
    let all = series.iter().flatten().map(|&(_, y)| y);
    let min = all.clone().fold(f64::INFINITY, f64::min);
    let max = all.fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return [-1.0, 1.0];
    }
    let range = (max - min).max(0.1);
    let pad = range * 0.1;
    [min - pad, max + pad]
}
