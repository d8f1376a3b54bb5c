/// Cumulative energy savings line.
pub const ENERGY_COLOR: &str = "green";
/// Cumulative cost savings line.
pub const COST_COLOR: &str = "blue";
/// Baseline usage reference line.
pub const BASELINE_COLOR: &str = "lightgray";
/// Bill without solar.
pub const WITHOUT_SOLAR_COLOR: &str = "gray";
/// Bill with solar.
pub const WITH_SOLAR_COLOR: &str = "blue";
/// Flat solar rate reference line.
pub const SOLAR_RATE_COLOR: &str = "cyan";
/// Cumulative utility savings line.
pub const UTILITY_SAVINGS_COLOR: &str = "green";

/// Plot area background for the time-series charts.
pub const PLOT_BACKGROUND: &str = "rgba(245, 245, 245, 1)";

/// Stroke width for primary series.
pub const PRIMARY_WIDTH: f64 = 3.0;
/// Donut inner radius fraction.
pub const PIE_HOLE: f64 = 0.4;
