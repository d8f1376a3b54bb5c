/// Contract errors.
pub mod error;
/// Projection window.
pub mod horizon;
pub mod params;
/// Savings calculator.
pub mod savings;
pub mod selection;
pub mod summary;
/// Utility cost model.
pub mod utility;
