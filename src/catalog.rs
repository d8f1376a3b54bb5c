//! Energy-efficiency measure catalog.

use serde::{Deserialize, Serialize};

use crate::model::error::ModelError;

/// A named energy-efficiency intervention with a fixed annual saving.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Measure {
    /// Unique catalog key (e.g. `"M1"`).
    pub id: String,
    /// Display label shown in the checklist and the pie chart.
    pub label: String,
    /// Energy saved per year (kWh, positive).
    pub annual_savings_kwh: f64,
}

impl Measure {
    /// Creates a measure.
    pub fn new(id: &str, label: &str, annual_savings_kwh: f64) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            annual_savings_kwh,
        }
    }
}

/// Read-only lookup table of measures, kept in declaration order.
///
/// Declaration order drives the order of the selection control.
///
/// # Examples
///
/// ```
/// use solar_savings::catalog::Catalog;
///
/// let catalog = Catalog::default();
/// assert_eq!(catalog.len(), 3);
/// assert_eq!(catalog.get("M2").map(|m| m.annual_savings_kwh), Some(150.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    measures: Vec<Measure>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(default_measures())
    }
}

impl Catalog {
    /// Builds a catalog from already-validated measures.
    ///
    /// Identifiers are expected to be unique; see
    /// [`crate::config::DashboardConfig::validate`].
    pub fn new(measures: Vec<Measure>) -> Self {
        Self { measures }
    }

    /// Returns the measure with the given id, if present.
    pub fn get(&self, id: &str) -> Option<&Measure> {
        self.measures.iter().find(|m| m.id == id)
    }

    /// Returns the measure with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownMeasure`] if `id` is not in the catalog.
    pub fn lookup(&self, id: &str) -> Result<&Measure, ModelError> {
        self.get(id).ok_or_else(|| ModelError::UnknownMeasure { id: id.to_string() })
    }

    /// Returns `true` if `id` names a catalog measure.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All measure identifiers in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.measures.iter().map(|m| m.id.as_str())
    }

    /// All measures in declaration order.
    pub fn measures(&self) -> &[Measure] {
        &self.measures
    }

    /// Number of measures.
    pub fn len(&self) -> usize {
        self.measures.len()
    }

    /// Returns `true` if the catalog holds no measures.
    pub fn is_empty(&self) -> bool {
        self.measures.is_empty()
    }
}

/// The built-in measure set.
pub fn default_measures() -> Vec<Measure> {
    vec![
        Measure::new("M1", "Insulation Upgrade", 100.0),
        Measure::new("M2", "Smart Thermostat", 150.0),
        Measure::new("M3", "LED Lighting", 50.0),
    ]
}
