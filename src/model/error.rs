//! Contract errors raised by the savings model.

use std::error::Error;
use std::fmt;

/// A selection referenced something the model cannot account for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The identifier is not present in the measure catalog.
    UnknownMeasure {
        /// The offending identifier, as supplied.
        id: String,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMeasure { id } => write!(f, "unknown measure identifier \"{id}\""),
        }
    }
}

impl Error for ModelError {}
