//! Projection horizon: the ordered year indices every series is reported on.

/// Number of years projected when nothing else is configured.
pub const DEFAULT_HORIZON_YEARS: u32 = 10;

/// Year indices `1..=years`, fixed for the lifetime of the process.
///
/// # Examples
///
/// ```
/// use solar_savings::model::horizon::Horizon;
///
/// let h = Horizon::default();
/// assert_eq!(h.len(), 10);
/// assert_eq!(h.years().first(), Some(&1));
/// assert_eq!(h.years().last(), Some(&10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Horizon {
    years: Vec<u32>,
}

impl Default for Horizon {
    fn default() -> Self {
        Self::new(DEFAULT_HORIZON_YEARS)
    }
}

impl Horizon {
    /// Creates a horizon spanning years `1..=years`.
    ///
    /// # Panics
    ///
    /// Panics if `years` is zero.
    pub fn new(years: u32) -> Self {
        assert!(years > 0, "horizon must span at least one year");
        Self {
            years: (1..=years).collect(),
        }
    }

    /// Year indices in ascending order.
    pub fn years(&self) -> &[u32] {
        &self.years
    }

    /// Number of years in the horizon.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Scales a constant annual amount by each elapsed year.
    pub fn accumulate(&self, per_year: f64) -> Vec<f64> {
        self.years.iter().map(|&y| per_year * f64::from(y)).collect()
    }
}
