use super::{ChartSpec, Layout, PieTrace, Trace, style};
use crate::catalog::Catalog;
use crate::model::error::ModelError;
use crate::model::selection::Selection;

pub const PIE_TITLE: &str = "Proportion of Energy Savings by Measure";

/// One donut slice per selected measure, in selection order.
///
/// An empty selection yields a chart with zero slices.
///
/// # Errors
///
/// Returns [`ModelError::UnknownMeasure`] if a selected id is not in
/// `catalog`.
pub fn build_pie(catalog: &Catalog, selected: &Selection) -> Result<ChartSpec, ModelError> {
    let mut labels = Vec::with_capacity(selected.len());
    let mut values = Vec::with_capacity(selected.len());
    for id in selected.iter() {
        let measure = catalog.lookup(id)?;
        labels.push(measure.label.clone());
        values.push(measure.annual_savings_kwh);
    }

    Ok(ChartSpec {
        data: vec![Trace::Pie(PieTrace {
            labels,
            values,
            hole: style::PIE_HOLE,
        })],
        layout: Layout::titled(PIE_TITLE),
    })
}
