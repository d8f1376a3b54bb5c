//! Terminal dashboard state.

use crate::catalog::Measure;
use crate::dashboard::{ChartSet, Dashboard};
use crate::model::selection::Selection;

/// TUI application state.
pub struct App {
    /// Immutable catalog and model parameters.
    dashboard: Dashboard,
    /// Checked measures, in the order they were checked.
    pub selection: Selection,
    /// Highlighted checklist row.
    pub cursor: usize,
    /// Charts for the current selection.
    pub charts: Option<ChartSet>,
    /// Last handler error, shown in the footer.
    pub error: Option<String>,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl App {
    /// Creates the app with the dashboard's default selection already charted.
    pub fn new(dashboard: Dashboard) -> Self {
        let selection = dashboard.default_selection().clone();
        let mut app = Self {
            dashboard,
            selection,
            cursor: 0,
            charts: None,
            error: None,
            quit: false,
        };
        app.refresh();
        app
    }

    /// Re-runs the selection handler and stores its charts.
    fn refresh(&mut self) {
        match self.dashboard.handle_selection_change(&self.selection) {
            Ok(charts) => {
                self.charts = Some(charts);
                self.error = None;
            }
            Err(e) => {
                self.charts = None;
                self.error = Some(e.to_string());
            }
        }
    }

    /// Checklist rows.
    pub fn measures(&self) -> &[Measure] {
        self.dashboard.catalog().measures()
    }

    /// Returns `true` if the measure at checklist row `index` is checked.
    pub fn is_checked(&self, index: usize) -> bool {
        self.measures()
            .get(index)
            .is_some_and(|m| self.selection.contains(&m.id))
    }

    /// Toggles the measure at checklist row `index` and recomputes charts.
    pub fn toggle(&mut self, index: usize) {
        let Some(id) = self.measures().get(index).map(|m| m.id.clone()) else {
            return;
        };
        self.selection.toggle(&id);
        self.refresh();
    }

    /// Toggles the highlighted row.
    pub fn toggle_cursor(&mut self) {
        self.toggle(self.cursor);
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.measures().len() {
            self.cursor += 1;
        }
    }

    /// Horizon length, for axis bounds.
    pub fn horizon_years(&self) -> usize {
        self.dashboard.params().horizon.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_starts_with_default_selection_charted() {
        let app = App::new(Dashboard::default());
        assert!(app.is_checked(0));
        assert!(!app.is_checked(1));
        let pie = app.charts.as_ref().and_then(|c| c.pie.pie_trace());
        assert_eq!(pie.map(|p| p.labels.len()), Some(1));
    }

    #[test]
    fn toggle_recomputes_charts() {
        let mut app = App::new(Dashboard::default());
        app.toggle(1);
        let pie = app.charts.as_ref().and_then(|c| c.pie.pie_trace());
        assert_eq!(pie.map(|p| p.values.iter().sum::<f64>()), Some(250.0));

        app.toggle(0);
        app.toggle(1);
        let pie = app.charts.as_ref().and_then(|c| c.pie.pie_trace());
        assert_eq!(pie.map(|p| p.values.len()), Some(0));
        assert!(app.error.is_none());
    }

    #[test]
    fn toggle_out_of_range_is_ignored() {
        let mut app = App::new(Dashboard::default());
        app.toggle(42);
        assert_eq!(app.selection.len(), 1);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut app = App::new(Dashboard::default());
        for _ in 0..10 {
            app.cursor_down();
        }
        assert_eq!(app.cursor, 2);
        app.toggle_cursor();
        assert!(app.is_checked(2));
        for _ in 0..10 {
            app.cursor_up();
        }
        assert_eq!(app.cursor, 0);
    }
}
