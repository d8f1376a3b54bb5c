//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, List, ListItem,
    Paragraph,
};

use super::runtime::App;
use super::style;
use crate::chart::ChartSpec;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(12),   // body
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(30)])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(checklist_height(app.measures().len())),
            Constraint::Min(5),
        ])
        .split(body[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body[1]);

    render_header(frame, app, rows[0]);
    render_checklist(frame, app, left[0]);
    if let Some(charts) = &app.charts {
        render_pie(frame, &charts.pie, left[1]);
        render_series(frame, &charts.line, app.horizon_years(), right[0]);
        render_series(frame, &charts.utility, app.horizon_years(), right[1]);
    }
    render_footer(frame, app, rows[2]);
}

/// Rows needed for `measures` checklist entries plus the block border.
fn checklist_height(measures: usize) -> u16 {
    u16::try_from(measures)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

/// Header bar: title and selection size.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Line::from(vec![
        Span::styled(
            " SOLAR SAVINGS ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " │ {}/{} measures │ {} years ",
            app.selection.len(),
            app.measures().len(),
            app.horizon_years(),
        )),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Checklist of catalog measures.
fn render_checklist(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .measures()
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let mark = if app.is_checked(i) { "[x]" } else { "[ ]" };
            let text = format!("{} {mark} {}", i + 1, m.label);
            let item_style = if i == app.cursor {
                Style::default()
                    .fg(style::CURSOR_FG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(text, item_style)))
        })
        .collect();

    let list = List::new(items).block(Block::default().title(" Measures ").borders(Borders::ALL));
    frame.render_widget(list, area);
}

/// Pie slices drawn as horizontal bars with their share of the total.
fn render_pie(frame: &mut Frame, spec: &ChartSpec, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", spec.layout.title.text))
        .borders(Borders::ALL);

    let Some(pie) = spec.pie_trace().filter(|p| !p.values.is_empty()) else {
        frame.render_widget(Paragraph::new("  No measures selected").block(block), area);
        return;
    };

    let total: f64 = pie.values.iter().sum();
    let bars: Vec<Bar> = pie
        .labels
        .iter()
        .zip(&pie.values)
        .map(|(label, &value)| {
            let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
            Bar::default()
                .value(value.round() as u64)
                .label(Line::from(label.as_str()))
                .text_value(format!("{value:.0} kWh ({share:.0}%)"))
                .style(Style::default().fg(style::SLICE_COLOR))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

/// Line chart of every scatter trace in `spec`.
fn render_series(frame: &mut Frame, spec: &ChartSpec, years: usize, area: Rect) {
    let traces: Vec<_> = spec.scatter_traces().collect();
    let points: Vec<Vec<(f64, f64)>> = traces
        .iter()
        .map(|t| {
            t.x.iter()
                .zip(&t.y)
                .map(|(&x, &y)| (f64::from(x), y))
                .collect()
        })
        .collect();

    let datasets: Vec<Dataset> = traces
        .iter()
        .zip(&points)
        .map(|(t, data)| {
            Dataset::default()
                .name(t.name.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(style::trace_color(&t.line.color)))
                .data(data)
        })
        .collect();

    let y_bounds = style::auto_bounds_y(&points);
    let x_hi = (years as f64).max(2.0);
    let axis_title = |axis: &Option<crate::chart::Axis>| {
        axis.as_ref()
            .map(|a| a.title.text.clone())
            .unwrap_or_default()
    };

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(format!(" {} ", spec.layout.title.text))
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title(axis_title(&spec.layout.xaxis))
                .bounds([1.0, x_hi])
                .labels(vec!["1".to_string(), format!("{years}")]),
        )
        .y_axis(
            Axis::default()
                .title(axis_title(&spec.layout.yaxis))
                .bounds(y_bounds)
                .labels(vec![
                    format!("{:.0}", y_bounds[0]),
                    format!("{:.0}", y_bounds[1]),
                ]),
        );

    frame.render_widget(chart, area);
}

/// Footer with keybinding hints, or the last handler error.
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.error {
        Some(e) => Span::styled(format!(" error: {e}"), Style::default().fg(style::ERROR_FG)),
        None => Span::styled(
            " q:Quit  ↑/↓:Move  Space:Toggle  1-9:Toggle measure",
            Style::default().fg(style::FOOTER_FG),
        ),
    };
    frame.render_widget(Paragraph::new(Line::from(line)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::dashboard::Dashboard;

    #[test]
    fn renders_checklist_and_chart_titles() {
        let app = App::new(Dashboard::default());
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("[x] Insulation Upgrade"));
        assert!(text.contains("[ ] Smart Thermostat"));
        assert!(text.contains("Utility Bill Comparison"));
    }

    #[test]
    fn checklist_height_saturates_on_huge_catalogs() {
        assert_eq!(checklist_height(3), 5);
        assert_eq!(checklist_height(usize::from(u16::MAX)), u16::MAX);
        assert_eq!(checklist_height(1_000_000), u16::MAX);
    }
}
