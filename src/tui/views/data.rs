//! User Data page: historical table, scatter chart and simulated histogram.

use crate::data::{DataView, HistoricalTable, ScatterPoint, SimulatedDistribution};
use crate::io::writers::html::{HISTOGRAM_CHART_TITLE, SCATTER_CHART_TITLE};
use crate::page::{Page, DATA_PAGE_TEXT};
use crate::tui::app::App;
use crate::tui::theme::{BmiBand, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::Marker,
    text::Span,
    widgets::{
        Axis, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table, Wrap,
    },
    Frame,
};

pub fn render(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),      // Description
            Constraint::Percentage(55), // Table and scatter
            Constraint::Min(8),         // Histogram
        ])
        .split(area);

    let description = Paragraph::new(DATA_PAGE_TEXT)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", Page::Data.title()))
                .border_style(theme.border_style()),
        );
    frame.render_widget(description, chunks[0]);

    match app.data() {
        Some(view) => render_historical(frame, app, view, chunks[1], theme),
        None => render_message(frame, "Press r to load the data file.", chunks[1], theme),
    }

    render_histogram(frame, app.distribution(), chunks[2], theme);
}

fn render_historical(frame: &mut Frame, app: &App, view: &DataView, area: Rect, theme: &Theme) {
    let Some(table) = &view.table else {
        let message = view.error_message().unwrap_or_default();
        render_message(frame, &message, area, theme);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_table(frame, table, app.data_scroll(), chunks[0], theme);

    match (&view.scatter, view.error_message()) {
        (Some(points), _) => render_scatter(frame, points, chunks[1], theme),
        (None, Some(message)) => render_message(frame, &message, chunks[1], theme),
        (None, None) => {}
    }
}

fn render_message(frame: &mut Frame, message: &str, area: Rect, theme: &Theme) {
    let paragraph = Paragraph::new(Span::styled(message.to_string(), theme.warning_style()))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style()),
        );
    frame.render_widget(paragraph, area);
}

fn render_table(
    frame: &mut Frame,
    table: &HistoricalTable,
    scroll: usize,
    area: Rect,
    theme: &Theme,
) {
    let columns = table.headers().len().max(1) as u32;
    let widths = vec![Constraint::Ratio(1, columns); columns as usize];

    let header = Row::new(table.headers().iter().map(|h| Cell::from(h.clone())))
        .style(theme.table_header_style());
    let rows = table
        .rows()
        .iter()
        .skip(scroll)
        .map(|row| Row::new(row.iter().map(|c| Cell::from(c.clone()))));

    let title = format!(
        " {} ({} rows) ",
        table.path().display(),
        table.rows().len()
    );
    let widget = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(theme.border_style()),
    );
    frame.render_widget(widget, area);
}

/// Points grouped by BMI band, one dataset per non-empty band.
fn band_series(points: &[ScatterPoint]) -> Vec<(BmiBand, Vec<(f64, f64)>)> {
    BmiBand::ALL
        .iter()
        .map(|band| {
            let series = points
                .iter()
                .filter(|p| BmiBand::classify(p.bmi) == *band)
                .map(|p| (p.age, p.predicted_cost))
                .collect::<Vec<_>>();
            (*band, series)
        })
        .filter(|(_, series)| !series.is_empty())
        .collect()
}

fn bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return [0.0, 1.0];
    }
    let pad = ((hi - lo) * 0.05).max(1.0);
    [lo - pad, hi + pad]
}

fn axis_labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    [bounds[0], mid, bounds[1]]
        .iter()
        .map(|v| Span::raw(format!("{:.0}", v)))
        .collect()
}

fn render_scatter(frame: &mut Frame, points: &[ScatterPoint], area: Rect, theme: &Theme) {
    let series = band_series(points);
    let x_bounds = bounds(points.iter().map(|p| p.age));
    let y_bounds = bounds(points.iter().map(|p| p.predicted_cost));

    let datasets: Vec<Dataset> = series
        .iter()
        .map(|(band, data)| {
            Dataset::default()
                .name(band.label())
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(band.color()))
                .data(data)
        })
        .collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", SCATTER_CHART_TITLE))
                .border_style(theme.border_style()),
        )
        .x_axis(
            Axis::default()
                .title("Age")
                .style(theme.muted_style())
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds)),
        )
        .y_axis(
            Axis::default()
                .title("Predicted cost")
                .style(theme.muted_style())
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds)),
        );
    frame.render_widget(chart, area);
}

fn render_histogram(
    frame: &mut Frame,
    distribution: &SimulatedDistribution,
    area: Rect,
    theme: &Theme,
) {
    let histogram = &distribution.histogram;
    let bars: Vec<(f64, f64)> = histogram
        .bins()
        .map(|(left, right, count)| ((left + right) / 2.0, count as f64))
        .collect();

    let peak = distribution
        .density
        .iter()
        .map(|(_, y)| *y)
        .fold(histogram.max_count() as f64, f64::max);
    let x_bounds = [histogram.min, histogram.max];
    let y_bounds = [0.0, (peak * 1.1).max(1.0)];

    let datasets = vec![
        Dataset::default()
            .name("Frequency")
            .marker(Marker::Braille)
            .graph_type(GraphType::Bar)
            .style(theme.bar_style())
            .data(&bars),
        Dataset::default()
            .name("Density")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(theme.density_style())
            .data(&distribution.density),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", HISTOGRAM_CHART_TITLE))
                .border_style(theme.border_style()),
        )
        .x_axis(
            Axis::default()
                .title("Medical cost")
                .style(theme.muted_style())
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds)),
        )
        .y_axis(
            Axis::default()
                .title("Frequency")
                .style(theme.muted_style())
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds)),
        );
    frame.render_widget(chart, area);
}
