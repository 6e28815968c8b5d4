//! Evaluation chart rendering.
//!
//! One braille line per variation. When a bucket is active the crosshair is
//! drawn as an extra two-point dataset spanning the y bounds, and a tooltip
//! with every variation's count at that bucket is placed beside it.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Clear, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::{ChartData, Tooltip};

use super::common::format_count;

/// Rows taken below the plot by the x labels and axis line.
const X_AXIS_ROWS: u16 = 2;
/// Rows taken above the plot by the y axis title.
const Y_TITLE_ROWS: u16 = 1;

/// Render the chart and remember where its plot landed for mouse hit testing.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(ref chart) = app.chart else {
        app.chart_area = None;
        return;
    };

    let options = &app.chart_options;
    let theme = &app.theme;

    let mut datasets: Vec<Dataset> = chart
        .datasets
        .iter()
        .map(|d| {
            Dataset::default()
                .name(d.label.clone())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(theme.variation_style(d.color))
                .data(&d.points)
        })
        .collect();

    let crosshair = if options.crosshair { chart.crosshair(app.active_point) } else { None };
    let segment = crosshair.map(|c| c.segment());
    if let Some(ref segment) = segment {
        datasets.push(
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme.crosshair))
                .data(segment),
        );
    }

    let y_labels: Vec<String> =
        chart.y_ticks(options.y_ticks).into_iter().map(|v| format_count(v as u64)).collect();
    let y_label_width = y_labels.iter().map(|l| l.chars().count()).max().unwrap_or(1) as u16;
    let x_labels = chart.x_labels(options.x_ticks);

    let axis_style = Style::default().fg(theme.axis);
    let mut widget = Chart::new(datasets)
        .block(Block::default().borders(Borders::NONE))
        .x_axis(
            Axis::default()
                .title(Span::styled(options.x_title, axis_style))
                .style(axis_style)
                .bounds(chart.x_bounds())
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled(options.y_title, axis_style))
                .style(axis_style)
                .bounds(chart.y_bounds())
                .labels(y_labels),
        );
    if !options.show_legend {
        widget = widget.legend_position(None);
    }

    frame.render_widget(widget, area);

    let plot = plot_area(area, y_label_width);
    if options.tooltip {
        if let Some(tooltip) = chart.tooltip(app.active_point) {
            render_tooltip(frame, app, chart, &tooltip, plot);
        }
    }
    app.chart_area = Some(plot);
}

/// Where ratatui places the plotting canvas inside `area`.
fn plot_area(area: Rect, y_label_width: u16) -> Rect {
    // y labels, then one column for the axis line
    let left = (y_label_width + 1).min(area.width);
    let top = Y_TITLE_ROWS.min(area.height);
    Rect::new(
        area.x + left,
        area.y + top,
        area.width - left,
        area.height.saturating_sub(top + X_AXIS_ROWS),
    )
}

/// Column of `index` inside a plot spanning `len` buckets.
fn bucket_column(plot: Rect, index: usize, len: usize) -> u16 {
    if len <= 1 || plot.width <= 1 {
        return plot.x;
    }
    let offset = index as f64 / (len - 1) as f64 * f64::from(plot.width - 1);
    plot.x + offset.round() as u16
}

fn render_tooltip(frame: &mut Frame, app: &App, chart: &ChartData, tooltip: &Tooltip, plot: Rect) {
    let theme = &app.theme;

    let mut lines = vec![Line::from(Span::styled(
        tooltip.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    lines.extend(tooltip.rows.iter().map(|row| {
        Line::from(vec![
            Span::styled("■ ", theme.variation_style(row.color)),
            Span::raw(format!("{}: ", row.label)),
            Span::styled(format_count(row.count), Style::default().add_modifier(Modifier::BOLD)),
        ])
    }));

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = (content_width + 2).min(plot.width);
    let height = (lines.len() as u16 + 2).min(plot.height);
    if width < 3 || height < 3 {
        return;
    }

    // Beside the crosshair, flipping left near the right edge
    let column = app.active_point.map_or(plot.x, |i| bucket_column(plot, i, chart.len()));
    let x = if column + 2 + width <= plot.right() {
        column + 2
    } else {
        column.saturating_sub(width + 1).max(plot.x)
    };
    let area = Rect::new(x, plot.y, width, height).intersection(plot);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
