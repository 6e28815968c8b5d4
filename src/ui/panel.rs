//! Evaluations panel: variation table and chart, or the empty state.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::{App, PanelState};
use crate::data::MetricsData;
use crate::i18n::MessageId;

use super::common::format_count;

/// Render the evaluations panel for the current state.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.locale.text(MessageId::EvaluationsTitle)))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match app.panel_state() {
        PanelState::Loading => {
            app.chart_area = None;
            render_loading(frame, app, inner);
        }
        PanelState::Empty => {
            app.chart_area = None;
            super::empty::render(frame, app, inner);
        }
        PanelState::Populated => {
            let [table_area, chart_area] =
                Layout::horizontal([Constraint::Percentage(30), Constraint::Percentage(70)])
                    .areas(inner);
            if let Some(ref data) = app.data {
                render_table(frame, app, data, table_area);
            }
            super::chart::render(frame, app, chart_area);
        }
    }
}

fn render_loading(frame: &mut Frame, app: &App, area: Rect) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);
    let paragraph = Paragraph::new(app.locale.text(MessageId::Loading))
        .alignment(Alignment::Center)
        .style(app.theme.muted);
    frame.render_widget(paragraph, middle);
}

/// Variation table: color swatch, label and count per summary entry.
fn render_table(frame: &mut Frame, app: &App, data: &MetricsData, area: Rect) {
    let mut title = vec![Span::styled(
        app.locale.text(MessageId::VariationEvaluations),
        app.theme.header,
    )];
    if data.total > 0 {
        title.push(Span::raw("  "));
        title.push(Span::raw(format!("{}: ", app.locale.text(MessageId::Total))));
        title.push(Span::styled(
            format_count(data.total),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }

    let rows: Vec<Row> = data
        .summary
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let color = app
                .chart
                .as_ref()
                .and_then(|c| c.datasets.get(index))
                .map_or(index, |d| d.color);
            // Variations removed from the toggle still have history
            let label = if entry.deleted == Some(true) {
                let style = app.theme.muted.add_modifier(Modifier::CROSSED_OUT);
                Span::styled(entry.value.clone(), style)
            } else {
                Span::raw(entry.value.clone())
            };
            Row::new(vec![
                Cell::from(Span::styled("■", app.theme.variation_style(color))),
                Cell::from(Line::from(label)),
                Cell::from(Line::from(format_count(entry.count)).alignment(Alignment::Right)),
            ])
        })
        .collect();

    let widths = [Constraint::Length(2), Constraint::Fill(1), Constraint::Length(8)];

    let table = Table::new(rows, widths).block(
        Block::default()
            .title(Line::from(title))
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(app.theme.border)),
    );

    frame.render_widget(table, area);
}
