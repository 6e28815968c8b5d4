//! Empty state shown when no variation was evaluated in the window.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::i18n::MessageId;

/// Small box illustration above the message.
const ILLUSTRATION: [&str; 4] = ["  ┌───────┐  ", " ╱│       │╲ ", "  │  ···  │  ", "  └───────┘  "];

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = ILLUSTRATION
        .iter()
        .map(|row| Line::from(Span::styled(*row, app.theme.muted)))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        app.locale.text(MessageId::NoDataText),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(vec![
        Span::styled(app.locale.text(MessageId::LinkSdkText), app.theme.link),
        Span::raw(app.locale.text(MessageId::NoDataTips)),
    ]));
    lines.push(Line::from(Span::styled(
        format!("[o] {}", app.docs_url),
        app.theme.muted,
    )));

    let height = lines.len() as u16;
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), middle);
}
