//! Time window dropdown overlay.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use crate::app::App;
use crate::data::TimeWindow;
use crate::i18n::MessageId;

/// Render the dropdown below the header when it is open.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(highlighted) = app.selector else {
        return;
    };

    let items: Vec<ListItem> = TimeWindow::ALL
        .iter()
        .map(|window| {
            let marker = if *window == app.window { "✓ " } else { "  " };
            ListItem::new(format!("{}{}", marker, window.label(app.locale)))
        })
        .collect();

    let width = TimeWindow::ALL
        .iter()
        .map(|w| w.label(app.locale).chars().count())
        .max()
        .unwrap_or(0) as u16
        + 6;
    let height = TimeWindow::ALL.len() as u16 + 2;
    let dropdown = Rect::new(
        area.x + 1,
        area.y,
        width.min(area.width.saturating_sub(1)),
        height.min(area.height),
    );

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {} ", app.locale.text(MessageId::DropdownPlaceholder)))
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.highlight)),
        )
        .highlight_style(app.theme.selected);

    let mut state = ListState::default().with_selected(Some(highlighted));

    frame.render_widget(Clear, dropdown);
    frame.render_stateful_widget(list, dropdown, &mut state);
}
