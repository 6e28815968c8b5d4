//! Common UI components shared across the panel.
//!
//! This module contains the header bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, PanelState};
use crate::data::duration::format_duration;
use crate::i18n::MessageId;

/// Render the header bar.
///
/// Displays: polling indicator, watched toggle, selected window, total evaluations.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let dot_style = match app.get_status_message() {
        Some(msg) if msg.is_error => Style::default().fg(app.theme.error),
        _ if app.data.is_some() => Style::default().fg(app.theme.healthy),
        _ => app.theme.muted,
    };

    let mut spans = vec![
        Span::styled(" ● ", dot_style),
        Span::styled("FLAGWATCH ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(app.target().to_string(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" │ "),
        Span::styled(
            format!("{} ▾", app.window.label(app.locale)),
            Style::default().fg(app.theme.highlight),
        ),
    ];

    match (app.panel_state(), app.data.as_ref()) {
        (PanelState::Loading, _) => {
            spans.push(Span::raw(" │ "));
            spans.push(Span::styled(app.locale.text(MessageId::Loading), app.theme.muted));
        }
        (_, Some(data)) => {
            spans.push(Span::raw(" │ "));
            spans.push(Span::raw(format!("{}: ", app.locale.text(MessageId::Total))));
            spans.push(Span::styled(
                format_count(data.total),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }
        _ => {}
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Format a count for display (e.g., 1234 -> "1.2K", 1234567 -> "1.2M").
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Render the status bar at the bottom.
///
/// Shows: data source, time since last update, poll interval, available controls.
/// Temporary notifications and errors take its place while they last.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg.text)).style(app.theme.message_style(msg.is_error));
        frame.render_widget(paragraph, area);
        return;
    }

    let controls = match app.panel_state() {
        PanelState::Empty => "w:window o:open docs r:refresh ?:help q:quit",
        PanelState::Populated => "w:window ←/→:inspect e:export ?:help q:quit",
        PanelState::Loading => "w:window r:refresh q:quit",
    };

    let status = match app.data {
        Some(ref data) => format!(
            " {} | Updated {:.1}s ago | every {} | {}",
            app.source_description(),
            data.last_updated.elapsed().as_secs_f64(),
            format_duration(app.poll_interval()),
            controls,
        ),
        None => format!(" {} | {}", app.source_description(), controls),
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the panel.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Window",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  w / Enter   Open window selector"),
        Line::from("  ↑/↓ j/k     Move in selector"),
        Line::from("  Enter       Apply window"),
        Line::from("  Esc         Close selector"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Chart",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ←/→ h/l     Move crosshair"),
        Line::from("  Home/End    First/last bucket"),
        Line::from("  Mouse       Hover to inspect"),
        Line::from("  Esc         Hide crosshair"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  o         Open SDK docs (no data)"),
        Line::from("  r         Refresh now"),
        Line::from("  e         Export to JSON"),
        Line::from("  q         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 42u16.min(area.width.saturating_sub(4));
    let help_height = 25u16.min(area.height.saturating_sub(2));
    let help_area = centered(area, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

/// A `width` x `height` rectangle centered in `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_234), "1.2K");
        assert_eq!(format_count(1_234_567), "1.2M");
    }

    #[test]
    fn test_centered() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered(area, 40, 10), Rect::new(30, 15, 40, 10));
        // Never larger than the area
        assert_eq!(centered(Rect::new(5, 5, 10, 4), 40, 10), Rect::new(5, 5, 10, 4));
    }

    #[test]
    fn test_centered_in_short_terminal() {
        // The size warning is centered even with fewer rows than it needs
        for rows in 0..5 {
            let area = Rect::new(0, 0, 60, rows);
            let warning = centered(area, area.width, 5);
            assert_eq!(warning.y, 0);
            assert_eq!(warning.height, rows);
            assert!(warning.bottom() <= area.bottom());
        }
    }
}
