use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::App;
use crate::i18n::MessageId;

/// File written by the export key.
pub const EXPORT_FILE: &str = "flagwatch_export.json";

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // Window dropdown captures navigation while open
    if app.selector.is_some() {
        handle_selector_input(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),

        // Window dropdown
        KeyCode::Char('w') | KeyCode::Enter => app.open_selector(),

        // Crosshair
        KeyCode::Left | KeyCode::Char('h') => app.move_active_point(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_active_point(1),
        KeyCode::Home => app.first_point(),
        KeyCode::End => app.last_point(),
        KeyCode::Esc => app.clear_active_point(),

        // Empty-state link
        KeyCode::Char('o') => app.open_docs(),

        // Fetch now
        KeyCode::Char('r') => {
            app.refresh();
            app.set_status_message(app.locale.text(MessageId::Refreshing).to_string());
        }

        KeyCode::Char('?') => app.toggle_help(),

        KeyCode::Char('e') => {
            let export_path = PathBuf::from(EXPORT_FILE);
            match app.export_state(&export_path) {
                Ok(()) => {
                    let text = app.locale.text(MessageId::Exported);
                    app.set_status_message(format!("{} {}", text, export_path.display()));
                }
                Err(e) => {
                    let text = app.locale.text(MessageId::ExportFailed);
                    app.set_error_message(format!("{}: {}", text, e));
                }
            }
        }

        _ => {}
    }
}

/// Handle key input while the window dropdown is open
fn handle_selector_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.selector_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.selector_next(),
        KeyCode::Enter => app.confirm_selector(),
        KeyCode::Esc | KeyCode::Char('w') | KeyCode::Char('q') => app.close_selector(),
        _ => {}
    }
}

/// Handle mouse events
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            if app.selector.is_none() {
                app.hover_column(mouse.column, mouse.row);
            }
        }

        MouseEventKind::ScrollUp => {
            if app.selector.is_some() {
                app.selector_prev();
            } else {
                app.move_active_point(-1);
            }
        }
        MouseEventKind::ScrollDown => {
            if app.selector.is_some() {
                app.selector_next();
            } else {
                app.move_active_point(1);
            }
        }

        _ => {}
    }
}
