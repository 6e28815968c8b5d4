//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::chart::PALETTE_SIZE;

/// Line and swatch colors, one per variation, wrapping after the last.
pub const VARIATION_COLORS: [Color; PALETTE_SIZE] = [
    Color::Rgb(0x55, 0x8f, 0xf6),
    Color::Rgb(0x2b, 0xc4, 0x8b),
    Color::Rgb(0xf5, 0xa5, 0x24),
    Color::Rgb(0xe8, 0x5d, 0x75),
    Color::Rgb(0x9b, 0x6c, 0xf2),
    Color::Rgb(0x2d, 0xb7, 0xd3),
    Color::Rgb(0xf2, 0x7b, 0x3d),
    Color::Rgb(0x8a, 0xc9, 0x4b),
    Color::Rgb(0xd9, 0x5c, 0xc4),
    Color::Rgb(0x4a, 0x6f, 0xd8),
    Color::Rgb(0xc9, 0xa2, 0x27),
    Color::Rgb(0x3f, 0xa7, 0x80),
    Color::Rgb(0xff, 0x8c, 0x94),
    Color::Rgb(0x6a, 0x8e, 0xae),
    Color::Rgb(0xb4, 0x86, 0x5a),
    Color::Rgb(0x7c, 0xd1, 0xc1),
    Color::Rgb(0xa5, 0x5a, 0xd6),
    Color::Rgb(0xe0, 0xc1, 0x4f),
    Color::Rgb(0x57, 0xb6, 0xe8),
    Color::Rgb(0xd4, 0x6b, 0x4c),
    Color::Rgb(0x6c, 0xbf, 0x6a),
    Color::Rgb(0xc2, 0x7b, 0xa0),
    Color::Rgb(0x8d, 0x99, 0xf0),
    Color::Rgb(0xa3, 0xa3, 0x3c),
];

/// Palette color for a dataset color index.
pub fn variation_color(index: usize) -> Color {
    VARIATION_COLORS[index % PALETTE_SIZE]
}

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color of error notifications.
    pub error: Color,
    /// Color of the "receiving data" indicator.
    pub healthy: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Vertical line through the active bucket.
    pub crosshair: Color,
    /// Axis lines and labels.
    pub axis: Color,
    /// Style for header rows in tables.
    pub header: Style,
    /// Style for selected/highlighted rows.
    pub selected: Style,
    /// Style for the empty-state link.
    pub link: Style,
    /// Secondary text.
    pub muted: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            error: Color::Red,
            healthy: Color::Green,
            border: Color::Gray,
            crosshair: Color::White,
            axis: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            link: Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
            muted: Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            error: Color::Red,
            healthy: Color::Green,
            border: Color::DarkGray,
            crosshair: Color::Black,
            axis: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::LightBlue).add_modifier(Modifier::BOLD),
            link: Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            muted: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Style for a variation's line and swatch.
    pub fn variation_style(&self, color: usize) -> Style {
        Style::default().fg(variation_color(color))
    }

    /// Style of a status bar notification.
    pub fn message_style(&self, is_error: bool) -> Style {
        if is_error {
            Style::default().fg(self.error).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.highlight)
        }
    }
}
