//! Terminal rendering using ratatui.
//!
//! Every render function takes the frame, the app state and the area to
//! draw into.
//!
//! - [`common`]: Header, status bar and help overlay
//! - [`panel`]: The evaluations panel, switching between loading, empty and populated
//! - [`chart`]: Evaluation chart with crosshair and tooltip
//! - [`empty`]: The no-data state with the SDK link
//! - [`selector`]: The time window dropdown
//! - [`theme`]: Colors, including the variation palette

pub mod chart;
pub mod common;
pub mod empty;
pub mod panel;
pub mod selector;
pub mod theme;

pub use theme::Theme;
