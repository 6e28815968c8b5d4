//! Data models and derivations for the metrics panel.
//!
//! This module turns raw query results into the state the view displays.
//!
//! ## Submodules
//!
//! - [`chart`]: Chart dataset, axes, crosshair and tooltip derivation
//! - [`duration`]: Parsing and formatting of interval strings (e.g., "5s", "500ms")
//! - [`metrics`]: The applied view state ([`MetricsData`]) and its total
//! - [`window`]: The evaluation window options ([`TimeWindow`])
//!
//! ## Data Flow
//!
//! ```text
//! MetricsResponse (raw JSON)
//!        │
//!        ▼
//! MetricsData::from_content()
//!        │
//!        ├──▶ summary + total (variation table)
//!        │
//!        └──▶ ChartData::derive() (chart, crosshair, tooltip)
//! ```

pub mod chart;
pub mod duration;
pub mod metrics;
pub mod window;

pub use chart::{ChartData, ChartDataset, ChartOptions, Crosshair, Tooltip, TooltipRow};
pub use metrics::MetricsData;
pub use window::TimeWindow;
