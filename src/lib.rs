//! # flagwatch
//!
//! A terminal panel for feature toggle evaluation metrics.
//!
//! This crate polls a feature management server for how often each
//! variation of a toggle was evaluated over a selectable time window, and
//! displays the counts as a table with a total next to a time-series chart.
//! When nothing has been evaluated yet it shows an empty state pointing at
//! the SDK documentation.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌──────────┐  │
//! │  │   app   │───▶│   data   │───▶│   ui    │───▶│ Terminal │  │
//! │  │ (state) │    │(derivation)   │(rendering)   │          │  │
//! │  └────▲────┘    └──────────┘    └─────────┘    └──────────┘  │
//! │       │ FetchOutcome                                         │
//! │  ┌────┴────┐    ┌──────────┐                                 │
//! │  │ poller  │───▶│  source  │◀── HttpSource | FileSource      │
//! │  │ (tokio) │    │ (query)  │                                 │
//! │  └─────────┘    └──────────┘                                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: View state, stale result fencing, window selection and the chart crosshair
//! - **[`poller`]**: The repeating fetch task on the tokio runtime
//! - **[`source`]**: Metrics query abstraction ([`MetricsQuery`] trait) over HTTP or a file
//! - **[`data`]**: Applied metrics, totals, chart datasets and time windows
//! - **[`ui`]**: Terminal rendering using ratatui
//! - **[`config`]**: Layered settings from file, environment and command line
//! - **[`i18n`]**: English and Chinese display text
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Watch a toggle on a server
//! flagwatch --server http://localhost:4009 --token $TOKEN \
//!     -p shop -e online -t new_checkout
//!
//! # Last 7 days, in Chinese
//! flagwatch -p shop -e online -t new_checkout --window 168 --locale zh
//!
//! # Offline, from a saved response
//! flagwatch -p shop -e online -t new_checkout --file metrics.json
//! ```
//!
//! ### As a library
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use flagwatch::{App, AppOptions, FileSource, FlagTarget, Poller, SystemBrowser, Theme};
//! use flagwatch::{Locale, TimeWindow, DEFAULT_DOCS_URL};
//!
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! let (poller, updates) = Poller::new(
//!     runtime.handle().clone(),
//!     Arc::new(FileSource::new("metrics.json")),
//!     FlagTarget::new("shop", "online", "new_checkout"),
//!     Duration::from_secs(5),
//! );
//! let mut app = App::new(
//!     poller,
//!     updates,
//!     AppOptions {
//!         window: TimeWindow::OneDay,
//!         locale: Locale::En,
//!         theme: Theme::dark(),
//!         docs_url: DEFAULT_DOCS_URL.to_string(),
//!         browser: Box::new(SystemBrowser),
//!     },
//! );
//! app.pump();
//! ```

pub mod app;
pub mod browser;
pub mod config;
pub mod data;
pub mod events;
pub mod i18n;
pub mod poller;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppOptions, PanelState};
pub use browser::{SystemBrowser, UrlOpener, DEFAULT_DOCS_URL};
pub use data::{ChartData, ChartOptions, MetricsData, TimeWindow};
pub use i18n::{Locale, MessageId};
pub use poller::{FetchOutcome, Poller};
pub use source::{
    FetchError, FileSource, FlagTarget, HttpSource, HttpSourceBuilder, MetricContent,
    MetricSeries, MetricsQuery, MetricsResponse, SummaryEntry,
};
pub use ui::Theme;
