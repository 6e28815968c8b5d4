//! Metrics query abstraction.
//!
//! This module provides a trait-based abstraction over where evaluation
//! metrics come from: the management API over HTTP, or a JSON file for
//! offline use.

mod error;
mod file;
mod http;
mod response;

pub use error::FetchError;
pub use file::FileSource;
pub use http::{HttpSource, HttpSourceBuilder};
pub use response::{FlagTarget, MetricContent, MetricSeries, MetricsResponse, SummaryEntry};

use std::fmt::Debug;

use async_trait::async_trait;

use crate::data::TimeWindow;

/// Trait for fetching toggle evaluation metrics.
///
/// Implementations are shared with the background poll task, so they must be
/// `Send + Sync`.
///
/// # Example
///
/// ```no_run
/// use flagwatch::{FileSource, FlagTarget, MetricsQuery, TimeWindow};
///
/// # tokio_test::block_on(async {
/// let source = FileSource::new("metrics.json");
/// let target = FlagTarget::new("shop", "online", "new_checkout");
/// let response = source.fetch(&target, TimeWindow::default()).await.unwrap();
/// println!("success: {}", response.success);
/// # });
/// ```
#[async_trait]
pub trait MetricsQuery: Send + Sync + Debug {
    /// Fetch metrics for `target` over `window`.
    ///
    /// Transport-level failures are returned as `Err`; an answer from the
    /// server that reports failure is `Ok` with `success == false`.
    async fn fetch(
        &self,
        target: &FlagTarget,
        window: TimeWindow,
    ) -> Result<MetricsResponse, FetchError>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI status bar.
    fn description(&self) -> &str;
}
