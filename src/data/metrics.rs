//! View state derived from a successful metrics query.

use std::time::Instant;

use super::TimeWindow;
use crate::source::{FlagTarget, MetricContent, MetricSeries, SummaryEntry};

/// Evaluation metrics currently shown by the panel.
///
/// Replaced wholesale on every applied poll result; never patched.
#[derive(Debug, Clone)]
pub struct MetricsData {
    /// Time buckets feeding the chart.
    pub series: Vec<MetricSeries>,
    /// One entry per variation, in server order.
    pub summary: Vec<SummaryEntry>,
    /// Sum of all summary counts.
    pub total: u64,
    pub last_updated: Instant,
}

impl MetricsData {
    pub fn from_content(content: MetricContent) -> Self {
        let total = total_count(&content.summary);
        Self {
            series: content.metrics,
            summary: content.summary,
            total,
            last_updated: Instant::now(),
        }
    }

    /// True when no variation has been evaluated in the window.
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
    }

    /// JSON document written by the export command.
    pub fn to_export(&self, target: &FlagTarget, window: TimeWindow) -> serde_json::Value {
        serde_json::json!({
            "project": target.project,
            "environment": target.environment,
            "toggle": target.toggle,
            "lastHours": window.value(),
            "total": self.total,
            "summary": self.summary,
            "metrics": self.series,
        })
    }
}

/// Sum of the counts of every summary entry.
pub fn total_count(summary: &[SummaryEntry]) -> u64 {
    summary.iter().map(|entry| entry.count).sum()
}
