//! Wire types for the toggle metrics endpoint.
//!
//! These match the JSON served by the FeatureProbe management API for
//! `GET .../toggles/{toggleKey}/metrics`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Evaluation count of one variation.
///
/// Used both for the window-wide summary and for the per-bucket values of
/// a [`MetricSeries`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEntry {
    /// The variation label.
    pub value: String,
    /// Number of evaluations that returned this variation.
    #[serde(default)]
    pub count: u64,
    /// Set when the variation has since been removed from the toggle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
}

impl SummaryEntry {
    pub fn new(value: impl Into<String>, count: u64) -> Self {
        Self {
            value: value.into(),
            count,
            deleted: None,
        }
    }
}

/// One time bucket of the evaluation series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricSeries {
    /// Bucket label (e.g. "14:00" or "06-01").
    pub name: String,
    /// Per-variation counts within the bucket.
    #[serde(default)]
    pub values: Vec<SummaryEntry>,
}

impl MetricSeries {
    /// Count for `variation` in this bucket, zero when it was not evaluated.
    pub fn count_for(&self, variation: &str) -> u64 {
        self.values.iter().find(|v| v.value == variation).map_or(0, |v| v.count)
    }
}

/// Payload of a successful metrics query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricContent {
    #[serde(default)]
    pub metrics: Vec<MetricSeries>,
    #[serde(default)]
    pub summary: Vec<SummaryEntry>,
}

/// Result envelope of a metrics query.
///
/// `success == false` carries an optional server message; `success == true`
/// normally carries `data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<MetricContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MetricsResponse {
    pub fn ok(data: MetricContent) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn failure(message: Option<String>) -> Self {
        Self {
            success: false,
            data: None,
            message,
        }
    }
}

/// Identifies the toggle whose metrics are shown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlagTarget {
    pub project: String,
    pub environment: String,
    pub toggle: String,
}

impl FlagTarget {
    pub fn new(
        project: impl Into<String>,
        environment: impl Into<String>,
        toggle: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            environment: environment.into(),
            toggle: toggle.into(),
        }
    }
}

impl fmt::Display for FlagTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.project, self.environment, self.toggle)
    }
}
