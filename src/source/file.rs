//! File-based metrics source.
//!
//! Reads evaluation metrics from a JSON file instead of the management API.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;

use super::{FetchError, FlagTarget, MetricContent, MetricsQuery, MetricsResponse};
use crate::data::TimeWindow;

/// A metrics source backed by a JSON file.
///
/// The file may hold either a full response envelope
/// (`{"success": true, "data": {...}}`) or a bare payload
/// (`{"metrics": [...], "summary": [...]}`). The file is re-read on every
/// fetch, so edits show up on the next poll. The time window is ignored.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FileContents {
    Envelope(MetricsResponse),
    Bare(MetricContent),
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self { path, description }
    }

    /// Returns the path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl MetricsQuery for FileSource {
    async fn fetch(
        &self,
        _target: &FlagTarget,
        _window: TimeWindow,
    ) -> Result<MetricsResponse, FetchError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let contents: FileContents =
            serde_json::from_str(&content).map_err(|e| FetchError::Parse(e.to_string()))?;

        Ok(match contents {
            FileContents::Envelope(response) => response,
            FileContents::Bare(data) => MetricsResponse::ok(data),
        })
    }

    fn description(&self) -> &str {
        &self.description
    }
}
