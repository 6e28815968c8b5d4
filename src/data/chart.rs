//! Chart configuration derived from metrics state.
//!
//! Everything here is pure: the view rebuilds [`ChartData`] only when a new
//! poll result is applied, and builds [`ChartOptions`] once.

use crate::i18n::{Locale, MessageId};
use crate::source::{MetricSeries, SummaryEntry};

/// Number of colors in the variation palette.
pub const PALETTE_SIZE: usize = 24;

/// Display options for the evaluation chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
    pub x_title: &'static str,
    pub y_title: &'static str,
    /// Number of bucket labels shown under the x axis.
    pub x_ticks: usize,
    /// Number of count labels shown beside the y axis.
    pub y_ticks: usize,
    /// The variation table already acts as the legend.
    pub show_legend: bool,
    /// Show all variation counts of the active bucket.
    pub tooltip: bool,
    /// Draw a vertical line through the active bucket.
    pub crosshair: bool,
}

impl ChartOptions {
    pub fn new(locale: Locale) -> Self {
        Self {
            x_title: locale.text(MessageId::TimeAxis),
            y_title: locale.text(MessageId::CountAxis),
            x_ticks: 3,
            y_ticks: 3,
            show_legend: false,
            tooltip: true,
            crosshair: true,
        }
    }
}

/// One line of the chart: a variation's count per bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    pub label: String,
    /// Index into the variation palette.
    pub color: usize,
    pub counts: Vec<u64>,
    /// `(bucket index, count)` pairs ready for plotting.
    pub points: Vec<(f64, f64)>,
}

/// Vertical line drawn through the active point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crosshair {
    pub x: f64,
    pub y_bottom: f64,
    pub y_top: f64,
}

impl Crosshair {
    /// The line as a two-point segment, bottom first.
    pub fn segment(&self) -> [(f64, f64); 2] {
        [(self.x, self.y_bottom), (self.x, self.y_top)]
    }
}

/// Counts of every variation at the active bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub title: String,
    pub rows: Vec<TooltipRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipRow {
    pub label: String,
    pub color: usize,
    pub count: u64,
}

/// Chart dataset derived from series and summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// Bucket labels in x order.
    pub labels: Vec<String>,
    /// One dataset per summary entry, in summary order.
    pub datasets: Vec<ChartDataset>,
    /// Largest count across all datasets.
    pub max_count: u64,
}

impl ChartData {
    pub fn derive(series: &[MetricSeries], summary: &[SummaryEntry]) -> Self {
        let labels: Vec<String> = series.iter().map(|bucket| bucket.name.clone()).collect();

        let datasets: Vec<ChartDataset> = summary
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let counts: Vec<u64> =
                    series.iter().map(|bucket| bucket.count_for(&entry.value)).collect();
                let points = counts.iter().enumerate().map(|(x, &c)| (x as f64, c as f64)).collect();
                ChartDataset {
                    label: entry.value.clone(),
                    color: index % PALETTE_SIZE,
                    counts,
                    points,
                }
            })
            .collect();

        let max_count =
            datasets.iter().flat_map(|d| d.counts.iter().copied()).max().unwrap_or_default();

        Self {
            labels,
            datasets,
            max_count,
        }
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        [0.0, self.len().saturating_sub(1).max(1) as f64]
    }

    /// The y axis always starts at zero and ends on a round value.
    pub fn y_bounds(&self) -> [f64; 2] {
        [0.0, nice_ceiling(self.max_count) as f64]
    }

    /// Evenly spaced bucket labels for the x axis.
    pub fn x_labels(&self, count: usize) -> Vec<String> {
        let len = self.len();
        if len == 0 || count == 0 {
            return Vec::new();
        }
        if len <= count {
            return self.labels.clone();
        }
        if count == 1 {
            return vec![self.labels[0].clone()];
        }
        (0..count).map(|i| self.labels[i * (len - 1) / (count - 1)].clone()).collect()
    }

    /// Evenly spaced tick values from zero to the y ceiling.
    pub fn y_ticks(&self, count: usize) -> Vec<f64> {
        let [bottom, top] = self.y_bounds();
        match count {
            0 => Vec::new(),
            1 => vec![bottom],
            n => (0..n).map(|i| bottom + (top - bottom) * i as f64 / (n - 1) as f64).collect(),
        }
    }

    /// Overlay hook: the crosshair for the active bucket, if any.
    ///
    /// The line spans the plot's full vertical extent.
    pub fn crosshair(&self, active: Option<usize>) -> Option<Crosshair> {
        let index = active.filter(|&i| i < self.len())?;
        let [y_bottom, y_top] = self.y_bounds();
        Some(Crosshair {
            x: index as f64,
            y_bottom,
            y_top,
        })
    }

    /// Tooltip content for the active bucket, if any.
    pub fn tooltip(&self, active: Option<usize>) -> Option<Tooltip> {
        let index = active.filter(|&i| i < self.len())?;
        let rows = self
            .datasets
            .iter()
            .map(|d| TooltipRow {
                label: d.label.clone(),
                color: d.color,
                count: d.counts[index],
            })
            .collect();
        Some(Tooltip {
            title: self.labels[index].clone(),
            rows,
        })
    }
}

/// Smallest value of the 1-2-5 sequence that is at least `max`.
fn nice_ceiling(max: u64) -> u64 {
    if max == 0 {
        return 1;
    }
    let mut magnitude: u64 = 1;
    loop {
        for step in [1, 2, 5] {
            let candidate = magnitude.saturating_mul(step);
            if candidate >= max {
                return candidate;
            }
        }
        magnitude = magnitude.saturating_mul(10);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(name: &str, values: &[(&str, u64)]) -> MetricSeries {
        MetricSeries {
            name: name.to_string(),
            values: values.iter().map(|(v, c)| SummaryEntry::new(*v, *c)).collect(),
        }
    }

    fn sample() -> ChartData {
        let series = vec![
            bucket("10:00", &[("A", 1), ("B", 4)]),
            bucket("11:00", &[("B", 2)]),
            bucket("12:00", &[("A", 2), ("B", 1)]),
        ];
        let summary = vec![SummaryEntry::new("A", 3), SummaryEntry::new("B", 7)];
        ChartData::derive(&series, &summary)
    }

    #[test]
    fn test_derive_aligns_datasets_with_buckets() {
        let chart = sample();

        assert_eq!(chart.labels, vec!["10:00", "11:00", "12:00"]);
        assert_eq!(chart.datasets.len(), 2);
        assert_eq!(chart.datasets[0].label, "A");
        assert_eq!(chart.datasets[0].counts, vec![1, 0, 2]);
        assert_eq!(chart.datasets[1].label, "B");
        assert_eq!(chart.datasets[1].counts, vec![4, 2, 1]);
        assert_eq!(chart.datasets[1].points, vec![(0.0, 4.0), (1.0, 2.0), (2.0, 1.0)]);
        assert_eq!(chart.max_count, 4);
    }

    #[test]
    fn test_colors_wrap_around_palette() {
        let summary: Vec<SummaryEntry> =
            (0..26).map(|i| SummaryEntry::new(format!("v{}", i), 1)).collect();
        let chart = ChartData::derive(&[], &summary);

        assert_eq!(chart.datasets[0].color, 0);
        assert_eq!(chart.datasets[23].color, 23);
        assert_eq!(chart.datasets[24].color, 0);
        assert_eq!(chart.datasets[25].color, 1);
    }

    #[test]
    fn test_bounds() {
        let chart = sample();
        assert_eq!(chart.x_bounds(), [0.0, 2.0]);
        assert_eq!(chart.y_bounds(), [0.0, 5.0]);

        let empty = ChartData::derive(&[], &[]);
        assert_eq!(empty.x_bounds(), [0.0, 1.0]);
        assert_eq!(empty.y_bounds(), [0.0, 1.0]);
    }

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(0), 1);
        assert_eq!(nice_ceiling(1), 1);
        assert_eq!(nice_ceiling(3), 5);
        assert_eq!(nice_ceiling(7), 10);
        assert_eq!(nice_ceiling(10), 10);
        assert_eq!(nice_ceiling(11), 20);
        assert_eq!(nice_ceiling(1234), 2000);
        assert_eq!(nice_ceiling(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_axis_labels() {
        let chart = sample();
        assert_eq!(chart.x_labels(3), vec!["10:00", "11:00", "12:00"]);
        assert_eq!(chart.x_labels(2), vec!["10:00", "12:00"]);
        assert_eq!(chart.y_ticks(3), vec![0.0, 2.5, 5.0]);

        let series: Vec<MetricSeries> = (0..24).map(|h| bucket(&format!("{:02}:00", h), &[])).collect();
        let day = ChartData::derive(&series, &[]);
        assert_eq!(day.x_labels(3), vec!["00:00", "11:00", "23:00"]);
    }

    #[test]
    fn test_crosshair_spans_plot_at_active_point() {
        let chart = sample();

        let crosshair = chart.crosshair(Some(1)).unwrap();
        assert_eq!(crosshair.segment(), [(1.0, 0.0), (1.0, 5.0)]);

        assert!(chart.crosshair(None).is_none());
        assert!(chart.crosshair(Some(3)).is_none());
    }

    #[test]
    fn test_tooltip_lists_counts_at_active_point() {
        let chart = sample();

        let tooltip = chart.tooltip(Some(1)).unwrap();
        assert_eq!(tooltip.title, "11:00");
        let rows: Vec<(&str, u64)> = tooltip.rows.iter().map(|r| (r.label.as_str(), r.count)).collect();
        assert_eq!(rows, vec![("A", 0), ("B", 2)]);

        assert!(chart.tooltip(None).is_none());
    }

    #[test]
    fn test_options_hide_legend() {
        let options = ChartOptions::new(Locale::En);
        assert!(!options.show_legend);
        assert!(options.crosshair);
        assert_eq!(options.y_title, "Evaluations");
    }
}
