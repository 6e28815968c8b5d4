//! Application state and interaction logic.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::browser::UrlOpener;
use crate::data::{ChartData, ChartOptions, MetricsData, TimeWindow};
use crate::i18n::{Locale, MessageId};
use crate::poller::{FetchOutcome, Poller};
use crate::source::FlagTarget;
use crate::ui::Theme;

/// How long a status message stays in the status bar.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Which branch of the panel is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    /// No successful response yet.
    Loading,
    /// The window has no evaluations.
    Empty,
    /// Variation table and chart.
    Populated,
}

/// A temporary notification shown in the status bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    pub created: Instant,
}

/// Everything the view needs besides the poller.
#[derive(Debug)]
pub struct AppOptions {
    pub window: TimeWindow,
    pub locale: Locale,
    pub theme: Theme,
    pub docs_url: String,
    pub browser: Box<dyn UrlOpener>,
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    /// Selected evaluation window.
    pub window: TimeWindow,
    /// Highlighted option while the window dropdown is open.
    pub selector: Option<usize>,

    // Applied data
    pub data: Option<MetricsData>,
    pub chart: Option<ChartData>,
    pub chart_options: ChartOptions,

    /// Bucket under the crosshair.
    pub active_point: Option<usize>,
    /// Plot area of the last rendered chart, for mouse hit testing.
    pub chart_area: Option<Rect>,

    // UI
    pub locale: Locale,
    pub theme: Theme,
    pub docs_url: String,
    pub status_message: Option<StatusMessage>,

    poller: Poller,
    updates: mpsc::UnboundedReceiver<FetchOutcome>,
    browser: Box<dyn UrlOpener>,
    last_sequence: u64,
}

impl App {
    /// Create the view and start polling the initial window.
    pub fn new(
        poller: Poller,
        updates: mpsc::UnboundedReceiver<FetchOutcome>,
        options: AppOptions,
    ) -> Self {
        let mut app = Self {
            running: true,
            show_help: false,
            window: options.window,
            selector: None,
            data: None,
            chart: None,
            chart_options: ChartOptions::new(options.locale),
            active_point: None,
            chart_area: None,
            locale: options.locale,
            theme: options.theme,
            docs_url: options.docs_url,
            status_message: None,
            poller,
            updates,
            browser: options.browser,
            last_sequence: 0,
        };
        app.poller.start(app.window);
        app
    }

    /// Returns a description of the metrics source.
    pub fn source_description(&self) -> &str {
        self.poller.description()
    }

    pub fn target(&self) -> &FlagTarget {
        self.poller.target()
    }

    pub fn poll_interval(&self) -> Duration {
        self.poller.interval()
    }

    /// Generation of the current poll task.
    pub fn poll_generation(&self) -> u64 {
        self.poller.generation()
    }

    pub fn is_polling(&self) -> bool {
        self.poller.is_running()
    }

    /// Which branch of the panel to render.
    pub fn panel_state(&self) -> PanelState {
        match &self.data {
            None => PanelState::Loading,
            Some(data) if data.is_empty() => PanelState::Empty,
            Some(_) => PanelState::Populated,
        }
    }

    /// Apply every poll result received since the last call.
    ///
    /// Returns true if the displayed data changed.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.updates.try_recv() {
            changed |= self.apply_outcome(outcome);
        }
        changed
    }

    /// Apply one poll result.
    ///
    /// Results from an earlier poll task, or older than the last applied
    /// one, are dropped. Failures leave the current data in place and raise
    /// an error notification. Returns true if the displayed data changed.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> bool {
        if outcome.generation != self.poller.generation() {
            debug!(
                generation = outcome.generation,
                current = self.poller.generation(),
                "discarding result of cancelled poll"
            );
            return false;
        }

        let response = match outcome.result {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, window = %outcome.window, "metrics fetch failed");
                self.report_failure(None);
                return false;
            }
        };

        let content = match response.data {
            Some(content) if response.success => content,
            _ => {
                warn!(
                    success = response.success,
                    message = response.message.as_deref().unwrap_or_default(),
                    window = %outcome.window,
                    "metrics query unsuccessful"
                );
                self.report_failure(response.message);
                return false;
            }
        };

        if outcome.sequence <= self.last_sequence {
            debug!(
                sequence = outcome.sequence,
                last = self.last_sequence,
                "discarding out-of-order result"
            );
            return false;
        }
        self.last_sequence = outcome.sequence;

        let data = MetricsData::from_content(content);
        self.chart = if data.is_empty() {
            None
        } else {
            Some(ChartData::derive(&data.series, &data.summary))
        };
        self.data = Some(data);
        self.clamp_active_point();
        true
    }

    fn report_failure(&mut self, message: Option<String>) {
        let text = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| self.locale.text(MessageId::MetricsError).to_string());
        self.set_error_message(text);
    }

    /// Switch to `window` and restart polling immediately.
    ///
    /// Selecting the current window does nothing. Returns true on a change.
    pub fn select_window(&mut self, window: TimeWindow) -> bool {
        if window == self.window {
            return false;
        }
        info!(from = %self.window, to = %window, "evaluation window changed");
        self.window = window;
        self.active_point = None;
        self.poller.start(window);
        true
    }

    /// Fetch now and restart the poll cadence.
    pub fn refresh(&mut self) {
        self.poller.start(self.window);
    }

    /// Open the window dropdown with the current window highlighted.
    pub fn open_selector(&mut self) {
        self.selector = Some(self.window.index());
    }

    pub fn close_selector(&mut self) {
        self.selector = None;
    }

    /// Move the dropdown highlight down.
    pub fn selector_next(&mut self) {
        if let Some(index) = self.selector.as_mut() {
            *index = (*index + 1).min(TimeWindow::ALL.len() - 1);
        }
    }

    /// Move the dropdown highlight up.
    pub fn selector_prev(&mut self) {
        if let Some(index) = self.selector.as_mut() {
            *index = index.saturating_sub(1);
        }
    }

    /// Select the highlighted option and close the dropdown.
    pub fn confirm_selector(&mut self) {
        if let Some(index) = self.selector.take() {
            if let Some(window) = TimeWindow::ALL.get(index) {
                self.select_window(*window);
            }
        }
    }

    /// Move the crosshair by `delta` buckets, starting at the latest bucket.
    pub fn move_active_point(&mut self, delta: isize) {
        let Some(len) = self.chart.as_ref().map(ChartData::len).filter(|&n| n > 0) else {
            return;
        };
        let next = match self.active_point {
            None => len - 1,
            Some(index) => index.saturating_add_signed(delta).min(len - 1),
        };
        self.active_point = Some(next);
    }

    /// Put the crosshair on the oldest bucket.
    pub fn first_point(&mut self) {
        if self.chart.as_ref().is_some_and(|chart| chart.len() > 0) {
            self.active_point = Some(0);
        }
    }

    /// Put the crosshair on the latest bucket.
    pub fn last_point(&mut self) {
        if let Some(len) = self.chart.as_ref().map(ChartData::len).filter(|&n| n > 0) {
            self.active_point = Some(len - 1);
        }
    }

    pub fn clear_active_point(&mut self) {
        self.active_point = None;
    }

    /// Put the crosshair on the bucket nearest to a terminal column.
    ///
    /// Columns outside the last rendered plot area are ignored.
    pub fn hover_column(&mut self, column: u16, row: u16) {
        let (Some(area), Some(chart)) = (self.chart_area, self.chart.as_ref()) else {
            return;
        };
        let len = chart.len();
        if len == 0
            || column < area.x
            || column >= area.right()
            || row < area.y
            || row >= area.bottom()
        {
            return;
        }
        if len == 1 || area.width <= 1 {
            self.active_point = Some(0);
            return;
        }
        let offset = f64::from(column - area.x) / f64::from(area.width - 1);
        let index = (offset * (len - 1) as f64).round() as usize;
        self.active_point = Some(index.min(len - 1));
    }

    fn clamp_active_point(&mut self) {
        let len = self.chart.as_ref().map_or(0, ChartData::len);
        self.active_point = match self.active_point {
            Some(_) if len == 0 => None,
            Some(index) => Some(index.min(len - 1)),
            None => None,
        };
    }

    /// Open the SDK documentation from the empty state.
    pub fn open_docs(&mut self) {
        if self.panel_state() != PanelState::Empty {
            return;
        }
        match self.browser.open(&self.docs_url) {
            Ok(()) => {
                let text = format!("{} {}", self.locale.text(MessageId::LinkOpened), self.docs_url);
                self.set_status_message(text);
            }
            Err(e) => {
                warn!(error = %e, "failed to open documentation link");
                let text =
                    format!("{} {}", self.locale.text(MessageId::LinkOpenFailed), self.docs_url);
                self.set_error_message(text);
            }
        }
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, text: String) {
        self.status_message = Some(StatusMessage {
            text,
            is_error: false,
            created: Instant::now(),
        });
    }

    /// Set a temporary error notification.
    pub fn set_error_message(&mut self, text: String) {
        self.status_message = Some(StatusMessage {
            text,
            is_error: true,
            created: Instant::now(),
        });
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&StatusMessage> {
        self.status_message.as_ref().filter(|m| m.created.elapsed() < STATUS_MESSAGE_TTL)
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Stop polling and signal the application to quit.
    pub fn quit(&mut self) {
        self.poller.stop();
        self.running = false;
    }

    /// Export the displayed metrics to a file.
    pub fn export_state(&self, path: &Path) -> Result<()> {
        let Some(ref data) = self.data else {
            anyhow::bail!("No data to export");
        };

        let export = data.to_export(self.target(), self.window);
        let json = serde_json::to_string_pretty(&export)?;
        std::fs::write(path, json)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{
        FetchError, MetricContent, MetricSeries, MetricsQuery, MetricsResponse, SummaryEntry,
    };
    use async_trait::async_trait;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tokio::runtime::Handle;

    #[derive(Debug)]
    struct IdleQuery;

    #[async_trait]
    impl MetricsQuery for IdleQuery {
        async fn fetch(
            &self,
            _target: &FlagTarget,
            _window: TimeWindow,
        ) -> Result<MetricsResponse, FetchError> {
            Ok(MetricsResponse::failure(None))
        }

        fn description(&self) -> &str {
            "idle"
        }
    }

    #[derive(Debug, Clone, Default)]
    struct RecordingBrowser {
        opened: Arc<Mutex<Vec<String>>>,
    }

    impl UrlOpener for RecordingBrowser {
        fn open(&self, url: &str) -> Result<()> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    fn app_with_browser(browser: RecordingBrowser) -> App {
        let (poller, updates) = Poller::new(
            Handle::current(),
            Arc::new(IdleQuery),
            FlagTarget::new("shop", "online", "new_checkout"),
            Duration::from_secs(5),
        );
        App::new(
            poller,
            updates,
            AppOptions {
                window: TimeWindow::OneDay,
                locale: Locale::En,
                theme: Theme::dark(),
                docs_url: "https://docs.example.com/sdk".to_string(),
                browser: Box::new(browser),
            },
        )
    }

    fn app() -> App {
        app_with_browser(RecordingBrowser::default())
    }

    fn content(summary: &[(&str, u64)]) -> MetricContent {
        MetricContent {
            metrics: vec![
                MetricSeries {
                    name: "10:00".to_string(),
                    values: summary.iter().map(|(v, c)| SummaryEntry::new(*v, *c)).collect(),
                },
                MetricSeries {
                    name: "11:00".to_string(),
                    values: Vec::new(),
                },
            ],
            summary: summary.iter().map(|(v, c)| SummaryEntry::new(*v, *c)).collect(),
        }
    }

    fn outcome(
        app: &App,
        sequence: u64,
        result: Result<MetricsResponse, FetchError>,
    ) -> FetchOutcome {
        FetchOutcome {
            generation: app.poll_generation(),
            sequence,
            window: app.window,
            result,
        }
    }

    #[tokio::test]
    async fn test_new_starts_polling() {
        let app = app();
        assert_eq!(app.poll_generation(), 1);
        assert!(app.is_polling());
        assert_eq!(app.panel_state(), PanelState::Loading);
        assert!(app.chart.is_none());
    }

    #[tokio::test]
    async fn test_success_populates_table_and_chart() {
        let mut app = app();
        let ok = outcome(&app, 1, Ok(MetricsResponse::ok(content(&[("A", 3), ("B", 7)]))));

        assert!(app.apply_outcome(ok));

        assert_eq!(app.panel_state(), PanelState::Populated);
        let data = app.data.as_ref().unwrap();
        assert_eq!(data.total, 10);
        assert_eq!(data.summary[0].value, "A");
        assert_eq!(data.summary[1].value, "B");
        let chart = app.chart.as_ref().unwrap();
        assert_eq!(chart.datasets.len(), 2);
        assert_eq!(chart.labels, vec!["10:00", "11:00"]);
    }

    #[tokio::test]
    async fn test_empty_summary_shows_empty_state_without_chart() {
        let mut app = app();
        let ok = outcome(&app, 1, Ok(MetricsResponse::ok(MetricContent::default())));

        assert!(app.apply_outcome(ok));

        assert_eq!(app.panel_state(), PanelState::Empty);
        assert!(app.chart.is_none());
        assert!(app.get_status_message().is_none());
    }

    #[tokio::test]
    async fn test_failure_keeps_prior_data_and_shows_server_message() {
        let mut app = app();
        app.apply_outcome(outcome(&app, 1, Ok(MetricsResponse::ok(content(&[("A", 3)])))));

        let failed = outcome(
            &app,
            2,
            Ok(MetricsResponse::failure(Some("Toggle not found".to_string()))),
        );
        assert!(!app.apply_outcome(failed));

        assert_eq!(app.data.as_ref().unwrap().total, 3);
        assert!(app.chart.is_some());
        let message = app.get_status_message().unwrap();
        assert!(message.is_error);
        assert_eq!(message.text, "Toggle not found");
    }

    #[tokio::test]
    async fn test_failure_without_message_uses_localized_fallback() {
        let mut app = app();
        app.locale = Locale::Zh;

        app.apply_outcome(outcome(&app, 1, Err(FetchError::Timeout)));
        assert_eq!(app.get_status_message().unwrap().text, "获取评估数据失败");
        assert_eq!(app.panel_state(), PanelState::Loading);

        // success without data counts as a failure
        let no_data = MetricsResponse {
            success: true,
            data: None,
            message: None,
        };
        app.status_message = None;
        app.apply_outcome(outcome(&app, 2, Ok(no_data)));
        assert!(app.get_status_message().unwrap().is_error);
        assert!(app.data.is_none());
    }

    #[tokio::test]
    async fn test_results_from_cancelled_poll_are_discarded() {
        let mut app = app();
        let stale = outcome(&app, 1, Ok(MetricsResponse::ok(content(&[("old", 1)]))));

        assert!(app.select_window(TimeWindow::OneHour));
        assert_eq!(app.poll_generation(), 2);

        assert!(!app.apply_outcome(stale));
        assert!(app.data.is_none());
    }

    #[tokio::test]
    async fn test_out_of_order_results_are_discarded() {
        let mut app = app();
        let older = outcome(&app, 1, Ok(MetricsResponse::ok(content(&[("A", 1)]))));
        let newer = outcome(&app, 2, Ok(MetricsResponse::ok(content(&[("A", 2)]))));

        assert!(app.apply_outcome(newer));
        assert!(!app.apply_outcome(older));
        assert_eq!(app.data.as_ref().unwrap().total, 2);
    }

    #[tokio::test]
    async fn test_selecting_same_window_does_not_restart() {
        let mut app = app();
        assert!(!app.select_window(TimeWindow::OneDay));
        assert_eq!(app.poll_generation(), 1);

        assert!(app.select_window(TimeWindow::ThirtyDays));
        assert_eq!(app.window, TimeWindow::ThirtyDays);
        assert_eq!(app.poll_generation(), 2);
    }

    #[tokio::test]
    async fn test_selector_navigation() {
        let mut app = app();
        app.open_selector();
        assert_eq!(app.selector, Some(TimeWindow::OneDay.index()));

        app.selector_next();
        app.confirm_selector();

        assert!(app.selector.is_none());
        assert_eq!(app.window, TimeWindow::ThreeDays);
        assert_eq!(app.poll_generation(), 2);

        app.open_selector();
        for _ in 0..20 {
            app.selector_prev();
        }
        assert_eq!(app.selector, Some(0));
        app.close_selector();
        assert_eq!(app.window, TimeWindow::ThreeDays);
    }

    #[tokio::test]
    async fn test_active_point_navigation() {
        let mut app = app();
        app.move_active_point(-1);
        assert!(app.active_point.is_none());

        app.apply_outcome(outcome(&app, 1, Ok(MetricsResponse::ok(content(&[("A", 3)])))));

        app.move_active_point(-1);
        assert_eq!(app.active_point, Some(1));
        app.move_active_point(-1);
        app.move_active_point(-1);
        assert_eq!(app.active_point, Some(0));
        app.move_active_point(5);
        assert_eq!(app.active_point, Some(1));

        app.clear_active_point();
        assert!(app.active_point.is_none());
    }

    #[tokio::test]
    async fn test_hover_maps_column_to_bucket() {
        let mut app = app();
        app.apply_outcome(outcome(&app, 1, Ok(MetricsResponse::ok(content(&[("A", 3)])))));
        app.chart_area = Some(Rect::new(10, 2, 21, 10));

        app.hover_column(10, 5);
        assert_eq!(app.active_point, Some(0));
        app.hover_column(30, 5);
        assert_eq!(app.active_point, Some(1));

        app.hover_column(5, 5);
        assert_eq!(app.active_point, Some(1));
    }

    #[tokio::test]
    async fn test_open_docs_only_in_empty_state() {
        let browser = RecordingBrowser::default();
        let mut app = app_with_browser(browser.clone());

        app.open_docs();
        assert!(browser.opened.lock().unwrap().is_empty());

        app.apply_outcome(outcome(&app, 1, Ok(MetricsResponse::ok(MetricContent::default()))));
        app.open_docs();
        assert_eq!(*browser.opened.lock().unwrap(), vec!["https://docs.example.com/sdk"]);
        assert_eq!(
            app.get_status_message().unwrap().text,
            "Opened https://docs.example.com/sdk"
        );
    }

    /// Answers after one second with a single variation named after the window.
    #[derive(Debug)]
    struct SlowQuery;

    #[async_trait]
    impl MetricsQuery for SlowQuery {
        async fn fetch(
            &self,
            _target: &FlagTarget,
            window: TimeWindow,
        ) -> Result<MetricsResponse, FetchError> {
            tokio::time::sleep(Duration::from_secs(1)).await;
            Ok(MetricsResponse::ok(content(&[(window.value(), 1)])))
        }

        fn description(&self) -> &str {
            "slow"
        }
    }

    #[derive(Debug)]
    struct TimeoutQuery;

    #[async_trait]
    impl MetricsQuery for TimeoutQuery {
        async fn fetch(
            &self,
            _target: &FlagTarget,
            _window: TimeWindow,
        ) -> Result<MetricsResponse, FetchError> {
            Err(FetchError::Timeout)
        }

        fn description(&self) -> &str {
            "timeout"
        }
    }

    fn app_with_query(query: Arc<dyn MetricsQuery>) -> App {
        let (poller, updates) = Poller::new(
            Handle::current(),
            query,
            FlagTarget::new("shop", "online", "new_checkout"),
            Duration::from_secs(5),
        );
        App::new(
            poller,
            updates,
            AppOptions {
                window: TimeWindow::OneDay,
                locale: Locale::En,
                theme: Theme::dark(),
                docs_url: "https://docs.example.com/sdk".to_string(),
                browser: Box::new(RecordingBrowser::default()),
            },
        )
    }

    fn shown_variation(app: &App) -> Option<&str> {
        app.data.as_ref().and_then(|d| d.summary.first()).map(|e| e.value.as_str())
    }

    /// Collects formatted log output of the current thread.
    #[derive(Clone, Default)]
    struct LogCapture(Arc<Mutex<Vec<u8>>>);

    impl LogCapture {
        fn install(&self) -> tracing::subscriber::DefaultGuard {
            let writer = self.clone();
            let subscriber = tracing_subscriber::fmt()
                .with_ansi(false)
                .with_max_level(tracing::Level::DEBUG)
                .with_writer(move || writer.clone())
                .finish();
            tracing::subscriber::set_default(subscriber)
        }

        fn warnings(&self) -> Vec<String> {
            String::from_utf8_lossy(&self.0.lock().unwrap())
                .lines()
                .filter(|line| line.contains("WARN"))
                .map(str::to_string)
                .collect()
        }
    }

    impl io::Write for LogCapture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_pump_applies_polled_results_across_window_change() {
        let mut app = app_with_query(Arc::new(SlowQuery));
        assert!(!app.pump());

        // First fetch is issued at mount and answers after 1s
        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert!(app.pump());
        assert_eq!(shown_variation(&app), Some("24"));

        // Second tick at 5s; switch windows while it is in flight
        tokio::time::sleep(Duration::from_millis(4400)).await;
        assert!(app.select_window(TimeWindow::OneHour));
        assert_eq!(shown_variation(&app), Some("24"));

        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert!(app.pump());
        assert_eq!(shown_variation(&app), Some("1"));
        assert_eq!(app.panel_state(), PanelState::Populated);

        app.quit();
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert!(!app.pump());
        assert_eq!(shown_variation(&app), Some("1"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_transport_failure_is_logged_once() {
        let logs = LogCapture::default();
        let _guard = logs.install();

        let mut app = app_with_query(Arc::new(TimeoutQuery));
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!app.pump());

        assert!(app.get_status_message().unwrap().is_error);
        let warnings = logs.warnings();
        assert_eq!(warnings.len(), 1, "{:?}", warnings);
        assert!(warnings[0].contains("metrics fetch failed"));
    }

    #[tokio::test]
    async fn test_unsuccessful_response_is_logged() {
        let logs = LogCapture::default();
        let _guard = logs.install();

        let mut app = app();
        let rejected = outcome(
            &app,
            1,
            Ok(MetricsResponse::failure(Some("Toggle not found".to_string()))),
        );
        app.apply_outcome(rejected);

        let warnings = logs.warnings();
        assert_eq!(warnings.len(), 1, "{:?}", warnings);
        assert!(warnings[0].contains("Toggle not found"));
    }

    #[tokio::test]
    async fn test_quit_stops_polling() {
        let mut app = app();
        app.quit();
        assert!(!app.running);
        assert!(!app.is_polling());
    }

    #[tokio::test]
    async fn test_export_state() {
        let mut app = app();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");

        assert!(app.export_state(&path).is_err());

        app.apply_outcome(outcome(&app, 1, Ok(MetricsResponse::ok(content(&[("A", 3), ("B", 7)])))));
        app.export_state(&path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["total"], 10);
        assert_eq!(written["lastHours"], "24");
    }
}
