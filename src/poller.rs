//! Periodic metrics fetching.
//!
//! A [`Poller`] owns at most one background task on the tokio runtime. The
//! task fetches immediately, then once per interval, and forwards every
//! result to the view through an unbounded channel. Restarting (on a window
//! change) aborts the old task before spawning the new one, and dropping the
//! poller aborts it for good.
//!
//! Every result carries the generation of the task that produced it and a
//! sequence number that increases across restarts, so the receiver can throw
//! away anything that was already in flight when the window changed.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::data::TimeWindow;
use crate::source::{FetchError, FlagTarget, MetricsQuery, MetricsResponse};

/// Shortest accepted poll interval.
pub const MIN_INTERVAL: Duration = Duration::from_millis(100);

/// Result of one fetch, tagged for staleness checks.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Generation of the poll task that issued the request.
    pub generation: u64,
    /// Issue order of the request, unique per poller.
    pub sequence: u64,
    pub window: TimeWindow,
    pub result: Result<MetricsResponse, FetchError>,
}

/// Aborts the wrapped task when dropped.
#[derive(Debug)]
struct PollTask(JoinHandle<()>);

impl Drop for PollTask {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Owner of the repeating fetch task.
#[derive(Debug)]
pub struct Poller {
    runtime: Handle,
    query: Arc<dyn MetricsQuery>,
    target: FlagTarget,
    interval: Duration,
    sender: mpsc::UnboundedSender<FetchOutcome>,
    sequence: Arc<AtomicU64>,
    generation: u64,
    task: Option<PollTask>,
}

impl Poller {
    /// Create an idle poller and the receiving end of its result channel.
    ///
    /// Intervals shorter than [`MIN_INTERVAL`] are raised to it.
    pub fn new(
        runtime: Handle,
        query: Arc<dyn MetricsQuery>,
        target: FlagTarget,
        interval: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<FetchOutcome>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let poller = Self {
            runtime,
            query,
            target,
            interval: interval.max(MIN_INTERVAL),
            sender,
            sequence: Arc::new(AtomicU64::new(0)),
            generation: 0,
            task: None,
        };
        (poller, receiver)
    }

    /// Cancel any running task and start polling `window`.
    ///
    /// The first fetch is issued right away. Returns the new generation.
    pub fn start(&mut self, window: TimeWindow) -> u64 {
        self.stop();
        self.generation += 1;

        let generation = self.generation;
        let query = Arc::clone(&self.query);
        let target = self.target.clone();
        let sender = self.sender.clone();
        let counter = Arc::clone(&self.sequence);
        let interval = self.interval;

        let handle = self.runtime.spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                let sequence = counter.fetch_add(1, Ordering::Relaxed) + 1;
                debug!(generation, sequence, %window, toggle = %target, "fetching metrics");

                let result = query.fetch(&target, window).await;

                let outcome = FetchOutcome {
                    generation,
                    sequence,
                    window,
                    result,
                };
                if sender.send(outcome).is_err() {
                    // View is gone
                    break;
                }
            }
        });

        self.task = Some(PollTask(handle));
        generation
    }

    /// Cancel the running task, if any. In-flight requests are dropped.
    pub fn stop(&mut self) {
        if self.task.take().is_some() {
            debug!(generation = self.generation, "poll task cancelled");
        }
    }

    /// Whether a poll task is currently scheduled.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.0.is_finished())
    }

    /// Generation of the most recently started task.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn target(&self) -> &FlagTarget {
        &self.target
    }

    /// Description of the underlying query, for the status bar.
    pub fn description(&self) -> &str {
        self.query.description()
    }
}
