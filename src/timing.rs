//! Collects the runtime of every sort run, keyed by input length and outcome.

use std::collections::BTreeMap;
use std::hint::black_box;
use std::time::{Duration, Instant};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    Failure,
}

#[derive(Debug, Default)]
pub struct Performance {
    size: usize,
    started: Option<Instant>,
    runtime: Duration,
    successes: BTreeMap<usize, Vec<Duration>>,
    failures: BTreeMap<usize, Vec<Duration>>,
}

impl Performance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input length the next recorded runtime is filed under.
    pub fn set_size(&mut self, size: usize) -> &mut Self {
        self.size = size;
        self
    }

    pub fn start(&mut self) -> &mut Self {
        self.started = Some(Instant::now());
        self
    }

    /// Stops the clock started by [`start`](Self::start) and returns the elapsed time. Stopping
    /// without a running clock yields a zero runtime.
    pub fn stop(&mut self) -> Duration {
        self.runtime = self
            .started
            .take()
            .map(|started| started.elapsed())
            .unwrap_or_default();

        self.runtime
    }

    /// Files the last measured runtime under the current size.
    pub fn record(&mut self, status: RunStatus) {
        let table = match status {
            RunStatus::Success => &mut self.successes,
            RunStatus::Failure => &mut self.failures,
        };

        table.entry(self.size).or_default().push(self.runtime);
    }

    /// Runs `test_fn` between [`start`](Self::start) and [`stop`](Self::stop).
    #[inline(never)]
    pub fn measure<R>(&mut self, size: usize, test_fn: impl FnOnce() -> R) -> R {
        self.set_size(size).start();
        let result = black_box(test_fn());
        self.stop();

        result
    }

    /// Runtime of the last stopped measurement.
    pub fn runtime(&self) -> Duration {
        self.runtime
    }

    pub fn runtime_micros(&self) -> u128 {
        self.runtime.as_micros()
    }

    pub fn successes(&self) -> &BTreeMap<usize, Vec<Duration>> {
        &self.successes
    }

    pub fn failures(&self) -> &BTreeMap<usize, Vec<Duration>> {
        &self.failures
    }

    pub fn num_successes(&self) -> usize {
        self.successes.values().map(Vec::len).sum()
    }

    pub fn num_failures(&self) -> usize {
        self.failures.values().map(Vec::len).sum()
    }
}
