//! Polling state: owns the sample window and the fetch cadence.

use std::time::{Duration, Instant};

use crate::history::SampleWindow;
use crate::source::{Clock, MetricsSource};
use crate::types::{FetchError, Sample};

/// Fixed poll cadence.
pub const POLL_INTERVAL: Duration = Duration::from_millis(10_000);

/// Owns the rolling window and decides when the next fetch is due. The
/// source and clock are injected; the event loop awaits `poll` inline, so at
/// most one fetch is in flight and samples land in issue order.
pub struct Sampler<S, C> {
    window: SampleWindow,
    source: S,
    clock: C,
    interval: Duration,
    last_tick: Option<Instant>,
}

impl<S: MetricsSource, C: Clock> Sampler<S, C> {
    pub fn new(source: S, clock: C) -> Self {
        Self::with_interval(source, clock, POLL_INTERVAL)
    }

    pub fn with_interval(source: S, clock: C, interval: Duration) -> Self {
        Self {
            window: SampleWindow::new(),
            source,
            clock,
            interval,
            last_tick: None,
        }
    }

    /// True before the first fetch, then whenever the interval has elapsed
    /// since the last tick *started*. Failed ticks do not alter the cadence.
    pub fn tick_due(&self, now: Instant) -> bool {
        match self.last_tick {
            None => true,
            Some(t) => now.duration_since(t) >= self.interval,
        }
    }

    /// One tick: fetch, decode, stamp, append-and-trim. On any failure the
    /// window is left untouched and the error is returned for the caller to
    /// log; the next tick proceeds independently.
    pub async fn poll(&mut self, now: Instant) -> Result<(), FetchError> {
        self.last_tick = Some(now);
        let payload = self.source.fetch().await?;
        let t = self.clock.time_label();
        self.window.push(Sample::new(t, payload));
        Ok(())
    }

    pub fn window(&self) -> &SampleWindow {
        &self.window
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
