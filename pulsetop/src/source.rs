//! Metric sources: the fetch trait the sampler polls, the wall clock it
//! stamps samples with, and the non-network sources (demo + scripted).

use std::collections::VecDeque;
use std::future::Future;

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde_json::Value;

use crate::sampler::POLL_INTERVAL;
use crate::types::{FetchError, MetricsPayload};

/// One fetch per tick. Implementations decide where the payload comes from
/// (HTTP endpoint, synthetic generator, scripted replies).
pub trait MetricsSource {
    fn fetch(&mut self) -> impl Future<Output = Result<MetricsPayload, FetchError>>;
}

/// Produces the display timestamp stored on each sample. Injected so tests
/// can pin labels.
pub trait Clock {
    fn time_label(&self) -> String;
}

/// Local time-of-day, as a dashboard reads it.
pub struct SystemClock;

impl Clock for SystemClock {
    fn time_label(&self) -> String {
        chrono::Local::now().format("%H:%M:%S").to_string()
    }
}

/// Synthetic metrics for `--demo`: jittered cpu/latency/request-rate plus a
/// counter that advances by the poll interval, no network involved.
pub struct DemoSource {
    counter: i64,
    rng: StdRng,
}

impl DemoSource {
    pub fn new() -> Self {
        Self {
            counter: 0,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            counter: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    // Irwin-Hall(3) noise around `mean`
    fn jitter(&mut self, mean: f64, spread: f64) -> f64 {
        let n: f64 =
            self.rng.random::<f64>() + self.rng.random::<f64>() + self.rng.random::<f64>() - 1.5;
        mean + spread * n
    }
}

impl Default for DemoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSource for DemoSource {
    async fn fetch(&mut self) -> Result<MetricsPayload, FetchError> {
        self.counter += POLL_INTERVAL.as_secs() as i64;
        let cpu = self.jitter(42.0, 10.0).clamp(0.0, 100.0);
        let latency_ms = self.jitter(120.0, 30.0).max(1.0);
        let request_rate = self.jitter(75.0, 15.0).max(0.0);

        let mut m = MetricsPayload::new();
        m.insert("cpu".into(), round2(cpu));
        m.insert("latency_ms".into(), round2(latency_ms));
        m.insert("request_rate".into(), round2(request_rate));
        m.insert("counter".into(), Value::from(self.counter));
        Ok(m)
    }
}

// Two decimals, collapsing whole numbers to JSON integers
fn round2(x: f64) -> Value {
    let r = (x * 100.0).round() / 100.0;
    if r.fract() == 0.0 {
        Value::from(r as i64)
    } else {
        serde_json::Number::from_f64(r).map(Value::Number).unwrap_or(Value::Null)
    }
}

/// Scripted source: replays a fixed sequence of results, one per fetch.
/// Used by tests to drive the sampler without a network; an exhausted script
/// answers like a dead endpoint.
#[derive(Default)]
pub struct ScriptedSource {
    script: VecDeque<Result<MetricsPayload, FetchError>>,
}

impl ScriptedSource {
    pub fn new(script: Vec<Result<MetricsPayload, FetchError>>) -> Self {
        Self {
            script: script.into(),
        }
    }

    pub fn push(&mut self, entry: Result<MetricsPayload, FetchError>) {
        self.script.push_back(entry);
    }
}

impl MetricsSource for ScriptedSource {
    async fn fetch(&mut self) -> Result<MetricsPayload, FetchError> {
        self.script
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Http { status: 503 }))
    }
}
