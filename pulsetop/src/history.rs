//! Bounded sample window and the derivations the UI draws from.

use std::collections::VecDeque;

use crate::types::Sample;

/// How many samples the dashboard retains. At a 10 s cadence this is five
/// minutes of history.
pub const WINDOW_CAP: usize = 30;

/// Time-ordered FIFO window of recent samples. Insertion order is time
/// order; pushing at capacity drops the oldest entry first.
#[derive(Debug)]
pub struct SampleWindow {
    samples: VecDeque<Sample>,
    cap: usize,
}

impl Default for SampleWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleWindow {
    pub fn new() -> Self {
        Self::with_capacity(WINDOW_CAP)
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(cap),
            cap,
        }
    }

    pub fn push(&mut self, s: Sample) {
        if self.samples.len() == self.cap {
            self.samples.pop_front();
        }
        self.samples.push_back(s);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Most recent sample, if any. Callers degrade to a placeholder on `None`.
    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    /// Timestamp labels, one per sample, window order.
    pub fn labels(&self) -> Vec<&str> {
        self.samples.iter().map(|s| s.t.as_str()).collect()
    }

    /// Numeric series for `key`, window order. Always the same length as the
    /// window; samples missing the key (or holding a non-number) contribute
    /// `None` at their position.
    pub fn series(&self, key: &str) -> Vec<Option<f64>> {
        self.samples.iter().map(|s| s.number(key)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }
}
