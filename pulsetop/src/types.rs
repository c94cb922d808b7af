//! Core data types: metric payloads, samples, and fetch errors.

use serde_json::Value;
use thiserror::Error;

/// Decoded body of one `/api/metrics` response: the JSON object's own
/// fields, key order preserved. The key set is not validated; whatever the
/// endpoint returns passes through.
pub type MetricsPayload = serde_json::Map<String, Value>;

/// One captured poll result: a display timestamp taken at capture time plus
/// the decoded metric fields. The timestamp lives in its own field, so a
/// payload key named `t` stays an ordinary metric value.
#[derive(Debug, Clone)]
pub struct Sample {
    pub t: String,
    pub values: MetricsPayload,
}

impl Sample {
    pub fn new(t: String, values: MetricsPayload) -> Self {
        Self { t, values }
    }

    /// Numeric view of one metric field. Missing or non-numeric values are
    /// `None`, never coerced to zero.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.values.get(key).and_then(Value::as_f64)
    }
}

/// Why a single tick failed. All variants are non-fatal: the tick is logged
/// and discarded, and the next one proceeds on schedule.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("metrics endpoint returned HTTP {status}")]
    Http { status: u16 },
    #[error("metrics body is not a JSON object: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
