//! HTTP transport: one GET per tick against the fixed metrics path.

use url::Url;

use crate::source::MetricsSource;
use crate::types::{FetchError, MetricsPayload};

/// Fixed relative path on the metrics origin.
pub const METRICS_PATH: &str = "/api/metrics";

/// Fetches `<base>/api/metrics` with a shared client. No timeout beyond the
/// transport default and no retry; a bad tick is the sampler's problem.
pub struct HttpSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpSource {
    pub fn new(base: &str) -> Result<Self, url::ParseError> {
        let endpoint = Url::parse(base)?.join(METRICS_PATH)?;
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl MetricsSource for HttpSource {
    async fn fetch(&mut self) -> Result<MetricsPayload, FetchError> {
        let resp = self.client.get(self.endpoint.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }
        let body = resp.bytes().await?;
        let payload: MetricsPayload = serde_json::from_slice(&body)?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_fixed_path_onto_base() {
        let src = HttpSource::new("http://localhost:8080").unwrap();
        assert_eq!(src.endpoint().as_str(), "http://localhost:8080/api/metrics");
    }

    #[test]
    fn endpoint_replaces_any_base_path() {
        let src = HttpSource::new("https://metrics.example/ignored").unwrap();
        assert_eq!(
            src.endpoint().as_str(),
            "https://metrics.example/api/metrics"
        );
    }

    #[test]
    fn bad_base_url_is_rejected() {
        assert!(HttpSource::new("not a url").is_err());
    }

    #[test]
    fn non_object_body_is_a_decode_error() {
        let err = serde_json::from_slice::<MetricsPayload>(b"[1,2,3]")
            .map_err(FetchError::from)
            .unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
