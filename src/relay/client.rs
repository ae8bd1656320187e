//! HTTP client for upstream calls with timeout and error mapping.
//!
//! # Responsibilities
//! - Own the pooled outbound client (connection reuse is transparent)
//! - Enforce the upstream deadline on every call
//! - Turn transport failures and non-2xx statuses into `RelayError`
//! - Record one log event and one metric sample per call

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::Value;

use crate::config::{TimeoutConfig, UpstreamsConfig};
use crate::observability::metrics;
use crate::relay::envelope::unwrap_envelope;
use crate::relay::{OutboundRequest, RelayError, UpstreamBases};

const USER_AGENT: &str = concat!("deen-gateway/", env!("CARGO_PKG_VERSION"));

/// Stateless relay shared by all handlers.
#[derive(Debug, Clone)]
pub struct UpstreamRelay {
    client: reqwest::Client,
    bases: Arc<UpstreamBases>,
    timeout: Duration,
}

impl UpstreamRelay {
    /// Create a relay from validated configuration.
    pub fn new(upstreams: &UpstreamsConfig, timeouts: &TimeoutConfig) -> Result<Self, RelayError> {
        Self::build(
            UpstreamBases::from_config(upstreams)?,
            Duration::from_secs(timeouts.upstream_secs),
            Duration::from_secs(timeouts.connect_secs),
            upstreams.system_proxy,
        )
    }

    fn build(
        bases: UpstreamBases,
        timeout: Duration,
        connect_timeout: Duration,
        system_proxy: bool,
    ) -> Result<Self, RelayError> {
        let mut builder = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .user_agent(USER_AGENT);
        if !system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            client: builder.build()?,
            bases: Arc::new(bases),
            timeout,
        })
    }

    /// Upstream deadline applied to every call.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Perform the call described by `request` and unwrap the envelope.
    pub async fn relay(&self, request: OutboundRequest) -> Result<Value, RelayError> {
        let start = Instant::now();
        let upstream = request.upstream();
        let url = request.url(self.bases.get(upstream))?;

        let result = self.fetch(url.clone(), &request).await;

        match &result {
            Ok(_) => {
                tracing::debug!(
                    upstream = upstream.name(),
                    url = %url,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Upstream call succeeded"
                );
                metrics::record_upstream_call(upstream.name(), "ok", start);
            }
            Err(e) => {
                tracing::warn!(
                    upstream = upstream.name(),
                    url = %url,
                    outcome = e.outcome(),
                    error = %e,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Upstream call failed"
                );
                metrics::record_upstream_call(upstream.name(), e.outcome(), start);
            }
        }

        result
    }

    async fn fetch(&self, url: url::Url, request: &OutboundRequest) -> Result<Value, RelayError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body: Value = response.json().await?;
        unwrap_envelope(request.upstream().envelope(), body, request.empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::Upstream;
    use httpmock::prelude::*;
    use serde_json::json;

    fn relay_for(server: &MockServer, timeout: Duration) -> UpstreamRelay {
        let base = server.base_url();
        let upstreams = UpstreamsConfig {
            quran_base_url: format!("{}/v1", base),
            hadith_base_url: base.clone(),
            aladhan_base_url: format!("{}/v1", base),
            system_proxy: false,
        };
        let bases = UpstreamBases::from_config(&upstreams).unwrap();
        UpstreamRelay::build(bases, timeout, Duration::from_secs(1), false).unwrap()
    }

    #[tokio::test]
    async fn test_status_checked_success() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/surah/1");
                then.status(200)
                    .json_body(json!({"code": 200, "status": "OK", "data": {"number": 1}}));
            })
            .await;

        let relay = relay_for(&server, Duration::from_secs(5));
        let data = relay
            .relay(OutboundRequest::new(Upstream::Quran).segment("surah").segment(1))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(data, json!({"number": 1}));
    }

    #[tokio::test]
    async fn test_status_rejection() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/surah");
                then.status(200)
                    .json_body(json!({"code": 200, "status": "Rate limited", "data": "slow down"}));
            })
            .await;

        let relay = relay_for(&server, Duration::from_secs(5));
        let err = relay
            .relay(OutboundRequest::new(Upstream::Quran).segment("surah"))
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::Rejected));
    }

    #[tokio::test]
    async fn test_query_params_forwarded() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/books/muslim")
                    .query_param("range", "10-20");
                then.status(200).json_body(json!({"data": {"name": "Muslim"}}));
            })
            .await;

        let relay = relay_for(&server, Duration::from_secs(5));
        let data = relay
            .relay(
                OutboundRequest::new(Upstream::Hadith)
                    .segment("books")
                    .segment("muslim")
                    .query("range", "10-20"),
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(data["name"], "Muslim");
    }

    #[tokio::test]
    async fn test_non_2xx_is_transport_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/gToH");
                then.status(404).json_body(json!({"code": 404, "data": "Not found"}));
            })
            .await;

        let relay = relay_for(&server, Duration::from_secs(5));
        let err = relay
            .relay(OutboundRequest::new(Upstream::Aladhan).segment("gToH"))
            .await
            .unwrap_err();

        match err {
            RelayError::Transport { message, timed_out } => {
                assert!(!timed_out);
                assert!(message.contains("404"), "unexpected message: {}", message);
            }
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_transport_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/books");
                then.status(200).body("<html>maintenance</html>");
            })
            .await;

        let relay = relay_for(&server, Duration::from_secs(5));
        let err = relay
            .relay(OutboundRequest::new(Upstream::Hadith).segment("books").empty_list())
            .await
            .unwrap_err();

        assert_eq!(err.outcome(), "transport");
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn test_timeout() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/surah");
                then.status(200)
                    .delay(Duration::from_secs(2))
                    .json_body(json!({"status": "OK", "data": []}));
            })
            .await;

        let relay = relay_for(&server, Duration::from_millis(300));
        let start = Instant::now();
        let err = relay
            .relay(OutboundRequest::new(Upstream::Quran).segment("surah"))
            .await
            .unwrap_err();

        assert!(start.elapsed() < Duration::from_secs(2));
        assert_eq!(err.outcome(), "timeout");
        assert!(!err.to_string().is_empty());
    }
}
