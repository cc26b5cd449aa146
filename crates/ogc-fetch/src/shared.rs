//! Deduplication of concurrent identical requests.
//!
//! While a request for a (URL, method) pair is in flight, further callers
//! join it instead of hitting the network again. The entry is dropped as soon
//! as the request settles, so later calls always fetch fresh data.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use crate::config::FetchConfig;
use crate::transport::{FetchError, FetchMethod, FetchResponse, HttpTransport};

type FetchKey = (String, FetchMethod);
type PendingFetch = Shared<BoxFuture<'static, Result<FetchResponse, FetchError>>>;

/// Shared-fetch cache in front of an [`HttpTransport`].
pub struct SharedFetch {
    transport: Arc<dyn HttpTransport>,
    /// (URL, method) -> in-flight request
    pending: Arc<Mutex<HashMap<FetchKey, PendingFetch>>>,
    fallback_encoding: &'static encoding_rs::Encoding,
}

impl SharedFetch {
    pub fn new(transport: Arc<dyn HttpTransport>, config: &FetchConfig) -> Self {
        Self {
            transport,
            pending: Arc::new(Mutex::new(HashMap::new())),
            fallback_encoding: config.fallback_encoding(),
        }
    }

    /// Encoding applied to documents that declare none.
    pub fn fallback_encoding(&self) -> &'static encoding_rs::Encoding {
        self.fallback_encoding
    }

    /// Fetch a URL, joining an identical in-flight request when there is one.
    ///
    /// The request runs on its own task and completes even if every caller
    /// stops waiting. Each caller gets its own clone of the response.
    #[instrument(skip(self), fields(url = %url, method = %method))]
    pub async fn fetch(&self, url: &str, method: FetchMethod) -> Result<FetchResponse, FetchError> {
        let key = (url.to_string(), method);

        let pending = {
            let mut pending = self.pending.lock().await;
            match pending.get(&key) {
                Some(existing) => {
                    debug!("Joining in-flight fetch");
                    existing.clone()
                }
                None => {
                    debug!("Issuing fetch");
                    let request = self.spawn_request(key.clone());
                    pending.insert(key, request.clone());
                    request
                }
            }
        };

        pending.await
    }

    /// Start the request on a task that unregisters itself once settled.
    ///
    /// Must be called with the pending map locked so the removal cannot run
    /// before the insertion.
    fn spawn_request(&self, key: FetchKey) -> PendingFetch {
        let transport = Arc::clone(&self.transport);
        let pending = Arc::clone(&self.pending);

        let handle = tokio::spawn(async move {
            let result = transport.send(&key.0, key.1).await;
            pending.lock().await.remove(&key);
            debug!(
                url = %key.0,
                method = %key.1,
                success = result.is_ok(),
                "Fetch settled"
            );
            result
        });

        async move {
            handle
                .await
                .unwrap_or_else(|e| Err(FetchError::new(format!("fetch task failed: {}", e))))
        }
        .boxed()
        .shared()
    }

    /// Number of requests currently in flight.
    pub async fn in_flight_count(&self) -> usize {
        self.pending.lock().await.len()
    }
}

impl std::fmt::Debug for SharedFetch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedFetch")
            .field("fallback_encoding", &self.fallback_encoding.name())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;
    use std::time::Duration;

    const URL: &str = "https://example.com/wfs?REQUEST=GetCapabilities";

    fn setup(latency_ms: u64) -> (Arc<MockTransport>, SharedFetch) {
        let mock = Arc::new(MockTransport::new().with_latency(Duration::from_millis(latency_ms)));
        let fetch = SharedFetch::new(mock.clone(), &FetchConfig::default());
        (mock, fetch)
    }

    #[tokio::test]
    async fn test_concurrent_identical_requests_share_one_call() {
        let (mock, fetch) = setup(50);
        mock.respond_xml(URL, "<doc/>");

        let results = futures::future::join_all((0..5).map(|_| fetch.fetch(URL, FetchMethod::Get))).await;

        assert_eq!(mock.call_count(URL, FetchMethod::Get), 1);
        for result in results {
            assert_eq!(result.unwrap().body.as_ref(), b"<doc/>");
        }
        assert_eq!(fetch.in_flight_count().await, 0);
    }

    #[tokio::test]
    async fn test_get_and_head_are_distinct_keys() {
        let (mock, fetch) = setup(20);
        mock.respond_xml(URL, "<doc/>");

        let (get, head) = tokio::join!(
            fetch.fetch(URL, FetchMethod::Get),
            fetch.fetch(URL, FetchMethod::Head)
        );

        assert!(get.is_ok());
        assert!(head.unwrap().body.is_empty());
        assert_eq!(mock.call_count(URL, FetchMethod::Get), 1);
        assert_eq!(mock.call_count(URL, FetchMethod::Head), 1);
    }

    #[tokio::test]
    async fn test_sequential_requests_fetch_again() {
        let (mock, fetch) = setup(0);
        mock.respond_xml(URL, "<doc/>");

        fetch.fetch(URL, FetchMethod::Get).await.unwrap();
        fetch.fetch(URL, FetchMethod::Get).await.unwrap();

        assert_eq!(mock.call_count(URL, FetchMethod::Get), 2);
    }

    #[tokio::test]
    async fn test_failure_is_shared_and_entry_removed() {
        let (mock, fetch) = setup(20);
        mock.fail(URL, FetchMethod::Get, "connection refused");

        let (a, b) = tokio::join!(fetch.fetch(URL, FetchMethod::Get), fetch.fetch(URL, FetchMethod::Get));

        assert_eq!(a.unwrap_err().message, "connection refused");
        assert!(b.is_err());
        assert_eq!(mock.call_count(URL, FetchMethod::Get), 1);
        assert_eq!(fetch.in_flight_count().await, 0);
    }

    #[tokio::test]
    async fn test_request_completes_when_caller_stops_waiting() {
        let (mock, fetch) = setup(30);
        mock.respond_xml(URL, "<doc/>");

        let abandoned = tokio::time::timeout(Duration::from_millis(5), fetch.fetch(URL, FetchMethod::Get)).await;
        assert!(abandoned.is_err());
        assert_eq!(fetch.in_flight_count().await, 1);

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(fetch.in_flight_count().await, 0);
        assert_eq!(mock.call_count(URL, FetchMethod::Get), 1);
    }
}
