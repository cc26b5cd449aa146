//! In-memory transport for tests.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;

use crate::transport::{FetchError, FetchMethod, FetchResponse, HttpTransport};

type Key = (String, FetchMethod);

/// Serves canned responses and counts every call per (URL, method).
///
/// Requests without a canned entry fail with a [`FetchError`], which is how
/// an unreachable host looks to callers.
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<Key, Result<FetchResponse, FetchError>>>,
    calls: Mutex<HashMap<Key, usize>>,
    latency: Duration,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every response, so concurrent callers overlap.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn respond(&self, url: &str, method: FetchMethod, response: FetchResponse) {
        lock(&self.routes).insert((url.to_string(), method), Ok(response));
    }

    /// Serve an XML document for GET and an empty 200 for HEAD.
    pub fn respond_xml(&self, url: &str, body: &str) {
        self.respond(
            url,
            FetchMethod::Get,
            FetchResponse::new(200, body.to_string()).with_header("content-type", "text/xml"),
        );
        self.respond(url, FetchMethod::Head, FetchResponse::new(200, ""));
    }

    pub fn fail(&self, url: &str, method: FetchMethod, message: &str) {
        lock(&self.routes).insert((url.to_string(), method), Err(FetchError::new(message)));
    }

    pub fn call_count(&self, url: &str, method: FetchMethod) -> usize {
        lock(&self.calls)
            .get(&(url.to_string(), method))
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, url: &str, method: FetchMethod) -> Result<FetchResponse, FetchError> {
        let key = (url.to_string(), method);
        *lock(&self.calls).entry(key.clone()).or_insert(0) += 1;

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        lock(&self.routes)
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::new(format!("no route for {} {}", method, url))))
    }
}
