//! The isolated worker context.
//!
//! A dedicated OS thread drives its own single-threaded runtime. Requests
//! arrive on one channel and responses leave on another; each request runs
//! as its own task, so responses come back in completion order.

use std::sync::Arc;

use ogc_common::{OgcError, OgcResult};
use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::envelope::{TaskRequest, TaskResponse};
use crate::registry::TaskRegistry;

const THREAD_NAME: &str = "ogc-worker";

/// Sending half of a running worker context.
///
/// The worker thread exits once every sender is dropped and its in-flight
/// tasks are abandoned with its runtime.
#[derive(Debug, Clone)]
pub struct WorkerContext {
    requests: mpsc::UnboundedSender<TaskRequest>,
    runtime: Handle,
}

impl WorkerContext {
    /// Start a worker thread running tasks from `registry`.
    ///
    /// Returns once the worker's runtime is up, along with the stream of
    /// responses.
    pub async fn spawn(
        registry: Arc<TaskRegistry>,
    ) -> OgcResult<(Self, mpsc::UnboundedReceiver<TaskResponse>)> {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::unbounded_channel();
        let (ready_tx, ready_rx) = oneshot::channel::<Result<Handle, String>>();

        std::thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || {
                let runtime = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(runtime) => runtime,
                    Err(e) => {
                        let _ = ready_tx.send(Err(e.to_string()));
                        return;
                    }
                };
                let _ = ready_tx.send(Ok(runtime.handle().clone()));
                runtime.block_on(run(registry, request_rx, response_tx));
                debug!("Worker context stopped");
            })
            .map_err(|e| OgcError::WorkerUnavailable {
                message: format!("failed to spawn worker thread: {}", e),
            })?;

        let runtime = match ready_rx.await {
            Ok(Ok(runtime)) => runtime,
            Ok(Err(message)) => return Err(OgcError::WorkerUnavailable { message }),
            Err(_) => {
                return Err(OgcError::WorkerUnavailable {
                    message: "worker thread exited during startup".to_string(),
                })
            }
        };

        info!(thread = THREAD_NAME, "Worker context started");
        let context = Self {
            requests: request_tx,
            runtime,
        };
        Ok((context, response_rx))
    }

    /// Post a request to the worker.
    pub fn send(&self, request: TaskRequest) -> OgcResult<()> {
        self.requests
            .send(request)
            .map_err(|_| OgcError::WorkerUnavailable {
                message: "worker context has stopped".to_string(),
            })
    }

    /// Handle to the worker's runtime.
    ///
    /// Tasks spawned here live exactly as long as the worker thread, not
    /// as long as the runtime of whoever started it.
    pub fn runtime(&self) -> &Handle {
        &self.runtime
    }
}

/// Run one request in its own task.
///
/// A panicking handler still owes the caller a reply, so the panic is
/// turned into a `WorkerUnavailable` response.
pub(crate) async fn run_isolated(registry: Arc<TaskRegistry>, request: TaskRequest) -> TaskResponse {
    let request_id = request.request_id;
    let task_name = request.task_name.clone();

    tokio::spawn(async move { registry.handle_request(request).await })
        .await
        .unwrap_or_else(|e| {
            warn!(task = %task_name, request_id = %request_id, error = %e, "Task aborted");
            TaskResponse::err(
                request_id,
                OgcError::WorkerUnavailable {
                    message: format!("task {} aborted: {}", task_name, e),
                },
            )
        })
}

/// Worker event loop.
async fn run(
    registry: Arc<TaskRegistry>,
    mut requests: mpsc::UnboundedReceiver<TaskRequest>,
    responses: mpsc::UnboundedSender<TaskResponse>,
) {
    while let Some(request) = requests.recv().await {
        let registry = Arc::clone(&registry);
        let responses = responses.clone();

        tokio::spawn(async move {
            let request_id = request.request_id;
            let response = run_isolated(registry, request).await;
            if responses.send(response).is_err() {
                debug!(request_id = %request_id, "Response dropped, receiver is gone");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TaskHandler;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::time::Duration;

    struct Sleep;

    #[async_trait]
    impl TaskHandler for Sleep {
        async fn handle(&self, params: Value) -> OgcResult<Value> {
            let ms = params["ms"].as_u64().unwrap_or(0);
            tokio::time::sleep(Duration::from_millis(ms)).await;
            Ok(json!({ "thread": std::thread::current().name() }))
        }
    }

    struct Panics;

    #[async_trait]
    impl TaskHandler for Panics {
        async fn handle(&self, _params: Value) -> OgcResult<Value> {
            panic!("handler bug");
        }
    }

    fn registry() -> Arc<TaskRegistry> {
        let mut registry = TaskRegistry::new();
        registry.register("sleep", Sleep);
        registry.register("panics", Panics);
        Arc::new(registry)
    }

    #[tokio::test]
    async fn test_tasks_run_on_worker_thread() {
        let (worker, mut responses) = WorkerContext::spawn(registry()).await.unwrap();
        let request = TaskRequest::new("sleep", json!({ "ms": 0 }));
        let id = request.request_id;
        worker.send(request).unwrap();

        let response = responses.recv().await.unwrap();
        assert_eq!(response.request_id, id);
        assert_eq!(response.into_result().unwrap(), json!({ "thread": "ogc-worker" }));
    }

    #[tokio::test]
    async fn test_responses_arrive_in_completion_order() {
        let (worker, mut responses) = WorkerContext::spawn(registry()).await.unwrap();
        let slow = TaskRequest::new("sleep", json!({ "ms": 80 }));
        let fast = TaskRequest::new("sleep", json!({ "ms": 0 }));
        let (slow_id, fast_id) = (slow.request_id, fast.request_id);

        worker.send(slow).unwrap();
        worker.send(fast).unwrap();

        assert_eq!(responses.recv().await.unwrap().request_id, fast_id);
        assert_eq!(responses.recv().await.unwrap().request_id, slow_id);
    }

    #[tokio::test]
    async fn test_panicking_handler_still_replies() {
        let (worker, mut responses) = WorkerContext::spawn(registry()).await.unwrap();
        let request = TaskRequest::new("panics", Value::Null);
        let id = request.request_id;
        worker.send(request).unwrap();

        let response = responses.recv().await.unwrap();
        assert_eq!(response.request_id, id);
        assert!(matches!(
            response.into_result(),
            Err(OgcError::WorkerUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn test_runtime_handle_runs_on_worker_thread() {
        let (worker, _responses) = WorkerContext::spawn(registry()).await.unwrap();
        let thread = worker
            .runtime()
            .spawn(async { std::thread::current().name().map(str::to_string) })
            .await
            .unwrap();
        assert_eq!(thread.as_deref(), Some(THREAD_NAME));
    }
}
