//! Request/response dispatch over the worker context or in-process.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use ogc_common::{OgcError, OgcResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::{mpsc, oneshot, OnceCell};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::envelope::{TaskRequest, TaskResponse};
use crate::registry::TaskRegistry;
use crate::worker::{run_isolated, WorkerContext};

/// Reply slots of in-flight requests, keyed by request id.
///
/// Once closed, no slot can be registered and every existing one has been
/// dropped, which fails its caller.
#[derive(Default)]
struct ReplySlots {
    slots: Mutex<HashMap<Uuid, oneshot::Sender<TaskResponse>>>,
    closed: AtomicBool,
}

impl ReplySlots {
    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, oneshot::Sender<TaskResponse>>> {
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn register(&self, request_id: Uuid) -> OgcResult<oneshot::Receiver<TaskResponse>> {
        let (tx, rx) = oneshot::channel();
        let mut slots = self.lock();
        if self.closed.load(Ordering::SeqCst) {
            return Err(OgcError::WorkerUnavailable {
                message: "worker reply channel has closed".to_string(),
            });
        }
        slots.insert(request_id, tx);
        Ok(rx)
    }

    fn remove(&self, request_id: &Uuid) -> Option<oneshot::Sender<TaskResponse>> {
        self.lock().remove(request_id)
    }

    fn close(&self) {
        let mut slots = self.lock();
        self.closed.store(true, Ordering::SeqCst);
        slots.clear();
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.lock().len()
    }
}

/// Closes the reply slots when the router stops, including when its
/// runtime is torn down under it.
struct CloseOnDrop(Arc<ReplySlots>);

impl Drop for CloseOnDrop {
    fn drop(&mut self) {
        self.0.close();
    }
}

/// A started worker context and the reply slots of its in-flight requests.
struct WorkerHandle {
    context: WorkerContext,
    replies: Arc<ReplySlots>,
}

impl WorkerHandle {
    async fn start(registry: Arc<TaskRegistry>) -> OgcResult<Self> {
        let (context, responses) = WorkerContext::spawn(registry).await?;
        let replies = Arc::new(ReplySlots::default());
        context
            .runtime()
            .spawn(route_replies(responses, CloseOnDrop(Arc::clone(&replies))));
        Ok(Self { context, replies })
    }

    async fn call(&self, request: TaskRequest) -> OgcResult<TaskResponse> {
        let request_id = request.request_id;
        let rx = self.replies.register(request_id)?;

        if let Err(e) = self.context.send(request) {
            self.replies.remove(&request_id);
            return Err(e);
        }

        rx.await.map_err(|_| OgcError::WorkerUnavailable {
            message: format!("worker stopped before replying to {}", request_id),
        })
    }
}

/// Deliver each reply to the slot registered under its id.
///
/// Runs on the worker's own runtime. When the worker goes away the guard
/// closes every remaining slot.
async fn route_replies(mut responses: mpsc::UnboundedReceiver<TaskResponse>, guard: CloseOnDrop) {
    while let Some(response) = responses.recv().await {
        match guard.0.remove(&response.request_id) {
            Some(slot) => {
                let _ = slot.send(response);
            }
            None => warn!(request_id = %response.request_id, "Reply for unknown request"),
        }
    }
}

/// Runs named tasks either on the worker context or in-process.
///
/// The worker is started on the first dispatch and reused afterwards. Once
/// fallback is enabled, tasks run on the caller's runtime with the same
/// request/response contract.
pub struct Dispatcher {
    registry: Arc<TaskRegistry>,
    worker: OnceCell<WorkerHandle>,
    fallback: AtomicBool,
}

impl Dispatcher {
    pub fn new(registry: Arc<TaskRegistry>, use_worker: bool) -> Self {
        Self {
            registry,
            worker: OnceCell::new(),
            fallback: AtomicBool::new(!use_worker),
        }
    }

    /// Run every following task in-process.
    pub fn enable_fallback(&self) {
        if !self.fallback.swap(true, Ordering::SeqCst) {
            info!("Worker fallback enabled, running tasks in-process");
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback.load(Ordering::SeqCst)
    }

    /// Whether the worker context has been started.
    pub fn worker_started(&self) -> bool {
        self.worker.initialized()
    }

    /// Run a task and return its raw result.
    #[instrument(skip_all, fields(task = %task_name))]
    pub async fn dispatch(&self, task_name: &str, params: Value) -> OgcResult<Value> {
        let request = TaskRequest::new(task_name, params);
        let request_id = request.request_id;

        let response = if self.is_fallback() {
            run_isolated(Arc::clone(&self.registry), request).await
        } else {
            let worker = self
                .worker
                .get_or_try_init(|| WorkerHandle::start(Arc::clone(&self.registry)))
                .await?;
            worker.call(request).await?
        };

        let result = response.into_result();
        if let Err(e) = &result {
            debug!(task = %task_name, request_id = %request_id, error = %e, "Task failed");
        }
        result
    }

    /// Run a task with typed parameters and result.
    pub async fn dispatch_as<P, T>(&self, task_name: &str, params: &P) -> OgcResult<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let value = self.dispatch(task_name, serde_json::to_value(params)?).await?;
        serde_json::from_value(value).map_err(|e| {
            OgcError::invalid_document(format!("unexpected result from {}: {}", task_name, e))
        })
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("registry", &self.registry)
            .field("worker_started", &self.worker_started())
            .field("fallback", &self.is_fallback())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TaskHandler;
    use async_trait::async_trait;
    use serde_json::json;

    struct Double;

    #[async_trait]
    impl TaskHandler for Double {
        async fn handle(&self, params: Value) -> OgcResult<Value> {
            let n = params.as_i64().ok_or_else(|| OgcError::InvalidTaskParams {
                message: "expected an integer".to_string(),
            })?;
            Ok(json!(n * 2))
        }
    }

    fn dispatcher(use_worker: bool) -> Dispatcher {
        let mut registry = TaskRegistry::new();
        registry.register("double", Double);
        Dispatcher::new(Arc::new(registry), use_worker)
    }

    #[tokio::test]
    async fn test_worker_started_lazily() {
        let dispatcher = dispatcher(true);
        assert!(!dispatcher.worker_started());

        assert_eq!(dispatcher.dispatch("double", json!(21)).await.unwrap(), json!(42));
        assert!(dispatcher.worker_started());
        assert_eq!(dispatcher.pending_count(), 0);
    }

    #[tokio::test]
    async fn test_fallback_never_starts_worker() {
        let dispatcher = dispatcher(false);
        assert!(dispatcher.is_fallback());

        assert_eq!(dispatcher.dispatch("double", json!(4)).await.unwrap(), json!(8));
        assert!(!dispatcher.worker_started());
    }

    #[tokio::test]
    async fn test_handler_error_is_returned() {
        let dispatcher = dispatcher(true);
        let err = dispatcher.dispatch("double", json!("x")).await.unwrap_err();
        assert!(matches!(err, OgcError::InvalidTaskParams { .. }));
    }

    #[tokio::test]
    async fn test_dispatch_as() {
        let dispatcher = dispatcher(true);
        let n: i64 = dispatcher.dispatch_as("double", &5).await.unwrap();
        assert_eq!(n, 10);

        let err = dispatcher.dispatch_as::<_, String>("double", &5).await.unwrap_err();
        assert!(matches!(err, OgcError::InvalidDocument { .. }));
    }

    #[test]
    fn test_closed_slots_refuse_new_requests() {
        let replies = ReplySlots::default();
        let mut waiting = replies.register(Uuid::new_v4()).unwrap();

        replies.close();
        assert_eq!(replies.len(), 0);
        assert!(waiting.try_recv().is_err());
        assert!(matches!(
            replies.register(Uuid::new_v4()),
            Err(OgcError::WorkerUnavailable { .. })
        ));
    }

    #[test]
    fn test_guard_closes_slots_on_drop() {
        let replies = Arc::new(ReplySlots::default());
        drop(CloseOnDrop(Arc::clone(&replies)));
        assert!(replies.register(Uuid::new_v4()).is_err());
    }

    impl Dispatcher {
        fn pending_count(&self) -> usize {
            self.worker.get().map_or(0, |worker| worker.replies.len())
        }
    }
}
