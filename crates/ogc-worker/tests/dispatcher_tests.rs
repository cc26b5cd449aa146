//! Integration tests for the dispatcher: correlation, worker lifecycle and
//! fallback behavior.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ogc_common::xml::parse_xml;
use ogc_common::{OgcError, OgcResult, ServiceExceptionError};
use ogc_worker::{Dispatcher, TaskHandler, TaskRegistry};
use serde_json::{json, Value};
use test_utils::fixtures::exceptions;

// ============================================================================
// Test handlers
// ============================================================================

/// Sleeps for `ms`, then echoes `value` along with the thread it ran on.
struct Delayed;

#[async_trait]
impl TaskHandler for Delayed {
    async fn handle(&self, params: Value) -> OgcResult<Value> {
        let ms = params["ms"].as_u64().unwrap_or(0);
        tokio::time::sleep(Duration::from_millis(ms)).await;
        Ok(json!({
            "value": params["value"].clone(),
            "thread": std::thread::current().name(),
        }))
    }
}

/// Fails with a service exception carrying a parsed report.
struct Rejects;

#[async_trait]
impl TaskHandler for Rejects {
    async fn handle(&self, _params: Value) -> OgcResult<Value> {
        Err(service_exception().into())
    }
}

/// Panics instead of replying.
struct Crashes;

#[async_trait]
impl TaskHandler for Crashes {
    async fn handle(&self, _params: Value) -> OgcResult<Value> {
        panic!("handler bug");
    }
}

fn service_exception() -> ServiceExceptionError {
    ServiceExceptionError {
        code: "InvalidParameterValue".to_string(),
        locator: "request".to_string(),
        message: "Invalid request parameter: GetCapabilitiesX".to_string(),
        request_url: "https://example.com/wfs?REQUEST=GetCapabilitiesX".to_string(),
        response: parse_xml(exceptions::WFS_1_0_0).unwrap(),
    }
}

fn dispatcher(use_worker: bool) -> Dispatcher {
    let mut registry = TaskRegistry::new();
    registry.register("delayed", Delayed);
    registry.register("rejects", Rejects);
    registry.register("crashes", Crashes);
    Dispatcher::new(Arc::new(registry), use_worker)
}

// ============================================================================
// Correlation
// ============================================================================

#[tokio::test]
async fn test_concurrent_calls_resolve_to_their_own_results() {
    let dispatcher = dispatcher(true);

    // Later calls finish first, so replies arrive in reverse order
    let calls = (0..5u64).map(|i| {
        let dispatcher = &dispatcher;
        async move {
            dispatcher
                .dispatch("delayed", json!({ "ms": 100 - i * 20, "value": i }))
                .await
        }
    });
    let results = futures::future::join_all(calls).await;

    for (i, result) in results.into_iter().enumerate() {
        assert_eq!(result.unwrap()["value"], json!(i));
    }
}

#[tokio::test]
async fn test_tasks_run_off_the_caller_thread() {
    let dispatcher = dispatcher(true);
    let result = dispatcher
        .dispatch("delayed", json!({ "value": "x" }))
        .await
        .unwrap();
    assert_eq!(result["thread"], "ogc-worker");
}

// ============================================================================
// Worker lifecycle
// ============================================================================

#[tokio::test]
async fn test_worker_is_created_once_and_reused() {
    let dispatcher = dispatcher(true);
    assert!(!dispatcher.worker_started());

    for i in 0..3 {
        let result = dispatcher
            .dispatch("delayed", json!({ "value": i }))
            .await
            .unwrap();
        assert_eq!(result["value"], i);
        assert!(dispatcher.worker_started());
    }
}

#[tokio::test]
async fn test_fallback_runs_in_process() {
    let dispatcher = dispatcher(true);
    let on_worker = dispatcher
        .dispatch("delayed", json!({ "value": 1 }))
        .await
        .unwrap();
    assert_eq!(on_worker["thread"], "ogc-worker");

    dispatcher.enable_fallback();
    assert!(dispatcher.is_fallback());

    let in_process = dispatcher
        .dispatch("delayed", json!({ "value": 1 }))
        .await
        .unwrap();
    assert_eq!(in_process["value"], on_worker["value"]);
    assert_ne!(in_process["thread"], "ogc-worker");
}

#[test]
fn test_worker_outlives_the_runtime_that_started_it() {
    let dispatcher = dispatcher(true);

    let first = tokio::runtime::Runtime::new().unwrap();
    let result = first
        .block_on(dispatcher.dispatch("delayed", json!({ "value": 1 })))
        .unwrap();
    assert_eq!(result["value"], 1);
    drop(first);

    let second = tokio::runtime::Runtime::new().unwrap();
    let result = second
        .block_on(async {
            tokio::time::timeout(
                Duration::from_secs(5),
                dispatcher.dispatch("delayed", json!({ "value": 2 })),
            )
            .await
        })
        .expect("dispatch on a second runtime timed out")
        .unwrap();
    assert_eq!(result["value"], 2);
    assert_eq!(result["thread"], "ogc-worker");
}

#[tokio::test]
async fn test_disabled_worker_is_never_started() {
    let dispatcher = dispatcher(false);
    dispatcher
        .dispatch("delayed", json!({ "value": 1 }))
        .await
        .unwrap();
    assert!(!dispatcher.worker_started());
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_unknown_task_through_both_adapters() {
    for use_worker in [true, false] {
        let err = dispatcher(use_worker)
            .dispatch("nope", Value::Null)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            OgcError::UnknownTask {
                task_name: "nope".to_string()
            }
        );
    }
}

#[tokio::test]
async fn test_service_exception_crosses_worker_intact() {
    let err = dispatcher(true)
        .dispatch("rejects", Value::Null)
        .await
        .unwrap_err();

    assert_eq!(err.exception_code(), Some("InvalidParameterValue"));
    match err {
        OgcError::ServiceException(e) => {
            assert_eq!(e.locator, "request");
            assert_eq!(e, service_exception());
        }
        other => panic!("expected a service exception, got {:?}", other),
    }
}

#[tokio::test]
async fn test_panicking_task_through_both_adapters() {
    for use_worker in [true, false] {
        let dispatcher = dispatcher(use_worker);
        let err = dispatcher.dispatch("crashes", Value::Null).await.unwrap_err();
        assert!(
            matches!(err, OgcError::WorkerUnavailable { ref message } if message.contains("crashes")),
            "unexpected error: {:?}",
            err
        );

        // The dispatcher keeps serving after a task panics
        let result = dispatcher
            .dispatch("delayed", json!({ "value": 3 }))
            .await
            .unwrap();
        assert_eq!(result["value"], 3);
    }
}

#[tokio::test]
async fn test_errors_match_across_adapters() {
    let on_worker = dispatcher(true).dispatch("rejects", Value::Null).await;
    let in_process = dispatcher(false).dispatch("rejects", Value::Null).await;
    assert_eq!(on_worker, in_process);
}
