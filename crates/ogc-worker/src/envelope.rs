//! Messages exchanged with the worker context.

use ogc_common::{OgcError, OgcResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A task invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRequest {
    pub request_id: Uuid,
    pub task_name: String,
    pub params: Value,
}

impl TaskRequest {
    /// Create a request with a fresh id.
    pub fn new(task_name: impl Into<String>, params: Value) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            task_name: task_name.into(),
            params,
        }
    }
}

/// The outcome of a task. Exactly one of `response` and `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResponse {
    pub request_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<OgcError>,
}

impl TaskResponse {
    pub fn ok(request_id: Uuid, response: Value) -> Self {
        Self {
            request_id,
            response: Some(response),
            error: None,
        }
    }

    pub fn err(request_id: Uuid, error: OgcError) -> Self {
        Self {
            request_id,
            response: None,
            error: Some(error),
        }
    }

    pub fn from_result(request_id: Uuid, result: OgcResult<Value>) -> Self {
        match result {
            Ok(response) => Self::ok(request_id, response),
            Err(error) => Self::err(request_id, error),
        }
    }

    /// Resolve on `response`, reject on `error`.
    pub fn into_result(self) -> OgcResult<Value> {
        match (self.error, self.response) {
            (Some(error), _) => Err(error),
            (None, Some(response)) => Ok(response),
            (None, None) => Ok(Value::Null),
        }
    }
}
