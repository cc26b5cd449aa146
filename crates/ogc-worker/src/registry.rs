//! Task handlers by name.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use ogc_common::{OgcError, OgcResult};
use serde_json::Value;

use crate::envelope::{TaskRequest, TaskResponse};

/// A named unit of work run by either dispatch adapter.
#[async_trait]
pub trait TaskHandler: Send + Sync {
    async fn handle(&self, params: Value) -> OgcResult<Value>;
}

/// Handlers keyed by task name. Built once, then shared read-only.
#[derive(Default, Clone)]
pub struct TaskRegistry {
    handlers: HashMap<String, Arc<dyn TaskHandler>>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler, replacing any previous one with the same name.
    pub fn register(&mut self, name: impl Into<String>, handler: impl TaskHandler + 'static) {
        self.handlers.insert(name.into(), Arc::new(handler));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered task names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Run a task by name.
    pub async fn run(&self, name: &str, params: Value) -> OgcResult<Value> {
        let handler = self.handlers.get(name).ok_or_else(|| OgcError::UnknownTask {
            task_name: name.to_string(),
        })?;
        handler.handle(params).await
    }

    /// Run a request and wrap the outcome in a response carrying its id.
    pub async fn handle_request(&self, request: TaskRequest) -> TaskResponse {
        let result = self.run(&request.task_name, request.params).await;
        TaskResponse::from_result(request.request_id, result)
    }
}

impl std::fmt::Debug for TaskRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskRegistry")
            .field("tasks", &self.names())
            .finish()
    }
}
