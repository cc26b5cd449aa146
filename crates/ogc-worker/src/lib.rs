//! Task dispatch for the OGC client.
//!
//! Parsing runs behind a request/response boundary: each call is a
//! [`TaskRequest`] correlated by id with its [`TaskResponse`]. The
//! [`Dispatcher`] sends requests to an isolated [`WorkerContext`] (its own
//! thread and runtime) or, in fallback mode, runs the same handlers
//! in-process. [`OgcClient`] wires the fetch cache, the built-in tasks and
//! the dispatcher together.

pub mod context;
pub mod dispatcher;
pub mod envelope;
pub mod registry;
pub mod tasks;
pub mod worker;

pub use context::{ClientConfig, OgcClient};
pub use dispatcher::Dispatcher;
pub use envelope::{TaskRequest, TaskResponse};
pub use registry::{TaskHandler, TaskRegistry};
pub use worker::WorkerContext;
