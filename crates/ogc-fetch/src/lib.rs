//! HTTP access for the OGC client.
//!
//! - [`HttpTransport`] is the seam every request goes through; [`ReqwestTransport`]
//!   is the production implementation.
//! - [`SharedFetch`] collapses concurrent requests for the same URL and method
//!   into one network call.
//! - [`query_xml_document`] fetches, decodes and parses an XML document,
//!   classifying failures as [`ogc_common::EndpointError`]s.
//!   [`query_json_document`] does the same for JSON responses.

pub mod config;
pub mod query;
pub mod shared;
pub mod transport;

#[cfg(any(test, feature = "test-support"))]
pub mod mock;

pub use config::FetchConfig;
pub use query::{query_json_document, query_xml_document};
pub use shared::SharedFetch;
pub use transport::{FetchError, FetchMethod, FetchResponse, HttpTransport, ReqwestTransport};

#[cfg(any(test, feature = "test-support"))]
pub use mock::MockTransport;
