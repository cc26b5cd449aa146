//! OGC WFS, WMS and WMTS client-side protocol handling.
//!
//! Supports:
//! - WFS 1.0.0, 1.1.0 and 2.0.0 capabilities, schema and feature documents
//! - WMS 1.1.1 and 1.3.0 capabilities
//! - WMTS 1.0.0 capabilities (KVP and RESTful bindings)
//!
//! Every parser works on an [`ogc_common::XmlDocument`] and produces a
//! version-agnostic model. URL builders are pure functions.

pub mod exceptions;
pub mod service;
pub mod url;
pub mod wfs;
pub mod wms;
pub mod wmts;

pub use exceptions::{check_for_exception, find_service_exception};
pub use service::{Contact, HttpMethod, OperationUrls, Provider};
pub use url::set_query_params;
pub use wfs::{WfsCapabilities, WfsVersion};
pub use wms::{WmsCapabilities, WmsVersion};
pub use wmts::WmtsCapabilities;
