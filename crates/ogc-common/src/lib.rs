//! Common types and utilities shared across the OGC client crates.

pub mod bbox;
pub mod crs;
pub mod error;
pub mod tile;
pub mod xml;

pub use bbox::BoundingBox;
pub use crs::{axis_order_wms_1_3, epsg_code, simplify_epsg_urn, AxisOrder};
pub use error::{EndpointError, OgcError, OgcResult, ServiceExceptionError};
pub use tile::{TileMatrix, TileMatrixSet};
pub use xml::{XmlDocument, XmlElement};
