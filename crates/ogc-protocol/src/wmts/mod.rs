//! Web Map Tile Service (WMTS) 1.0.0.
//!
//! Supports both the KVP and RESTful bindings. Tile matrix sets reuse
//! [`ogc_common::TileMatrixSet`].

pub mod capabilities;
pub mod url;

use std::collections::BTreeMap;

use ogc_common::{BoundingBox, TileMatrixSet};
use serde::{Deserialize, Serialize};

use crate::service::{HttpMethod, Provider};

pub use capabilities::parse_capabilities;
pub use url::{generate_get_capabilities_url, generate_get_tile_url, generate_rest_tile_url, GetTileOptions};

/// Service identification. WMTS advertises formats per layer, not per service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WmtsServiceInfo {
    pub title: String,
    pub name: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub fees: String,
    pub constraints: String,
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
}

/// Request binding an operation URL accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestEncoding {
    Kvp,
    Rest,
}

impl RequestEncoding {
    /// Map a `GetEncoding` constraint value.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "KVP" => Some(RequestEncoding::Kvp),
            "REST" | "RESTFUL" => Some(RequestEncoding::Rest),
            _ => None,
        }
    }
}

/// One advertised endpoint of an operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WmtsOperationUrl {
    pub method: HttpMethod,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<RequestEncoding>,
}

/// Operation name to its endpoints, in document order.
pub type WmtsOperationUrls = BTreeMap<String, Vec<WmtsOperationUrl>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WmtsLayerStyle {
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend_url: Option<String>,
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WmtsDimension {
    pub identifier: String,
    pub default: String,
    pub values: Vec<String>,
}

/// Range of tiles available at one zoom level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMatrixLimits {
    pub tile_matrix: String,
    pub min_tile_row: u32,
    pub max_tile_row: u32,
    pub min_tile_col: u32,
    pub max_tile_col: u32,
}

impl TileMatrixLimits {
    pub fn contains(&self, row: u32, col: u32) -> bool {
        (self.min_tile_row..=self.max_tile_row).contains(&row)
            && (self.min_tile_col..=self.max_tile_col).contains(&col)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileMatrixSetLink {
    pub identifier: String,
    /// Empty when the layer covers every tile of the set
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub limits: Vec<TileMatrixLimits>,
}

/// A RESTful URL template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceUrl {
    pub format: String,
    pub template: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WmtsLayer {
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    /// WGS84 extent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    pub styles: Vec<WmtsLayerStyle>,
    /// Identifier of the style flagged `isDefault`, else the first style
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_style: Option<String>,
    pub formats: Vec<String>,
    pub info_formats: Vec<String>,
    pub dimensions: Vec<WmtsDimension>,
    pub tile_matrix_set_links: Vec<TileMatrixSetLink>,
    /// Tile templates (`resourceType="tile"`)
    pub resource_urls: Vec<ResourceUrl>,
    /// Feature info templates (`resourceType="FeatureInfo"`)
    pub info_urls: Vec<ResourceUrl>,
}

impl WmtsLayer {
    pub fn tile_matrix_set_link(&self, identifier: &str) -> Option<&TileMatrixSetLink> {
        self.tile_matrix_set_links
            .iter()
            .find(|link| link.identifier == identifier)
    }
}

/// Everything a WMTS capabilities document describes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WmtsCapabilities {
    pub version: String,
    pub info: WmtsServiceInfo,
    pub operation_urls: WmtsOperationUrls,
    pub tile_matrix_sets: Vec<TileMatrixSet>,
    pub layers: Vec<WmtsLayer>,
}

impl WmtsCapabilities {
    pub fn layer(&self, identifier: &str) -> Option<&WmtsLayer> {
        self.layers.iter().find(|layer| layer.identifier == identifier)
    }

    pub fn tile_matrix_set(&self, identifier: &str) -> Option<&TileMatrixSet> {
        self.tile_matrix_sets
            .iter()
            .find(|set| set.identifier == identifier)
    }

    /// First endpoint of an operation accepting the given encoding.
    pub fn operation_url(&self, operation: &str, encoding: RequestEncoding) -> Option<&str> {
        self.operation_urls
            .get(operation)?
            .iter()
            .find(|endpoint| endpoint.encoding == Some(encoding))
            .map(|endpoint| endpoint.url.as_str())
    }
}
