//! Web Map Service (WMS) 1.1.x and 1.3.0.

pub mod capabilities;
pub mod url;

use std::collections::BTreeMap;
use std::fmt;

use ogc_common::{BoundingBox, OgcError, OgcResult};
use serde::{Deserialize, Serialize};

use crate::service::{OperationUrls, Provider};

pub use capabilities::parse_capabilities;
pub use url::{generate_get_capabilities_url, generate_get_map_url, GetMapOptions};

/// Supported WMS protocol versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WmsVersion {
    #[serde(rename = "1.1.1")]
    V1_1,
    #[serde(rename = "1.3.0")]
    V1_3,
}

impl WmsVersion {
    /// Resolve an advertised version string (`1.1.0` and `1.1.1` share a shape).
    pub fn parse(version: &str) -> OgcResult<Self> {
        let version = version.trim();
        if version.starts_with("1.1") {
            Ok(WmsVersion::V1_1)
        } else if version.starts_with("1.3") {
            Ok(WmsVersion::V1_3)
        } else {
            Err(OgcError::UnsupportedVersion {
                protocol: "WMS".to_string(),
                version: version.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WmsVersion::V1_1 => "1.1.1",
            WmsVersion::V1_3 => "1.3.0",
        }
    }

    /// Element listing a layer's CRS, and the request parameter naming it.
    pub fn crs_tag(&self) -> &'static str {
        match self {
            WmsVersion::V1_1 => "SRS",
            WmsVersion::V1_3 => "CRS",
        }
    }
}

impl fmt::Display for WmsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service identification and the formats the operations support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WmsServiceInfo {
    pub title: String,
    pub name: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub fees: String,
    pub constraints: String,
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    /// GetMap image formats
    pub output_formats: Vec<String>,
    /// GetFeatureInfo formats
    pub info_formats: Vec<String>,
    pub exception_formats: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WmsLayerStyle {
    pub name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WmsLayerAttribution {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// A layer dimension such as `time` or `elevation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WmsDimension {
    pub name: String,
    pub units: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Extent as advertised: a list or an ISO 8601 interval
    pub values: String,
}

/// A layer with its inherited properties resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WmsLayer {
    /// Layers without a name are categories and cannot be requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub title: String,
    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    pub available_crs: Vec<String>,
    pub styles: Vec<WmsLayerStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<WmsLayerAttribution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geographic_bounding_box: Option<BoundingBox>,
    /// CRS to extent, values in the axis order the server advertised
    pub bounding_boxes: BTreeMap<String, BoundingBox>,
    pub keywords: Vec<String>,
    pub queryable: bool,
    pub opaque: bool,
    pub dimensions: Vec<WmsDimension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<WmsLayer>,
}

/// Everything a WMS capabilities document describes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WmsCapabilities {
    pub version: WmsVersion,
    pub info: WmsServiceInfo,
    pub operation_urls: OperationUrls,
    pub layers: Vec<WmsLayer>,
}

impl WmsCapabilities {
    /// Find a named layer anywhere in the tree.
    pub fn layer(&self, name: &str) -> Option<&WmsLayer> {
        fn search<'a>(layers: &'a [WmsLayer], name: &str) -> Option<&'a WmsLayer> {
            layers.iter().find_map(|layer| {
                if layer.name.as_deref() == Some(name) {
                    Some(layer)
                } else {
                    search(&layer.children, name)
                }
            })
        }
        search(&self.layers, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        assert_eq!(WmsVersion::parse("1.1.0").unwrap(), WmsVersion::V1_1);
        assert_eq!(WmsVersion::parse("1.1.1").unwrap(), WmsVersion::V1_1);
        assert_eq!(WmsVersion::parse("1.3.0").unwrap(), WmsVersion::V1_3);
        assert!(WmsVersion::parse("1.0.0").is_err());
    }

    #[test]
    fn test_crs_tag() {
        assert_eq!(WmsVersion::V1_1.crs_tag(), "SRS");
        assert_eq!(WmsVersion::V1_3.crs_tag(), "CRS");
    }
}
