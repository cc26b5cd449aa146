use std::collections::BTreeMap;

use ogc_common::BoundingBox;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::WfsVersion;
use crate::service::{OperationUrls, Provider};

/// Service identification and endpoint-level output formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WfsServiceInfo {
    pub title: String,
    pub name: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub fees: String,
    pub constraints: String,
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    pub output_formats: Vec<String>,
}

/// A metadata link advertised for a feature type.
///
/// WFS 1.1.0 gives format and type alongside the URL; 2.0.0 gives the URL only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataUrl {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
}

/// Minimal feature type description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WfsFeatureTypeBrief {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
}

/// Feature type as advertised in the capabilities document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WfsFeatureTypeSummary {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    pub default_crs: String,
    pub other_crs: Vec<String>,
    pub output_formats: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_urls: Option<Vec<MetadataUrl>>,
}

impl WfsFeatureTypeSummary {
    pub fn brief(&self) -> WfsFeatureTypeBrief {
        WfsFeatureTypeBrief {
            name: self.name.clone(),
            title: self.title.clone(),
            abstract_text: self.abstract_text.clone(),
            bounding_box: self.bounding_box,
        }
    }
}

/// Feature type enriched with its schema and object count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WfsFeatureTypeFull {
    #[serde(flatten)]
    pub summary: WfsFeatureTypeSummary,
    pub properties: BTreeMap<String, FeaturePropertyType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry_type: Option<GeometryType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_count: Option<u64>,
}

/// Scalar type of a feature property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeaturePropertyType {
    String,
    Boolean,
    Float,
    Integer,
}

impl FeaturePropertyType {
    /// Map an XML Schema primitive type (without prefix) to a property type.
    pub fn from_xsd(type_name: &str) -> Self {
        match type_name {
            "boolean" => FeaturePropertyType::Boolean,
            "float" | "double" | "decimal" => FeaturePropertyType::Float,
            "int" | "integer" | "long" | "short" | "byte" | "nonNegativeInteger"
            | "nonPositiveInteger" | "positiveInteger" | "negativeInteger" | "unsignedLong"
            | "unsignedInt" | "unsignedShort" | "unsignedByte" => FeaturePropertyType::Integer,
            _ => FeaturePropertyType::String,
        }
    }
}

/// Geometry category of a feature type's geometry property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryType {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    Unknown,
}

impl GeometryType {
    /// Map a GML property type (without prefix) to a geometry category.
    pub fn from_gml(type_name: &str) -> Self {
        match type_name {
            "PointPropertyType" => GeometryType::Point,
            "MultiPointPropertyType" => GeometryType::MultiPoint,
            "LineStringPropertyType" | "CurvePropertyType" => GeometryType::LineString,
            "MultiLineStringPropertyType" | "MultiCurvePropertyType" => {
                GeometryType::MultiLineString
            }
            "PolygonPropertyType" | "SurfacePropertyType" => GeometryType::Polygon,
            "MultiPolygonPropertyType" | "MultiSurfacePropertyType" => GeometryType::MultiPolygon,
            _ => GeometryType::Unknown,
        }
    }
}

/// One feature's identifier and typed property values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureWithProps {
    pub id: String,
    pub properties: Map<String, Value>,
}

/// A distinct property value and how many features carry it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyValueCount {
    pub value: Value,
    pub count: usize,
}

/// Property name to its distinct values, in first-seen order.
pub type FeaturePropsDetails = BTreeMap<String, Vec<PropertyValueCount>>;

/// Everything a WFS capabilities document describes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WfsCapabilities {
    pub version: WfsVersion,
    pub info: WfsServiceInfo,
    pub operation_urls: OperationUrls,
    pub feature_types: Vec<WfsFeatureTypeSummary>,
}

impl WfsCapabilities {
    /// Look up a feature type by name, with or without its namespace prefix.
    pub fn feature_type(&self, name: &str) -> Option<&WfsFeatureTypeSummary> {
        self.feature_types
            .iter()
            .find(|ft| ft.name == name)
            .or_else(|| {
                self.feature_types
                    .iter()
                    .find(|ft| ogc_common::xml::strip_namespace(&ft.name) == name)
            })
    }
}
