//! Web Feature Service (WFS) 1.0.0, 1.1.0 and 2.0.0.
//!
//! The three versions describe the same concepts with different element
//! names. [`WfsVersion`] is resolved once from the capabilities root and
//! carries the tag table every parser reads from.

pub mod capabilities;
pub mod featureprops;
pub mod featuretype;
mod types;
pub mod url;

use std::fmt;
use std::str::FromStr;

use ogc_common::{OgcError, OgcResult};
use serde::{Deserialize, Serialize};

pub use capabilities::parse_capabilities;
pub use featureprops::{compute_feature_props_details, parse_feature_props, parse_feature_props_geojson};
pub use featuretype::parse_feature_type_info;
pub use types::*;
pub use url::{
    generate_describe_feature_type_url, generate_get_capabilities_url, generate_get_feature_url,
    GetFeatureOptions,
};

/// Supported WFS protocol versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WfsVersion {
    #[serde(rename = "1.0.0")]
    V1_0_0,
    #[serde(rename = "1.1.0")]
    V1_1_0,
    #[serde(rename = "2.0.0")]
    V2_0_0,
}

/// How a version lists keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeywordShape {
    /// A single `Keywords` element holding comma-separated text
    CommaSeparated,
    /// `Keywords/Keyword` repeated elements
    Repeated,
}

/// How a version advertises a feature type's geographic extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BboxShape {
    /// `LatLongBoundingBox` with minx/miny/maxx/maxy attributes
    LatLongAttributes,
    /// `WGS84BoundingBox` with `LowerCorner`/`UpperCorner` pairs
    Wgs84Corners,
}

/// How a version lists a feature type's metadata links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MetadataShape {
    None,
    /// Text content is the URL, with `format` and `type` attributes
    FormatTypeUrl,
    /// `xlink:href` attribute only
    Href,
}

/// Element names and document shapes for one WFS version.
#[derive(Debug)]
pub(crate) struct VersionTags {
    pub service: &'static str,
    pub service_name: &'static str,
    pub keywords: KeywordShape,
    pub default_crs: &'static str,
    pub other_crs: Option<&'static str>,
    pub per_type_formats: bool,
    pub bbox: BboxShape,
    pub ows_operations: bool,
    pub metadata: MetadataShape,
}

const TAGS_1_0_0: VersionTags = VersionTags {
    service: "Service",
    service_name: "Name",
    keywords: KeywordShape::CommaSeparated,
    default_crs: "SRS",
    other_crs: None,
    per_type_formats: false,
    bbox: BboxShape::LatLongAttributes,
    ows_operations: false,
    metadata: MetadataShape::None,
};

const TAGS_1_1_0: VersionTags = VersionTags {
    service: "ServiceIdentification",
    service_name: "ServiceType",
    keywords: KeywordShape::Repeated,
    default_crs: "DefaultSRS",
    other_crs: Some("OtherSRS"),
    per_type_formats: true,
    bbox: BboxShape::Wgs84Corners,
    ows_operations: true,
    metadata: MetadataShape::FormatTypeUrl,
};

const TAGS_2_0_0: VersionTags = VersionTags {
    service: "ServiceIdentification",
    service_name: "ServiceType",
    keywords: KeywordShape::Repeated,
    default_crs: "DefaultCRS",
    other_crs: Some("OtherCRS"),
    per_type_formats: true,
    bbox: BboxShape::Wgs84Corners,
    ows_operations: true,
    metadata: MetadataShape::Href,
};

impl WfsVersion {
    /// Resolve an advertised version string.
    ///
    /// Matching is by prefix so minor revisions (`1.1.3`, `2.0.2`) resolve to
    /// the family they belong to.
    pub fn parse(version: &str) -> OgcResult<Self> {
        let version = version.trim();
        if version.starts_with("1.0") {
            Ok(WfsVersion::V1_0_0)
        } else if version.starts_with("1.1") {
            Ok(WfsVersion::V1_1_0)
        } else if version.starts_with("2.") || version == "2" {
            Ok(WfsVersion::V2_0_0)
        } else {
            Err(OgcError::UnsupportedVersion {
                protocol: "WFS".to_string(),
                version: version.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WfsVersion::V1_0_0 => "1.0.0",
            WfsVersion::V1_1_0 => "1.1.0",
            WfsVersion::V2_0_0 => "2.0.0",
        }
    }

    pub(crate) fn tags(&self) -> &'static VersionTags {
        match self {
            WfsVersion::V1_0_0 => &TAGS_1_0_0,
            WfsVersion::V1_1_0 => &TAGS_1_1_0,
            WfsVersion::V2_0_0 => &TAGS_2_0_0,
        }
    }

    /// Query parameter naming the requested feature type.
    pub fn type_name_param(&self) -> &'static str {
        match self {
            WfsVersion::V2_0_0 => "TYPENAMES",
            _ => "TYPENAME",
        }
    }

    /// Query parameter limiting the number of returned features.
    pub fn count_param(&self) -> &'static str {
        match self {
            WfsVersion::V2_0_0 => "COUNT",
            _ => "MAXFEATURES",
        }
    }

    /// Root attribute of a hits response holding the feature count.
    pub fn hits_attribute(&self) -> &'static str {
        match self {
            WfsVersion::V2_0_0 => "numberMatched",
            _ => "numberOfFeatures",
        }
    }

    /// Attribute holding a feature's identifier in GetFeature responses.
    pub fn feature_id_attribute(&self) -> &'static str {
        match self {
            WfsVersion::V1_0_0 => "fid",
            _ => "gml:id",
        }
    }
}

impl FromStr for WfsVersion {
    type Err = OgcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for WfsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
