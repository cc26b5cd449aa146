//! WFS request URL builders.

use ogc_common::{BoundingBox, OgcResult};

use super::WfsVersion;
use crate::url::set_query_params;

/// Optional GetFeature parameters. Only the fields that are set are written.
#[derive(Debug, Clone, Default)]
pub struct GetFeatureOptions {
    pub output_format: Option<String>,
    pub max_features: Option<u32>,
    /// Restrict the response to these properties
    pub property_names: Option<Vec<String>>,
    /// Request only the match count
    pub hits_only: bool,
    /// CRS of the returned geometries
    pub output_crs: Option<String>,
    /// Spatial filter
    pub extent: Option<BoundingBox>,
    /// CRS of `extent`, appended to the BBOX value when set
    pub extent_crs: Option<String>,
    pub start_index: Option<u32>,
}

/// Build a GetFeature URL.
///
/// In hits-only mode the count parameter is also set to `1` for servers
/// that ignore `RESULTTYPE=hits`.
pub fn generate_get_feature_url(
    base: &str,
    version: WfsVersion,
    type_name: &str,
    options: &GetFeatureOptions,
) -> OgcResult<String> {
    let mut params = vec![
        ("SERVICE", "WFS".to_string()),
        ("REQUEST", "GetFeature".to_string()),
        ("VERSION", version.as_str().to_string()),
        (version.type_name_param(), type_name.to_string()),
    ];

    if let Some(format) = &options.output_format {
        params.push(("OUTPUTFORMAT", format.clone()));
    }
    if let Some(names) = options.property_names.as_ref().filter(|names| !names.is_empty()) {
        params.push(("PROPERTYNAME", names.join(",")));
    }
    if options.hits_only {
        params.push(("RESULTTYPE", "hits".to_string()));
        params.push((version.count_param(), "1".to_string()));
    } else if let Some(max) = options.max_features {
        params.push((version.count_param(), max.to_string()));
    }
    if let Some(crs) = &options.output_crs {
        params.push(("SRSNAME", crs.clone()));
    }
    if let Some(extent) = &options.extent {
        let mut bbox = extent.to_kvp_string();
        if let Some(crs) = &options.extent_crs {
            bbox.push(',');
            bbox.push_str(crs);
        }
        params.push(("BBOX", bbox));
    }
    if let Some(start) = options.start_index {
        params.push(("STARTINDEX", start.to_string()));
    }

    set_query_params(base, &params)
}

/// Build a DescribeFeatureType URL.
pub fn generate_describe_feature_type_url(
    base: &str,
    version: WfsVersion,
    type_name: &str,
) -> OgcResult<String> {
    set_query_params(
        base,
        &[
            ("SERVICE", "WFS".to_string()),
            ("REQUEST", "DescribeFeatureType".to_string()),
            ("VERSION", version.as_str().to_string()),
            (version.type_name_param(), type_name.to_string()),
        ],
    )
}

/// Build a GetCapabilities URL, optionally pinning the version.
pub fn generate_get_capabilities_url(base: &str, version: Option<WfsVersion>) -> OgcResult<String> {
    let mut params = vec![
        ("SERVICE", "WFS".to_string()),
        ("REQUEST", "GetCapabilities".to_string()),
    ];
    if let Some(version) = version {
        params.push(("VERSION", version.as_str().to_string()));
    }
    set_query_params(base, &params)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://example.com/wfs";

    #[test]
    fn test_minimal_get_feature_url() {
        let url = generate_get_feature_url(BASE, WfsVersion::V1_0_0, "my:type", &GetFeatureOptions::default())
            .unwrap();
        assert_eq!(
            url,
            "https://example.com/wfs?SERVICE=WFS&REQUEST=GetFeature&VERSION=1.0.0&TYPENAME=my%3Atype"
        );
    }

    #[test]
    fn test_version_2_uses_typenames() {
        let url = generate_get_feature_url(BASE, WfsVersion::V2_0_0, "my:type", &GetFeatureOptions::default())
            .unwrap();
        assert_eq!(
            url,
            "https://example.com/wfs?SERVICE=WFS&REQUEST=GetFeature&VERSION=2.0.0&TYPENAMES=my%3Atype"
        );
    }

    #[test]
    fn test_hits_only_sets_count_to_one() {
        let options = GetFeatureOptions {
            hits_only: true,
            max_features: Some(500),
            ..Default::default()
        };
        let v2 = generate_get_feature_url(BASE, WfsVersion::V2_0_0, "t", &options).unwrap();
        assert!(v2.ends_with("&RESULTTYPE=hits&COUNT=1"));
        let v1 = generate_get_feature_url(BASE, WfsVersion::V1_1_0, "t", &options).unwrap();
        assert!(v1.ends_with("&RESULTTYPE=hits&MAXFEATURES=1"));
    }

    #[test]
    fn test_all_options_in_order() {
        let options = GetFeatureOptions {
            output_format: Some("application/json".to_string()),
            max_features: Some(10),
            property_names: Some(vec!["NAME".to_string(), "POP".to_string()]),
            hits_only: false,
            output_crs: Some("EPSG:3857".to_string()),
            extent: Some(BoundingBox::new(1.0, 2.0, 3.0, 4.0)),
            extent_crs: Some("EPSG:4326".to_string()),
            start_index: Some(20),
        };
        let url = generate_get_feature_url(BASE, WfsVersion::V2_0_0, "t", &options).unwrap();
        assert_eq!(
            url,
            "https://example.com/wfs?SERVICE=WFS&REQUEST=GetFeature&VERSION=2.0.0&TYPENAMES=t\
             &OUTPUTFORMAT=application%2Fjson&PROPERTYNAME=NAME%2CPOP&COUNT=10\
             &SRSNAME=EPSG%3A3857&BBOX=1%2C2%2C3%2C4%2CEPSG%3A4326&STARTINDEX=20"
        );
    }

    #[test]
    fn test_describe_feature_type_url() {
        let url = generate_describe_feature_type_url(
            "https://example.com/wfs?request=GetCapabilities",
            WfsVersion::V1_1_0,
            "ns:roads",
        )
        .unwrap();
        assert_eq!(
            url,
            "https://example.com/wfs?SERVICE=WFS&REQUEST=DescribeFeatureType&VERSION=1.1.0&TYPENAME=ns%3Aroads"
        );
    }

    #[test]
    fn test_get_capabilities_url() {
        let url = generate_get_capabilities_url(BASE, None).unwrap();
        assert_eq!(url, "https://example.com/wfs?SERVICE=WFS&REQUEST=GetCapabilities");
    }
}
