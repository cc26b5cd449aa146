//! WFS parsing tests across protocol versions.

use ogc_common::xml::parse_xml;
use ogc_common::BoundingBox;
use ogc_protocol::wfs::{
    compute_feature_props_details, parse_capabilities, parse_feature_props,
    parse_feature_props_geojson, parse_feature_type_info, FeaturePropertyType, GeometryType,
    WfsCapabilities, WfsVersion,
};
use ogc_protocol::HttpMethod;
use serde_json::{json, Value};
use test_utils::assert_approx_eq;
use test_utils::fixtures::wfs;

fn capabilities(fixture: &str) -> WfsCapabilities {
    parse_capabilities(&parse_xml(fixture).unwrap()).unwrap()
}

fn states_full(version: WfsVersion, hits: &str) -> ogc_protocol::wfs::WfsFeatureTypeFull {
    let caps = capabilities(match version {
        WfsVersion::V1_0_0 => wfs::CAPABILITIES_1_0_0,
        WfsVersion::V1_1_0 => wfs::CAPABILITIES_1_1_0,
        WfsVersion::V2_0_0 => wfs::CAPABILITIES_2_0_0,
    });
    let summary = caps.feature_type("hierarchy:states").unwrap();
    parse_feature_type_info(
        summary,
        &parse_xml(wfs::DESCRIBE_FEATURE_TYPE).unwrap(),
        &parse_xml(hits).unwrap(),
        version,
    )
}

fn assert_bbox(actual: Option<BoundingBox>, expected: [f64; 4]) {
    let bbox = actual.expect("bounding box");
    assert_approx_eq!(bbox.min_x, expected[0], 1e-9);
    assert_approx_eq!(bbox.min_y, expected[1], 1e-9);
    assert_approx_eq!(bbox.max_x, expected[2], 1e-9);
    assert_approx_eq!(bbox.max_y, expected[3], 1e-9);
}

// ============================================================================
// Capabilities
// ============================================================================

#[test]
fn test_versions_resolve_from_root() {
    assert_eq!(capabilities(wfs::CAPABILITIES_1_0_0).version, WfsVersion::V1_0_0);
    assert_eq!(capabilities(wfs::CAPABILITIES_1_1_0).version, WfsVersion::V1_1_0);
    assert_eq!(capabilities(wfs::CAPABILITIES_2_0_0).version, WfsVersion::V2_0_0);
}

#[test]
fn test_service_info_is_equivalent_across_versions() {
    for fixture in [wfs::CAPABILITIES_1_0_0, wfs::CAPABILITIES_1_1_0, wfs::CAPABILITIES_2_0_0] {
        let info = capabilities(fixture).info;
        assert_eq!(info.title, "Demo Feature Service");
        assert_eq!(info.name, "WFS");
        assert_eq!(info.abstract_text, "Census and traffic data.");
        assert_eq!(info.fees, "NONE");
        assert_eq!(info.constraints, "NONE");
        assert_eq!(info.keywords, vec!["WFS", "WMS", "GEOSERVER"]);
    }
}

#[test]
fn test_provider_only_from_ows_versions() {
    assert!(capabilities(wfs::CAPABILITIES_1_0_0).info.provider.is_none());

    for fixture in [wfs::CAPABILITIES_1_1_0, wfs::CAPABILITIES_2_0_0] {
        let provider = capabilities(fixture).info.provider.unwrap();
        assert_eq!(provider.name, "Example Mapping Agency");
        assert_eq!(provider.site, "https://example.com");
        assert_eq!(provider.contact.name, "Jane Doe");
        assert_eq!(provider.contact.city, "Lyon");
        assert_eq!(provider.contact.postal_code, "69000");
        assert_eq!(provider.contact.email, "contact@example.com");
    }
}

#[test]
fn test_endpoint_output_formats() {
    assert_eq!(
        capabilities(wfs::CAPABILITIES_1_0_0).info.output_formats,
        vec!["GML2", "GML3", "SHAPE-ZIP", "JSON"]
    );
    assert_eq!(
        capabilities(wfs::CAPABILITIES_1_1_0).info.output_formats,
        vec!["text/xml; subtype=gml/3.1.1", "GML2", "SHAPE-ZIP", "application/json"]
    );
    assert_eq!(
        capabilities(wfs::CAPABILITIES_2_0_0).info.output_formats,
        vec![
            "application/gml+xml; version=3.2",
            "text/xml; subtype=gml/3.2",
            "application/json"
        ]
    );
}

#[test]
fn test_operation_urls_are_equivalent_across_versions() {
    for fixture in [wfs::CAPABILITIES_1_0_0, wfs::CAPABILITIES_1_1_0, wfs::CAPABILITIES_2_0_0] {
        let urls = capabilities(fixture).operation_urls;
        for operation in ["GetCapabilities", "DescribeFeatureType", "GetFeature"] {
            assert_eq!(
                urls[operation][&HttpMethod::Get],
                format!("https://example.com/geoserver/wfs?request={}", operation)
            );
            assert_eq!(urls[operation][&HttpMethod::Post], "https://example.com/geoserver/wfs");
        }
    }
}

#[test]
fn test_feature_type_summaries() {
    for fixture in [wfs::CAPABILITIES_1_0_0, wfs::CAPABILITIES_1_1_0, wfs::CAPABILITIES_2_0_0] {
        let caps = capabilities(fixture);
        assert_eq!(caps.feature_types.len(), 2);

        let states = caps.feature_type("hierarchy:states").unwrap();
        assert_eq!(states.title.as_deref(), Some("USA Population"));
        assert_eq!(
            states.abstract_text.as_deref(),
            Some("This is some census data on the states.")
        );
        assert_eq!(states.default_crs, "EPSG:4326");
        assert_eq!(
            states.keywords.as_deref(),
            Some(&["census", "united", "boundaries", "state", "states"].map(String::from)[..])
        );
        assert_bbox(states.bounding_box, [-124.731422, 24.955967, -66.969849, 49.371735]);

        let sections = caps.feature_type("comptage_section").unwrap();
        assert_eq!(sections.name, "cd16:comptage_section");
        assert_eq!(sections.default_crs, "EPSG:2154");
        assert!(sections.abstract_text.is_none());
        assert_bbox(sections.bounding_box, [1.3, 48.5, 2.6, 49.2]);
    }
}

#[test]
fn test_other_crs_and_per_type_formats() {
    let v1 = capabilities(wfs::CAPABILITIES_1_0_0);
    assert!(v1.feature_types[0].other_crs.is_empty());

    let v11 = capabilities(wfs::CAPABILITIES_1_1_0);
    let states = v11.feature_type("hierarchy:states").unwrap();
    assert_eq!(states.other_crs, vec!["EPSG:32615", "EPSG:32616"]);
    let sections = v11.feature_type("cd16:comptage_section").unwrap();
    assert_eq!(
        sections.output_formats,
        vec!["application/json", "text/xml; subtype=gml/3.1.1"]
    );

    let v2 = capabilities(wfs::CAPABILITIES_2_0_0);
    let sections = v2.feature_type("cd16:comptage_section").unwrap();
    assert_eq!(sections.output_formats, vec!["application/json", "text/xml; subtype=gml/3.2"]);
}

#[test]
fn test_metadata_urls_by_version() {
    let v11 = capabilities(wfs::CAPABILITIES_1_1_0);
    let links = v11.feature_type("hierarchy:states").unwrap().metadata_urls.clone().unwrap();
    assert_eq!(links[0].url, "https://example.com/metadata/states.xml");
    assert_eq!(links[0].format.as_deref(), Some("text/xml"));
    assert_eq!(links[0].link_type.as_deref(), Some("TC211"));

    let v2 = capabilities(wfs::CAPABILITIES_2_0_0);
    let links = v2.feature_type("hierarchy:states").unwrap().metadata_urls.clone().unwrap();
    assert_eq!(links[0].url, "https://example.com/metadata/states.xml");
    assert!(links[0].format.is_none());
}

#[test]
fn test_capabilities_serialize_without_nulls() {
    let caps = capabilities(wfs::CAPABILITIES_2_0_0);
    let json = serde_json::to_value(&caps).unwrap();
    let sections = &json["feature_types"][1];
    assert_eq!(sections["name"], "cd16:comptage_section");
    assert!(sections.get("abstract").is_none());
    assert_eq!(json["version"], "2.0.0");
}

// ============================================================================
// Feature type details
// ============================================================================

#[test]
fn test_full_feature_type_from_schema_and_hits() {
    let full = states_full(WfsVersion::V2_0_0, wfs::HITS_2_0_0);

    assert_eq!(full.summary.name, "hierarchy:states");
    assert_eq!(full.geometry_name.as_deref(), Some("the_geom"));
    assert_eq!(full.geometry_type, Some(GeometryType::MultiPolygon));
    assert_eq!(full.object_count, Some(49));
    assert_eq!(
        full.properties.keys().collect::<Vec<_>>(),
        vec!["CREATED", "HOUSHOLD", "IS_COASTAL", "PERSONS", "STATE_FIPS", "STATE_NAME"]
    );
    assert_eq!(full.properties["PERSONS"], FeaturePropertyType::Float);
    assert_eq!(full.properties["HOUSHOLD"], FeaturePropertyType::Integer);
    assert_eq!(full.properties["IS_COASTAL"], FeaturePropertyType::Boolean);
    assert_eq!(full.properties["CREATED"], FeaturePropertyType::String);
}

#[test]
fn test_pre_2_0_hits_use_number_of_features() {
    let full = states_full(WfsVersion::V1_1_0, wfs::HITS_1_1_0);
    assert_eq!(full.object_count, Some(49));

    // a 1.1.0 hits document read as 2.0.0 has no numberMatched
    let full = states_full(WfsVersion::V2_0_0, wfs::HITS_1_1_0);
    assert_eq!(full.object_count, None);
}

#[test]
fn test_unknown_object_count_is_omitted() {
    let full = states_full(WfsVersion::V2_0_0, wfs::HITS_UNKNOWN);
    assert_eq!(full.object_count, None);
    let json = serde_json::to_value(&full).unwrap();
    assert!(json.get("object_count").is_none());
}

#[test]
fn test_schema_without_geometry() {
    let caps = capabilities(wfs::CAPABILITIES_2_0_0);
    let full = parse_feature_type_info(
        caps.feature_type("hierarchy:states").unwrap(),
        &parse_xml(wfs::DESCRIBE_FEATURE_TYPE_NO_GEOMETRY).unwrap(),
        &parse_xml(wfs::HITS_2_0_0).unwrap(),
        WfsVersion::V2_0_0,
    );
    assert!(full.geometry_name.is_none());
    assert!(full.geometry_type.is_none());
    assert_eq!(full.properties["total"], FeaturePropertyType::Integer);

    let json = serde_json::to_value(&full).unwrap();
    assert!(json.get("geometry_name").is_none());
    assert!(json.get("geometry_type").is_none());
}

// ============================================================================
// Feature properties
// ============================================================================

#[test]
fn test_feature_props_are_equivalent_across_versions() {
    let expected = [
        ("states.1", json!({
            "STATE_NAME": "Illinois",
            "STATE_FIPS": "17",
            "PERSONS": 11430602.0,
            "HOUSHOLD": 4202240,
            "IS_COASTAL": false,
            "CREATED": "2020-01-01T00:00:00Z"
        })),
        ("states.2", json!({
            "STATE_NAME": "District of Columbia",
            "STATE_FIPS": "11",
            "PERSONS": 606900.0,
            "IS_COASTAL": false,
            "CREATED": "2020-01-01T00:00:00Z"
        })),
        ("states.3", json!({
            "STATE_NAME": "Delaware",
            "STATE_FIPS": "10",
            "PERSONS": 666168.0,
            "HOUSHOLD": 247497,
            "IS_COASTAL": true,
            "CREATED": "2021-06-15T00:00:00Z"
        })),
    ];

    for (version, fixture, hits) in [
        (WfsVersion::V1_0_0, wfs::GET_FEATURE_1_0_0, wfs::HITS_1_1_0),
        (WfsVersion::V1_1_0, wfs::GET_FEATURE_1_1_0, wfs::HITS_1_1_0),
        (WfsVersion::V2_0_0, wfs::GET_FEATURE_2_0_0, wfs::HITS_2_0_0),
    ] {
        let full = states_full(version, hits);
        let features = parse_feature_props(&parse_xml(fixture).unwrap(), &full, version);
        assert_eq!(features.len(), 3, "version {}", version);
        for (feature, (id, properties)) in features.iter().zip(expected.iter()) {
            assert_eq!(feature.id, *id, "version {}", version);
            assert_eq!(Value::Object(feature.properties.clone()), *properties, "version {}", version);
        }
    }
}

#[test]
fn test_geometry_and_undeclared_properties_are_dropped() {
    let full = states_full(WfsVersion::V1_0_0, wfs::HITS_1_1_0);
    let features = parse_feature_props(&parse_xml(wfs::GET_FEATURE_1_0_0).unwrap(), &full, WfsVersion::V1_0_0);
    assert!(!features[0].properties.contains_key("the_geom"));
    assert!(!features[0].properties.contains_key("UNDECLARED"));
}

#[test]
fn test_geojson_features() {
    let collection: Value = serde_json::from_str(wfs::GET_FEATURE_GEOJSON).unwrap();
    let features = parse_feature_props_geojson(&collection).unwrap();
    assert_eq!(features.len(), 2);
    assert_eq!(features[0].id, "states.1");
    assert_eq!(features[1].id, "2");
    assert_eq!(features[1].properties["PERSONS"], json!(666168.0));
    assert_eq!(features[1].properties["IS_COASTAL"], json!(true));
}

#[test]
fn test_details_counts_sum_to_features_carrying_property() {
    let full = states_full(WfsVersion::V2_0_0, wfs::HITS_2_0_0);
    let features = parse_feature_props(&parse_xml(wfs::GET_FEATURE_2_0_0).unwrap(), &full, WfsVersion::V2_0_0);
    let details = compute_feature_props_details(&features);

    for (name, values) in &details {
        let carrying = features
            .iter()
            .filter(|feature| feature.properties.contains_key(name))
            .count();
        assert_eq!(values.iter().map(|v| v.count).sum::<usize>(), carrying, "{}", name);
    }

    assert_eq!(details["HOUSHOLD"].len(), 2);
    let coastal = &details["IS_COASTAL"];
    assert_eq!(coastal[0].value, json!(false));
    assert_eq!(coastal[0].count, 2);
    assert_eq!(coastal[1].value, json!(true));
    assert_eq!(coastal[1].count, 1);
    let created = &details["CREATED"];
    assert_eq!(created[0].value, json!("2020-01-01T00:00:00Z"));
    assert_eq!(created[0].count, 2);
}
