//! XML traversal tests against real-world capabilities documents.

use ogc_common::xml::{attribute, children, find_child, find_children, find_path, parse_xml, root, text};
use ogc_common::OgcError;
use test_utils::fixtures::{wfs, wms, wmts};

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_all_capabilities_fixtures() {
    for fixture in [
        wfs::CAPABILITIES_1_0_0,
        wfs::CAPABILITIES_1_1_0,
        wfs::CAPABILITIES_2_0_0,
        wms::CAPABILITIES_1_1_1,
        wms::CAPABILITIES_1_3_0,
        wmts::CAPABILITIES,
    ] {
        let doc = parse_xml(fixture).unwrap();
        assert!(!attribute(Some(root(&doc)), "version").is_empty());
    }
}

#[test]
fn test_parse_error_carries_message() {
    let err = parse_xml("<WFS_Capabilities><Service></WFS_Capabilities>").unwrap_err();
    match err {
        OgcError::XmlParse { message } => assert!(!message.is_empty()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_parse_rejects_plain_text() {
    assert!(parse_xml("Service unavailable").is_err());
}

// ============================================================================
// Traversal
// ============================================================================

#[test]
fn test_local_names_ignore_prefixes() {
    let doc = parse_xml(wfs::CAPABILITIES_2_0_0).unwrap();
    let ident = find_child(Some(root(&doc)), "ServiceIdentification", false);
    assert_eq!(text(find_child(ident, "Title", false)), "Demo Feature Service");
    assert_eq!(root(&doc).local_name(), "WFS_Capabilities");
    assert_eq!(root(&doc).name(), "wfs:WFS_Capabilities");
}

#[test]
fn test_nested_search_collects_across_levels() {
    let doc = parse_xml(wms::CAPABILITIES_1_3_0).unwrap();
    let capability = find_child(Some(root(&doc)), "Capability", false);

    let direct = find_children(capability, "Layer", false);
    assert_eq!(direct.len(), 1);

    let all = find_children(capability, "Layer", true);
    let titles: Vec<String> = all
        .iter()
        .map(|layer| text(find_child(Some(*layer), "Title", false)))
        .collect();
    assert_eq!(titles, vec!["Demo layers", "Countries", "Capitals", "Rivers"]);
}

#[test]
fn test_find_path_and_children() {
    let doc = parse_xml(wmts::CAPABILITIES).unwrap();
    let contents = find_path(Some(root(&doc)), &["Contents"]);
    let names: Vec<&str> = children(contents).iter().map(|el| el.local_name()).collect();
    assert_eq!(names, vec!["Layer", "TileMatrixSet", "TileMatrixSet"]);
}

#[test]
fn test_prefixed_attribute_lookup() {
    let doc = parse_xml(wfs::CAPABILITIES_1_1_0).unwrap();
    let site = find_path(Some(root(&doc)), &["ServiceProvider", "ProviderSite"]);
    assert_eq!(attribute(site, "xlink:href"), "https://example.com");
}

#[test]
fn test_missing_sections_yield_defaults() {
    let doc = parse_xml(wfs::CAPABILITIES_1_0_0).unwrap();
    let missing = find_child(Some(root(&doc)), "OperationsMetadata", false);
    assert!(missing.is_none());
    assert_eq!(text(find_child(missing, "Operation", false)), "");
    assert!(find_children(missing, "Operation", true).is_empty());
}

#[test]
fn test_entities_are_unescaped_in_attributes() {
    let doc = parse_xml(wms::CAPABILITIES_1_3_0).unwrap();
    let resource = find_path(
        Some(root(&doc)),
        &["Capability", "Request", "GetMap", "DCPType", "HTTP", "Get", "OnlineResource"],
    );
    assert_eq!(
        attribute(resource, "xlink:href"),
        "https://example.com/geoserver/wms?SERVICE=WMS&"
    );
}
