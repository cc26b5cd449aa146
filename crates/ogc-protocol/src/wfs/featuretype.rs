//! Feature type details from DescribeFeatureType and hits responses.

use std::collections::BTreeMap;

use ogc_common::xml::{attribute, find_child, find_children, root};
use ogc_common::XmlDocument;

use super::{FeaturePropertyType, GeometryType, WfsFeatureTypeFull, WfsFeatureTypeSummary, WfsVersion};

/// Merge a capabilities summary with its schema and object count.
///
/// Properties come from the `element` declarations nested under the first
/// `complexType` of the schema: `xsd:` typed elements become scalar
/// properties, the first `gml:` typed element becomes the geometry. The
/// object count is read from the hits response root and omitted when it is
/// not a number.
pub fn parse_feature_type_info(
    summary: &WfsFeatureTypeSummary,
    describe: &XmlDocument,
    hits: &XmlDocument,
    version: WfsVersion,
) -> WfsFeatureTypeFull {
    let complex_type = find_child(Some(root(describe)), "complexType", true);

    let mut properties = BTreeMap::new();
    let mut geometry: Option<(String, GeometryType)> = None;

    for element in find_children(complex_type, "element", true) {
        let name = attribute(Some(element), "name");
        let type_name = attribute(Some(element), "type");
        if name.is_empty() {
            continue;
        }
        if let Some(xsd_type) = type_name.strip_prefix("xsd:") {
            properties.insert(name, FeaturePropertyType::from_xsd(xsd_type));
        } else if let Some(gml_type) = type_name.strip_prefix("gml:") {
            if geometry.is_none() {
                geometry = Some((name, GeometryType::from_gml(gml_type)));
            }
        }
    }

    let object_count = attribute(Some(root(hits)), version.hits_attribute())
        .trim()
        .parse::<u64>()
        .ok();
    let (geometry_name, geometry_type) = match geometry {
        Some((name, kind)) => (Some(name), Some(kind)),
        None => (None, None),
    };

    WfsFeatureTypeFull {
        summary: summary.clone(),
        properties,
        geometry_name,
        geometry_type,
        object_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ogc_common::xml::parse_xml;

    fn summary() -> WfsFeatureTypeSummary {
        WfsFeatureTypeSummary {
            name: "ns:things".to_string(),
            title: Some("Things".to_string()),
            abstract_text: None,
            bounding_box: None,
            default_crs: "EPSG:4326".to_string(),
            other_crs: vec![],
            output_formats: vec!["application/json".to_string()],
            keywords: None,
            metadata_urls: None,
        }
    }

    #[test]
    fn test_only_first_geometry_is_kept() {
        let schema = parse_xml(
            r#"<xsd:schema xmlns:xsd="x"><xsd:complexType name="t"><xsd:sequence>
                <xsd:element name="geom" type="gml:PointPropertyType"/>
                <xsd:element name="other_geom" type="gml:PolygonPropertyType"/>
                <xsd:element name="label" type="xsd:string"/>
                <xsd:element name="custom" type="ns:CustomType"/>
            </xsd:sequence></xsd:complexType></xsd:schema>"#,
        )
        .unwrap();
        let hits = parse_xml(r#"<FeatureCollection numberMatched="12"/>"#).unwrap();
        let full = parse_feature_type_info(&summary(), &schema, &hits, WfsVersion::V2_0_0);

        assert_eq!(full.geometry_name.as_deref(), Some("geom"));
        assert_eq!(full.geometry_type, Some(GeometryType::Point));
        assert_eq!(full.properties.len(), 1);
        assert_eq!(full.properties["label"], FeaturePropertyType::String);
        assert_eq!(full.object_count, Some(12));
        assert_eq!(full.summary.title.as_deref(), Some("Things"));
    }

    #[test]
    fn test_count_attribute_depends_on_version() {
        let schema = parse_xml("<schema/>").unwrap();
        let hits = parse_xml(r#"<FeatureCollection numberMatched="7"/>"#).unwrap();
        let full = parse_feature_type_info(&summary(), &schema, &hits, WfsVersion::V1_1_0);
        assert_eq!(full.object_count, None);
        assert!(full.properties.is_empty());
        assert!(full.geometry_name.is_none());
        assert!(full.geometry_type.is_none());
    }
}
