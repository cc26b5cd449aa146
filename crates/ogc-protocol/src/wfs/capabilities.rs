//! WFS capabilities parsing.

use ogc_common::xml::{attribute, children, find_child, find_children, find_path, root, text};
use ogc_common::{simplify_epsg_urn, BoundingBox, OgcError, OgcResult, XmlDocument, XmlElement};
use tracing::debug;

use super::{
    BboxShape, KeywordShape, MetadataShape, MetadataUrl, WfsCapabilities, WfsFeatureTypeSummary,
    WfsServiceInfo, WfsVersion,
};
use crate::service::{
    non_empty, optional_text, read_keyword_list, read_ows_operation_urls, read_ows_provider,
    split_keywords, HttpMethod, OperationUrls,
};

/// Read the protocol version from the root `version` attribute.
pub fn read_version(document: &XmlDocument) -> OgcResult<WfsVersion> {
    WfsVersion::parse(&attribute(Some(root(document)), "version"))
}

/// Read service identification, provider and endpoint output formats.
pub fn read_info(document: &XmlDocument, version: WfsVersion) -> WfsServiceInfo {
    let tags = version.tags();
    let root = root(document);
    let service = find_child(Some(root), tags.service, false);

    let keywords = match tags.keywords {
        KeywordShape::CommaSeparated => split_keywords(&text(find_child(service, "Keywords", false))),
        KeywordShape::Repeated => read_keyword_list(service, "Keywords"),
    };
    let provider = match version {
        WfsVersion::V1_0_0 => None,
        _ => read_ows_provider(root),
    };

    WfsServiceInfo {
        title: text(find_child(service, "Title", false)),
        name: text(find_child(service, tags.service_name, false)),
        abstract_text: text(find_child(service, "Abstract", false)),
        fees: text(find_child(service, "Fees", false)),
        constraints: text(find_child(service, "AccessConstraints", false)),
        keywords,
        provider,
        output_formats: read_output_formats(document, version),
    }
}

/// Read the URL of every advertised operation, per HTTP method.
pub fn read_operation_urls(document: &XmlDocument, version: WfsVersion) -> OperationUrls {
    let root = root(document);
    if version.tags().ows_operations {
        return read_ows_operation_urls(root);
    }

    let mut urls = OperationUrls::new();
    let request = find_path(Some(root), &["Capability", "Request"]);
    for operation in children(request) {
        let methods = urls.entry(operation.local_name().to_string()).or_default();
        for http in find_children(Some(operation), "DCPType", false)
            .into_iter()
            .filter_map(|dcp| find_child(Some(dcp), "HTTP", false))
        {
            for endpoint in children(Some(http)) {
                if let Some(method) = HttpMethod::from_tag(endpoint.local_name()) {
                    let href = attribute(Some(endpoint), "onlineResource");
                    if !href.is_empty() {
                        methods.entry(method).or_insert(href);
                    }
                }
            }
        }
    }
    urls
}

/// Read the output formats the GetFeature operation supports.
pub fn read_output_formats(document: &XmlDocument, version: WfsVersion) -> Vec<String> {
    let root = root(document);
    if !version.tags().ows_operations {
        let formats = find_path(Some(root), &["Capability", "Request", "GetFeature", "ResultFormat"]);
        return children(formats)
            .into_iter()
            .map(|format| format.local_name().to_string())
            .collect();
    }

    let get_feature = find_children(find_child(Some(root), "OperationsMetadata", false), "Operation", false)
        .into_iter()
        .find(|op| attribute(Some(*op), "name") == "GetFeature");
    let parameter = find_children(get_feature, "Parameter", false)
        .into_iter()
        .find(|param| attribute(Some(*param), "name").eq_ignore_ascii_case("outputFormat"));

    find_children(parameter, "Value", true)
        .into_iter()
        .map(|value| text(Some(value)))
        .filter(|value| !value.is_empty())
        .collect()
}

/// Read every advertised feature type.
///
/// A feature type without a name cannot be queried and fails the parse.
pub fn read_feature_types(
    document: &XmlDocument,
    version: WfsVersion,
) -> OgcResult<Vec<WfsFeatureTypeSummary>> {
    let endpoint_formats = read_output_formats(document, version);
    let list = find_child(Some(root(document)), "FeatureTypeList", false);

    find_children(list, "FeatureType", false)
        .into_iter()
        .map(|feature_type| read_feature_type(feature_type, version, &endpoint_formats))
        .collect()
}

fn read_feature_type(
    feature_type: &XmlElement,
    version: WfsVersion,
    endpoint_formats: &[String],
) -> OgcResult<WfsFeatureTypeSummary> {
    let tags = version.tags();
    let el = Some(feature_type);

    let name = text(find_child(el, "Name", false));
    if name.is_empty() {
        return Err(OgcError::invalid_document("feature type without a Name"));
    }

    let other_crs = tags
        .other_crs
        .map(|tag| {
            find_children(el, tag, false)
                .into_iter()
                .map(|crs| simplify_epsg_urn(&text(Some(crs))))
                .collect()
        })
        .unwrap_or_default();

    let mut output_formats: Vec<String> = if tags.per_type_formats {
        find_children(find_child(el, "OutputFormats", false), "Format", false)
            .into_iter()
            .map(|format| text(Some(format)))
            .collect()
    } else {
        Vec::new()
    };
    if output_formats.is_empty() {
        output_formats = endpoint_formats.to_vec();
    }

    let bounding_box = match tags.bbox {
        BboxShape::LatLongAttributes => {
            let bbox = find_child(el, "LatLongBoundingBox", false);
            BoundingBox::from_strs(
                &attribute(bbox, "minx"),
                &attribute(bbox, "miny"),
                &attribute(bbox, "maxx"),
                &attribute(bbox, "maxy"),
            )
        }
        BboxShape::Wgs84Corners => {
            let bbox = find_child(el, "WGS84BoundingBox", false);
            BoundingBox::from_corners(
                &text(find_child(bbox, "LowerCorner", false)),
                &text(find_child(bbox, "UpperCorner", false)),
            )
        }
    };

    let keywords = match tags.keywords {
        KeywordShape::CommaSeparated => split_keywords(&text(find_child(el, "Keywords", false))),
        KeywordShape::Repeated => read_keyword_list(el, "Keywords"),
    };

    let metadata_urls: Vec<MetadataUrl> = find_children(el, "MetadataURL", false)
        .into_iter()
        .filter_map(|link| match tags.metadata {
            MetadataShape::None => None,
            MetadataShape::FormatTypeUrl => non_empty(text(Some(link))).map(|url| MetadataUrl {
                url,
                format: non_empty(attribute(Some(link), "format")),
                link_type: non_empty(attribute(Some(link), "type")),
            }),
            MetadataShape::Href => non_empty(attribute(Some(link), "xlink:href")).map(|url| MetadataUrl {
                url,
                format: None,
                link_type: None,
            }),
        })
        .collect();

    Ok(WfsFeatureTypeSummary {
        name,
        title: optional_text(el, "Title"),
        abstract_text: optional_text(el, "Abstract"),
        bounding_box,
        default_crs: simplify_epsg_urn(&text(find_child(el, tags.default_crs, false))),
        other_crs,
        output_formats,
        keywords: (!keywords.is_empty()).then_some(keywords),
        metadata_urls: (!metadata_urls.is_empty()).then_some(metadata_urls),
    })
}

/// Parse a complete capabilities document.
pub fn parse_capabilities(document: &XmlDocument) -> OgcResult<WfsCapabilities> {
    let root_name = root(document).local_name();
    if root_name != "WFS_Capabilities" {
        return Err(OgcError::invalid_document(format!(
            "expected WFS_Capabilities, found <{}>",
            root_name
        )));
    }

    let version = read_version(document)?;
    let capabilities = WfsCapabilities {
        version,
        info: read_info(document, version),
        operation_urls: read_operation_urls(document, version),
        feature_types: read_feature_types(document, version)?,
    };

    debug!(
        version = %version,
        feature_types = capabilities.feature_types.len(),
        operations = capabilities.operation_urls.len(),
        "Parsed WFS capabilities"
    );
    Ok(capabilities)
}
