//! WMTS capabilities parsing.

use ogc_common::xml::{attribute, children, find_child, find_children, find_path, root, text};
use ogc_common::{
    simplify_epsg_urn, BoundingBox, OgcError, OgcResult, TileMatrix, TileMatrixSet, XmlDocument,
    XmlElement,
};
use tracing::{debug, warn};

use super::{
    RequestEncoding, ResourceUrl, TileMatrixLimits, TileMatrixSetLink, WmtsCapabilities,
    WmtsDimension, WmtsLayer, WmtsLayerStyle, WmtsOperationUrl, WmtsOperationUrls,
    WmtsServiceInfo,
};
use crate::service::{
    child_texts, non_empty, optional_text, read_keyword_list, read_ows_provider, HttpMethod,
};

/// Read service identification and provider.
pub fn read_info(document: &XmlDocument) -> WmtsServiceInfo {
    let root = root(document);
    let service = find_child(Some(root), "ServiceIdentification", false);

    WmtsServiceInfo {
        title: text(find_child(service, "Title", false)),
        name: text(find_child(service, "ServiceType", false)),
        abstract_text: text(find_child(service, "Abstract", false)),
        fees: text(find_child(service, "Fees", false)),
        constraints: text(find_child(service, "AccessConstraints", false)),
        keywords: read_keyword_list(service, "Keywords"),
        provider: read_ows_provider(root),
    }
}

/// Encoding declared by an endpoint's `GetEncoding` constraint.
fn read_encoding(endpoint: &XmlElement) -> Option<RequestEncoding> {
    let constraint = find_children(Some(endpoint), "Constraint", false)
        .into_iter()
        .find(|constraint| attribute(Some(*constraint), "name") == "GetEncoding")?;
    find_children(find_child(Some(constraint), "AllowedValues", false), "Value", false)
        .into_iter()
        .find_map(|value| RequestEncoding::parse(&text(Some(value))))
}

/// Read every endpoint of every operation, tagged with its encoding.
pub fn read_operation_urls(document: &XmlDocument) -> WmtsOperationUrls {
    let metadata = find_child(Some(root(document)), "OperationsMetadata", false);
    let mut urls = WmtsOperationUrls::new();

    for operation in find_children(metadata, "Operation", false) {
        let name = attribute(Some(operation), "name");
        if name.is_empty() {
            continue;
        }
        let endpoints = urls.entry(name).or_default();
        for http in find_children(Some(operation), "DCP", false)
            .into_iter()
            .filter_map(|dcp| find_child(Some(dcp), "HTTP", false))
        {
            for endpoint in children(Some(http)) {
                let Some(method) = HttpMethod::from_tag(endpoint.local_name()) else {
                    continue;
                };
                let url = attribute(Some(endpoint), "xlink:href");
                if url.is_empty() {
                    continue;
                }
                endpoints.push(WmtsOperationUrl {
                    method,
                    url,
                    encoding: read_encoding(endpoint),
                });
            }
        }
    }
    urls
}

fn parse_pair(value: &str) -> Option<(f64, f64)> {
    let mut parts = value.split_whitespace().map(str::parse::<f64>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(x)), Some(Ok(y)), None) => Some((x, y)),
        _ => None,
    }
}

fn parse_number<T: std::str::FromStr>(parent: Option<&XmlElement>, name: &str) -> Option<T> {
    text(find_child(parent, name, false)).parse().ok()
}

fn read_tile_matrix(matrix: &XmlElement) -> Option<TileMatrix> {
    let el = Some(matrix);
    Some(TileMatrix {
        identifier: text(find_child(el, "Identifier", false)),
        scale_denominator: parse_number(el, "ScaleDenominator")?,
        top_left_corner: parse_pair(&text(find_child(el, "TopLeftCorner", false)))?,
        tile_width: parse_number(el, "TileWidth")?,
        tile_height: parse_number(el, "TileHeight")?,
        matrix_width: parse_number(el, "MatrixWidth")?,
        matrix_height: parse_number(el, "MatrixHeight")?,
    })
}

fn read_corners(parent: Option<&XmlElement>) -> Option<BoundingBox> {
    BoundingBox::from_corners(
        &text(find_child(parent, "LowerCorner", false)),
        &text(find_child(parent, "UpperCorner", false)),
    )
}

fn read_tile_matrix_set(set: &XmlElement) -> TileMatrixSet {
    let el = Some(set);
    let identifier = text(find_child(el, "Identifier", false));

    let tile_matrices = find_children(el, "TileMatrix", false)
        .into_iter()
        .filter_map(|matrix| {
            let parsed = read_tile_matrix(matrix);
            if parsed.is_none() {
                warn!(
                    tile_matrix_set = %identifier,
                    tile_matrix = %text(find_child(Some(matrix), "Identifier", false)),
                    "Skipping tile matrix with missing or invalid values"
                );
            }
            parsed
        })
        .collect();

    TileMatrixSet {
        crs: simplify_epsg_urn(&text(find_child(el, "SupportedCRS", false))),
        bounding_box: read_corners(find_child(el, "BoundingBox", false)),
        well_known_scale_set: optional_text(el, "WellKnownScaleSet"),
        tile_matrices,
        identifier,
    }
}

fn read_style(style: &XmlElement) -> WmtsLayerStyle {
    let el = Some(style);
    WmtsLayerStyle {
        identifier: text(find_child(el, "Identifier", false)),
        title: optional_text(el, "Title"),
        legend_url: non_empty(attribute(find_child(el, "LegendURL", false), "xlink:href")),
        is_default: attribute(el, "isDefault") == "true",
    }
}

fn read_limits(limits: &XmlElement) -> Option<TileMatrixLimits> {
    let el = Some(limits);
    Some(TileMatrixLimits {
        tile_matrix: text(find_child(el, "TileMatrix", false)),
        min_tile_row: parse_number(el, "MinTileRow")?,
        max_tile_row: parse_number(el, "MaxTileRow")?,
        min_tile_col: parse_number(el, "MinTileCol")?,
        max_tile_col: parse_number(el, "MaxTileCol")?,
    })
}

fn read_tile_matrix_set_link(link: &XmlElement) -> TileMatrixSetLink {
    let el = Some(link);
    TileMatrixSetLink {
        identifier: text(find_child(el, "TileMatrixSet", false)),
        limits: find_children(find_child(el, "TileMatrixSetLimits", false), "TileMatrixLimits", false)
            .into_iter()
            .filter_map(read_limits)
            .collect(),
    }
}

fn read_resource_urls(layer: &XmlElement, resource_type: &str) -> Vec<ResourceUrl> {
    find_children(Some(layer), "ResourceURL", false)
        .into_iter()
        .filter(|resource| attribute(Some(*resource), "resourceType") == resource_type)
        .map(|resource| ResourceUrl {
            format: attribute(Some(resource), "format"),
            template: attribute(Some(resource), "template"),
        })
        .filter(|resource| !resource.template.is_empty())
        .collect()
}

fn read_layer(layer: &XmlElement) -> WmtsLayer {
    let el = Some(layer);
    let styles: Vec<WmtsLayerStyle> = find_children(el, "Style", false)
        .into_iter()
        .map(read_style)
        .collect();
    let default_style = styles
        .iter()
        .find(|style| style.is_default)
        .or_else(|| styles.first())
        .map(|style| style.identifier.clone());

    WmtsLayer {
        identifier: text(find_child(el, "Identifier", false)),
        title: optional_text(el, "Title"),
        abstract_text: optional_text(el, "Abstract"),
        bounding_box: read_corners(find_child(el, "WGS84BoundingBox", false)),
        styles,
        default_style,
        formats: child_texts(el, "Format"),
        info_formats: child_texts(el, "InfoFormat"),
        dimensions: find_children(el, "Dimension", false)
            .into_iter()
            .map(|dimension| WmtsDimension {
                identifier: text(find_child(Some(dimension), "Identifier", false)),
                default: text(find_child(Some(dimension), "Default", false)),
                values: child_texts(Some(dimension), "Value"),
            })
            .collect(),
        tile_matrix_set_links: find_children(el, "TileMatrixSetLink", false)
            .into_iter()
            .map(read_tile_matrix_set_link)
            .collect(),
        resource_urls: read_resource_urls(layer, "tile"),
        info_urls: read_resource_urls(layer, "FeatureInfo"),
    }
}

/// Parse a complete capabilities document.
pub fn parse_capabilities(document: &XmlDocument) -> OgcResult<WmtsCapabilities> {
    let root_el = root(document);
    if root_el.local_name() != "Capabilities" {
        return Err(OgcError::invalid_document(format!(
            "expected WMTS Capabilities, found <{}>",
            root_el.local_name()
        )));
    }

    let version = non_empty(attribute(Some(root_el), "version")).unwrap_or_else(|| "1.0.0".to_string());
    if !version.starts_with("1.0") {
        return Err(OgcError::UnsupportedVersion {
            protocol: "WMTS".to_string(),
            version,
        });
    }

    let contents = find_path(Some(root_el), &["Contents"]);
    let capabilities = WmtsCapabilities {
        info: read_info(document),
        operation_urls: read_operation_urls(document),
        tile_matrix_sets: find_children(contents, "TileMatrixSet", false)
            .into_iter()
            .map(read_tile_matrix_set)
            .collect(),
        layers: find_children(contents, "Layer", false)
            .into_iter()
            .map(read_layer)
            .collect(),
        version,
    };

    debug!(
        layers = capabilities.layers.len(),
        tile_matrix_sets = capabilities.tile_matrix_sets.len(),
        "Parsed WMTS capabilities"
    );
    Ok(capabilities)
}
