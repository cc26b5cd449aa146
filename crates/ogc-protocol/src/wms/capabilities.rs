//! WMS capabilities parsing.
//!
//! Layers inherit CRS, styles, extents and attribution from their ancestors;
//! the parsed tree carries the resolved values on every layer.

use std::collections::BTreeMap;

use ogc_common::xml::{attribute, children, find_child, find_children, find_path, root, text};
use ogc_common::{simplify_epsg_urn, BoundingBox, OgcError, OgcResult, XmlDocument, XmlElement};
use tracing::debug;

use super::{
    WmsCapabilities, WmsDimension, WmsLayer, WmsLayerAttribution, WmsLayerStyle, WmsServiceInfo,
    WmsVersion,
};
use crate::service::{
    child_texts, non_empty, optional_text, path_text, read_keyword_list, Contact, HttpMethod,
    OperationUrls, Provider,
};

/// Read the protocol version from the root `version` attribute.
pub fn read_version(document: &XmlDocument) -> OgcResult<WmsVersion> {
    WmsVersion::parse(&attribute(Some(root(document)), "version"))
}

/// Read service identification, contact details and supported formats.
pub fn read_info(document: &XmlDocument) -> WmsServiceInfo {
    let root = Some(root(document));
    let service = find_child(root, "Service", false);
    let request = find_path(root, &["Capability", "Request"]);

    WmsServiceInfo {
        title: text(find_child(service, "Title", false)),
        name: text(find_child(service, "Name", false)),
        abstract_text: text(find_child(service, "Abstract", false)),
        fees: text(find_child(service, "Fees", false)),
        constraints: text(find_child(service, "AccessConstraints", false)),
        keywords: read_keyword_list(service, "KeywordList"),
        provider: read_provider(service),
        output_formats: child_texts(find_child(request, "GetMap", false), "Format"),
        info_formats: child_texts(find_child(request, "GetFeatureInfo", false), "Format"),
        exception_formats: child_texts(find_path(root, &["Capability", "Exception"]), "Format"),
    }
}

fn read_provider(service: Option<&XmlElement>) -> Option<Provider> {
    let info = find_child(service, "ContactInformation", false)?;
    let info = Some(info);
    let person = find_child(info, "ContactPersonPrimary", false);
    let address = find_child(info, "ContactAddress", false);

    Some(Provider {
        name: text(find_child(person, "ContactOrganization", false)),
        site: attribute(find_child(service, "OnlineResource", false), "xlink:href"),
        contact: Contact {
            name: text(find_child(person, "ContactPerson", false)),
            position: text(find_child(info, "ContactPosition", false)),
            phone: text(find_child(info, "ContactVoiceTelephone", false)),
            fax: text(find_child(info, "ContactFacsimileTelephone", false)),
            address: text(find_child(address, "Address", false)),
            city: text(find_child(address, "City", false)),
            administrative_area: text(find_child(address, "StateOrProvince", false)),
            postal_code: text(find_child(address, "PostCode", false)),
            country: text(find_child(address, "Country", false)),
            email: text(find_child(info, "ContactElectronicMailAddress", false)),
        },
    })
}

/// Read `Capability/Request/<Op>/DCPType/HTTP/<Method>/OnlineResource` URLs.
pub fn read_operation_urls(document: &XmlDocument) -> OperationUrls {
    let request = find_path(Some(root(document)), &["Capability", "Request"]);
    let mut urls = OperationUrls::new();

    for operation in children(request) {
        let methods = urls.entry(operation.local_name().to_string()).or_default();
        for http in find_children(Some(operation), "DCPType", false)
            .into_iter()
            .filter_map(|dcp| find_child(Some(dcp), "HTTP", false))
        {
            for endpoint in children(Some(http)) {
                let Some(method) = HttpMethod::from_tag(endpoint.local_name()) else {
                    continue;
                };
                let href = attribute(find_child(Some(endpoint), "OnlineResource", false), "xlink:href");
                if !href.is_empty() {
                    methods.entry(method).or_insert(href);
                }
            }
        }
    }
    urls
}

/// Properties a layer passes down to its children.
#[derive(Debug, Clone, Default)]
struct Inherited {
    crs: Vec<String>,
    styles: Vec<WmsLayerStyle>,
    geographic_bounding_box: Option<BoundingBox>,
    bounding_boxes: BTreeMap<String, BoundingBox>,
    attribution: Option<WmsLayerAttribution>,
}

/// Read the layer tree under `Capability`.
pub fn read_layers(document: &XmlDocument, version: WmsVersion) -> Vec<WmsLayer> {
    let capability = find_child(Some(root(document)), "Capability", false);
    find_children(capability, "Layer", false)
        .into_iter()
        .map(|layer| read_layer(layer, version, &Inherited::default()))
        .collect()
}

fn read_layer(layer: &XmlElement, version: WmsVersion, inherited: &Inherited) -> WmsLayer {
    let el = Some(layer);

    let mut available_crs = inherited.crs.clone();
    for crs in child_texts(el, version.crs_tag()) {
        let crs = simplify_epsg_urn(&crs);
        if !available_crs.contains(&crs) {
            available_crs.push(crs);
        }
    }

    let mut styles = inherited.styles.clone();
    for style in find_children(el, "Style", false).into_iter().map(read_style) {
        if !styles.iter().any(|existing| existing.name == style.name) {
            styles.push(style);
        }
    }

    let mut bounding_boxes = inherited.bounding_boxes.clone();
    for bbox in find_children(el, "BoundingBox", false) {
        let crs = attribute(Some(bbox), version.crs_tag());
        let extent = BoundingBox::from_strs(
            &attribute(Some(bbox), "minx"),
            &attribute(Some(bbox), "miny"),
            &attribute(Some(bbox), "maxx"),
            &attribute(Some(bbox), "maxy"),
        );
        if let (false, Some(extent)) = (crs.is_empty(), extent) {
            bounding_boxes.insert(simplify_epsg_urn(&crs), extent);
        }
    }

    let geographic_bounding_box =
        read_geographic_bbox(layer, version).or(inherited.geographic_bounding_box);
    let attribution = read_attribution(layer).or_else(|| inherited.attribution.clone());

    let passed_down = Inherited {
        crs: available_crs.clone(),
        styles: styles.clone(),
        geographic_bounding_box,
        bounding_boxes: bounding_boxes.clone(),
        attribution: attribution.clone(),
    };
    let children = find_children(el, "Layer", false)
        .into_iter()
        .map(|child| read_layer(child, version, &passed_down))
        .collect();

    WmsLayer {
        name: optional_text(el, "Name"),
        title: text(find_child(el, "Title", false)),
        abstract_text: optional_text(el, "Abstract"),
        available_crs,
        styles,
        attribution,
        geographic_bounding_box,
        bounding_boxes,
        keywords: read_keyword_list(el, "KeywordList"),
        queryable: flag(&attribute(el, "queryable")),
        opaque: flag(&attribute(el, "opaque")),
        dimensions: read_dimensions(layer, version),
        children,
    }
}

fn flag(value: &str) -> bool {
    matches!(value.trim(), "1" | "true")
}

fn read_style(style: &XmlElement) -> WmsLayerStyle {
    let el = Some(style);
    let legend = find_path(el, &["LegendURL", "OnlineResource"]);
    WmsLayerStyle {
        name: text(find_child(el, "Name", false)),
        title: text(find_child(el, "Title", false)),
        legend_url: non_empty(attribute(legend, "xlink:href")),
    }
}

fn read_geographic_bbox(layer: &XmlElement, version: WmsVersion) -> Option<BoundingBox> {
    match version {
        WmsVersion::V1_3 => {
            let bbox = find_child(Some(layer), "EX_GeographicBoundingBox", false)?;
            let bbox = Some(bbox);
            BoundingBox::from_strs(
                &path_text(bbox, &["westBoundLongitude"]),
                &path_text(bbox, &["southBoundLatitude"]),
                &path_text(bbox, &["eastBoundLongitude"]),
                &path_text(bbox, &["northBoundLatitude"]),
            )
        }
        WmsVersion::V1_1 => {
            let bbox = find_child(Some(layer), "LatLonBoundingBox", false)?;
            let bbox = Some(bbox);
            BoundingBox::from_strs(
                &attribute(bbox, "minx"),
                &attribute(bbox, "miny"),
                &attribute(bbox, "maxx"),
                &attribute(bbox, "maxy"),
            )
        }
    }
}

fn read_attribution(layer: &XmlElement) -> Option<WmsLayerAttribution> {
    let attribution = Some(find_child(Some(layer), "Attribution", false)?);
    Some(WmsLayerAttribution {
        title: optional_text(attribution, "Title"),
        url: non_empty(attribute(find_child(attribution, "OnlineResource", false), "xlink:href")),
        logo_url: non_empty(attribute(
            find_path(attribution, &["LogoURL", "OnlineResource"]),
            "xlink:href",
        )),
    })
}

/// 1.3.0 carries extent and default on `Dimension`; 1.1.x splits them into a
/// matching `Extent` element.
fn read_dimensions(layer: &XmlElement, version: WmsVersion) -> Vec<WmsDimension> {
    let el = Some(layer);
    find_children(el, "Dimension", false)
        .into_iter()
        .map(|dimension| {
            let name = attribute(Some(dimension), "name");
            let source = match version {
                WmsVersion::V1_3 => Some(dimension),
                WmsVersion::V1_1 => find_children(el, "Extent", false)
                    .into_iter()
                    .find(|extent| attribute(Some(*extent), "name") == name),
            };
            WmsDimension {
                units: attribute(Some(dimension), "units"),
                default: non_empty(attribute(source, "default")),
                values: text(source),
                name,
            }
        })
        .collect()
}

/// Parse a complete capabilities document.
pub fn parse_capabilities(document: &XmlDocument) -> OgcResult<WmsCapabilities> {
    let root_name = root(document).local_name();
    if root_name != "WMS_Capabilities" && root_name != "WMT_MS_Capabilities" {
        return Err(OgcError::invalid_document(format!(
            "expected WMS_Capabilities, found <{}>",
            root_name
        )));
    }

    let version = read_version(document)?;
    let capabilities = WmsCapabilities {
        version,
        info: read_info(document),
        operation_urls: read_operation_urls(document),
        layers: read_layers(document, version),
    };

    debug!(
        version = %version,
        root_layers = capabilities.layers.len(),
        "Parsed WMS capabilities"
    );
    Ok(capabilities)
}
