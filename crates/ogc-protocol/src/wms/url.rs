//! WMS request URL builders.

use ogc_common::{axis_order_wms_1_3, AxisOrder, BoundingBox, OgcResult};

use super::WmsVersion;
use crate::url::set_query_params;

/// GetMap request parameters.
#[derive(Debug, Clone)]
pub struct GetMapOptions {
    pub layers: Vec<String>,
    /// One entry per layer; empty means server defaults
    pub styles: Vec<String>,
    pub width: u32,
    pub height: u32,
    pub format: String,
    pub crs: String,
    /// Extent in x/y order; swapped on the wire where the CRS demands it
    pub bbox: BoundingBox,
    pub transparent: Option<bool>,
}

/// Build a GetMap URL.
///
/// WMS 1.3.0 uses the CRS axis order, so geographic EPSG extents are written
/// latitude first.
pub fn generate_get_map_url(base: &str, version: WmsVersion, options: &GetMapOptions) -> OgcResult<String> {
    let bbox = match (version, axis_order_wms_1_3(&options.crs)) {
        (WmsVersion::V1_3, AxisOrder::LatLon) => BoundingBox::new(
            options.bbox.min_y,
            options.bbox.min_x,
            options.bbox.max_y,
            options.bbox.max_x,
        ),
        _ => options.bbox,
    };

    let mut params = vec![
        ("SERVICE", "WMS".to_string()),
        ("REQUEST", "GetMap".to_string()),
        ("VERSION", version.as_str().to_string()),
        ("LAYERS", options.layers.join(",")),
        ("STYLES", options.styles.join(",")),
        ("WIDTH", options.width.to_string()),
        ("HEIGHT", options.height.to_string()),
        ("FORMAT", options.format.clone()),
        (version.crs_tag(), options.crs.clone()),
        ("BBOX", bbox.to_kvp_string()),
    ];
    if let Some(transparent) = options.transparent {
        params.push(("TRANSPARENT", transparent.to_string().to_uppercase()));
    }

    set_query_params(base, &params)
}

/// Build a GetCapabilities URL.
pub fn generate_get_capabilities_url(base: &str) -> OgcResult<String> {
    set_query_params(
        base,
        &[
            ("SERVICE", "WMS".to_string()),
            ("REQUEST", "GetCapabilities".to_string()),
        ],
    )
}
