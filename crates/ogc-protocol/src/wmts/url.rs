//! WMTS request URL builders for the KVP and RESTful bindings.

use std::collections::BTreeMap;

use ogc_common::OgcResult;

use crate::url::set_query_params;

/// Parameters identifying a single tile.
#[derive(Debug, Clone, Default)]
pub struct GetTileOptions {
    pub layer: String,
    pub style: String,
    /// Image format; KVP only, REST templates fix the format themselves
    pub format: String,
    pub tile_matrix_set: String,
    pub tile_matrix: String,
    pub tile_row: u32,
    pub tile_col: u32,
    /// Dimension identifier to value, e.g. `Time` to `2024`
    pub dimensions: BTreeMap<String, String>,
}

/// Build a KVP GetTile URL.
pub fn generate_get_tile_url(base: &str, options: &GetTileOptions) -> OgcResult<String> {
    let mut params = vec![
        ("SERVICE", "WMTS".to_string()),
        ("REQUEST", "GetTile".to_string()),
        ("VERSION", "1.0.0".to_string()),
        ("LAYER", options.layer.clone()),
        ("STYLE", options.style.clone()),
        ("FORMAT", options.format.clone()),
        ("TILEMATRIXSET", options.tile_matrix_set.clone()),
        ("TILEMATRIX", options.tile_matrix.clone()),
        ("TILEROW", options.tile_row.to_string()),
        ("TILECOL", options.tile_col.to_string()),
    ];
    params.extend(
        options
            .dimensions
            .iter()
            .map(|(name, value)| (name.as_str(), value.clone())),
    );
    set_query_params(base, &params)
}

/// Fill a `ResourceURL` template.
///
/// Placeholders without a value are left in place.
pub fn generate_rest_tile_url(template: &str, options: &GetTileOptions) -> String {
    let mut url = template
        .replace("{TileMatrixSet}", &options.tile_matrix_set)
        .replace("{TileMatrix}", &options.tile_matrix)
        .replace("{TileRow}", &options.tile_row.to_string())
        .replace("{TileCol}", &options.tile_col.to_string())
        .replace("{Style}", &options.style)
        .replace("{Layer}", &options.layer);
    for (name, value) in &options.dimensions {
        url = url.replace(&format!("{{{}}}", name), value);
    }
    url
}

/// Build a GetCapabilities URL.
pub fn generate_get_capabilities_url(base: &str) -> OgcResult<String> {
    set_query_params(
        base,
        &[
            ("SERVICE", "WMTS".to_string()),
            ("REQUEST", "GetCapabilities".to_string()),
        ],
    )
}
