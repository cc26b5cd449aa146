//! Coordinate Reference System identifiers.
//!
//! Servers advertise the same CRS in several spellings (`EPSG:4326`,
//! `urn:ogc:def:crs:EPSG::4326`, `urn:x-ogc:def:crs:EPSG:6.9:4326`). Parsed
//! models always carry the short `EPSG:<code>` form when one exists.

use serde::{Deserialize, Serialize};

const EPSG_URN_PREFIXES: [&str; 2] = ["urn:ogc:def:crs:epsg:", "urn:x-ogc:def:crs:epsg:"];

/// Collapse an EPSG URN to `EPSG:<code>`; any other value is returned unchanged.
///
/// The match is case-insensitive and accepts an optional version segment
/// between the authority and the code.
pub fn simplify_epsg_urn(crs: &str) -> String {
    let lower = crs.trim().to_ascii_lowercase();
    let Some(rest) = EPSG_URN_PREFIXES
        .iter()
        .find_map(|prefix| lower.strip_prefix(prefix))
    else {
        return crs.to_string();
    };

    let (version, code) = rest.rsplit_once(':').unwrap_or(("", rest));
    let version_ok = version.chars().all(|c| c.is_ascii_digit() || c == '.');
    let code_ok = !code.is_empty() && code.chars().all(|c| c.is_ascii_digit());

    if version_ok && code_ok {
        format!("EPSG:{}", code)
    } else {
        crs.to_string()
    }
}

/// Numeric code of an `EPSG:<code>` identifier (URN forms accepted).
pub fn epsg_code(crs: &str) -> Option<u32> {
    let simplified = simplify_epsg_urn(crs);
    let (authority, code) = simplified.split_once(':')?;
    if !authority.eq_ignore_ascii_case("EPSG") {
        return None;
    }
    code.parse().ok()
}

/// Geographic EPSG codes whose WMS 1.3.0 axis order is latitude first.
const LAT_LON_EPSG_CODES: [u32; 3] = [4326, 4258, 4269];

/// Axis ordering for coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrder {
    /// X (easting/longitude) first, then Y (northing/latitude)
    XY,
    /// Latitude first, then longitude (EPSG geographic CRS in WMS 1.3.0)
    LatLon,
}

/// Get the axis order for a CRS in WMS 1.3.0.
///
/// WMS 1.3.0 uses the "natural" axis order of the CRS:
/// - Geographic EPSG CRS: lat, lon (y, x)
/// - Projected CRS and `CRS:84`: x, y
pub fn axis_order_wms_1_3(crs: &str) -> AxisOrder {
    match epsg_code(crs) {
        Some(code) if LAT_LON_EPSG_CODES.contains(&code) => AxisOrder::LatLon,
        _ => AxisOrder::XY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simplify_epsg_urn() {
        assert_eq!(simplify_epsg_urn("urn:ogc:def:crs:EPSG::2154"), "EPSG:2154");
        assert_eq!(simplify_epsg_urn("urn:x-ogc:def:crs:EPSG:4326"), "EPSG:4326");
        assert_eq!(
            simplify_epsg_urn("URN:OGC:DEF:CRS:EPSG:6.9:3857"),
            "EPSG:3857"
        );
    }

    #[test]
    fn test_unrelated_values_pass_through() {
        assert_eq!(
            simplify_epsg_urn("urn:ogc:def:crs:OGC:1.3:CRS84"),
            "urn:ogc:def:crs:OGC:1.3:CRS84"
        );
        assert_eq!(simplify_epsg_urn("EPSG:4326"), "EPSG:4326");
        assert_eq!(
            simplify_epsg_urn("urn:ogc:def:crs:EPSG::abc"),
            "urn:ogc:def:crs:EPSG::abc"
        );
    }

    #[test]
    fn test_epsg_code() {
        assert_eq!(epsg_code("EPSG:4326"), Some(4326));
        assert_eq!(epsg_code("urn:ogc:def:crs:EPSG::2154"), Some(2154));
        assert_eq!(epsg_code("CRS:84"), None);
    }

    #[test]
    fn test_axis_order() {
        assert_eq!(axis_order_wms_1_3("EPSG:4326"), AxisOrder::LatLon);
        assert_eq!(axis_order_wms_1_3("urn:ogc:def:crs:EPSG::4269"), AxisOrder::LatLon);
        assert_eq!(axis_order_wms_1_3("EPSG:3857"), AxisOrder::XY);
        assert_eq!(axis_order_wms_1_3("CRS:84"), AxisOrder::XY);
    }
}
