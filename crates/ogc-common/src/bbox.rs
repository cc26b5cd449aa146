//! Bounding box types and operations.

use serde::{Deserialize, Serialize};

/// A geographic or projected bounding box.
///
/// Capabilities documents advertise geographic extents in degrees
/// (longitude first); WMS layer bounding boxes may use any advertised CRS.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Build from four textual values (attribute or element contents).
    ///
    /// Returns `None` unless all four values parse as finite numbers.
    pub fn from_strs(min_x: &str, min_y: &str, max_x: &str, max_y: &str) -> Option<Self> {
        let parse = |s: &str| s.trim().parse::<f64>().ok().filter(|v| v.is_finite());
        Some(Self::new(
            parse(min_x)?,
            parse(min_y)?,
            parse(max_x)?,
            parse(max_y)?,
        ))
    }

    /// Build from OWS `LowerCorner` / `UpperCorner` contents: "x y" pairs.
    pub fn from_corners(lower: &str, upper: &str) -> Option<Self> {
        let mut lower = lower.split_whitespace();
        let mut upper = upper.split_whitespace();
        Self::from_strs(lower.next()?, lower.next()?, upper.next()?, upper.next()?)
    }

    /// Serialize as a KVP BBOX value: "minx,miny,maxx,maxy".
    pub fn to_kvp_string(&self) -> String {
        format!("{},{},{},{}", self.min_x, self.min_y, self.max_x, self.max_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners() {
        let bbox = BoundingBox::from_corners("-5.14 41.33", "9.56 51.09").unwrap();
        assert_eq!(bbox.min_x, -5.14);
        assert_eq!(bbox.min_y, 41.33);
        assert_eq!(bbox.max_x, 9.56);
        assert_eq!(bbox.max_y, 51.09);
    }

    #[test]
    fn test_from_corners_incomplete() {
        assert!(BoundingBox::from_corners("-5.14", "9.56 51.09").is_none());
        assert!(BoundingBox::from_corners("", "").is_none());
    }

    #[test]
    fn test_from_strs_rejects_non_numeric() {
        assert!(BoundingBox::from_strs("1", "2", "3", "abc").is_none());
        assert!(BoundingBox::from_strs("1", "2", "3", "").is_none());
        assert!(BoundingBox::from_strs(" 1", "2 ", "3", "4").is_some());
    }

    #[test]
    fn test_kvp_string() {
        let bbox = BoundingBox::new(-125.0, 24.5, -66.0, 50.0);
        assert_eq!(bbox.to_kvp_string(), "-125,24.5,-66,50");
    }
}
