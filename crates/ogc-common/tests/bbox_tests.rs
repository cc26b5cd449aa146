//! Tests for BoundingBox construction from capabilities values.

use ogc_common::bbox::BoundingBox;
use test_utils::assert_approx_eq;

// ============================================================================
// Constructor tests
// ============================================================================

#[test]
fn test_bbox_new() {
    let bbox = BoundingBox::new(-180.0, -90.0, 180.0, 90.0);
    assert_eq!(bbox.min_x, -180.0);
    assert_eq!(bbox.min_y, -90.0);
    assert_eq!(bbox.max_x, 180.0);
    assert_eq!(bbox.max_y, 90.0);
}

#[test]
fn test_bbox_from_attribute_strings() {
    let bbox = BoundingBox::from_strs("-124.731422", "24.955967", "-66.969849", "49.371735").unwrap();
    assert_approx_eq!(bbox.min_x, -124.731422, 1e-9);
    assert_approx_eq!(bbox.max_y, 49.371735, 1e-9);
}

#[test]
fn test_bbox_from_strs_rejects_non_finite() {
    assert!(BoundingBox::from_strs("NaN", "0", "1", "1").is_none());
    assert!(BoundingBox::from_strs("inf", "0", "1", "1").is_none());
}

#[test]
fn test_bbox_from_corners_ignores_extra_whitespace() {
    let bbox = BoundingBox::from_corners("  1.3   48.5 ", "2.6\n49.2").unwrap();
    assert_approx_eq!(bbox.min_x, 1.3, 1e-9);
    assert_approx_eq!(bbox.min_y, 48.5, 1e-9);
    assert_approx_eq!(bbox.max_x, 2.6, 1e-9);
    assert_approx_eq!(bbox.max_y, 49.2, 1e-9);
}

// ============================================================================
// KVP string tests
// ============================================================================

#[test]
fn test_kvp_string_output() {
    let bbox = BoundingBox::new(1.3, 48.5, 2.6, 49.2);
    assert_eq!(bbox.to_kvp_string(), "1.3,48.5,2.6,49.2");
}

#[test]
fn test_bbox_serializes_with_snake_case_fields() {
    let bbox = BoundingBox::new(0.0, 1.0, 2.0, 3.0);
    let json = serde_json::to_value(bbox).unwrap();
    assert_eq!(json["min_x"], 0.0);
    assert_eq!(json["max_y"], 3.0);
}
