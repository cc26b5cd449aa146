//! Feature property values from GetFeature responses.

use ogc_common::xml::{attribute, children, find_child, find_children, root, text};
use ogc_common::{OgcError, OgcResult, XmlDocument, XmlElement};
use serde_json::{Map, Number, Value};

use super::{
    FeaturePropertyType, FeaturePropsDetails, FeatureWithProps, PropertyValueCount,
    WfsFeatureTypeFull, WfsVersion,
};

fn first_child(wrapper: &XmlElement) -> Option<&XmlElement> {
    children(Some(wrapper)).into_iter().next()
}

/// Locate the feature elements of a GetFeature response.
fn feature_members(document: &XmlDocument, version: WfsVersion) -> Vec<&XmlElement> {
    let root = Some(root(document));

    match version {
        WfsVersion::V2_0_0 => find_children(root, "member", false)
            .into_iter()
            .filter_map(first_child)
            .collect(),
        _ => match find_child(root, "featureMembers", false) {
            Some(members) => children(Some(members)),
            None => find_children(root, "featureMember", false)
                .into_iter()
                .filter_map(first_child)
                .collect(),
        },
    }
}

/// Coerce element text to the declared property type.
///
/// Integers must be a whole base-10 number once surrounding whitespace is
/// trimmed; text such as `"1.5"` or `"12abc"` is kept as the raw string
/// rather than truncated to a leading prefix. Floats that fail to parse
/// are kept raw the same way. Booleans are true only for exactly `"true"`.
fn coerce(raw: String, property_type: FeaturePropertyType) -> Value {
    match property_type {
        FeaturePropertyType::Integer => match raw.trim().parse::<i64>() {
            Ok(value) => Value::from(value),
            Err(_) => Value::String(raw),
        },
        FeaturePropertyType::Float => match raw.trim().parse::<f64>().ok().and_then(Number::from_f64) {
            Some(value) => Value::Number(value),
            None => Value::String(raw),
        },
        FeaturePropertyType::Boolean => Value::Bool(raw == "true"),
        FeaturePropertyType::String => Value::String(raw),
    }
}

/// Extract typed property values for every feature in a GetFeature response.
///
/// Only properties declared in the feature type's schema are kept.
pub fn parse_feature_props(
    document: &XmlDocument,
    feature_type: &WfsFeatureTypeFull,
    version: WfsVersion,
) -> Vec<FeatureWithProps> {
    feature_members(document, version)
        .into_iter()
        .map(|member| {
            let properties: Map<String, Value> = children(Some(member))
                .into_iter()
                .filter_map(|child| {
                    let name = child.local_name();
                    let property_type = feature_type.properties.get(name)?;
                    Some((name.to_string(), coerce(text(Some(child)), *property_type)))
                })
                .collect();

            FeatureWithProps {
                id: attribute(Some(member), version.feature_id_attribute()),
                properties,
            }
        })
        .collect()
}

/// Map a GeoJSON FeatureCollection straight across, without coercion.
pub fn parse_feature_props_geojson(collection: &Value) -> OgcResult<Vec<FeatureWithProps>> {
    let features = collection
        .get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| OgcError::InvalidGeoJson {
            message: "`features` is not an array".to_string(),
        })?;

    Ok(features
        .iter()
        .map(|feature| FeatureWithProps {
            id: match feature.get("id") {
                Some(Value::String(id)) => id.clone(),
                Some(Value::Number(id)) => id.to_string(),
                _ => String::new(),
            },
            properties: feature
                .get("properties")
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default(),
        })
        .collect())
}

/// Count the distinct values of every property across a set of features.
///
/// Values compare by JSON equality, so `1` and `"1"` are distinct.
pub fn compute_feature_props_details(features: &[FeatureWithProps]) -> FeaturePropsDetails {
    let mut details = FeaturePropsDetails::new();
    for feature in features {
        for (name, value) in &feature.properties {
            let values = details.entry(name.clone()).or_default();
            match values.iter_mut().find(|entry| &entry.value == value) {
                Some(entry) => entry.count += 1,
                None => values.push(PropertyValueCount {
                    value: value.clone(),
                    count: 1,
                }),
            }
        }
    }
    details
}
