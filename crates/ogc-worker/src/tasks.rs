//! Built-in tasks: fetch a service document and parse it.
//!
//! Every task fetches through the shared [`SharedFetch`], so concurrent tasks
//! asking for the same document cost one request.

use std::sync::Arc;

use async_trait::async_trait;
use ogc_common::{OgcError, OgcResult, XmlDocument};
use ogc_fetch::{query_json_document, query_xml_document, SharedFetch};
use ogc_protocol::check_for_exception;
use ogc_protocol::wfs::{
    self, FeatureWithProps, GetFeatureOptions, WfsCapabilities, WfsFeatureTypeFull, WfsVersion,
};
use ogc_protocol::{wms, wmts, HttpMethod};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::registry::{TaskHandler, TaskRegistry};

pub const PARSE_WFS_CAPABILITIES: &str = "parseWfsCapabilities";
pub const PARSE_WMS_CAPABILITIES: &str = "parseWmsCapabilities";
pub const PARSE_WMTS_CAPABILITIES: &str = "parseWmtsCapabilities";
pub const QUERY_WFS_FEATURE_TYPE_FULL: &str = "queryWfsFeatureTypeFull";
pub const QUERY_WFS_FEATURE_PROPS_DETAILS: &str = "queryWfsFeaturePropsDetails";

/// Parameters of the capabilities tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilitiesParams {
    /// Service endpoint
    pub url: String,
}

/// Parameters of [`QUERY_WFS_FEATURE_TYPE_FULL`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureTypeParams {
    pub url: String,
    pub version: WfsVersion,
    pub feature_type: String,
}

/// Parameters of [`QUERY_WFS_FEATURE_PROPS_DETAILS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturePropsParams {
    pub url: String,
    pub version: WfsVersion,
    pub feature_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_features: Option<u32>,
}

fn parse_params<T: DeserializeOwned>(params: Value) -> OgcResult<T> {
    Ok(serde_json::from_value(params)?)
}

fn to_value<T: Serialize>(result: &T) -> OgcResult<Value> {
    serde_json::to_value(result).map_err(|e| OgcError::invalid_document(e.to_string()))
}

/// Fetch an XML document and fail on a service exception report.
async fn fetch_document(fetch: &SharedFetch, url: &str) -> OgcResult<XmlDocument> {
    let document = query_xml_document(fetch, url).await?;
    check_for_exception(document, url)
}

/// GET URL advertised for an operation, else the service endpoint.
fn operation_url<'a>(capabilities: &'a WfsCapabilities, operation: &str, fallback: &'a str) -> &'a str {
    capabilities
        .operation_urls
        .get(operation)
        .and_then(|methods| methods.get(&HttpMethod::Get))
        .map(String::as_str)
        .unwrap_or(fallback)
}

pub struct ParseWfsCapabilities {
    fetch: Arc<SharedFetch>,
}

#[async_trait]
impl TaskHandler for ParseWfsCapabilities {
    async fn handle(&self, params: Value) -> OgcResult<Value> {
        let params: CapabilitiesParams = parse_params(params)?;
        let url = wfs::generate_get_capabilities_url(&params.url, None)?;
        let document = fetch_document(&self.fetch, &url).await?;
        to_value(&wfs::parse_capabilities(&document)?)
    }
}

pub struct ParseWmsCapabilities {
    fetch: Arc<SharedFetch>,
}

#[async_trait]
impl TaskHandler for ParseWmsCapabilities {
    async fn handle(&self, params: Value) -> OgcResult<Value> {
        let params: CapabilitiesParams = parse_params(params)?;
        let url = wms::generate_get_capabilities_url(&params.url)?;
        let document = fetch_document(&self.fetch, &url).await?;
        to_value(&wms::parse_capabilities(&document)?)
    }
}

pub struct ParseWmtsCapabilities {
    fetch: Arc<SharedFetch>,
}

#[async_trait]
impl TaskHandler for ParseWmtsCapabilities {
    async fn handle(&self, params: Value) -> OgcResult<Value> {
        let params: CapabilitiesParams = parse_params(params)?;
        let url = wmts::generate_get_capabilities_url(&params.url)?;
        let document = fetch_document(&self.fetch, &url).await?;
        to_value(&wmts::parse_capabilities(&document)?)
    }
}

/// Capabilities at the requested version and the full description of one
/// of its feature types.
async fn feature_type_full(
    fetch: &SharedFetch,
    params: &FeatureTypeParams,
) -> OgcResult<(WfsCapabilities, WfsFeatureTypeFull)> {
    let capabilities_url = wfs::generate_get_capabilities_url(&params.url, Some(params.version))?;
    let capabilities = wfs::parse_capabilities(&fetch_document(fetch, &capabilities_url).await?)?;
    let version = capabilities.version;

    let summary = capabilities
        .feature_type(&params.feature_type)
        .ok_or_else(|| OgcError::InvalidTaskParams {
            message: format!("feature type not found: {}", params.feature_type),
        })?;

    let describe_url = wfs::generate_describe_feature_type_url(
        operation_url(&capabilities, "DescribeFeatureType", &params.url),
        version,
        &summary.name,
    )?;
    let hits_url = wfs::generate_get_feature_url(
        operation_url(&capabilities, "GetFeature", &params.url),
        version,
        &summary.name,
        &GetFeatureOptions {
            hits_only: true,
            ..Default::default()
        },
    )?;

    let (describe, hits) = tokio::try_join!(
        fetch_document(fetch, &describe_url),
        fetch_document(fetch, &hits_url)
    )?;
    let full = wfs::parse_feature_type_info(summary, &describe, &hits, version);

    debug!(
        feature_type = %full.summary.name,
        properties = full.properties.len(),
        object_count = ?full.object_count,
        "Resolved feature type"
    );
    Ok((capabilities, full))
}

pub struct QueryWfsFeatureTypeFull {
    fetch: Arc<SharedFetch>,
}

#[async_trait]
impl TaskHandler for QueryWfsFeatureTypeFull {
    async fn handle(&self, params: Value) -> OgcResult<Value> {
        let params: FeatureTypeParams = parse_params(params)?;
        let (_, full) = feature_type_full(&self.fetch, &params).await?;
        to_value(&full)
    }
}

/// First JSON output format advertised for the feature type or service.
fn json_output_format(capabilities: &WfsCapabilities, full: &WfsFeatureTypeFull) -> Option<String> {
    full.summary
        .output_formats
        .iter()
        .chain(capabilities.info.output_formats.iter())
        .find(|format| format.to_ascii_lowercase().contains("json"))
        .cloned()
}

pub struct QueryWfsFeaturePropsDetails {
    fetch: Arc<SharedFetch>,
}

#[async_trait]
impl TaskHandler for QueryWfsFeaturePropsDetails {
    async fn handle(&self, params: Value) -> OgcResult<Value> {
        let params: FeaturePropsParams = parse_params(params)?;
        let (capabilities, full) = feature_type_full(
            &self.fetch,
            &FeatureTypeParams {
                url: params.url.clone(),
                version: params.version,
                feature_type: params.feature_type.clone(),
            },
        )
        .await?;
        let version = capabilities.version;
        let json_format = json_output_format(&capabilities, &full);

        let url = wfs::generate_get_feature_url(
            operation_url(&capabilities, "GetFeature", &params.url),
            version,
            &full.summary.name,
            &GetFeatureOptions {
                output_format: json_format.clone(),
                max_features: params.max_features,
                property_names: Some(full.properties.keys().cloned().collect()),
                ..Default::default()
            },
        )?;

        let features: Vec<FeatureWithProps> = match json_format {
            Some(_) => {
                let collection = query_json_document(&self.fetch, &url).await?;
                let mut features = wfs::parse_feature_props_geojson(&collection)?;
                for feature in &mut features {
                    feature
                        .properties
                        .retain(|name, _| full.properties.contains_key(name));
                }
                features
            }
            None => {
                let document = fetch_document(&self.fetch, &url).await?;
                wfs::parse_feature_props(&document, &full, version)
            }
        };

        debug!(
            feature_type = %full.summary.name,
            features = features.len(),
            "Aggregating feature properties"
        );
        to_value(&wfs::compute_feature_props_details(&features))
    }
}

/// Register every built-in task against one shared fetch cache.
pub fn register_builtin_tasks(registry: &mut TaskRegistry, fetch: Arc<SharedFetch>) {
    registry.register(
        PARSE_WFS_CAPABILITIES,
        ParseWfsCapabilities {
            fetch: Arc::clone(&fetch),
        },
    );
    registry.register(
        PARSE_WMS_CAPABILITIES,
        ParseWmsCapabilities {
            fetch: Arc::clone(&fetch),
        },
    );
    registry.register(
        PARSE_WMTS_CAPABILITIES,
        ParseWmtsCapabilities {
            fetch: Arc::clone(&fetch),
        },
    );
    registry.register(
        QUERY_WFS_FEATURE_TYPE_FULL,
        QueryWfsFeatureTypeFull {
            fetch: Arc::clone(&fetch),
        },
    );
    registry.register(QUERY_WFS_FEATURE_PROPS_DETAILS, QueryWfsFeaturePropsDetails { fetch });
}
