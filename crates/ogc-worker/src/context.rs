//! Client composition root.

use std::sync::Arc;

use ogc_common::OgcResult;
use ogc_fetch::{FetchConfig, FetchError, HttpTransport, ReqwestTransport, SharedFetch};
use ogc_protocol::wfs::{FeaturePropsDetails, WfsCapabilities, WfsFeatureTypeFull, WfsVersion};
use ogc_protocol::{WmsCapabilities, WmtsCapabilities};
use serde::{Deserialize, Serialize};

use crate::dispatcher::Dispatcher;
use crate::registry::TaskRegistry;
use crate::tasks::{self, CapabilitiesParams, FeaturePropsParams, FeatureTypeParams};

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub fetch: FetchConfig,

    /// Run tasks on the worker context. When false every task runs
    /// in-process from the start.
    pub use_worker: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            use_worker: true,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self {
            fetch: FetchConfig::from_env(),
            ..Self::default()
        };

        if let Ok(val) = std::env::var("OGC_CLIENT_DISABLE_WORKER") {
            if is_truthy(&val) {
                config.use_worker = false;
            }
        }

        config
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

/// Owns the fetch cache, task registry and dispatcher for one client.
#[derive(Debug)]
pub struct OgcClient {
    fetch: Arc<SharedFetch>,
    dispatcher: Dispatcher,
}

impl OgcClient {
    /// Build a client over a `reqwest` transport.
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        config.fetch.validate().map_err(FetchError::new)?;
        let transport = ReqwestTransport::new(&config.fetch)?;
        Ok(Self::with_transport(Arc::new(transport), &config))
    }

    /// Build a client over any transport.
    pub fn with_transport(transport: Arc<dyn HttpTransport>, config: &ClientConfig) -> Self {
        let fetch = Arc::new(SharedFetch::new(transport, &config.fetch));
        let mut registry = TaskRegistry::new();
        tasks::register_builtin_tasks(&mut registry, Arc::clone(&fetch));

        Self {
            fetch,
            dispatcher: Dispatcher::new(Arc::new(registry), config.use_worker),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn shared_fetch(&self) -> &SharedFetch {
        &self.fetch
    }

    /// Run every following task in-process.
    pub fn enable_fallback(&self) {
        self.dispatcher.enable_fallback();
    }

    pub async fn wfs_capabilities(&self, url: &str) -> OgcResult<WfsCapabilities> {
        self.dispatcher
            .dispatch_as(tasks::PARSE_WFS_CAPABILITIES, &capabilities_params(url))
            .await
    }

    pub async fn wms_capabilities(&self, url: &str) -> OgcResult<WmsCapabilities> {
        self.dispatcher
            .dispatch_as(tasks::PARSE_WMS_CAPABILITIES, &capabilities_params(url))
            .await
    }

    pub async fn wmts_capabilities(&self, url: &str) -> OgcResult<WmtsCapabilities> {
        self.dispatcher
            .dispatch_as(tasks::PARSE_WMTS_CAPABILITIES, &capabilities_params(url))
            .await
    }

    /// Describe a feature type with its properties, geometry and object count.
    pub async fn wfs_feature_type_full(
        &self,
        url: &str,
        version: WfsVersion,
        feature_type: &str,
    ) -> OgcResult<WfsFeatureTypeFull> {
        let params = FeatureTypeParams {
            url: url.to_string(),
            version,
            feature_type: feature_type.to_string(),
        };
        self.dispatcher
            .dispatch_as(tasks::QUERY_WFS_FEATURE_TYPE_FULL, &params)
            .await
    }

    /// Count the distinct values of each property over up to `max_features`
    /// features.
    pub async fn wfs_feature_props_details(
        &self,
        url: &str,
        version: WfsVersion,
        feature_type: &str,
        max_features: Option<u32>,
    ) -> OgcResult<FeaturePropsDetails> {
        let params = FeaturePropsParams {
            url: url.to_string(),
            version,
            feature_type: feature_type.to_string(),
            max_features,
        };
        self.dispatcher
            .dispatch_as(tasks::QUERY_WFS_FEATURE_PROPS_DETAILS, &params)
            .await
    }
}

fn capabilities_params(url: &str) -> CapabilitiesParams {
    CapabilitiesParams {
        url: url.to_string(),
    }
}
