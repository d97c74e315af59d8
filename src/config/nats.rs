//! Embedded NATS server configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the embedded NATS server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NatsConfig {
    /// Enable NATS debug logging.
    pub debug: bool,

    /// Enable NATS protocol tracing.
    pub trace: bool,

    /// Address clients connect to.
    #[serde(default = "default_service_addr")]
    pub service_addr: String,

    /// Cluster listen address. Empty means clustering is disabled.
    pub cluster_addr: String,

    /// Cluster name.
    #[serde(default = "default_cluster_name")]
    pub cluster_name: String,

    /// Gateway listen address.
    pub gateway_addr: String,

    /// Gateway connection URIs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gateways: Vec<String>,

    /// Cluster route URIs. `None` means "not configured", which presets may
    /// fill in; `Some(vec![])` means the operator asked for no routes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<String>>,
}

impl Default for NatsConfig {
    fn default() -> Self {
        Self {
            debug: false,
            trace: false,
            service_addr: default_service_addr(),
            cluster_addr: String::new(),
            cluster_name: default_cluster_name(),
            gateway_addr: String::new(),
            gateways: Vec::new(),
            routes: None,
        }
    }
}

fn default_service_addr() -> String {
    "nats://127.0.0.1:4222".to_string()
}

fn default_cluster_name() -> String {
    "cableway-cluster".to_string()
}
