//! Configuration schema definitions for cableway.
//!
//! This module contains the struct definitions that the flag and file
//! layers populate. All structs carry serde derives with `#[serde(default)]`
//! so partial documents deserialize against factory defaults.

use serde::{Deserialize, Serialize};

use crate::config::nats::NatsConfig;

/// Root server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bind address for the public server.
    pub host: String,

    /// Embedded NATS server configuration.
    pub embedded_nats: NatsConfig,

    /// RPC client configuration.
    pub rpc: RpcConfig,

    /// Explicit preset list. `None` means "not specified" (auto-detect);
    /// `Some(vec![])` means "explicitly no presets".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_presets: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            embedded_nats: NatsConfig::default(),
            rpc: RpcConfig::default(),
            user_presets: None,
        }
    }
}

/// RPC client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpcConfig {
    /// RPC target address.
    #[serde(default = "default_rpc_host")]
    pub host: String,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            host: default_rpc_host(),
        }
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_rpc_host() -> String {
    "localhost:50051".to_string()
}
