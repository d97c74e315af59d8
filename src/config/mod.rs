//! Configuration schema and resolution for cableway.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - Embedded NATS options in [`nats`]
//! - Deployment preset resolution in [`presets`]
//!
//! # Example
//!
//! ```
//! use cableway::config::Config;
//!
//! let mut config = Config::default();
//! let env = |var: &str| match var {
//!     "FLY_APP_NAME" => Ok("myapp".to_string()),
//!     "FLY_ALLOC_ID" => Ok("abc123".to_string()),
//!     "FLY_REGION" => Ok("iad".to_string()),
//!     _ => Err(std::env::VarError::NotPresent),
//! };
//!
//! assert_eq!(config.presets_with_env(env), vec!["fly"]);
//! config.load_presets_with_env(env).unwrap();
//! assert_eq!(config.host, "0.0.0.0");
//! ```
//!
//! # Resolution order
//!
//! 1. An explicit `user_presets` list (from flags/files) wins outright,
//!    even when it is empty.
//! 2. Otherwise presets are auto-detected from well-known platform
//!    environment variables: Fly.io first, then Heroku.

pub mod nats;
pub mod presets;
pub mod schema;

// Schema re-exports
pub use nats::NatsConfig;
pub use schema::{Config, RpcConfig};
