//! Cableway - configuration layer for an AnyCable-compatible realtime server.
//!
//! Cableway owns the server's configuration schema and its resolution rules:
//! factory defaults, serde-friendly structs the flag/file layers populate, and
//! deployment presets that adapt a config to well-known hosting platforms
//! (Fly.io, Heroku) without clobbering values the operator has set explicitly.
//!
//! # Modules
//!
//! - [`config`] - Configuration schema, defaults, and preset resolution
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use cableway::config::Config;
//!
//! let mut config = Config::default();
//! config.host = "10.0.0.5".to_string();
//!
//! // No Fly/Heroku variables in a clean environment: nothing to apply.
//! config.load_presets_with_env(|_| Err(std::env::VarError::NotPresent)).unwrap();
//! assert_eq!(config.host, "10.0.0.5");
//! ```

pub mod config;
pub mod error;

pub use error::{CablewayError, Result};
