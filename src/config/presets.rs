//! Deployment presets.
//!
//! A preset is a named bundle of platform-specific defaults (Fly.io, Heroku)
//! applied to a [`Config`] at startup. A preset only touches fields that still
//! carry their factory value: divergence from a pristine snapshot is treated
//! as explicit operator configuration and always wins.
//!
//! All environment access goes through an injected lookup closure so tests
//! can supply synthetic environments without mutating process state.

use std::env::VarError;

use crate::config::schema::Config;
use crate::error::{CablewayError, Result};

/// Applier signature shared by all presets.
type PresetFn<F> = fn(&mut Config, &Config, &F) -> Result<()>;

/// Map a preset name to its applier. Unknown names map to `None`.
fn applier_for<F>(name: &str) -> Option<PresetFn<F>>
where
    F: Fn(&str) -> std::result::Result<String, VarError>,
{
    match name {
        "fly" => Some(apply_fly),
        "heroku" => Some(apply_heroku),
        _ => None,
    }
}

/// True iff the process runs on a Fly.io machine.
///
/// Only presence is checked, values are ignored.
fn is_fly_env<F>(env: &F) -> bool
where
    F: Fn(&str) -> std::result::Result<String, VarError>,
{
    ["FLY_APP_NAME", "FLY_ALLOC_ID", "FLY_REGION"]
        .iter()
        .all(|var| env(var).is_ok())
}

/// True iff the process runs in a Heroku dyno.
fn is_heroku_env<F>(env: &F) -> bool
where
    F: Fn(&str) -> std::result::Result<String, VarError>,
{
    ["HEROKU_APP_ID", "HEROKU_DYNO_ID"]
        .iter()
        .all(|var| env(var).is_ok())
}

impl Config {
    /// Resolve the presets to apply, reading the process environment.
    pub fn presets(&self) -> Vec<String> {
        self.presets_with_env(|var| std::env::var(var))
    }

    /// Resolve the presets to apply with a custom env lookup.
    ///
    /// An explicit `user_presets` list (including an empty one) is returned
    /// verbatim and bypasses platform detection entirely. Otherwise the
    /// result is `["fly"]` and/or `["heroku"]`, in that fixed order.
    pub fn presets_with_env<F>(&self, env: F) -> Vec<String>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        if let Some(user) = &self.user_presets {
            return user.clone();
        }

        let mut presets = Vec::new();

        if is_fly_env(&env) {
            presets.push("fly".to_string());
        }

        if is_heroku_env(&env) {
            presets.push("heroku".to_string());
        }

        presets
    }

    /// Resolve and apply presets against the process environment.
    pub fn load_presets(&mut self) -> Result<()> {
        self.load_presets_with_env(|var| std::env::var(var))
    }

    /// Resolve and apply presets with a custom env lookup.
    ///
    /// Presets run in resolution order against a single pristine snapshot;
    /// the first failing preset aborts the operation and later presets do
    /// not run. Unknown preset names are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`CablewayError::MissingEnv`] when a selected preset requires
    /// an environment variable that is absent.
    pub fn load_presets_with_env<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let presets = self.presets_with_env(&env);

        if presets.is_empty() {
            return Ok(());
        }

        tracing::info!(context = "config", "Load presets: {}", presets.join(","));

        let defaults = Config::default();

        for preset in &presets {
            match applier_for(preset) {
                Some(apply) => apply(self, &defaults, &env)?,
                None => tracing::warn!(context = "config", "Unknown preset: {}", preset),
            }
        }

        Ok(())
    }
}

/// Fly.io preset.
///
/// Required variables are checked before any field is touched, so a failed
/// preset leaves the config exactly as it was.
fn apply_fly<F>(config: &mut Config, defaults: &Config, env: &F) -> Result<()>
where
    F: Fn(&str) -> std::result::Result<String, VarError>,
{
    let region = env("FLY_REGION").map_err(|_| CablewayError::missing_env("FLY_REGION"))?;
    let app_name = env("FLY_APP_NAME").map_err(|_| CablewayError::missing_env("FLY_APP_NAME"))?;

    if config.host == defaults.host {
        config.host = "0.0.0.0".to_string();
    }

    if config.embedded_nats.service_addr == defaults.embedded_nats.service_addr {
        config.embedded_nats.service_addr = "nats://0.0.0.0:4222".to_string();
    }

    if config.embedded_nats.cluster_addr == defaults.embedded_nats.cluster_addr {
        config.embedded_nats.cluster_addr = "nats://0.0.0.0:5222".to_string();
    }

    if config.embedded_nats.cluster_name == defaults.embedded_nats.cluster_name {
        config.embedded_nats.cluster_name = format!("{}-{}-cluster", app_name, region);
    }

    // Routes are gated on being unconfigured, not on equality with the
    // default: an explicit empty list means "no routes" and is kept.
    if config.embedded_nats.routes.is_none() {
        config.embedded_nats.routes =
            Some(vec![format!("nats://{}.{}.internal:5222", region, app_name)]);
    }

    // Optional companion RPC app on the same Fly private network.
    if let Ok(rpc_name) = env("ANYCABLE_FLY_RPC_APP_NAME") {
        if config.rpc.host == defaults.rpc.host {
            config.rpc.host = format!("dns:///{}.{}.internal:50051", region, rpc_name);
        }
    }

    Ok(())
}

/// Heroku preset. Reads no environment variables and cannot fail.
fn apply_heroku<F>(config: &mut Config, defaults: &Config, _env: &F) -> Result<()>
where
    F: Fn(&str) -> std::result::Result<String, VarError>,
{
    if config.host == defaults.host {
        config.host = "0.0.0.0".to_string();
    }

    Ok(())
}
