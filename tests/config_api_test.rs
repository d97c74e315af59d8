//! Integration tests for config module public API.

use cableway::config::{Config, NatsConfig, RpcConfig};
use cableway::CablewayError;
use std::collections::HashMap;
use std::env::VarError;

fn make_env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, VarError> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned().ok_or(VarError::NotPresent)
}

#[test]
fn public_api_is_accessible() {
    // Verify types are exported correctly
    let _config = Config::default();
    let _nats = NatsConfig::default();
    let _rpc = RpcConfig::default();
}

#[test]
fn full_preset_workflow_from_yaml() {
    // A config pre-populated by the file layer, then resolved on Fly.
    let mut config: Config = serde_yaml::from_str(
        r#"
host: 172.16.0.3
embedded_nats:
  debug: true
"#,
    )
    .unwrap();

    let env = make_env(&[
        ("FLY_APP_NAME", "chat"),
        ("FLY_ALLOC_ID", "4d2"),
        ("FLY_REGION", "ams"),
        ("ANYCABLE_FLY_RPC_APP_NAME", "chat-rpc"),
    ]);

    assert_eq!(config.presets_with_env(&env), vec!["fly"]);
    config.load_presets_with_env(&env).unwrap();

    // Operator values survive, factory values get the preset treatment.
    assert_eq!(config.host, "172.16.0.3");
    assert!(config.embedded_nats.debug);
    assert_eq!(config.embedded_nats.cluster_name, "chat-ams-cluster");
    assert_eq!(
        config.embedded_nats.routes,
        Some(vec!["nats://ams.chat.internal:5222".to_string()])
    );
    assert_eq!(config.rpc.host, "dns:///ams.chat-rpc.internal:50051");
}

#[test]
fn explicit_preset_list_is_used_verbatim() {
    let mut config: Config = serde_yaml::from_str("user_presets: [heroku]").unwrap();

    // Fly environment is ignored because presets were given explicitly.
    let env = make_env(&[
        ("FLY_APP_NAME", "chat"),
        ("FLY_ALLOC_ID", "4d2"),
        ("FLY_REGION", "ams"),
    ]);

    assert_eq!(config.presets_with_env(&env), vec!["heroku"]);
    config.load_presets_with_env(&env).unwrap();

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.embedded_nats, NatsConfig::default());
}

#[test]
fn missing_fly_region_is_a_fatal_error() {
    let mut config = Config::default();
    config.user_presets = Some(vec!["fly".to_string()]);

    let err = config
        .load_presets_with_env(make_env(&[("FLY_APP_NAME", "chat")]))
        .unwrap_err();

    assert!(matches!(err, CablewayError::MissingEnv { .. }));
    assert_eq!(err.to_string(), "FLY_REGION env is missing");
}

#[test]
fn load_presets_reads_process_env() {
    // Runs against the real process environment: no Fly/Heroku variables are
    // expected in the test environment, so resolution yields nothing.
    let mut config = Config::default();
    if config.presets().is_empty() {
        config.load_presets().unwrap();
        assert_eq!(config, Config::default());
    }
}
