use std::collections::HashMap;
use std::path::PathBuf;

use kalite_server::config::{
    ServerConfig, StoreConfig, load_from, load_or_create, migrate, save_to,
};
use serde_json::json;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_bind_locally_without_a_store() {
    let config = ServerConfig::default();
    assert_eq!(config.bind, "127.0.0.1:8080");
    assert!(config.store.is_none());
    assert!(config.taxonomy_dir.is_none());
}

#[test]
fn v0_store_settings_are_nested() {
    let migrated = migrate(
        json!({ "bind": "0.0.0.0:9000", "store_url": "https://kayit.example", "store_key": "k" }),
        0,
    )
    .unwrap();

    assert_eq!(migrated["config_version"], 2);
    assert_eq!(migrated["session_idle_secs"], 3600);
    assert_eq!(migrated["store"]["url"], "https://kayit.example");
    assert_eq!(migrated["store"]["api_key"], "k");
    assert!(migrated.get("store_url").is_none());
}

#[test]
fn newer_configs_are_rejected() {
    let err = migrate(json!({ "config_version": 7 }), 7).unwrap_err();
    assert!(err.to_string().contains("newer than this build"));
}

#[test]
fn saved_configs_load_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kalite").join("config.json");
    let config = ServerConfig {
        store: Some(StoreConfig {
            url: "https://kayit.example/rest/v1".to_string(),
            api_key: Some("gizli".to_string()),
        }),
        taxonomy_dir: Some(PathBuf::from("/etc/kalite/taxonomies")),
        ..ServerConfig::default()
    };

    save_to(&path, &config).unwrap();
    assert_eq!(load_from(&path).unwrap(), config);
}

#[test]
fn pre_versioned_file_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "store_url": "https://kayit.example" }"#).unwrap();

    let config = load_from(&path).unwrap();
    assert_eq!(config.config_version, 2);
    assert_eq!(config.session_idle_secs, 3600);
    assert_eq!(config.bind, "127.0.0.1:8080");
    assert_eq!(config.store.unwrap().api_key, None);
}

#[test]
fn environment_overrides_file_values() {
    let config = ServerConfig::default().with_overrides(env(&[
        ("KALITE_BIND", "0.0.0.0:80"),
        ("KALITE_STORE_URL", "https://kayit.example"),
        ("KALITE_STORE_KEY", "anahtar"),
        ("KALITE_TAXONOMY_DIR", "/srv/taksonomi"),
    ]));

    assert_eq!(config.bind, "0.0.0.0:80");
    let store = config.store.unwrap();
    assert_eq!(store.url, "https://kayit.example");
    assert_eq!(store.api_key.as_deref(), Some("anahtar"));
    assert_eq!(config.taxonomy_dir, Some(PathBuf::from("/srv/taksonomi")));
}

#[test]
fn store_key_alone_needs_a_store() {
    let config = ServerConfig::default().with_overrides(env(&[("KALITE_STORE_KEY", "anahtar")]));
    assert!(config.store.is_none());

    let existing = ServerConfig {
        store: Some(StoreConfig {
            url: "https://kayit.example".to_string(),
            api_key: Some("eski".to_string()),
        }),
        ..ServerConfig::default()
    };
    let config = existing.with_overrides(env(&[("KALITE_STORE_URL", "https://yeni.example")]));
    let store = config.store.unwrap();
    assert_eq!(store.url, "https://yeni.example");
    assert_eq!(store.api_key.as_deref(), Some("eski"));
}

#[test]
fn v1_configs_keep_their_settings() {
    let migrated = migrate(
        json!({ "config_version": 1, "bind": "0.0.0.0:9000", "session_idle_secs": 60 }),
        1,
    )
    .unwrap();
    assert_eq!(migrated["config_version"], 2);
    assert_eq!(migrated["session_idle_secs"], 60);
    assert_eq!(migrated["bind"], "0.0.0.0:9000");
}

#[test]
fn first_run_writes_the_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kalite").join("config.json");

    let config = load_or_create(&path).unwrap();
    assert_eq!(config, ServerConfig::default());
    assert!(path.exists());

    let edited = ServerConfig {
        bind: "0.0.0.0:9090".to_string(),
        ..config
    };
    save_to(&path, &edited).unwrap();
    assert_eq!(load_or_create(&path).unwrap().bind, "0.0.0.0:9090");
}
