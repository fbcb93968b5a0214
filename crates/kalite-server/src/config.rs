use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 2;

const DEFAULT_BIND: &str = "127.0.0.1:8080";
const DEFAULT_SESSION_IDLE_SECS: u64 = 60 * 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Where finished records go. Without one, records are only logged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<StoreConfig>,
    /// Directory of JSON taxonomy documents replacing built-in tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomy_dir: Option<PathBuf>,
    /// Wizard sessions untouched this long are discarded. Added in v2.
    #[serde(default = "default_session_idle_secs")]
    pub session_idle_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the REST data store; records are posted to
    /// `{url}/{form}`.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_session_idle_secs() -> u64 {
    DEFAULT_SESSION_IDLE_SECS
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            bind: default_bind(),
            store: None,
            taxonomy_dir: None,
            session_idle_secs: DEFAULT_SESSION_IDLE_SECS,
        }
    }
}

fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("kalite").join("config.json"))
}

/// `KALITE_CONFIG` if set, otherwise the per-user config directory.
pub fn config_path() -> eyre::Result<PathBuf> {
    match std::env::var_os("KALITE_CONFIG") {
        Some(path) => Ok(PathBuf::from(path)),
        None => default_config_path(),
    }
}

impl ServerConfig {
    /// Load from [`config_path`], then apply `KALITE_*` environment
    /// overrides.
    pub fn load() -> eyre::Result<Self> {
        let path = config_path()?;
        let config = load_or_create(&path)?;
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply overrides from a key lookup (normally the environment).
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(bind) = lookup("KALITE_BIND") {
            self.bind = bind;
        }
        if let Some(url) = lookup("KALITE_STORE_URL") {
            let api_key = self.store.take().and_then(|s| s.api_key);
            self.store = Some(StoreConfig { url, api_key });
        }
        if let Some(key) = lookup("KALITE_STORE_KEY")
            && let Some(store) = self.store.as_mut()
        {
            store.api_key = Some(key);
        }
        if let Some(dir) = lookup("KALITE_TAXONOMY_DIR") {
            self.taxonomy_dir = Some(PathBuf::from(dir));
        }
        self
    }
}

/// Load `path`, or write and return the defaults when it does not exist
/// yet. Failing to write the defaults is logged and does not stop startup.
pub fn load_or_create(path: &Path) -> eyre::Result<ServerConfig> {
    if path.exists() {
        return load_from(path);
    }

    let config = ServerConfig::default();
    match save_to(path, &config) {
        Ok(()) => tracing::info!(path = %path.display(), "wrote default config"),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not write default config")
        }
    }
    Ok(config)
}

pub fn load_from(path: &Path) -> eyre::Result<ServerConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: ServerConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update Kalite."
        ));
    }

    // v0 → v1: flat store_url/store_key move under a `store` object
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        let url = obj.remove("store_url");
        let key = obj.remove("store_key");
        if let Some(url) = url {
            let mut store = serde_json::Map::new();
            store.insert("url".to_string(), url);
            if let Some(key) = key {
                store.insert("api_key".to_string(), key);
            }
            obj.insert("store".to_string(), serde_json::Value::Object(store));
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (nested store settings)");
    }

    // v1 → v2: idle timeout for wizard sessions
    if from_version < 2 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("session_idle_secs")
            .or_insert(serde_json::Value::Number(DEFAULT_SESSION_IDLE_SECS.into()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(2.into()),
        );
        tracing::info!("migrated config v1 → v2 (added session_idle_secs)");
    }

    Ok(json)
}

pub fn save_to(path: &Path, config: &ServerConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path has no parent: {}", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // The store key is a secret
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
