//! Lazy, memoized provider configuration loading.
//!
//! The configuration file is read at most once per store. A missing or
//! unparsable file is not an error: the store degrades to an empty provider
//! mapping and logs a warning, so callers proceed as if nothing is
//! configured.

use crate::config::types::{ProviderDescriptor, ProvidersConfig};
use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};
use tokio::sync::OnceCell;
use tracing::{debug, warn};

/// Environment variable overriding the configuration file path.
pub const CONFIG_PATH_ENV: &str = "TOOLGATE_CONFIG";

/// Supported config file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Detect format from file extension and content
    pub fn detect(path: &Path, content: &str) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => ConfigFormat::Json,
            Some("yml") | Some("yaml") => ConfigFormat::Yaml,
            _ => {
                if content.trim_start().starts_with('{') {
                    ConfigFormat::Json
                } else {
                    ConfigFormat::Yaml
                }
            }
        }
    }
}

/// Get the default config path
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|p| p.join("toolgate/providers.yaml"))
        .unwrap_or_else(|| PathBuf::from(expand_path("~/.config/toolgate/providers.yaml")))
}

/// Expand tilde in path
pub fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}

/// Memoized store for the provider configuration.
///
/// The first `load` populates the cache; every later call returns the cached
/// value without touching the filesystem. Concurrent first loads are
/// serialized by the cell, so the file is read once even under racing
/// callers.
pub struct ConfigStore {
    path: PathBuf,
    cache: OnceCell<ProvidersConfig>,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: OnceCell::new(),
        }
    }

    /// Resolve the path from `TOOLGATE_CONFIG`, falling back to the default
    /// location under the user config directory.
    pub fn from_env() -> Self {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(|p| PathBuf::from(expand_path(&p)))
            .unwrap_or_else(|_| default_config_path());
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration, reading the file on first call only.
    pub async fn load(&self) -> &ProvidersConfig {
        self.cache
            .get_or_init(|| async move { read_config(&self.path).await })
            .await
    }

    /// Look up a provider's descriptor, loading the configuration if needed.
    pub async fn descriptor(&self, provider: &str) -> Option<ProviderDescriptor> {
        self.load().await.get(provider).cloned()
    }
}

async fn read_config(path: &Path) -> ProvidersConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) => {
            warn!(
                "Provider config not readable at {}: {}; using empty configuration",
                path.display(),
                e
            );
            return ProvidersConfig::default();
        }
    };

    let format = ConfigFormat::detect(path, &content);
    debug!("Detected config format: {:?}", format);

    let parsed = match format {
        ConfigFormat::Json => serde_json::from_str::<ProvidersConfig>(&content)
            .map_err(|e| e.to_string()),
        ConfigFormat::Yaml => serde_yaml::from_str::<ProvidersConfig>(&content)
            .map_err(|e| e.to_string()),
    };

    match parsed {
        Ok(config) => {
            validate_addresses(&config);
            debug!(
                "Loaded {} provider(s) from {}",
                config.providers.len(),
                path.display()
            );
            config
        }
        Err(e) => {
            warn!(
                "Provider config at {} did not parse: {}; using empty configuration",
                path.display(),
                e
            );
            ProvidersConfig::default()
        }
    }
}

/// Warn about remote addresses that will not parse as URLs. The entry is kept
/// as-is; the failure surfaces at invocation time.
fn validate_addresses(config: &ProvidersConfig) {
    for (name, descriptor) in &config.providers {
        if let Some(addr) = &descriptor.url {
            if url::Url::parse(addr).is_err() {
                warn!("Provider '{}' has an unparsable url: {}", name, addr);
            }
        }
    }
}

static SHARED: Lazy<ConfigStore> = Lazy::new(ConfigStore::from_env);

/// Process-wide store at the default (or `TOOLGATE_CONFIG`) location.
pub fn shared() -> &'static ConfigStore {
    &SHARED
}
