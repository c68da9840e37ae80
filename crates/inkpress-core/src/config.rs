use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::retry::{RetryMode, RetryPolicy};

/// Config key holding the model API credential
pub const API_KEY: &str = "ai.api_key";

/// Environment variable that overrides `ai.api_key` for file-backed stores
pub const API_KEY_ENV: &str = "INKPRESS_API_KEY";

/// Environment variable that overrides the config file location
pub const CONFIG_PATH_ENV: &str = "INKPRESS_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ai: AiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// API key for the chat-completion endpoint
    #[serde(default)]
    pub api_key: Option<String>,
    /// OpenAI-compatible base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model name
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds (0 = no timeout)
    #[serde(default)]
    pub request_timeout_secs: u64,
    /// HTTP proxy URL (e.g., "http://127.0.0.1:7890" or "socks5://127.0.0.1:1080")
    #[serde(default)]
    pub proxy_url: Option<String>,
    /// Total attempts per request, including the first
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Base retry delay; attempt k waits k times this
    #[serde(default = "default_retry_base_delay_ms")]
    pub retry_base_delay_ms: u64,
    /// Which failures are retried: "all" or "transient"
    #[serde(default)]
    pub retry_mode: RetryMode,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            request_timeout_secs: 0,
            proxy_url: None,
            max_attempts: default_max_attempts(),
            retry_base_delay_ms: default_retry_base_delay_ms(),
            retry_mode: RetryMode::default(),
        }
    }
}

impl AiConfig {
    /// Connection and retry settings for the summarizer, without the credential
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            request_timeout: (self.request_timeout_secs > 0)
                .then(|| Duration::from_secs(self.request_timeout_secs)),
            proxy_url: self.proxy_url.clone(),
            retry: RetryPolicy {
                max_attempts: self.max_attempts.max(1),
                base_delay: Duration::from_millis(self.retry_base_delay_ms),
                mode: self.retry_mode,
            },
        }
    }
}

/// Everything the summarizer needs besides the API key
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub model: String,
    pub request_timeout: Option<Duration>,
    pub proxy_url: Option<String>,
    pub retry: RetryPolicy,
}

impl Default for ClientSettings {
    fn default() -> Self {
        AiConfig::default().client_settings()
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "https://api.deepseek.com/v1".to_string()
}

fn default_model() -> String {
    "deepseek-chat".to_string()
}

fn default_max_attempts() -> u32 {
    3
}

fn default_retry_base_delay_ms() -> u64 {
    1000
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::parse(&content)
        } else {
            Ok(Self::default())
        }
    }

    fn parse(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to a file, creating parent directories
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Get the configuration file path
    /// `$INKPRESS_CONFIG` if set, otherwise ~/.config/inkpress/config.toml
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return PathBuf::from(path);
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("inkpress")
            .join("config.toml")
    }

    /// Look up a dotted key such as `ai.api_key`
    pub fn lookup(&self, key: &str) -> Option<String> {
        match key {
            "general.log_level" => Some(self.general.log_level.clone()),
            "ai.api_key" => self.ai.api_key.clone(),
            "ai.base_url" => Some(self.ai.base_url.clone()),
            "ai.model" => Some(self.ai.model.clone()),
            "ai.request_timeout_secs" => Some(self.ai.request_timeout_secs.to_string()),
            "ai.proxy_url" => self.ai.proxy_url.clone(),
            "ai.max_attempts" => Some(self.ai.max_attempts.to_string()),
            "ai.retry_base_delay_ms" => Some(self.ai.retry_base_delay_ms.to_string()),
            "ai.retry_mode" => Some(self.ai.retry_mode.as_str().to_string()),
            _ => None,
        }
    }
}

/// Async key-value source of configuration values.
///
/// The summarizer reads its credential through this on every refresh, so a
/// store that re-reads its backing source picks up rotated keys.
#[async_trait::async_trait]
pub trait ConfigStore: Send + Sync {
    async fn get(&self, key: &str) -> crate::Result<Option<String>>;
}

/// Config store backed by the TOML file, re-read on every lookup
pub struct FileConfigStore {
    path: PathBuf,
    env_override: bool,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            env_override: true,
        }
    }

    /// Ignore `$INKPRESS_API_KEY` and answer from the file only
    pub fn without_env(mut self) -> Self {
        self.env_override = false;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> crate::Result<AppConfig> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => AppConfig::parse(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait::async_trait]
impl ConfigStore for FileConfigStore {
    async fn get(&self, key: &str) -> crate::Result<Option<String>> {
        if self.env_override && key == API_KEY {
            if let Ok(value) = std::env::var(API_KEY_ENV) {
                return Ok(Some(value));
            }
        }

        Ok(self.read().await?.lookup(key))
    }
}

/// In-process config store
#[derive(Default)]
pub struct MemoryConfigStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values.write().await.insert(key.into(), value.into());
    }

    pub async fn remove(&self, key: &str) -> Option<String> {
        self.values.write().await.remove(key)
    }
}

#[async_trait::async_trait]
impl ConfigStore for MemoryConfigStore {
    async fn get(&self, key: &str) -> crate::Result<Option<String>> {
        Ok(self.values.read().await.get(key).cloned())
    }
}
