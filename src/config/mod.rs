use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_SEARCH_KEYWORD: &str = "開始します";
pub const DEFAULT_API_BASE_URL: &str = "https://slack.com/api";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub use_mock: bool,
    #[serde(default)]
    pub slack_token: Option<String>,
    #[serde(default)]
    pub slack_channel_id: Option<String>,
    #[serde(default)]
    pub slack_channel_name: Option<String>,
    #[serde(default = "default_search_keyword")]
    pub search_keyword: String,
    #[serde(default = "default_break_keywords")]
    pub break_keywords: Vec<String>,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
    #[serde(default = "default_search_result_limit")]
    pub search_result_limit: u32,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_search_keyword() -> String {
    DEFAULT_SEARCH_KEYWORD.to_string()
}
fn default_break_keywords() -> Vec<String> {
    vec!["休憩".to_string()]
}
fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}
fn default_request_delay_ms() -> u64 {
    1000
}
fn default_search_result_limit() -> u32 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            use_mock: false,
            slack_token: None,
            slack_channel_id: None,
            slack_channel_name: None,
            search_keyword: default_search_keyword(),
            break_keywords: default_break_keywords(),
            api_base_url: default_api_base_url(),
            request_delay_ms: default_request_delay_ms(),
            search_result_limit: default_search_result_limit(),
        }
    }
}

/// Bearer token and channel id, both present and non-empty.
#[derive(Debug, Clone)]
pub struct SlackCredentials {
    pub token: String,
    pub channel_id: String,
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".worklog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worklog.conf")
    }

    /// Return the full path of the SQLite cache
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("worklog.sqlite")
    }

    /// Load the configuration file (or defaults) and apply environment overrides.
    ///
    /// This is the only place where the process environment is consulted.
    pub fn load() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let path = Self::config_file();
        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)?
        } else {
            Config::default()
        };

        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = env::var("WORKLOG_USE_MOCK") {
            self.use_mock = matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
        if let Some(v) = non_empty_var("SLACK_TOKEN") {
            self.slack_token = Some(v);
        }
        if let Some(v) = non_empty_var("SLACK_CHANNEL_ID") {
            self.slack_channel_id = Some(v);
        }
        if let Some(v) = non_empty_var("SLACK_CHANNEL_NAME") {
            self.slack_channel_name = Some(v);
        }
        if let Some(v) = non_empty_var("WORKLOG_SEARCH_KEYWORD") {
            self.search_keyword = v;
        }
        if let Some(v) = non_empty_var("WORKLOG_API_BASE_URL") {
            self.api_base_url = v;
        }
        if let Some(ms) = non_empty_var("WORKLOG_REQUEST_DELAY_MS").and_then(|v| v.parse().ok()) {
            self.request_delay_ms = ms;
        }
        if let Some(v) = non_empty_var("WORKLOG_DB") {
            self.database = v;
        }
    }

    /// Precondition for any Slack call: token and channel id must be set.
    pub fn slack_credentials(&self) -> AppResult<SlackCredentials> {
        let token = self
            .slack_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Configuration("missing Slack token".into()))?;
        let channel_id = self
            .slack_channel_id
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AppError::Configuration("missing Slack channel id".into()))?;

        Ok(SlackCredentials {
            token: token.to_string(),
            channel_id: channel_id.to_string(),
        })
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// Copy of the configuration safe to print (token masked).
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        copy.slack_token = copy.slack_token.map(|t| mask_token(&t));
        copy
    }

    /// Write a default configuration file and return its path
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Config::default();
        if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            config.database = if p.is_absolute() {
                p.to_string_lossy().to_string()
            } else {
                dir.join(p).to_string_lossy().to_string()
            };
        }

        let path = Self::config_file();
        if !is_test && !path.exists() {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(&path)?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(PathBuf::from(config.database))
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(4).collect();
    format!("{visible}…")
}
