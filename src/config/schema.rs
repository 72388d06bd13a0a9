use crate::error::ConfigError;
use crate::links::ContentKind;
use anyhow::{Context, Result};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;

/// Desktop Chrome on Windows. The short-link service serves an unusable
/// page to unknown or missing user agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const CONFIG_DIR_NAME: &str = ".b23link";
const CONFIG_FILE_NAME: &str = "config.toml";

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.into()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_max_redirects() -> usize {
    10
}

fn default_order() -> Vec<ContentKind> {
    ContentKind::DEFAULT_ORDER.to_vec()
}

fn default_log_level() -> String {
    "info".into()
}

// ── Top-level config ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Computed on load; never written to disk.
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub classify: ClassifyConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Whole-request transport timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            max_redirects: default_max_redirects(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyConfig {
    /// Classifier priority; the first category to accept a page wins.
    #[serde(default = "default_order")]
    pub order: Vec<ContentKind>,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            order: default_order(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// "trace" | "debug" | "info" | "warn" | "error"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    pub fn tracing_level(&self) -> Level {
        self.level.parse().unwrap_or(Level::INFO)
    }
}

impl Config {
    /// Load `~/.b23link/config.toml`, writing defaults on first run.
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        let config_dir = home.join(CONFIG_DIR_NAME);
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).context("Failed to create .b23link directory")?;
        }

        if config_path.exists() {
            return Self::load_from(&config_path);
        }

        let mut config = Self {
            config_path,
            ..Self::default()
        };
        config.save()?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load an explicit config file. Missing sections fall back to defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::Load(e.to_string()))
            .context("Failed to parse config file")?;
        config.config_path = path.to_path_buf();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(agent) = std::env::var("B23LINK_USER_AGENT") {
            if !agent.trim().is_empty() {
                self.fetch.user_agent = agent;
            }
        }

        if let Ok(raw) = std::env::var("B23LINK_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.fetch.timeout_secs = secs,
                _ => tracing::warn!(value = %raw, "ignoring invalid B23LINK_TIMEOUT_SECS"),
            }
        }

        if let Ok(level) = std::env::var("B23LINK_LOG_LEVEL") {
            if level.parse::<Level>().is_ok() {
                self.logging.level = level;
            } else if !level.is_empty() {
                tracing::warn!(value = %level, "ignoring invalid B23LINK_LOG_LEVEL");
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch.user_agent.trim().is_empty() {
            return Err(ConfigError::Validation(
                "fetch.user_agent must not be empty".into(),
            ));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "fetch.timeout_secs must be greater than 0".into(),
            ));
        }
        if self.classify.order.is_empty() {
            return Err(ConfigError::Validation(
                "classify.order must list at least one content kind".into(),
            ));
        }
        let mut seen = HashSet::new();
        for kind in &self.classify.order {
            if !seen.insert(kind) {
                return Err(ConfigError::Validation(format!(
                    "classify.order lists {kind} more than once"
                )));
            }
        }
        if self.logging.level.parse::<Level>().is_err() {
            return Err(ConfigError::Validation(format!(
                "logging.level {:?} is not a known level",
                self.logging.level
            )));
        }
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }
}
