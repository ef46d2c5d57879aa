//! Application configuration management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub advanced: AdvancedConfig,
}

/// YouTube Data API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Comment-thread listing endpoint
    pub endpoint: String,
    /// Static API key; the YOUTUBE_API_KEY environment variable takes precedence
    pub api_key: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// Local comment store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Database file name, resolved under the platform data directory
    /// unless an absolute path is given
    pub database_file: String,
}

/// Advanced configuration options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvancedConfig {
    pub enable_logging: bool,
    pub log_level: String, // "error", "warn", "info", "debug", "trace"
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            storage: StorageConfig::default(),
            advanced: AdvancedConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://www.googleapis.com/youtube/v3/commentThreads".to_string(),
            api_key: String::new(),
            timeout_seconds: 30,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_file: "comments.db".to_string(),
        }
    }
}

impl Default for AdvancedConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file, creating default if not exists
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

            let config: AppConfig =
                serde_json::from_str(&content).with_context(|| "Failed to parse config file")?;

            tracing::info!("Loaded configuration from: {:?}", config_path);
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            tracing::info!("Created default configuration at: {:?}", config_path);
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        tracing::info!("Saved configuration to: {:?}", config_path);
        Ok(())
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "commentscraper", "pro")
            .with_context(|| "Failed to get project directories")?;

        let config_dir = project_dirs.config_dir();
        Ok(config_dir.join("config.json"))
    }

    /// Get the application data directory
    pub fn get_data_dir() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "commentscraper", "pro")
            .with_context(|| "Failed to get project directories")?;

        Ok(project_dirs.data_dir().to_path_buf())
    }

    /// Resolve the comment database path from the storage section
    pub fn database_path(&self) -> Result<PathBuf> {
        let file = PathBuf::from(&self.storage.database_file);

        if file.is_absolute() {
            Ok(file)
        } else {
            Ok(Self::get_data_dir()?.join(file))
        }
    }

    /// Resolve the API key, preferring the environment over the config file
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Ok(key) = std::env::var("YOUTUBE_API_KEY") {
            if !key.trim().is_empty() {
                return Some(key);
            }
        }

        if self.api.api_key.trim().is_empty() {
            None
        } else {
            Some(self.api.api_key.clone())
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.api.endpoint.trim().is_empty() {
            anyhow::bail!("API endpoint must not be empty");
        }

        if self.api.timeout_seconds == 0 || self.api.timeout_seconds > 300 {
            anyhow::bail!("Timeout should be between 1 and 300 seconds");
        }

        if self.api.user_agent.trim().is_empty() {
            anyhow::bail!("User agent must not be empty");
        }

        if self.storage.database_file.trim().is_empty() {
            anyhow::bail!("Database file must not be empty");
        }

        if !["error", "warn", "info", "debug", "trace"].contains(&self.advanced.log_level.as_str())
        {
            anyhow::bail!(
                "Invalid log level: must be 'error', 'warn', 'info', 'debug', or 'trace'"
            );
        }

        Ok(())
    }
}
