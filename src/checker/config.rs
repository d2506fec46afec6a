use serde::{Deserialize, Serialize};

use super::errors::CheckResult;

/// Main configuration structure for the site checker
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CheckerConfig {
    /// Root URL of the site whose crawl configuration is checked
    pub base_url: String,
    /// User agent string for requests
    pub user_agent: String,
    /// How many characters of sitemap.xml to echo to the console
    pub sitemap_preview_chars: usize,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Configuration for logging behavior
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://code-agree.github.io".to_string(),
            user_agent: "sitecheck/0.1".to_string(),
            sitemap_preview_chars: 500,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl CheckerConfig {
    /// Load configuration from a YAML file
    pub fn load_from_yaml(file_path: &str) -> CheckResult<Self> {
        let config_content = std::fs::read_to_string(file_path)?;
        let config: CheckerConfig = serde_yaml::from_str(&config_content)?;
        Ok(config)
    }

    /// Load configuration with fallback to default if file doesn't exist
    pub fn load_or_default(file_path: &str) -> Self {
        match Self::load_from_yaml(file_path) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", file_path);
                config
            }
            Err(e) => {
                log::warn!(
                    "Failed to load configuration from {}: {}. Using default configuration.",
                    file_path,
                    e
                );
                Self::default()
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("Base URL cannot be empty".to_string());
        }

        if let Err(e) = url::Url::parse(&self.base_url) {
            return Err(format!("Base URL '{}' is not a valid URL: {}", self.base_url, e));
        }

        if self.user_agent.is_empty() {
            return Err("User agent cannot be empty".to_string());
        }

        if self.sitemap_preview_chars == 0 {
            return Err("Sitemap preview length must be greater than 0".to_string());
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(format!(
                "Invalid log level '{}'. Must be one of: {:?}",
                self.logging.level, valid_log_levels
            ));
        }

        Ok(())
    }

    /// Initialize logging based on configuration
    pub fn init_logging(&self) -> Result<(), Box<dyn std::error::Error>> {
        use log::LevelFilter;

        let log_level = match self.logging.level.as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            _ => LevelFilter::Info,
        };

        env_logger::Builder::from_default_env()
            .filter_level(log_level)
            .try_init()?;

        Ok(())
    }
}
