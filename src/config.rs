use crate::errors::{AppError, AppResult, ErrorContextExt};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::intents::table::DEFAULT_TOKEN_CAPACITY;
use crate::platform::APP_ICON_NAME;

/// Host-side configuration
///
/// Describes the app identity, the default interaction handlers, the
/// request-code policy, and the icon/image resources the builder resolves
/// against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub app: AppConfig,
    pub handlers: HandlerConfig,
    pub codes: CodeConfig,
    pub tokens: TokenConfig,
    pub resources: ResourceConfig,
    pub log: LogConfig,
}

/// App identity and default icon
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub name: String,
    pub icon: String,
}

/// Capability-table keys of the standard interaction handlers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerConfig {
    pub clear: String,
    pub click: String,
}

/// Request-code allocation policy: "random" or "sequential"
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeConfig {
    pub policy: String,
}

/// Callback-token table limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    pub capacity: usize,
}

/// Icon and image resources known to the host
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    pub icons: HashMap<String, u32>,
    pub images: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "local-notify".to_string(),
            icon: APP_ICON_NAME.to_string(),
        }
    }
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            clear: "clear-receiver".to_string(),
            click: "click-receiver".to_string(),
        }
    }
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            policy: "random".to_string(),
        }
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_TOKEN_CAPACITY,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            handlers: HandlerConfig::default(),
            codes: CodeConfig::default(),
            tokens: TokenConfig::default(),
            resources: ResourceConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// Configuration manager for the local-notify CLI
///
/// Handles loading, saving, and editing configuration for both
/// project-level and global configurations. Project configurations take
/// precedence over global ones.
///
/// # Configuration Hierarchy
///
/// 1. **Project-level**: `.local-notify/config.toml` in the project root
/// 2. **Global**: `<config dir>/local-notify/config.toml`
pub struct ConfigManager {
    config_path: PathBuf,
    config: Config,
}

impl ConfigManager {
    /// Creates a new ConfigManager instance
    ///
    /// If a project path is provided, project-level configuration is
    /// preferred, with an existing global configuration as fallback.
    /// Nothing is written to disk until `save` (or `set_value`) is
    /// called; a missing file simply yields the defaults.
    pub fn new(project_path: Option<PathBuf>) -> AppResult<Self> {
        if let Some(ref path) = project_path {
            let project_config_path = Self::config_path_for(Some(path.clone()))?;

            if project_config_path.exists() {
                let config = Self::load_or_default(&project_config_path)?;
                return Ok(ConfigManager {
                    config_path: project_config_path,
                    config,
                });
            }

            let global_config_path = Self::config_path_for(None)?;
            if global_config_path.exists() {
                let config = Self::load_or_default(&global_config_path)?;
                return Ok(ConfigManager {
                    config_path: global_config_path,
                    config,
                });
            }

            let config = Self::load_or_default(&project_config_path)?;
            return Ok(ConfigManager {
                config_path: project_config_path,
                config,
            });
        }

        let config_path = Self::config_path_for(None)?;
        let config = Self::load_or_default(&config_path)?;
        Ok(ConfigManager {
            config_path,
            config,
        })
    }

    /// Creates a ConfigManager that always targets the given scope
    ///
    /// Used by `init`: writes a fresh default configuration, refusing to
    /// overwrite an existing file unless `force` is set.
    pub fn init(project_path: Option<PathBuf>, force: bool) -> AppResult<Self> {
        let config_path = Self::config_path_for(project_path)?;

        if config_path.exists() && !force {
            return Err(AppError::config(format!(
                "configuration already exists at {} (use --force to overwrite)",
                config_path.display()
            )));
        }

        let config = Config::default();
        Self::write_config(&config_path, &config)?;
        Ok(ConfigManager {
            config_path,
            config,
        })
    }

    /// Access the loaded configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Path of the backing configuration file
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Persist the current configuration
    pub fn save(&self) -> AppResult<()> {
        Self::write_config(&self.config_path, &self.config)
    }

    /// Set a configuration value by dotted key and persist it
    pub fn set_value(&mut self, key: &str, value: &str) -> AppResult<()> {
        match key {
            "app.name" => self.config.app.name = value.to_string(),
            "app.icon" => self.config.app.icon = value.to_string(),
            "handlers.clear" => self.config.handlers.clear = value.to_string(),
            "handlers.click" => self.config.handlers.click = value.to_string(),
            "codes.policy" => {
                if value != "random" && value != "sequential" {
                    return Err(AppError::InvalidConfigValue {
                        key: key.to_string(),
                        value: value.to_string(),
                        source: None,
                    });
                }
                self.config.codes.policy = value.to_string();
            }
            "tokens.capacity" => {
                let capacity = value.parse::<usize>().map_err(|err| {
                    AppError::InvalidConfigValue {
                        key: key.to_string(),
                        value: value.to_string(),
                        source: Some(Box::new(err)),
                    }
                })?;
                self.config.tokens.capacity = capacity;
            }
            "log.level" => self.config.log.level = value.to_string(),
            _ => {
                return Err(AppError::InvalidConfigValue {
                    key: key.to_string(),
                    value: value.to_string(),
                    source: None,
                })
            }
        }

        self.save()
    }

    /// Get a configuration value by dotted key
    pub fn get_value(&self, key: &str) -> AppResult<String> {
        let value = match key {
            "app.name" => self.config.app.name.clone(),
            "app.icon" => self.config.app.icon.clone(),
            "handlers.clear" => self.config.handlers.clear.clone(),
            "handlers.click" => self.config.handlers.click.clone(),
            "codes.policy" => self.config.codes.policy.clone(),
            "tokens.capacity" => self.config.tokens.capacity.to_string(),
            "log.level" => self.config.log.level.clone(),
            _ => {
                return Err(AppError::InvalidConfigValue {
                    key: key.to_string(),
                    value: String::new(),
                    source: None,
                })
            }
        };
        Ok(value)
    }

    /// Render the configuration as TOML
    pub fn render(&self) -> AppResult<String> {
        toml::to_string_pretty(&self.config)
            .map_err(|err| AppError::config_with_source("serializing configuration", err))
    }

    fn config_path_for(project_path: Option<PathBuf>) -> AppResult<PathBuf> {
        match project_path {
            Some(path) => Ok(path.join(".local-notify").join("config.toml")),
            None => {
                let base = BaseDirs::new()
                    .ok_or_else(|| AppError::config("cannot determine user config directory"))?;
                Ok(base
                    .config_dir()
                    .join("local-notify")
                    .join("config.toml"))
            }
        }
    }

    fn load_or_default(path: &Path) -> AppResult<Config> {
        if path.exists() {
            let content =
                fs::read_to_string(path).in_file_operation(path, "reading configuration")?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    fn write_config(path: &Path, config: &Config) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .in_file_operation(parent, "creating configuration directory")?;
        }
        let content = toml::to_string_pretty(config)
            .map_err(|err| AppError::config_with_source("serializing configuration", err))?;
        fs::write(path, content).in_file_operation(path, "writing configuration")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.app.name, "local-notify");
        assert_eq!(config.handlers.clear, "clear-receiver");
        assert_eq!(config.handlers.click, "click-receiver");
        assert_eq!(config.codes.policy, "random");
        assert_eq!(config.tokens.capacity, DEFAULT_TOKEN_CAPACITY);
    }

    #[test]
    fn test_manager_targets_project_config_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::new(Some(temp_dir.path().to_path_buf())).unwrap();

        assert!(manager
            .config_path()
            .ends_with(".local-notify/config.toml"));
        // Defaults are in memory only until saved.
        assert!(!manager.config_path().exists());

        manager.save().unwrap();
        assert!(manager.config_path().exists());
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let temp_dir = TempDir::new().unwrap();
        ConfigManager::init(Some(temp_dir.path().to_path_buf()), false).unwrap();

        let second = ConfigManager::init(Some(temp_dir.path().to_path_buf()), false);
        assert!(second.is_err());

        let forced = ConfigManager::init(Some(temp_dir.path().to_path_buf()), true);
        assert!(forced.is_ok());
    }

    #[test]
    fn test_set_and_get_value() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = ConfigManager::new(Some(temp_dir.path().to_path_buf())).unwrap();

        manager.set_value("handlers.clear", "my-clear").unwrap();
        assert_eq!(manager.get_value("handlers.clear").unwrap(), "my-clear");

        // Persisted: a fresh manager sees the change.
        let reloaded = ConfigManager::new(Some(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(reloaded.config().handlers.clear, "my-clear");
    }

    #[test]
    fn test_set_rejects_unknown_key_and_bad_values() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = ConfigManager::new(Some(temp_dir.path().to_path_buf())).unwrap();

        assert!(manager.set_value("unknown.key", "x").is_err());
        assert!(manager.set_value("codes.policy", "fibonacci").is_err());
        assert!(manager.set_value("tokens.capacity", "lots").is_err());
        assert!(manager.set_value("tokens.capacity", "64").is_ok());
        assert_eq!(manager.config().tokens.capacity, 64);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let mut config = Config::default();
        config
            .resources
            .icons
            .insert("ic_stat".to_string(), 12);
        config
            .resources
            .images
            .insert("photo".to_string(), "assets/p.png".to_string());

        let rendered = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(back.resources.icons.get("ic_stat"), Some(&12));
        assert_eq!(
            back.resources.images.get("photo"),
            Some(&"assets/p.png".to_string())
        );
    }
}
