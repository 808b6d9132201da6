//! Argument processing and validation for CLI commands
//!
//! This module handles argument validation, normalization, and processing
//! before commands are routed to their respective handlers.

use super::Commands;
use anyhow::Result;

/// Handles argument processing and validation
pub struct ArgProcessor;

impl ArgProcessor {
    /// Create a new argument processor
    pub fn new() -> Self {
        Self
    }

    /// Process the command and apply default values where needed
    pub fn process_command(&self, command: Option<Commands>) -> Result<Commands> {
        let command = command.unwrap_or_else(|| {
            // Default to Build from stdin when no subcommand is provided
            Commands::Build {
                file: None,
                no_clear: false,
                no_click: false,
                clear: None,
                click: None,
                trigger: None,
                sequential_codes: false,
                pretty: false,
            }
        });

        self.validate_command(&command)?;

        Ok(command)
    }

    /// Validate command arguments
    fn validate_command(&self, command: &Commands) -> Result<()> {
        match command {
            Commands::Build {
                no_clear,
                no_click,
                clear,
                click,
                ..
            } => {
                if *no_clear && clear.is_some() {
                    return Err(anyhow::anyhow!(
                        "--no-clear conflicts with --clear"
                    ));
                }
                if *no_click && click.is_some() {
                    return Err(anyhow::anyhow!(
                        "--no-click conflicts with --click"
                    ));
                }
                Ok(())
            }
            Commands::Config { action } => self.validate_config_action(action),
            Commands::Validate { .. } | Commands::Init { .. } => Ok(()),
        }
    }

    /// Validate configuration action arguments
    fn validate_config_action(&self, action: &super::ConfigAction) -> Result<()> {
        use super::ConfigAction;

        match action {
            ConfigAction::Set { key, value } => {
                if key.is_empty() {
                    return Err(anyhow::anyhow!("Configuration key cannot be empty"));
                }
                if value.is_empty() {
                    return Err(anyhow::anyhow!("Configuration value cannot be empty"));
                }

                self.validate_config_key(key)?;
                Ok(())
            }
            ConfigAction::Get { key } => {
                if key.is_empty() {
                    return Err(anyhow::anyhow!("Configuration key cannot be empty"));
                }
                self.validate_config_key(key)?;
                Ok(())
            }
            ConfigAction::Show => Ok(()),
        }
    }

    /// Validate that a configuration key is known/supported
    fn validate_config_key(&self, key: &str) -> Result<()> {
        const VALID_CONFIG_KEYS: &[&str] = &[
            "app.name",
            "app.icon",
            "handlers.clear",
            "handlers.click",
            "codes.policy",
            "tokens.capacity",
            "log.level",
        ];

        if !VALID_CONFIG_KEYS.contains(&key) {
            return Err(anyhow::anyhow!(
                "Unknown configuration key: {}. Valid keys are: {}",
                key,
                VALID_CONFIG_KEYS.join(", ")
            ));
        }

        Ok(())
    }
}

impl Default for ArgProcessor {
    fn default() -> Self {
        Self::new()
    }
}
