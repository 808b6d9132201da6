//! Command handlers for all CLI operations
//!
//! This module contains the implementation of all command handlers,
//! providing clean separation between CLI parsing and business logic.

use super::{CliContext, Commands, ConfigAction};

use crate::builder::Builder;
use crate::config::ConfigManager;
use crate::intents::{HandlerKey, SequentialCodes};
use crate::options::Options;
use crate::platform::Platform;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};

/// Coordinates all command handling operations with dependency injection
/// via CliContext
pub struct CommandHandler {
    context: CliContext,
}

impl CommandHandler {
    /// Create a new command handler instance with the provided context
    pub fn new(context: CliContext) -> Self {
        Self { context }
    }

    /// Route commands to their appropriate handlers
    pub fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Build {
                file,
                no_clear,
                no_click,
                clear,
                click,
                trigger,
                sequential_codes,
                pretty,
            } => self.handle_build(
                file,
                no_clear,
                no_click,
                clear,
                click,
                trigger,
                sequential_codes,
                pretty,
            ),
            Commands::Validate { file } => self.handle_validate(file),
            Commands::Init { global, force } => self.handle_init(global, force),
            Commands::Config { action } => self.handle_config(action),
        }
    }

    /// Build a notification descriptor from options JSON
    #[allow(clippy::too_many_arguments)]
    fn handle_build(
        &self,
        file: Option<PathBuf>,
        no_clear: bool,
        no_click: bool,
        clear: Option<String>,
        click: Option<String>,
        trigger: Option<String>,
        sequential_codes: bool,
        pretty: bool,
    ) -> Result<()> {
        let input = read_input(file)?;
        let options = Options::from_json(&input).context("Parsing notification options")?;

        let config = self.context.config_manager.config();
        let mut platform = Platform::from_config(config);
        if sequential_codes {
            platform = platform.with_codes(Box::new(SequentialCodes::default()));
        }

        let clear_receiver = if no_clear {
            None
        } else {
            Some(HandlerKey::new(
                clear.unwrap_or_else(|| config.handlers.clear.clone()),
            ))
        };
        let click_target = if no_click {
            None
        } else {
            Some(HandlerKey::new(
                click.unwrap_or_else(|| config.handlers.click.clone()),
            ))
        };

        debug!(id = options.id(), "building notification descriptor");

        let mut builder = Builder::new(&platform, options)
            .clear_receiver(clear_receiver)
            .click_target(click_target);
        if let Some(trigger) = trigger {
            builder = builder.trigger_receiver(HandlerKey::new(trigger));
        }

        let notification = builder.build().context("Building notification")?;

        info!(
            id = notification.id(),
            tokens = platform.tokens().issued(),
            "notification built"
        );

        let descriptor = notification.descriptor();
        let output = if pretty {
            descriptor.to_json_pretty()?
        } else {
            descriptor.to_json()?
        };
        println!("{output}");

        Ok(())
    }

    /// Parse options JSON and report what would be built
    fn handle_validate(&self, file: Option<PathBuf>) -> Result<()> {
        let input = read_input(file)?;
        let options = Options::from_json(&input).context("Parsing notification options")?;

        println!("Valid notification options");
        println!("Id: {}", options.id());
        println!("Title: {}", options.title());
        println!("Actions: {}", options.actions().len());

        Ok(())
    }

    /// Initialize a configuration file
    fn handle_init(&self, global: bool, force: bool) -> Result<()> {
        let project_path = if global {
            None
        } else {
            self.context
                .project_path
                .clone()
                .or_else(|| std::env::current_dir().ok())
        };

        let manager = ConfigManager::init(project_path, force)?;
        println!(
            "Configuration written to {}",
            manager.config_path().display()
        );

        Ok(())
    }

    /// Show, set, or get configuration values
    fn handle_config(&self, action: ConfigAction) -> Result<()> {
        match action {
            ConfigAction::Show => {
                let rendered = self.context.config_manager.render()?;
                println!("{rendered}");
                Ok(())
            }
            ConfigAction::Set { key, value } => {
                let mut manager = ConfigManager::new(self.context.project_path.clone())?;
                manager.set_value(&key, &value)?;
                println!("Set {key} = {value}");
                Ok(())
            }
            ConfigAction::Get { key } => {
                let value = self.context.config_manager.get_value(&key)?;
                println!("{value}");
                Ok(())
            }
        }
    }
}

/// Read options JSON from a file or stdin
fn read_input(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Reading options from {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Reading options from stdin")?;
            Ok(input)
        }
    }
}
