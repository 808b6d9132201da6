//! CLI module providing command-line interface functionality
//!
//! This module handles argument parsing, command validation, and routing
//! to appropriate handlers while maintaining separation of concerns.

pub mod args;
pub mod commands;
pub mod context;
pub mod handlers;

use anyhow::Result;
use clap::Parser;

pub use args::ArgProcessor;
pub use commands::{Cli, Commands, ConfigAction};
pub use context::CliContext;
pub use handlers::CommandHandler;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Parse command line arguments and execute the requested command
    pub fn run() -> Result<()> {
        let cli = Cli::parse();

        // Create CLI context with project path and verbosity
        let context = CliContext::new(cli.project.clone(), cli.verbose)?;

        // Initialize logging through context
        context.init_logging()?;

        // Apply defaults and validate before dispatch
        let command = ArgProcessor::new().process_command(cli.command)?;

        // Execute the command through handlers
        CommandHandler::new(context).handle_command(command)
    }
}
