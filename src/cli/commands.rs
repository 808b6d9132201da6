//! Command definitions and structures for the CLI
//!
//! This module contains all the clap-based command line argument
//! definitions, including the main CLI structure and all subcommands.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "local-notify")]
#[command(about = "Local notification builder CLI with intent wiring")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Project path for project-level configuration
    #[arg(long, global = true)]
    pub project: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Build a notification descriptor from options JSON (default mode)
    Build {
        /// Options JSON file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Do not wire a delete token (no clear receiver)
        #[arg(long)]
        no_clear: bool,

        /// Do not wire a content token or action buttons (no click target)
        #[arg(long)]
        no_click: bool,

        /// Override the clear-receiver handler key
        #[arg(long)]
        clear: Option<String>,

        /// Override the click-target handler key
        #[arg(long)]
        click: Option<String>,

        /// Store a trigger-receiver handler key on the built notification
        #[arg(long)]
        trigger: Option<String>,

        /// Use sequential request codes for reproducible output
        #[arg(long)]
        sequential_codes: bool,

        /// Pretty-print the built descriptor
        #[arg(short, long)]
        pretty: bool,
    },

    /// Validate options JSON without building
    Validate {
        /// Options JSON file; reads stdin when omitted
        file: Option<PathBuf>,
    },

    /// Initialize configuration
    Init {
        /// Initialize global configuration (default is project-level)
        #[arg(short, long)]
        global: bool,

        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Configure settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration management actions
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set configuration value
    Set {
        /// Configuration key (e.g., handlers.clear)
        key: String,
        /// Value to set
        value: String,
    },

    /// Get configuration value
    Get {
        /// Configuration key
        key: String,
    },
}
