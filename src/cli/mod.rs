//! Command-line entry point.
//!
//! With no subcommand the interactive front-end starts; otherwise a single command runs and
//! prints to stdout.

pub mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::directory::ContactChannel;
use crate::models::{CategoryFilter, SortKey};
use crate::{logging, tui};

#[derive(Parser)]
#[command(name = "dog-training-assistant")]
#[command(version = "0.1.0")]
#[command(about = "Dog training answers, a training log and a local provider directory", long_about = None)]
pub struct Cli {
    /// Path to a config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask a training question
    Ask {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Print the answer as JSON
        #[arg(long)]
        json: bool,
    },
    /// List service providers
    Providers {
        /// Match against name, description, category and specialties
        #[arg(short, long)]
        search: Option<String>,

        /// "All" or a category such as "Grooming"
        #[arg(short, long, default_value = "All")]
        category: CategoryFilter,

        /// distance or rating (defaults to the configured sort)
        #[arg(long)]
        sort: Option<SortKey>,

        #[arg(long)]
        json: bool,
    },
    /// Show one provider with reviews
    Provider { id: String },
    /// Call, email or open the website of a provider
    Contact {
        id: String,

        /// call, email or website
        channel: ContactChannel,

        /// Copy the contact target instead of opening it
        #[arg(long)]
        copy: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Some(command) => {
            logging::init_stderr(&config.logging.level);
            commands::execute(command, &config)
        }
        None => {
            logging::init_file(&config.logging.level)?;
            tui::run_interactive(&config)
        }
    }
}
