//! Main CLI application structure

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::view_cmd::{self, MakeArgs};
use crate::generator::ViewGenerator;
use crate::storage::{Config, FsViewFiles, SystemPermissions};

#[derive(Parser)]
#[command(name = "custom-view")]
#[command(author, version, about = "Generate, delete and move Blade template views")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Configuration file (default: nearest custom-view.toml, then the global config)
    #[arg(long, global = true, env = "CUSTOM_VIEW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory views are created in (overrides view_path from the config)
    #[arg(long, global = true)]
    pub view_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample custom-view.toml
    Init {
        /// Directory to write the config into (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Generate a view (resource views produce index, show, create and edit)
    Make(MakeArgs),

    /// Delete a view
    Delete {
        /// View name, e.g. "blog.index"
        name: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Move (rename) a view
    Move {
        /// Current view name
        #[arg(long)]
        from: Option<String>,

        /// New view name
        #[arg(long)]
        to: Option<String>,

        /// Replace the target view if it exists
        #[arg(long)]
        force: bool,
    },

    /// List configured presets
    Presets,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("custom-view starting");

    // Every command except init works on a loaded configuration
    let load = || load_config(cli.config.as_deref(), cli.view_path.clone(), &output);

    match &cli.command {
        Commands::Init { path } => init(path, &output)?,
        Commands::Make(args) => {
            let config = load()?;
            view_cmd::make(args, &generator(&config), &config, &output)?
        }
        Commands::Delete { name, force } => {
            let config = load()?;
            view_cmd::delete(name, *force, &generator(&config), &output)?
        }
        Commands::Move { from, to, force } => {
            let config = load()?;
            let generator = generator(&config);
            view_cmd::move_view(from.as_deref(), to.as_deref(), *force, &generator, &output)?
        }
        Commands::Presets => view_cmd::presets(&load()?, &output)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}

fn generator(config: &Config) -> ViewGenerator<'_> {
    ViewGenerator::new(config, &FsViewFiles, &SystemPermissions)
}

fn load_config(explicit: Option<&Path>, view_path: Option<PathBuf>, output: &Output) -> Result<Config> {
    let mut config = Config::load(explicit)?;

    match &config.source {
        Some(path) => output.verbose_ctx("config", &format!("Loaded {}", path.display())),
        None => output.verbose_ctx("config", "No config file found, using defaults"),
    }

    if let Some(view_path) = view_path {
        config = config.with_view_path(view_path);
    }
    output.verbose_ctx("config", &format!("View root: {}", config.view_root().display()));

    Ok(config)
}

fn init(path: &Path, output: &Output) -> Result<()> {
    output.verbose_ctx("init", &format!("Writing config into: {}", path.display()));
    let (config_path, created) = Config::write_sample(path)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "path": config_path.display().to_string(),
            "created": created,
        }));
    } else if created {
        output.success(&format!("Created {}", config_path.display()));
    } else {
        output.success(&format!("Config already exists at {}", config_path.display()));
    }

    Ok(())
}
