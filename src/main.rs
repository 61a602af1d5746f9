#![forbid(unsafe_code)]
//! Amalgam Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use amalgam::commands::{
    execute_check, execute_generate, execute_init, CheckOptions, GenerateOptions, InitOptions,
};
use amalgam::Config;

#[derive(Parser)]
#[command(name = "amalgam")]
#[command(about = "Merge a header and its includes into one distributable file")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = "amalgam.config.json")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Generate the merged header
    Generate {
        /// Source root directory
        root: Option<PathBuf>,

        /// Primary header, relative to the root
        #[arg(short, long)]
        primary: Option<String>,

        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Verify the merged header is up to date
    Check {
        /// Source root directory
        root: Option<PathBuf>,

        /// Primary header, relative to the root
        #[arg(short, long)]
        primary: Option<String>,

        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load config
    let config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default()
    };

    match cli.command {
        Commands::Init { force } => {
            execute_init(InitOptions { force })?;
        }

        Commands::Generate { root, primary, output } => {
            let options = GenerateOptions { root, primary, output };
            execute_generate(options, config)?;
        }

        Commands::Check { root, primary, output } => {
            let options = CheckOptions { root, primary, output };
            execute_check(options, config)?;
        }
    }

    Ok(())
}
