//! # ccsg CLI
//!
//! Command-line interface for the ccsg static site generator.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ccsg")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "ccsg.yml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site with a seed content file
    Init {
        /// Site directory to create
        name: PathBuf,
    },

    /// Create a new theme or content page stub
    New {
        #[command(subcommand)]
        command: NewCommands,
    },

    /// Build the static site once
    Build {
        /// Theme to build with (required when several themes exist)
        #[arg(long)]
        theme: Option<String>,
    },

    /// Build, watch for changes, and serve the output over HTTP
    Serve {
        /// Server port (defaults to the config value, then 8000)
        #[arg(long)]
        port: Option<u16>,

        /// Theme to build with (required when several themes exist)
        #[arg(long)]
        theme: Option<String>,
    },
}

#[derive(Subcommand)]
enum NewCommands {
    /// Create themes/<name>/index.html with the stock template
    Theme {
        /// Theme name
        name: String,
    },

    /// Create content/<name>.md with a starter heading
    Page {
        /// Page name (becomes the file stem)
        name: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Init { name } => commands::init_site(&name),
        Commands::New { command } => match command {
            NewCommands::Theme { name } => commands::create_theme(&cli.config, &name),
            NewCommands::Page { name } => commands::create_page(&cli.config, &name),
        },
        Commands::Build { theme } => commands::build_site(&cli.config, theme.as_deref()),
        Commands::Serve { port, theme } => {
            commands::serve_site(&cli.config, port, theme.as_deref()).await
        }
    }
}
