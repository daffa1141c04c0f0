//! Kino Quality CLI - Headless Quality Menu Inspector
//!
//! Features:
//! - Build the quality menu a player would show for a manifest
//! - Apply a manual selection and show which renditions stay eligible
//! - Text, JSON and table output

use clap::{Parser, Subcommand};

mod commands;
mod output;
mod source;

/// Kino Quality CLI - Quality menu toolkit
#[derive(Parser)]
#[command(name = "kino-quality")]
#[command(author = "Purple Squirrel Media")]
#[command(version)]
#[command(
    about = "Inspect quality menus and manual selection for adaptive streams",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Output format (text, json, table)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Selector options as JSON, e.g. '{"displayCurrentQuality": true}'
    #[arg(short, long, default_value = "{}")]
    options: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the quality menu for a manifest
    Menu {
        /// URL or path to an HLS master playlist, or a JSON source document
        manifest: String,
    },

    /// Select a quality and show the resulting rendition eligibility
    Select {
        /// URL or path to an HLS master playlist, or a JSON source document
        manifest: String,

        /// Quality to select (auto, 720, 720p)
        quality: String,
    },

    /// Click a menu entry by index and show the resulting state
    Click {
        /// URL or path to an HLS master playlist, or a JSON source document
        manifest: String,

        /// Zero-based menu entry index
        index: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(std::io::stderr)
        .init();

    kino_quality::init();

    match cli.command {
        Commands::Menu { manifest } => {
            commands::menu(&manifest, &cli.options, &cli.format).await?;
        }
        Commands::Select { manifest, quality } => {
            commands::select(&manifest, &quality, &cli.options, &cli.format).await?;
        }
        Commands::Click { manifest, index } => {
            commands::click(&manifest, index, &cli.options, &cli.format).await?;
        }
    }

    Ok(())
}
