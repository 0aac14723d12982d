//! Refmark CLI - Command-line interface for the refmark page rewriter

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use refmark_core::SiteConfig;

mod build;
mod snippet;

/// Configuration file picked up from the working directory when no
/// explicit path is given.
const DEFAULT_CONFIG: &str = "refmark.toml";

#[derive(Parser)]
#[command(name = "refmark")]
#[command(version = refmark_core::VERSION)]
#[command(about = "Highlight and cross-link C++ reference pages", long_about = None)]
struct Cli {
    /// Path to the site configuration (defaults to ./refmark.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite every HTML page under a documentation tree
    Build {
        /// Root of the rendered documentation tree
        dir: PathBuf,

        /// Report pages that would change without writing anything
        #[arg(long)]
        check: bool,

        /// Fixed link prefix, overriding per-page base-path derivation
        #[arg(long)]
        base: Option<String>,
    },

    /// Rewrite a single fragment from stdin to stdout
    Snippet {
        /// Skip the linker pipeline
        #[arg(long)]
        no_links: bool,

        /// Skip the highlighter pipeline
        #[arg(long)]
        no_highlight: bool,

        /// Link prefix for generated targets
        #[arg(long, default_value = "")]
        base: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Build { dir, check, base } => {
            build::run(&config, &dir, check, base.as_deref())
        }
        Commands::Snippet {
            no_links,
            no_highlight,
            base,
        } => snippet::run(&config, no_links, no_highlight, &base),
    }
}

/// Load the site configuration: an explicit path must parse; otherwise
/// `refmark.toml` in the working directory is used if present, and the
/// built-in tables if not.
fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    match path {
        Some(path) => {
            SiteConfig::load(path).with_context(|| format!("cannot load {}", path.display()))
        }
        None => {
            let default = Path::new(DEFAULT_CONFIG);
            if default.exists() {
                SiteConfig::load(default)
                    .with_context(|| format!("cannot load {DEFAULT_CONFIG}"))
            } else {
                Ok(SiteConfig::default())
            }
        }
    }
}
