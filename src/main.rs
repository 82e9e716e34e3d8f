use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use image_manifest::{ManifestBuilder, ManifestConfig, confirmation_message};

/// Write the paths of every image under a directory to a manifest file.
#[derive(Debug, Parser)]
#[command(name = "image-manifest", version, about)]
struct Cli {
    /// Directory to scan (defaults to the configured root or `.`).
    root: Option<PathBuf>,

    /// Manifest file to create or overwrite.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Extension to accept, including the leading dot. Repeat to accept several.
    #[arg(short, long = "extension", value_name = "EXT")]
    extensions: Vec<String>,

    /// JSON configuration file (defaults to `image_manifest.json` when present).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Resolve symbolic links while walking.
    #[arg(long)]
    follow_links: bool,

    /// Sort sibling entries by name.
    #[arg(long)]
    sort: bool,

    /// Write absolute paths.
    #[arg(long)]
    absolute: bool,

    /// Increase log verbosity.
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_filter(&self) -> EnvFilter {
        let level = match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "info",
            (false, 2) => "debug",
            _ => "trace",
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    }

    fn resolve_config(&self) -> Result<ManifestConfig> {
        let mut config = match &self.config {
            Some(path) => ManifestConfig::load(path)?,
            None => {
                let cwd = std::env::current_dir().context("failed to read working directory")?;
                ManifestConfig::discover(&cwd)
            }
        };

        if let Some(root) = &self.root {
            config.root_dir = root.clone();
        }
        if let Some(output) = &self.output {
            config.output_file = output.clone();
        }
        if !self.extensions.is_empty() {
            config.extensions = self.extensions.clone();
        }
        config.follow_links |= self.follow_links;
        config.sort_entries |= self.sort;
        config.absolute_paths |= self.absolute;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter())
        .with_writer(std::io::stderr)
        .init();

    let config = cli.resolve_config()?;
    let summary = ManifestBuilder::from_config(&config)?
        .build()
        .with_context(|| format!("failed to build manifest from {}", config.root_dir.display()))?;

    println!("{}", confirmation_message(&summary));
    Ok(())
}
