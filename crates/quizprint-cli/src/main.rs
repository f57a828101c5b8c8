use std::path::PathBuf;

use clap::Parser;
use eyre::Result;
use quizprint_cli::config::{self, BuildConfig, CONFIG_FILE_NAME};
use quizprint_cli::pipeline;
use quizprint_export::pdf::WeasyPrintRenderer;

/// Convert a quiz page into a print-ready HTML document and PDF.
#[derive(Debug, Parser)]
#[command(name = "quizprint", version)]
struct Cli {
    /// Working directory that relative input, output and config paths
    /// resolve against.
    dir: Option<PathBuf>,

    /// Config file (default: `quizprint.json` in the working directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write only the HTML document; skip PDF rendering.
    #[arg(long)]
    html_only: bool,

    /// Also write the parsed quiz tree as a versioned data file.
    #[arg(long, value_name = "PATH")]
    export_data: Option<PathBuf>,

    /// Write the effective config to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let base_dir = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let config_path = cli
        .config
        .map(|p| BuildConfig::resolve(&base_dir, &p))
        .unwrap_or_else(|| base_dir.join(CONFIG_FILE_NAME));

    let mut config = config::load_config_or_default(&config_path)?;
    if cli.html_only {
        config.render_pdf = false;
    }

    if cli.write_config {
        return config::save_config(&config, &config_path);
    }

    let categories = pipeline::load_tree(&config, &base_dir)?;
    if let Some(path) = cli.export_data {
        pipeline::export_data(&categories, &BuildConfig::resolve(&base_dir, &path))?;
    }

    let renderer = WeasyPrintRenderer::new(config.renderer_program.clone());
    pipeline::build(&categories, &config, &base_dir, &renderer)?;

    Ok(())
}
