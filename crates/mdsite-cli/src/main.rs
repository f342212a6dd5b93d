use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{LevelFilter, info, warn};
use mdsite_config::Config;
use mdsite_engine::{TitleError, extract_title, io, markdown_to_html};

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env()
        .init();

    match &cli.command {
        Commands::Build { .. } => {
            let config = Config::load_from_path(&cli.config)?.unwrap_or_else(|| {
                info!(
                    "No config file at {}, using defaults",
                    cli.config.display()
                );
                Config::default()
            });
            build(&cli.command.apply_overrides(config))
        }
        Commands::Render { file } => {
            let markdown = io::read_file(file)?;
            let html = markdown_to_html(&markdown)
                .with_context(|| format!("Failed to convert {}", file.display()))?;
            println!("{html}");
            Ok(())
        }
        Commands::Title { file } => {
            println!("{}", read_title(file)?);
            Ok(())
        }
        Commands::Init { force } => {
            if cli.config.exists() && !force {
                bail!(
                    "Configuration file already exists: {}. Use --force to overwrite.",
                    cli.config.display()
                );
            }
            Config::default()
                .save_to_path(&cli.config)
                .with_context(|| format!("Failed to write {}", cli.config.display()))?;
            info!("Configuration file created at {}", cli.config.display());
            Ok(())
        }
    }
}

fn read_title(file: &Path) -> Result<String> {
    let markdown = io::read_file(file)?;
    match extract_title(&markdown) {
        Ok(title) => Ok(title),
        Err(TitleError::NoTitle) => bail!("document has no H1: {}", file.display()),
    }
}

fn build(config: &Config) -> Result<()> {
    info!(
        "Building site from {} into {}",
        config.content_dir.display(),
        config.output_dir.display()
    );

    let copied = if config.static_dir.exists() {
        io::copy_static(&config.static_dir, &config.output_dir).with_context(|| {
            format!(
                "Failed to copy static files from {}",
                config.static_dir.display()
            )
        })?
    } else {
        warn!(
            "Static directory {} not found, skipping",
            config.static_dir.display()
        );
        0
    };

    let pages = io::generate_site(&config.content_dir, &config.template, &config.output_dir)
        .context("Failed to generate pages")?;

    info!(
        "Done: {} pages generated, {} static files copied",
        pages.len(),
        copied
    );
    Ok(())
}
