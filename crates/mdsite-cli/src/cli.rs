use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mdsite_config::Config;

/// Command line interface for mdsite
#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a static site from markdown")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = Config::FILE_NAME)]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy static files and generate every page
    Build {
        /// Directory containing markdown sources
        #[arg(long)]
        content_dir: Option<PathBuf>,

        /// Directory copied verbatim into the output
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// HTML template with {{ Title }} and {{ Content }} placeholders
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Output directory for the generated site
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Print the body HTML of one markdown file
    Render {
        /// Markdown file to convert
        file: PathBuf,
    },

    /// Print the title (first `# ` heading) of one markdown file
    Title {
        /// Markdown file to inspect
        file: PathBuf,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Applies `build` overrides on top of a loaded config.
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Commands::Build {
            content_dir,
            static_dir,
            template,
            output_dir,
        } = self
        {
            if let Some(dir) = content_dir {
                config.content_dir = dir.clone();
            }
            if let Some(dir) = static_dir {
                config.static_dir = dir.clone();
            }
            if let Some(path) = template {
                config.template = path.clone();
            }
            if let Some(dir) = output_dir {
                config.output_dir = dir.clone();
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_flags_override_config() {
        let cli = Cli::parse_from(["mdsite", "build", "--output-dir", "docs", "-t", "page.html"]);
        let config = cli.command.apply_overrides(Config::default());

        assert_eq!(config.output_dir, PathBuf::from("docs"));
        assert_eq!(config.template, PathBuf::from("page.html"));
        assert_eq!(config.content_dir, PathBuf::from("content"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["mdsite", "render", "index.md", "-v", "-c", "site.toml"]);

        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert!(matches!(cli.command, Commands::Render { .. }));
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
