//! Metahead - declarative `<head>` metadata generator.

mod cli;
mod config;
mod generator;
mod head;
mod inject;
mod logger;
mod template;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Preset { path } => cli::preset::write_preset(path.as_deref(), &cli),
        Commands::Build { no_scaffold } => {
            let config = SiteConfig::load(&cli)?;
            cli::build::run(&config, *no_scaffold)
        }
    }
}
