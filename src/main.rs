//! blogmeta - schema.org JSON-LD for Markdown blogs.

mod cli;

use anyhow::Result;
use blogmeta::{config::SiteConfig, logger};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

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
        Commands::Date {
            input,
            millis,
            format,
        } => cli::date::run_date(input, *millis, *format),
        Commands::Website { output } => {
            cli::website::run_website(&SiteConfig::load(&cli.config)?, output)
        }
        Commands::Page { args } => cli::page::run_page(&SiteConfig::load(&cli.config)?, args),
    }
}
