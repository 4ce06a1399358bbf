//! Command-line interface definitions.

use blogmeta::page::PageKind;
use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// schema.org JSON-LD for Markdown blogs
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "blogmeta.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Print debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Normalize a date the way frontmatter dates are read
    #[command(visible_alias = "d")]
    Date {
        /// Date text (`2024-01-15`, `2024/03/05 10:30`, ISO-8601)
        input: String,

        /// Read INPUT as milliseconds since the Unix epoch
        #[arg(short, long)]
        millis: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = DateFormat::Both)]
        format: DateFormat,
    },

    /// Print the WebSite record for the configured site
    #[command(visible_alias = "w")]
    Website {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print page records for Markdown files
    #[command(visible_alias = "p")]
    Page {
        #[command(flatten)]
        args: PageArgs,
    },
}

/// How `date` prints its result.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `2024-01-15T00:00:00.000Z`
    Iso,
    /// `January 15, 2024`
    Display,
    /// JSON object with both forms
    Both,
}

/// Output options shared by record-printing commands.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Wrap output in `<script type="application/ld+json">` elements
    #[arg(short, long)]
    pub script: bool,
}

/// Page command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct PageArgs {
    /// Markdown files to describe
    #[arg(value_name = "FILE", required = true, value_hint = clap::ValueHint::FilePath)]
    pub files: Vec<PathBuf>,

    /// Page kind, overriding frontmatter `kind`
    #[arg(short, long, value_enum)]
    pub kind: Option<PageKind>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_page() {
        let cli = Cli::parse_from([
            "blogmeta", "-C", "site.toml", "page", "a.md", "b.md", "--kind", "blog", "--script",
        ]);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        let Commands::Page { args } = cli.command else {
            panic!("expected page command");
        };
        assert_eq!(args.files.len(), 2);
        assert_eq!(args.kind, Some(PageKind::Blog));
        assert!(args.output.script);
    }

    #[test]
    fn test_parse_date_defaults() {
        let cli = Cli::parse_from(["blogmeta", "date", "2024-01-15"]);
        let Commands::Date { input, millis, format } = cli.command else {
            panic!("expected date command");
        };
        assert_eq!(input, "2024-01-15");
        assert!(!millis);
        assert_eq!(format, DateFormat::Both);
        assert_eq!(cli.config, PathBuf::from("blogmeta.toml"));
    }

    #[test]
    fn test_page_requires_files() {
        assert!(Cli::try_parse_from(["blogmeta", "page"]).is_err());
    }
}
