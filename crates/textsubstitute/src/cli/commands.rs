//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::format::TextFormat;

/// Apply command arguments.
#[derive(Debug, Args)]
pub struct ApplyCommand {
    /// Text to filter (reads --file or stdin when omitted)
    pub text: Option<String>,

    /// Read the text from this file
    #[arg(short, long, value_name = "PATH", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Original format of the text (unknown when omitted)
    #[arg(short = 't', long = "format", value_enum)]
    pub format: Option<FormatArg>,

    /// Override the configured search term
    #[arg(long)]
    pub search: Option<String>,

    /// Override the configured substitute term
    #[arg(long)]
    pub replace: Option<String>,

    /// Override the configured allowed formats (comma-joined ids or names)
    #[arg(long, value_name = "LIST")]
    pub formats: Option<String>,

    /// Output the outcome as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Formats command arguments.
#[derive(Debug, Args)]
pub struct FormatsCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Text format argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Host auto-format markup
    Moodle,
    /// HTML markup
    Html,
    /// Plain text
    Plain,
    /// Markdown markup
    Markdown,
}

impl From<FormatArg> for TextFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Moodle => Self::Moodle,
            FormatArg::Html => Self::Html,
            FormatArg::Plain => Self::Plain,
            FormatArg::Markdown => Self::Markdown,
        }
    }
}
