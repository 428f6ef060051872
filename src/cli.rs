use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "layout-guard")]
#[command(author, version, about = "Layout guard - enforce indentation, blank-line and bracket rules on config files")]
#[command(override_usage = "layout-guard [OPTIONS] <PATH>...")]
#[command(long_about = "Checks configuration files for consistent indentation, blank lines \
    around nested sections, balanced brackets and maximum line length.\n\n\
    Exit codes:\n  \
    0 - All files are properly formatted\n  \
    1 - Invalid arguments or configuration\n  \
    2 - At least one file failed, or no path given\n  \
    3 - Directory traversal error")]
pub struct Cli {
    /// Directories (scanned recursively) or files to check
    pub paths: Vec<PathBuf>,

    /// Indentation string [default: two spaces]
    #[arg(long)]
    pub indent: Option<String>,

    /// Extension of the files to check [default: conf]
    #[arg(long)]
    pub file_extension: Option<String>,

    /// Exclude file pattern (regex, comma separated, can be specified multiple times)
    #[arg(long, value_delimiter = ',')]
    pub exclude_file: Vec<String>,

    /// Maximum line length [default: 100]
    #[arg(long)]
    pub line_max_length: Option<usize>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Only report files that fail
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase logging verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
