use std::path::Path;

use clap::CommandFactory;
use tracing::debug;

use crate::checker::FileChecker;
use crate::cli::Cli;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::output::{ColorMode, ErrorOutput};
use crate::scanner::{DirectoryScanner, ExtensionFilter};
use crate::EXIT_CHECK_FAILED;

use super::check_exit::{determine_exit_code, exit_code_for_error};
use super::check_output::{format_output, write_output};
use super::check_scan::{check_files, scan_paths};

#[must_use]
pub fn run_check(cli: &Cli) -> i32 {
    match run_check_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(ColorMode::from(cli.color)).print(&e, suggestion_for(&e));
            exit_code_for_error(&e)
        }
    }
}

pub(crate) fn run_check_impl(cli: &Cli) -> crate::Result<i32> {
    // 1. Paths are mandatory
    if cli.paths.is_empty() {
        eprintln!("Missing directory path(s)");
        eprintln!("{}", Cli::command().render_help());
        return Ok(EXIT_CHECK_FAILED);
    }

    // 2. Load configuration and apply CLI overrides
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, cli);
    let check_config = config.check_config()?;

    // 3. Discover files
    let filter = ExtensionFilter::new(&config.check.extension, &config.check.exclude)?;
    let scanner = DirectoryScanner::new(filter);
    let files = scan_paths(&scanner, &cli.paths)?;
    debug!(count = files.len(), "files to check");

    // 4. Check in parallel
    let checker = FileChecker::new(&check_config);
    let results = check_files(&checker, &files);

    // 5. Report
    let output = format_output(cli.format, &results, ColorMode::from(cli.color), cli.quiet)?;
    write_output(&output)?;

    Ok(determine_exit_code(&results))
}

pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    match config_path {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

pub(crate) fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(ref indent) = cli.indent {
        config.check.indent.clone_from(indent);
    }
    if let Some(ref extension) = cli.file_extension {
        config.check.extension.clone_from(extension);
    }
    if let Some(max) = cli.line_max_length {
        config.check.line_max_length = max;
    }
    config.check.exclude.extend(cli.exclude_file.iter().cloned());
}

fn suggestion_for(error: &crate::LayoutGuardError) -> Option<&'static str> {
    use crate::LayoutGuardError;

    match error {
        LayoutGuardError::InvalidPattern { .. } => {
            Some("exclude patterns are regular expressions, escape literal dots as \\.")
        }
        LayoutGuardError::TomlParse(_) => Some("check the [check] table of the configuration file"),
        _ => None,
    }
}
