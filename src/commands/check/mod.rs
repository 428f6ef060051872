mod check_exit;
mod check_output;
mod check_scan;
mod runner;

pub use check_exit::{determine_exit_code, exit_code_for_error};
pub use runner::run_check;

#[cfg(test)]
pub(crate) use check_output::format_output;
#[cfg(test)]
pub(crate) use check_scan::{check_files, scan_paths};
#[cfg(test)]
pub(crate) use runner::{apply_cli_overrides, load_config, run_check_impl};
