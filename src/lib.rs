pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;

pub use error::{LayoutGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_USAGE_ERROR: i32 = 1;
pub const EXIT_CHECK_FAILED: i32 = 2;
pub const EXIT_IO_ERROR: i32 = 3;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
