use clap::Parser;
use clap::error::ErrorKind;

use layout_guard::cli::Cli;
use layout_guard::commands::run_check;
use layout_guard::{EXIT_SUCCESS, EXIT_USAGE_ERROR, logging};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let exit_code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
                _ => EXIT_USAGE_ERROR,
            };
            let _ = e.print();
            std::process::exit(exit_code);
        }
    };

    logging::init(cli.verbose);

    std::process::exit(run_check(&cli));
}
