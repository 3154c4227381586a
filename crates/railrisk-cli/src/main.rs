use std::io::{self, Write};
use std::process::ExitCode;

use railrisk_cli::Outcome;

fn main() -> ExitCode {
    match railrisk_cli::run(std::env::args_os().collect()) {
        Outcome::Display(err) => {
            if err.print().is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Outcome::Report(value) => {
            let mut stdout = io::stdout().lock();
            if writeln!(stdout, "{value}").and_then(|()| stdout.flush()).is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
    }
}
