//! CLI entry point for colorset-gen.

use std::process::ExitCode;

use colorset_gen::run;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            error.exit_code()
        }
    }
}
