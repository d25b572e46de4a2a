use std::process::ExitCode;

use daybook::cli::output::Notice;

fn main() -> ExitCode {
    if let Err(err) = daybook::run() {
        Notice::error(format!("{err:#}")).print();
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
