mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, analyze};
use terminal::{logging, print};
use tracing::error;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.log_level());
    print::initialize(commands.no_color);

    match analyze::analyze(&commands) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
