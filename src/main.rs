use std::process::ExitCode;
use clap::Parser;
use log::LevelFilter;
use logviz::errors::ErrorHandler;
use logviz::structs::cli::Cli;
use logviz::workers::command_runner::CommandRunner;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format_target(false)
        .init();

    let mut runner = CommandRunner::new(cli.config);
    match runner.run_command(cli.command.unwrap_or_default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            ErrorHandler::handle_error(&error);
            ExitCode::FAILURE
        }
    }
}
