use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use pickmail::{logging, pipeline, Cli, PickConfig, PickError, Selector};
use slog::{debug, Logger};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let logger = logging::build_logger(cli.log_level());

    match pick(&cli, &logger) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn pick(cli: &Cli, logger: &Logger) -> Result<(), PickError> {
    let config = PickConfig::from_cli(cli).inspect_err(|err| {
        if matches!(err, PickError::MissingArgument) {
            println!("{}", Cli::command().render_usage());
        }
    })?;
    debug!(logger, "configuration"; "config" => ?config);

    let mut selector = Selector::from_seed(config.seed);
    let report = pipeline::run(&config, &mut selector, logger)?;
    print!("{report}");
    Ok(())
}
