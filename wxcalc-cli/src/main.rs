use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use wxcalc_core::Component;
use wxcalc_models::{cloud_base::CloudBaseEngine, turbulence::TurbulenceEngine};

mod cli;
mod config;
mod error;
mod logging;
mod render;

use crate::{
    cli::{Cli, Command},
    config::Config,
    error::CliError,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, CliError> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::CloudBase(args) => {
            let engine = CloudBaseEngine.inspect(
                |request| debug!(?request, "cloud base request"),
                |result| logging::rejected("cloud base", result),
            );
            let result = engine.call(args.into_request(&config))?;
            Ok(render::cloud_base(&result))
        }
        Command::Turbulence(args) => {
            let engine = TurbulenceEngine.inspect(
                |request| debug!(?request, "turbulence request"),
                |result| logging::rejected("turbulence", result),
            );
            let result = engine.call(args.into_request(&config))?;
            Ok(render::turbulence(&result))
        }
    }
}
