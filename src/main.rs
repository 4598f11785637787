use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

use happy_thoughts::Reported;
use happy_thoughts::cli::Cli;
use happy_thoughts::output::Output;

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.json;

    match happy_thoughts::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if !err.is::<Reported>() {
                if let Err(write_err) = Output::new(json).failure(&err) {
                    error!(%write_err, "failed to report error: {err:#}");
                }
            }
            ExitCode::FAILURE
        }
    }
}
