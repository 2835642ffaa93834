use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use multileg::adapter::inbound::cli::command::{Cli, ColorChoice};
use multileg::adapter::inbound::cli::{dispatch, output};
use multileg::config::Config;
use multileg::error::Error;

/// Exit status for requests rejected before the search runs.
const EXIT_INVALID_REQUEST: u8 = 2;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    output::configure(output::OutputConfig::new(
        cli.json,
        cli.quiet,
        cli.verbose,
        use_color(&cli.color),
    ));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{e:#}"));
            exit_code(&e)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = Config::load_or_default(cli.command.config_path())?;
    match (cli.quiet, cli.verbose) {
        (true, _) => config.logging.level = "warn".into(),
        (false, 0) => {}
        (false, 1) => config.logging.level = "debug".into(),
        (false, _) => config.logging.level = "trace".into(),
    }
    config.init_logging();
    debug!(command = ?cli.command, "Dispatching");

    dispatch(&cli.command, &config)?;
    Ok(())
}

fn exit_code(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<Error>() {
        Some(e) if e.is_client_error() => ExitCode::from(EXIT_INVALID_REQUEST),
        _ => ExitCode::FAILURE,
    }
}

fn use_color(choice: &ColorChoice) -> bool {
    use std::io::IsTerminal;

    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
    }
}
