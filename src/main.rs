//! Pushover: send push notifications from the command line.
//!
//! Entry point for the pushover application.

use pushover::config::{Cli, Command};
use std::process::ExitCode;

mod app;
mod commands;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};
use run::RunError;

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.verbosity());
    tracing::debug!("args: {cli:?}");

    if let Some(Command::Config(command)) = &cli.command {
        return commands::execute(command, cli.config.as_deref());
    }

    let (preset, message) = match run::prepare(&cli) {
        Ok(prepared) => prepared,
        Err(e) => {
            eprintln!("{e}");
            if let RunError::Config(ref config_error) = e {
                print_config_hint(config_error);
            }
            return e.exit_code();
        }
    };

    match run::send_blocking(&preset, &message) {
        Ok(response) => run::report(&response),
        Err(e) => {
            eprintln!("{e}");
            e.exit_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        assert_ne!(exit_code::SUCCESS, exit_code::CONFIG_ERROR);
        assert_ne!(exit_code::CONFIG_ERROR, exit_code::runtime_error());
    }
}
