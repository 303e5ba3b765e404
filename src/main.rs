//! hms-smoke - Hospital management appointment workflow check
//!
//! Exits 0 when every step succeeds and 1 on the first failure.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use hms_smoke::app::AppContext;
use hms_smoke::cli::colors::ColorSupport;
use hms_smoke::cli::output::Console;
use hms_smoke::cli::{Cli, Commands, commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    // offline lookup, no config or client needed
    if let Some(Commands::Specialty(args)) = &cli.command {
        let console = Console::new(ColorSupport::detect());
        return match commands::specialty::run(&console, args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    }

    let ctx = match AppContext::from_cli(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            Console::new(ColorSupport::detect()).failure(&e);
            return ExitCode::FAILURE;
        }
    };

    match commands::run(&ctx, cli.command.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,hms_smoke=info",
        1 => "info,hms_smoke=debug",
        2 => "debug,hms_smoke=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
