//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod doctors;
pub mod login;
pub mod run;
pub mod specialty;

use crate::app::AppContext;
use crate::error::Result;

/// Runs `command` (the workflow when absent) and reports any failure on the
/// console before returning it.
pub fn run(ctx: &AppContext, command: Option<&Commands>) -> Result<()> {
    let result = match command {
        None => run::run(ctx, &run::RunArgs::default()),
        Some(Commands::Run(args)) => run::run(ctx, args),
        Some(Commands::Login(args)) => login::run(ctx, args),
        Some(Commands::Doctors(args)) => doctors::run(ctx, args),
        Some(Commands::Specialty(args)) => specialty::run(&ctx.console, args),
    };
    if let Err(err) = &result {
        ctx.console.failure(err);
    }
    result
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the appointment booking workflow (default)
    Run(run::RunArgs),

    /// Log in and print the user id
    Login(login::LoginArgs),

    /// List doctors registered under a specialty
    Doctors(doctors::DoctorsArgs),

    /// Show which specialty treats a disease
    Specialty(specialty::SpecialtyArgs),
}
