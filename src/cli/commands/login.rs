//! hms-smoke login - Authenticate against the auth service

use clap::Args;
use tracing::info;

use crate::app::AppContext;
use crate::client::{AuthPayload, HospitalClient, Identity};
use crate::error::Result;
use crate::workflow::OK_OR_CREATED;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long, env = "HMS_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Logs in and returns the identity later calls authenticate with.
pub fn login(client: &HospitalClient, email: &str, password: &str) -> Result<Identity> {
    const STEP: &str = "log in";
    info!(email, "logging in");
    client
        .login(email, password)?
        .data::<AuthPayload>(STEP, OK_OR_CREATED)?
        .into_identity(STEP)
}

pub fn run(ctx: &AppContext, args: &LoginArgs) -> Result<()> {
    ctx.console.info(&format!("Logging in as {}", args.email));
    let identity = login(&ctx.client, &args.email, &args.password)?;
    ctx.console.success(&format!("Logged in: {}", identity.user_id));
    ctx.console.info("Access token received");
    Ok(())
}
