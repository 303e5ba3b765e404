//! hms-smoke doctors - List doctors under a specialty

use clap::Args;

use crate::app::AppContext;
use crate::client::{DoctorProfile, EntityId, Listing};
use crate::error::Result;
use crate::specialty::Specialty;
use crate::workflow::OK_OR_CREATED;

use super::login::login;

#[derive(Args, Debug)]
pub struct DoctorsArgs {
    /// Specialty to look up (e.g. ENDOCRINOLOGY)
    pub specialty: Specialty,

    /// Email of the account to authenticate with
    #[arg(long)]
    pub email: String,

    /// Password of the account to authenticate with
    #[arg(long, env = "HMS_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub fn run(ctx: &AppContext, args: &DoctorsArgs) -> Result<()> {
    let identity = login(&ctx.client, &args.email, &args.password)?;

    ctx.console.info(&format!("Doctors with specialty {}", args.specialty));
    let doctors: Listing<DoctorProfile> = ctx
        .client
        .doctors_by_specialty(&identity.access_token, args.specialty)?
        .data("list doctors by specialty", OK_OR_CREATED)?;
    let doctors = doctors.into_vec();

    ctx.console.success(&format!("Found {} doctor(s)", doctors.len()));
    for doctor in &doctors {
        ctx.console.raw(&format!(
            "  - {} ({})",
            doctor.name.as_deref().unwrap_or("N/A"),
            doctor.id.as_ref().map_or("N/A", EntityId::as_str)
        ));
    }
    Ok(())
}
