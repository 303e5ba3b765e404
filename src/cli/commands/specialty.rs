//! hms-smoke specialty - Offline disease to specialty lookup

use clap::Args;

use crate::cli::output::Console;
use crate::error::{HmsError, Result};
use crate::specialty::{self, Disease, Specialty};

#[derive(Args, Debug)]
pub struct SpecialtyArgs {
    /// Disease code (e.g. DIABETES)
    pub disease: Disease,

    /// Also check whether this specialty may treat the disease
    #[arg(long)]
    pub check: Option<Specialty>,
}

/// Fails when `--check` names a specialty that does not treat the disease.
pub fn run(console: &Console, args: &SpecialtyArgs) -> Result<()> {
    let expected = specialty::specialty_for(args.disease);
    console.raw(&format!("{} → {expected}", args.disease));

    if let Some(candidate) = args.check {
        if specialty::matches(args.disease, candidate) {
            console.success(&format!("{candidate} accepts {} patients", args.disease));
        } else {
            console.error(&format!(
                "{candidate} does not match {} (expected {expected})",
                args.disease
            ));
            return Err(HmsError::mismatch("specialty", expected, candidate));
        }
    }
    Ok(())
}
