//! hms-smoke run - Execute the appointment booking workflow

use chrono::Local;
use clap::Args;

use crate::app::AppContext;
use crate::cli::output::HumanLayout;
use crate::config::Config;
use crate::error::Result;
use crate::specialty::{Disease, Specialty};
use crate::workflow::{RunTag, Scenario, WorkflowReport, WorkflowRunner};

#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// Suffix for generated emails and license number (default: current timestamp)
    #[arg(long)]
    pub run_tag: Option<String>,

    /// Disease recorded on the patient profile
    #[arg(long)]
    pub disease: Option<Disease>,

    /// Specialty recorded on the doctor profile
    #[arg(long)]
    pub specialty: Option<Specialty>,

    /// Days from today to schedule the appointment (at least 1)
    #[arg(long)]
    pub days_ahead: Option<u32>,

    /// Appointment time as HH:MM
    #[arg(long)]
    pub time: Option<String>,
}

impl RunArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(disease) = self.disease {
            config.scenario.disease = disease;
        }
        if let Some(specialty) = self.specialty {
            config.scenario.specialty = specialty;
        }
        if let Some(days) = self.days_ahead {
            config.appointment.days_ahead = days;
        }
        if let Some(time) = &self.time {
            config.appointment.time.clone_from(time);
        }
    }
}

pub fn run(ctx: &AppContext, args: &RunArgs) -> Result<()> {
    let mut config = ctx.config.clone();
    args.apply(&mut config);

    let tag = args.run_tag.clone().map_or_else(RunTag::now, RunTag::new);
    let scenario = Scenario::from_config(&config, tag, Local::now().date_naive())?;

    ctx.console.heading("Hospital Management System - Appointment Workflow Test");
    ctx.console.raw(&format!("Testing against: {}", ctx.client.base_url()));

    let report = WorkflowRunner::new(&ctx.client, &ctx.console).run(&scenario)?;
    ctx.console.completed(summary(&report));
    Ok(())
}

#[must_use]
pub fn summary(report: &WorkflowReport) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout
        .section("Summary:")
        .kv("Patient User ID:", report.patient_user_id.as_str())
        .kv("Patient Profile ID:", report.patient_id.as_str())
        .kv("Doctor User ID:", report.doctor_user_id.as_str())
        .kv("Doctor Profile ID:", report.doctor_id.as_str())
        .kv("Appointment ID:", report.appointment_id.as_str())
        .kv("Status:", report.status.as_deref().unwrap_or("N/A"))
        .kv("Listed appointments:", &report.appointments_listed.to_string())
        .section("Disease-Specialty Match:")
        .kv("Patient Disease:", report.disease.as_str())
        .kv("Doctor Specialty:", report.specialty.as_str())
        .kv("Match:", if report.specialty_matches { "✓" } else { "✗" });
    layout
}
