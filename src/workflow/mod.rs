//! Appointment booking workflow
//!
//! Six strictly sequential steps against the hospital API:
//!
//! 1. register the patient user
//! 2. register the doctor user
//! 3. create the patient profile
//! 4. create the doctor profile
//! 5. book an appointment for the patient with the doctor
//! 6. read the appointment back and check it
//!
//! Every step feeds identifiers into the next one, so the first failure ends
//! the run.

pub mod verify;

use chrono::{Days, Local, NaiveDate, NaiveTime};
use tracing::{info, warn};

use crate::cli::output::Console;
use crate::client::{
    Appointment, AuthPayload, CreateAppointmentRequest, CreateDoctorRequest,
    CreatePatientRequest, DoctorProfile, EntityId, Gender, HospitalClient, Identity, Listing,
    PatientProfile, RegisterRequest, Role, require,
};
use crate::config::Config;
use crate::error::{HmsError, Result};
use crate::specialty::{self, Disease, Specialty};

/// Statuses the service answers with for registrations and reads.
pub const OK_OR_CREATED: &[u16] = &[200, 201];
pub const CREATED: &[u16] = &[201];

const PATIENT_NAME: &str = "Test Patient";
const DOCTOR_NAME: &str = "Dr. Test Doctor";

/// Per-run suffix that keeps emails and license numbers unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTag(String);

impl RunTag {
    /// Local timestamp down to the millisecond.
    #[must_use]
    pub fn now() -> Self {
        Self(Local::now().format("%Y%m%d%H%M%S%3f").to_string())
    }

    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn patient_email(&self) -> String {
        format!("patient_{}@example.com", self.0)
    }

    #[must_use]
    pub fn doctor_email(&self) -> String {
        format!("doctor_{}@hospital.com", self.0)
    }

    #[must_use]
    pub fn license_number(&self) -> String {
        format!("LIC-{}", self.0)
    }
}

/// Everything a run sends, resolved before the first request.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub tag: RunTag,
    pub disease: Disease,
    pub specialty: Specialty,
    pub patient_password: String,
    pub doctor_password: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub reason: String,
    pub notes: String,
}

impl Scenario {
    pub fn from_config(config: &Config, tag: RunTag, today: NaiveDate) -> Result<Self> {
        config.validate()?;
        let appointment = &config.appointment;
        let appointment_date = today
            .checked_add_days(Days::new(u64::from(appointment.days_ahead)))
            .filter(|date| *date > today)
            .ok_or_else(|| {
                HmsError::Config(format!(
                    "cannot schedule {} days after {today}",
                    appointment.days_ahead
                ))
            })?;
        let appointment_time = NaiveTime::parse_from_str(&appointment.time, "%H:%M")
            .map_err(|err| HmsError::Config(format!("appointment time: {err}")))?;

        Ok(Self {
            tag,
            disease: config.scenario.disease,
            specialty: config.scenario.specialty,
            patient_password: config.scenario.patient_password.clone(),
            doctor_password: config.scenario.doctor_password.clone(),
            appointment_date,
            appointment_time,
            reason: appointment.reason.clone(),
            notes: appointment.notes.clone(),
        })
    }

    #[must_use]
    pub fn time_text(&self) -> String {
        self.appointment_time.format("%H:%M").to_string()
    }

    #[must_use]
    pub fn specialty_matches(&self) -> bool {
        specialty::matches(self.disease, self.specialty)
    }
}

/// Identifiers produced by a successful run.
#[derive(Debug, Clone)]
pub struct WorkflowReport {
    pub patient_user_id: EntityId,
    pub patient_id: EntityId,
    pub doctor_user_id: EntityId,
    pub doctor_id: EntityId,
    pub appointment_id: EntityId,
    pub status: Option<String>,
    pub disease: Disease,
    pub specialty: Specialty,
    pub specialty_matches: bool,
    pub appointments_listed: usize,
}

pub struct WorkflowRunner<'a> {
    client: &'a HospitalClient,
    console: &'a Console,
}

impl<'a> WorkflowRunner<'a> {
    #[must_use]
    pub const fn new(client: &'a HospitalClient, console: &'a Console) -> Self {
        Self { client, console }
    }

    pub fn run(&self, scenario: &Scenario) -> Result<WorkflowReport> {
        let patient_email = scenario.tag.patient_email();
        let doctor_email = scenario.tag.doctor_email();

        self.console.step(1, "Register Patient User");
        let patient = self.register(
            "register patient",
            RegisterRequest {
                email: patient_email.clone(),
                password: scenario.patient_password.clone(),
                name: PATIENT_NAME.to_string(),
                role: Role::Patient,
                gender: Gender::Male,
            },
        )?;
        self.console.success(&format!("Patient registered: {}", patient.user_id));

        self.console.step(2, "Register Doctor User");
        let doctor = self.register(
            "register doctor",
            RegisterRequest {
                email: doctor_email.clone(),
                password: scenario.doctor_password.clone(),
                name: DOCTOR_NAME.to_string(),
                role: Role::Doctor,
                gender: Gender::Female,
            },
        )?;
        self.console.success(&format!("Doctor registered: {}", doctor.user_id));

        self.console.step(3, "Create Patient Profile");
        let patient_id = self.create_patient(scenario, &patient, patient_email)?;

        self.console.step(4, "Create Doctor Profile");
        let doctor_id = self.create_doctor(scenario, &doctor, doctor_email)?;

        self.console.step(5, "Book Appointment with Disease-Specialty Matching");
        let booked = CreateAppointmentRequest {
            patient_id: patient_id.clone(),
            doctor_id: doctor_id.clone(),
            appointment_date: scenario.appointment_date,
            appointment_time: scenario.time_text(),
            reason: scenario.reason.clone(),
            notes: scenario.notes.clone(),
        };
        let created = self.book(scenario, &patient, &booked)?;
        let appointment_id = require("book appointment", "id", created.id.clone())?;

        self.console.step(6, "Verify Appointment");
        let appointments_listed = self.verify(&patient, &booked, &appointment_id, &patient_id)?;

        info!(appointment = %appointment_id, "workflow completed");
        Ok(WorkflowReport {
            patient_user_id: patient.user_id,
            patient_id,
            doctor_user_id: doctor.user_id,
            doctor_id,
            appointment_id,
            status: created.status,
            disease: scenario.disease,
            specialty: scenario.specialty,
            specialty_matches: scenario.specialty_matches(),
            appointments_listed,
        })
    }

    fn register(&self, step: &str, request: RegisterRequest) -> Result<Identity> {
        self.console.info(&format!("Registering {:?} user: {}", request.role, request.email));
        info!(step, email = %request.email, "registering user");
        self.client
            .register_user(&request)?
            .data::<AuthPayload>(step, OK_OR_CREATED)?
            .into_identity(step)
    }

    fn create_patient(
        &self,
        scenario: &Scenario,
        patient: &Identity,
        email: String,
    ) -> Result<EntityId> {
        const STEP: &str = "create patient profile";
        self.console.info(&format!(
            "Creating patient profile with {} condition",
            scenario.disease
        ));
        let request = CreatePatientRequest {
            user_id: patient.user_id.clone(),
            name: PATIENT_NAME.to_string(),
            email,
            gender: Gender::Male,
            date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 15).unwrap_or_default(),
            phone: "+15550001234".to_string(),
            address: "123 Test Street, Test City".to_string(),
            disease: scenario.disease,
        };
        let profile: PatientProfile = self
            .client
            .create_patient(&patient.access_token, &request)?
            .data(STEP, CREATED)?;
        let id = require(STEP, "id", profile.id)?;
        self.console.success(&format!("Patient profile created: {id}"));
        self.console.info(&format!(
            "Disease: {}",
            profile.disease.as_deref().unwrap_or("N/A")
        ));
        Ok(id)
    }

    fn create_doctor(
        &self,
        scenario: &Scenario,
        doctor: &Identity,
        email: String,
    ) -> Result<EntityId> {
        const STEP: &str = "create doctor profile";
        self.console.info(&format!(
            "Creating doctor profile with {} specialty",
            scenario.specialty
        ));
        let request = CreateDoctorRequest {
            user_id: doctor.user_id.clone(),
            name: DOCTOR_NAME.to_string(),
            email,
            specialty: scenario.specialty,
            phone: "+15559998765".to_string(),
            qualification: format!("MD, {}", title_case(scenario.specialty.as_str())),
            years_of_experience: 10,
            gender: Gender::Female,
            license_number: scenario.tag.license_number(),
        };
        let profile: DoctorProfile = self
            .client
            .create_doctor(&doctor.access_token, &request)?
            .data(STEP, CREATED)?;
        let id = require(STEP, "id", profile.id)?;
        self.console.success(&format!("Doctor profile created: {id}"));
        self.console.info(&format!(
            "Specialty: {}",
            profile.specialty.as_deref().unwrap_or("N/A")
        ));
        Ok(id)
    }

    fn book(
        &self,
        scenario: &Scenario,
        patient: &Identity,
        booked: &CreateAppointmentRequest,
    ) -> Result<Appointment> {
        self.console.info(&format!(
            "Booking appointment for {} at {}",
            booked.appointment_date, booked.appointment_time
        ));
        if scenario.specialty_matches() {
            self.console.info(&format!(
                "Patient disease ({}) should match doctor specialty ({})",
                scenario.disease, scenario.specialty
            ));
        } else {
            warn!(
                disease = %scenario.disease,
                specialty = %scenario.specialty,
                expected = %specialty::specialty_for(scenario.disease),
                "disease and specialty do not match; the service should reject the booking"
            );
            self.console.info(&format!(
                "Patient disease ({}) does not match doctor specialty ({}); expecting a refusal",
                scenario.disease, scenario.specialty
            ));
        }

        let appointment: Appointment = self
            .client
            .create_appointment(&patient.access_token, booked)?
            .data("book appointment", CREATED)?;
        if let Some(id) = &appointment.id {
            self.console.success(&format!("Appointment created: {id}"));
        }
        self.console.info(&format!(
            "Status: {}",
            appointment.status.as_deref().unwrap_or("N/A")
        ));
        self.console.info(&format!(
            "Date: {} at {}",
            appointment.appointment_date.as_deref().unwrap_or("N/A"),
            appointment.time().unwrap_or("N/A")
        ));
        Ok(appointment)
    }

    fn verify(
        &self,
        patient: &Identity,
        booked: &CreateAppointmentRequest,
        appointment_id: &EntityId,
        patient_id: &EntityId,
    ) -> Result<usize> {
        const FETCH: &str = "fetch appointment";
        const LIST: &str = "list patient appointments";
        let token = patient.access_token.as_str();

        self.console.info("Retrieving appointment details...");
        let first: Appointment = self
            .client
            .get_appointment(token, appointment_id)?
            .data(FETCH, OK_OR_CREATED)?;
        self.console.success("Appointment retrieved successfully");
        self.console.info(&format!(
            "Appointment ID: {}",
            first.id.as_ref().map_or("N/A", EntityId::as_str)
        ));
        self.console.info(&format!(
            "Patient: {}",
            first.patient_name.as_deref().unwrap_or("N/A")
        ));
        self.console.info(&format!(
            "Doctor: {}",
            first.doctor_name.as_deref().unwrap_or("N/A")
        ));
        self.console.info(&format!(
            "Status: {}",
            first.status.as_deref().unwrap_or("N/A")
        ));
        verify::round_trip(booked, &first)?;
        verify::named(&first)?;

        let second: Appointment = self
            .client
            .get_appointment(token, appointment_id)?
            .data(FETCH, OK_OR_CREATED)?;
        verify::same_reads(&first, &second)?;
        self.console.success("Repeated read returned the same appointment");

        self.console.info("Retrieving all patient appointments...");
        let listing: Listing<Appointment> = self
            .client
            .patient_appointments(token, patient_id)?
            .data(LIST, OK_OR_CREATED)?;
        let appointments = listing.into_vec();
        self.console.success(&format!("Found {} appointment(s)", appointments.len()));
        verify::listed(&appointments, appointment_id)?;
        Ok(appointments.len())
    }
}

fn title_case(code: &str) -> String {
    let lower = code.replace('_', " ").to_lowercase();
    let mut chars = lower.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
