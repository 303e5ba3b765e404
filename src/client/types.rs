//! Request and response payloads for the hospital API.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{HmsError, Result};
use crate::specialty::{Disease, Specialty};

/// Identifier returned by the service. UUID strings in practice, but numeric
/// ids are accepted and kept in their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Self(text),
            Raw::Number(number) => Self(number.to_string()),
        })
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Patient,
    Doctor,
    Nurse,
    Receptionist,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Envelope every endpoint wraps its payload in. Only `data` is read.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
    pub gender: Gender,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
    pub user_id: Option<EntityId>,
    pub access_token: Option<String>,
}

/// Authenticated identity: the id and bearer token later calls depend on.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: EntityId,
    pub access_token: String,
}

impl AuthPayload {
    pub fn into_identity(self, step: &str) -> Result<Identity> {
        Ok(Identity {
            user_id: require(step, "userId", self.user_id)?,
            access_token: require_text(step, "accessToken", self.access_token)?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatientRequest {
    pub user_id: EntityId,
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub phone: String,
    pub address: String,
    pub disease: Disease,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientProfile {
    pub id: Option<EntityId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub disease: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDoctorRequest {
    pub user_id: EntityId,
    pub name: String,
    pub email: String,
    pub specialty: Specialty,
    pub phone: String,
    pub qualification: String,
    pub years_of_experience: u32,
    pub gender: Gender,
    pub license_number: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorProfile {
    pub id: Option<EntityId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub patient_id: EntityId,
    pub doctor_id: EntityId,
    pub appointment_date: NaiveDate,
    pub appointment_time: String,
    pub reason: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Option<EntityId>,
    #[serde(default)]
    pub patient_id: Option<EntityId>,
    #[serde(default)]
    pub doctor_id: Option<EntityId>,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub doctor_name: Option<String>,
    #[serde(default)]
    pub appointment_date: Option<String>,
    #[serde(default)]
    pub appointment_time: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl Appointment {
    /// Calendar date, also when the service returns a full date-time.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        let raw = self.appointment_date.as_deref()?;
        NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok()
    }

    /// `HH:MM`, taken from `appointmentTime` or from the time part of
    /// `appointmentDate`.
    #[must_use]
    pub fn time(&self) -> Option<&str> {
        if let Some(time) = self.appointment_time.as_deref() {
            return time.get(..5);
        }
        let raw = self.appointment_date.as_deref()?;
        let (_, time) = raw.split_once('T')?;
        time.get(..5)
    }
}

/// A list payload; services that return a single object count as one entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> Listing<T> {
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}

pub fn require<T>(step: &str, field: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| HmsError::missing(step, field))
}

fn require_text(step: &str, field: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(HmsError::missing(step, field)),
    }
}
