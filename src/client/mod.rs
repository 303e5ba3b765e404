//! Blocking client for the hospital management REST API.
//!
//! One method per endpoint. Methods return the raw [`ApiResponse`]; callers
//! decide which status codes count as success for their step.

pub mod types;

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{HmsError, Result};
use crate::specialty::Specialty;

pub use types::*;

/// Status code and body of a completed exchange.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_one_of(&self, accepted: &[u16]) -> bool {
        accepted.contains(&self.status)
    }

    /// Checks the status against `accepted` and returns the envelope's `data`.
    pub fn data<T: DeserializeOwned>(self, step: &str, accepted: &[u16]) -> Result<T> {
        if !self.is_one_of(accepted) {
            return Err(HmsError::UnexpectedStatus {
                step: step.to_string(),
                status: self.status,
                body: self.body,
            });
        }
        let envelope: Envelope<T> = serde_json::from_str(&self.body)?;
        envelope.data.ok_or_else(|| HmsError::missing(step, "data"))
    }
}

pub struct HospitalClient {
    base_url: String,
    http: Client,
}

impl HospitalClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| HmsError::Config(format!("http client: {err}")))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn register_user(&self, request: &RegisterRequest) -> Result<ApiResponse> {
        self.post("/api/auth/register", None, request)
    }

    pub fn login(&self, email: &str, password: &str) -> Result<ApiResponse> {
        self.post("/api/auth/login", None, &LoginRequest { email, password })
    }

    pub fn create_patient(
        &self,
        token: &str,
        request: &CreatePatientRequest,
    ) -> Result<ApiResponse> {
        self.post("/api/patients", Some(token), request)
    }

    pub fn create_doctor(&self, token: &str, request: &CreateDoctorRequest) -> Result<ApiResponse> {
        self.post("/api/doctors", Some(token), request)
    }

    pub fn doctors_by_specialty(&self, token: &str, specialty: Specialty) -> Result<ApiResponse> {
        self.get(&format!("/api/doctors/specialty/{specialty}"), token)
    }

    pub fn create_appointment(
        &self,
        token: &str,
        request: &CreateAppointmentRequest,
    ) -> Result<ApiResponse> {
        self.post("/api/appointments", Some(token), request)
    }

    pub fn get_appointment(&self, token: &str, appointment_id: &EntityId) -> Result<ApiResponse> {
        self.get(&format!("/api/appointments/{appointment_id}"), token)
    }

    pub fn patient_appointments(&self, token: &str, patient_id: &EntityId) -> Result<ApiResponse> {
        self.get(&format!("/api/appointments/patient/{patient_id}"), token)
    }

    fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &T,
    ) -> Result<ApiResponse> {
        let mut request = self.http.post(self.url(path)).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        self.send("POST", path, request)
    }

    fn get(&self, path: &str, token: &str) -> Result<ApiResponse> {
        let request = self.http.get(self.url(path)).bearer_auth(token);
        self.send("GET", path, request)
    }

    fn send(&self, method: &str, path: &str, request: RequestBuilder) -> Result<ApiResponse> {
        let response = request.send().map_err(|err| {
            if err.is_connect() {
                HmsError::Connection {
                    base_url: self.base_url.clone(),
                    source: err,
                }
            } else {
                HmsError::Http(err)
            }
        })?;
        let status = response.status().as_u16();
        let body = response.text()?;
        debug!(method, path, status, bytes = body.len(), "api exchange");
        Ok(ApiResponse { status, body })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
