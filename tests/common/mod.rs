//! Common test utilities shared across integration tests.
//!
//! `MockHospital` stands in for the API gateway: each `mock_*` helper
//! registers one endpoint with the responses a healthy service gives.

#![allow(dead_code)]

use std::net::TcpListener;
use std::time::Duration;

use chrono::{Days, NaiveDate};
use httpmock::Mock;
use httpmock::prelude::*;
use serde_json::{Value, json};

use hms_smoke::client::HospitalClient;
use hms_smoke::config::Config;
use hms_smoke::workflow::{RunTag, Scenario};

pub const PATIENT_USER_ID: &str = "0d6f6b3e-patient-user";
pub const DOCTOR_USER_ID: &str = "7a1c2d4f-doctor-user";
pub const PATIENT_TOKEN: &str = "patient-token";
pub const DOCTOR_TOKEN: &str = "doctor-token";
pub const PATIENT_ID: &str = "b3e1c0aa-patient";
pub const DOCTOR_ID: &str = "c9d8e7f6-doctor";
pub const APPOINTMENT_ID: &str = "e5f4a3b2-appointment";

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

pub fn tomorrow_of(day: NaiveDate) -> NaiveDate {
    day.checked_add_days(Days::new(1)).unwrap()
}

pub fn scenario(tag: &str) -> Scenario {
    Scenario::from_config(&Config::default(), RunTag::new(tag), today()).unwrap()
}

/// Base URL nothing listens on.
pub fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

pub fn envelope(data: Value) -> Value {
    json!({ "success": true, "message": "ok", "data": data })
}

pub fn appointment_json(date: NaiveDate) -> Value {
    json!({
        "id": APPOINTMENT_ID,
        "patientId": PATIENT_ID,
        "patientName": "Test Patient",
        "doctorId": DOCTOR_ID,
        "doctorName": "Dr. Test Doctor",
        "appointmentDate": date.format("%Y-%m-%d").to_string(),
        "appointmentTime": "10:00",
        "status": "PENDING",
        "reason": "Diabetes management consultation"
    })
}

pub struct MockHospital {
    pub server: MockServer,
}

impl MockHospital {
    pub fn start() -> Self {
        Self {
            server: MockServer::start(),
        }
    }

    pub fn base_url(&self) -> String {
        self.server.base_url()
    }

    pub fn client(&self) -> HospitalClient {
        HospitalClient::new(&self.server.base_url(), Duration::from_secs(5)).unwrap()
    }

    pub fn mock_register(&self, role: &str, status: u16, body: Value) -> Mock<'_> {
        let role = format!("\"role\":\"{role}\"");
        self.server.mock(|when, then| {
            when.method(POST)
                .path("/api/auth/register")
                .body_includes(role.as_str());
            then.status(status)
                .header("content-type", "application/json")
                .json_body(body);
        })
    }

    pub fn mock_register_patient(&self) -> Mock<'_> {
        self.mock_register(
            "PATIENT",
            201,
            envelope(json!({
                "userId": PATIENT_USER_ID,
                "accessToken": PATIENT_TOKEN,
                "tokenType": "Bearer",
                "role": "PATIENT"
            })),
        )
    }

    pub fn mock_register_doctor(&self) -> Mock<'_> {
        self.mock_register(
            "DOCTOR",
            200,
            envelope(json!({
                "userId": DOCTOR_USER_ID,
                "accessToken": DOCTOR_TOKEN,
                "tokenType": "Bearer",
                "role": "DOCTOR"
            })),
        )
    }

    pub fn mock_create_patient(&self, status: u16) -> Mock<'_> {
        self.server.mock(|when, then| {
            when.method(POST)
                .path("/api/patients")
                .header("authorization", format!("Bearer {PATIENT_TOKEN}"))
                .body_includes(format!("\"userId\":\"{PATIENT_USER_ID}\""))
                .body_includes("\"disease\":\"DIABETES\"");
            then.status(status)
                .header("content-type", "application/json")
                .json_body(envelope(json!({
                    "id": PATIENT_ID,
                    "name": "Test Patient",
                    "disease": "DIABETES"
                })));
        })
    }

    pub fn mock_create_doctor(&self) -> Mock<'_> {
        self.server.mock(|when, then| {
            when.method(POST)
                .path("/api/doctors")
                .header("authorization", format!("Bearer {DOCTOR_TOKEN}"))
                .body_includes(format!("\"userId\":\"{DOCTOR_USER_ID}\""))
                .body_includes("\"specialty\":\"ENDOCRINOLOGY\"");
            then.status(201)
                .header("content-type", "application/json")
                .json_body(envelope(json!({
                    "id": DOCTOR_ID,
                    "name": "Dr. Test Doctor",
                    "specialty": "ENDOCRINOLOGY"
                })));
        })
    }

    /// Booking that only succeeds for the known patient and doctor.
    pub fn mock_book(&self, date: NaiveDate) -> Mock<'_> {
        let date = format!("\"appointmentDate\":\"{}\"", date.format("%Y-%m-%d"));
        self.server.mock(|when, then| {
            when.method(POST)
                .path("/api/appointments")
                .header("authorization", format!("Bearer {PATIENT_TOKEN}"))
                .body_includes(format!("\"patientId\":\"{PATIENT_ID}\""))
                .body_includes(format!("\"doctorId\":\"{DOCTOR_ID}\""))
                .body_includes(date.as_str())
                .body_includes("\"appointmentTime\":\"10:00\"");
            then.status(201)
                .header("content-type", "application/json")
                .json_body(envelope(appointment_json(tomorrow_of(today()))));
        })
    }

    pub fn mock_book_response(&self, status: u16, body: Value) -> Mock<'_> {
        self.server.mock(|when, then| {
            when.method(POST).path("/api/appointments");
            then.status(status)
                .header("content-type", "application/json")
                .json_body(body);
        })
    }

    pub fn mock_fetch(&self, body: Value) -> Mock<'_> {
        self.server.mock(|when, then| {
            when.method(GET)
                .path(format!("/api/appointments/{APPOINTMENT_ID}"))
                .header("authorization", format!("Bearer {PATIENT_TOKEN}"));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(envelope(body));
        })
    }

    pub fn mock_listing(&self, body: Value) -> Mock<'_> {
        self.server.mock(|when, then| {
            when.method(GET)
                .path(format!("/api/appointments/patient/{PATIENT_ID}"))
                .header("authorization", format!("Bearer {PATIENT_TOKEN}"));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(envelope(body));
        })
    }
}
