//! E2E Scenario: appointment booking against a healthy service
//!
//! Covers the full six-step run, token scoping per identity, the literal
//! DIABETES/ENDOCRINOLOGY scenario and the tolerated 200/201 statuses.

use serde_json::json;

use hms_smoke::cli::output::Console;
use hms_smoke::workflow::WorkflowRunner;

use super::common::*;

#[test]
fn full_workflow_books_and_verifies_appointment() {
    let hospital = MockHospital::start();
    let register_patient = hospital.mock_register_patient();
    let register_doctor = hospital.mock_register_doctor();
    let create_patient = hospital.mock_create_patient(201);
    let create_doctor = hospital.mock_create_doctor();
    let book = hospital.mock_book(tomorrow_of(today()));
    let fetch = hospital.mock_fetch(appointment_json(tomorrow_of(today())));
    let listing = hospital.mock_listing(json!([appointment_json(tomorrow_of(today()))]));

    let client = hospital.client();
    let console = Console::silent();
    let report = WorkflowRunner::new(&client, &console)
        .run(&scenario("20240101120000"))
        .expect("workflow should succeed");

    assert_eq!(report.patient_user_id.as_str(), PATIENT_USER_ID);
    assert_eq!(report.doctor_user_id.as_str(), DOCTOR_USER_ID);
    assert_eq!(report.patient_id.as_str(), PATIENT_ID);
    assert_eq!(report.doctor_id.as_str(), DOCTOR_ID);
    assert_eq!(report.appointment_id.as_str(), APPOINTMENT_ID);
    assert_eq!(report.status.as_deref(), Some("PENDING"));
    assert_eq!(report.appointments_listed, 1);
    assert!(report.specialty_matches);

    register_patient.assert();
    register_doctor.assert();
    create_patient.assert();
    create_doctor.assert();
    book.assert();
    fetch.assert_calls(2);
    listing.assert();
}

#[test]
fn literal_run_tag_drives_emails_and_license() {
    let hospital = MockHospital::start();
    let patient_email = hospital.server.mock(|when, then| {
        when.method(httpmock::Method::POST)
            .path("/api/auth/register")
            .body_includes("\"email\":\"patient_20240101120000@example.com\"")
            .body_includes("\"password\":\"Patient123456\"")
            .body_includes("\"gender\":\"MALE\"");
        then.status(201).json_body(envelope(json!({
            "userId": PATIENT_USER_ID,
            "accessToken": PATIENT_TOKEN
        })));
    });
    let doctor_email = hospital.server.mock(|when, then| {
        when.method(httpmock::Method::POST)
            .path("/api/auth/register")
            .body_includes("\"email\":\"doctor_20240101120000@hospital.com\"")
            .body_includes("\"gender\":\"FEMALE\"");
        then.status(201).json_body(envelope(json!({
            "userId": DOCTOR_USER_ID,
            "accessToken": DOCTOR_TOKEN
        })));
    });
    hospital.mock_create_patient(201);
    let license = hospital.server.mock(|when, then| {
        when.method(httpmock::Method::POST)
            .path("/api/doctors")
            .body_includes("\"licenseNumber\":\"LIC-20240101120000\"")
            .body_includes("\"qualification\":\"MD, Endocrinology\"");
        then.status(201)
            .json_body(envelope(json!({"id": DOCTOR_ID, "specialty": "ENDOCRINOLOGY"})));
    });
    hospital.mock_book(tomorrow_of(today()));
    hospital.mock_fetch(appointment_json(tomorrow_of(today())));
    hospital.mock_listing(json!([appointment_json(tomorrow_of(today()))]));

    let client = hospital.client();
    let console = Console::silent();
    WorkflowRunner::new(&client, &console)
        .run(&scenario("20240101120000"))
        .expect("workflow should succeed");

    patient_email.assert();
    doctor_email.assert();
    license.assert();
}

#[test]
fn date_time_response_and_single_object_listing_are_accepted() {
    let hospital = MockHospital::start();
    hospital.mock_register_patient();
    hospital.mock_register_doctor();
    hospital.mock_create_patient(201);
    hospital.mock_create_doctor();
    hospital.mock_book(tomorrow_of(today()));

    let mut folded = appointment_json(tomorrow_of(today()));
    folded["appointmentDate"] = json!("2024-01-02T10:00:00");
    folded
        .as_object_mut()
        .unwrap()
        .remove("appointmentTime");
    hospital.mock_fetch(folded.clone());
    hospital.mock_listing(folded);

    let client = hospital.client();
    let console = Console::silent();
    let report = WorkflowRunner::new(&client, &console)
        .run(&scenario("t1"))
        .expect("workflow should succeed");
    assert_eq!(report.appointments_listed, 1);
}
