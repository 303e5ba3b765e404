//! Checks applied to an appointment after it has been booked.

use crate::client::{Appointment, CreateAppointmentRequest, EntityId};
use crate::error::{HmsError, Result};

fn shown<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "missing".to_string(), |v| v.to_string())
}

fn check<T>(field: &str, expected: Option<T>, actual: Option<T>) -> Result<()>
where
    T: PartialEq + ToString,
{
    if expected.is_some() && expected == actual {
        Ok(())
    } else {
        Err(HmsError::mismatch(field, shown(expected), shown(actual)))
    }
}

/// The fetched appointment carries what was booked.
pub fn round_trip(booked: &CreateAppointmentRequest, fetched: &Appointment) -> Result<()> {
    check(
        "patientId",
        Some(booked.patient_id.as_str()),
        fetched.patient_id.as_ref().map(EntityId::as_str),
    )?;
    check(
        "doctorId",
        Some(booked.doctor_id.as_str()),
        fetched.doctor_id.as_ref().map(EntityId::as_str),
    )?;
    check("appointmentDate", Some(booked.appointment_date), fetched.date())?;
    check("appointmentTime", booked.appointment_time.get(..5), fetched.time())?;
    Ok(())
}

/// The fetched appointment names both parties.
pub fn named(fetched: &Appointment) -> Result<()> {
    for (field, value) in [
        ("patientName", &fetched.patient_name),
        ("doctorName", &fetched.doctor_name),
    ] {
        if value.as_deref().is_none_or(|name| name.trim().is_empty()) {
            return Err(HmsError::mismatch(field, "a name", "missing"));
        }
    }
    Ok(())
}

/// Two reads of the same appointment agree.
pub fn same_reads(first: &Appointment, second: &Appointment) -> Result<()> {
    let id = |a: &Appointment| a.id.as_ref().map(ToString::to_string);
    let patient = |a: &Appointment| a.patient_id.as_ref().map(ToString::to_string);
    let doctor = |a: &Appointment| a.doctor_id.as_ref().map(ToString::to_string);

    let pairs = [
        ("id", id(first), id(second)),
        ("patientId", patient(first), patient(second)),
        ("doctorId", doctor(first), doctor(second)),
        (
            "appointmentDate",
            first.date().map(|d| d.to_string()),
            second.date().map(|d| d.to_string()),
        ),
        (
            "appointmentTime",
            first.time().map(str::to_string),
            second.time().map(str::to_string),
        ),
        ("status", first.status.clone(), second.status.clone()),
    ];
    for (field, a, b) in pairs {
        if a != b {
            return Err(HmsError::mismatch(
                &format!("repeated read of {field}"),
                shown(a),
                shown(b),
            ));
        }
    }
    Ok(())
}

/// A freshly registered patient lists exactly the one booked appointment.
pub fn listed(appointments: &[Appointment], appointment_id: &EntityId) -> Result<()> {
    if matches!(appointments, [only] if only.id.as_ref() == Some(appointment_id)) {
        return Ok(());
    }
    let ids = appointments
        .iter()
        .map(|a| a.id.as_ref().map_or("missing", EntityId::as_str))
        .collect::<Vec<_>>();
    Err(HmsError::mismatch(
        "patient appointments",
        format!("1 appointment {appointment_id}"),
        format!("{} [{}]", ids.len(), ids.join(", ")),
    ))
}
