//! Disease to specialty catalog
//!
//! Mirrors the mapping the hospital service applies when it matches a
//! patient's recorded disease against the specialty of the booked doctor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HmsError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Disease {
    Diabetes,
    Hypertension,
    Asthma,
    HeartDisease,
    Arthritis,
    Cancer,
    Tuberculosis,
    #[serde(rename = "COVID_19")]
    Covid19,
    Pneumonia,
    Malaria,
    Dengue,
    Typhoid,
    KidneyDisease,
    LiverDisease,
    ThyroidDisorder,
    MentalHealthDisorder,
    SkinDisease,
    EyeDisease,
    EntDisorder,
    NeurologicalDisorder,
    GastrointestinalDisorder,
    RespiratoryDisorder,
    BoneFracture,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Specialty {
    Endocrinology,
    Cardiology,
    Pulmonology,
    Orthopedics,
    Oncology,
    GeneralMedicine,
    Nephrology,
    Gastroenterology,
    Psychiatry,
    Dermatology,
    Ophthalmology,
    Ent,
    Neurology,
}

impl Disease {
    pub const ALL: [Self; 24] = [
        Self::Diabetes,
        Self::Hypertension,
        Self::Asthma,
        Self::HeartDisease,
        Self::Arthritis,
        Self::Cancer,
        Self::Tuberculosis,
        Self::Covid19,
        Self::Pneumonia,
        Self::Malaria,
        Self::Dengue,
        Self::Typhoid,
        Self::KidneyDisease,
        Self::LiverDisease,
        Self::ThyroidDisorder,
        Self::MentalHealthDisorder,
        Self::SkinDisease,
        Self::EyeDisease,
        Self::EntDisorder,
        Self::NeurologicalDisorder,
        Self::GastrointestinalDisorder,
        Self::RespiratoryDisorder,
        Self::BoneFracture,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Diabetes => "DIABETES",
            Self::Hypertension => "HYPERTENSION",
            Self::Asthma => "ASTHMA",
            Self::HeartDisease => "HEART_DISEASE",
            Self::Arthritis => "ARTHRITIS",
            Self::Cancer => "CANCER",
            Self::Tuberculosis => "TUBERCULOSIS",
            Self::Covid19 => "COVID_19",
            Self::Pneumonia => "PNEUMONIA",
            Self::Malaria => "MALARIA",
            Self::Dengue => "DENGUE",
            Self::Typhoid => "TYPHOID",
            Self::KidneyDisease => "KIDNEY_DISEASE",
            Self::LiverDisease => "LIVER_DISEASE",
            Self::ThyroidDisorder => "THYROID_DISORDER",
            Self::MentalHealthDisorder => "MENTAL_HEALTH_DISORDER",
            Self::SkinDisease => "SKIN_DISEASE",
            Self::EyeDisease => "EYE_DISEASE",
            Self::EntDisorder => "ENT_DISORDER",
            Self::NeurologicalDisorder => "NEUROLOGICAL_DISORDER",
            Self::GastrointestinalDisorder => "GASTROINTESTINAL_DISORDER",
            Self::RespiratoryDisorder => "RESPIRATORY_DISORDER",
            Self::BoneFracture => "BONE_FRACTURE",
            Self::Other => "OTHER",
        }
    }
}

impl Specialty {
    pub const ALL: [Self; 13] = [
        Self::Endocrinology,
        Self::Cardiology,
        Self::Pulmonology,
        Self::Orthopedics,
        Self::Oncology,
        Self::GeneralMedicine,
        Self::Nephrology,
        Self::Gastroenterology,
        Self::Psychiatry,
        Self::Dermatology,
        Self::Ophthalmology,
        Self::Ent,
        Self::Neurology,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Endocrinology => "ENDOCRINOLOGY",
            Self::Cardiology => "CARDIOLOGY",
            Self::Pulmonology => "PULMONOLOGY",
            Self::Orthopedics => "ORTHOPEDICS",
            Self::Oncology => "ONCOLOGY",
            Self::GeneralMedicine => "GENERAL_MEDICINE",
            Self::Nephrology => "NEPHROLOGY",
            Self::Gastroenterology => "GASTROENTEROLOGY",
            Self::Psychiatry => "PSYCHIATRY",
            Self::Dermatology => "DERMATOLOGY",
            Self::Ophthalmology => "OPHTHALMOLOGY",
            Self::Ent => "ENT",
            Self::Neurology => "NEUROLOGY",
        }
    }
}

/// Specialty the service expects for a disease.
#[must_use]
pub const fn specialty_for(disease: Disease) -> Specialty {
    match disease {
        Disease::Diabetes | Disease::ThyroidDisorder => Specialty::Endocrinology,
        Disease::Hypertension | Disease::HeartDisease => Specialty::Cardiology,
        Disease::Asthma
        | Disease::Tuberculosis
        | Disease::Covid19
        | Disease::Pneumonia
        | Disease::RespiratoryDisorder => Specialty::Pulmonology,
        Disease::Arthritis | Disease::BoneFracture => Specialty::Orthopedics,
        Disease::Cancer => Specialty::Oncology,
        Disease::Malaria | Disease::Dengue | Disease::Typhoid | Disease::Other => {
            Specialty::GeneralMedicine
        }
        Disease::KidneyDisease => Specialty::Nephrology,
        Disease::LiverDisease | Disease::GastrointestinalDisorder => Specialty::Gastroenterology,
        Disease::MentalHealthDisorder => Specialty::Psychiatry,
        Disease::SkinDisease => Specialty::Dermatology,
        Disease::EyeDisease => Specialty::Ophthalmology,
        Disease::EntDisorder => Specialty::Ent,
        Disease::NeurologicalDisorder => Specialty::Neurology,
    }
}

/// General medicine accepts every disease.
#[must_use]
pub fn matches(disease: Disease, specialty: Specialty) -> bool {
    specialty == Specialty::GeneralMedicine || specialty_for(disease) == specialty
}

fn normalize(input: &str) -> String {
    input.trim().replace('-', "_").to_uppercase()
}

impl FromStr for Disease {
    type Err = HmsError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|disease| disease.as_str() == wanted)
            .ok_or_else(|| HmsError::Config(format!("unknown disease {s}")))
    }
}

impl FromStr for Specialty {
    type Err = HmsError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|specialty| specialty.as_str() == wanted)
            .ok_or_else(|| HmsError::Config(format!("unknown specialty {s}")))
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
