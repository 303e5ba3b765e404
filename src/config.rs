use std::path::{Path, PathBuf};

use chrono::NaiveTime;
use serde::Deserialize;

use crate::error::{HmsError, Result};
use crate::specialty::{Disease, Specialty};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub target: TargetConfig,
    #[serde(default)]
    pub appointment: AppointmentConfig,
    #[serde(default)]
    pub scenario: ScenarioConfig,
}

impl Config {
    /// Defaults, then the config file, then `HMS_*` environment overrides.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("HMS_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(HmsError::Config(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else if let Some(global) = Self::load_global()? {
            config.merge_patch(global);
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("hms-smoke/config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| HmsError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| HmsError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    pub fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.target {
            self.target.merge(patch);
        }
        if let Some(patch) = patch.appointment {
            self.appointment.merge(patch);
        }
        if let Some(patch) = patch.scenario {
            self.scenario.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies `HMS_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("HMS_BASE_URL") {
            self.target.base_url = value;
        }
        if let Some(value) = parse_var::<u64>(&lookup, "HMS_TIMEOUT_SECS")? {
            self.target.timeout_secs = value;
        }

        if let Some(value) = parse_var::<u32>(&lookup, "HMS_APPOINTMENT_DAYS_AHEAD")? {
            self.appointment.days_ahead = value;
        }
        if let Some(value) = lookup("HMS_APPOINTMENT_TIME") {
            self.appointment.time = value;
        }

        if let Some(value) = lookup("HMS_DISEASE") {
            self.scenario.disease = value.parse()?;
        }
        if let Some(value) = lookup("HMS_SPECIALTY") {
            self.scenario.specialty = value.parse()?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let base = self.target.base_url.trim();
        let host = base
            .strip_prefix("http://")
            .or_else(|| base.strip_prefix("https://"))
            .ok_or_else(|| {
                HmsError::Config(format!(
                    "base_url must start with http:// or https:// (got {base:?})"
                ))
            })?;
        if host.trim_matches('/').is_empty() {
            return Err(HmsError::Config(format!("base_url {base:?} has no host")));
        }
        if self.target.timeout_secs == 0 {
            return Err(HmsError::Config("timeout_secs must be at least 1".to_string()));
        }
        if self.appointment.days_ahead == 0 {
            return Err(HmsError::Config(
                "appointment days_ahead must be at least 1 (the date must be in the future)"
                    .to_string(),
            ));
        }
        NaiveTime::parse_from_str(&self.appointment.time, "%H:%M").map_err(|err| {
            HmsError::Config(format!(
                "appointment time {:?} is not HH:MM: {err}",
                self.appointment.time
            ))
        })?;
        Ok(())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.target.base_url.trim().trim_end_matches('/')
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TargetConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl TargetConfig {
    fn merge(&mut self, patch: TargetPatch) {
        if let Some(value) = patch.base_url {
            self.base_url = value;
        }
        if let Some(value) = patch.timeout_secs {
            self.timeout_secs = value;
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppointmentConfig {
    pub days_ahead: u32,
    pub time: String,
    pub reason: String,
    pub notes: String,
}

impl Default for AppointmentConfig {
    fn default() -> Self {
        Self {
            days_ahead: 1,
            time: "10:00".to_string(),
            reason: "Diabetes management consultation".to_string(),
            notes: "First visit for diabetes management".to_string(),
        }
    }
}

impl AppointmentConfig {
    fn merge(&mut self, patch: AppointmentPatch) {
        if let Some(value) = patch.days_ahead {
            self.days_ahead = value;
        }
        if let Some(value) = patch.time {
            self.time = value;
        }
        if let Some(value) = patch.reason {
            self.reason = value;
        }
        if let Some(value) = patch.notes {
            self.notes = value;
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub disease: Disease,
    pub specialty: Specialty,
    pub patient_password: String,
    pub doctor_password: String,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            disease: Disease::Diabetes,
            specialty: Specialty::Endocrinology,
            patient_password: "Patient123456".to_string(),
            doctor_password: "Doctor123456".to_string(),
        }
    }
}

impl ScenarioConfig {
    fn merge(&mut self, patch: ScenarioPatch) {
        if let Some(value) = patch.disease {
            self.disease = value;
        }
        if let Some(value) = patch.specialty {
            self.specialty = value;
        }
        if let Some(value) = patch.patient_password {
            self.patient_password = value;
        }
        if let Some(value) = patch.doctor_password {
            self.doctor_password = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigPatch {
    pub target: Option<TargetPatch>,
    pub appointment: Option<AppointmentPatch>,
    pub scenario: Option<ScenarioPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TargetPatch {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentPatch {
    pub days_ahead: Option<u32>,
    pub time: Option<String>,
    pub reason: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScenarioPatch {
    pub disease: Option<Disease>,
    pub specialty: Option<Specialty>,
    pub patient_password: Option<String>,
    pub doctor_password: Option<String>,
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|err| HmsError::Config(format!("invalid {key} value {value}: {err}"))),
        None => Ok(None),
    }
}
