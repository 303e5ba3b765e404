//! hms-smoke - end-to-end smoke test for the hospital management API.
//!
//! Registers a patient and a doctor, creates their profiles, books an
//! appointment and reads it back, stopping at the first failure.

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod specialty;
pub mod workflow;

pub use error::{HmsError, Result};
