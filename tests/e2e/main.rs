//! E2E test suite entry point.

mod appointment_workflow;
#[path = "../common/mod.rs"]
mod common;
