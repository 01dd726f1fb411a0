//! Free-text rental search: listing catalog, filter engine, and engagement tracking.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
