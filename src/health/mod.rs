// src/health/mod.rs
mod checker;
mod display;
mod error;
mod status;

pub use checker::{HealthApi, HealthChecker};
pub use display::{render_state, DisplayState, StatusDisplay, DISPLAY_HEADING};
pub use error::{CheckFailure, FailureKind, HealthCheckError, BACKEND_UNREACHABLE};
pub use status::HealthStatus;
