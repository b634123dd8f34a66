// src/health/status.rs
use serde::{Deserialize, Serialize};

/// Body of a successful `GET /health/`.
///
/// Extra fields are ignored; both known fields must be present strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}
