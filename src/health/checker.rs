// src/health/checker.rs
use super::{HealthCheckError, HealthStatus};
use crate::api::ApiClient;
use crate::config::HealthCheckConfig;
use async_trait::async_trait;
use std::time::Instant;
use tracing::debug;
use uuid::Uuid;

/// Source of backend health. The status display depends only on this.
#[async_trait]
pub trait HealthApi: Send + Sync {
    async fn fetch_health(&self, request_id: Uuid) -> Result<HealthStatus, HealthCheckError>;
}

/// Health over HTTP through the shared [`ApiClient`].
#[derive(Debug, Clone)]
pub struct HealthChecker {
    client: ApiClient,
    path: String,
}

impl HealthChecker {
    pub fn new(client: ApiClient, config: &HealthCheckConfig) -> Self {
        Self {
            client,
            path: config.path.clone(),
        }
    }
}

#[async_trait]
impl HealthApi for HealthChecker {
    async fn fetch_health(&self, request_id: Uuid) -> Result<HealthStatus, HealthCheckError> {
        let start = Instant::now();
        let result = self.client.get_json::<HealthStatus>(&self.path, request_id).await;
        let response_time_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(health) => debug!(
                response_time_ms,
                status = %health.status,
                "health endpoint answered"
            ),
            Err(e) => debug!(response_time_ms, kind = %e.kind(), "health endpoint failed"),
        }

        result
    }
}
