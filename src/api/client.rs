// src/api/client.rs
use crate::config::ApiConfig;
use crate::health::HealthCheckError;
use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Shared HTTP client. Request paths are appended to the base URL, so
/// `http://host/api` + `/health/` resolves to `http://host/api/health/`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: Client,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            base_url: config.base_url()?,
            http,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends the segments of `path` to the base path. Query and fragment
    /// of the base URL are kept as they are.
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?;
            segments
                .pop_if_empty()
                .extend(path.split('/').filter(|segment| !segment.is_empty()));
            if path.ends_with('/') {
                segments.push("");
            }
        }
        Ok(url)
    }

    /// GET `path` and decode a JSON body. Non-2xx statuses and bodies that
    /// do not decode into `T` are errors.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        request_id: Uuid,
    ) -> Result<T, HealthCheckError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "GET");

        let response = self
            .http
            .get(url)
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .send()
            .await
            .map_err(HealthCheckError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(HealthCheckError::HttpStatus(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(HealthCheckError::from_transport)?;
        serde_json::from_slice(&body).map_err(HealthCheckError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        let config = ApiConfig {
            base_url: base.to_string(),
            ..ApiConfig::default()
        };
        ApiClient::new(&config).unwrap()
    }

    #[test]
    fn endpoint_appends_path_to_base() {
        let api = client("http://localhost:8000/api");
        assert_eq!(
            api.endpoint("/health/").unwrap().as_str(),
            "http://localhost:8000/api/health/"
        );
    }

    #[test]
    fn endpoint_handles_trailing_and_missing_slashes() {
        let api = client("http://localhost:8000/api/");
        assert_eq!(
            api.endpoint("health/").unwrap().as_str(),
            "http://localhost:8000/api/health/"
        );

        let api = client("http://localhost:8000");
        assert_eq!(
            api.endpoint("/health/").unwrap().as_str(),
            "http://localhost:8000/health/"
        );
    }

    #[test]
    fn builds_with_timeout() {
        let config = ApiConfig {
            timeout_secs: Some(2),
            ..ApiConfig::default()
        };
        let api = ApiClient::new(&config).unwrap();
        assert_eq!(api.base_url(), &config.base_url().unwrap());
    }

    #[test]
    fn endpoint_keeps_the_base_query_at_the_end() {
        let api = client("http://h/api?k=v");
        assert_eq!(api.endpoint("/health/").unwrap().as_str(), "http://h/api/health/?k=v");

        let api = client("https://h/api/#top");
        assert_eq!(api.endpoint("health").unwrap().as_str(), "https://h/api/health#top");
    }

    #[test]
    fn new_rejects_an_invalid_base_url() {
        let config = ApiConfig {
            base_url: "mailto:ops@example.com".into(),
            ..ApiConfig::default()
        };
        assert!(ApiClient::new(&config).is_err());
    }
}
