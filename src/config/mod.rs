// src/config/mod.rs
mod models;

pub use models::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a file (YAML or JSON).
///
/// Values are not validated here; overrides are applied on top first and
/// the caller runs [`Config::validate`] on the result.
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let config: Config = match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&contents).context("Failed to parse YAML config")?
        }
        _ => serde_json::from_str(&contents).context("Failed to parse JSON config")?,
    };

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn loads_yaml_with_defaults_for_missing_sections() {
        let file = write_temp(
            ".yaml",
            "api:\n  base_url: \"http://backend.internal:9000/api\"\n  timeout_secs: 3\n",
        );

        let config = load_config(file.path()).await.unwrap();

        assert_eq!(config.api.base_url, "http://backend.internal:9000/api");
        assert_eq!(config.api.timeout_secs, Some(3));
        assert_eq!(config.health.path, "/health/");
        assert_eq!(config.display.title, DEFAULT_TITLE);
        assert!(config.display.color);
    }

    #[tokio::test]
    async fn loads_json_by_default() {
        let file = write_temp(
            ".json",
            r#"{"health": {"path": "/status/"}, "display": {"color": false}}"#,
        );

        let config = load_config(file.path()).await.unwrap();

        assert_eq!(config.health.path, "/status/");
        assert!(!config.display.color);
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[tokio::test]
    async fn loading_leaves_validation_to_the_caller() {
        let file = write_temp(".yml", "api:\n  timeout_secs: 0\n");

        let config = load_config(file.path()).await.unwrap();

        assert_eq!(config.api.timeout_secs, Some(0));
        assert_eq!(config.validate(), Err(ConfigError::ZeroTimeout));
    }

    #[tokio::test]
    async fn malformed_file_is_a_parse_error() {
        let file = write_temp(".json", "{ not json");
        let err = load_config(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse JSON config"));
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let err = load_config("/definitely/not/here.yaml").await.unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
