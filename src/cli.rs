// src/cli.rs
use crate::config::{self, Config};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "job-tracker-health", about = "Check the job tracker backend and show its health")]
pub struct Cli {
    /// YAML or JSON configuration file. Built-in defaults apply when omitted.
    #[arg(long, env = "JOB_TRACKER_CONFIG")]
    pub config: Option<PathBuf>,
    #[arg(long, env = "JOB_TRACKER_API_URL")]
    pub api_url: Option<Url>,
    #[arg(long, env = "JOB_TRACKER_HTTP_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Flags win over whatever the file (or the defaults) said.
    pub fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.api_url {
            config.api.base_url = url.to_string();
        }
        if let Some(secs) = self.timeout_secs {
            config.api.timeout_secs = Some(secs);
        }
        if self.no_color {
            config.display.color = false;
        }
    }

    /// Loads the file if one was given, applies the flags, then validates.
    pub async fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                info!("Loading configuration from: {}", path.display());
                config::load_config(path).await?
            }
            None => Config::default(),
        };

        self.apply(&mut config);
        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("job-tracker-health").chain(args.iter().copied()))
            .unwrap()
    }

    #[tokio::test]
    async fn flags_override_file_values() {
        let file = config_file(
            "api:\n  base_url: \"http://from-file:9000/api\"\n  timeout_secs: 30\ndisplay:\n  color: true\n",
        );
        let path = file.path().to_str().unwrap();

        let config = cli(&[
            "--config",
            path,
            "--api-url",
            "http://from-flag:8000/api",
            "--timeout-secs",
            "5",
            "--no-color",
        ])
        .resolve_config()
        .await
        .unwrap();

        assert_eq!(config.api.base_url().unwrap().as_str(), "http://from-flag:8000/api");
        assert_eq!(config.api.timeout_secs, Some(5));
        assert!(!config.display.color);
    }

    #[tokio::test]
    async fn file_values_stand_without_flags() {
        let file = config_file("api:\n  base_url: \"http://from-file:9000/api\"\n  timeout_secs: 30\n");
        let path = file.path().to_str().unwrap();

        let config = cli(&["--config", path]).resolve_config().await.unwrap();

        assert_eq!(config.api.base_url, "http://from-file:9000/api");
        assert_eq!(config.api.timeout_secs, Some(30));
        assert!(config.display.color);
    }

    #[tokio::test]
    async fn timeout_flag_rescues_an_invalid_file_value() {
        let file = config_file("api:\n  timeout_secs: 0\n");
        let path = file.path().to_str().unwrap();

        let config = cli(&["--config", path, "--timeout-secs", "5"])
            .resolve_config()
            .await
            .unwrap();

        assert_eq!(config.api.timeout_secs, Some(5));
    }

    #[tokio::test]
    async fn invalid_result_is_rejected_after_overrides() {
        let file = config_file("api:\n  timeout_secs: 0\n");
        let path = file.path().to_str().unwrap();

        let err = cli(&["--config", path]).resolve_config().await.unwrap_err();
        assert!(format!("{err:#}").contains("timeout_secs must be greater than zero"), "{err:#}");

        let err = cli(&["--timeout-secs", "0"]).resolve_config().await.unwrap_err();
        assert!(format!("{err:#}").contains("Invalid configuration"), "{err:#}");
    }

    #[test]
    fn rejects_a_malformed_url_flag() {
        let parsed = Cli::try_parse_from(["job-tracker-health", "--api-url", "not a url"]);
        assert!(parsed.is_err());
    }

    #[tokio::test]
    async fn defaults_apply_without_a_file() {
        let config = cli(&[]).resolve_config().await.unwrap();
        assert_eq!(config.api.base_url, config::DEFAULT_BASE_URL);
        assert!(config.display.color);
    }
}
