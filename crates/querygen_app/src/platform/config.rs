use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use querygen_core::SuggestionSource;
use querygen_engine::ClientSettings;
use querygen_logging::qg_info;
use serde::Deserialize;
use thiserror::Error;

use super::logging::LogDestination;

const CONFIG_FILENAME: &str = "querygen.ron";
const CONFIG_ENV: &str = "QUERYGEN_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("invalid config {path:?}: {field} must be greater than zero")]
    Zero { path: PathBuf, field: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum SuggestionSourceSetting {
    #[default]
    Local,
    Remote,
}

impl From<SuggestionSourceSetting> for SuggestionSource {
    fn from(setting: SuggestionSourceSetting) -> Self {
        match setting {
            SuggestionSourceSetting::Local => SuggestionSource::Local,
            SuggestionSourceSetting::Remote => SuggestionSource::Remote,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub max_response_bytes: u64,
    /// Explicit mode attribute of the page, if any.
    pub page_mode: Option<String>,
    /// Page path, used as the mode hint when no attribute is set.
    pub page_path: String,
    pub suggestion_source: SuggestionSourceSetting,
    pub legacy_state_dir: PathBuf,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        let client = ClientSettings::default();
        Self {
            base_url: client.base_url,
            connect_timeout_ms: client.connect_timeout.as_millis() as u64,
            request_timeout_ms: client.request_timeout.as_millis() as u64,
            max_response_bytes: client.max_bytes,
            page_mode: None,
            page_path: "/".to_string(),
            suggestion_source: SuggestionSourceSetting::default(),
            legacy_state_dir: PathBuf::from(".querygen"),
            log_destination: LogDestination::default(),
        }
    }
}

impl AppConfig {
    /// A zero timeout or byte cap would fail every request.
    fn zero_limit(&self) -> Option<&'static str> {
        [
            ("connect_timeout_ms", self.connect_timeout_ms),
            ("request_timeout_ms", self.request_timeout_ms),
            ("max_response_bytes", self.max_response_bytes),
        ]
        .into_iter()
        .find_map(|(field, value)| (value == 0).then_some(field))
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            max_bytes: self.max_response_bytes,
        }
    }
}

/// Loads the config named by `QUERYGEN_CONFIG`, else `./querygen.ron`.
pub fn load() -> Result<AppConfig, ConfigError> {
    let path = std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
    load_from(&path)
}

/// A missing file yields the defaults.
pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config = parse(&content).map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })?;
    if let Some(field) = config.zero_limit() {
        return Err(ConfigError::Zero {
            path: path.to_path_buf(),
            field,
        });
    }
    qg_info!("Loaded config from {:?}", path);
    Ok(config)
}

fn parse(content: &str) -> Result<AppConfig, String> {
    ron::from_str(content).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_from(&temp.path().join("absent.ron")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.suggestion_source, SuggestionSourceSetting::Local);
        assert_eq!(config.request_timeout_ms, 15_000);
    }

    #[test]
    fn partial_file_overrides_named_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("querygen.ron");
        fs::write(
            &path,
            r#"(
                base_url: "http://backend:8000/api",
                request_timeout_ms: 2500,
                page_mode: Some("audio dramas"),
                suggestion_source: Remote,
                log_destination: Both,
            )"#,
        )
        .unwrap();

        let config = load_from(&path).unwrap();
        assert_eq!(config.base_url, "http://backend:8000/api");
        assert_eq!(config.page_mode.as_deref(), Some("audio dramas"));
        assert_eq!(config.suggestion_source, SuggestionSourceSetting::Remote);
        assert_eq!(config.log_destination, LogDestination::Both);
        assert_eq!(config.page_path, "/");

        let settings = config.client_settings();
        assert_eq!(settings.request_timeout, Duration::from_millis(2500));
        assert_eq!(settings.connect_timeout, Duration::from_secs(5));
    }

    #[test]
    fn malformed_file_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.ron");
        fs::write(&path, "(base_url: 42)").unwrap();

        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.ron"));
    }

    #[test]
    fn zero_request_timeout_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("querygen.ron");
        fs::write(&path, "(request_timeout_ms: 0)").unwrap();

        let err = load_from(&path).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Zero {
                field: "request_timeout_ms",
                ..
            }
        ));
        assert!(err.to_string().contains("request_timeout_ms"));
    }

    #[test]
    fn suggestion_setting_maps_to_core_source() {
        assert_eq!(
            SuggestionSource::from(SuggestionSourceSetting::Remote),
            SuggestionSource::Remote
        );
    }
}
