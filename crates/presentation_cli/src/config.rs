//! CLI configuration
//!
//! Layered, lowest precedence first: built-in defaults, `trivesha.toml` (or
//! the file given with `--config`), `TRIVESHA_*` environment variables with
//! `__` as the section separator (e.g. `TRIVESHA_API__BASE_URL`).

use std::path::{Path, PathBuf};

use api_client::ApiConfig;
use serde::{Deserialize, Serialize};

/// Endpoint whose 401 means "wrong password" rather than "session expired"
pub const LOGIN_PATH: &str = "/auth/login";

/// Session file settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// JSON file holding the token and user record
    #[serde(default = "default_session_file")]
    pub file: PathBuf,
}

fn default_session_file() -> PathBuf {
    session_file_under(dirs::home_dir())
}

/// `<home>/.trivesha/session.json`, or an empty path when there is no home
/// directory so that [`CliConfig::validate`] asks for an explicit file
fn session_file_under(home: Option<PathBuf>) -> PathBuf {
    home.map(|home| home.join(".trivesha").join("session.json"))
        .unwrap_or_default()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file: default_session_file(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Emit JSON log lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

/// Top-level CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Backend connection
    #[serde(default)]
    pub api: ApiConfig,

    /// Session persistence
    #[serde(default)]
    pub session: SessionConfig,

    /// Logging
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// Without `path`, `trivesha.toml` in the working directory is used when
    /// present. An explicit `path` must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("trivesha").required(false),
        };

        let builder = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., TRIVESHA_API__TIMEOUT_SECS)
            .add_source(
                config::Environment::with_prefix("TRIVESHA")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Apply command-line overrides and the CLI's fixed policies
    #[must_use]
    pub fn with_overrides(mut self, api_url: Option<String>, session_file: Option<PathBuf>) -> Self {
        if let Some(url) = api_url {
            self.api.base_url = url;
        }
        if let Some(file) = session_file {
            self.session.file = file;
        }
        if self.api.triggers_logout(LOGIN_PATH) {
            self.api = self.api.exempt_from_unauthorized(LOGIN_PATH);
        }
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.api.validate()?;
        if self.session.file.as_os_str().is_empty() {
            return Err(
                "session.file is not set and no home directory was found; \
                 pass --session-file or set TRIVESHA_SESSION__FILE"
                    .to_string(),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use api_client::DEFAULT_BASE_URL;

    use super::*;

    #[test]
    fn defaults() {
        let config = CliConfig::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert!(config.session.file.ends_with("session.json"));
        assert!(!config.log.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_from_explicit_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"http://localhost:5000/api\"\ntimeout_secs = 5\n\n[log]\njson = true"
        )
        .unwrap();

        let config = CliConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.api.base_url, "http://localhost:5000/api");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.connect_timeout_secs, 10);
        assert!(config.log.json);
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(CliConfig::load(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn overrides_replace_url_and_session_file() {
        let config = CliConfig::default().with_overrides(
            Some("http://127.0.0.1:9000/api".to_string()),
            Some(PathBuf::from("/tmp/s.json")),
        );

        assert_eq!(config.api.base_url, "http://127.0.0.1:9000/api");
        assert_eq!(config.session.file, PathBuf::from("/tmp/s.json"));
    }

    #[test]
    fn login_path_is_exempt_once() {
        let config = CliConfig::default()
            .with_overrides(None, None)
            .with_overrides(None, None);

        assert!(!config.api.triggers_logout(LOGIN_PATH));
        assert_eq!(config.api.unauthorized_exempt_paths, vec![LOGIN_PATH.to_string()]);
        assert!(config.api.triggers_logout("/auth/me"));
    }

    #[test]
    fn session_file_lives_under_home() {
        assert_eq!(
            session_file_under(Some(PathBuf::from("/home/asha"))),
            PathBuf::from("/home/asha/.trivesha/session.json")
        );
    }

    #[test]
    fn no_home_directory_requires_explicit_session_file() {
        let mut config = CliConfig::default();
        config.session.file = session_file_under(None);

        let err = config.validate().unwrap_err();
        assert!(err.contains("--session-file"));

        let config = config.with_overrides(None, Some(PathBuf::from("/tmp/s.json")));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_base_url_fails_validation() {
        let config = CliConfig::default().with_overrides(Some("ftp://x".to_string()), None);
        assert!(config.validate().is_err());
    }
}
