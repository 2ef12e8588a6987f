//! Datafeed configuration.
//!
//! The Tushare token can come from a TOML settings file
//! (`[tushare] token = "..."`) or from the `TUSHARE_TOKEN` environment
//! variable, with the environment taking precedence. A missing token is not
//! an error here: [`TushareProvider::init`](crate::providers::tushare::TushareProvider::init)
//! is the point that decides whether a token is actually required.

use std::path::Path;

use serde::Deserialize;

use crate::errors::Error;

/// Environment variable consulted by [`Settings::from_env`].
pub const TOKEN_ENV_VAR: &str = "TUSHARE_TOKEN";

/// Runtime configuration for the datafeed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    /// Tushare Pro API token; may be empty.
    pub token: String,
}

#[derive(Deserialize, Default)]
struct SettingsFile {
    #[serde(default)]
    tushare: TushareSection,
}

#[derive(Deserialize, Default)]
struct TushareSection {
    #[serde(default)]
    token: String,
}

impl Settings {
    /// Reads settings from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let raw = std::fs::read_to_string(path)?;
        let file: SettingsFile = toml::from_str(&raw)
            .map_err(|e| Error::Config(format!("invalid settings file {}: {e}", path.display())))?;
        Ok(Self { token: file.tushare.token })
    }

    /// Reads settings from the environment. An unset variable yields an
    /// empty token.
    pub fn from_env() -> Self {
        Self {
            token: std::env::var(TOKEN_ENV_VAR).unwrap_or_default(),
        }
    }

    /// Loads settings from an optional file, then lets the environment
    /// override any token it supplies.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        let env = Self::from_env();
        if !env.token.is_empty() {
            settings.token = env.token;
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn settings_parse_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[tushare]\ntoken = \"abc123\"").unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.token, "abc123");
    }

    #[test]
    fn missing_section_yields_empty_token() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[other]\nkey = 1").unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert!(settings.token.is_empty());
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid [ toml").unwrap();

        let err = Settings::from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn load_without_file_falls_back_to_defaults() {
        // TUSHARE_TOKEN may or may not be set in the test environment;
        // either way load(None) must not error.
        let settings = Settings::load(None).unwrap();
        let _ = settings.token;
    }
}
