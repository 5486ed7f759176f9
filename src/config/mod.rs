use crate::adapters::notion::DEFAULT_TIMEOUT_SECS;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_port, validate_positive_number, validate_secret,
    validate_url, Validate,
};
use clap::Parser;
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_NOTION_BASE_URL: &str = "https://api.notion.com/v1";

#[derive(Clone, Parser)]
#[command(name = "commute-logger")]
#[command(about = "Registers a commute entry in a Notion database, at most once per 10 hours")]
pub struct ServerConfig {
    #[arg(long, env = "PORT", default_value = "8000")]
    pub port: u16,

    /// Shared secret expected verbatim in the inbound `Authorization` header
    #[arg(long, env = "AUTHORIZATION_TOKEN", hide_env_values = true)]
    pub authorization_token: String,

    #[arg(long, env = "NOTION_API_KEY", hide_env_values = true)]
    pub notion_api_key: String,

    #[arg(long, env = "DATABASE_ID")]
    pub database_id: String,

    #[arg(long, env = "NOTION_BASE_URL", default_value = DEFAULT_NOTION_BASE_URL)]
    pub notion_base_url: String,

    /// Per-call timeout for Notion requests, in seconds
    #[arg(long, env = "NOTION_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub notion_timeout_secs: u64,

    #[arg(long, env = "RECORD_TITLE", default_value = "test")]
    pub record_title: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, env = "LOG_JSON", help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl ServerConfig {
    /// Builds a config without going through the command line.
    pub fn new(
        authorization_token: impl Into<String>,
        notion_api_key: impl Into<String>,
        database_id: impl Into<String>,
    ) -> Self {
        Self {
            port: 8000,
            authorization_token: authorization_token.into(),
            notion_api_key: notion_api_key.into(),
            database_id: database_id.into(),
            notion_base_url: DEFAULT_NOTION_BASE_URL.to_string(),
            notion_timeout_secs: DEFAULT_TIMEOUT_SECS,
            record_title: "test".to_string(),
            verbose: false,
            log_json: false,
        }
    }

    pub fn with_notion_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.notion_base_url = base_url.into();
        self
    }

    pub fn with_notion_timeout_secs(mut self, secs: u64) -> Self {
        self.notion_timeout_secs = secs;
        self
    }
}

/// Loads `.env` from the working directory or one of its parents, if any.
/// Variables already set in the process environment are left untouched.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

pub fn load_dotenv_from(path: impl AsRef<Path>) -> Result<()> {
    dotenvy::from_path(path.as_ref())?;
    Ok(())
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("authorization_token", &"<redacted>")
            .field("notion_api_key", &"<redacted>")
            .field("database_id", &self.database_id)
            .field("notion_base_url", &self.notion_base_url)
            .field("notion_timeout_secs", &self.notion_timeout_secs)
            .field("record_title", &self.record_title)
            .field("verbose", &self.verbose)
            .field("log_json", &self.log_json)
            .finish()
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_port("port", self.port)?;
        validate_secret("authorization_token", &self.authorization_token)?;
        validate_secret("notion_api_key", &self.notion_api_key)?;
        validate_non_empty_string("database_id", &self.database_id)?;
        validate_url("notion_base_url", &self.notion_base_url)?;
        validate_positive_number("notion_timeout_secs", self.notion_timeout_secs, 1)?;
        validate_non_empty_string("record_title", &self.record_title)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CommuteError;

    #[test]
    fn test_parse_from_flags() {
        let config = ServerConfig::try_parse_from([
            "commute-logger",
            "--authorization-token",
            "token",
            "--notion-api-key",
            "secret_key",
            "--database-id",
            "db123",
            "--port",
            "9000",
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.database_id, "db123");
        assert_eq!(config.record_title, "test");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_dotenv_fills_missing_values_and_flags_win() {
        let dir = tempfile::TempDir::new().unwrap();
        let env_file = dir.path().join(".env");
        std::fs::write(
            &env_file,
            "AUTHORIZATION_TOKEN=dotenv-token\nNOTION_API_KEY=dotenv-key\nDATABASE_ID=dotenv-db\n",
        )
        .unwrap();

        load_dotenv_from(&env_file).unwrap();

        let config = ServerConfig::try_parse_from(["commute-logger"]).unwrap();
        assert_eq!(config.authorization_token, "dotenv-token");
        assert_eq!(config.notion_api_key, "dotenv-key");
        assert_eq!(config.database_id, "dotenv-db");

        let config =
            ServerConfig::try_parse_from(["commute-logger", "--database-id", "flag-db"]).unwrap();
        assert_eq!(config.database_id, "flag-db");
    }

    #[test]
    fn test_missing_dotenv_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = load_dotenv_from(dir.path().join("absent.env")).unwrap_err();
        assert!(matches!(err, CommuteError::EnvFileError(_)));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = ServerConfig::new("token", "key", "db").with_notion_timeout_secs(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = ServerConfig::new("token-value", "key-value", "db");
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("token-value"));
        assert!(!rendered.contains("key-value"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_validate_rejects_empty_token() {
        let config = ServerConfig::new("", "key", "db");
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            CommuteError::MissingConfigError { ref field } if field == "authorization_token"
        ));
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let config = ServerConfig::new("token", "key", "db").with_notion_base_url("not a url");
        assert!(config.validate().is_err());
    }
}
