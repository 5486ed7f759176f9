use crate::utils::error::{CommuteError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CommuteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CommuteError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CommuteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Secrets are reported as missing rather than echoed back in the error.
pub fn validate_secret(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CommuteError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CommuteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(CommuteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_port(field_name: &str, port: u16) -> Result<()> {
    if port == 0 {
        return Err(CommuteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: port.to_string(),
            reason: "Port must be between 1 and 65535".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("notion_base_url", "https://api.notion.com/v1").is_ok());
        assert!(validate_url("notion_base_url", "http://127.0.0.1:9000").is_ok());
        assert!(validate_url("notion_base_url", "").is_err());
        assert!(validate_url("notion_base_url", "invalid-url").is_err());
        assert!(validate_url("notion_base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_secret_does_not_leak_value() {
        assert!(validate_secret("authorization_token", "s3cret").is_ok());

        let err = validate_secret("authorization_token", "   ").unwrap_err();
        assert!(matches!(err, CommuteError::MissingConfigError { .. }));
    }

    #[test]
    fn test_validate_port() {
        assert!(validate_port("port", 8000).is_ok());
        assert!(validate_port("port", 0).is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("notion_timeout_secs", 30, 1).is_ok());
        assert!(validate_positive_number("notion_timeout_secs", 0, 1).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("record_title", "test").is_ok());
        assert!(validate_non_empty_string("record_title", "").is_err());
    }
}
