//! Client configuration and construction-time validation.

use std::str::FromStr;

use crate::errors::{JamfError, JamfResult};

/// Response format requested from the Jamf API.
///
/// Affects only the `Accept` header on GET requests; body parsing follows
/// the response `Content-Type`, and POST/PUT ignore the format entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Xml,
}

impl Format {
    /// `Accept` header value sent on GET requests.
    pub(crate) fn accept_header(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "text/xml",
        }
    }
}

impl FromStr for Format {
    type Err = JamfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            other => Err(JamfError::Config(format!(
                "Bad format parameter '{}', please specify xml or json",
                other
            ))),
        }
    }
}

/// Connection settings for a [`JamfClient`](crate::JamfClient).
///
/// Immutable once constructed; the cached bearer token lives on the client,
/// not here.
#[derive(Debug, Clone)]
pub struct JamfConfig {
    pub user: String,
    pub password: String,
    /// Base URL of the Jamf server. Used verbatim: no trailing-slash
    /// normalization is performed, so `https://jss.example.com/` and
    /// `https://jss.example.com` produce different request URLs.
    pub base_url: String,
    pub format: Format,
}

impl JamfConfig {
    /// Create and validate a client configuration.
    ///
    /// # Arguments
    /// * `user` - API account username
    /// * `password` - API account password
    /// * `base_url` - Base URL of the Jamf server
    /// * `format` - `"json"` or `"xml"`
    ///
    /// # Errors
    /// Returns `JamfError::Config` if any field is empty or `format` is not
    /// one of the two accepted values.
    pub fn new(
        user: impl Into<String>,
        password: impl Into<String>,
        base_url: impl Into<String>,
        format: &str,
    ) -> JamfResult<Self> {
        let user = user.into();
        if user.is_empty() {
            return Err(JamfError::Config(
                "Missing username in client configuration".to_string(),
            ));
        }

        let password = password.into();
        if password.is_empty() {
            return Err(JamfError::Config(
                "Missing password in client configuration".to_string(),
            ));
        }

        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(JamfError::Config(
                "Missing Jamf API URL in client configuration".to_string(),
            ));
        }

        if format.is_empty() {
            return Err(JamfError::Config(
                "Missing format parameter, please specify xml or json".to_string(),
            ));
        }
        let format = format.parse()?;

        Ok(Self { user, password, base_url, format })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> JamfResult<JamfConfig> {
        JamfConfig::new("admin", "hunter2", "https://jss.example.com", "json")
    }

    #[test]
    fn valid_fields_produce_a_config() {
        let config = valid_config().expect("config");
        assert_eq!(config.user, "admin");
        assert_eq!(config.base_url, "https://jss.example.com");
        assert_eq!(config.format, Format::Json);
    }

    #[test]
    fn empty_user_is_rejected() {
        let result = JamfConfig::new("", "hunter2", "https://jss.example.com", "json");
        assert!(matches!(result, Err(JamfError::Config(_))));
    }

    #[test]
    fn empty_password_is_rejected() {
        let result = JamfConfig::new("admin", "", "https://jss.example.com", "json");
        assert!(matches!(result, Err(JamfError::Config(_))));
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let result = JamfConfig::new("admin", "hunter2", "", "json");
        assert!(matches!(result, Err(JamfError::Config(_))));
    }

    #[test]
    fn empty_format_is_rejected() {
        let result = JamfConfig::new("admin", "hunter2", "https://jss.example.com", "");
        assert!(matches!(result, Err(JamfError::Config(_))));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let result = JamfConfig::new("admin", "hunter2", "https://jss.example.com", "yaml");
        match result {
            Err(JamfError::Config(msg)) => assert!(msg.contains("yaml")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn xml_format_is_accepted() {
        let config =
            JamfConfig::new("admin", "hunter2", "https://jss.example.com", "xml").expect("config");
        assert_eq!(config.format, Format::Xml);
    }

    #[test]
    fn accept_header_matches_format() {
        assert_eq!(Format::Json.accept_header(), "application/json");
        assert_eq!(Format::Xml.accept_header(), "text/xml");
    }

    /// Base URLs pass through untouched; callers own slash handling.
    #[test]
    fn base_url_is_not_normalized() {
        let config =
            JamfConfig::new("admin", "hunter2", "https://jss.example.com/", "json").expect("config");
        assert_eq!(config.base_url, "https://jss.example.com/");
    }
}
