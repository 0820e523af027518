//! Identity asserted to the API on every request

use reqwest::header::HeaderValue;

use crate::constants::APP_ID_SEPARATOR;
use crate::error::AppError;

/// Who is calling the API. Sent as `organization:app_identifier:version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdentity {
    organization: String,
    app_identifier: String,
    version: String,
}

impl AppIdentity {
    /// Creates an identity. No validation is performed on the parts.
    pub fn new(
        organization: impl Into<String>,
        app_identifier: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            organization: organization.into(),
            app_identifier: app_identifier.into(),
            version: version.into(),
        }
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn app_identifier(&self) -> &str {
        &self.app_identifier
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The literal header value.
    ///
    /// # Example
    /// ```
    /// use tba_api::data_fetcher::api::AppIdentity;
    ///
    /// let identity = AppIdentity::new("frc3128", "scouting", "1.0");
    /// assert_eq!(identity.header_value(), "frc3128:scouting:1.0");
    /// ```
    pub fn header_value(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            self.organization,
            self.app_identifier,
            self.version,
            sep = APP_ID_SEPARATOR
        )
    }

    /// Encodes the header value for reqwest. Fails only on characters HTTP headers cannot carry.
    pub(crate) fn to_header(&self) -> Result<HeaderValue, AppError> {
        HeaderValue::from_str(&self.header_value()).map_err(|e| {
            AppError::config_error(format!(
                "App identity '{}' is not a valid header value: {e}",
                self.header_value()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_value_is_literal_concatenation() {
        let identity = AppIdentity::new("Team 3128", "tba-ruby", "0.1.0");
        assert_eq!(identity.header_value(), "Team 3128:tba-ruby:0.1.0");
        assert_eq!(identity.organization(), "Team 3128");
        assert_eq!(identity.app_identifier(), "tba-ruby");
        assert_eq!(identity.version(), "0.1.0");
    }

    #[test]
    fn test_header_value_keeps_embedded_separators() {
        let identity = AppIdentity::new("a:b", "", "v");
        assert_eq!(identity.header_value(), "a:b::v");
    }

    #[test]
    fn test_to_header_rejects_control_characters() {
        let identity = AppIdentity::new("org\n", "app", "1");
        let result = identity.to_header();
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_to_header_accepts_plain_identity() {
        let identity = AppIdentity::new("frc3128", "scouting", "2.1");
        let header = identity.to_header().unwrap();
        assert_eq!(header.to_str().unwrap(), "frc3128:scouting:2.1");
    }
}
