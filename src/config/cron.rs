//! Cron authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Cron configuration
///
/// Scheduled jobs (analytics aggregation) authenticate with a static bearer
/// secret rather than a user session. When no secret is configured the cron
/// routes accept every request, which is only acceptable in development.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CronConfig {
    /// Shared secret compared against `Authorization: Bearer <secret>`
    pub secret: Option<SecretString>,
}

impl CronConfig {
    /// Validate cron configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(secret) = &self.secret {
            if secret.expose_secret().is_empty() {
                return Err(ValidationError::EmptyCronSecret);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_secret_is_valid() {
        let config = CronConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_secret_is_rejected() {
        let config = CronConfig {
            secret: Some(SecretString::new(String::new())),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::EmptyCronSecret)
        ));
    }

    #[test]
    fn non_empty_secret_is_valid() {
        let config = CronConfig {
            secret: Some(SecretString::new("cron-secret".to_string())),
        };
        assert!(config.validate().is_ok());
    }
}
