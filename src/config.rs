use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_SERVICE_ID: &str = "service_eye4mzi";
pub const DEFAULT_TEMPLATE_ID: &str = "template_z42a01i";
pub const DEFAULT_PUBLIC_KEY: &str = "cZF5hP0kT-Mrk0M3b";

/// Identifiers for the email relay.
///
/// These end up in the client bundle, so they are fixed at build time. Each
/// can be overridden by setting the matching `EMAILJS_*` variable when
/// compiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: option_env!("EMAILJS_ENDPOINT")
                .unwrap_or(DEFAULT_ENDPOINT)
                .to_string(),
            service_id: option_env!("EMAILJS_SERVICE_ID")
                .unwrap_or(DEFAULT_SERVICE_ID)
                .to_string(),
            template_id: option_env!("EMAILJS_TEMPLATE_ID")
                .unwrap_or(DEFAULT_TEMPLATE_ID)
                .to_string(),
            public_key: option_env!("EMAILJS_PUBLIC_KEY")
                .unwrap_or(DEFAULT_PUBLIC_KEY)
                .to_string(),
        }
    }
}

/// Year the site was built, for the footer copyright line.
pub const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_populated() {
        let config = RelayConfig::default();
        assert!(config.endpoint.starts_with("http"));
        assert!(!config.service_id.is_empty());
        assert!(!config.template_id.is_empty());
        assert!(!config.public_key.is_empty());
    }

    #[test]
    fn test_build_year_is_numeric() {
        assert!(BUILD_YEAR.parse::<u32>().is_ok());
    }
}
