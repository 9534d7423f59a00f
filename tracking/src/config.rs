//! Environment-driven configuration
//!
//! The only configurable value is the tracking server address; everything
//! else about the demo pipeline is a fixed constant.

use std::env;

/// Environment variable selecting the tracking server address
pub const TRACKING_URI_ENV: &str = "FITLOG_TRACKING_URI";

/// Address used when the environment does not provide one
pub const DEFAULT_TRACKING_URI: &str = "http://localhost:5000/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingConfig {
    pub tracking_uri: String,
}

impl TrackingConfig {
    /// Read the configuration from the environment, falling back to the
    /// local default endpoint
    pub fn from_env() -> TrackingConfig {
        let tracking_uri =
            env::var(TRACKING_URI_ENV).unwrap_or_else(|_| DEFAULT_TRACKING_URI.to_string());
        TrackingConfig { tracking_uri }
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        TrackingConfig {
            tracking_uri: DEFAULT_TRACKING_URI.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_falls_back_to_the_local_default() {
        env::remove_var(TRACKING_URI_ENV);
        assert_eq!(
            TrackingConfig::from_env().tracking_uri,
            DEFAULT_TRACKING_URI
        );

        env::set_var(TRACKING_URI_ENV, "http://tracker:8080/");
        assert_eq!(
            TrackingConfig::from_env().tracking_uri,
            "http://tracker:8080/"
        );
        env::remove_var(TRACKING_URI_ENV);
    }
}
