use std::fmt;
use std::time::Duration;

use config::{Config, Environment, File, FileFormat};
use error_stack::{Report, ResultExt};
use serde::Deserialize;
use validator::Validate;

use crate::constants::{DEFAULT_SEARCH_URL, DEFAULT_TOKEN_URL};
use crate::error::VerifyError;
use crate::request_signing::ClientIdentity;
use crate::transport::UreqTransport;
use crate::verify_flow::{Endpoints, VerifyClient};

pub const ENVIRONMENT_PREFIX: &str = "VERIFY_SDK";

#[derive(Deserialize, Validate)]
pub struct Credentials {
    #[validate(length(min = 1))]
    pub app_id: String,
    #[validate(length(min = 1))]
    pub shared_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("shared_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct EndpointSettings {
    #[validate(url)]
    #[serde(default = "default_token_url")]
    pub token_url: String,
    #[validate(url)]
    #[serde(default = "default_search_url")]
    pub search_url: String,
}

fn default_token_url() -> String {
    DEFAULT_TOKEN_URL.to_string()
}

fn default_search_url() -> String {
    DEFAULT_SEARCH_URL.to_string()
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            token_url: default_token_url(),
            search_url: default_search_url(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TransportSettings {
    /// Whole-call timeout in seconds. No timeout when unset.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct Settings {
    #[validate(nested)]
    pub credentials: Credentials,
    #[validate(nested)]
    #[serde(default)]
    pub endpoints: EndpointSettings,
    #[serde(default)]
    pub transport: TransportSettings,
}

impl Settings {
    /// Loads the embedded defaults, overridden by `VERIFY_SDK__*` variables.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Configuration`] if the merged configuration
    /// cannot be deserialized.
    pub fn new() -> Result<Self, Report<VerifyError>> {
        let toml_str = include_str!("../../../verify-sdk.toml");

        Self::from_toml(toml_str)
    }

    /// Parses `toml_str` merged with `VERIFY_SDK__*` environment variables.
    ///
    /// For example `VERIFY_SDK__CREDENTIALS__APP_ID` overrides
    /// `credentials.app_id`.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Configuration`] if the TOML is invalid or
    /// required fields are missing.
    pub fn from_toml(toml_str: &str) -> Result<Self, Report<VerifyError>> {
        let environment = Environment::default()
            .prefix(ENVIRONMENT_PREFIX)
            .separator("__");

        let toml = File::from_str(toml_str, FileFormat::Toml);
        let config = Config::builder()
            .add_source(toml)
            .add_source(environment)
            .build()
            .change_context(VerifyError::Configuration {
                message: "Failed to build configuration".into(),
            })?;

        config
            .try_deserialize()
            .change_context(VerifyError::Configuration {
                message: "Failed to deserialize configuration".into(),
            })
    }

    /// Builds a client backed by [`UreqTransport`] after validating settings.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Configuration`] if validation fails or an
    /// endpoint URL cannot be parsed.
    pub fn to_client(&self) -> Result<VerifyClient<UreqTransport>, Report<VerifyError>> {
        self.validate().map_err(|e| {
            Report::new(VerifyError::Configuration {
                message: format!("Settings validation failed: {e}"),
            })
        })?;

        let endpoints = Endpoints::new(&self.endpoints.token_url, &self.endpoints.search_url)?;
        let transport =
            UreqTransport::with_timeout(self.transport.timeout_secs.map(Duration::from_secs));

        log::info!(
            "Verify client for app {} using {}",
            self.credentials.app_id,
            endpoints.token_url
        );

        Ok(VerifyClient::with_transport(
            ClientIdentity::new(
                self.credentials.app_id.clone(),
                self.credentials.shared_secret.clone(),
            ),
            endpoints,
            transport,
        ))
    }
}
