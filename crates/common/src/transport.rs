//! Transport seam for issuing signed requests.
//!
//! The flow only needs one blocking GET per call and the raw body plus the
//! signature header back. [`UreqTransport`] is the production implementation.

use std::fmt;
use std::time::Duration;

use error_stack::{Report, ResultExt};

use crate::constants::HEADER_X_NEXMO_RESPONSE_SIGNATURE;
use crate::error::VerifyError;
use crate::request_signing::SignedRequest;

/// Response as received on the wire, before any integrity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub signature: Option<String>,
}

pub trait Transport {
    /// Sends `request` and reads the full response.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Transport`] if the request cannot be sent or the
    /// body cannot be read.
    fn get(&self, request: &SignedRequest) -> Result<RawResponse, Report<VerifyError>>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, request: &SignedRequest) -> Result<RawResponse, Report<VerifyError>> {
        (**self).get(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, request: &SignedRequest) -> Result<RawResponse, Report<VerifyError>> {
        (**self).get(request)
    }
}

/// Blocking HTTP transport backed by a `ureq` agent.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::with_timeout(None)
    }

    /// HTTP error statuses are returned as responses: the signed body decides
    /// the outcome, not the status line.
    #[must_use]
    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build();

        Self {
            agent: ureq::Agent::new_with_config(config),
        }
    }
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn get(&self, request: &SignedRequest) -> Result<RawResponse, Report<VerifyError>> {
        let url = request.url();

        let mut builder = self.agent.get(url.as_str());
        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder.call().map_err(|e| {
            Report::new(VerifyError::Transport {
                message: format!("Failed to send request: {e}"),
            })
        })?;

        let status = response.status().as_u16();
        let signature = response
            .headers()
            .get(HEADER_X_NEXMO_RESPONSE_SIGNATURE.as_str())
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let body = response
            .body_mut()
            .read_to_vec()
            .map_err(|e| {
                Report::new(VerifyError::Transport {
                    message: format!("Failed to read response: {e}"),
                })
            })
            .attach(format!("status: {status}"))?;

        log::debug!(
            "GET {} returned {} ({} bytes, signature {})",
            request.endpoint(),
            status,
            body.len(),
            if signature.is_some() { "present" } else { "absent" }
        );

        Ok(RawResponse {
            status,
            body,
            signature,
        })
    }
}
