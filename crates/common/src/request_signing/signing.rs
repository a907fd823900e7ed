//! Signature computation and verification.
//!
//! Request signatures are computed over a canonical parameter string:
//! keys in byte-wise ascending order, each entry rendered as `&key=value`,
//! with the shared secret appended before hashing. Response signatures are
//! computed over the raw body bytes with the shared secret appended.

use std::collections::BTreeMap;

use error_stack::{Report, ResultExt};
use md5::{Digest, Md5};
use serde::de::DeserializeOwned;

use crate::constants::{PARAM_APP_ID, PARAM_SIG, PARAM_TIMESTAMP, PARAM_TOKEN};
use crate::error::VerifyError;

use super::identity::{ClientIdentity, SharedSecret};

/// Request parameters keyed by name. Iteration order is the canonical
/// signing order.
pub type ParameterSet = BTreeMap<String, String>;

// Characters that would collide with the canonical string's own delimiters.
const TOKEN_RESERVED_CHARS: [char; 3] = ['&', ',', '='];

/// Renders the canonical string that request signatures are computed over.
#[must_use]
pub fn canonical_string(params: &ParameterSet) -> String {
    params
        .iter()
        .fold(String::new(), |mut canonical, (key, value)| {
            canonical.push('&');
            canonical.push_str(key);
            canonical.push('=');
            if key == PARAM_TOKEN {
                canonical.push_str(&value.replace(TOKEN_RESERVED_CHARS, "_"));
            } else {
                canonical.push_str(value);
            }
            canonical
        })
}

/// Computes the request signature for `params`.
///
/// Returns an empty string for an empty parameter set; the secret is not
/// hashed on its own.
#[must_use]
pub fn compute_signature(params: &ParameterSet, shared_secret: &SharedSecret) -> String {
    let canonical = canonical_string(params);
    if canonical.is_empty() {
        return String::new();
    }

    let mut hasher = Md5::new();
    hasher.update(canonical.as_bytes());
    hasher.update(shared_secret.expose().as_bytes());
    hex::encode(hasher.finalize())
}

/// Copies `caller_params` and injects `app_id`, `timestamp` and `sig`.
///
/// The timestamp is read once so the transmitted value is the signed value.
#[must_use]
pub fn build_signed_parameters(caller_params: &ParameterSet, identity: &ClientIdentity) -> ParameterSet {
    build_signed_parameters_at(caller_params, identity, chrono::Utc::now().timestamp())
}

/// Same as [`build_signed_parameters`] with an explicit epoch timestamp in seconds.
#[must_use]
pub fn build_signed_parameters_at(
    caller_params: &ParameterSet,
    identity: &ClientIdentity,
    timestamp: i64,
) -> ParameterSet {
    let mut params = caller_params.clone();
    params.remove(PARAM_SIG);
    params.insert(PARAM_APP_ID.to_owned(), identity.app_id().to_owned());
    params.insert(PARAM_TIMESTAMP.to_owned(), timestamp.to_string());

    let signature = compute_signature(&params, identity.shared_secret());
    params.insert(PARAM_SIG.to_owned(), signature);
    params
}

/// Computes the signature the server attaches to a response body.
#[must_use]
pub fn response_signature(body: &[u8], shared_secret: &SharedSecret) -> String {
    let mut hasher = Md5::new();
    hasher.update(body);
    hasher.update(shared_secret.expose().as_bytes());
    hex::encode(hasher.finalize())
}

/// Checks the response signature header against the received body.
///
/// # Errors
///
/// Returns [`VerifyError::MissingSignature`] if the header is absent or empty
/// and [`VerifyError::InvalidSignature`] if it does not match the body.
pub fn verify_response_signature(
    body: &[u8],
    signature: Option<&str>,
    shared_secret: &SharedSecret,
) -> Result<(), Report<VerifyError>> {
    let signature = match signature {
        Some(value) if !value.is_empty() => value,
        _ => return Err(Report::new(VerifyError::MissingSignature)),
    };

    if response_signature(body, shared_secret) != signature {
        return Err(Report::new(VerifyError::InvalidSignature)
            .attach(format!("received signature: {signature}")));
    }

    Ok(())
}

/// Response body whose signature has been checked.
///
/// The only way to obtain one is [`VerifiedResponse::verify`], so decoding a
/// business object always happens after verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedResponse {
    body: Vec<u8>,
}

impl VerifiedResponse {
    /// Verifies `body` against `signature` and wraps it on success.
    ///
    /// # Errors
    ///
    /// Returns the error of [`verify_response_signature`].
    pub fn verify(
        body: Vec<u8>,
        signature: Option<&str>,
        shared_secret: &SharedSecret,
    ) -> Result<Self, Report<VerifyError>> {
        verify_response_signature(&body, signature, shared_secret)?;
        Ok(Self { body })
    }

    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Decodes the verified body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Decode`] if the body is not valid JSON of shape `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, Report<VerifyError>> {
        serde_json::from_slice(&self.body).change_context(VerifyError::Decode {
            message: format!(
                "Failed to decode response as {}",
                std::any::type_name::<T>()
            ),
        })
    }
}
