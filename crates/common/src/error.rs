//! Error types for the Verify SDK client.
//!
//! Every fallible operation returns `Result<T, Report<VerifyError>>`; the
//! report carries attachments describing which endpoint or step failed.

use derive_more::{Display, Error};

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// Settings could not be loaded or failed validation
    #[display("Configuration error: {message}")]
    Configuration { message: String },

    /// The outbound call could not be completed or its body could not be read
    #[display("Transport error: {message}")]
    Transport { message: String },

    /// The response carried no signature header
    #[display("Missing Response Signature")]
    MissingSignature,

    /// The response signature does not match the received body
    #[display("Invalid Response Signature")]
    InvalidSignature,

    /// The body was authentic but did not decode into the expected shape
    #[display("Decode error: {message}")]
    Decode { message: String },

    /// The remote service refused to issue a token
    #[display("{message}")]
    RemoteRejection { result_code: i64, message: String },
}

impl VerifyError {
    /// Whether the error means the response could not be trusted.
    #[must_use]
    pub fn is_signature_failure(&self) -> bool {
        matches!(
            self,
            VerifyError::MissingSignature | VerifyError::InvalidSignature
        )
    }
}
