//! Client for the Verify SDK API.
//!
//! Every outgoing request is signed with an MD5 digest over its canonical
//! parameters and the application's shared secret, and every response is
//! accepted only once its signature header matches the received body.
//!
//! # Modules
//!
//! - [`constants`]: Protocol header names, parameter keys and SDK identity constants
//! - [`error`]: Error types and error handling utilities
//! - [`models`]: Token and search response payloads
//! - [`request_signing`]: Signature computation, response verification and request assembly
//! - [`settings`]: Configuration loading and validation
//! - [`test_support`]: Testing utilities and mocks
//! - [`transport`]: Blocking HTTP transport seam
//! - [`verify_flow`]: Token request and token-then-search flow

pub mod constants;
pub mod error;
pub mod models;
pub mod request_signing;
pub mod settings;
pub mod transport;
pub mod verify_flow;

pub use error::VerifyError;
pub use models::{ResultStatus, SearchResponse, TokenResponse};
pub use request_signing::{ClientIdentity, ParameterSet, SharedSecret};
pub use verify_flow::{Endpoints, VerifyClient};
