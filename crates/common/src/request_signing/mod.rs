//! Request signing utilities for the Verify SDK protocol.
//!
//! Outgoing requests carry an MD5 signature over their canonicalised
//! parameters salted with the shared secret. Incoming responses carry a
//! signature header computed over the raw body and the same secret.

pub mod identity;
pub mod request;
pub mod signing;

pub use identity::*;
pub use request::*;
pub use signing::*;
