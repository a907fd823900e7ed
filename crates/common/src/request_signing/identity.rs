//! Client identity: application id, shared secret and the fixed SDK platform
//! fields sent with every request.

use std::fmt;

use crate::constants::{SDK_OS_FAMILY, SDK_OS_REVISION, SDK_REVISION};

/// Secret shared with the remote service. Never transmitted and never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct SharedSecret(String);

impl SharedSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(<redacted>)")
    }
}

impl From<&str> for SharedSecret {
    fn from(secret: &str) -> Self {
        Self::new(secret)
    }
}

impl From<String> for SharedSecret {
    fn from(secret: String) -> Self {
        Self(secret)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    app_id: String,
    shared_secret: SharedSecret,
    os_family: &'static str,
    os_revision: &'static str,
    sdk_revision: &'static str,
}

impl ClientIdentity {
    pub fn new(app_id: impl Into<String>, shared_secret: impl Into<SharedSecret>) -> Self {
        Self {
            app_id: app_id.into(),
            shared_secret: shared_secret.into(),
            os_family: SDK_OS_FAMILY,
            os_revision: SDK_OS_REVISION,
            sdk_revision: SDK_REVISION,
        }
    }

    #[must_use]
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    #[must_use]
    pub fn shared_secret(&self) -> &SharedSecret {
        &self.shared_secret
    }

    #[must_use]
    pub fn os_family(&self) -> &'static str {
        self.os_family
    }

    #[must_use]
    pub fn os_revision(&self) -> &'static str {
        self.os_revision
    }

    #[must_use]
    pub fn sdk_revision(&self) -> &'static str {
        self.sdk_revision
    }
}
