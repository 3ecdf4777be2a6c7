//! # Authenticator Capability
//!
//! The platform authenticator (security key, platform biometric, phone via
//! hybrid transport) is opaque to this crate. It is reached through the
//! [`Authenticator`] trait, which every host implements on top of its own
//! native WebAuthn binding.
//!
//! ## Contract
//! - Both operations may suspend for as long as the user takes to respond.
//! - Dropping the returned future abandons the ceremony.
//! - Failures are reported as [`AuthenticatorFailure`] and normalized into
//!   [`CeremonyError`] by the bridge.

use async_trait::async_trait;
use thiserror::Error;

use crate::error::CeremonyError;
use crate::webauthn::types::{MappedCreationOptions, MappedRequestOptions};

/// Host-provided access to a WebAuthn authenticator.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Whether any authenticator can be reached on this platform.
    ///
    /// Checked before every ceremony. Hosts that cannot tell ahead of time
    /// keep the default and report [`AuthenticatorFailure::NotSupported`]
    /// from the call instead.
    fn is_available(&self) -> bool {
        true
    }

    /// Create a new credential (registration).
    async fn create_credential(
        &self,
        options: &MappedCreationOptions,
    ) -> Result<AttestationCredential, AuthenticatorFailure>;

    /// Produce an assertion with an existing credential (authentication).
    async fn get_assertion(
        &self,
        options: &MappedRequestOptions,
    ) -> Result<AssertionCredential, AuthenticatorFailure>;
}

/// Raw outcome of a successful credential creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttestationCredential {
    pub id: String,
    pub kind: String,
    pub raw_id: Vec<u8>,
    pub attestation_object: Vec<u8>,
    pub client_data_json: Vec<u8>,
    /// `None` when the platform has no transport-reporting accessor.
    pub transports: Option<Vec<String>>,
}

/// Raw outcome of a successful assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionCredential {
    pub id: String,
    pub kind: String,
    pub raw_id: Vec<u8>,
    pub authenticator_data: Vec<u8>,
    pub client_data_json: Vec<u8>,
    pub signature: Vec<u8>,
    /// `None` when the authenticator did not disclose a user handle.
    pub user_handle: Option<Vec<u8>>,
}

/// Failure reported by an authenticator implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthenticatorFailure {
    #[error("Authenticator not supported")]
    NotSupported,

    #[error("User cancelled")]
    Cancelled,

    #[error("Timed out")]
    TimedOut,

    #[error("{name}: {message}")]
    Platform { name: String, message: String },
}

impl AuthenticatorFailure {
    /// Classify a browser `DOMException` raised by `navigator.credentials`.
    ///
    /// `NotAllowedError` covers both an explicit dismissal and an elapsed
    /// platform timeout; browsers do not distinguish the two.
    pub fn from_dom_exception(name: &str, message: &str) -> Self {
        match name {
            "NotSupportedError" => Self::NotSupported,
            "NotAllowedError" | "AbortError" => Self::Cancelled,
            "TimeoutError" => Self::TimedOut,
            _ => Self::Platform {
                name: name.to_string(),
                message: message.to_string(),
            },
        }
    }
}

impl From<AuthenticatorFailure> for CeremonyError {
    fn from(failure: AuthenticatorFailure) -> Self {
        match failure {
            AuthenticatorFailure::NotSupported => CeremonyError::AuthenticatorUnavailable,
            AuthenticatorFailure::Cancelled | AuthenticatorFailure::TimedOut => CeremonyError::UserCancelled,
            platform @ AuthenticatorFailure::Platform { .. } => {
                CeremonyError::AuthenticatorError(platform.to_string())
            }
        }
    }
}
