//! # Error Handling
//!
//! This module defines the error types for every layer of a ceremony.
//! Each layer has its own enum so a caller can always tell *which* layer
//! failed: a malformed payload from the server, a missing options field,
//! a dismissed authenticator prompt, or a failed round-trip to the relying
//! party.
//!
//! ## Layering
//! - [`CodecError`]: base64url text could not be turned into bytes
//! - [`MappingError`]: a server options structure could not be mapped
//! - [`CeremonyError`]: the authenticator invocation did not produce a result
//! - [`ClientError`]: the start → ceremony → finish protocol failed
//!
//! Lower layers are wrapped, never swallowed: `source()` always leads back
//! to the original cause.

use thiserror::Error;

/// Failure to decode base64url text into raw bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The text contains characters outside `[A-Za-z0-9_-]` (plus optional
    /// trailing padding), or its length does not encode a whole number of bytes.
    #[error("Malformed base64url input: {0}")]
    MalformedInput(#[from] base64::DecodeError),
}

/// Failure to restore the binary fields of ceremony options.
///
/// Field paths use the JSON names the server sent, so a diagnostic can point
/// at exactly one field, e.g. `publicKey.excludeCredentials[2].id`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// A required field was absent from the options.
    #[error("Missing required field `{0}`")]
    MissingField(&'static str),

    /// A field was present but is not valid base64url.
    #[error("Field `{path}` is not valid base64url")]
    InvalidEncoding {
        path: String,
        #[source]
        source: CodecError,
    },
}

/// Failure of a single registration or authentication ceremony.
///
/// Every variant is terminal for the ceremony that produced it. Nothing in
/// this crate retries; a fresh attempt needs freshly issued options.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CeremonyError {
    /// The options could not be mapped; the authenticator was never invoked.
    #[error("Ceremony options could not be mapped: {0}")]
    MappingFailed(#[from] MappingError),

    /// No authenticator capability exists on this platform.
    #[error("No authenticator is available on this platform")]
    AuthenticatorUnavailable,

    /// The user dismissed the prompt, or the platform timed it out.
    #[error("The ceremony was cancelled")]
    UserCancelled,

    /// Any other failure the authenticator reported.
    ///
    /// Examples: an excluded credential is already registered on this
    /// authenticator, or the platform rejected the request on security
    /// policy grounds.
    #[error("Authenticator error: {0}")]
    AuthenticatorError(String),

    /// A ceremony timeout is configured but no tokio runtime is driving
    /// the ceremony, so the bound cannot be enforced.
    #[error("Ceremony timeout requires a tokio runtime")]
    TimeoutUnsupported,
}

/// Failure of a full two-phase flow against a relying party.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request was rejected locally before anything was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A start or finish call to the relying party failed.
    #[error("Relying party call `{step}` failed: {source}")]
    RelyingParty {
        step: &'static str,
        #[source]
        source: anyhow::Error,
    },

    /// The authenticator ceremony itself failed.
    #[error(transparent)]
    Ceremony(#[from] CeremonyError),
}

pub type CodecResult<T> = Result<T, CodecError>;

pub type MappingResult<T> = Result<T, MappingError>;

pub type CeremonyResult<T> = Result<T, CeremonyError>;

/// Convenience type alias for Results of the two-phase flow.
pub type ClientResult<T> = Result<T, ClientError>;
