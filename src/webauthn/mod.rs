//! # WebAuthn Module
//!
//! This module contains the client side of a passkey ceremony: it turns the
//! relying party's options into what the authenticator needs, invokes the
//! authenticator, and turns its answer back into something the relying
//! party can verify.
//!
//! ## Submodules
//! - `types`: Options, mapped options and result shapes
//! - `options`: Restoring base64url option fields to bytes
//! - `registration`: Creating a new passkey ([`CeremonyBridge::create`])
//! - `authentication`: Signing in with a passkey ([`CeremonyBridge::get`])
//!
//! ## Ceremony Flow
//! 1. Map the options (no authenticator call happens if this fails)
//! 2. Check an authenticator is available
//! 3. Invoke it and wait, possibly for a long time, for the user
//! 4. Encode every binary field of the response as base64url
//!
//! Every failure ends the ceremony. Nothing here retries: a stale challenge
//! must never be presented twice.

pub mod authentication;
pub mod options;
pub mod registration;
pub mod types;

use std::future::Future;

use crate::authenticator::{Authenticator, AuthenticatorFailure};
use crate::config::Config;
use crate::error::{CeremonyError, CeremonyResult};

/// Drives one registration or authentication ceremony at a time.
///
/// The bridge holds no per-ceremony state; each `create`/`get` works on its
/// own copy of the options. Keeping a single ceremony in flight per user
/// action is up to the caller.
#[derive(Debug, Clone)]
pub struct CeremonyBridge<A> {
    authenticator: A,
    config: Config,
}

impl<A: Authenticator> CeremonyBridge<A> {
    pub fn new(authenticator: A) -> Self {
        Self::with_config(authenticator, Config::default())
    }

    pub fn with_config(authenticator: A, config: Config) -> Self {
        Self { authenticator, config }
    }

    pub fn authenticator(&self) -> &A {
        &self.authenticator
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn ensure_available(&self, ceremony: &'static str) -> CeremonyResult<()> {
        if self.authenticator.is_available() {
            return Ok(());
        }
        tracing::warn!(ceremony, "no authenticator available");
        Err(CeremonyError::AuthenticatorUnavailable)
    }

    /// Await the authenticator, bounded by the configured timeout.
    ///
    /// The bound is driven by tokio's timer, so a configured timeout needs a
    /// tokio runtime with time enabled. Without one the ceremony fails with
    /// [`CeremonyError::TimeoutUnsupported`] before the authenticator is
    /// polled. Unbounded ceremonies run on any executor.
    async fn invoke<T>(
        &self,
        ceremony: &'static str,
        call: impl Future<Output = Result<T, AuthenticatorFailure>>,
    ) -> CeremonyResult<T> {
        if self.config.ceremony_timeout.is_some() && tokio::runtime::Handle::try_current().is_err() {
            tracing::error!(ceremony, "ceremony timeout configured outside a tokio runtime");
            return Err(CeremonyError::TimeoutUnsupported);
        }

        let outcome = match self.config.ceremony_timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(outcome) => outcome,
                Err(_) => Err(AuthenticatorFailure::TimedOut),
            },
            None => call.await,
        };

        outcome.map_err(|failure| {
            match &failure {
                AuthenticatorFailure::Cancelled | AuthenticatorFailure::TimedOut => {
                    tracing::warn!(ceremony, reason = %failure, "ceremony cancelled")
                }
                AuthenticatorFailure::NotSupported => {
                    tracing::warn!(ceremony, "authenticator reported it is not supported")
                }
                AuthenticatorFailure::Platform { .. } => {
                    tracing::error!(ceremony, error = %failure, "authenticator error")
                }
            }
            CeremonyError::from(failure)
        })
    }
}
