//! # Passkey Client
//!
//! Runs the full two-phase protocol against a relying party:
//!
//! 1. **Start**: ask the relying party for fresh options
//! 2. **Ceremony**: hand them to the [`CeremonyBridge`]
//! 3. **Finish**: post the encoded result back, with the username attached
//!
//! The finish call only happens after a successful ceremony. A failed
//! ceremony is returned as-is; trying again means calling `register` or
//! `login` again, which starts over with a new challenge.

use crate::authenticator::Authenticator;
use crate::error::{ClientError, ClientResult};
use crate::relying_party::RelyingParty;
use crate::webauthn::types::{
    AuthenticationFinishRequest, AuthenticationOutcome, AuthenticationStartRequest, RegistrationFinishRequest,
    RegistrationOutcome, RegistrationStartRequest,
};
use crate::webauthn::CeremonyBridge;

pub struct PasskeyClient<R, A> {
    relying_party: R,
    bridge: CeremonyBridge<A>,
}

impl<R: RelyingParty, A: Authenticator> PasskeyClient<R, A> {
    pub fn new(relying_party: R, bridge: CeremonyBridge<A>) -> Self {
        Self { relying_party, bridge }
    }

    pub fn relying_party(&self) -> &R {
        &self.relying_party
    }

    pub fn bridge(&self) -> &CeremonyBridge<A> {
        &self.bridge
    }

    /// Register a new passkey for `username`.
    ///
    /// `display_name` falls back to the username on the relying party side
    /// when `None`.
    pub async fn register(&self, username: &str, display_name: Option<&str>) -> ClientResult<RegistrationOutcome> {
        let username = validate_username(username)?;

        let start = RegistrationStartRequest {
            username: username.to_string(),
            display_name: display_name.map(str::to_string),
        };
        let options = self
            .relying_party
            .register_start(&start)
            .await
            .map_err(|source| ClientError::RelyingParty { step: "register_start", source })?;

        let credential = self.bridge.create(&options).await?;

        let finish = RegistrationFinishRequest {
            username: username.to_string(),
            credential,
        };
        let outcome = self
            .relying_party
            .register_finish(&finish)
            .await
            .map_err(|source| ClientError::RelyingParty { step: "register_finish", source })?;

        tracing::info!(username, status = %outcome.status, "registration finished");
        Ok(outcome)
    }

    /// Sign in as `username` with one of their passkeys.
    pub async fn login(&self, username: &str) -> ClientResult<AuthenticationOutcome> {
        let username = validate_username(username)?;

        let start = AuthenticationStartRequest {
            username: username.to_string(),
        };
        let options = self
            .relying_party
            .login_start(&start)
            .await
            .map_err(|source| ClientError::RelyingParty { step: "login_start", source })?;

        let assertion = self.bridge.get(&options).await?;

        let finish = AuthenticationFinishRequest {
            username: username.to_string(),
            assertion,
        };
        let outcome = self
            .relying_party
            .login_finish(&finish)
            .await
            .map_err(|source| ClientError::RelyingParty { step: "login_finish", source })?;

        tracing::info!(username, status = %outcome.status, "login finished");
        Ok(outcome)
    }
}

/// The username is sent exactly as given; only an empty one is refused.
fn validate_username(username: &str) -> ClientResult<&str> {
    if username.is_empty() {
        return Err(ClientError::InvalidRequest("username required".to_string()));
    }
    Ok(username)
}
