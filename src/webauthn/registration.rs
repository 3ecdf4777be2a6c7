//! # Passkey Registration Ceremony
//!
//! This module handles the client-side logic for creating a new passkey.
//!
//! ## Registration Flow
//! 1. **Map**: Restore challenge, user id and excluded credential ids to bytes
//! 2. **Create**: The authenticator generates a key pair and attests to it
//! 3. **Encode**: Raw id, attestation object and client data go back as base64url
//!
//! ## What the relying party receives
//! - `rawId`: The new credential's id
//! - `response.attestationObject`: Authenticator data + attestation statement (CBOR)
//! - `response.clientDataJSON`: Challenge, origin and ceremony type, as signed
//! - `transports`: How the authenticator can be reached later (may be empty)

use crate::authenticator::{Authenticator, AttestationCredential};
use crate::codec;
use crate::error::CeremonyResult;
use crate::webauthn::options::map_create_options;
use crate::webauthn::types::{CreationOptions, CredentialResult, EncodedAttestationResponse};
use crate::webauthn::CeremonyBridge;

impl<A: Authenticator> CeremonyBridge<A> {
    /// Run a registration ceremony
    ///
    /// ## Flow
    /// 1. Map the options (fails before touching the authenticator)
    /// 2. Check an authenticator is available
    /// 3. Invoke `create_credential` and wait for the user
    /// 4. Encode the response for transport
    ///
    /// ## Errors
    /// - MappingFailed: Missing challenge or a field that is not base64url
    /// - AuthenticatorUnavailable: No authenticator on this platform
    /// - UserCancelled: Prompt dismissed or timed out
    /// - AuthenticatorError: Anything else, e.g. an excluded credential is
    ///   already registered on this authenticator
    ///
    /// The caller's `options` are only read, so they can still be logged or
    /// inspected afterwards.
    pub async fn create(&self, options: &CreationOptions) -> CeremonyResult<CredentialResult> {
        // Any mapping error converts into CeremonyError::MappingFailed via `?`
        let mapped = map_create_options(options)?;

        self.ensure_available("create")?;

        tracing::debug!("invoking authenticator to create a credential");

        // The only suspension point: the user has to touch, scan or confirm
        let credential = self
            .invoke("create", self.authenticator().create_credential(&mapped))
            .await?;

        let result = encode_credential(credential);
        tracing::info!(credential_id = %result.id, transports = ?result.transports, "credential created");

        Ok(result)
    }
}

fn encode_credential(credential: AttestationCredential) -> CredentialResult {
    CredentialResult {
        id: credential.id,
        kind: credential.kind,
        raw_id: codec::encode(&credential.raw_id),
        response: EncodedAttestationResponse {
            attestation_object: codec::encode(&credential.attestation_object),
            client_data_json: codec::encode(&credential.client_data_json),
        },
        // Platforms without a transport accessor report nothing; send an
        // empty list rather than omitting the field
        transports: credential.transports.unwrap_or_default(),
    }
}
