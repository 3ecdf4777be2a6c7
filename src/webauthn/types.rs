//! # WebAuthn Ceremony Types
//!
//! This module defines the structures that cross the system boundary in
//! both directions, plus the binary-bearing copies handed to the authenticator.
//!
//! ## Three families of types
//! - **Wire options** ([`CreationOptions`], [`RequestOptions`]): what the
//!   relying party sends. Every binary field is base64url text.
//! - **Mapped options** ([`MappedCreationOptions`], [`MappedRequestOptions`]):
//!   the same data with those fields restored to raw bytes. Built by
//!   [`options`](super::options), consumed once by the authenticator.
//! - **Results** ([`CredentialResult`], [`AssertionResult`]): what goes back
//!   to the relying party. Every binary field is base64url text again.
//!
//! Fields that may be missing are `Option`s. Fields this crate does not
//! interpret (`rp`, `pubKeyCredParams`, `timeout`, `authenticatorSelection`,
//! ...) are carried untouched in a flattened `extra` map.
//!
//! ## Example creation options JSON
//! ```json
//! {
//!   "publicKey": {
//!     "rp": { "id": "localhost", "name": "FIDO2 Demo RP" },
//!     "user": { "id": "MQ", "name": "alice", "displayName": "Alice" },
//!     "challenge": "q83vEjRWeJA",
//!     "pubKeyCredParams": [{ "type": "public-key", "alg": -7 }],
//!     "excludeCredentials": [{ "type": "public-key", "id": "AQID" }]
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The only credential type WebAuthn defines.
pub const PUBLIC_KEY_CREDENTIAL_TYPE: &str = "public-key";

fn public_key_type() -> String {
    PUBLIC_KEY_CREDENTIAL_TYPE.to_string()
}

// ---------------------------------------------------------------------------
// Wire options (relying party -> client)
// ---------------------------------------------------------------------------

/// Options for a registration ceremony, as issued by the relying party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationOptions {
    pub public_key: PublicKeyCredentialCreationOptions,
}

/// The `publicKey` member of [`CreationOptions`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredentialCreationOptions {
    /// Base64url challenge. Required; `Option` only so that its absence is
    /// reported as a mapping error rather than a parse error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserEntity>,

    /// Credentials already registered for this user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_credentials: Option<Vec<CredentialDescriptor>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Options for an authentication ceremony, as issued by the relying party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestOptions {
    pub public_key: PublicKeyCredentialRequestOptions,
}

/// The `publicKey` member of [`RequestOptions`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredentialRequestOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,

    /// Credentials the relying party will accept. Absent for discoverable
    /// credential (username-less) logins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_credentials: Option<Vec<CredentialDescriptor>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// User account the new credential will belong to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEntity {
    /// Base64url user handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reference to an existing credential (exclude/allow lists).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialDescriptor {
    #[serde(rename = "type", default = "public_key_type")]
    pub kind: String,

    /// Base64url credential id.
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transports: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CredentialDescriptor {
    /// A `public-key` descriptor with no transport hints.
    pub fn public_key(id: impl Into<String>) -> Self {
        Self {
            kind: public_key_type(),
            id: id.into(),
            transports: None,
            extra: Map::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Mapped options (client -> authenticator)
// ---------------------------------------------------------------------------

/// [`PublicKeyCredentialCreationOptions`] with binary fields restored.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedCreationOptions {
    pub challenge: Vec<u8>,
    pub user: Option<MappedUserEntity>,
    pub exclude_credentials: Option<Vec<MappedCredentialDescriptor>>,
    pub extra: Map<String, Value>,
}

/// [`PublicKeyCredentialRequestOptions`] with binary fields restored.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedRequestOptions {
    pub challenge: Vec<u8>,
    pub allow_credentials: Option<Vec<MappedCredentialDescriptor>>,
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MappedUserEntity {
    pub id: Option<Vec<u8>>,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MappedCredentialDescriptor {
    pub kind: String,
    pub id: Vec<u8>,
    pub transports: Option<Vec<String>>,
    pub extra: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// Results (client -> relying party)
// ---------------------------------------------------------------------------

/// Transport-safe outcome of a registration ceremony.
///
/// ## Example JSON
/// ```json
/// {
///   "id": "CQk",
///   "type": "public-key",
///   "rawId": "CQk",
///   "response": { "attestationObject": "o2NmbXQ", "clientDataJSON": "eyJ0eXBlIjoi" },
///   "transports": ["internal", "hybrid"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialResult {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub raw_id: String,
    pub response: EncodedAttestationResponse,
    /// Empty when the authenticator does not report transports.
    #[serde(default)]
    pub transports: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedAttestationResponse {
    pub attestation_object: String,
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
}

/// Transport-safe outcome of an authentication ceremony.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssertionResult {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub raw_id: String,
    pub response: EncodedAssertionResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedAssertionResponse {
    pub authenticator_data: String,
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
    pub signature: String,
    /// `None` when the authenticator did not disclose a user handle.
    /// `Some("")` is a disclosed, empty handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_handle: Option<String>,
}

// ---------------------------------------------------------------------------
// Relying party API payloads
// ---------------------------------------------------------------------------

/// Request to start passkey registration
///
/// ## Example JSON
/// ```json
/// { "username": "alice", "displayName": "Alice Smith" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationStartRequest {
    pub username: String,
    /// Defaults to the username on the server side when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Request to complete passkey registration
///
/// The credential fields sit at the top level next to `username`,
/// which is where the relying party reads them from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationFinishRequest {
    pub username: String,
    #[serde(flatten)]
    pub credential: CredentialResult,
}

/// Request to start passkey authentication
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticationStartRequest {
    pub username: String,
}

/// Request to complete passkey authentication
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticationFinishRequest {
    pub username: String,
    #[serde(flatten)]
    pub assertion: AssertionResult,
}

/// Relying party's answer to a registration finish call.
///
/// ## Example JSON
/// ```json
/// { "status": "ok" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationOutcome {
    pub status: String,
}

/// Relying party's answer to an authentication finish call.
///
/// ## Example JSON
/// ```json
/// { "status": "ok", "token": "eyJhbGciOi..." }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationOutcome {
    pub status: String,
    /// Session token issued after a verified assertion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn creation_options_keep_unknown_fields() {
        let raw = json!({
            "publicKey": {
                "rp": { "id": "localhost", "name": "FIDO2 Demo RP" },
                "user": { "id": "MQ", "name": "alice", "displayName": "Alice", "icon": "x" },
                "challenge": "AAEC",
                "timeout": 60000,
                "excludeCredentials": [
                    { "type": "public-key", "id": "AQ", "transports": ["usb"] }
                ]
            }
        });

        let options: CreationOptions = serde_json::from_value(raw.clone()).unwrap();
        let pk = &options.public_key;
        assert_eq!(pk.challenge.as_deref(), Some("AAEC"));
        assert_eq!(pk.extra["timeout"], json!(60000));
        assert_eq!(pk.extra["rp"]["name"], json!("FIDO2 Demo RP"));

        let user = pk.user.as_ref().unwrap();
        assert_eq!(user.display_name.as_deref(), Some("Alice"));
        assert_eq!(user.extra["icon"], json!("x"));

        assert_eq!(serde_json::to_value(&options).unwrap(), raw);
    }

    #[test]
    fn descriptor_type_defaults_to_public_key() {
        let descriptor: CredentialDescriptor = serde_json::from_value(json!({ "id": "AQ" })).unwrap();
        assert_eq!(descriptor, CredentialDescriptor::public_key("AQ"));
    }

    #[test]
    fn absent_user_handle_is_omitted() {
        let response = EncodedAssertionResponse {
            authenticator_data: "AA".into(),
            client_data_json: "AA".into(),
            signature: "AA".into(),
            user_handle: None,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("userHandle").is_none());
        assert_eq!(value["clientDataJSON"], json!("AA"));

        let empty = EncodedAssertionResponse {
            user_handle: Some(String::new()),
            ..response
        };
        assert_eq!(serde_json::to_value(&empty).unwrap()["userHandle"], json!(""));
    }

    #[test]
    fn finish_request_flattens_credential_next_to_username() {
        let request = RegistrationFinishRequest {
            username: "alice".into(),
            credential: CredentialResult {
                id: "CQk".into(),
                kind: PUBLIC_KEY_CREDENTIAL_TYPE.into(),
                raw_id: "CQk".into(),
                response: EncodedAttestationResponse {
                    attestation_object: "o2M".into(),
                    client_data_json: "e30".into(),
                },
                transports: vec![],
            },
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "username": "alice",
                "id": "CQk",
                "type": "public-key",
                "rawId": "CQk",
                "response": { "attestationObject": "o2M", "clientDataJSON": "e30" },
                "transports": []
            })
        );
    }
}
