//! # Passkey Bridge
//!
//! The client-side half of a WebAuthn/passkey ceremony.
//!
//! The relying party speaks JSON, where every binary value is base64url
//! text. The authenticator speaks bytes. This crate sits between them:
//!
//! ```text
//! relying party ── options (text) ──▶ map ──▶ authenticator
//!       ▲                                         │
//!       └──── result (text) ◀── encode ◀── response (bytes)
//! ```
//!
//! ## Key Concepts
//! - **Ceremony**: one registration (`create`) or authentication (`get`)
//! - **Authenticator**: host-provided, see [`authenticator::Authenticator`]
//! - **Relying party**: host-provided, see [`relying_party::RelyingParty`]

pub mod authenticator;
pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod relying_party;
pub mod webauthn;

pub use authenticator::{AssertionCredential, AttestationCredential, Authenticator, AuthenticatorFailure};
pub use client::PasskeyClient;
pub use config::Config;
pub use error::{CeremonyError, ClientError, CodecError, MappingError};
pub use relying_party::RelyingParty;
pub use webauthn::types::{AssertionResult, CreationOptions, CredentialResult, RequestOptions};
pub use webauthn::CeremonyBridge;
