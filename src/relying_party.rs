//! # Relying Party Interface
//!
//! The relying party issues challenges and verifies what comes back. How
//! requests reach it (HTTP client, IPC, an in-process test double) is up to
//! the host; this trait only fixes the four calls of the two-phase protocol.
//!
//! ## Endpoints this mirrors
//! - `POST /api/v1/register/start`  → [`RelyingParty::register_start`]
//! - `POST /api/v1/register/finish` → [`RelyingParty::register_finish`]
//! - `POST /api/v1/login/start`     → [`RelyingParty::login_start`]
//! - `POST /api/v1/login/finish`    → [`RelyingParty::login_finish`]

use async_trait::async_trait;

use crate::webauthn::types::{
    AuthenticationFinishRequest, AuthenticationOutcome, AuthenticationStartRequest, CreationOptions,
    RegistrationFinishRequest, RegistrationOutcome, RegistrationStartRequest, RequestOptions,
};

#[async_trait]
pub trait RelyingParty: Send + Sync {
    /// Issue fresh registration options for a user.
    async fn register_start(&self, request: &RegistrationStartRequest) -> anyhow::Result<CreationOptions>;

    /// Verify and store a newly created credential.
    async fn register_finish(&self, request: &RegistrationFinishRequest) -> anyhow::Result<RegistrationOutcome>;

    /// Issue fresh authentication options for a user.
    async fn login_start(&self, request: &AuthenticationStartRequest) -> anyhow::Result<RequestOptions>;

    /// Verify an assertion; a successful outcome usually carries a token.
    async fn login_finish(&self, request: &AuthenticationFinishRequest) -> anyhow::Result<AuthenticationOutcome>;
}
