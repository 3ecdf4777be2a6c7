#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use passkey_bridge::codec;
use passkey_bridge::webauthn::types::{
    AuthenticationFinishRequest, AuthenticationOutcome, AuthenticationStartRequest, CreationOptions,
    CredentialDescriptor, MappedCreationOptions, MappedRequestOptions, PublicKeyCredentialCreationOptions,
    PublicKeyCredentialRequestOptions, RegistrationFinishRequest, RegistrationOutcome, RegistrationStartRequest,
    RequestOptions, UserEntity,
};
use passkey_bridge::{AssertionCredential, AttestationCredential, Authenticator, AuthenticatorFailure, RelyingParty};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn attestation() -> AttestationCredential {
    AttestationCredential {
        id: "CQk".to_string(),
        kind: "public-key".to_string(),
        raw_id: vec![9, 9],
        attestation_object: vec![0xa3, 0x63, 0x66],
        client_data_json: br#"{"type":"webauthn.create"}"#.to_vec(),
        transports: Some(vec!["internal".to_string(), "hybrid".to_string()]),
    }
}

pub fn assertion() -> AssertionCredential {
    AssertionCredential {
        id: "CQk".to_string(),
        kind: "public-key".to_string(),
        raw_id: vec![9, 9],
        authenticator_data: vec![0x49, 0x96, 0x0d],
        client_data_json: br#"{"type":"webauthn.get"}"#.to_vec(),
        signature: vec![0x30, 0x45, 0x02],
        user_handle: Some(b"1".to_vec()),
    }
}

/// Authenticator that answers from a script and records what it was given.
pub struct StubAuthenticator {
    pub available: bool,
    pub attestation: Result<AttestationCredential, AuthenticatorFailure>,
    pub assertion: Result<AssertionCredential, AuthenticatorFailure>,
    /// Simulated time the user takes to respond.
    pub delay: Option<Duration>,
    pub calls: AtomicUsize,
    pub last_creation: Mutex<Option<MappedCreationOptions>>,
    pub last_request: Mutex<Option<MappedRequestOptions>>,
}

impl Default for StubAuthenticator {
    fn default() -> Self {
        Self {
            available: true,
            attestation: Ok(attestation()),
            assertion: Ok(assertion()),
            delay: None,
            calls: AtomicUsize::new(0),
            last_creation: Mutex::new(None),
            last_request: Mutex::new(None),
        }
    }
}

impl StubAuthenticator {
    pub fn failing(failure: AuthenticatorFailure) -> Self {
        Self {
            attestation: Err(failure.clone()),
            assertion: Err(failure),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn wait(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl Authenticator for StubAuthenticator {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn create_credential(
        &self,
        options: &MappedCreationOptions,
    ) -> Result<AttestationCredential, AuthenticatorFailure> {
        *self.last_creation.lock().unwrap() = Some(options.clone());
        self.wait().await;
        self.attestation.clone()
    }

    async fn get_assertion(&self, options: &MappedRequestOptions) -> Result<AssertionCredential, AuthenticatorFailure> {
        *self.last_request.lock().unwrap() = Some(options.clone());
        self.wait().await;
        self.assertion.clone()
    }
}

/// Relying party double that issues a new challenge on every start call.
#[derive(Default)]
pub struct InMemoryRelyingParty {
    pub issued: Mutex<Vec<String>>,
    pub calls: Mutex<Vec<&'static str>>,
    pub registered: Mutex<Vec<RegistrationFinishRequest>>,
    pub logins: Mutex<Vec<AuthenticationFinishRequest>>,
    pub reject_finish: bool,
}

impl InMemoryRelyingParty {
    fn next_challenge(&self) -> String {
        let mut issued = self.issued.lock().unwrap();
        let challenge = codec::encode(&[0, 1, 2, issued.len() as u8]);
        issued.push(challenge.clone());
        challenge
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RelyingParty for InMemoryRelyingParty {
    async fn register_start(&self, request: &RegistrationStartRequest) -> anyhow::Result<CreationOptions> {
        self.calls.lock().unwrap().push("register_start");
        let display_name = request.display_name.clone().unwrap_or_else(|| request.username.clone());
        Ok(CreationOptions {
            public_key: PublicKeyCredentialCreationOptions {
                challenge: Some(self.next_challenge()),
                user: Some(UserEntity {
                    id: Some(codec::encode(b"1")),
                    name: Some(request.username.clone()),
                    display_name: Some(display_name),
                    ..UserEntity::default()
                }),
                exclude_credentials: Some(vec![CredentialDescriptor::public_key("AQ")]),
                ..PublicKeyCredentialCreationOptions::default()
            },
        })
    }

    async fn register_finish(&self, request: &RegistrationFinishRequest) -> anyhow::Result<RegistrationOutcome> {
        self.calls.lock().unwrap().push("register_finish");
        if self.reject_finish {
            anyhow::bail!("registration state expired or missing");
        }
        self.registered.lock().unwrap().push(request.clone());
        Ok(RegistrationOutcome { status: "ok".to_string() })
    }

    async fn login_start(&self, _request: &AuthenticationStartRequest) -> anyhow::Result<RequestOptions> {
        self.calls.lock().unwrap().push("login_start");
        Ok(RequestOptions {
            public_key: PublicKeyCredentialRequestOptions {
                challenge: Some(self.next_challenge()),
                allow_credentials: Some(vec![CredentialDescriptor::public_key("CQk")]),
                ..PublicKeyCredentialRequestOptions::default()
            },
        })
    }

    async fn login_finish(&self, request: &AuthenticationFinishRequest) -> anyhow::Result<AuthenticationOutcome> {
        self.calls.lock().unwrap().push("login_finish");
        if self.reject_finish {
            anyhow::bail!("authentication state expired or missing");
        }
        self.logins.lock().unwrap().push(request.clone());
        Ok(AuthenticationOutcome {
            status: "ok".to_string(),
            token: Some(format!("token-for-{}", request.username)),
        })
    }
}
