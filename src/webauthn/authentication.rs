use crate::authenticator::{AssertionCredential, Authenticator};
use crate::codec;
use crate::error::CeremonyResult;
use crate::webauthn::options::map_get_options;
use crate::webauthn::types::{AssertionResult, EncodedAssertionResponse, RequestOptions};
use crate::webauthn::CeremonyBridge;

impl<A: Authenticator> CeremonyBridge<A> {
    /// Run an authentication ceremony. Same contract as [`CeremonyBridge::create`].
    pub async fn get(&self, options: &RequestOptions) -> CeremonyResult<AssertionResult> {
        let mapped = map_get_options(options)?;

        self.ensure_available("get")?;

        tracing::debug!("invoking authenticator to get an assertion");

        let assertion = self
            .invoke("get", self.authenticator().get_assertion(&mapped))
            .await?;

        let result = encode_assertion(assertion);
        tracing::info!(
            credential_id = %result.id,
            user_handle = result.response.user_handle.is_some(),
            "assertion produced"
        );

        Ok(result)
    }
}

fn encode_assertion(assertion: AssertionCredential) -> AssertionResult {
    AssertionResult {
        id: assertion.id,
        kind: assertion.kind,
        raw_id: codec::encode(&assertion.raw_id),
        response: EncodedAssertionResponse {
            authenticator_data: codec::encode(&assertion.authenticator_data),
            client_data_json: codec::encode(&assertion.client_data_json),
            signature: codec::encode(&assertion.signature),
            // Absent stays absent; an empty handle encodes to ""
            user_handle: assertion.user_handle.as_deref().map(codec::encode),
        },
    }
}
