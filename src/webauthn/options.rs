use crate::codec;
use crate::error::{MappingError, MappingResult};
use crate::webauthn::types::{
    CreationOptions, CredentialDescriptor, MappedCreationOptions, MappedCredentialDescriptor, MappedRequestOptions,
    MappedUserEntity, RequestOptions, UserEntity,
};

// Registration options

/// Restore the binary fields of registration options.
///
/// Decodes `challenge` (required), `user.id` (if present) and every
/// `excludeCredentials[*].id` (if the list is present). Everything else is
/// copied unchanged; `options` itself is left untouched.
pub fn map_create_options(options: &CreationOptions) -> MappingResult<MappedCreationOptions> {
    let options = &options.public_key;
    let challenge = required_field(options.challenge.as_deref(), "publicKey.challenge")?;

    let user = options.user.as_ref().map(map_user).transpose()?;

    let exclude_credentials = options
        .exclude_credentials
        .as_deref()
        .map(|list| map_descriptors(list, "publicKey.excludeCredentials"))
        .transpose()?;

    tracing::debug!(
        challenge_len = challenge.len(),
        excluded = exclude_credentials.as_ref().map_or(0, Vec::len),
        "mapped creation options"
    );

    Ok(MappedCreationOptions {
        challenge,
        user,
        exclude_credentials,
        extra: options.extra.clone(),
    })
}

// Authentication options

pub fn map_get_options(options: &RequestOptions) -> MappingResult<MappedRequestOptions> {
    let options = &options.public_key;
    let challenge = required_field(options.challenge.as_deref(), "publicKey.challenge")?;

    let allow_credentials = options
        .allow_credentials
        .as_deref()
        .map(|list| map_descriptors(list, "publicKey.allowCredentials"))
        .transpose()?;

    tracing::debug!(
        challenge_len = challenge.len(),
        allowed = allow_credentials.as_ref().map_or(0, Vec::len),
        "mapped request options"
    );

    Ok(MappedRequestOptions {
        challenge,
        allow_credentials,
        extra: options.extra.clone(),
    })
}

fn required_field(text: Option<&str>, path: &'static str) -> MappingResult<Vec<u8>> {
    let text = text.ok_or(MappingError::MissingField(path))?;
    decode_field(text, path)
}

fn decode_field(text: &str, path: impl Into<String>) -> MappingResult<Vec<u8>> {
    codec::decode(text).map_err(|source| MappingError::InvalidEncoding {
        path: path.into(),
        source,
    })
}

fn map_user(user: &UserEntity) -> MappingResult<MappedUserEntity> {
    let id = user
        .id
        .as_deref()
        .map(|id| decode_field(id, "publicKey.user.id"))
        .transpose()?;

    Ok(MappedUserEntity {
        id,
        name: user.name.clone(),
        display_name: user.display_name.clone(),
        extra: user.extra.clone(),
    })
}

fn map_descriptors(list: &[CredentialDescriptor], path: &str) -> MappingResult<Vec<MappedCredentialDescriptor>> {
    list.iter()
        .enumerate()
        .map(|(index, descriptor)| -> MappingResult<MappedCredentialDescriptor> {
            Ok(MappedCredentialDescriptor {
                kind: descriptor.kind.clone(),
                id: decode_field(&descriptor.id, format!("{path}[{index}].id"))?,
                transports: descriptor.transports.clone(),
                extra: descriptor.extra.clone(),
            })
        })
        .collect()
}
