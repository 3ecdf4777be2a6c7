//! # Base64url Codec
//!
//! Every credential id, challenge, user handle and signature crosses the
//! text/binary boundary through this module. The server sends (and expects
//! back) URL-safe base64 with the `=` padding stripped; the authenticator
//! works on raw bytes.
//!
//! ## Format
//! - Alphabet: `A-Z a-z 0-9 - _` (the `+`/`/` of standard base64 are not accepted)
//! - Encode: never emits padding
//! - Decode: trailing padding is optional. Full (`AQ==`) and partial (`AQ=`)
//!   padding are accepted; padding beyond a multiple of four is not

use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};

use crate::error::CodecResult;

/// URL-safe engine that writes unpadded text and reads padded or unpadded
/// text alike. Non-zero trailing bits are rejected, so every accepted input
/// has exactly one canonical form.
const BASE64_URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode base64url text into raw bytes.
///
/// Fails with [`CodecError::MalformedInput`](crate::error::CodecError::MalformedInput)
/// when:
/// - the text contains a character outside the URL-safe alphabet
/// - its length leaves a remainder that cannot encode whole bytes
/// - the last symbol carries non-zero trailing bits (`"AB"`), i.e. the text
///   is not the canonical encoding of any byte string
pub fn decode(text: &str) -> CodecResult<Vec<u8>> {
    Ok(BASE64_URL.decode(text.as_bytes())?)
}

/// Encode raw bytes as unpadded base64url text.
pub fn encode(data: &[u8]) -> String {
    BASE64_URL.encode(data)
}
