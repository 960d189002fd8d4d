//! URL-safe base64 without padding.
//!
//! Tokens use the standard base64 alphabet with `+` → `-` and `/` → `_`, and
//! never carry `=` padding, so they can sit in a URL fragment as-is.
//!
//! ```text
//! encode:  text ─(text encoding)→ bytes ─(base64)→ "Zm9v+/==" ─→ "Zm9v-_"
//! decode:  "Zm9v-_" ─→ "Zm9v+/==" ─(base64)→ bytes ─(text encoding)→ text
//! ```

use base64::{Engine as _, engine::general_purpose};
use thiserror::Error;

/// Text encoding applied before base64.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Utf16Le,
}

impl TextEncoding {
    fn encode(self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Utf8 => text.as_bytes().to_vec(),
            TextEncoding::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        }
    }

    fn decode(self, bytes: Vec<u8>) -> Result<String, CodecError> {
        match self {
            TextEncoding::Utf8 => Ok(String::from_utf8(bytes)?),
            TextEncoding::Utf16Le => {
                if bytes.len() % 2 != 0 {
                    return Err(CodecError::Utf16);
                }
                let units = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
                char::decode_utf16(units)
                    .collect::<Result<String, _>>()
                    .map_err(|_| CodecError::Utf16)
            }
        }
    }
}

/// Token decoding errors.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid base64url token")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded bytes are not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("decoded bytes are not valid UTF-16LE")]
    Utf16,
}

/// Standard base64 → URL-safe token (substitute, strip padding).
pub fn from_base64(base64: &str) -> String {
    base64
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect()
}

/// URL-safe token → standard base64 (substitute, re-pad to a multiple of 4).
pub fn to_base64(token: &str) -> String {
    let mut base64: String = token
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();

    let rem = base64.len() % 4;
    if rem != 0 {
        base64.extend(std::iter::repeat_n('=', 4 - rem));
    }
    base64
}

/// Encode raw bytes.
pub fn encode_bytes(bytes: &[u8]) -> String {
    from_base64(&general_purpose::STANDARD.encode(bytes))
}

/// Encode UTF-8 text.
pub fn encode(text: &str) -> String {
    encode_with(text, TextEncoding::Utf8)
}

/// Encode text using the given text encoding.
pub fn encode_with(text: &str, encoding: TextEncoding) -> String {
    encode_bytes(&encoding.encode(text))
}

/// Decode a token to raw bytes.
pub fn decode_bytes(token: &str) -> Result<Vec<u8>, CodecError> {
    Ok(general_purpose::STANDARD.decode(to_base64(token))?)
}

/// Decode a token to UTF-8 text.
pub fn decode(token: &str) -> Result<String, CodecError> {
    decode_with(token, TextEncoding::Utf8)
}

/// Decode a token to text using the given text encoding.
pub fn decode_with(token: &str, encoding: TextEncoding) -> Result<String, CodecError> {
    encoding.decode(decode_bytes(token)?)
}
