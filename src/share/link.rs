//! Share links: a versioned JSON snapshot of the record in a URL fragment.
//!
//! ```text
//! https://example.com/#config=<base64url({"v":1,"d":{...record...}})>
//! ```
//!
//! Loading is forgiving about what it is handed (a whole link, a fragment or
//! a bare token) but strict about the payload: anything that does not decode
//! to a version-1 object with a `d` object counts as "no shared config".

use std::borrow::Cow;

use percent_encoding::percent_decode_str;
use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

use super::codec::{self, CodecError};
use crate::debug;
use crate::meta::{MetaRecord, RawMeta, normalize};

/// Payload schema version.
pub const SHARE_VERSION: u64 = 1;

/// Fragment prefix preceding the token.
pub const FRAGMENT_PREFIX: &str = "config=";

/// Base URL used when no page URL is given.
pub const DEFAULT_BASE: &str = "https://example.com/";

/// Reasons a share token could not be used.
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("no config token found")]
    NoToken,

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload has no `d` object")]
    MissingData,

    #[error("unsupported payload version: {0}")]
    Version(String),
}

/// Token for a record: `base64url(json({"v":1,"d":record}))`.
pub fn share_token(record: &MetaRecord) -> String {
    let mut payload = Map::new();
    payload.insert("v".into(), SHARE_VERSION.into());
    payload.insert("d".into(), record.to_json());
    codec::encode(&JsonValue::Object(payload).to_string())
}

/// Full share link: `base` with its fragment set to `config=<token>`.
pub fn share_link(base: &str, record: &MetaRecord) -> Result<String, url::ParseError> {
    let mut url = url::Url::parse(base)?;
    let fragment = format!("{FRAGMENT_PREFIX}{}", share_token(record));
    url.set_fragment(Some(&fragment));
    Ok(url.into())
}

/// Pull the token out of a link, a `#config=` / `config=` fragment, or a bare token.
///
/// Returns `None` for a link or fragment that does not carry `config=`.
pub fn extract_token(input: &str) -> Option<Cow<'_, str>> {
    let input = input.trim();

    let fragment = if let Ok(url) = url::Url::parse(input) {
        Cow::Owned(url.fragment()?.to_string())
    } else if let Some(fragment) = input.strip_prefix('#') {
        Cow::Borrowed(fragment)
    } else if input.starts_with(FRAGMENT_PREFIX) {
        Cow::Borrowed(input)
    } else {
        return (!input.is_empty()).then_some(Cow::Borrowed(input));
    };

    // Pasted fragments are sometimes percent-encoded (`config%3D...`)
    let decoded = percent_decode_str(&fragment).decode_utf8_lossy().into_owned();
    decoded
        .strip_prefix(FRAGMENT_PREFIX)
        .filter(|token| !token.is_empty())
        .map(|token| Cow::Owned(token.to_string()))
}

/// Decode a token into raw (not yet normalized) fields.
pub fn decode_token(token: &str) -> Result<RawMeta, ShareError> {
    let text = codec::decode(token)?;
    let payload: JsonValue = serde_json::from_str(&text)?;

    let data = payload
        .get("d")
        .filter(|d| d.is_object())
        .ok_or(ShareError::MissingData)?;

    match payload.get("v") {
        Some(v) if v.as_u64() == Some(SHARE_VERSION) => {}
        Some(v) => return Err(ShareError::Version(v.to_string())),
        None => return Err(ShareError::Version("missing".into())),
    }

    Ok(RawMeta::from_json(data))
}

/// Read raw fields from any accepted share input.
pub fn parse_share(input: &str) -> Result<RawMeta, ShareError> {
    let token = extract_token(input).ok_or(ShareError::NoToken)?;
    decode_token(&token)
}

/// Raw fields from a share input, or `None` if it is unusable.
pub fn load_shared_raw(input: &str) -> Option<RawMeta> {
    match parse_share(input) {
        Ok(raw) => Some(raw),
        Err(e) => {
            debug!("share"; "ignoring shared config: {}", e);
            None
        }
    }
}

/// Re-normalized record from a share input, or `None` if it is unusable.
pub fn load_shared(input: &str) -> Option<MetaRecord> {
    load_shared_raw(input).map(|raw| normalize(&raw))
}
