//! Shareable configuration.
//!
//! - `codec` - URL-safe base64 without padding
//! - `link` - versioned payload, share links and lenient loading

pub mod codec;
pub mod link;

pub use codec::{CodecError, TextEncoding};
pub use link::{
    DEFAULT_BASE, ShareError, extract_token, load_shared, load_shared_raw, parse_share, share_link,
    share_token,
};
