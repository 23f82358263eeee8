//! Data URI helpers for embedding assets inline

use base64::{Engine as _, engine::general_purpose::STANDARD};

pub const SVG_MIME_TYPE: &str = "image/svg+xml";

/// Build a `data:<mime>;base64,<payload>` URI
pub fn encode(mime_type: &str, data: impl AsRef<[u8]>) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(data))
}

/// Split a base64 data URI back into its MIME type and decoded bytes
pub fn decode(uri: &str) -> Option<(&str, Vec<u8>)> {
    let rest = uri.strip_prefix("data:")?;
    let (mime_type, payload) = rest.split_once(";base64,")?;
    STANDARD.decode(payload).ok().map(|bytes| (mime_type, bytes))
}
