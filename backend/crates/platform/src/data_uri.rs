//! Image Data URIs
//!
//! Avatars are kept as `data:<mime>;base64,<payload>` strings so they can be
//! rendered directly without a file server.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use mime_guess::Mime;

/// Guess the image MIME type from a file name or path
///
/// Anything whose guessed type is not `image/*` is rejected.
pub fn image_mime_for_path(path: impl AsRef<Path>) -> Option<Mime> {
    mime_guess::from_path(path)
        .iter()
        .find(|mime| mime.type_().as_str() == "image")
}

/// Encode raw bytes as a base64 data URI
pub fn encode(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// MIME type of a data URI, if it is one
pub fn mime_of(uri: &str) -> Option<&str> {
    let rest = uri.strip_prefix("data:")?;
    let (mime, _) = rest.split_once(';')?;
    Some(mime)
}
