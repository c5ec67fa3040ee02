//! Content → bytes → `{…}` initializer.

use crate::model::Content;

/// Canonical byte view of an artifact. Text is UTF-8, bytes are untouched.
pub fn encode(content: &Content) -> &[u8] {
    match content {
        Content::Text(text) => text.as_bytes(),
        Content::Bytes(bytes) => bytes,
    }
}

/// Render bytes as a brace-enclosed list of decimal values: `{97,98,99}`.
pub fn render_data(data: &[u8]) -> String {
    let values = data.iter().map(u8::to_string).collect::<Vec<_>>().join(",");
    format!("{{{values}}}")
}
