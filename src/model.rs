/// Payload of a single artifact as handed over by the host.
///
/// Text chunks and binary assets end up as the same kind of byte array,
/// the distinction only matters for how the bytes are obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Bytes(Vec<u8>),
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_owned())
    }
}

impl From<Vec<u8>> for Content {
    fn from(bytes: Vec<u8>) -> Self {
        Content::Bytes(bytes)
    }
}

impl From<&[u8]> for Content {
    fn from(bytes: &[u8]) -> Self {
        Content::Bytes(bytes.to_vec())
    }
}

/// One named unit of build output (`assets/logo.png`, `index.js`, …).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub name: String,
    pub content: Content,
}

impl Artifact {
    pub fn new(name: impl Into<String>, content: impl Into<Content>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Generated header, ready to be handed to a [`crate::bundle::Sink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedHeader {
    /// `artifact.name + header_extension`
    pub derived_name: String,
    pub text: String,
}
