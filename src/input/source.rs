/*!
# Text Source

An immutable in-memory source: a payload (text or bytes) paired with a
character encoding. Reading decodes the payload and strips BOM markers.
*/

use encoding_rs::Encoding;

use super::encoding::{decode_bytes, resolve_label, strip_bom};
use crate::core::InputError;

/// Raw payload held by a [`Source`].
#[derive(Debug, Clone)]
pub enum SourcePayload {
    /// Already-decoded Unicode text.
    Text(String),
    /// Raw bytes to be decoded under the source's encoding.
    Bytes(Vec<u8>),
}

/// An in-memory text source with a fixed payload and encoding.
///
/// Immutable after construction, so [`Source::read`] is pure: repeated
/// reads of the same source always return the same text.
#[derive(Debug, Clone)]
pub struct Source {
    payload: SourcePayload,
    encoding: &'static Encoding,
}

impl Source {
    /// Create a source from raw bytes and an encoding label.
    ///
    /// Fails with [`InputError::UnknownEncoding`] if the label does not
    /// name a supported encoding.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>, encoding: &str) -> Result<Self, InputError> {
        Ok(Self {
            payload: SourcePayload::Bytes(bytes.into()),
            encoding: resolve_label(encoding)?,
        })
    }

    /// Create a source from already-decoded text. No decode step can fail;
    /// reading only strips BOM characters.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            payload: SourcePayload::Text(text.into()),
            encoding: encoding_rs::UTF_8,
        }
    }

    /// Canonical name of the source's encoding, e.g. `"UTF-8"`.
    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Decode the payload and remove every BOM (U+FEFF) occurrence,
    /// leading or embedded. All other characters, whitespace included,
    /// are preserved exactly.
    pub fn read(&self) -> Result<String, InputError> {
        let decoded = match &self.payload {
            SourcePayload::Text(text) => text.clone(),
            SourcePayload::Bytes(bytes) => decode_bytes(bytes, self.encoding)?,
        };
        Ok(strip_bom(&decoded))
    }
}
