/*!
# Encoding Helpers

Label resolution and strict decoding on top of `encoding_rs`,
plus BOM stripping for decoded text.
*/

use encoding_rs::Encoding;

use crate::core::InputError;

/// The Unicode byte-order mark, U+FEFF.
pub const BOM: char = '\u{FEFF}';

/// Resolve an encoding label ("utf8", "UTF-16LE", "windows-1251", ...)
/// to a concrete encoding. Matching follows the WHATWG label rules,
/// so case and common alias spellings are accepted.
pub fn resolve_label(label: &str) -> Result<&'static Encoding, InputError> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| InputError::UnknownEncoding(label.to_string()))
}

/// Decode `bytes` strictly under `encoding`.
///
/// Malformed sequences are an error, never replaced with U+FFFD. A leading
/// BOM is decoded as a regular U+FEFF character so that [`strip_bom`] can
/// treat leading and embedded occurrences uniformly.
pub fn decode_bytes(bytes: &[u8], encoding: &'static Encoding) -> Result<String, InputError> {
    tracing::trace!(encoding = encoding.name(), len = bytes.len(), "decoding payload");
    match encoding.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(decoded) => Ok(decoded.into_owned()),
        None => Err(InputError::Decode {
            encoding: encoding.name().to_string(),
        }),
    }
}

/// Remove every U+FEFF from `text`, leaving all other characters intact.
pub fn strip_bom(text: &str) -> String {
    let count = text.matches(BOM).count();
    if count == 0 {
        return text.to_string();
    }
    tracing::debug!(count, "stripping BOM characters from decoded text");
    text.chars().filter(|&c| c != BOM).collect()
}
