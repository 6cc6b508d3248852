/*!
# Input Module

Text source construction, encoding resolution, and BOM-aware reading.
*/

pub mod encoding;
pub mod source;

pub use encoding::{decode_bytes, resolve_label, strip_bom, BOM};
pub use source::{Source, SourcePayload};
