/*!
# text-source

In-memory text source reader with encoding-aware decoding and BOM stripping.

A [`Source`] pairs a fixed payload (text or raw bytes) with a character
encoding. Calling [`Source::read`] decodes the payload strictly under that
encoding and removes every byte-order mark (U+FEFF), leading or embedded,
while leaving all other characters untouched.

## Core Features

- **Strict decoding** via `encoding_rs` - malformed input is an error,
  never silently replaced
- **WHATWG label resolution** - `"utf8"`, `"UTF-16LE"`, `"windows-1251"`
  and friends all resolve to the right encoding
- **Uniform BOM stripping** - every U+FEFF occurrence is removed, not
  only a leading one
- **Immutable sources** - reads are pure and repeatable, safe for
  concurrent read-only use

## Usage

```rust
use text_source::Source;

let source = Source::from_bytes(&b"\xef\xbb\xbf foo \xef\xbb\xbf bar"[..], "utf8")?;
assert_eq!(source.read()?, " foo  bar");
# Ok::<(), text_source::InputError>(())
```
*/

pub mod core;
pub mod input;

// Re-export main types for convenience
pub use crate::core::InputError;
pub use input::{strip_bom, Source, SourcePayload, BOM};

use anyhow::{Context, Result};

/// Decode `bytes` under the given encoding label and strip BOM markers.
///
/// One-shot convenience wrapper around [`Source::from_bytes`] + [`Source::read`].
pub fn read_to_string(bytes: &[u8], encoding: &str) -> Result<String> {
    let source = Source::from_bytes(bytes, encoding)
        .with_context(|| format!("unsupported encoding label '{}'", encoding))?;
    source
        .read()
        .with_context(|| format!("failed to decode payload as {}", encoding))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_to_string_strips_bom() {
        let text = read_to_string(b"\xef\xbb\xbfhello", "utf-8").unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_read_to_string_rejects_unknown_label() {
        assert!(read_to_string(b"hello", "not-an-encoding").is_err());
    }
}
