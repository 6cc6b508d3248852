/*!
# Error System

Error types for source construction and decoding.
*/

use thiserror::Error;

/// Errors produced while building or reading a text source.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Unknown encoding label: {0}")]
    UnknownEncoding(String),

    #[error("Payload is not valid {encoding}")]
    Decode { encoding: String },
}
