/*!
# Core Module

Shared error types for the text source reader.
*/

pub mod errors;

pub use errors::InputError;
