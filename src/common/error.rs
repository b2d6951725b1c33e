//! # Input Errors
//!
//! Failures raised by the processing functions when a request carries input
//! that cannot be decoded or parsed. These are never turned into a normal
//! response; the HTTP layer maps them to a server error.

use thiserror::Error;

/// Error returned when request input is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The payload is not valid standard Base64.
    #[error("Input Base64 tidak valid.")]
    InvalidBase64,

    /// A field that must be an integer is not one.
    #[error("Angka tidak valid: '{0}'")]
    InvalidNumber(String),
}
