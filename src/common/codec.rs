//! # Text Codecs
//!
//! The two helpers every endpoint shares: Base64 decoding of the query payload
//! and locale-independent two-decimal formatting of scores.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

use super::error::InputError;

/// Standard alphabet, padding optional.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode a standard Base64 string into text.
///
/// Decoded bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// rejected.
///
/// # Errors
/// - [`InputError::InvalidBase64`] when the input contains characters outside
///   the alphabet, misplaced padding, or has an impossible length
///
/// # Example
/// ```
/// use delcom_starter::common::codec::decode_base64;
///
/// assert_eq!(decode_base64("dGVyYmFpaw==").unwrap(), "terbaik");
/// assert!(decode_base64("!@#").is_err());
/// ```
pub fn decode_base64(input: &str) -> Result<String, InputError> {
    let bytes = LENIENT_STANDARD
        .decode(input)
        .map_err(|_| InputError::InvalidBase64)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Format a value with exactly two decimals and a `.` separator.
///
/// Rounding is half-to-even on the exact binary value. No digit grouping is
/// applied.
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "\u{FFFD}".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    format!("{:.2}", value)
}

/// Strip leading and trailing ASCII control characters and spaces.
///
/// Everything at or below U+0020 goes; Unicode spaces such as NBSP stay.
pub fn trim_blanks(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}
