//! # Student Identifier Lookup
//!
//! A NIM (student identifier) is laid out as:
//!
//! ```text
//! 11S 23 ... 001
//! │   │      └── sequence number (last 3 characters)
//! │   └───────── intake year suffix (characters 3..5)
//! └───────────── program code (characters 0..3)
//! ```

use crate::common::error::InputError;

/// Shortest identifier that carries every field.
pub const MIN_NIM_LENGTH: usize = 8;

/// Returned instead of an error when the identifier is absent or too short.
pub const INVALID_NIM_MESSAGE: &str = "NIM tidak valid: minimal 8 karakter.";

/// Program-code table.
const PROGRAMS: &[(&str, &str)] = &[
    ("11S", "Sarjana Informatika"),
    ("12S", "Sarjana Sistem Informasi"),
    ("14S", "Sarjana Teknik Elektro"),
];

/// Map a 3-character program code to its program name, or `"Unknown"`.
pub fn program_name(code: &str) -> &'static str {
    PROGRAMS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
        .unwrap_or("Unknown")
}

/// Fields extracted from a NIM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentInfo {
    pub program: &'static str,
    pub intake_year: String,
    pub sequence: i32,
}

impl StudentInfo {
    /// Parse an identifier already known to be at least
    /// [`MIN_NIM_LENGTH`] characters long.
    ///
    /// # Errors
    /// - [`InputError::InvalidNumber`] when the last three characters are not
    ///   an integer
    fn parse(nim: &str) -> Result<Self, InputError> {
        let chars: Vec<char> = nim.chars().collect();

        let prefix: String = chars[..3].iter().collect();
        let year_suffix: String = chars[3..5].iter().collect();
        let last_three: String = chars[chars.len() - 3..].iter().collect();

        let sequence = last_three
            .parse::<i32>()
            .map_err(|_| InputError::InvalidNumber(last_three.clone()))?;

        Ok(Self {
            program: program_name(&prefix),
            intake_year: format!("20{}", year_suffix),
            sequence,
        })
    }
}

/// Describe a NIM as a multi-line summary.
///
/// A missing or short identifier is answered with [`INVALID_NIM_MESSAGE`];
/// a non-numeric sequence number is an error.
pub fn student_info(nim: Option<&str>) -> Result<String, InputError> {
    let nim = match nim {
        Some(nim) if nim.chars().count() >= MIN_NIM_LENGTH => nim,
        _ => return Ok(INVALID_NIM_MESSAGE.to_string()),
    };

    let info = StudentInfo::parse(nim)?;

    Ok(format!(
        "Informasi NIM {}:\n>> Program Studi: {}\n>> Angkatan: {}\n>> Urutan: {}",
        nim, info.program, info.intake_year, info.sequence
    ))
}
