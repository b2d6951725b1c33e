//! # Request Processing
//!
//! Pure functions behind each endpoint. Every function takes the raw query
//! value and returns the plain-text response body, or an
//! [`InputError`](crate::common::error::InputError) when the input cannot be
//! decoded.
//!
//! ## Modules
//!
//! - [`student`]: program, intake year and sequence number from a NIM
//! - [`grades`]: weighted score and letter grade from a score table
//! - [`path`]: distance between a grid path and its opposite
//! - [`words`]: most frequent `ter`-prefixed word

pub mod grades;
pub mod path;
pub mod student;
pub mod words;

// Re-export main functions for convenience
pub use grades::grade_report;
pub use path::path_difference;
pub use student::student_info;
pub use words::top_ter_word;
