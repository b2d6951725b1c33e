//! # Path Reversal Distance
//!
//! A path is a string of moves on a grid, starting at the origin: `U` (y+1),
//! `D` (y-1), `L` (x-1), `R` (x+1). Other characters do not move.
//!
//! The opposite path swaps `U`/`D` and `L`/`R`. Characters that are not moves
//! are dropped from it entirely, so the opposite of `"U X"` is `"D"`.

use crate::common::codec::{decode_base64, trim_blanks};
use crate::common::error::InputError;

/// A grid position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    /// Sum of absolute coordinate differences.
    pub fn manhattan_distance(&self, other: &Point) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Walk `path` from the origin and return where it ends.
pub fn end_point(path: &str) -> Point {
    path.chars().fold(Point::default(), |mut p, step| {
        match step {
            'U' => p.y += 1,
            'D' => p.y -= 1,
            'L' => p.x -= 1,
            'R' => p.x += 1,
            _ => {}
        }
        p
    })
}

/// Invert every move in `path`, discarding anything that is not a move.
pub fn opposite_path(path: &str) -> String {
    path.chars()
        .filter_map(|step| match step {
            'U' => Some('D'),
            'D' => Some('U'),
            'L' => Some('R'),
            'R' => Some('L'),
            _ => None,
        })
        .collect()
}

/// Decode a path, walk it and its opposite, and report both end points and
/// the distance between them.
///
/// # Errors
/// - [`InputError::InvalidBase64`] when `encoded` is not valid Base64
pub fn path_difference(encoded: &str) -> Result<String, InputError> {
    let decoded = decode_base64(encoded)?;
    let path = trim_blanks(&decoded);

    let original_end = end_point(path);
    let opposite = opposite_path(path);
    let opposite_end = end_point(&opposite);
    let distance = original_end.manhattan_distance(&opposite_end);

    Ok(format!(
        "Path Original: {} -> ({}, {})\nPath Kebalikan: {} -> ({}, {})\nPerbedaan Jarak: {}",
        path, original_end.x, original_end.y, opposite, opposite_end.x, opposite_end.y, distance
    ))
}
