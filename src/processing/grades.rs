//! # Weighted Grade Aggregation
//!
//! Input is a Base64-encoded table, one component per line:
//!
//! ```text
//! UAS|85|40
//! UTS|75|30
//! ---
//! PA|90|20
//! ```
//!
//! Each line is `label|score|weight`, with weight as a percentage. Lines that
//! do not fit the shape are skipped without complaint.
//!
//! The final score is the running sum of `score * weight / 100`. It is not
//! divided by the total weight afterwards, so a table whose weights add up to
//! less than 100 yields a proportionally smaller score, and the letter grade is
//! taken from that value.

use crate::common::codec::{decode_base64, format_decimal, trim_blanks};
use crate::common::error::InputError;

/// Line that visually separates groups of components.
const SEPARATOR: &str = "---";

/// Letter grade thresholds, checked from the top.
const GRADE_THRESHOLDS: &[(f64, &str)] = &[(85.0, "A"), (75.0, "B"), (65.0, "C"), (55.0, "D")];

/// One `label|score|weight` line.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    pub label: String,
    pub score: f64,
    pub weight: i32,
}

impl ScoreRecord {
    /// Parse a single line, returning `None` when it is blank, a separator,
    /// or otherwise malformed.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = trim_blanks(line);
        if line.is_empty() || line == SEPARATOR || !line.contains('|') {
            return None;
        }

        let parts: Vec<&str> = line.splitn(3, '|').collect();
        if parts.len() != 3 {
            return None;
        }

        let score = parse_decimal(trim_blanks(parts[1]))?;
        let weight = trim_blanks(parts[2]).parse::<i32>().ok()?;

        Some(Self {
            label: parts[0].to_string(),
            score,
            weight,
        })
    }
}

/// Parse a score field.
///
/// Accepts an optionally signed decimal with optional exponent and an optional
/// trailing `d`/`f` type suffix (`85`, `-1.5e2`, `85d`), or exactly `Infinity`
/// or `NaN` with an optional sign. Other spellings of the non-finite values
/// (`inf`, `nan`, `INFINITY`) are rejected.
pub fn parse_decimal(field: &str) -> Option<f64> {
    let unsigned = field.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(field);
    match unsigned {
        "Infinity" if field.starts_with('-') => return Some(f64::NEG_INFINITY),
        "Infinity" => return Some(f64::INFINITY),
        "NaN" => return Some(f64::NAN),
        _ => {}
    }

    let number = field
        .strip_suffix(|c: char| matches!(c, 'd' | 'D' | 'f' | 'F'))
        .unwrap_or(field);
    let well_formed = number
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !well_formed || !number.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    number.parse::<f64>().ok()
}

/// Running totals over the records with positive weight.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GradeSummary {
    pub weighted_sum: f64,
    pub total_weight: i64,
}

impl GradeSummary {
    /// Fold every usable line of `table` into the totals.
    pub fn from_table(table: &str) -> Self {
        table
            .split('\n')
            .filter_map(ScoreRecord::parse_line)
            .filter(|record| record.weight > 0)
            .fold(Self::default(), |mut summary, record| {
                summary.weighted_sum += record.score * (record.weight as f64 / 100.0);
                summary.total_weight += i64::from(record.weight);
                summary
            })
    }

    pub fn grade(&self) -> &'static str {
        letter_grade(self.weighted_sum)
    }
}

/// Letter grade for a score: A ≥ 85, B ≥ 75, C ≥ 65, D ≥ 55, otherwise E.
pub fn letter_grade(score: f64) -> &'static str {
    GRADE_THRESHOLDS
        .iter()
        .find(|(minimum, _)| score >= *minimum)
        .map(|(_, grade)| *grade)
        .unwrap_or("E")
}

/// Decode a score table and report the weighted score, total weight and grade.
///
/// # Errors
/// - [`InputError::InvalidBase64`] when `encoded` is not valid Base64
pub fn grade_report(encoded: &str) -> Result<String, InputError> {
    let table = decode_base64(encoded)?;
    let summary = GradeSummary::from_table(&table);

    Ok(format!(
        "Nilai Akhir: {} (Total Bobot: {}%)\nGrade: {}",
        format_decimal(summary.weighted_sum),
        summary.total_weight,
        summary.grade()
    ))
}
