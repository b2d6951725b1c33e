//! # Prefixed Word Frequency
//!
//! Finds the most frequent word starting with `ter` in a Base64-encoded text.
//! Words are maximal runs of ASCII letters, digits and `_` after lowercasing;
//! every other character separates words.

use std::collections::HashMap;

use crate::common::codec::decode_base64;
use crate::common::error::InputError;

/// Prefix a word must start with to be counted.
pub const WORD_PREFIX: &str = "ter";

/// Returned when no word carries [`WORD_PREFIX`].
pub const NOT_FOUND_MESSAGE: &str = "Tidak ditemukan kata yang berawalan 'ter'.";

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Occurrence counts of prefixed words, in first-seen order.
#[derive(Debug, Default)]
pub struct WordFrequency {
    counts: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl WordFrequency {
    /// Count every word in `text` that starts with `prefix`.
    pub fn count_prefixed(text: &str, prefix: &str) -> Self {
        let lowered = text.to_lowercase();
        let mut freq = Self::default();

        for word in lowered
            .split(|c: char| !is_word_char(c))
            .filter(|word| !word.is_empty() && word.starts_with(prefix))
        {
            freq.record(word);
        }

        freq
    }

    fn record(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.counts.len());
                self.counts.push((word.to_string(), 1));
            }
        }
    }

    pub fn count(&self, word: &str) -> usize {
        self.index.get(word).map_or(0, |&slot| self.counts[slot].1)
    }

    /// Word with the highest count. On a tie the word seen first wins.
    pub fn most_frequent(&self) -> Option<(&str, usize)> {
        let mut best: Option<(&str, usize)> = None;
        for (word, count) in &self.counts {
            if best.map_or(true, |(_, top)| *count > top) {
                best = Some((word.as_str(), *count));
            }
        }
        best
    }
}

/// Decode `encoded` and report its most frequent `ter` word.
///
/// # Errors
/// - [`InputError::InvalidBase64`] when `encoded` is not valid Base64
pub fn top_ter_word(encoded: &str) -> Result<String, InputError> {
    let text = decode_base64(encoded)?;
    let freq = WordFrequency::count_prefixed(&text, WORD_PREFIX);

    Ok(match freq.most_frequent() {
        Some((word, count)) => format!(
            "Kata 'ter' yang paling sering muncul adalah '{}' (muncul {} kali).",
            word, count
        ),
        None => NOT_FOUND_MESSAGE.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose, Engine as _};

    fn encode(text: &str) -> String {
        general_purpose::STANDARD.encode(text)
    }

    #[test]
    fn test_most_frequent_word() {
        let report = top_ter_word(&encode("terbaik terbaik termahal")).unwrap();
        assert_eq!(
            report,
            "Kata 'ter' yang paling sering muncul adalah 'terbaik' (muncul 2 kali)."
        );
    }

    #[test]
    fn test_many_candidates() {
        let text = "terbaik terendah terbaik terburuk terendah terbaik";
        let freq = WordFrequency::count_prefixed(text, WORD_PREFIX);
        assert_eq!(freq.most_frequent(), Some(("terbaik", 3)));
        assert_eq!(freq.count("terendah"), 2);
        assert_eq!(freq.count("terburuk"), 1);
    }

    #[test]
    fn test_not_found() {
        assert_eq!(top_ter_word(&encode("hello world")).unwrap(), NOT_FOUND_MESSAGE);
        assert_eq!(top_ter_word("").unwrap(), NOT_FOUND_MESSAGE);
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        let freq = WordFrequency::count_prefixed("termahal terbaik terbaik termahal", WORD_PREFIX);
        assert_eq!(freq.most_frequent(), Some(("termahal", 2)));
    }

    #[test]
    fn test_case_and_punctuation() {
        let freq = WordFrequency::count_prefixed("Terbaik! TERBAIK, (terbaik)... bukan-terbaik", WORD_PREFIX);
        assert_eq!(freq.count("terbaik"), 4);
        assert_eq!(freq.count("bukan"), 0);
    }

    #[test]
    fn test_repeated_separators() {
        let report = top_ter_word(&encode("tercepat  terlambat  ")).unwrap();
        assert!(report.contains("muncul 1 kali"));
        assert!(report.contains("'tercepat'"));
    }

    #[test]
    fn test_bare_prefix_counts() {
        let report = top_ter_word(&encode("ter")).unwrap();
        assert!(report.contains("'ter' (muncul 1 kali)"));
    }

    #[test]
    fn test_non_ascii_letters_split_words() {
        // 'é' is not in the ASCII word class
        let freq = WordFrequency::count_prefixed("terbé terb", WORD_PREFIX);
        assert_eq!(freq.count("terb"), 2);
    }

    #[test]
    fn test_invalid_base64() {
        assert_eq!(top_ter_word("!@#"), Err(InputError::InvalidBase64));
    }
}
