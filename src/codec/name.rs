//! Names.
//!
//! The primary identifier (surname) and the secondary identifier (given
//! names) are separated by two fillers. Inside each part, single fillers
//! separate words.
use super::{pad, string::to_mrz, FieldTooLong};
use crate::charset::FILLER;

pub const SEPARATOR: &str = "<<";

/// Splits a name field into surname and given name tokens.
pub fn decode(raw: &str) -> (String, Vec<String>) {
    let raw = raw.trim_end_matches(FILLER as char);
    match raw.split_once(SEPARATOR) {
        Some((primary, secondary)) => (words(primary), decode_tokens(secondary, "<")),
        None => (words(raw), Vec::new()),
    }
}

pub fn encode(surname: &str, given_names: &[String], width: usize) -> Result<Vec<u8>, FieldTooLong> {
    let mut value = to_mrz(surname.trim());

    let given = join_tokens(given_names, b"<");
    if !given.is_empty() {
        value.extend(SEPARATOR.as_bytes());
        value.extend(given);
    }

    pad(value, width)
}

/// Splits `raw` on `separator`, turning the remaining fillers of each token
/// into spaces. Empty tokens are dropped.
pub fn decode_tokens(raw: &str, separator: &str) -> Vec<String> {
    raw.trim_end_matches(FILLER as char)
        .split(separator)
        .map(words)
        .filter(|t| !t.is_empty())
        .collect()
}

pub fn encode_tokens(
    tokens: &[String],
    separator: &str,
    width: usize,
) -> Result<Vec<u8>, FieldTooLong> {
    pad(join_tokens(tokens, separator.as_bytes()), width)
}

fn words(raw: &str) -> String {
    raw.split(FILLER as char)
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn join_tokens(tokens: &[String], separator: &[u8]) -> Vec<u8> {
    let mut value = Vec::new();
    for token in tokens.iter().map(|t| to_mrz(t.trim())).filter(|t| !t.is_empty()) {
        if !value.is_empty() {
            value.extend(separator);
        }
        value.extend(token);
    }
    value
}
