use super::{pad, FieldTooLong};
use crate::charset::FILLER;

/// Replaces filler with spaces and drops the trailing padding.
///
/// Leading filler is part of the value: right aligned fields such as the
/// department code of a French identity card keep their position.
pub fn decode(raw: &str) -> String {
    raw.trim_end_matches(FILLER as char)
        .replace(FILLER as char, " ")
}

/// Upper cases `value` and replaces everything outside `A-Z0-9` with filler.
///
/// Trailing whitespace is padding and dropped, leading whitespace is kept.
pub(crate) fn to_mrz(value: &str) -> Vec<u8> {
    value
        .trim_end()
        .chars()
        .map(|c| {
            let c = c.to_ascii_uppercase();
            if c.is_ascii_uppercase() || c.is_ascii_digit() {
                c as u8
            } else {
                FILLER
            }
        })
        .collect()
}

pub fn encode(value: &str, width: usize) -> Result<Vec<u8>, FieldTooLong> {
    pad(to_mrz(value), width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_strips_filler() {
        assert_eq!(decode("L898902C<"), "L898902C");
        assert_eq!(decode("ZE184226B<<<<<"), "ZE184226B");
        assert_eq!(decode("AB<CD<<<"), "AB CD");
        assert_eq!(decode("<<<<"), "");
    }

    #[test]
    fn leading_filler_is_kept() {
        assert_eq!(decode("<<<<<932013"), "     932013");
        assert_eq!(encode("     932013", 11).unwrap(), b"<<<<<932013");
        assert_eq!(encode("  12 ", 6).unwrap(), b"<<12<<");
    }

    #[test]
    fn encode_pads_and_normalises() {
        assert_eq!(encode("l898902c", 9).unwrap(), b"L898902C<");
        assert_eq!(encode("ab cd", 8).unwrap(), b"AB<CD<<<");
        assert_eq!(encode("", 3).unwrap(), b"<<<");
    }

    #[test]
    fn encode_never_truncates() {
        assert_eq!(
            encode("1234567890", 9),
            Err(FieldTooLong {
                width: 9,
                length: 10
            })
        );
    }
}
