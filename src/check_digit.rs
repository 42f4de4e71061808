//! ICAO 9303 check digits.
//!
//! Every character is mapped to a value (digits to themselves, `A`..`Z` to
//! 10..35, filler to 0), multiplied by the repeating weights 7, 3, 1 and
//! summed. The check digit is the sum modulo 10.
use crate::charset::FILLER;

const WEIGHTS: [u32; 3] = [7, 3, 1];

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid MRZ character {0:?}")]
pub struct InvalidMrzCharacter(pub char);

fn value_of(c: u8) -> Result<u32, InvalidMrzCharacter> {
    match c {
        b'0'..=b'9' => Ok((c - b'0') as u32),
        b'A'..=b'Z' => Ok((c - b'A') as u32 + 10),
        FILLER => Ok(0),
        _ => Err(InvalidMrzCharacter(c as char)),
    }
}

/// Computes the check digit (0-9) of `input`.
pub fn compute(input: &str) -> Result<u8, InvalidMrzCharacter> {
    let mut sum = 0u32;
    for (i, c) in input.bytes().enumerate() {
        sum += value_of(c)? * WEIGHTS[i % 3];
    }

    Ok((sum % 10) as u8)
}

/// Same as [`compute`], as the character printed in the zone.
pub fn compute_char(input: &str) -> Result<char, InvalidMrzCharacter> {
    compute(input).map(|d| (b'0' + d) as char)
}

/// Verifies `expected` against the check digit of `input`.
///
/// A filler in the check digit position means no check digit was supplied
/// and is always accepted.
pub fn verify(input: &str, expected: char) -> Result<bool, InvalidMrzCharacter> {
    if expected == FILLER as char {
        return Ok(true);
    }

    let digit = compute(input)?;
    Ok(expected.to_digit(10) == Some(digit as u32))
}
