/// Padding and "unknown value" marker.
pub const FILLER: u8 = b'<';

/// ASCII character class.
pub trait CharClass {
    fn contains(c: u8) -> bool;

    /// Returns the first byte of `bytes` outside the class.
    fn first_invalid(bytes: &[u8]) -> Option<u8> {
        bytes.iter().copied().find(|c| !Self::contains(*c))
    }
}

/// Upper case letters, digits and the filler character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MrzAlphabet;

impl CharClass for MrzAlphabet {
    fn contains(c: u8) -> bool {
        c.is_ascii_uppercase() || c.is_ascii_digit() || c == FILLER
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Numeric;

impl CharClass for Numeric {
    fn contains(c: u8) -> bool {
        c.is_ascii_digit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet() {
        assert_eq!(MrzAlphabet::first_invalid(b"P<UTO123"), None);
        assert_eq!(MrzAlphabet::first_invalid(b"P<uTO"), Some(b'u'));
        assert_eq!(MrzAlphabet::first_invalid(b"A B"), Some(b' '));
        assert_eq!(Numeric::first_invalid(b"74<812"), Some(b'<'));
    }
}
