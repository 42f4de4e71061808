use thiserror::Error;

use crate::{check_digit::InvalidMrzCharacter, Field, MrzFormat};

/// Fatal decode and encode errors.
///
/// Field level problems found while decoding are not errors: they are
/// returned as [`Finding`](crate::Finding)s next to the record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The text does not have the geometry of the selected format.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] Malformed),

    /// No known format matches the document code and geometry.
    #[error("no MRZ format matches {lines} line(s) of {width} characters with document code {code:?}")]
    NoMatchingFormat {
        lines: usize,
        width: usize,
        code: String,
    },

    /// An encoded value is wider than its field.
    #[error("{field} of {length} characters does not fit a {width} character field")]
    FieldTooLong {
        field: Field,
        width: usize,
        length: usize,
    },

    /// A field required by the format has no value to encode.
    #[error("missing {0}")]
    MissingField(Field),

    /// A character outside the MRZ alphabet reached a check digit.
    #[error(transparent)]
    InvalidCharacter(#[from] InvalidMrzCharacter),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    #[error("empty input")]
    Empty,

    #[error("non ASCII input")]
    NonAscii,

    #[error("{format} expects {expected} line(s), found {found}")]
    LineCount {
        format: MrzFormat,
        expected: usize,
        found: usize,
    },

    #[error("{format} expects {expected} characters on line {line}, found {found}")]
    LineWidth {
        format: MrzFormat,
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// A convenience `Result` type alias using the crate's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
