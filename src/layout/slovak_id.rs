//! Slovak identity card, 2 lines of 34 characters.
use super::{CheckSpec, FieldSpec, Layout, NameLayout};
use crate::{Field, MrzFormat, Range};

const DOCUMENT_NUMBER: Range = Range::new(0, 9, 1);
const DATE_OF_BIRTH: Range = Range::new(13, 19, 1);
const DATE_OF_EXPIRY: Range = Range::new(21, 27, 1);

pub static SLOVAK_ID: Layout = Layout {
    format: MrzFormat::SlovakId,
    lines: 2,
    width: 34,
    prefix: None,
    name: NameLayout::Combined(Range::new(5, 34, 0)),
    fields: &[
        FieldSpec {
            field: Field::DocumentCode,
            range: Range::new(0, 2, 0),
        },
        FieldSpec {
            field: Field::IssuingCountry,
            range: Range::new(2, 5, 0),
        },
        FieldSpec {
            field: Field::DocumentNumber,
            range: DOCUMENT_NUMBER,
        },
        FieldSpec {
            field: Field::Nationality,
            range: Range::new(10, 13, 1),
        },
        FieldSpec {
            field: Field::DateOfBirth,
            range: DATE_OF_BIRTH,
        },
        FieldSpec {
            field: Field::Sex,
            range: Range::at(20, 1),
        },
        FieldSpec {
            field: Field::DateOfExpiry,
            range: DATE_OF_EXPIRY,
        },
        FieldSpec {
            field: Field::OptionalData,
            range: Range::new(28, 34, 1),
        },
    ],
    checks: &[
        CheckSpec::new(Field::DocumentNumber, Range::at(9, 1), &[DOCUMENT_NUMBER]),
        CheckSpec::new(Field::DateOfBirth, Range::at(19, 1), &[DATE_OF_BIRTH]),
        CheckSpec::new(Field::DateOfExpiry, Range::at(27, 1), &[DATE_OF_EXPIRY]),
    ],
};
