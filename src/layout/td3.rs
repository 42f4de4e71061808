//! TD3 passport, ICAO 9303 part 4.
use super::{CheckSpec, FieldSpec, Layout, NameLayout};
use crate::{Field, MrzFormat, Range};

const DOCUMENT_NUMBER: Range = Range::new(0, 9, 1);
const DATE_OF_BIRTH: Range = Range::new(13, 19, 1);
const DATE_OF_EXPIRY: Range = Range::new(21, 27, 1);
const PERSONAL_NUMBER: Range = Range::new(28, 42, 1);

/// Composite check digit input, check digits included.
const COMPOSITE: &[Range] = &[
    Range::new(0, 10, 1),
    Range::new(13, 20, 1),
    Range::new(21, 43, 1),
];

pub static PASSPORT: Layout = Layout {
    format: MrzFormat::Passport,
    lines: 2,
    width: 44,
    prefix: None,
    name: NameLayout::Combined(Range::new(5, 44, 0)),
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
            range: PERSONAL_NUMBER,
        },
    ],
    checks: &[
        CheckSpec::new(Field::DocumentNumber, Range::at(9, 1), &[DOCUMENT_NUMBER]),
        CheckSpec::new(Field::DateOfBirth, Range::at(19, 1), &[DATE_OF_BIRTH]),
        CheckSpec::new(Field::DateOfExpiry, Range::at(27, 1), &[DATE_OF_EXPIRY]),
        CheckSpec {
            field: Field::OptionalData,
            digit: Range::at(42, 1),
            sources: &[PERSONAL_NUMBER],
            blank_when_empty: true,
        },
        CheckSpec::new(Field::Composite, Range::at(43, 1), COMPOSITE),
    ],
};
