//! TD1 identity card, ICAO 9303 part 5.
//!
//! The only three line format: the name moves to the last line and the
//! document number to the first.
use super::{CheckSpec, FieldSpec, Layout, NameLayout};
use crate::{Field, MrzFormat, Range};

const DOCUMENT_NUMBER: Range = Range::new(5, 14, 0);
const DATE_OF_BIRTH: Range = Range::new(0, 6, 1);
const DATE_OF_EXPIRY: Range = Range::new(8, 14, 1);

/// Composite check digit input, check digits included.
const COMPOSITE: &[Range] = &[
    Range::new(5, 30, 0),
    Range::new(0, 7, 1),
    Range::new(8, 15, 1),
    Range::new(18, 29, 1),
];

pub static TD1: Layout = Layout {
    format: MrzFormat::Td1,
    lines: 3,
    width: 30,
    prefix: None,
    name: NameLayout::Combined(Range::new(0, 30, 2)),
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
            field: Field::OptionalData,
            range: Range::new(15, 30, 0),
        },
        FieldSpec {
            field: Field::DateOfBirth,
            range: DATE_OF_BIRTH,
        },
        FieldSpec {
            field: Field::Sex,
            range: Range::at(7, 1),
        },
        FieldSpec {
            field: Field::DateOfExpiry,
            range: DATE_OF_EXPIRY,
        },
        FieldSpec {
            field: Field::Nationality,
            range: Range::new(15, 18, 1),
        },
        FieldSpec {
            field: Field::OptionalData2,
            range: Range::new(18, 29, 1),
        },
    ],
    checks: &[
        CheckSpec::new(Field::DocumentNumber, Range::at(14, 0), &[DOCUMENT_NUMBER]),
        CheckSpec::new(Field::DateOfBirth, Range::at(6, 1), &[DATE_OF_BIRTH]),
        CheckSpec::new(Field::DateOfExpiry, Range::at(14, 1), &[DATE_OF_EXPIRY]),
        CheckSpec::new(Field::Composite, Range::at(29, 1), COMPOSITE),
    ],
};
