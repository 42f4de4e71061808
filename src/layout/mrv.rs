//! Machine readable visas, ICAO 9303 part 7.
//!
//! Both sizes share the second line layout up to the expiry date check
//! digit. Visas carry no composite check digit.
use super::{CheckSpec, FieldSpec, Layout, NameLayout};
use crate::{Field, MrzFormat, Range};

const DOCUMENT_NUMBER: Range = Range::new(0, 9, 1);
const DATE_OF_BIRTH: Range = Range::new(13, 19, 1);
const DATE_OF_EXPIRY: Range = Range::new(21, 27, 1);

const CHECKS: &[CheckSpec] = &[
    CheckSpec::new(Field::DocumentNumber, Range::at(9, 1), &[DOCUMENT_NUMBER]),
    CheckSpec::new(Field::DateOfBirth, Range::at(19, 1), &[DATE_OF_BIRTH]),
    CheckSpec::new(Field::DateOfExpiry, Range::at(27, 1), &[DATE_OF_EXPIRY]),
];

/// Type A, 2 lines of 44 characters.
pub static MRV_A: Layout = Layout {
    format: MrzFormat::MrvA,
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
            range: Range::new(28, 44, 1),
        },
    ],
    checks: CHECKS,
};

/// Type B, 2 lines of 36 characters.
pub static MRV_B: Layout = Layout {
    format: MrzFormat::MrvB,
    lines: 2,
    width: 36,
    prefix: None,
    name: NameLayout::Combined(Range::new(5, 36, 0)),
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
            range: Range::new(28, 36, 1),
        },
    ],
    checks: CHECKS,
};
