//! French national identity card (1988-2021 model).
//!
//! Surname and given names sit on different lines. The card has no expiry
//! date in the zone, and the meaning of the last character of the second
//! line is not confirmed: it is kept verbatim and never validated.
use super::{CheckSpec, FieldSpec, Layout, NameLayout};
use crate::{codec::name::SEPARATOR, format::FRENCH_ID_PREFIX, Field, MrzFormat, Range};

const DOCUMENT_NUMBER: Range = Range::new(0, 12, 1);
const DATE_OF_BIRTH: Range = Range::new(27, 33, 1);

pub static FRENCH_ID: Layout = Layout {
    format: MrzFormat::FrenchId,
    lines: 2,
    width: 36,
    prefix: Some(FRENCH_ID_PREFIX),
    name: NameLayout::Split {
        surname: Range::new(5, 25, 0),
        given_names: Range::new(13, 27, 1),
        separator: SEPARATOR,
    },
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
            field: Field::Nationality,
            range: Range::new(2, 5, 0),
        },
        FieldSpec {
            field: Field::OptionalData,
            range: Range::new(25, 36, 0),
        },
        FieldSpec {
            field: Field::DocumentNumber,
            range: DOCUMENT_NUMBER,
        },
        FieldSpec {
            field: Field::DateOfBirth,
            range: DATE_OF_BIRTH,
        },
        FieldSpec {
            field: Field::Sex,
            range: Range::at(34, 1),
        },
        FieldSpec {
            field: Field::Reserved,
            range: Range::at(35, 1),
        },
    ],
    checks: &[
        CheckSpec::new(Field::DocumentNumber, Range::at(12, 1), &[DOCUMENT_NUMBER]),
        CheckSpec::new(Field::DateOfBirth, Range::at(33, 1), &[DATE_OF_BIRTH]),
    ],
};
