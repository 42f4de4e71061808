//! Data driven document layouts.
//!
//! A [`Layout`] lists where every field of a format sits, which ranges each
//! check digit protects, and how names are laid out. Decoding and encoding
//! are the same for every format and only follow the tables.
use log::debug;

use crate::{
    codec::{date, name, string, FieldTooLong},
    parser::{MrzParser, MrzWriter},
    DecodeOptions, Decoded, Error, Field, MrzFormat, MrzRecord, Range, Result,
};

pub mod french_id;
pub mod mrv;
pub mod slovak_id;
pub mod td1;
pub mod td2;
pub mod td3;

pub struct Layout {
    pub format: MrzFormat,
    pub lines: usize,
    pub width: usize,

    /// Literal written at the start of the first line when encoding.
    pub prefix: Option<&'static str>,

    pub name: NameLayout,
    pub fields: &'static [FieldSpec],

    /// Check digits, in encoding order. A composite check must come after
    /// the checks it covers.
    pub checks: &'static [CheckSpec],
}

pub enum NameLayout {
    /// Surname and given names share one field, separated by two fillers.
    Combined(Range),

    /// Surname and given names have their own ranges, possibly on different
    /// lines. Given name tokens are joined with `separator`.
    Split {
        surname: Range,
        given_names: Range,
        separator: &'static str,
    },
}

pub struct FieldSpec {
    pub field: Field,
    pub range: Range,
}

pub struct CheckSpec {
    /// Field reported when the check fails.
    pub field: Field,

    /// Position of the check digit.
    pub digit: Range,

    /// Ranges concatenated to compute the check digit.
    pub sources: &'static [Range],

    /// Encode a filler instead of `0` when all sources are filler.
    pub blank_when_empty: bool,
}

impl CheckSpec {
    pub const fn new(field: Field, digit: Range, sources: &'static [Range]) -> Self {
        Self {
            field,
            digit,
            sources,
            blank_when_empty: false,
        }
    }
}

fn too_long(field: Field) -> impl Fn(FieldTooLong) -> Error {
    move |e| Error::FieldTooLong {
        field,
        width: e.width,
        length: e.length,
    }
}

impl Layout {
    /// Every range of the layout, with the field it belongs to.
    pub fn ranges(&self) -> impl '_ + Iterator<Item = (Field, Range)> {
        let names = match self.name {
            NameLayout::Combined(range) => vec![(Field::Surname, range)],
            NameLayout::Split {
                surname,
                given_names,
                ..
            } => vec![(Field::Surname, surname), (Field::GivenNames, given_names)],
        };

        names
            .into_iter()
            .chain(self.fields.iter().map(|f| (f.field, f.range)))
            .chain(self.checks.iter().map(|c| (c.field, c.digit)))
    }

    pub fn decode(&self, text: &str, options: &DecodeOptions) -> Result<Decoded> {
        let mut p = MrzParser::new(text, self, options.checksum_severity)?;
        let mut record = MrzRecord::new(self.format);

        match self.name {
            NameLayout::Combined(range) => {
                (record.surname, record.given_names) = p.parse_name(range);
            }
            NameLayout::Split {
                surname,
                given_names,
                separator,
            } => {
                record.surname = p.parse_string(Field::Surname, surname);
                record.given_names = p.parse_tokens(Field::GivenNames, given_names, separator);
            }
        }

        for FieldSpec { field, range } in self.fields {
            let (field, range) = (*field, *range);
            match field {
                Field::DocumentCode => record.document_code = p.parse_string(field, range),
                Field::IssuingCountry => {
                    record.issuing_country =
                        p.parse_country(field, range, options.check_country_codes)
                }
                Field::Nationality => {
                    record.nationality = p.parse_country(field, range, options.check_country_codes)
                }
                Field::DocumentNumber => record.document_number = p.parse_string(field, range),
                Field::DateOfBirth => {
                    record.date_of_birth = p.parse_date(field, range, options.birth_pivot)
                }
                Field::DateOfExpiry => {
                    record.date_of_expiry = p.parse_date(field, range, options.expiry_pivot)
                }
                Field::Sex => record.sex = p.parse_sex(range),
                Field::OptionalData => record.optional_data = p.parse_string(field, range),
                Field::OptionalData2 => record.optional_data2 = p.parse_string(field, range),
                Field::Reserved => record.reserved = string::decode(p.raw(range)),
                Field::Surname | Field::GivenNames | Field::Composite => {
                    unreachable!("{field} is not a plain layout field")
                }
            }
        }

        for check in self.checks {
            p.check_digit(check);
        }

        let findings = p.finish();
        debug!(
            "decoded {} MRZ with {} finding(s)",
            self.format,
            findings.len()
        );

        Ok(Decoded { record, findings })
    }

    pub fn encode(&self, record: &MrzRecord) -> Result<String> {
        let mut w = MrzWriter::new(self);

        match self.name {
            NameLayout::Combined(range) => {
                let value = name::encode(&record.surname, &record.given_names, range.len())
                    .map_err(too_long(Field::Surname))?;
                w.write(range, &value);
            }
            NameLayout::Split {
                surname,
                given_names,
                separator,
            } => {
                let value = string::encode(&record.surname, surname.len())
                    .map_err(too_long(Field::Surname))?;
                w.write(surname, &value);

                let value =
                    name::encode_tokens(&record.given_names, separator, given_names.len())
                        .map_err(too_long(Field::GivenNames))?;
                w.write(given_names, &value);
            }
        }

        for FieldSpec { field, range } in self.fields {
            let (field, range) = (*field, *range);
            let text = |value: &str| string::encode(value, range.len()).map_err(too_long(field));

            let value = match field {
                Field::DocumentCode => text(&record.document_code)?,
                Field::IssuingCountry => text(&record.issuing_country)?,
                Field::Nationality => text(&record.nationality)?,
                Field::DocumentNumber => text(&record.document_number)?,
                Field::DateOfBirth => {
                    date::encode(record.date_of_birth.ok_or(Error::MissingField(field))?).to_vec()
                }
                Field::DateOfExpiry => {
                    date::encode(record.date_of_expiry.ok_or(Error::MissingField(field))?).to_vec()
                }
                Field::Sex => vec![record.sex.to_mrz()],
                Field::OptionalData => text(&record.optional_data)?,
                Field::OptionalData2 => text(&record.optional_data2)?,
                Field::Reserved => text(&record.reserved)?,
                Field::Surname | Field::GivenNames | Field::Composite => {
                    unreachable!("{field} is not a plain layout field")
                }
            };

            w.write(range, &value);
        }

        if let Some(prefix) = self.prefix {
            w.write(Range::new(0, prefix.len(), 0), prefix.as_bytes());
        }

        for check in self.checks {
            w.write_check(check)?;
        }

        Ok(w.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every column of every format is covered by exactly one range.
    #[test]
    fn ranges_tile_the_zone() {
        for format in MrzFormat::LIST {
            let layout = format.layout();
            let mut covered = vec![vec![0; layout.width]; layout.lines];
            for (field, range) in layout.ranges() {
                // The French card prints one country code for both fields.
                if format == MrzFormat::FrenchId && field == Field::Nationality {
                    continue;
                }

                assert!(range.fits(layout.lines, layout.width), "{format}: {range:?}");
                for column in range.start()..range.end() {
                    covered[range.line()][column] += 1;
                }
            }

            for (line, columns) in covered.iter().enumerate() {
                for (column, count) in columns.iter().enumerate() {
                    assert_eq!(*count, 1, "{format}: line {line} column {column}");
                }
            }
        }
    }

    #[test]
    fn check_sources_fit() {
        for format in MrzFormat::LIST {
            let layout = format.layout();
            for check in layout.checks {
                assert_eq!(check.digit.len(), 1);
                for range in check.sources {
                    assert!(range.fits(layout.lines, layout.width), "{format}: {range:?}");
                }
            }
        }
    }

    #[test]
    fn no_name_fields_in_field_tables() {
        for format in MrzFormat::LIST {
            for spec in format.layout().fields {
                assert!(!matches!(
                    spec.field,
                    Field::Surname | Field::GivenNames | Field::Composite
                ));
            }
        }
    }
}
