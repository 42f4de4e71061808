//! Column parser.
//!
//! [`MrzParser`] extracts fields from a zone whose geometry has been checked
//! up front, collecting [`Finding`]s instead of stopping at the first bad
//! field. [`MrzWriter`] is the inverse: it lays encoded fields out on filler
//! initialised lines and computes check digits from the result.
use chrono::NaiveDate;
use log::trace;

use crate::{
    charset::{CharClass, MrzAlphabet, FILLER},
    check_digit::{self, InvalidMrzCharacter},
    codec::{date, name, string, CenturyPivot, Sex},
    country,
    error::Malformed,
    CheckSpec, Field, Finding, FindingKind, Layout, Range, Severity,
};

/// Splits raw text into lines.
///
/// Accepts `\r\n` line endings and a single trailing line terminator.
pub(crate) fn split_lines(text: &str) -> Result<Vec<&str>, Malformed> {
    if !text.is_ascii() {
        return Err(Malformed::NonAscii);
    }

    let text = match text.strip_suffix('\n') {
        Some(t) => t.strip_suffix('\r').unwrap_or(t),
        None => text,
    };

    if text.is_empty() {
        return Err(Malformed::Empty);
    }

    Ok(text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect())
}

pub struct MrzParser<'a> {
    lines: Vec<&'a str>,
    checksum_severity: Severity,
    findings: Vec<Finding>,
}

impl<'a> MrzParser<'a> {
    /// Splits `text` and checks it against the geometry of `layout`.
    pub fn new(text: &'a str, layout: &Layout, checksum_severity: Severity) -> Result<Self, Malformed> {
        let lines = split_lines(text)?;

        if lines.len() != layout.lines {
            return Err(Malformed::LineCount {
                format: layout.format,
                expected: layout.lines,
                found: lines.len(),
            });
        }

        if let Some((line, l)) = lines.iter().enumerate().find(|(_, l)| l.len() != layout.width) {
            return Err(Malformed::LineWidth {
                format: layout.format,
                line,
                expected: layout.width,
                found: l.len(),
            });
        }

        Ok(Self {
            lines,
            checksum_severity,
            findings: Vec::new(),
        })
    }

    pub fn raw(&self, range: Range) -> &'a str {
        let line: &'a str = self.lines[range.line()];
        &line[range.start()..range.end()]
    }

    fn report(&mut self, field: Field, kind: FindingKind, severity: Severity, raw: &str) {
        self.findings.push(Finding {
            field,
            kind,
            severity,
            raw: raw.to_owned(),
            expected: None,
        });
    }

    /// Returns the field text if every character belongs to the MRZ
    /// alphabet.
    fn checked(&mut self, field: Field, range: Range) -> Option<&'a str> {
        let raw = self.raw(range);
        trace!("{field} at {}..{} of line {}: {raw:?}", range.start(), range.end(), range.line());

        if MrzAlphabet::first_invalid(raw.as_bytes()).is_some() {
            self.report(field, FindingKind::InvalidCharacter, Severity::Error, raw);
            None
        } else {
            Some(raw)
        }
    }

    pub fn parse_string(&mut self, field: Field, range: Range) -> String {
        self.checked(field, range).map(string::decode).unwrap_or_default()
    }

    /// Parses a country code, reporting codes missing from the ICAO list
    /// when `check` is set.
    pub fn parse_country(&mut self, field: Field, range: Range, check: bool) -> String {
        let code = self.parse_string(field, range);
        if check && !code.is_empty() && !country::is_known(&code) {
            let raw = self.raw(range);
            self.report(field, FindingKind::UnknownCountry, Severity::Warning, raw);
        }
        code
    }

    pub fn parse_name(&mut self, range: Range) -> (String, Vec<String>) {
        self.checked(Field::Surname, range)
            .map(name::decode)
            .unwrap_or_default()
    }

    pub fn parse_tokens(&mut self, field: Field, range: Range, separator: &str) -> Vec<String> {
        self.checked(field, range)
            .map(|raw| name::decode_tokens(raw, separator))
            .unwrap_or_default()
    }

    pub fn parse_date(&mut self, field: Field, range: Range, pivot: CenturyPivot) -> Option<NaiveDate> {
        let raw = self.raw(range);
        match date::decode(raw, pivot) {
            Ok(date) => Some(date),
            Err(_) => {
                self.report(field, FindingKind::InvalidDate, Severity::Error, raw);
                None
            }
        }
    }

    pub fn parse_sex(&mut self, range: Range) -> Sex {
        let raw = self.raw(range);
        match Sex::from_mrz(raw.as_bytes()[0]) {
            Ok(sex) => sex,
            Err(_) => {
                self.report(Field::Sex, FindingKind::InvalidSex, Severity::Error, raw);
                Sex::Unspecified
            }
        }
    }

    /// Verifies a check digit, recording a finding on mismatch.
    pub fn check_digit(&mut self, check: &CheckSpec) -> bool {
        let digit = self.raw(check.digit);
        let source: String = check.sources.iter().map(|r| self.raw(*r)).collect();

        let expected = digit.chars().next().unwrap_or(FILLER as char);
        match check_digit::verify(&source, expected) {
            Ok(true) => true,
            Ok(false) => {
                self.findings.push(Finding {
                    field: check.field,
                    kind: FindingKind::ChecksumMismatch,
                    severity: self.checksum_severity,
                    raw: digit.to_owned(),
                    expected: check_digit::compute_char(&source).ok().map(String::from),
                });
                false
            }
            Err(e) => {
                // The offending character has its own finding.
                trace!("{} check digit not computed: {e}", check.field);
                false
            }
        }
    }

    pub fn finish(self) -> Vec<Finding> {
        self.findings
    }
}

pub struct MrzWriter {
    lines: Vec<Vec<u8>>,
}

impl MrzWriter {
    pub fn new(layout: &Layout) -> Self {
        Self {
            lines: vec![vec![FILLER; layout.width]; layout.lines],
        }
    }

    /// Writes `value` over `range`. The codecs produce values of exactly
    /// the field width.
    pub fn write(&mut self, range: Range, value: &[u8]) {
        debug_assert_eq!(value.len(), range.len());
        self.lines[range.line()][range.start()..range.end()].copy_from_slice(value);
    }

    fn get(&self, range: Range) -> &[u8] {
        &self.lines[range.line()][range.start()..range.end()]
    }

    pub fn write_check(&mut self, check: &CheckSpec) -> Result<(), InvalidMrzCharacter> {
        let mut source = String::new();
        for range in check.sources {
            source.extend(self.get(*range).iter().map(|&b| b as char));
        }

        let digit = if check.blank_when_empty && source.bytes().all(|b| b == FILLER) {
            FILLER
        } else {
            check_digit::compute_char(&source)? as u8
        };

        self.write(check.digit, &[digit]);
        Ok(())
    }

    /// Joins the lines, each terminated by a newline.
    pub fn finish(self) -> String {
        let mut result = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in self.lines {
            result.extend(line.into_iter().map(char::from));
            result.push('\n');
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MrzFormat;

    #[test]
    fn split() {
        assert_eq!(split_lines("AB\r\nCD\r\n"), Ok(vec!["AB", "CD"]));
        assert_eq!(split_lines("AB\nCD"), Ok(vec!["AB", "CD"]));
        assert_eq!(split_lines(""), Err(Malformed::Empty));
        assert_eq!(split_lines("\n"), Err(Malformed::Empty));
        assert_eq!(split_lines("ÉRIKSSON"), Err(Malformed::NonAscii));
    }

    #[test]
    fn geometry_is_checked_first() {
        let layout = MrzFormat::Passport.layout();
        let short = format!("{}\n{}", "<".repeat(44), "<".repeat(43));
        assert_eq!(
            MrzParser::new(&short, layout, Severity::Error).err(),
            Some(Malformed::LineWidth {
                format: MrzFormat::Passport,
                line: 1,
                expected: 44,
                found: 43
            })
        );

        let single = "<".repeat(44);
        assert_eq!(
            MrzParser::new(&single, layout, Severity::Error).err(),
            Some(Malformed::LineCount {
                format: MrzFormat::Passport,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn invalid_characters_are_reported() {
        let layout = MrzFormat::Passport.layout();
        let text = format!("P<UTOeriksson{}\n{}", "<".repeat(31), "<".repeat(44));
        let mut parser = MrzParser::new(&text, layout, Severity::Error).unwrap();
        let (surname, given) = parser.parse_name(Range::new(5, 44, 0));
        assert_eq!(surname, "");
        assert!(given.is_empty());

        let findings = parser.finish();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].field, Field::Surname);
        assert_eq!(findings[0].kind, FindingKind::InvalidCharacter);
    }
}
