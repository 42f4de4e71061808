use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FindingKind {
    /// Character outside `A-Z0-9<` inside a field.
    InvalidCharacter,
    InvalidDate,
    InvalidSex,
    ChecksumMismatch,
    /// Country code missing from the ICAO code list.
    UnknownCountry,
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidCharacter => "invalid character",
            Self::InvalidDate => "invalid date",
            Self::InvalidSex => "invalid sex",
            Self::ChecksumMismatch => "checksum mismatch",
            Self::UnknownCountry => "unknown country",
        })
    }
}

/// Field level problem found while decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub field: Field,
    pub kind: FindingKind,
    pub severity: Severity,

    /// Zone text of the field (or of the check digit position).
    pub raw: String,

    /// Expected value, when there is one (e.g. the computed check digit).
    pub expected: Option<String>,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {:?}", self.field, self.kind, self.raw)?;
        if let Some(expected) = &self.expected {
            write!(f, ", expected {expected:?}")?;
        }
        Ok(())
    }
}
