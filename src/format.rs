use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{layout, parser::split_lines, Error, Layout, Result};

/// Document layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MrzFormat {
    /// TD1 identity card, 3 lines of 30 characters.
    Td1,

    /// TD2 identity card, 2 lines of 36 characters.
    Td2,

    /// French national identity card, 2 lines of 36 characters.
    FrenchId,

    /// Type B machine readable visa, 2 lines of 36 characters.
    MrvB,

    /// TD3 passport, 2 lines of 44 characters.
    Passport,

    /// Type A machine readable visa, 2 lines of 44 characters.
    MrvA,

    /// Slovak identity card, 2 lines of 34 characters.
    SlovakId,
}

impl MrzFormat {
    pub const LIST: [Self; 7] = [
        Self::Td1,
        Self::Td2,
        Self::FrenchId,
        Self::MrvB,
        Self::Passport,
        Self::MrvA,
        Self::SlovakId,
    ];

    pub fn layout(&self) -> &'static Layout {
        match self {
            Self::Td1 => &layout::td1::TD1,
            Self::Td2 => &layout::td2::TD2,
            Self::FrenchId => &layout::french_id::FRENCH_ID,
            Self::MrvB => &layout::mrv::MRV_B,
            Self::Passport => &layout::td3::PASSPORT,
            Self::MrvA => &layout::mrv::MRV_A,
            Self::SlovakId => &layout::slovak_id::SLOVAK_ID,
        }
    }

    pub fn lines(&self) -> usize {
        self.layout().lines
    }

    pub fn width(&self) -> usize {
        self.layout().width
    }

    /// Checks the document code at the start of the first line.
    fn accepts(&self, first_line: &str) -> bool {
        let code = first_line.as_bytes().first().copied();
        match self {
            Self::Td1 => matches!(code, Some(b'I' | b'A' | b'C')),
            Self::Td2 => {
                matches!(code, Some(b'I' | b'A' | b'C')) && !first_line.starts_with(FRENCH_ID_PREFIX)
            }
            Self::FrenchId => first_line.starts_with(FRENCH_ID_PREFIX),
            Self::MrvA | Self::MrvB => code == Some(b'V'),
            Self::Passport => code == Some(b'P'),
            Self::SlovakId => code == Some(b'I'),
        }
    }

    /// Selects the format of `text` from its geometry and document code.
    ///
    /// Only an exact match is accepted: anything else, including input that
    /// would match more than one format, fails with
    /// [`Error::NoMatchingFormat`].
    pub fn detect(text: &str) -> Result<Self> {
        let lines = split_lines(text)?;
        let width = lines[0].len();

        let mut candidates = Self::LIST
            .into_iter()
            .filter(|f| f.lines() == lines.len() && f.width() == width && f.accepts(lines[0]));

        match (candidates.next(), candidates.next()) {
            (Some(format), None) => {
                debug!("detected {format} MRZ");
                Ok(format)
            }
            _ => Err(Error::NoMatchingFormat {
                lines: lines.len(),
                width,
                code: lines[0].chars().take(2).collect(),
            }),
        }
    }
}

pub(crate) const FRENCH_ID_PREFIX: &str = "IDFRA";

impl fmt::Display for MrzFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Td1 => "TD1",
            Self::Td2 => "TD2",
            Self::FrenchId => "French ID",
            Self::MrvB => "MRV-B",
            Self::Passport => "passport",
            Self::MrvA => "MRV-A",
            Self::SlovakId => "Slovak ID",
        })
    }
}

/// Document category, from the document code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentType {
    Passport,
    Visa,
    TypeI,
    TypeA,
    TypeC,
    /// Crew member certificate (`AC`).
    CrewMember,
}

impl DocumentType {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.as_bytes() {
            [b'A', b'C', ..] => Some(Self::CrewMember),
            [b'P', ..] => Some(Self::Passport),
            [b'V', ..] => Some(Self::Visa),
            [b'I', ..] => Some(Self::TypeI),
            [b'A', ..] => Some(Self::TypeA),
            [b'C', ..] => Some(Self::TypeC),
            _ => None,
        }
    }
}
