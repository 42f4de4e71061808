use serde::{Deserialize, Serialize};

use crate::charset::FILLER;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid sex marker {0:?}")]
pub struct InvalidSex(pub char);

impl Sex {
    pub fn from_mrz(c: u8) -> Result<Self, InvalidSex> {
        match c {
            b'M' => Ok(Self::Male),
            b'F' => Ok(Self::Female),
            FILLER | b'O' => Ok(Self::Unspecified),
            _ => Err(InvalidSex(c as char)),
        }
    }

    pub fn to_mrz(self) -> u8 {
        match self {
            Self::Male => b'M',
            Self::Female => b'F',
            Self::Unspecified => FILLER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers() {
        assert_eq!(Sex::from_mrz(b'M'), Ok(Sex::Male));
        assert_eq!(Sex::from_mrz(b'F'), Ok(Sex::Female));
        assert_eq!(Sex::from_mrz(b'<'), Ok(Sex::Unspecified));
        assert_eq!(Sex::from_mrz(b'O'), Ok(Sex::Unspecified));
        assert_eq!(Sex::from_mrz(b'1'), Err(InvalidSex('1')));
        assert_eq!(Sex::from_mrz(b'm'), Err(InvalidSex('m')));
    }

    #[test]
    fn canonical_encoding() {
        assert_eq!(Sex::Unspecified.to_mrz(), b'<');
        assert_eq!(Sex::from_mrz(Sex::Female.to_mrz()), Ok(Sex::Female));
    }
}
