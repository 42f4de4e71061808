use serde::{Deserialize, Serialize};

use crate::{CenturyPivot, Severity};

/// Decoding parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeOptions {
    /// Century resolution of birth dates.
    pub birth_pivot: CenturyPivot,

    /// Century resolution of expiry dates.
    pub expiry_pivot: CenturyPivot,

    /// Severity of check digit mismatches.
    pub checksum_severity: Severity,

    /// Report country codes missing from the ICAO code list.
    pub check_country_codes: bool,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_birth_pivot(self, birth_pivot: CenturyPivot) -> Self {
        Self {
            birth_pivot,
            ..self
        }
    }

    pub fn with_expiry_pivot(self, expiry_pivot: CenturyPivot) -> Self {
        Self {
            expiry_pivot,
            ..self
        }
    }

    pub fn with_checksum_severity(self, checksum_severity: Severity) -> Self {
        Self {
            checksum_severity,
            ..self
        }
    }

    pub fn with_country_check(self, check_country_codes: bool) -> Self {
        Self {
            check_country_codes,
            ..self
        }
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            birth_pivot: CenturyPivot::current_year(),
            expiry_pivot: CenturyPivot::years_ahead(50),
            checksum_severity: Severity::Error,
            check_country_codes: true,
        }
    }
}
