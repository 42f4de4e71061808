use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    optical_data, DecodeOptions, DocumentType, Field, Finding, MrzFormat, Result, Severity, Sex,
};

/// Identity record of a machine readable zone.
///
/// Text fields hold the decoded value: fillers turned into spaces and
/// trimmed. A field that failed to decode is left empty (or `None` for
/// dates) and has a matching [`Finding`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MrzRecord {
    pub format: MrzFormat,
    pub document_code: String,
    pub issuing_country: String,
    pub surname: String,
    pub given_names: Vec<String>,
    pub document_number: String,
    pub nationality: String,
    pub date_of_birth: Option<NaiveDate>,
    pub sex: Sex,
    pub date_of_expiry: Option<NaiveDate>,
    pub optional_data: String,

    /// Second optional data element, TD1 only.
    pub optional_data2: String,

    /// Unconfirmed trailing position of French identity cards.
    pub reserved: String,
}

impl MrzRecord {
    /// Creates an empty record of the given format.
    pub fn new(format: MrzFormat) -> Self {
        Self {
            format,
            document_code: String::new(),
            issuing_country: String::new(),
            surname: String::new(),
            given_names: Vec::new(),
            document_number: String::new(),
            nationality: String::new(),
            date_of_birth: None,
            sex: Sex::Unspecified,
            date_of_expiry: None,
            optional_data: String::new(),
            optional_data2: String::new(),
            reserved: String::new(),
        }
    }

    /// Decodes `text` with the default options.
    pub fn decode(text: &str) -> Result<Decoded> {
        Self::decode_with(text, &DecodeOptions::default())
    }

    /// Detects the format of `text` and decodes it.
    pub fn decode_with(text: &str, options: &DecodeOptions) -> Result<Decoded> {
        let format = MrzFormat::detect(text)?;
        Self::decode_as(format, text, options)
    }

    /// Decodes `text` as `format`, skipping format detection.
    pub fn decode_as(format: MrzFormat, text: &str, options: &DecodeOptions) -> Result<Decoded> {
        format.layout().decode(text, options)
    }

    /// Encodes the record into zone text, each line terminated by `\n`.
    pub fn encode(&self) -> Result<String> {
        self.format.layout().encode(self)
    }

    pub fn document_type(&self) -> Option<DocumentType> {
        DocumentType::from_code(&self.document_code)
    }

    /// Given names joined with spaces.
    pub fn given_names_joined(&self) -> String {
        self.given_names.join(" ")
    }

    /// Optical data of the encoded record, see [`optical_data`].
    pub fn optical_data(&self) -> Result<[u8; 32]> {
        Ok(optical_data(&self.encode()?)?)
    }
}

/// Decoded record and everything found wrong with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decoded {
    pub record: MrzRecord,
    pub findings: Vec<Finding>,
}

impl Decoded {
    /// No finding of [`Severity::Error`].
    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn errors(&self) -> impl '_ + Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl '_ + Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }

    /// First finding about `field`.
    pub fn finding(&self, field: Field) -> Option<&Finding> {
        self.findings.iter().find(|f| f.field == field)
    }

    pub fn into_record(self) -> MrzRecord {
        self.record
    }
}
