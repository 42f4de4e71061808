//! Decoding and encoding of [ICAO 9303][icao] Machine Readable Zones.
//!
//! [icao]: <https://www.icao.int/publications/pages/publication.aspx?docnum=9303>
//!
//! Raw zone text is matched against the known document layouts (passports,
//! visas, identity cards), then decoded field by field. Decoding is strict
//! about geometry but best-effort about content: bad dates, bad sex markers
//! and check digit mismatches are returned as [`Finding`]s next to the
//! record instead of aborting.
//!
//! ```
//! use icao_mrz::{MrzRecord, Sex};
//!
//! let mrz = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<\n\
//!            L898902C36UTO7408122F1204159ZE184226B<<<<<10";
//!
//! let decoded = MrzRecord::decode(mrz).unwrap();
//! assert!(decoded.is_valid());
//! assert_eq!(decoded.record.surname, "ERIKSSON");
//! assert_eq!(decoded.record.given_names, ["ANNA", "MARIA"]);
//! assert_eq!(decoded.record.sex, Sex::Female);
//! ```
pub mod charset;
pub mod check_digit;
pub mod codec;
pub mod country;
mod error;
mod field;
mod finding;
mod format;
pub mod layout;
mod optical_data;
mod options;
pub mod parser;
mod range;
mod record;

pub use codec::{CenturyPivot, Sex};
pub use error::{Error, Malformed, Result};
pub use field::Field;
pub use finding::{Finding, FindingKind, Severity};
pub use format::{DocumentType, MrzFormat};
pub use layout::{CheckSpec, FieldSpec, Layout, NameLayout};
pub use optical_data::optical_data;
pub use options::DecodeOptions;
pub use range::Range;
pub use record::{Decoded, MrzRecord};
