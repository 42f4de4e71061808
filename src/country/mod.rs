//! ICAO 9303 issuing state, nationality and organisation codes.
//!
//! ISO 3166-1 alpha-3 codes plus the codes ICAO reserves for Germany (`D`),
//! British nationality classes, international organisations, stateless
//! persons and refugees, and the `UTO` specimen state.
use std::{collections::HashMap, io::Cursor};

use lazy_static::lazy_static;

lazy_static! {
    static ref COUNTRY_CODES: HashMap<String, String> = {
        let mut map = HashMap::new();

        let cursor = Cursor::new(include_str!("country-codes.csv"));
        let mut reader = csv::Reader::from_reader(cursor);
        for result in reader.records() {
            let record = result.unwrap();
            map.insert(record[0].to_owned(), record[1].to_owned());
        }

        map
    };
}

/// Name of the country or organisation behind `code`.
///
/// `code` is the decoded field value, without filler (`"D"`, not `"D<<"`).
pub fn lookup(code: &str) -> Option<&'static str> {
    COUNTRY_CODES.get(code).map(String::as_str)
}

pub fn is_known(code: &str) -> bool {
    COUNTRY_CODES.contains_key(code)
}
