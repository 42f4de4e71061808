//! `YYMMDD` dates.
use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::charset::{CharClass, Numeric};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid MRZ date")]
pub struct InvalidDate;

/// Century resolution for two digit years.
///
/// Years up to and including the pivot resolve to `20YY`, the others to
/// `19YY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct CenturyPivot(u8);

impl From<u8> for CenturyPivot {
    fn from(pivot: u8) -> Self {
        Self::new(pivot)
    }
}

impl From<CenturyPivot> for u8 {
    fn from(pivot: CenturyPivot) -> Self {
        pivot.0
    }
}

impl CenturyPivot {
    pub fn new(pivot: u8) -> Self {
        Self(pivot.min(99))
    }

    /// Pivot on the current year: `00`..=`YY` are in this century.
    pub fn current_year() -> Self {
        Self::years_ahead(0)
    }

    /// Pivot `years` past the current year, capped at `99`.
    pub fn years_ahead(years: u8) -> Self {
        let yy = Utc::now().year().rem_euclid(100) as u16 + years as u16;
        Self(yy.min(99) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn resolve(&self, yy: u8) -> i32 {
        if yy <= self.0 {
            2000 + yy as i32
        } else {
            1900 + yy as i32
        }
    }
}

fn decode_digit(d: u8) -> Result<u8, InvalidDate> {
    if Numeric::contains(d) {
        Ok(d - b'0')
    } else {
        Err(InvalidDate)
    }
}

fn encode_digit(value: u8) -> u8 {
    value + b'0'
}

fn decode_digits2(digits: &[u8]) -> Result<u8, InvalidDate> {
    Ok(decode_digit(digits[0])? * 10 + decode_digit(digits[1])?)
}

fn encode_digits2(value: u8) -> [u8; 2] {
    [encode_digit((value / 10) % 10), encode_digit(value % 10)]
}

pub fn decode(raw: &str, pivot: CenturyPivot) -> Result<NaiveDate, InvalidDate> {
    let bytes = raw.as_bytes();
    if bytes.len() != 6 {
        return Err(InvalidDate);
    }

    let yy = decode_digits2(&bytes[0..2])?;
    let month = decode_digits2(&bytes[2..4])?;
    let day = decode_digits2(&bytes[4..6])?;

    NaiveDate::from_ymd_opt(pivot.resolve(yy), month as u32, day as u32).ok_or(InvalidDate)
}

pub fn encode(date: NaiveDate) -> [u8; 6] {
    let [y0, y1] = encode_digits2(date.year().rem_euclid(100) as u8);
    let [m0, m1] = encode_digits2(date.month() as u8);
    let [d0, d1] = encode_digits2(date.day() as u8);
    [y0, y1, m0, m1, d0, d1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pivot_resolution() {
        let pivot = CenturyPivot::new(30);
        assert_eq!(pivot.resolve(0), 2000);
        assert_eq!(pivot.resolve(30), 2030);
        assert_eq!(pivot.resolve(31), 1931);
        assert_eq!(CenturyPivot::new(120).value(), 99);
    }

    #[test]
    fn deserialized_pivot_is_capped() {
        let pivot: CenturyPivot = serde_json::from_str("150").unwrap();
        assert_eq!(pivot.value(), 99);
        assert_eq!(serde_json::to_string(&pivot).unwrap(), "99");
    }

    #[test]
    fn decode_worked_example() {
        let date = decode("520727", CenturyPivot::new(30)).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1952, 7, 27).unwrap());

        let date = decode("520727", CenturyPivot::new(60)).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2052, 7, 27).unwrap());
    }

    #[test]
    fn decode_rejects_out_of_range() {
        let pivot = CenturyPivot::new(30);
        assert_eq!(decode("521301", pivot), Err(InvalidDate));
        assert_eq!(decode("520001", pivot), Err(InvalidDate));
        assert_eq!(decode("520230", pivot), Err(InvalidDate));
        assert_eq!(decode("52<727", pivot), Err(InvalidDate));
        assert_eq!(decode("5207", pivot), Err(InvalidDate));
    }

    #[test]
    fn leap_day_depends_on_century() {
        assert_eq!(decode("000229", CenturyPivot::new(0)).map(|d| d.year()), Ok(2000));
        assert_eq!(decode("960229", CenturyPivot::new(0)).map(|d| d.year()), Ok(1996));
        assert_eq!(decode("970229", CenturyPivot::new(0)), Err(InvalidDate));
    }

    #[test]
    fn encode_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2003, 1, 5).unwrap();
        assert_eq!(&encode(date), b"030105");
    }
}
