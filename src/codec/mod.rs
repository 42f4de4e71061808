//! Primitive field codecs.
//!
//! Decoders take the raw, already range-checked ASCII slice of a field.
//! Encoders produce exactly `width` bytes of zone text.
pub mod date;
pub mod name;
pub mod sex;
pub mod string;

pub use date::{CenturyPivot, InvalidDate};
pub use sex::{InvalidSex, Sex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("value of {length} characters does not fit a {width} character field")]
pub struct FieldTooLong {
    pub width: usize,
    pub length: usize,
}

/// Pads `value` with filler up to `width`, refusing to truncate.
pub(crate) fn pad(mut value: Vec<u8>, width: usize) -> Result<Vec<u8>, FieldTooLong> {
    if value.len() > width {
        return Err(FieldTooLong {
            width,
            length: value.len(),
        });
    }

    value.resize(width, crate::charset::FILLER);
    Ok(value)
}
