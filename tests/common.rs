#![allow(dead_code)]
use icao_mrz::{CenturyPivot, DecodeOptions};

/// ICAO 9303 part 4 specimen.
pub const PASSPORT: &str = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<\n\
                            L898902C36UTO7408122F1204159ZE184226B<<<<<10\n";

/// ICAO 9303 part 5 specimen.
pub const TD1: &str = "I<UTOD231458907<<<<<<<<<<<<<<<\n\
                       7408122F1204159UTO<<<<<<<<<<<6\n\
                       ERIKSSON<<ANNA<MARIA<<<<<<<<<<\n";

/// ICAO 9303 part 6 specimen.
pub const TD2: &str = "I<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<\n\
                       D231458907UTO7408122F1204159<<<<<<<6\n";

/// ICAO 9303 part 7 specimens.
pub const MRV_A: &str = "V<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<\n\
                         L8988901C4XXX4009078F96121096ZE184226B<<<<<<\n";

pub const MRV_B: &str = "V<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<\n\
                         L8988901C4XXX4009078F9612109<<<<<<<<\n";

pub const FRENCH_ID: &str = "IDFRAMARTIN<<<<<<<<<<<<<<<<<<<<<<<<<\n\
                             1234567890122PIERRICK<<<<<<9201017M<\n";

pub const SLOVAK_ID: &str = "I<SVKNOVAK<<JAN<<<<<<<<<<<<<<<<<<<\n\
                             AB12345671SVK8503150M3001019<<<<<<\n";

/// Options that do not depend on today's date.
pub fn options() -> DecodeOptions {
    DecodeOptions::new()
        .with_birth_pivot(CenturyPivot::new(26))
        .with_expiry_pivot(CenturyPivot::new(76))
}

/// Replaces the character at `column` of `line`.
pub fn patch(text: &str, line: usize, column: usize, c: char) -> String {
    text.lines()
        .enumerate()
        .map(|(i, l)| {
            let mut l = l.to_owned();
            if i == line {
                l.replace_range(column..column + 1, c.encode_utf8(&mut [0; 4]));
            }
            l + "\n"
        })
        .collect()
}
