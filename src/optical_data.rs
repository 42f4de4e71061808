use sha2::{Digest, Sha256};

use crate::{error::Malformed, parser::split_lines};

/// SHA-256 of the zone in canonical form: every line followed by `\n`.
///
/// This is the value a verifiable credential barcode signs to bind itself
/// to the printed zone. Line endings of `text` are normalised first.
pub fn optical_data(text: &str) -> Result<[u8; 32], Malformed> {
    let lines = split_lines(text)?;

    let mut canonical_data = Vec::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        canonical_data.extend(line.as_bytes());
        canonical_data.push(b'\n');
    }

    Ok(Sha256::digest(canonical_data).into())
}
