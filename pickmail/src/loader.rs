//! Reads the address column out of a CSV export.
//!
//! The first line is always a header and is discarded. Each remaining line
//! contributes exactly one address: the text before the first comma, or the
//! whole line when it has no comma. Quoting is not understood.

use std::{fs, path::Path};

use crate::{EmailAddress, PickError};

const FIELD_SEPARATOR: char = ',';

/// Splits on `\n`, `\r\n` or a bare `\r`. A single trailing line break does
/// not start another line.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let body = content
        .strip_suffix("\r\n")
        .or_else(|| content.strip_suffix('\n'))
        .or_else(|| content.strip_suffix('\r'))
        .unwrap_or(content);
    body.split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

/// Extracts one address per data line of `content`.
///
/// Lines end with `\n`, `\r\n` or `\r`; a trailing line break does not add
/// an empty record. Blank data lines yield empty addresses.
pub fn parse_addresses(content: &str) -> Vec<EmailAddress> {
    split_lines(content)
        .skip(1)
        .map(|line| {
            let field = line
                .split_once(FIELD_SEPARATOR)
                .map_or(line, |(first, _)| first);
            EmailAddress::new(field)
        })
        .collect()
}

/// Reads `path` and extracts its addresses.
///
/// The file is decoded as UTF-8; invalid sequences are replaced rather than
/// rejected.
pub fn load_addresses(path: impl AsRef<Path>) -> Result<Vec<EmailAddress>, PickError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| PickError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_addresses(&String::from_utf8_lossy(&bytes)))
}
