//! Persists the selection.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::PickError;

/// Writes each line followed by `\n`, truncating whatever `path` held before.
///
/// Only `AsRef<str>` values are accepted, so raw [`crate::EmailAddress`]es can
/// be written but [`crate::MaskedAddress`]es cannot. A failure part way
/// through leaves whatever was already written in place.
pub fn write_addresses<S>(path: impl AsRef<Path>, lines: &[S]) -> Result<(), PickError>
where
    S: AsRef<str>,
{
    let path = path.as_ref();
    let write_error = |source| PickError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(write_error)?);
    for line in lines {
        writeln!(writer, "{}", line.as_ref()).map_err(write_error)?;
    }
    writer.flush().map_err(write_error)
}
