//! Failures that end a pick run.
//!
//! Every variant is terminal: the binary reports it and exits non-zero. Nothing
//! is retried, and because the output file is written last, a run that fails
//! before the write leaves no output behind.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors returned by the pick pipeline.
#[derive(Debug, Error)]
pub enum PickError {
    /// No input CSV path was supplied.
    #[error("no csv file given")]
    MissingArgument,

    /// The input CSV does not exist or could not be read.
    #[error("the csv file {} cannot be read: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be created or written.
    #[error("the output file {} cannot be written: {source}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
