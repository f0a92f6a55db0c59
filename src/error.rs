//! Error types for textwriter operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while persisting generated text.
///
/// Writing into the in-memory buffer never fails; only handing the buffer to
/// the file system can.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to save output to {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
