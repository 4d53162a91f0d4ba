use thiserror::Error;

/// Errors that end a run.
///
/// Every variant is fatal. Members whose output file cannot be created are not
/// represented here: the walker warns about them and moves on.
#[derive(Error, Debug)]
pub enum TarError {
    #[error("This does not look like a tar archive (header at block {block})")]
    BadMagic { block: u64 },

    #[error("Unsupported header type {typeflag:?} at block {block}")]
    UnsupportedEntryType { typeflag: char, block: u64 },

    #[error("{name}: Unexpected EOF in archive")]
    Truncated { name: String },

    #[error("{count} requested member(s) not found in archive")]
    NotFound { count: usize },

    #[error("Need at least one option")]
    MissingOperation,

    #[error("Reading from the default tape device is not implemented")]
    NoArchiveSource,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TarError {
    /// Closing line for errors the walker has already warned about.
    ///
    /// When this returns `Some`, the driver prints it in place of the error
    /// message so the diagnostic is not repeated.
    pub fn epilogue(&self) -> Option<&'static str> {
        match self {
            TarError::BadMagic { .. } | TarError::NotFound { .. } => {
                Some("Exiting with failure status due to previous errors")
            }
            TarError::Truncated { .. } => Some("Error is not recoverable: exiting now"),
            _ => None,
        }
    }
}
