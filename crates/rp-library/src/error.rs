//! Error types for the library.

/// Alias for `Result<T, LibraryError>`.
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Errors that can occur while loading, saving, or mutating a library.
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    /// Reading or writing the library file failed.
    #[error("library file access failed: {0}")]
    Io(#[from] std::io::Error),

    /// The library file is not valid JSON.
    #[error("library file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The library file declares a schema version this build cannot read.
    #[error("unsupported library schema version {0}")]
    UnsupportedVersion(u64),

    /// A legacy library file does not have the expected shape.
    #[error("invalid library format: {0}")]
    InvalidFormat(String),

    /// Two sequences share a title.
    #[error("duplicate sequence title: \"{0}\"")]
    DuplicateTitle(String),

    /// A sequence failed content validation on load.
    #[error("sequence \"{title}\" failed validation: {message}")]
    InvalidSequence {
        /// Title of the offending sequence.
        title: String,
        /// The first error-level validation message.
        message: String,
    },
}
