//! Console protocol errors.

/// Errors that can occur while running the console loop.
#[derive(Debug, thiserror::Error)]
pub enum ProtoError {
    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
