use std::io;

use thiserror::Error;

/// Errors that can occur when sampling process time.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The operating system rejected the process time query.
    ///
    /// This does not happen in practice when querying the calling process
    /// itself, but the accounting facility reports failure through its return
    /// value and we surface it instead of swallowing it.
    #[error("the process time query failed: {source}")]
    SampleFailed {
        /// The underlying operating system error.
        #[source]
        source: io::Error,
    },
}

/// A specialized `Result` type for process time sampling operations, returning
/// the crate's [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
