//! Error types for dual-source file access.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for file access failures.
///
/// Missing files are not errors: a resource the provider cannot resolve
/// surfaces as `Ok(false)` from `exists` and `Ok(None)` from `read_text`,
/// the same "file absent" signal a real filesystem produces. Errors are
/// reserved for conditions the caller cannot interpret as absence.
///
/// # Example
///
/// ```ignore
/// match accessor.read_text("___classloader_resource___/lib/lib.d.ts", None) {
///     Ok(Some(buf)) => { /* got text */ }
///     Ok(None) => { /* resource absent, degrade gracefully */ }
///     Err(AccessError::Provider(e)) => {
///         eprintln!("resource provider misconfigured: {e}");
///     }
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AccessError {
    /// The resource provider itself failed (not a missing resource).
    #[error("resource provider failure: {0}")]
    Provider(#[from] ProviderError),

    /// I/O error on the local filesystem branch or while draining a
    /// resource stream.
    #[error("i/o error for {}: {source}", path.display())]
    Io {
        /// Path or logical resource name being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Text decoding failed.
    #[error("decode error for {}: {source}", path.display())]
    Decode {
        /// Path or logical resource name being decoded.
        path: PathBuf,
        /// Underlying decode error.
        source: DecodeError,
    },

    /// A global-entry-point call was made before [`install`] ran.
    ///
    /// [`install`]: crate::access::install
    #[error("no dual-source accessor installed")]
    NotInstalled,
}

impl AccessError {
    /// Create an I/O error carrying the accessed path.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Create a decode error carrying the accessed path.
    pub fn decode(path: impl Into<PathBuf>, source: DecodeError) -> Self {
        Self::Decode { path: path.into(), source }
    }
}

/// Error type for resource provider failures.
///
/// Returned by [`ResourceProvider::open`] when the lookup service itself is
/// broken. "Name not found" is not a provider error; providers report it as
/// `Ok(None)`.
///
/// [`ResourceProvider::open`]: crate::provider::ResourceProvider::open
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider's backing lookup context is absent or unusable.
    #[error("provider misconfigured: {message}")]
    Misconfigured {
        /// Description of the misconfiguration.
        message: String,
    },

    /// The provider failed with an I/O error while opening a stream.
    #[error("provider i/o error: {0}")]
    Io(#[from] io::Error),
}

impl ProviderError {
    /// Create a misconfiguration error.
    pub fn misconfigured(message: impl Into<String>) -> Self {
        Self::Misconfigured { message: message.into() }
    }
}

/// Error type for text decoding failures.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The requested encoding label is not supported.
    #[error("unknown encoding label: {label:?}")]
    UnknownEncoding {
        /// The unrecognized label as given by the caller.
        label: String,
    },

    /// The input is not valid in the requested encoding.
    #[error("invalid utf-8 at byte {valid_up_to}")]
    InvalidUtf8 {
        /// Number of valid bytes before the malformed sequence.
        valid_up_to: usize,
    },
}
