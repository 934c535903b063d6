//! The dual-source router and its one-time global installation.

use std::path::Path;
use std::sync::OnceLock;

use crate::buffer::TextBuffer;
use crate::encoding::Encoding;
use crate::error::AccessError;
use crate::provider::ResourceProvider;

use super::local::LocalFs;
use super::marker::resource_name;
use super::resource::ResourceAccessor;

// =============================================================================
// DualSourceFileAccessor
// =============================================================================

/// Routes file access between an embedded resource provider and the local
/// filesystem.
///
/// Paths beginning with [`RESOURCE_MARKER`] have the marker stripped and
/// the remainder looked up in the injected [`ResourceProvider`]; every
/// other path goes to the local filesystem unchanged. Callers cannot tell
/// which backing store served a path except by its prefix.
///
/// Each call is stateless; the accessor holds no cache and no open handle
/// between calls.
///
/// [`RESOURCE_MARKER`]: crate::RESOURCE_MARKER
///
/// # Example
///
/// ```
/// use file_wedge::{DualSourceFileAccessor, MapResourceProvider};
///
/// let mut provider = MapResourceProvider::new();
/// provider.insert("lib/lib.d.ts", "declare x;");
/// let accessor = DualSourceFileAccessor::new(provider);
///
/// assert!(accessor.exists("___classloader_resource___/lib/lib.d.ts").unwrap());
/// let buf = accessor
///     .read_text("___classloader_resource___/lib/lib.d.ts", None)
///     .unwrap()
///     .unwrap();
/// assert_eq!(buf.as_str(), "declare x;\r\n");
/// ```
pub struct DualSourceFileAccessor {
    resource: ResourceAccessor,
    local: LocalFs,
}

impl DualSourceFileAccessor {
    /// Create a router over the given resource provider and the local
    /// filesystem.
    pub fn new<P: ResourceProvider + 'static>(provider: P) -> Self {
        Self {
            resource: ResourceAccessor::new(provider),
            local: LocalFs,
        }
    }

    /// Check whether a path exists in its backing store.
    ///
    /// Resource paths are probed by opening and immediately dropping a
    /// stream; an unresolved name is `Ok(false)`. Other paths delegate to
    /// the local filesystem. A broken provider is a typed error, never a
    /// silent `false`.
    pub fn exists(&self, path: &str) -> Result<bool, AccessError> {
        match resource_name(path) {
            Some(name) => self.resource.probe(name),
            None => Ok(self.local.exists(Path::new(path))),
        }
    }

    /// Read a path as text.
    ///
    /// `encoding` is an optional label (`"utf-8"`, `"latin1"`, ...); when
    /// absent the process default applies, falling back to UTF-8.
    ///
    /// Resource paths yield `Ok(None)` when the name does not resolve and
    /// line-normalized text (CRLF after every line, including the last)
    /// when it does. Other paths delegate to the local filesystem, whose
    /// text comes back unchanged and whose missing files are I/O errors,
    /// exactly as the unpatched accessor behaved.
    pub fn read_text(
        &self,
        path: &str,
        encoding: Option<&str>,
    ) -> Result<Option<TextBuffer>, AccessError> {
        let encoding = Encoding::resolve(encoding).map_err(|e| AccessError::decode(path, e))?;
        match resource_name(path) {
            Some(name) => self.resource.read(name, encoding),
            None => self.local.read_text(Path::new(path), encoding).map(Some),
        }
    }
}

// =============================================================================
// Global Installation
// =============================================================================

/// Process-wide accessor, installed at most once.
static GLOBAL_ACCESSOR: OnceLock<DualSourceFileAccessor> = OnceLock::new();

/// Install the process-wide accessor.
///
/// Mirrors the original install-on-load patch: performed once, never
/// reset. Returns `true` if this call installed the accessor, `false` if
/// one was already present (the call is then ignored).
pub fn install(accessor: DualSourceFileAccessor) -> bool {
    GLOBAL_ACCESSOR.set(accessor).is_ok()
}

/// Get the installed accessor, if any.
pub fn global() -> Option<&'static DualSourceFileAccessor> {
    GLOBAL_ACCESSOR.get()
}

/// Check existence through the installed accessor.
///
/// Errors with [`AccessError::NotInstalled`] before [`install`] has run.
pub fn exists(path: &str) -> Result<bool, AccessError> {
    global().ok_or(AccessError::NotInstalled)?.exists(path)
}

/// Read text through the installed accessor.
///
/// Errors with [`AccessError::NotInstalled`] before [`install`] has run.
pub fn read_text(path: &str, encoding: Option<&str>) -> Result<Option<TextBuffer>, AccessError> {
    global()
        .ok_or(AccessError::NotInstalled)?
        .read_text(path, encoding)
}
