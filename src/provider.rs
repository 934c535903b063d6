//! Resource provider trait and implementations.
//!
//! A resource provider maps logical names to byte streams, the way a
//! classloader resolves embedded resources. Providers are read-only and are
//! injected into the accessor, so routing logic stays host-agnostic.

use std::fs::File;
use std::io::{Cursor, Read};
use std::path::{Component, Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::error::ProviderError;

/// A readable stream returned by a provider.
///
/// Streams never outlive the call that opened them: the accessor drains or
/// drops the box inside the operation, so release is guaranteed on every
/// exit path.
pub type ResourceStream = Box<dyn Read + Send>;

// =============================================================================
// ResourceProvider Trait
// =============================================================================

/// Trait for resolving logical resource names to byte streams.
///
/// This is the extension point for backing the resource branch of a
/// [`DualSourceFileAccessor`] with a classloader, an archive, or anything
/// else that can hand out read-only streams by name.
///
/// # Contract
///
/// - `Ok(Some(stream))`: the name resolved; the caller owns the stream.
/// - `Ok(None)`: the name does not resolve. This is the ordinary "file
///   doesn't exist" signal, never an error.
/// - `Err(_)`: the provider itself is broken (lookup context absent,
///   backing store unreachable). Callers treat this as fatal
///   misconfiguration, not as absence.
///
/// # Example
///
/// ```ignore
/// use file_wedge::{ResourceProvider, ResourceStream, ProviderError};
///
/// struct StaticLib;
///
/// impl ResourceProvider for StaticLib {
///     fn open(&self, name: &str) -> Result<Option<ResourceStream>, ProviderError> {
///         match name {
///             "lib/lib.d.ts" => Ok(Some(Box::new(&b"declare x;"[..]))),
///             _ => Ok(None),
///         }
///     }
/// }
/// ```
pub trait ResourceProvider: Send + Sync {
    /// Open the resource with the given logical name.
    ///
    /// The name has already had the resource marker stripped; it is
    /// provider-relative (e.g. `lib/lib.d.ts`).
    fn open(&self, name: &str) -> Result<Option<ResourceStream>, ProviderError>;
}

// =============================================================================
// NoResources - Default Implementation
// =============================================================================

/// Provider with no resources (every lookup is NotFound).
pub struct NoResources;

impl ResourceProvider for NoResources {
    fn open(&self, _name: &str) -> Result<Option<ResourceStream>, ProviderError> {
        Ok(None)
    }
}

// =============================================================================
// MapResourceProvider - Simple Map-based Implementation
// =============================================================================

/// A simple map-based resource provider.
///
/// Provides a convenient way to serve embedded content without implementing
/// the [`ResourceProvider`] trait manually.
///
/// # Example
///
/// ```
/// use file_wedge::MapResourceProvider;
///
/// let mut provider = MapResourceProvider::new();
/// provider.insert("lib/lib.d.ts", "declare x;");
/// assert!(provider.contains("lib/lib.d.ts"));
/// ```
#[derive(Default, Clone)]
pub struct MapResourceProvider {
    resources: FxHashMap<String, Vec<u8>>,
}

impl MapResourceProvider {
    /// Create a new empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a resource with string content.
    pub fn insert(&mut self, name: impl Into<String>, content: impl AsRef<str>) {
        self.resources
            .insert(name.into(), content.as_ref().as_bytes().to_vec());
    }

    /// Insert a resource with binary content.
    pub fn insert_bytes(&mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.resources.insert(name.into(), content.into());
    }

    /// Check if a logical name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }

    /// Remove a resource.
    pub fn remove(&mut self, name: &str) -> Option<Vec<u8>> {
        self.resources.remove(name)
    }

    /// Get the number of resources.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Iterate over all logical names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }
}

impl ResourceProvider for MapResourceProvider {
    fn open(&self, name: &str) -> Result<Option<ResourceStream>, ProviderError> {
        Ok(self
            .resources
            .get(name)
            .map(|bytes| Box::new(Cursor::new(bytes.clone())) as ResourceStream))
    }
}

// =============================================================================
// DirResourceProvider - Exploded Bundle on Disk
// =============================================================================

/// A provider serving logical names from beneath a root directory.
///
/// Useful when the resource bundle is unpacked on disk rather than embedded.
/// Logical names resolve strictly inside the root: names with parent or
/// rooted components are NotFound, the same blindness a classloader has to
/// paths outside its resource space.
pub struct DirResourceProvider {
    root: PathBuf,
}

impl DirResourceProvider {
    /// Create a provider rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The bundle root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a logical name to a path inside the root, or `None` if the
    /// name tries to escape it.
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return None;
        }
        Some(self.root.join(relative))
    }
}

impl ResourceProvider for DirResourceProvider {
    fn open(&self, name: &str) -> Result<Option<ResourceStream>, ProviderError> {
        let Some(path) = self.resolve(name) else {
            return Ok(None);
        };
        match File::open(&path) {
            Ok(file) => Ok(Some(Box::new(file))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ProviderError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn drain(stream: ResourceStream) -> Vec<u8> {
        let mut buf = Vec::new();
        let mut stream = stream;
        stream.read_to_end(&mut buf).unwrap();
        buf
    }

    #[test]
    fn test_no_resources() {
        assert!(NoResources.open("anything").unwrap().is_none());
    }

    #[test]
    fn test_map_provider_round_trip() {
        let mut provider = MapResourceProvider::new();
        provider.insert("lib/lib.d.ts", "declare x;");
        provider.insert_bytes("blob.bin", vec![0u8, 1, 2]);

        assert_eq!(provider.len(), 2);
        assert!(provider.contains("lib/lib.d.ts"));
        assert!(!provider.contains("missing.ts"));

        let mut names: Vec<_> = provider.names().collect();
        names.sort_unstable();
        assert_eq!(names, ["blob.bin", "lib/lib.d.ts"]);

        let stream = provider.open("lib/lib.d.ts").unwrap().unwrap();
        assert_eq!(drain(stream), b"declare x;");
        assert!(provider.open("missing.ts").unwrap().is_none());
    }

    #[test]
    fn test_map_provider_remove() {
        let mut provider = MapResourceProvider::new();
        provider.insert("a.txt", "a");
        assert_eq!(provider.remove("a.txt"), Some(b"a".to_vec()));
        assert!(provider.is_empty());
    }

    #[test]
    fn test_dir_provider_reads_from_root() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("lib")).unwrap();
        fs::write(dir.path().join("lib/lib.d.ts"), "declare x;").unwrap();

        let provider = DirResourceProvider::new(dir.path());
        let stream = provider.open("lib/lib.d.ts").unwrap().unwrap();
        assert_eq!(drain(stream), b"declare x;");
        assert!(provider.open("lib/missing.ts").unwrap().is_none());
    }

    #[test]
    fn test_dir_provider_rejects_escapes() {
        let dir = TempDir::new().unwrap();
        let provider = DirResourceProvider::new(dir.path());

        assert!(provider.open("../outside.txt").unwrap().is_none());
        assert!(provider.open("/etc/hosts").unwrap().is_none());
    }
}
