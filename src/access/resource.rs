//! Resource provider backend.
//!
//! Streams are scoped to the call that opened them: probes drop the stream
//! immediately, reads drain it into a local buffer, and either way the box
//! is released on every exit path, including decode failures.

use std::io::Read;

use crate::buffer::TextBuffer;
use crate::encoding::Encoding;
use crate::error::AccessError;
use crate::provider::ResourceProvider;

/// The resource branch of the accessor.
///
/// Wraps an injected [`ResourceProvider`] with the two operations the
/// router needs: existence probes and normalized text reads. Provider
/// failures are logged and propagated as typed errors; an unresolved name
/// is never an error.
pub struct ResourceAccessor {
    provider: Box<dyn ResourceProvider>,
}

impl ResourceAccessor {
    /// Wrap a provider.
    pub fn new<P: ResourceProvider + 'static>(provider: P) -> Self {
        Self { provider: Box::new(provider) }
    }

    /// Probe for a logical name by opening it and dropping the stream.
    ///
    /// No handle survives the probe.
    pub fn probe(&self, name: &str) -> Result<bool, AccessError> {
        match self.provider.open(name) {
            Ok(stream) => {
                let found = stream.is_some();
                log::debug!("resource probe: {name} -> {found}");
                Ok(found)
            }
            Err(e) => {
                log::warn!("resource provider failed probing {name}: {e}");
                Err(e.into())
            }
        }
    }

    /// Read a logical name as line-normalized text.
    ///
    /// Returns `Ok(None)` when the name does not resolve. On success the
    /// stream is decoded with `encoding` and reassembled with a CRLF
    /// terminator after every line, including the last, whatever the
    /// source's line-ending convention.
    pub fn read(&self, name: &str, encoding: Encoding) -> Result<Option<TextBuffer>, AccessError> {
        let mut stream = match self.provider.open(name) {
            Ok(Some(stream)) => stream,
            Ok(None) => return Ok(None),
            Err(e) => {
                log::warn!("resource provider failed opening {name}: {e}");
                return Err(e.into());
            }
        };

        // Stream lives only within this scope; dropped on every exit path.
        let mut bytes = Vec::new();
        stream
            .read_to_end(&mut bytes)
            .map_err(|e| AccessError::io(name, e))?;
        drop(stream);

        let text = encoding
            .decode(&bytes)
            .map_err(|e| AccessError::decode(name, e))?;
        Ok(Some(TextBuffer::from_lines(&text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::provider::{MapResourceProvider, NoResources, ResourceStream};

    /// Provider whose lookup context is broken.
    struct BrokenProvider;

    impl ResourceProvider for BrokenProvider {
        fn open(&self, _name: &str) -> Result<Option<ResourceStream>, ProviderError> {
            Err(ProviderError::misconfigured("classloader context absent"))
        }
    }

    fn lib_provider() -> MapResourceProvider {
        let mut provider = MapResourceProvider::new();
        provider.insert("lib/lib.d.ts", "declare x;");
        provider.insert("multi.ts", "a\nb");
        provider
    }

    #[test]
    fn test_probe_found_and_missing() {
        let accessor = ResourceAccessor::new(lib_provider());
        assert!(accessor.probe("lib/lib.d.ts").unwrap());
        assert!(!accessor.probe("missing.ts").unwrap());
    }

    #[test]
    fn test_probe_misconfigured_provider_propagates() {
        let accessor = ResourceAccessor::new(BrokenProvider);
        let err = accessor.probe("lib/lib.d.ts").unwrap_err();
        assert!(matches!(err, AccessError::Provider(_)));
    }

    #[test]
    fn test_read_misconfigured_provider_propagates() {
        let accessor = ResourceAccessor::new(BrokenProvider);
        let err = accessor.read("lib/lib.d.ts", Encoding::Utf8).unwrap_err();
        assert!(matches!(err, AccessError::Provider(_)));
    }

    #[test]
    fn test_read_normalizes_line_endings() {
        let accessor = ResourceAccessor::new(lib_provider());
        let buffer = accessor.read("multi.ts", Encoding::Utf8).unwrap().unwrap();
        assert_eq!(buffer, "a\r\nb\r\n");
    }

    #[test]
    fn test_read_appends_crlf_to_last_line() {
        let accessor = ResourceAccessor::new(lib_provider());
        let buffer = accessor
            .read("lib/lib.d.ts", Encoding::Utf8)
            .unwrap()
            .unwrap();
        assert_eq!(buffer, "declare x;\r\n");
    }

    #[test]
    fn test_read_missing_is_none() {
        let accessor = ResourceAccessor::new(NoResources);
        assert!(accessor.read("missing.ts", Encoding::Utf8).unwrap().is_none());
    }

    #[test]
    fn test_read_decode_failure_is_typed_error() {
        let mut provider = MapResourceProvider::new();
        provider.insert_bytes("bad.ts", vec![0xff, 0xfe, 0x00]);
        let accessor = ResourceAccessor::new(provider);

        let err = accessor.read("bad.ts", Encoding::Utf8).unwrap_err();
        assert!(matches!(err, AccessError::Decode { .. }));
    }

    #[test]
    fn test_read_latin1_decodes_any_bytes() {
        let mut provider = MapResourceProvider::new();
        provider.insert_bytes("legacy.ts", vec![b'x', 0xe9]);
        let accessor = ResourceAccessor::new(provider);

        let buffer = accessor.read("legacy.ts", Encoding::Latin1).unwrap().unwrap();
        assert_eq!(buffer, "xé\r\n");
    }
}
