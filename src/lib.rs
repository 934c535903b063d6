//! # file-wedge
//!
//! Dual-source file access for embedded compiler hosts.
//!
//! This crate serves the two file operations a compiler host expects
//! (`exists`, `read_text`) from either of two backing stores, chosen per
//! call by a path-prefix convention:
//!
//! - Paths beginning with `___classloader_resource___/` are logical
//!   resource names, resolved by an injected [`ResourceProvider`]
//!   (classloader-style lookup, in-memory map, exploded bundle on disk).
//! - Every other path goes to the local filesystem unchanged.
//!
//! Resource reads are line-normalized — every line comes back
//! CRLF-terminated, including the last — while local reads are the native
//! filesystem's bytes, decoded and otherwise untouched. A resource the
//! provider cannot resolve is reported the way a real filesystem reports a
//! missing file (`false` / `None`), so a compiler's module resolution
//! degrades to "file absent" instead of aborting.
//!
//! ## Quick Start
//!
//! ```
//! use file_wedge::{DualSourceFileAccessor, MapResourceProvider};
//!
//! let mut provider = MapResourceProvider::new();
//! provider.insert("lib/lib.d.ts", "declare x;");
//! let accessor = DualSourceFileAccessor::new(provider);
//!
//! assert!(accessor.exists("___classloader_resource___/lib/lib.d.ts").unwrap());
//! assert!(!accessor.exists("___classloader_resource___/missing.ts").unwrap());
//!
//! let buf = accessor
//!     .read_text("___classloader_resource___/lib/lib.d.ts", None)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(buf.as_str(), "declare x;\r\n");
//! ```
//!
//! ## Global installation
//!
//! Hosts that can only expose free functions can [`install`] one accessor
//! process-wide, once, at load time:
//!
//! ```ignore
//! use file_wedge::{DualSourceFileAccessor, DirResourceProvider, install};
//!
//! install(DualSourceFileAccessor::new(DirResourceProvider::new("bundle/")));
//! assert!(file_wedge::exists("___classloader_resource___/lib/lib.d.ts")?);
//! ```
//!
//! ## Modules
//!
//! - [`access`]: routing, local and resource backends, global install
//! - [`provider`]: the [`ResourceProvider`] trait and stock providers
//! - [`buffer`]: the [`TextBuffer`] read result
//! - [`encoding`]: encoding labels and decoding
//! - [`config`]: process-wide default encoding
//! - [`platform`]: OS identification shims

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod access;
pub mod buffer;
pub mod config;
pub mod encoding;
pub mod error;
pub mod platform;
pub mod provider;

// =============================================================================
// Prelude - import commonly used items with a single `use`
// =============================================================================

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
///
/// ```ignore
/// use file_wedge::prelude::*;
/// ```
pub mod prelude {
    // Re-export common items from the crate root
    // (avoids duplication - these are already exported at crate level)

    // Accessor
    pub use crate::{DualSourceFileAccessor, LocalFs, ResourceAccessor, RESOURCE_MARKER};

    // Providers
    pub use crate::{
        DirResourceProvider, MapResourceProvider, NoResources, ResourceProvider, ResourceStream,
    };

    // Results and errors
    pub use crate::{AccessError, DecodeError, Encoding, ProviderError, TextBuffer};

    // Global installation
    pub use crate::{exists, install, read_text};
}

// =============================================================================
// Accessor
// =============================================================================

pub use access::{
    DualSourceFileAccessor, LocalFs, ResourceAccessor, RESOURCE_MARKER, exists, global, install,
    read_text, resource_name,
};

// =============================================================================
// Providers
// =============================================================================

pub use provider::{
    DirResourceProvider, MapResourceProvider, NoResources, ResourceProvider, ResourceStream,
};

// =============================================================================
// Infrastructure
// =============================================================================

pub use buffer::TextBuffer;
pub use config::{Config, ConfigBuilder};
pub use encoding::Encoding;
pub use error::{AccessError, DecodeError, ProviderError};
