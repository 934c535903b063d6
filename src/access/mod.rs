//! Dual-source file access.
//!
//! This module routes the two compiler-facing operations between backing
//! stores:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    File Access Flow                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                             │
//! │  path ──► exists(path) / read_text(path, enc)               │
//! │                    │                                        │
//! │                    ├─► "___classloader_resource___/…"       │
//! │                    │   └─► strip marker, ResourceAccessor   │
//! │                    │       └─► ResourceProvider::open       │
//! │                    │           (probe or CRLF-normalized    │
//! │                    │            text read)                  │
//! │                    │                                        │
//! │                    └─► anything else                        │
//! │                        └─► LocalFs (native behavior,        │
//! │                            unchanged)                       │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Routing
//!
//! Routing is purely textual: a path is a resource path exactly when it
//! begins with [`RESOURCE_MARKER`]. Callers cannot otherwise tell which
//! store served them.
//!
//! # Global installation
//!
//! [`install`] places one router process-wide, once, with no teardown —
//! the same lifecycle the original load-time patch had. Prefer holding a
//! [`DualSourceFileAccessor`] by reference; the global exists for hosts
//! that can only expose free functions.

mod local;
mod marker;
mod resource;
mod router;

pub use local::LocalFs;
pub use marker::{RESOURCE_MARKER, resource_name};
pub use resource::ResourceAccessor;
pub use router::{DualSourceFileAccessor, exists, global, install, read_text};
