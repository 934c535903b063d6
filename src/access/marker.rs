//! The resource marker prefix and path routing.

/// Path prefix signaling that a path is a logical resource name rather than
/// a real filesystem path.
///
/// The literal is fixed by the host convention; the text after it is passed
/// to the resource provider unchanged.
pub const RESOURCE_MARKER: &str = "___classloader_resource___/";

/// Split a path on the resource marker.
///
/// Returns the logical resource name if the path starts with
/// [`RESOURCE_MARKER`], or `None` for ordinary filesystem paths. The marker
/// only routes when it is the exact prefix; appearing mid-path means
/// nothing.
pub fn resource_name(path: &str) -> Option<&str> {
    path.strip_prefix(RESOURCE_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_prefix_routes() {
        assert_eq!(
            resource_name("___classloader_resource___/lib/lib.d.ts"),
            Some("lib/lib.d.ts")
        );
    }

    #[test]
    fn test_plain_path_does_not_route() {
        assert_eq!(resource_name("/tmp/real.ts"), None);
        assert_eq!(resource_name("lib/lib.d.ts"), None);
    }

    #[test]
    fn test_marker_mid_path_does_not_route() {
        assert_eq!(resource_name("/a/___classloader_resource___/b"), None);
    }

    #[test]
    fn test_bare_marker_yields_empty_name() {
        assert_eq!(resource_name(RESOURCE_MARKER), Some(""));
    }
}
