//! OS identification shims.
//!
//! Reproduces the one-line host-identification surface the wrapped
//! compiler expects: a platform name in its legacy vocabulary and the host
//! line separator.

/// The host line separator: `"\r\n"` on Windows, `"\n"` elsewhere.
pub fn eol() -> &'static str {
    if cfg!(windows) { "\r\n" } else { "\n" }
}

/// The platform name in the wrapped compiler's vocabulary.
///
/// macOS reports `"darwin"`; Windows reports `"win64"` or `"win32"` by
/// architecture; every other OS name passes through unchanged.
pub fn platform() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        "windows" => {
            if cfg!(target_pointer_width = "64") {
                "win64"
            } else {
                "win32"
            }
        }
        other => other,
    }
}
