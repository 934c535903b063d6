//! Text encodings and decoding.
//!
//! Encoding selection follows the original host chain: an explicit label
//! wins, then the process-wide configured default, then UTF-8.

use crate::config;
use crate::error::DecodeError;

/// A supported text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// UTF-8. A leading byte-order mark is stripped before decoding.
    #[default]
    Utf8,
    /// Latin-1 (ISO-8859-1). Every byte maps 1:1 to the corresponding
    /// Unicode scalar, so decoding cannot fail.
    Latin1,
}

impl Encoding {
    /// Parse an encoding label.
    ///
    /// Labels are matched case-insensitively: `"utf-8"`/`"utf8"` and
    /// `"latin1"`/`"iso-8859-1"` are recognized.
    pub fn from_label(label: &str) -> Result<Self, DecodeError> {
        match label.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "latin1" | "latin-1" | "iso-8859-1" => Ok(Self::Latin1),
            _ => Err(DecodeError::UnknownEncoding { label: label.to_string() }),
        }
    }

    /// Resolve the encoding for a call: explicit label, else the configured
    /// process default, else UTF-8.
    pub fn resolve(label: Option<&str>) -> Result<Self, DecodeError> {
        match label {
            Some(label) => Self::from_label(label),
            None => Ok(config::get().default_encoding),
        }
    }

    /// Decode bytes into a `String`.
    pub fn decode(self, buf: &[u8]) -> Result<String, DecodeError> {
        match self {
            Self::Utf8 => {
                let buf = buf.strip_prefix(b"\xef\xbb\xbf").unwrap_or(buf);
                std::str::from_utf8(buf)
                    .map(str::to_owned)
                    .map_err(|e| DecodeError::InvalidUtf8 { valid_up_to: e.valid_up_to() })
            }
            Self::Latin1 => Ok(buf.iter().map(|&b| b as char).collect()),
        }
    }

    /// The canonical label for this encoding.
    pub fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Latin1 => "latin1",
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
