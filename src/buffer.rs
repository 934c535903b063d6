//! Decoded text buffer returned by read operations.

// =============================================================================
// TextBuffer - Decoded Text Result
// =============================================================================

/// The result of a successful text read.
///
/// A `TextBuffer` is a decoded text value with a small legacy-tolerant
/// surface: its [`len`](Self::len) is the character count of its string
/// form, and positions 0 and 1 can be probed with [`get`](Self::get)
/// without panicking even when the buffer is shorter. Convert to a string
/// with [`as_str`](Self::as_str), `Display`, or `into_string`.
///
/// Buffers read from an embedded resource are line-normalized: every line
/// ends with `\r\n`, including the last, regardless of the source's line
/// endings. Buffers read from the local filesystem carry the file's text
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    /// Wrap already-decoded text without altering it.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Reassemble decoded text line-by-line with a CRLF terminator after
    /// every line, including the last.
    ///
    /// Line splitting treats `\r\n`, `\n`, and a lone `\r` as terminators,
    /// the conventions a line-based reader recognizes, so the output is
    /// `\r\n`-joined whatever convention the source used. Empty input
    /// yields an empty buffer, not a lone `\r\n`.
    pub fn from_lines(text: &str) -> Self {
        let mut out = String::with_capacity(text.len() + text.len() / 16);
        for line in split_lines(text) {
            out.push_str(line);
            out.push_str("\r\n");
        }
        Self { text: out }
    }

    /// The character count of the buffer's string form.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Character at `index`, or `None` past the end.
    ///
    /// Legacy callers probe positions 0 and 1; both are valid calls on any
    /// buffer and never panic.
    pub fn get(&self, index: usize) -> Option<char> {
        self.text.chars().nth(index)
    }

    /// The buffer's content as a string slice.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the buffer, returning its content.
    pub fn into_string(self) -> String {
        self.text
    }
}

/// Split on `\r\n`, `\n`, or a lone `\r`.
///
/// `str::lines` ignores a bare `\r`, which classic-Mac sources still use;
/// a line-based reader treats all three as terminators. A trailing
/// terminator does not produce an empty final line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\n', '\r']) {
            Some(i) => {
                let line = &rest[..i];
                let crlf = rest.as_bytes()[i] == b'\r' && rest.as_bytes().get(i + 1) == Some(&b'\n');
                rest = &rest[i + if crlf { 2 } else { 1 }..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

impl std::fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<TextBuffer> for String {
    fn from(buffer: TextBuffer) -> Self {
        buffer.text
    }
}

impl PartialEq<str> for TextBuffer {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for TextBuffer {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lines_lf() {
        assert_eq!(TextBuffer::from_lines("a\nb"), "a\r\nb\r\n");
    }

    #[test]
    fn test_from_lines_crlf() {
        assert_eq!(TextBuffer::from_lines("a\r\nb\r\n"), "a\r\nb\r\n");
    }

    #[test]
    fn test_from_lines_cr_only() {
        assert_eq!(TextBuffer::from_lines("a\rb"), "a\r\nb\r\n");
        assert_eq!(TextBuffer::from_lines("a\rb\r"), "a\r\nb\r\n");
    }

    #[test]
    fn test_from_lines_mixed() {
        assert_eq!(TextBuffer::from_lines("a\r\nb\nc"), "a\r\nb\r\nc\r\n");
        assert_eq!(TextBuffer::from_lines("a\rb\nc\r\n"), "a\r\nb\r\nc\r\n");
    }

    #[test]
    fn test_from_lines_no_trailing_newline() {
        assert_eq!(TextBuffer::from_lines("declare x;"), "declare x;\r\n");
    }

    #[test]
    fn test_from_lines_empty() {
        let buffer = TextBuffer::from_lines("");
        assert!(buffer.is_empty());
        assert_eq!(buffer, "");
    }

    #[test]
    fn test_len_is_char_count() {
        let buffer = TextBuffer::new("héllo");
        assert_eq!(buffer.len(), 5);
        assert_eq!(buffer.len(), buffer.to_string().chars().count());
    }

    #[test]
    fn test_get_positions_zero_and_one() {
        let buffer = TextBuffer::new("ab");
        assert_eq!(buffer.get(0), Some('a'));
        assert_eq!(buffer.get(1), Some('b'));

        // Short and empty buffers tolerate the same probes.
        assert_eq!(TextBuffer::new("a").get(1), None);
        assert_eq!(TextBuffer::new("").get(0), None);
        assert_eq!(TextBuffer::new("").get(1), None);
    }

    #[test]
    fn test_display_round_trip() {
        let buffer = TextBuffer::from_lines("a\nb");
        assert_eq!(buffer.to_string(), "a\r\nb\r\n");
        assert_eq!(String::from(buffer), "a\r\nb\r\n");
    }
}
