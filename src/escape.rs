//! Character data escaping shared by attribute values and text content

use std::borrow::Cow;
use std::io::{self, Write};

#[inline]
fn needs_escape(byte: u8) -> bool {
    matches!(byte, b'<' | b'>' | b'&' | b'\r' | b'\n')
}

/// Write `s` to `sink` with XML escaping applied
///
/// Runs of ordinary characters are written as whole slices. Every byte that
/// gets rewritten is ASCII, so the slice boundaries stay on UTF-8 char
/// boundaries.
pub fn write_escaped<W: Write>(sink: &mut W, s: &str, line_separator: &str) -> io::Result<()> {
    let bytes = s.as_bytes();
    let mut start = 0;

    for (i, &byte) in bytes.iter().enumerate() {
        let rep = match byte {
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'&' => "&amp;",
            b'\r' => "&#xD;",
            b'\n' => line_separator,
            _ => continue,
        };
        if start < i {
            sink.write_all(&bytes[start..i])?;
        }
        sink.write_all(rep.as_bytes())?;
        start = i + 1;
    }

    if start < bytes.len() {
        sink.write_all(&bytes[start..])?;
    }
    Ok(())
}

/// Escape `s` into a string, borrowing when nothing needs rewriting
///
/// # Examples
///
/// ```
/// use xmlstream::escape;
///
/// assert_eq!(escape("a < b", "\n"), "a &lt; b");
/// assert_eq!(escape("line1\nline2", "\r\n"), "line1\r\nline2");
/// ```
pub fn escape<'a>(s: &'a str, line_separator: &str) -> Cow<'a, str> {
    if !s.bytes().any(needs_escape) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 16);
    for ch in s.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '\r' => out.push_str("&#xD;"),
            '\n' => out.push_str(line_separator),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}
