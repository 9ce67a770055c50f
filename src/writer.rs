//! Streaming XML writer with indentation
//!
//! Output is emitted as calls arrive. The writer never holds more than the
//! names of the currently open elements, so memory stays constant no matter
//! how large the document grows.

use crate::error::{Result, XmlError};
use crate::escape::write_escaped;
use crate::options::WriterOptions;
use std::io::Write;

/// Two spaces per nesting level
const INDENT: &[u8] = b"  ";

/// Where the writer stands relative to the markup emitted so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriterState {
    /// After a close, or before anything was written
    Neutral,
    /// `<name` (and maybe attributes) written, `>` or `/>` still pending
    InStartTag,
    /// Character data of the innermost open element was just written
    InText,
}

/// Indentation-aware XML writer that streams straight into a [`Write`] sink
///
/// Elements that receive neither text nor children collapse to the
/// self-closing `<name/>` form. Everything else is written with full open and
/// close tags, one construct per line, indented by two spaces per level.
/// Text is written inline right after its start tag, and an element opened
/// directly after text gets no indentation.
///
/// # Examples
///
/// ```
/// use xmlstream::{LineSeparator, StreamingXmlWriter, WriterOptions};
///
/// # fn main() -> xmlstream::Result<()> {
/// let mut output = Vec::new();
/// let options = WriterOptions::new().with_line_separator(LineSeparator::Lf);
/// let mut writer = StreamingXmlWriter::new(&mut output, options);
///
/// writer.open("a")?;
/// writer.attribute("x", "1")?;
/// writer.open("b")?;
/// writer.text("hi")?;
/// writer.close()?;
/// writer.close()?;
/// writer.finalize()?;
///
/// assert_eq!(String::from_utf8(output).unwrap(), "<a x=\"1\">\n  <b>hi</b>\n</a>\n");
/// # Ok(())
/// # }
/// ```
pub struct StreamingXmlWriter<W: Write> {
    sink: W,
    tag_stack: Vec<String>,
    state: WriterState,
    options: WriterOptions,
    top_level_written: bool,
}

impl<W: Write> StreamingXmlWriter<W> {
    pub fn new(sink: W, options: WriterOptions) -> Self {
        StreamingXmlWriter {
            sink,
            tag_stack: Vec::with_capacity(16),
            state: WriterState::Neutral,
            options,
            top_level_written: false,
        }
    }

    /// Open a new element
    ///
    /// A pending start tag of the parent is finished with `>` first. The name
    /// is written as given; checking XML name syntax is up to the caller.
    pub fn open(&mut self, name: &str) -> Result<()> {
        match self.state {
            WriterState::InStartTag => {
                self.write_top_level_attributes()?;
                self.write_raw(b">")?;
                self.newline()?;
                self.indent()?;
            }
            // Text flows straight into the next markup
            WriterState::InText => {}
            WriterState::Neutral => self.indent()?,
        }

        self.write_raw(b"<")?;
        self.write_raw(name.as_bytes())?;
        self.tag_stack.push(name.to_owned());
        self.state = WriterState::InStartTag;

        tracing::trace!(element = name, depth = self.depth(), "open element");
        Ok(())
    }

    /// Add an attribute to the element that was just opened
    ///
    /// Fails with [`XmlError::InvalidState`] unless the start tag is still
    /// open, i.e. no text, child or close has followed the last `open`.
    pub fn attribute(&mut self, name: &str, value: &str) -> Result<()> {
        if self.state != WriterState::InStartTag {
            return Err(XmlError::InvalidState("attribute outside of start-tag"));
        }
        emit_attribute(
            &mut self.sink,
            name,
            value,
            self.options.line_separator.as_str(),
        )
    }

    /// Write escaped character data into the current element
    ///
    /// An empty string is a no-op, so `text("")` leaves an element just as
    /// self-closable as never calling `text` at all.
    pub fn text(&mut self, s: &str) -> Result<()> {
        if s.is_empty() {
            return Ok(());
        }

        if self.state == WriterState::InStartTag {
            self.write_top_level_attributes()?;
            self.write_raw(b">")?;
        }

        write_escaped(&mut self.sink, s, self.options.line_separator.as_str())?;
        self.state = WriterState::InText;
        Ok(())
    }

    /// Close the innermost open element
    ///
    /// # Errors
    ///
    /// Returns [`XmlError::Io`] if the sink fails. The element is already
    /// popped at that point and the output is incomplete, so the writer must
    /// not be used again after an `Io` error from any operation.
    ///
    /// # Panics
    ///
    /// Panics if no element is open.
    pub fn close(&mut self) -> Result<()> {
        if self.state == WriterState::InStartTag {
            self.write_top_level_attributes()?;
        }
        let Some(name) = self.tag_stack.pop() else {
            panic!("close() called with no open element");
        };

        match self.state {
            WriterState::InStartTag => self.write_raw(b"/>")?,
            state => {
                if state == WriterState::Neutral {
                    self.indent()?;
                }
                self.write_raw(b"</")?;
                self.write_raw(name.as_bytes())?;
                self.write_raw(b">")?;
            }
        }

        self.newline()?;
        self.state = WriterState::Neutral;

        tracing::trace!(depth = self.depth(), "close element");
        Ok(())
    }

    /// Flush and close the output sink
    ///
    /// All elements are expected to be closed already. Unclosed elements are
    /// not completed; the output is left as is.
    pub fn finalize(mut self) -> Result<()> {
        if !self.tag_stack.is_empty() {
            tracing::warn!(
                open_elements = ?self.tag_stack,
                "Finalizing XML writer with unclosed elements"
            );
        }

        self.sink.flush()?;
        drop(self.sink);

        tracing::debug!("XML writer finalized");
        Ok(())
    }

    #[inline]
    fn depth(&self) -> usize {
        self.tag_stack.len()
    }

    /// Top-level attributes go on the root element only, once per document
    fn write_top_level_attributes(&mut self) -> Result<()> {
        if self.depth() != 1 || self.top_level_written {
            return Ok(());
        }
        self.top_level_written = true;

        let line_separator = self.options.line_separator.as_str();
        for (name, value) in &self.options.top_level_attributes {
            emit_attribute(&mut self.sink, name, value, line_separator)?;
        }
        Ok(())
    }

    #[inline]
    fn write_raw(&mut self, data: &[u8]) -> Result<()> {
        self.sink.write_all(data)?;
        Ok(())
    }

    fn indent(&mut self) -> Result<()> {
        for _ in 0..self.depth() {
            self.sink.write_all(INDENT)?;
        }
        Ok(())
    }

    #[inline]
    fn newline(&mut self) -> Result<()> {
        self.sink
            .write_all(self.options.line_separator.as_str().as_bytes())?;
        Ok(())
    }
}

fn emit_attribute<W: Write>(
    sink: &mut W,
    name: &str,
    value: &str,
    line_separator: &str,
) -> Result<()> {
    sink.write_all(b" ")?;
    sink.write_all(name.as_bytes())?;
    sink.write_all(b"=\"")?;
    write_escaped(sink, value, line_separator)?;
    sink.write_all(b"\"")?;
    Ok(())
}
