//! # xmlstream
//!
//! A streaming, indentation-aware XML writer.
//!
//! ## Features
//!
//! - **True Streaming**: Markup is written to the sink as calls arrive, never buffered as a tree
//! - **Constant Memory**: Only the names of currently open elements are kept
//! - **Readable Output**: Two-space indentation, one construct per line, inline text
//! - **Self-Closing Tags**: Elements without text or children collapse to `<name/>`
//! - **Configurable Line Endings**: LF, CRLF, CR or any custom separator
//! - **Root Attributes**: Fixed attributes injected once into the document element
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use xmlstream::{create_xml_file, LineSeparator, WriterOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = WriterOptions::new()
//!     .with_line_separator(LineSeparator::Lf)
//!     .with_top_level_attribute("xmlns", "http://relaxng.org/ns/structure/1.0");
//!
//! let mut writer = create_xml_file("grammar.rng", options)?;
//! writer.open("grammar")?;
//! writer.open("start")?;
//! writer.open("element")?;
//! writer.attribute("name", "addressBook")?;
//! writer.open("empty")?;
//! writer.close()?;
//! writer.close()?;
//! writer.close()?;
//! writer.close()?;
//! writer.finalize()?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod escape;
pub mod options;
pub mod writer;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub use error::{Result, XmlError};
pub use escape::escape;
pub use options::{LineSeparator, WriterOptions};
pub use writer::StreamingXmlWriter;

/// Create a streaming XML writer backed by a buffered file
///
/// The file is created (or truncated) immediately. It is flushed and closed by
/// [`StreamingXmlWriter::finalize`].
pub fn create_xml_file<P: AsRef<Path>>(
    path: P,
    options: WriterOptions,
) -> Result<StreamingXmlWriter<BufWriter<File>>> {
    let file = File::create(path)?;
    let sink = BufWriter::with_capacity(64 * 1024, file); // 64KB buffer
    Ok(StreamingXmlWriter::new(sink, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports_build_a_document() {
        let mut output = Vec::new();
        let options = WriterOptions::default()
            .with_line_separator(LineSeparator::Lf)
            .with_top_level_attribute("v", "1");
        let mut writer = StreamingXmlWriter::new(&mut output, options);
        writer.open("root").unwrap();
        writer.text(&escape("a&b", "\n")).unwrap();
        writer.close().unwrap();
        writer.finalize().unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "<root v=\"1\">a&amp;amp;b</root>\n"
        );
    }

    #[test]
    fn test_create_xml_file_missing_directory() {
        let dir = std::env::temp_dir().join("xmlstream-missing-dir-for-test");
        let result = create_xml_file(dir.join("out.xml"), WriterOptions::default());
        assert!(matches!(result, Err(XmlError::Io(_))));
    }
}
