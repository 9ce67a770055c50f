//! Writer configuration: line endings and root element attributes

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Environment variable consulted by [`LineSeparator::from_env`]
pub const LINE_ENDING_ENV: &str = "XMLSTREAM_LINE_ENDING";

/// Line separator used to terminate emitted lines and to replace `\n` in data
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineSeparator {
    /// Unix line feed (`\n`)
    Lf,
    /// Windows / network protocol line ending (`\r\n`)
    CrLf,
    /// Classic Mac carriage return (`\r`)
    Cr,
    /// Any other verbatim separator
    Custom(String),
}

impl LineSeparator {
    /// Separator native to the host platform
    pub fn platform() -> Self {
        if cfg!(windows) {
            LineSeparator::CrLf
        } else {
            LineSeparator::Lf
        }
    }

    /// Parse a separator name (`lf`, `crlf`, `cr`), ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "lf" => Some(LineSeparator::Lf),
            "crlf" => Some(LineSeparator::CrLf),
            "cr" => Some(LineSeparator::Cr),
            _ => None,
        }
    }

    /// Detect from environment variable `XMLSTREAM_LINE_ENDING`
    ///
    /// Falls back to [`LineSeparator::platform`] when the variable is unset or
    /// holds an unknown name.
    pub fn from_env() -> Self {
        match std::env::var(LINE_ENDING_ENV) {
            Ok(value) => Self::from_name(&value).unwrap_or_else(|| {
                tracing::warn!(
                    "Unknown {} value {:?}, using platform line separator",
                    LINE_ENDING_ENV,
                    value
                );
                Self::platform()
            }),
            Err(_) => Self::platform(),
        }
    }

    /// The verbatim separator text
    pub fn as_str(&self) -> &str {
        match self {
            LineSeparator::Lf => "\n",
            LineSeparator::CrLf => "\r\n",
            LineSeparator::Cr => "\r",
            LineSeparator::Custom(s) => s,
        }
    }
}

impl Default for LineSeparator {
    fn default() -> Self {
        Self::platform()
    }
}

/// Construction-time configuration for [`StreamingXmlWriter`](crate::StreamingXmlWriter)
///
/// # Examples
///
/// ```
/// use xmlstream::{LineSeparator, WriterOptions};
///
/// let options = WriterOptions::default()
///     .with_line_separator(LineSeparator::Lf)
///     .with_top_level_attribute("xmlns", "http://relaxng.org/ns/structure/1.0");
///
/// assert_eq!(options.top_level_attributes.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WriterOptions {
    pub line_separator: LineSeparator,
    /// Attributes added to the root element, in this order, after any explicit ones
    pub top_level_attributes: Vec<(String, String)>,
}

impl WriterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line_separator(mut self, line_separator: LineSeparator) -> Self {
        self.line_separator = line_separator;
        self
    }

    pub fn with_top_level_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.top_level_attributes.push((name.into(), value.into()));
        self
    }
}
