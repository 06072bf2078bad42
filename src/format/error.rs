//! Error types for catalog import/export.

use thiserror::Error;

/// Errors that can occur while reading or writing a color catalog.
#[derive(Error, Debug)]
pub enum FormatError {
    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// First field of a record is not a hyphenated UUID
    #[error("Line {line}: invalid color identifier '{value}'")]
    InvalidIdentifier {
        /// 1-based line number in the input
        line: usize,
        /// The offending field text
        value: String,
    },

    /// Delimiter can occur inside an identifier or breaks lines
    #[error("Delimiter {delimiter:?} cannot separate catalog fields")]
    InvalidDelimiter {
        /// The rejected delimiter
        delimiter: char,
    },

    /// A channel field is not a decimal integer
    #[error("Line {line}: invalid {channel} value '{value}'")]
    InvalidChannel {
        /// 1-based line number in the input
        line: usize,
        /// Channel name (`red`, `green` or `blue`)
        channel: &'static str,
        /// The offending field text
        value: String,
    },
}

impl FormatError {
    /// Create an invalid identifier error.
    pub fn invalid_identifier(line: usize, value: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            line,
            value: value.into(),
        }
    }

    /// Create an invalid channel error.
    pub fn invalid_channel(line: usize, channel: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidChannel {
            line,
            channel,
            value: value.into(),
        }
    }

    /// Line number the error refers to, if it came from parsing.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Io(_) | Self::InvalidDelimiter { .. } => None,
            Self::InvalidIdentifier { line, .. } | Self::InvalidChannel { line, .. } => {
                Some(*line)
            }
        }
    }
}
