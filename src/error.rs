//! Error types.

use std::error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::parser::Tag;

/// A list of font parsing errors.
#[derive(Debug)]
pub enum ParseError {
    /// An I/O error from the underlying stream.
    Io(io::Error),
    /// The first four bytes match none of the recognized sfnt signatures.
    UnknownMagic([u8; 4]),
    /// The signature is recognized, but the container format (WOFF) is not
    /// supported.
    UnsupportedFormat,
    /// The stream ended before a required field or table could be read.
    UnexpectedEof,
    /// The table directory has no `name` table.
    NoNameTable,
    /// A table record points at data the cursor has already passed.
    MisorderedTable(Tag),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io(e) => write!(f, "read failed: {}", e),
            ParseError::UnknownMagic(magic) => {
                write!(
                    f,
                    "unknown font signature {:02X} {:02X} {:02X} {:02X}",
                    magic[0], magic[1], magic[2], magic[3]
                )
            }
            ParseError::UnsupportedFormat => write!(f, "WOFF fonts are not supported"),
            ParseError::UnexpectedEof => write!(f, "unexpected end of stream"),
            ParseError::NoNameTable => write!(f, "font has no name table"),
            ParseError::MisorderedTable(tag) => {
                write!(f, "'{}' table overlaps already consumed data", tag)
            }
        }
    }
}

impl error::Error for ParseError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ParseError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(e: io::Error) -> Self {
        // `read_exact` reports a short read as an I/O error kind.
        if e.kind() == io::ErrorKind::UnexpectedEof {
            ParseError::UnexpectedEof
        } else {
            ParseError::Io(e)
        }
    }
}

/// A parsing error tied to the file it came from.
#[derive(Debug)]
pub struct Error {
    path: PathBuf,
    kind: ParseError,
}

impl Error {
    pub(crate) fn new(path: &Path, kind: ParseError) -> Self {
        Error {
            path: path.to_path_buf(),
            kind,
        }
    }

    /// Path of the file that failed to parse.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The underlying cause.
    pub fn kind(&self) -> &ParseError {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.kind)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Result type alias for operations tied to a font file.
pub type Result<T> = std::result::Result<T, Error>;
