//! A forward-only cursor over a byte stream.

use std::io::{self, Read};

use crate::error::ParseError;
use crate::parser::FromData;

/// A sequential, forward-only reader over an underlying byte source.
///
/// There is no seeking: skipped bytes are consumed and discarded, and the
/// number of bytes read so far is tracked so callers can compute skip
/// distances between file offsets. The underlying reader is released when
/// the cursor is dropped, on every exit path.
pub struct ByteStream<R: Read> {
    inner: R,
    offset: u64,
}

impl<R: Read> ByteStream<R> {
    /// Creates a cursor positioned at the start of `inner`.
    pub fn new(inner: R) -> Self {
        ByteStream { inner, offset: 0 }
    }

    /// Number of bytes consumed so far.
    #[inline]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Reads exactly `len` bytes.
    ///
    /// The buffer grows as the stream delivers, so a malformed table length
    /// in a truncated file fails with [`ParseError::UnexpectedEof`] instead
    /// of reserving the declared length up front.
    pub fn read_exact(&mut self, len: usize) -> Result<Vec<u8>, ParseError> {
        let mut buf = Vec::new();
        let read = self
            .inner
            .by_ref()
            .take(len as u64)
            .read_to_end(&mut buf)
            .map_err(ParseError::Io)?;
        self.offset += read as u64;
        if read < len {
            return Err(ParseError::UnexpectedEof);
        }
        Ok(buf)
    }

    /// Consumes and discards `len` bytes.
    pub fn skip(&mut self, len: u64) -> Result<(), ParseError> {
        let skipped = io::copy(&mut self.inner.by_ref().take(len), &mut io::sink())
            .map_err(ParseError::Io)?;
        self.offset += skipped;
        if skipped < len {
            return Err(ParseError::UnexpectedEof);
        }
        Ok(())
    }

    /// Reads a single fixed-size field.
    pub fn read<T: FromData>(&mut self) -> Result<T, ParseError> {
        let mut buf = [0u8; 8];
        debug_assert!(T::SIZE <= buf.len());
        let buf = &mut buf[..T::SIZE];
        self.inner.read_exact(buf)?;
        self.offset += T::SIZE as u64;
        T::parse(buf).ok_or(ParseError::UnexpectedEof)
    }
}
