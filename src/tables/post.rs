// https://docs.microsoft.com/en-us/typography/opentype/spec/post

use crate::parser::Stream;

const IS_FIXED_PITCH_OFFSET: usize = 12;

/// A [PostScript Table](https://docs.microsoft.com/en-us/typography/opentype/spec/post).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Table {
    /// Whether the font's glyphs share a single advance width.
    pub is_fixed_pitch: bool,
}

impl Table {
    /// Parses a table from raw data.
    ///
    /// Returns `None` when the buffer ends before the fixed-pitch field.
    pub fn parse(data: &[u8]) -> Option<Self> {
        let flag: u32 = Stream::read_at(data, IS_FIXED_PITCH_OFFSET)?;
        // Defined as 0 or 1, but any non-zero value means fixed pitch.
        Some(Table {
            is_fixed_pitch: flag != 0,
        })
    }
}
