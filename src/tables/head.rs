// https://docs.microsoft.com/en-us/typography/opentype/spec/head

use crate::parser::Stream;

const MAC_STYLE_OFFSET: usize = 44;

// https://docs.microsoft.com/en-us/typography/opentype/spec/head
#[derive(Clone, Copy)]
struct MacStyleFlags(u16);

impl MacStyleFlags {
    #[inline]
    fn bold(self) -> bool {
        self.0 & (1 << 0) != 0
    }

    #[inline]
    fn italic(self) -> bool {
        self.0 & (1 << 1) != 0
    }
}

/// A [Font Header Table](https://docs.microsoft.com/en-us/typography/opentype/spec/head).
///
/// Only `macStyle` is decoded; it serves as the style source when `OS/2`
/// is absent.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Table {
    mac_style: u16,
}

impl Table {
    /// Parses a table from raw data.
    ///
    /// Returns `None` when the buffer ends before `macStyle`.
    pub fn parse(data: &[u8]) -> Option<Self> {
        Some(Table {
            mac_style: Stream::read_at(data, MAC_STYLE_OFFSET)?,
        })
    }

    /// Checks that the font is marked as *Bold*.
    #[inline]
    pub fn is_bold(&self) -> bool {
        MacStyleFlags(self.mac_style).bold()
    }

    /// Checks that the font is marked as *Italic*.
    #[inline]
    pub fn is_italic(&self) -> bool {
        MacStyleFlags(self.mac_style).italic()
    }
}
