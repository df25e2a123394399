// https://developer.apple.com/fonts/TrueType-Reference-Manual/RM06/Chap6ltag.html

use crate::parser::{FromData, Stream};

#[derive(Clone, Copy)]
struct TagRange {
    offset: u16,
    length: u16,
}

impl FromData for TagRange {
    const SIZE: usize = 4;

    #[inline]
    fn parse(data: &[u8]) -> Option<Self> {
        let mut s = Stream::new(data);
        Some(TagRange {
            offset: s.read::<u16>()?,
            length: s.read::<u16>()?,
        })
    }
}

/// Parses an `ltag` table into its ordered list of language tags.
///
/// `name` records with language ids in the extended range index this list.
/// Tag strings are BCP-47-style ASCII, stored inside the table itself.
///
/// Returns `None` when the table is malformed; an index shifted by a bad
/// entry would mistranslate every id after it, so the whole list is dropped.
pub fn parse(data: &[u8]) -> Option<Vec<String>> {
    let mut s = Stream::new(data);
    let version: u32 = s.read()?;
    if version != 1 {
        return None;
    }
    s.skip::<u32>(); // flags
    let count: u32 = s.read()?;

    let mut tags = Vec::new();
    for _ in 0..count {
        let range: TagRange = s.read()?;
        let start = usize::from(range.offset);
        let end = start.checked_add(usize::from(range.length))?;
        let bytes = data.get(start..end)?;
        tags.push(core::str::from_utf8(bytes).ok()?.to_string());
    }
    Some(tags)
}
