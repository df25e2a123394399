// https://docs.microsoft.com/en-us/typography/opentype/spec/name

use crate::parser::{FromData, Stream};

/// A list of [name ID](https://docs.microsoft.com/en-us/typography/opentype/spec/name#name-ids)'s.
pub mod name_id {
    #![allow(missing_docs)]

    pub const FAMILY: u16 = 1;
    pub const SUBFAMILY: u16 = 2;
}

/// A [platform ID](https://docs.microsoft.com/en-us/typography/opentype/spec/name#platform-ids).
#[derive(Clone, Copy, PartialEq, Debug)]
#[allow(missing_docs)]
pub enum PlatformId {
    Unicode,
    Macintosh,
    Iso,
    Windows,
    Custom,
}

impl FromData for PlatformId {
    const SIZE: usize = 2;

    #[inline]
    fn parse(data: &[u8]) -> Option<Self> {
        match u16::parse(data)? {
            0 => Some(PlatformId::Unicode),
            1 => Some(PlatformId::Macintosh),
            2 => Some(PlatformId::Iso),
            3 => Some(PlatformId::Windows),
            4 => Some(PlatformId::Custom),
            _ => None,
        }
    }
}

// https://docs.microsoft.com/en-us/typography/opentype/spec/name#windows-encoding-ids
const WINDOWS_SYMBOL_ENCODING_ID: u16 = 0;
const WINDOWS_UNICODE_BMP_ENCODING_ID: u16 = 1;

/// Language ids at or above this value index the `ltag` table.
const EXTENDED_LANGUAGE_THRESHOLD: u16 = 0x8000;

#[derive(Clone, Copy)]
struct NameRecord {
    platform_id: PlatformId,
    encoding_id: u16,
    language_id: u16,
    name_id: u16,
    length: u16,
    offset: u16,
}

impl FromData for NameRecord {
    const SIZE: usize = 12;

    #[inline]
    fn parse(data: &[u8]) -> Option<Self> {
        let mut s = Stream::new(data);
        Some(NameRecord {
            platform_id: s.read::<PlatformId>()?,
            encoding_id: s.read::<u16>()?,
            language_id: s.read::<u16>()?,
            name_id: s.read::<u16>()?,
            length: s.read::<u16>()?,
            offset: s.read::<u16>()?,
        })
    }
}

impl NameRecord {
    // Windows and Unicode records carry UTF-16 and win over the legacy
    // Macintosh encodings. Records we cannot decode rank not at all.
    fn rank(&self) -> Option<u8> {
        match self.platform_id {
            PlatformId::Unicode => Some(2),
            PlatformId::Windows
                if self.encoding_id == WINDOWS_SYMBOL_ENCODING_ID
                    || self.encoding_id == WINDOWS_UNICODE_BMP_ENCODING_ID =>
            {
                Some(2)
            }
            PlatformId::Macintosh => Some(1),
            _ => None,
        }
    }

    fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self.platform_id {
            PlatformId::Unicode | PlatformId::Windows => decode_utf16_be(bytes),
            // Mac Roman and friends; a direct byte-to-codepoint mapping
            // covers the names seen in practice.
            PlatformId::Macintosh => Some(bytes.iter().map(|&b| char::from(b)).collect()),
            _ => None,
        }
    }
}

fn decode_utf16_be(bytes: &[u8]) -> Option<String> {
    if bytes.len() % 2 != 0 {
        return None;
    }

    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).ok()
}

/// The best record found so far for one name id.
#[derive(Default)]
struct Candidate {
    rank: u8,
    text: Option<String>,
}

impl Candidate {
    fn offer(&mut self, rank: u8, text: String) {
        // Strictly better only: the first record wins among equals.
        if self.text.is_none() || rank > self.rank {
            self.rank = rank;
            self.text = Some(text);
        }
    }
}

/// Name strings resolved from a `name` table.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Table {
    /// Family name (name ID 1). Never an empty string.
    pub family: Option<String>,
    /// Subfamily name (name ID 2). Never an empty string.
    pub subfamily: Option<String>,
}

/// Parses a `name` table.
///
/// `language_tags` is the decoded `ltag` list, empty when the font has none.
/// A record whose language id lies in the extended range but has no matching
/// tag is unusable and gets skipped.
pub fn parse(data: &[u8], language_tags: &[String]) -> Option<Table> {
    let mut s = Stream::new(data);
    s.skip::<u16>(); // format
    let count: u16 = s.read()?;
    let storage_offset: u16 = s.read()?;
    let records = s.read_array16::<NameRecord>(count)?;
    let storage = data.get(usize::from(storage_offset)..).unwrap_or(&[]);

    let mut family = Candidate::default();
    let mut subfamily = Candidate::default();
    for record in records {
        let candidate = match record.name_id {
            name_id::FAMILY => &mut family,
            name_id::SUBFAMILY => &mut subfamily,
            _ => continue,
        };

        let rank = match record.rank() {
            Some(rank) => rank,
            None => continue,
        };

        if record.language_id >= EXTENDED_LANGUAGE_THRESHOLD {
            let index = usize::from(record.language_id - EXTENDED_LANGUAGE_THRESHOLD);
            if language_tags.get(index).is_none() {
                warn!("skipping a name record with an unresolved language tag");
                continue;
            }
        }

        let start = usize::from(record.offset);
        let end = start + usize::from(record.length);
        let bytes = match storage.get(start..end) {
            Some(bytes) => bytes,
            None => {
                warn!("skipping a name record that points outside string storage");
                continue;
            }
        };

        match record.decode(bytes) {
            Some(text) if !text.is_empty() => candidate.offer(rank, text),
            _ => {}
        }
    }

    Some(Table {
        family: family.text,
        subfamily: subfamily.text,
    })
}
