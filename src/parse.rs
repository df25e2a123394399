//! Streamed parsing of whole font files.
//!
//! The entry points are [`parse_file`] for paths and [`parse_source`] for
//! arbitrary reopenable byte sources. Only the tables needed for metadata
//! are fetched; everything else in the file is skipped over.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{Error, ParseError};
use crate::parser::Tag;
use crate::stream::ByteStream;
use crate::tables::{head, ltag, name, os2, post};

#[derive(Clone, Copy, PartialEq, Debug)]
enum Signature {
    TrueType,
    Cff,
    Woff,
    Collection,
}

// https://docs.microsoft.com/en-us/typography/opentype/spec/otff#organization-of-an-opentype-font
fn detect_signature(magic: Tag) -> Result<Signature, ParseError> {
    match &magic.0 {
        // 1.0, plus the legacy Mac tags.
        b"\x00\x01\x00\x00" | b"true" | b"typ1" => Ok(Signature::TrueType),
        b"OTTO" => Ok(Signature::Cff),
        b"wOFF" => Ok(Signature::Woff),
        b"ttcf" => Ok(Signature::Collection),
        _ => Err(ParseError::UnknownMagic(magic.0)),
    }
}

/// Location of one table within the file.
#[derive(Clone, Copy)]
struct TableRecord {
    offset: u32,
    length: u32,
}

/// The tables this crate tracks while walking a table directory.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum TrackedTable {
    Name,
    Ltag,
    Os2,
    Head,
    Post,
}

impl TrackedTable {
    fn from_tag(tag: Tag) -> Option<Self> {
        match &tag.0 {
            b"name" => Some(TrackedTable::Name),
            b"ltag" => Some(TrackedTable::Ltag),
            b"OS/2" => Some(TrackedTable::Os2),
            b"head" => Some(TrackedTable::Head),
            b"post" => Some(TrackedTable::Post),
            _ => None,
        }
    }

    fn tag(self) -> Tag {
        match self {
            TrackedTable::Name => Tag(*b"name"),
            TrackedTable::Ltag => Tag(*b"ltag"),
            TrackedTable::Os2 => Tag(*b"OS/2"),
            TrackedTable::Head => Tag(*b"head"),
            TrackedTable::Post => Tag(*b"post"),
        }
    }
}

#[derive(Default)]
struct TableDirectory {
    name: Option<TableRecord>,
    ltag: Option<TableRecord>,
    os2: Option<TableRecord>,
    head: Option<TableRecord>,
    post: Option<TableRecord>,
}

impl TableDirectory {
    fn insert(&mut self, table: TrackedTable, record: TableRecord) {
        let slot = match table {
            TrackedTable::Name => &mut self.name,
            TrackedTable::Ltag => &mut self.ltag,
            TrackedTable::Os2 => &mut self.os2,
            TrackedTable::Head => &mut self.head,
            TrackedTable::Post => &mut self.post,
        };
        *slot = Some(record);
    }

    // `head` and `post` are fallback sources; once the tables that always
    // matter are located the rest of the directory does not need walking.
    fn has_primary_tables(&self) -> bool {
        self.name.is_some() && self.ltag.is_some() && self.os2.is_some()
    }

    fn located(&self) -> Vec<(TrackedTable, TableRecord)> {
        let mut located = Vec::with_capacity(5);
        let slots = [
            (TrackedTable::Name, self.name),
            (TrackedTable::Ltag, self.ltag),
            (TrackedTable::Os2, self.os2),
            (TrackedTable::Head, self.head),
            (TrackedTable::Post, self.post),
        ];
        for (table, record) in slots {
            if let Some(record) = record {
                located.push((table, record));
            }
        }
        located
    }
}

#[derive(Default)]
struct TableBuffers {
    name: Option<Vec<u8>>,
    ltag: Option<Vec<u8>>,
    os2: Option<Vec<u8>>,
    head: Option<Vec<u8>>,
    post: Option<Vec<u8>>,
}

/// Metadata tables decoded from one physical font.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FontData {
    /// Resolved `name` table strings. Fonts without a `name` table fail to
    /// parse, so this is always present.
    pub names: name::Table,
    /// `OS/2` table prefix, when present and well-formed.
    pub os2: Option<os2::Table>,
    /// `head` table, when present and well-formed.
    pub head: Option<head::Table>,
    /// `post` table, when present and well-formed.
    pub post: Option<post::Table>,
}

/// Result of parsing one font file.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ParsedFont {
    /// An ordinary single-font file.
    Single(FontData),
    /// A TrueType Collection: one entry per embedded font, in the order the
    /// collection header declares them.
    Collection(Vec<FontData>),
}

impl ParsedFont {
    /// The physical fonts in file order.
    pub fn fonts(&self) -> &[FontData] {
        match self {
            ParsedFont::Single(data) => core::slice::from_ref(data),
            ParsedFont::Collection(fonts) => fonts,
        }
    }
}

/// Parses the font file at `path`.
///
/// Errors carry the path alongside the cause. A failure never leaks the
/// underlying file handle.
pub fn parse_file(path: &Path) -> Result<ParsedFont, Error> {
    parse_source(|| File::open(path)).map_err(|kind| Error::new(path, kind))
}

/// Parses a font from a reopenable byte source.
///
/// `open` is called once up front, and once more per embedded font when the
/// source turns out to be a TrueType Collection; every returned reader must
/// yield the same bytes from the start. Each reader is dropped as soon as
/// its font has been parsed.
pub fn parse_source<R, F>(mut open: F) -> Result<ParsedFont, ParseError>
where
    R: Read,
    F: FnMut() -> io::Result<R>,
{
    let mut stream = ByteStream::new(open().map_err(ParseError::Io)?);
    let magic: Tag = stream.read()?;
    match detect_signature(magic)? {
        Signature::TrueType | Signature::Cff => parse_sfnt(&mut stream).map(ParsedFont::Single),
        Signature::Woff => Err(ParseError::UnsupportedFormat),
        Signature::Collection => {
            // https://docs.microsoft.com/en-us/typography/opentype/spec/otff#ttc-header
            stream.skip(4)?; // majorVersion + minorVersion
            let num_fonts: u32 = stream.read()?;
            let mut offsets = Vec::new();
            for _ in 0..num_fonts {
                offsets.push(stream.read::<u32>()?);
            }
            drop(stream);

            let mut fonts = Vec::with_capacity(offsets.len());
            for offset in offsets {
                let mut font_stream = ByteStream::new(open().map_err(ParseError::Io)?);
                // +4 skips the embedded font's own sfnt version tag.
                font_stream.skip(u64::from(offset) + 4)?;
                fonts.push(parse_sfnt(&mut font_stream)?);
            }
            Ok(ParsedFont::Collection(fonts))
        }
    }
}

/// Parses a single sfnt font, starting just past the 4-byte version tag.
fn parse_sfnt<R: Read>(stream: &mut ByteStream<R>) -> Result<FontData, ParseError> {
    let num_tables: u16 = stream.read()?;
    stream.skip(6)?; // searchRange + entrySelector + rangeShift
    let directory = read_table_directory(stream, num_tables)?;

    // Fetch in ascending file order; the cursor cannot rewind. Note that
    // table offsets are relative to the whole file, which is also where the
    // cursor counts from, collections included.
    let mut located = directory.located();
    located.sort_by_key(|&(_, record)| record.offset);

    let mut buffers = TableBuffers::default();
    for (table, record) in located {
        let skip = u64::from(record.offset)
            .checked_sub(stream.offset())
            .ok_or_else(|| ParseError::MisorderedTable(table.tag()))?;
        stream.skip(skip)?;
        let data = stream.read_exact(record.length as usize)?;
        match table {
            TrackedTable::Name => buffers.name = Some(data),
            TrackedTable::Ltag => buffers.ltag = Some(data),
            TrackedTable::Os2 => buffers.os2 = Some(data),
            TrackedTable::Head => buffers.head = Some(data),
            TrackedTable::Post => buffers.post = Some(data),
        }
    }

    // `ltag` decodes first whatever its position in the file: `name`
    // records may reference its language tags.
    let language_tags = buffers
        .ltag
        .as_deref()
        .and_then(ltag::parse)
        .unwrap_or_default();

    let name_data = buffers.name.ok_or(ParseError::NoNameTable)?;
    let names = name::parse(&name_data, &language_tags).ok_or(ParseError::UnexpectedEof)?;

    Ok(FontData {
        names,
        os2: buffers.os2.as_deref().and_then(os2::Table::parse),
        head: buffers.head.as_deref().and_then(head::Table::parse),
        post: buffers.post.as_deref().and_then(post::Table::parse),
    })
}

// https://docs.microsoft.com/en-us/typography/opentype/spec/otff#table-directory
fn read_table_directory<R: Read>(
    stream: &mut ByteStream<R>,
    num_tables: u16,
) -> Result<TableDirectory, ParseError> {
    let mut directory = TableDirectory::default();
    for _ in 0..num_tables {
        let tag: Tag = stream.read()?;
        stream.skip(4)?; // checksum
        let offset: u32 = stream.read()?;
        let length: u32 = stream.read()?;
        if let Some(table) = TrackedTable::from_tag(tag) {
            directory.insert(table, TableRecord { offset, length });
            if directory.has_primary_tables() {
                break;
            }
        }
    }
    Ok(directory)
}
