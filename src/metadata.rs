//! Caller-facing metadata derived from the decoded tables.
//!
//! Every attribute degrades through an explicit fallback chain, so a font
//! that carries nothing beyond a `name` table still produces a usable
//! record: weight 400, Regular, Unknown.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::parse::FontData;
use crate::tables::os2::Weight;

/// Style of a single font variant.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Style {
    /// Neither bold nor slanted.
    Regular,
    /// Bold, upright.
    Bold,
    /// Slanted, designed as italic.
    Italic,
    /// Bold and italic.
    BoldItalic,
    /// Slanted mechanically rather than designed as italic.
    Oblique,
    /// Bold and oblique.
    BoldOblique,
}

impl Style {
    /// The style as text, e.g. `"Bold Italic"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Regular => "Regular",
            Style::Bold => "Bold",
            Style::Italic => "Italic",
            Style::BoldItalic => "Bold Italic",
            Style::Oblique => "Oblique",
            Style::BoldOblique => "Bold Oblique",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse typeface classification.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Type {
    /// Faces with stroke-end serifs.
    Serif,
    /// Faces without serifs.
    SansSerif,
    /// Fixed-pitch faces.
    Monospace,
    /// Script and handwriting faces.
    Cursive,
    /// No signal resolved the classification.
    Unknown,
}

impl Type {
    /// The classification as text.
    pub fn as_str(self) -> &'static str {
        match self {
            Type::Serif => "serif",
            Type::SansSerif => "sans-serif",
            Type::Monospace => "monospace",
            Type::Cursive => "cursive",
            Type::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct NameRule {
    keyword: &'static str,
    kind: Type,
}

// Checked in order against the lowercased family and subfamily text.
// "sans" must come before "serif" so that "Foo Sans Serif" is a sans.
const NAME_RULES: &[NameRule] = &[
    NameRule {
        keyword: "mono",
        kind: Type::Monospace,
    },
    NameRule {
        keyword: "sans",
        kind: Type::SansSerif,
    },
    NameRule {
        keyword: "serif",
        kind: Type::Serif,
    },
    NameRule {
        keyword: "script",
        kind: Type::Cursive,
    },
    NameRule {
        keyword: "cursive",
        kind: Type::Cursive,
    },
];

// IBM font class ids, the high byte of `OS/2.sFamilyClass`.
// https://docs.microsoft.com/en-us/typography/opentype/spec/ibmfc
const CLASS_SANS_SERIF: u8 = 8;
const CLASS_SCRIPTS: u8 = 10;

/// One variant as reported to callers: a physical font inside some file.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FontVariant {
    /// Path of the file the variant came from.
    pub path: PathBuf,
    /// Coarse classification.
    pub kind: Type,
    /// Weight; raw `usWeightClass` values such as 450 pass through unchanged.
    pub weight: Weight,
    /// Style resolved from `OS/2`, `head` and the name text.
    pub style: Style,
}

impl FontVariant {
    /// Derives a variant from one font's decoded tables.
    pub fn from_data(path: &Path, data: &FontData) -> FontVariant {
        FontVariant {
            path: path.to_path_buf(),
            kind: classify(data),
            weight: weight_of(data),
            style: style_of(data),
        }
    }
}

/// A variant together with its resolved family name.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Font {
    /// Family name the variant groups under.
    pub family: String,
    /// Path of the file the font came from.
    pub path: PathBuf,
    /// Coarse classification.
    pub kind: Type,
    /// Weight.
    pub weight: Weight,
    /// Style.
    pub style: Style,
}

impl Font {
    /// Builds the caller-facing record.
    ///
    /// Returns `None` when the font resolved no family name; such fonts
    /// cannot be grouped or looked up and are reported nowhere.
    pub fn from_data(path: &Path, data: &FontData) -> Option<Font> {
        let family = data.names.family.clone()?;
        let variant = FontVariant::from_data(path, data);
        Some(Font {
            family,
            path: variant.path,
            kind: variant.kind,
            weight: variant.weight,
            style: variant.style,
        })
    }

    pub(crate) fn into_variant(self) -> (String, FontVariant) {
        (
            self.family,
            FontVariant {
                path: self.path,
                kind: self.kind,
                weight: self.weight,
                style: self.style,
            },
        )
    }
}

fn weight_of(data: &FontData) -> Weight {
    data.os2.map(|os2| os2.weight()).unwrap_or_default()
}

fn style_of(data: &FontData) -> Style {
    let (bold, italic) = match (&data.os2, &data.head) {
        (Some(os2), _) => (os2.is_bold(), os2.is_italic()),
        (None, Some(head)) => (head.is_bold(), head.is_italic()),
        (None, None) => (false, false),
    };

    // Obliqueness lives in the name text, not in the bit fields read above;
    // the `OS/2` oblique bit only exists in later table revisions.
    if name_mentions_oblique(data) {
        if bold {
            Style::BoldOblique
        } else {
            Style::Oblique
        }
    } else {
        match (bold, italic) {
            (true, true) => Style::BoldItalic,
            (true, false) => Style::Bold,
            (false, true) => Style::Italic,
            (false, false) => Style::Regular,
        }
    }
}

fn name_mentions_oblique(data: &FontData) -> bool {
    let names = &data.names;
    names
        .subfamily
        .iter()
        .chain(names.family.iter())
        .any(|name| name.to_lowercase().contains("oblique"))
}

fn classify(data: &FontData) -> Type {
    if data.post.map_or(false, |post| post.is_fixed_pitch) {
        return Type::Monospace;
    }

    let names = &data.names;
    let text = format!(
        "{} {}",
        names.family.as_deref().unwrap_or(""),
        names.subfamily.as_deref().unwrap_or("")
    )
    .to_lowercase();
    for rule in NAME_RULES {
        if text.contains(rule.keyword) {
            return rule.kind;
        }
    }

    if let Some(os2) = &data.os2 {
        return match os2.family_class() {
            // Oldstyle through slab plus freeform: all serifs.
            1..=5 | 7 => Type::Serif,
            CLASS_SANS_SERIF => Type::SansSerif,
            CLASS_SCRIPTS => Type::Cursive,
            _ => Type::Unknown,
        };
    }

    Type::Unknown
}
