/*!
A streaming TrueType/OpenType metadata reader and system font lister.

Reads just enough of each font file to recover its family name, numeric
weight, style and coarse classification: the `name`, `OS/2`, `head`, `post`
and `ltag` tables, located through the table directory and fetched in file
order. No platform font API is involved, and files are never loaded whole.

## Features

- Streaming, forward-only reads; only the needed tables are fetched.
- TrueType Collections yield one record per embedded font.
- Malformed optional tables degrade the metadata instead of failing the file.
- Groups installed fonts into a family-keyed directory, parsing in parallel.

## Example

```no_run
for (family, variants) in fontdir::list() {
    println!("{}: {} variant(s)", family, variants.len());
}
```
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

#[cfg(feature = "logging")]
macro_rules! warn {
    ($($arg:tt)+) => (
        log::log!(log::Level::Warn, $($arg)+);
    )
}

#[cfg(not(feature = "logging"))]
macro_rules! warn {
    ($($arg:tt)+) => () // do nothing
}

mod error;
mod metadata;
mod parse;
mod parser;
pub mod sources;
mod stream;
pub mod tables;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

pub use error::{Error, ParseError, Result};
pub use metadata::{Font, FontVariant, Style, Type};
pub use parse::{parse_file, parse_source, FontData, ParsedFont};
pub use parser::Tag;
pub use tables::name::Table as NameTable;
pub use tables::os2::Weight;

/// Font variants grouped by family name.
///
/// A `BTreeMap` keeps family iteration order stable across runs.
pub type FontDirectory = BTreeMap<String, Vec<FontVariant>>;

/// Lists the fonts installed in the platform's font directories, grouped by
/// family name.
///
/// Equivalent to `list_from(sources::system_font_paths())`.
pub fn list() -> FontDirectory {
    list_from(sources::system_font_paths())
}

/// Parses every file in `paths` and groups the results by family name.
///
/// Files are parsed in parallel. A file that fails to parse (or a font
/// without a usable family name) is skipped with a warning; one bad file
/// never aborts the batch. Variants within a family are ordered by weight,
/// then style, then path.
pub fn list_from<I, P>(paths: I) -> FontDirectory
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let paths: Vec<PathBuf> = paths.into_iter().map(Into::into).collect();
    let fonts: Vec<Font> = paths
        .into_par_iter()
        .filter_map(|path| match get(&path) {
            Ok(fonts) => Some(fonts),
            Err(err) => {
                warn!("skipping {}", err);
                None
            }
        })
        .flatten()
        .collect();

    let mut directory = FontDirectory::new();
    for font in fonts {
        let (family, variant) = font.into_variant();
        directory.entry(family).or_default().push(variant);
    }
    for variants in directory.values_mut() {
        variants.sort_by(|a, b| {
            (a.weight.to_number(), a.style, &a.path).cmp(&(b.weight.to_number(), b.style, &b.path))
        });
    }
    directory
}

/// Lists all variants of one family, ordered as in [`list_from`].
///
/// Returns an empty vector when no installed font resolves to `family`.
pub fn list_variants(family: &str) -> Vec<FontVariant> {
    list().remove(family).unwrap_or_default()
}

/// Parses a single file: one record per physical font inside it.
///
/// Ordinary fonts yield one record; TrueType Collections yield one per
/// embedded font, in file order. Fonts that resolve no family name are
/// omitted from the result.
pub fn get(path: &Path) -> Result<Vec<Font>> {
    let parsed = parse::parse_file(path)?;
    Ok(parsed
        .fonts()
        .iter()
        .filter_map(|data| {
            let font = Font::from_data(path, data);
            if font.is_none() {
                warn!("{} has no usable family name", path.display());
            }
            font
        })
        .collect())
}
