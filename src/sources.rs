//! Candidate font file discovery.
//!
//! The parser itself never looks for files; any path enumerator can feed
//! [`crate::list_from`]. This module is the built-in enumerator: it walks
//! the host platform's conventional font directories.

use std::fs;
use std::path::{Path, PathBuf};

/// File extensions that may hold sfnt data.
const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc", "otc"];

// Symlinked directory cycles exist in the wild; cap the recursion instead
// of tracking visited inodes.
const MAX_DEPTH: u32 = 8;

/// The conventional font directories for the host platform.
///
/// Directories that do not exist are simply skipped by [`scan`].
pub fn font_directories() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    #[cfg(target_os = "windows")]
    {
        if let Some(windir) = std::env::var_os("WINDIR") {
            dirs.push(PathBuf::from(windir).join("Fonts"));
        }
        if let Some(local) = std::env::var_os("LOCALAPPDATA") {
            dirs.push(PathBuf::from(local).join("Microsoft\\Windows\\Fonts"));
        }
    }

    #[cfg(target_os = "macos")]
    {
        dirs.push(PathBuf::from("/System/Library/Fonts"));
        dirs.push(PathBuf::from("/Library/Fonts"));
        if let Some(home) = std::env::var_os("HOME") {
            dirs.push(PathBuf::from(home).join("Library/Fonts"));
        }
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        dirs.push(PathBuf::from("/usr/share/fonts"));
        dirs.push(PathBuf::from("/usr/local/share/fonts"));
        if let Some(home) = std::env::var_os("HOME") {
            let home = PathBuf::from(home);
            dirs.push(home.join(".local/share/fonts"));
            dirs.push(home.join(".fonts"));
        }
    }

    dirs
}

/// Recursively collects candidate font files under `dirs`.
///
/// The result is sorted and deduplicated, so one run's output matches the
/// next one's regardless of readdir order.
pub fn scan<I, P>(dirs: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut paths = Vec::new();
    for dir in dirs {
        walk(dir.as_ref(), 0, &mut paths);
    }
    paths.sort();
    paths.dedup();
    paths
}

/// All candidate font files in the platform directories.
pub fn system_font_paths() -> Vec<PathBuf> {
    scan(font_directories())
}

fn walk(dir: &Path, depth: u32, out: &mut Vec<PathBuf>) {
    if depth > MAX_DEPTH {
        return;
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return, // unreadable or missing; nothing to list
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, depth + 1, out);
        } else if has_font_extension(&path) {
            out.push(path);
        }
    }
}

fn has_font_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| {
            FONT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
