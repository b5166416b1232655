//! File system cache for downloaded dataset files
//!
//! Remote CSV files are stored verbatim under the user cache directory so
//! repeated runs for the same season do not hit the network:
//! `~/.cache/fpl-season/<season>/<relative path>`.

use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use crate::Season;

/// Root directory for all cached dataset files.
pub fn cache_root() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("fpl-season")
}

/// Path: ~/.cache/fpl-season/{season}/{relative}
pub fn dataset_cache_path(season: Season, relative: &str) -> PathBuf {
    cached_file_path(&cache_root(), season, relative)
}

/// Cache path for `relative` below an explicit root.
pub fn cached_file_path(root: &Path, season: Season, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != "..")
        .fold(root.join(season.dir_name()), |path, segment| {
            path.join(segment)
        })
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}
