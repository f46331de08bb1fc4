use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Overrides the directory holding the language catalog. Used by tests and
/// handy for sandboxed installs.
const BASE_DIR_ENV: &str = "DICT_CC_DIR";

const CATALOG_FILE_NAME: &str = "languages.json";

/// Resolves the catalog file path, creating its directory when missing.
pub fn catalog_file() -> io::Result<PathBuf> {
    let dir = base_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "could not find home directory")
    })?;
    fs::create_dir_all(&dir)?;
    Ok(dir.join(CATALOG_FILE_NAME))
}

fn base_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(BASE_DIR_ENV) {
        let dir = dir.trim();
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    home_join(".dict_cc")
}

fn home_join(suffix: &str) -> Option<PathBuf> {
    std::env::var("HOME").ok().and_then(|home| {
        let home = home.trim();
        if home.is_empty() {
            None
        } else {
            Some(Path::new(home).join(suffix))
        }
    })
}
