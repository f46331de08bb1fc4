//! Client library for the dict.cc bilingual dictionary: discovers the
//! language pairs the site supports, caches them on disk in a versioned
//! catalog, and builds lookup URLs for a pair and search term.

use std::fs::File;
use std::io::Write;

use anyhow::{Context, Result};

pub mod cache;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod languages;
pub mod logging;
pub mod lookup;
pub mod paths;
#[cfg(test)]
pub(crate) mod test_util;

pub use error::DictError;
pub use languages::{Language, LanguagePair};

/// Re-fetches the language catalog from the site and saves it to the user
/// cache file, reporting progress to `out`.
pub fn update_languages<W: Write>(out: &mut W) -> Result<Vec<LanguagePair>> {
    update_languages_with(out, || fetch::fetch_language_page(fetch::ALL_LANGUAGES_URL))
}

/// Same as [`update_languages`], with the fetch step injected so the whole
/// pipeline can run against a fixture page.
pub fn update_languages_with<W, F>(out: &mut W, fetch_page: F) -> Result<Vec<LanguagePair>>
where
    W: Write,
    F: FnOnce() -> Result<String, DictError>,
{
    writeln!(out, "Available languages are being updated.")?;
    writeln!(out, "This may take a while ...")?;
    writeln!(out)?;

    let body = fetch_page()?;
    let pairs = extract::language_pairs(
        Some(&body),
        &extract::default_anchors(),
        extract::DedupePolicy::default(),
    )?;
    writeln!(out, "Total languages: {}", pairs.len())?;

    let path = paths::catalog_file().context("could not resolve the language cache file")?;
    let mut file =
        File::create(&path).with_context(|| format!("could not create {}", path.display()))?;
    cache::save_pairs(&pairs, &mut file)?;

    Ok(pairs)
}

/// Loads the cached catalog, rebuilding it first when the cache is missing,
/// outdated, or unreadable. An outdated cache is treated as absent and
/// re-fetched in full, never migrated in place.
pub fn load_or_update_languages<W: Write>(out: &mut W) -> Result<Vec<LanguagePair>> {
    load_or_update_languages_with(out, || fetch::fetch_language_page(fetch::ALL_LANGUAGES_URL))
}

pub fn load_or_update_languages_with<W, F>(out: &mut W, fetch_page: F) -> Result<Vec<LanguagePair>>
where
    W: Write,
    F: FnOnce() -> Result<String, DictError>,
{
    let path = paths::catalog_file().context("could not resolve the language cache file")?;
    if path.is_file() {
        let loaded = File::open(&path)
            .map_err(DictError::from)
            .and_then(cache::load_pairs);
        match loaded {
            Ok(pairs) => return Ok(pairs),
            Err(DictError::OutdatedCache) | Err(DictError::Decode(_)) => {
                writeln!(out, "The cached language list is unusable and will be rebuilt.")?;
            }
            Err(err) => return Err(err.into()),
        }
    } else {
        writeln!(out, "This is your first usage.")?;
    }
    update_languages_with(out, fetch_page)
}

/// Finds the pair whose two abbreviations concatenate to `code` (e.g.
/// "ende"), in either orientation.
pub fn find_pair<'a>(pairs: &'a [LanguagePair], code: &str) -> Option<&'a LanguagePair> {
    pairs.iter().find(|pair| {
        let forward = format!("{}{}", pair.first.abbrev, pair.second.abbrev);
        let backward = format!("{}{}", pair.second.abbrev, pair.first.abbrev);
        forward == code || backward == code
    })
}
