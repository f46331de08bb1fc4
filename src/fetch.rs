use tracing::debug;

use crate::error::DictError;

/// Front page listing every supported language pair.
pub const ALL_LANGUAGES_URL: &str = "http://www.dict.cc/";

/// Fetches the page listing all language pairs. Transport errors surface
/// unchanged; recovery, if any, belongs to the caller.
pub fn fetch_language_page(url: &str) -> Result<String, DictError> {
    debug!(url, "fetching language page");
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    Ok(response.text()?)
}
