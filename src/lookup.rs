use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::DictError;
use crate::languages::LanguagePair;

/// Lookups go to the pair subdomain, e.g. http://ende.dict.cc.
const SITE_DOMAIN: &str = "dict.cc";

/// Query-component escaping: unreserved characters stay, everything else is
/// percent-encoded.
const QUERY_ESCAPE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Escapes a search term for the `?s=` query parameter. Spaces become `+`,
/// the site's word separator, and a literal `+` in the term stays a literal
/// `+` rather than being double-escaped.
pub fn escape_search_term(term: &str) -> String {
    utf8_percent_encode(term, QUERY_ESCAPE_SET)
        .to_string()
        .replace("%20", "+")
        .replace("%2B", "+")
}

/// Builds the lookup URL for a term in the given pair. The pair orientation
/// is used exactly as stored; callers pick the direction.
pub fn lookup_url(pair: &LanguagePair, term: &str) -> String {
    format!(
        "http://{}{}.{}/?s={}",
        pair.first.abbrev,
        pair.second.abbrev,
        SITE_DOMAIN,
        escape_search_term(term)
    )
}

/// One looked-up term with the matches found on its result page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub needle: String,
    pub matches: Vec<String>,
    pub pair: LanguagePair,
}

/// Parses the result page of a lookup.
///
/// TODO: parse the result-table rows once the interactive lookup UI lands.
pub fn find_results(_html: &str) -> Result<Option<LookupResult>, DictError> {
    Ok(None)
}
