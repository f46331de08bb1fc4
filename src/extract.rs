use std::sync::OnceLock;

use kuchiki::traits::TendrilSink;
use kuchiki::{ElementData, NodeDataRef, NodeRef};
use regex::Regex;
use tracing::debug;

use crate::error::DictError;
use crate::languages::{resolve_abbrev, Language, LanguagePair};

/// Row of the dict.cc front page holding the two language-link columns.
const PAIR_TABLE_SELECTOR: &str = "#maincontent table:nth-child(7) tr:nth-child(2)";
/// The column listing every language paired with English.
const ENGLISH_COLUMN_SELECTOR: &str = "td:nth-child(1) a";
/// The column listing every language paired with German.
const GERMAN_COLUMN_SELECTOR: &str = "td:nth-child(2) a";

/// Pair links point at subdomains like http://ende.dict.cc; the captures are
/// the two codes, anchor and counterpart in unspecified order.
const PAIR_LINK_PATTERN: &str = r"^http://([a-z]{2})([a-z]{2})\.dict\.cc";
/// The one non-pair link in the table: the site's own home page.
const HOME_LINK_PATTERN: &str = r"^http://www\.dict\.cc";

static PAIR_LINK_REGEX: OnceLock<Regex> = OnceLock::new();
static HOME_LINK_REGEX: OnceLock<Regex> = OnceLock::new();

fn pair_link_regex() -> &'static Regex {
    PAIR_LINK_REGEX.get_or_init(|| Regex::new(PAIR_LINK_PATTERN).unwrap())
}

fn home_link_regex() -> &'static Regex {
    HOME_LINK_REGEX.get_or_init(|| Regex::new(HOME_LINK_PATTERN).unwrap())
}

pub fn english() -> Language {
    Language::new("English", "en")
}

pub fn german() -> Language {
    Language::new("Deutsch", "de")
}

/// Column selectors and the language each column is anchored on, in the
/// order the columns appear on the page. Extraction order follows this
/// table, so the cached byte output stays stable across runs.
pub fn default_anchors() -> Vec<(String, Language)> {
    vec![
        (ENGLISH_COLUMN_SELECTOR.to_string(), english()),
        (GERMAN_COLUMN_SELECTOR.to_string(), german()),
    ]
}

/// Whether pairs that are exact duplicates (by [`LanguagePair::same`]) of an
/// earlier entry are dropped. Near-duplicates differing in name casing or
/// codes are kept either way; the page itself contains them and the catalog
/// is no smarter than its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupePolicy {
    #[default]
    ExactOnly,
    Keep,
}

/// Extracts every language pair linked from the front page. The result is
/// seeded with the German–English pair, which the page never lists
/// explicitly. The first structural mismatch aborts the whole extraction;
/// a partial catalog would be misleading.
pub fn language_pairs(
    html: Option<&str>,
    anchors: &[(String, Language)],
    policy: DedupePolicy,
) -> Result<Vec<LanguagePair>, DictError> {
    let Some(html) = html else {
        return Err(DictError::InvalidInput);
    };
    let document = kuchiki::parse_html().one(html);
    let bases = select_all(&document, PAIR_TABLE_SELECTOR)?;

    let mut pairs = vec![LanguagePair::new(german(), english())];
    for (selector, anchor) in anchors {
        for base in &bases {
            for node in select_all(base.as_node(), selector)? {
                if let Some(pair) = pair_from_link(&node, anchor)? {
                    pairs.push(pair);
                }
            }
        }
    }

    if policy == DedupePolicy::ExactOnly {
        pairs = dedupe_exact(pairs);
    }
    debug!(pairs = pairs.len(), "extracted language pairs");
    Ok(pairs)
}

/// Turns one language-link node into a pair with the column's anchor.
/// Returns `Ok(None)` for the home-page link, which carries no pair.
fn pair_from_link(
    node: &NodeDataRef<ElementData>,
    anchor: &Language,
) -> Result<Option<LanguagePair>, DictError> {
    let attributes = node.attributes.borrow();
    let Some(link) = attributes.get("href") else {
        return Err(DictError::Parsing { id: 1 });
    };

    let Some(captures) = pair_link_regex().captures(link) else {
        if home_link_regex().is_match(link) {
            return Ok(None);
        }
        return Err(DictError::Parsing { id: 2 });
    };

    let codes = [captures[1].to_string(), captures[2].to_string()];
    let abbrev = resolve_abbrev(anchor, &codes)?;
    let name = node.as_node().text_contents().trim().to_string();
    let counterpart = Language::new(name, abbrev);
    Ok(Some(LanguagePair::new(anchor.clone(), counterpart)))
}

fn select_all(node: &NodeRef, selector: &str) -> Result<Vec<NodeDataRef<ElementData>>, DictError> {
    let matched = node
        .select(selector)
        .map_err(|()| DictError::InvalidArgument(format!("invalid selector '{selector}'")))?;
    Ok(matched.collect())
}

fn dedupe_exact(pairs: Vec<LanguagePair>) -> Vec<LanguagePair> {
    let mut kept: Vec<LanguagePair> = Vec::with_capacity(pairs.len());
    for pair in pairs {
        if !kept.iter().any(|existing| existing.same(&pair)) {
            kept.push(pair);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::browse_page;

    fn extract(html: &str) -> Result<Vec<LanguagePair>, DictError> {
        language_pairs(Some(html), &default_anchors(), DedupePolicy::ExactOnly)
    }

    #[test]
    fn extracts_pairs_in_document_order_with_the_seed_first() {
        let html = browse_page(
            &[
                ("http://enbg.dict.cc/", "Bulgarian"),
                ("http://encs.dict.cc/", " Czech "),
            ],
            &[("http://debg.dict.cc/", "Bulgarisch")],
        );
        let pairs = extract(&html).expect("extract");

        let expected = vec![
            LanguagePair::new(german(), english()),
            LanguagePair::new(english(), Language::new("Bulgarian", "bg")),
            LanguagePair::new(english(), Language::new("Czech", "cs")),
            LanguagePair::new(german(), Language::new("Bulgarisch", "bg")),
        ];
        assert_eq!(pairs, expected);
    }

    #[test]
    fn fifty_links_yield_fifty_one_pairs() {
        // 25 links per column, all with distinct counterpart codes.
        let codes: Vec<String> = (b'a'..=b'y').map(|c| (c as char).to_string().repeat(2)).collect();
        let english_links: Vec<(String, String)> = codes
            .iter()
            .map(|c| (format!("http://en{c}.dict.cc/"), format!("Lang {c}")))
            .collect();
        let german_links: Vec<(String, String)> = codes
            .iter()
            .map(|c| (format!("http://de{c}.dict.cc/"), format!("Sprache {c}")))
            .collect();

        fn as_refs(links: &[(String, String)]) -> Vec<(&str, &str)> {
            links
                .iter()
                .map(|(href, label)| (href.as_str(), label.as_str()))
                .collect::<Vec<_>>()
        }
        let html = browse_page(&as_refs(&english_links), &as_refs(&german_links));
        let pairs = extract(&html).expect("extract");
        assert_eq!(pairs.len(), 51);
    }

    #[test]
    fn absent_document_fails_before_parsing() {
        let err = language_pairs(None, &default_anchors(), DedupePolicy::ExactOnly)
            .expect_err("should fail");
        assert!(matches!(err, DictError::InvalidInput));
    }

    #[test]
    fn link_without_href_aborts_with_id_1() {
        let html = browse_page(&[("http://enbg.dict.cc/", "Bulgarian")], &[])
            .replace("<td></td>", "<td><a>Bosnisch</a></td>");
        let err = extract(&html).expect_err("should fail");
        assert!(matches!(err, DictError::Parsing { id: 1 }));
    }

    #[test]
    fn malformed_link_aborts_with_id_2_and_no_pairs() {
        let html = browse_page(
            &[
                ("http://enbg.dict.cc/", "Bulgarian"),
                ("http://dict.cc/about", "About"),
            ],
            &[],
        );
        let err = extract(&html).expect_err("should fail");
        assert!(matches!(err, DictError::Parsing { id: 2 }));
    }

    #[test]
    fn home_page_links_are_skipped_silently() {
        let html = browse_page(
            &[
                ("http://enbg.dict.cc/", "Bulgarian"),
                ("http://www.dict.cc/?action=home", "dict.cc"),
            ],
            &[],
        );
        let pairs = extract(&html).expect("extract");
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn dedupe_policy_is_explicit() {
        let html = browse_page(
            &[
                ("http://enbg.dict.cc/", "Bulgarian"),
                ("http://enbg.dict.cc/", "Bulgarian"),
            ],
            &[],
        );

        let deduped = extract(&html).expect("extract");
        assert_eq!(deduped.len(), 2);

        let kept = language_pairs(Some(&html), &default_anchors(), DedupePolicy::Keep)
            .expect("extract");
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn near_duplicates_differing_in_name_are_kept() {
        let html = browse_page(
            &[("http://enbg.dict.cc/", "Bulgarian")],
            &[("http://debg.dict.cc/", "Bulgarisch")],
        );
        let pairs = extract(&html).expect("extract");
        // Same counterpart code under both anchors, but different pairs.
        assert_eq!(pairs.len(), 3);
    }
}
