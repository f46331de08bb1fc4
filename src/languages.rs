use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DictError;

/// Separator between the two names in a browse-page label such as
/// "English – Slovak". This is an en dash (U+2013), not an ASCII hyphen.
const LABEL_SEPARATOR: char = '\u{2013}';

/// A language as dict.cc presents it: a display name and the two-letter
/// abbreviation used in pair subdomains (the "en" in ende.dict.cc).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Language {
    pub name: String,
    pub abbrev: String,
}

impl Language {
    pub fn new(name: impl Into<String>, abbrev: impl Into<String>) -> Self {
        Language {
            name: name.into(),
            abbrev: abbrev.into(),
        }
    }

    /// Builds a language from a display name alone. Browse-page labels carry
    /// no code, so the abbreviation is approximated as the lowercase of the
    /// name's first two characters.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        let abbrev = name.chars().take(2).flat_map(char::to_lowercase).collect();
        Language {
            name: name.to_string(),
            abbrev,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Two languages the site translates between. Orientation carries no
/// meaning; `same` compares pairs as sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LanguagePair {
    pub first: Language,
    pub second: Language,
}

impl LanguagePair {
    pub fn new(first: Language, second: Language) -> Self {
        LanguagePair { first, second }
    }

    /// Whether both pairs cover the same two languages, ignoring order.
    pub fn same(&self, other: &LanguagePair) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }

    /// Parses a pair from a browse-page label such as "English – Slovak",
    /// approximating both abbreviations from the names.
    pub fn from_label(label: &str) -> Result<LanguagePair, DictError> {
        let (first, second) = split_label(label)?;
        Ok(LanguagePair::new(
            Language::from_name(&first),
            Language::from_name(&second),
        ))
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} - {}}}", self.first, self.second)
    }
}

/// Splits a two-part label on the en-dash separator, trimming both names.
pub fn split_label(label: &str) -> Result<(String, String), DictError> {
    let mut parts = label.split(LABEL_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(first), Some(second), None) => {
            Ok((first.trim().to_string(), second.trim().to_string()))
        }
        _ => Err(DictError::LabelFormat(label.to_string())),
    }
}

/// Decides which of the two codes taken from a pair subdomain belongs to the
/// counterpart of `anchor`. The anchor's own code should always be one of
/// the two; when it is not, the first code wins, since such mismatches are
/// pre-existing site quirks rather than cause for failure.
pub fn resolve_abbrev<'a>(anchor: &Language, codes: &'a [String]) -> Result<&'a str, DictError> {
    let [first, second] = codes else {
        return Err(DictError::InvalidArgument(format!(
            "expected exactly two abbreviations, got {codes:?}"
        )));
    };

    if *first == anchor.abbrev {
        Ok(second)
    } else {
        Ok(first)
    }
}
