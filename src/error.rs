use thiserror::Error;

/// Everything that can go wrong between fetching the language page and
/// serving a cached catalog. Transport and IO errors pass through unchanged.
#[derive(Debug, Error)]
pub enum DictError {
    /// The caller handed over an absent document, e.g. a failed fetch passed
    /// straight through.
    #[error("no document given to parse")]
    InvalidInput,

    /// The page no longer matches the structural selectors. The id pins down
    /// which assumption broke: 1 = language link without an href,
    /// 2 = link not in the pair-subdomain format.
    #[error(
        "there was an error parsing the page; are you using the latest version? (error id: {id})"
    )]
    Parsing { id: u32 },

    /// Malformed internal call, e.g. the wrong number of abbreviation codes.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A pair label that does not split into two names.
    #[error("unknown language label format: '{0}'; are you using the latest version?")]
    LabelFormat(String),

    /// The on-disk catalog was written by a different format version.
    #[error("the language pair file needs updating")]
    OutdatedCache,

    #[error("could not decode the language pair file: {0}")]
    Decode(String),

    #[error("could not encode the language catalog: {0}")]
    Encode(String),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
