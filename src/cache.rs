use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::DictError;
use crate::languages::LanguagePair;

/// Format version of the on-disk catalog. Bump whenever the record shape
/// changes; readers reject any other version outright. Version 1 stored bare
/// name strings instead of structured languages, which would decode without
/// error and produce wrong data, so there is no migration path.
pub const CATALOG_FORMAT_VERSION: i64 = 2;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CatalogRecord {
    version: i64,
    pairs: Vec<LanguagePair>,
}

/// Writes the catalog as a single newline-terminated JSON record. The record
/// is encoded in full before anything touches the writer, so a failed encode
/// leaves the destination untouched.
pub fn save_pairs<W: Write>(pairs: &[LanguagePair], writer: &mut W) -> Result<(), DictError> {
    let record = CatalogRecord {
        version: CATALOG_FORMAT_VERSION,
        pairs: pairs.to_vec(),
    };
    let mut encoded =
        serde_json::to_vec(&record).map_err(|err| DictError::Encode(err.to_string()))?;
    encoded.push(b'\n');

    writer.write_all(&encoded)?;
    writer.flush()?;
    debug!(pairs = pairs.len(), "saved language catalog");
    Ok(())
}

/// Reads one catalog record. A record written under any other format version
/// is rejected as a whole, even when its JSON is well-formed; the caller
/// treats that as a cold cache and re-fetches, it is never migrated in place.
pub fn load_pairs<R: Read>(reader: R) -> Result<Vec<LanguagePair>, DictError> {
    let value: Value =
        serde_json::from_reader(reader).map_err(|err| DictError::Decode(err.to_string()))?;

    let version = value
        .get("Version")
        .and_then(Value::as_i64)
        .ok_or_else(|| DictError::Decode("record has no readable Version field".to_string()))?;
    if version != CATALOG_FORMAT_VERSION {
        return Err(DictError::OutdatedCache);
    }

    let record: CatalogRecord =
        serde_json::from_value(value).map_err(|err| DictError::Decode(err.to_string()))?;
    debug!(pairs = record.pairs.len(), "loaded language catalog");
    Ok(record.pairs)
}
