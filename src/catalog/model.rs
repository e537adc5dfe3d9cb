//! In-memory message catalog and its two on-disk forms.
//!
//! The catalog is a flat mapping from message key to raw format string.
//! Entries come either from a java-properties text file (the format message
//! bundles are maintained in) or from a schema-validated JSON document. Both
//! loaders funnel through [`MessageCatalog::from_entries`], which rejects
//! malformed and duplicate keys before the compiler ever sees them.

use crate::catalog::identity::MessageKey;
use crate::catalog::properties::parse_properties;
use crate::catalog::schema::validate_catalog_value;
use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Schema version accepted for the JSON catalog form.
pub const CATALOG_SCHEMA_VERSION: &str = "message_catalog_v1";

/// Fatal catalog construction errors, raised before any parsing begins.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum CatalogError {
    #[error("duplicate message key {0}")]
    DuplicateKey(MessageKey),
    #[error("invalid message key {0:?}: keys may contain only ASCII letters, digits, and '-'")]
    InvalidKey(String),
}

/// Immutable mapping from message key to raw format string.
///
/// Backed by a `BTreeMap` so every downstream iteration is lexicographic by
/// key, whatever order the source file listed its entries in.
#[derive(Clone, Debug, Default)]
pub struct MessageCatalog {
    entries: BTreeMap<MessageKey, String>,
}

impl MessageCatalog {
    /// Build a catalog from raw `(key, format)` pairs.
    ///
    /// Fails on the first malformed or duplicate key; a catalog that loads is
    /// guaranteed to satisfy the key invariants for the rest of the pipeline.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, CatalogError> {
        let mut map = BTreeMap::new();
        for (key, format) in entries {
            let key = MessageKey(key);
            if !key.is_well_formed() {
                return Err(CatalogError::InvalidKey(key.0));
            }
            if map.insert(key.clone(), format).is_some() {
                return Err(CatalogError::DuplicateKey(key));
            }
        }
        Ok(Self { entries: map })
    }

    /// Iterates `(key, format)` pairs in stable key order.
    pub fn messages(&self) -> impl Iterator<Item = (&MessageKey, &str)> {
        self.entries.iter().map(|(key, format)| (key, format.as_str()))
    }

    /// Look up the raw format string for a key.
    pub fn get(&self, key: &MessageKey) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// On-disk shape of the JSON catalog form.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    schema_version: String,
    messages: BTreeMap<String, String>,
}

/// Parse the JSON catalog form, schema-validating it first.
pub fn parse_json_catalog(data: &str) -> Result<MessageCatalog> {
    let value: serde_json::Value =
        serde_json::from_str(data).context("catalog is not valid JSON")?;
    validate_catalog_value(&value)?;
    let file: CatalogFile =
        serde_json::from_value(value).context("catalog does not match the expected shape")?;
    ensure!(
        file.schema_version == CATALOG_SCHEMA_VERSION,
        "unsupported catalog schema_version '{}', expected '{}'",
        file.schema_version,
        CATALOG_SCHEMA_VERSION
    );
    Ok(MessageCatalog::from_entries(file.messages)?)
}

/// Parse the java-properties catalog form.
pub fn parse_properties_catalog(data: &str) -> Result<MessageCatalog> {
    let entries = parse_properties(data)?;
    Ok(MessageCatalog::from_entries(entries)?)
}

/// Read and parse a JSON catalog from disk.
pub fn load_json_catalog(path: &Path) -> Result<MessageCatalog> {
    let data =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_json_catalog(&data).with_context(|| format!("loading {}", path.display()))
}

/// Read and parse a properties catalog from disk.
pub fn load_properties_catalog(path: &Path) -> Result<MessageCatalog> {
    let data =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_properties_catalog(&data).with_context(|| format!("loading {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_sort_regardless_of_input_order() {
        let catalog = MessageCatalog::from_entries([
            ("QUE-1".to_string(), "queue".to_string()),
            ("BRK-2".to_string(), "late".to_string()),
            ("BRK-1".to_string(), "early".to_string()),
        ])
        .unwrap();
        let keys: Vec<&str> = catalog.messages().map(|(key, _)| key.0.as_str()).collect();
        assert_eq!(keys, ["BRK-1", "BRK-2", "QUE-1"]);
    }

    #[test]
    fn duplicate_keys_are_fatal() {
        let err = MessageCatalog::from_entries([
            ("BRK-1".to_string(), "one".to_string()),
            ("BRK-1".to_string(), "two".to_string()),
        ])
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateKey(MessageKey("BRK-1".to_string())));
    }

    #[test]
    fn malformed_keys_are_fatal() {
        let err = MessageCatalog::from_entries([("BRK 1".to_string(), "x".to_string())])
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidKey(key) if key == "BRK 1"));
    }

    #[test]
    fn json_form_round_trips() {
        let catalog = parse_json_catalog(
            r#"{"schema_version":"message_catalog_v1","messages":{"BRK-1001":"Startup : Version: {0} Build: {1}"}}"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.get(&MessageKey("BRK-1001".to_string())),
            Some("Startup : Version: {0} Build: {1}")
        );
    }

    #[test]
    fn json_form_rejects_bad_version_and_keys() {
        assert!(
            parse_json_catalog(r#"{"schema_version":"other_v9","messages":{}}"#).is_err()
        );
        assert!(
            parse_json_catalog(
                r#"{"schema_version":"message_catalog_v1","messages":{"BAD KEY":"x"}}"#
            )
            .is_err()
        );
        assert!(
            parse_json_catalog(
                r#"{"schema_version":"message_catalog_v1","messages":{"BRK-1":42}}"#
            )
            .is_err()
        );
    }
}
