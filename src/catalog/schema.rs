//! JSON Schema validation for the JSON catalog form.
//!
//! The schema ships with the crate under `schema/` and pins the accepted
//! `schema_version` plus the key charset, so malformed catalogs are rejected
//! with precise locations before deserialization.

use anyhow::{Context, Result, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

fn canonical_catalog_schema_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("schema/message_catalog.schema.json")
}

/// Validate a parsed catalog document against the shipped schema.
pub(crate) fn validate_catalog_value(value: &Value) -> Result<()> {
    let path = canonical_catalog_schema_path();
    let schema: Value = serde_json::from_reader(BufReader::new(
        File::open(&path).with_context(|| format!("opening catalog schema {}", path.display()))?,
    ))
    .with_context(|| format!("parsing catalog schema {}", path.display()))?;

    let compiled = match JSONSchema::compile(&schema) {
        Ok(compiled) => compiled,
        Err(err) => bail!("compiling catalog schema {}: {err}", path.display()),
    };
    if let Err(errors) = compiled.validate(value) {
        let details = errors
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        bail!("message catalog failed schema validation:\n{details}");
    }
    Ok(())
}
