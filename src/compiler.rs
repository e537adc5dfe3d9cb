//! Partitions the catalog by component prefix and compiles descriptor sets.
//!
//! The component table is fixed at build time; output component order follows
//! the table, message order within a component follows the catalog's stable
//! key order, so compiling the same catalog twice yields byte-identical
//! results whatever order the source listed its entries in.

use crate::catalog::identity::MessageKey;
use crate::catalog::model::MessageCatalog;
use crate::descriptor::{ComponentDescriptor, MessageDescriptor};
use crate::format::{InvalidParameterSpecifier, parse_format};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Component declaration: display name plus its 3-character key prefix.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ComponentSpec {
    pub name: &'static str,
    pub prefix: &'static str,
}

/// The declared components, in emission order. Prefixes are pairwise
/// distinct and exactly three characters.
pub const COMPONENT_SPECS: [ComponentSpec; 10] = [
    ComponentSpec { name: "Broker", prefix: "BRK" },
    ComponentSpec { name: "ManagementConsole", prefix: "MNG" },
    ComponentSpec { name: "VirtualHost", prefix: "VHT" },
    ComponentSpec { name: "MessageStore", prefix: "MST" },
    ComponentSpec { name: "Connection", prefix: "CON" },
    ComponentSpec { name: "Channel", prefix: "CHN" },
    ComponentSpec { name: "Queue", prefix: "QUE" },
    ComponentSpec { name: "Exchange", prefix: "EXH" },
    ComponentSpec { name: "Binding", prefix: "BND" },
    ComponentSpec { name: "Subscription", prefix: "SUB" },
];

/// One message that failed format validation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MessageFailure {
    pub key: MessageKey,
    pub error: InvalidParameterSpecifier,
}

/// Aggregate of every format validation failure across the whole catalog.
///
/// Compilation is all-or-nothing: the caller gets either a complete
/// descriptor model or this full list, never a partial result.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{}", render_failures(.failures))]
pub struct CompileError {
    pub failures: Vec<MessageFailure>,
}

fn render_failures(failures: &[MessageFailure]) -> String {
    let mut out = format!(
        "message catalog compilation failed, {} invalid message(s):",
        failures.len()
    );
    for failure in failures {
        out.push_str(&format!("\n  {}: {}", failure.key, failure.error));
    }
    out
}

/// Complete compiler output: descriptors plus catalog diagnostics.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Compilation {
    /// One entry per declared component, in table order; components with no
    /// matching keys are present with empty `messages`.
    pub components: Vec<ComponentDescriptor>,
    /// Catalog keys no declared component claimed, in key order. Reported as
    /// a warning by the tools, never fatal.
    pub unmatched: Vec<MessageKey>,
}

/// Catalog entries grouped by component, parallel to the spec slice.
#[derive(Debug)]
pub struct Partition<'a> {
    pub matched: Vec<Vec<(&'a MessageKey, &'a str)>>,
    pub unmatched: Vec<&'a MessageKey>,
}

/// Group catalog entries by component prefix.
///
/// Keys arrive in the catalog's stable order, so each component's slice is
/// already sorted lexicographically. Prefixes are disjoint; the first match
/// wins.
pub fn partition<'a>(catalog: &'a MessageCatalog, specs: &[ComponentSpec]) -> Partition<'a> {
    let mut matched: Vec<Vec<(&MessageKey, &str)>> = vec![Vec::new(); specs.len()];
    let mut unmatched = Vec::new();
    for (key, format) in catalog.messages() {
        match specs.iter().position(|spec| key.0.starts_with(spec.prefix)) {
            Some(slot) => matched[slot].push((key, format)),
            None => unmatched.push(key),
        }
    }
    Partition { matched, unmatched }
}

/// Compile the catalog into per-component descriptor sets.
///
/// Drives the declared component table in order, parses every matched format
/// string, and collects all validation failures before reporting any of
/// them.
pub fn compile(catalog: &MessageCatalog) -> Result<Compilation, CompileError> {
    let parts = partition(catalog, &COMPONENT_SPECS);
    let mut components = Vec::with_capacity(COMPONENT_SPECS.len());
    let mut failures = Vec::new();
    for (spec, entries) in COMPONENT_SPECS.iter().zip(&parts.matched) {
        let mut messages = Vec::with_capacity(entries.len());
        for (key, format) in entries {
            match parse_format(format) {
                Ok(parameters) => messages.push(MessageDescriptor {
                    key: (*key).clone(),
                    symbol: key.symbol(),
                    format: (*format).to_string(),
                    parameters,
                }),
                Err(error) => failures.push(MessageFailure {
                    key: (*key).clone(),
                    error,
                }),
            }
        }
        components.push(ComponentDescriptor {
            name: spec.name.to_string(),
            messages,
        });
    }
    if !failures.is_empty() {
        return Err(CompileError { failures });
    }
    Ok(Compilation {
        components,
        unmatched: parts.unmatched.into_iter().cloned().collect(),
    })
}
