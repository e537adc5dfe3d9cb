//! Build-time compiler for the broker's log-message catalog.
//!
//! Human-maintained message templates live in a flat catalog keyed by a
//! 3-character component prefix (`BRK-1001 = Startup : Version: {0} Build:
//! {1}`). This crate partitions that catalog into the declared components,
//! parses every format string to discover typed positional parameters, and
//! produces the descriptor model an external emitter renders into one
//! generated source artifact per component. Emission is all-or-nothing: the
//! compiler returns either a complete model or the full list of validation
//! failures, never a partial result.

pub mod catalog;
pub mod cli_support;
pub mod compiler;
pub mod context;
pub mod descriptor;
pub mod format;

pub use catalog::{
    CATALOG_SCHEMA_VERSION, CatalogError, MessageCatalog, MessageKey, ParamType,
    load_json_catalog, load_properties_catalog, parse_json_catalog, parse_properties,
    parse_properties_catalog,
};
pub use compiler::{
    COMPONENT_SPECS, Compilation, CompileError, ComponentSpec, MessageFailure, Partition,
    compile, partition,
};
pub use context::{ContextGuard, LogContext};
pub use descriptor::{ComponentDescriptor, MessageDescriptor, ParameterDescriptor};
pub use format::{InvalidParameterSpecifier, parse_format};
