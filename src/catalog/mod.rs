//! Message catalog wiring.
//!
//! `identity` defines the validated key and parameter-type primitives,
//! `model` holds the immutable catalog plus its loaders, `properties`
//! parses the java-properties text form, and `schema` guards the JSON form
//! against the schema shipped under `schema/`.

pub mod identity;
pub mod model;
pub mod properties;
pub(crate) mod schema;

pub use identity::{MessageKey, ParamType};
pub use model::{
    CATALOG_SCHEMA_VERSION, CatalogError, MessageCatalog, load_json_catalog,
    load_properties_catalog, parse_json_catalog, parse_properties_catalog,
};
pub use properties::parse_properties;
