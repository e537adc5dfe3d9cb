use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Catalog key for a single message (e.g., `BRK-1001`).
///
/// The leading three characters carry the component prefix used for
/// partitioning. Keys are restricted to ASCII letters, digits, and `-` so the
/// derived [`MessageKey::symbol`] is always a legal identifier in the
/// emission target; `MessageCatalog` enforces the rule before any parsing
/// happens.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageKey(pub String);

impl MessageKey {
    /// True when the key satisfies the catalog charset rule.
    pub fn is_well_formed(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
    }

    /// Code-safe identifier for generated sources: `-` becomes `_`.
    pub fn symbol(&self) -> String {
        self.0.replace('-', "_")
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Inferred type of one positional format-string parameter.
///
/// `Number` is the only non-default type the template syntax can request;
/// everything else stays a `String`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParamType {
    String,
    Number,
}

const PARAM_TYPE_VARIANTS: &[&str] = &["String", "Number"];

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::String => "String",
            ParamType::Number => "Number",
        }
    }
}

impl Serialize for ParamType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ParamType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        match value.as_str() {
            "String" => Ok(ParamType::String),
            "Number" => Ok(ParamType::Number),
            other => Err(serde::de::Error::unknown_variant(other, PARAM_TYPE_VARIANTS)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_replaces_dashes() {
        assert_eq!(MessageKey("BRK-1001".to_string()).symbol(), "BRK_1001");
        assert_eq!(MessageKey("MNG-1-2".to_string()).symbol(), "MNG_1_2");
        assert_eq!(MessageKey("PLAIN".to_string()).symbol(), "PLAIN");
    }

    #[test]
    fn well_formed_keys() {
        assert!(MessageKey("BRK-1001".to_string()).is_well_formed());
        assert!(MessageKey("abc123".to_string()).is_well_formed());
        assert!(!MessageKey(String::new()).is_well_formed());
        assert!(!MessageKey("BRK 1001".to_string()).is_well_formed());
        assert!(!MessageKey("BRK.1001".to_string()).is_well_formed());
        assert!(!MessageKey("BRK_1001".to_string()).is_well_formed());
    }

    #[test]
    fn param_type_round_trips() {
        let json = serde_json::to_string(&ParamType::Number).unwrap();
        assert_eq!(json, "\"Number\"");
        let back: ParamType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ParamType::Number);

        assert!(serde_json::from_str::<ParamType>("\"Currency\"").is_err());
    }
}
