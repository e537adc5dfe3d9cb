//! Descriptor model handed to the downstream source emitter.
//!
//! Everything here is immutable once built and serializes to the JSON shape
//! the emitter's template context consumes. One generated artifact per
//! component (`<ComponentName>Messages.<ext>`) is the emitter's concern, not
//! this crate's.

use crate::catalog::identity::{MessageKey, ParamType};
use serde::{Deserialize, Serialize};

/// One positional parameter discovered in a format string.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// 1-based appearance order within the format string, not the numeric
    /// token written inside the braces.
    pub position: usize,
    #[serde(rename = "type")]
    pub ty: ParamType,
    /// Generated argument name: `param1`, `param2`, ...
    pub name: String,
}

impl ParameterDescriptor {
    pub(crate) fn new(position: usize, ty: ParamType) -> Self {
        Self {
            position,
            ty,
            name: format!("param{position}"),
        }
    }
}

/// Fully resolved form of one catalog entry.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MessageDescriptor {
    pub key: MessageKey,
    /// Code-safe identifier derived from the key (`BRK-1001` -> `BRK_1001`).
    pub symbol: String,
    /// Raw format string, preserved verbatim for docs and echoing.
    pub format: String,
    pub parameters: Vec<ParameterDescriptor>,
}

/// All messages claimed by one component prefix, in stable key order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    pub name: String,
    pub messages: Vec<MessageDescriptor>,
}
