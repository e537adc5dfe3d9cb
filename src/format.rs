//! Format-string parameter discovery and type inference.
//!
//! Message templates use `MessageFormat`-style placeholders: `{0}`,
//! `{1,number}`, `{2,number,integer}`. The parser records one parameter per
//! placeholder in appearance order and infers `Number` when the specifier
//! after the comma mentions `number`; any other specifier, and any
//! placeholder that never closes its brace, is rejected.

use crate::catalog::identity::ParamType;
use crate::descriptor::ParameterDescriptor;
use thiserror::Error;

/// A placeholder carried a type specifier the compiler does not recognize,
/// or was left unterminated.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid parameter specifier ({specifier}) index ({index}) in message: {format}")]
pub struct InvalidParameterSpecifier {
    /// Offending specifier text, including the leading comma when present.
    /// For an unterminated placeholder this is the rest of the segment.
    pub specifier: String,
    /// 0-based index of the parameter within the message.
    pub index: usize,
    /// The full format string, echoed so reports are actionable.
    pub format: String,
}

/// Discover the positional parameters of a message template.
///
/// Parameters are ordered by appearance; a template without placeholders
/// yields an empty list. Positions count placeholders left to right and
/// ignore the numeric token inside the braces, matching the behavior the
/// generated method signatures have always had.
pub fn parse_format(
    format: &str,
) -> Result<Vec<ParameterDescriptor>, InvalidParameterSpecifier> {
    let mut parameters = Vec::new();
    // Everything before the first '{' is literal text; each later split
    // segment starts with one placeholder body.
    for (index, segment) in format.split('{').skip(1).enumerate() {
        let Some(close) = segment.find('}') else {
            return Err(InvalidParameterSpecifier {
                specifier: segment.to_string(),
                index,
                format: format.to_string(),
            });
        };
        let ty = match segment.find(',') {
            Some(comma) if comma < close => {
                let specifier = &segment[comma..close];
                if specifier.contains("number") {
                    ParamType::Number
                } else {
                    return Err(InvalidParameterSpecifier {
                        specifier: specifier.to_string(),
                        index,
                        format: format.to_string(),
                    });
                }
            }
            // No comma inside the braces: a bare positional parameter.
            _ => ParamType::String,
        };
        parameters.push(ParameterDescriptor::new(index + 1, ty));
    }
    Ok(parameters)
}
