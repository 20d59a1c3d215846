// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for enumcodec.
//!
//! Data-shaped problems (unknown enumerators, missing wire mappings) never
//! surface here: the converters absorb them into the undefined sentinel or a
//! derived name. What remains are malformed tokens, misuse of the registry and
//! configuration loading failures.

use thiserror::Error;

/// Errors that can occur while converting enum tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A converter was requested for a type the registry cannot handle.
    ///
    /// This is a contract violation by the caller, not a data error.
    #[error("Unsupported type: '{type_name}' is neither a registered enum nor an optional enum")]
    UnsupportedType {
        /// Name of the requested type
        type_name: String,
    },

    /// A null token reached a converter for a non-optional enum.
    #[error("Expected a non-null '{type_name}' value, found null")]
    UnexpectedNull {
        /// Enum type being decoded
        type_name: String,
    },

    /// The token has a shape no enum converter accepts (float, bool, object...).
    #[error("Invalid token for '{type_name}': {reason}")]
    InvalidToken {
        /// Enum type being decoded
        type_name: String,
        /// What was wrong with the token
        reason: String,
    },

    /// Strict parsing found no enumerator with the given name.
    #[error("Unknown enumerator '{value}' for '{type_name}'")]
    UnknownEnumerator {
        /// Enum type being parsed
        type_name: String,
        /// The text that did not match
        value: String,
    },

    /// Parse error in configuration or JSON input
    #[error("Parse error in {context}: {message}")]
    ParseError {
        /// What was being parsed
        context: String,
        /// Error message
        message: String,
    },

    /// Invariant violation inside the registry
    #[error("Invariant violation: {invariant}")]
    InvariantViolation {
        /// Description of the invariant that was violated
        invariant: String,
    },
}

impl CodecError {
    /// Create an unsupported type error.
    pub fn unsupported_type(type_name: impl Into<String>) -> Self {
        CodecError::UnsupportedType {
            type_name: type_name.into(),
        }
    }

    /// Create an unexpected null error.
    pub fn unexpected_null(type_name: impl Into<String>) -> Self {
        CodecError::UnexpectedNull {
            type_name: type_name.into(),
        }
    }

    /// Create an invalid token error.
    pub fn invalid_token(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        CodecError::InvalidToken {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown enumerator error.
    pub fn unknown_enumerator(type_name: impl Into<String>, value: impl Into<String>) -> Self {
        CodecError::UnknownEnumerator {
            type_name: type_name.into(),
            value: value.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(context: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::ParseError {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create an invariant violation error.
    pub fn invariant_violation(invariant: impl Into<String>) -> Self {
        CodecError::InvariantViolation {
            invariant: invariant.into(),
        }
    }

    /// Returns `true` for errors caused by caller misuse rather than input data.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            CodecError::UnsupportedType { .. } | CodecError::InvariantViolation { .. }
        )
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            CodecError::UnsupportedType { type_name } => vec![("type", type_name.clone())],
            CodecError::UnexpectedNull { type_name } => vec![("type", type_name.clone())],
            CodecError::InvalidToken { type_name, reason } => {
                vec![("type", type_name.clone()), ("reason", reason.clone())]
            }
            CodecError::UnknownEnumerator { type_name, value } => {
                vec![("type", type_name.clone()), ("value", value.clone())]
            }
            CodecError::ParseError { context, message } => {
                vec![("context", context.clone()), ("message", message.clone())]
            }
            CodecError::InvariantViolation { invariant } => {
                vec![("invariant", invariant.clone())]
            }
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::parse("json", err.to_string())
    }
}

impl From<toml::de::Error> for CodecError {
    fn from(err: toml::de::Error) -> Self {
        CodecError::parse("toml", err.to_string())
    }
}

/// Result type for enumcodec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_type_error() {
        let err = CodecError::unsupported_type("u32");
        assert!(matches!(err, CodecError::UnsupportedType { .. }));
        assert_eq!(
            err.to_string(),
            "Unsupported type: 'u32' is neither a registered enum nor an optional enum"
        );
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_unexpected_null_error() {
        let err = CodecError::unexpected_null("Status");
        assert_eq!(err.to_string(), "Expected a non-null 'Status' value, found null");
        assert!(!err.is_contract_violation());
    }

    #[test]
    fn test_invalid_token_error() {
        let err = CodecError::invalid_token("Status", "float 1.5 is not an ordinal");
        assert_eq!(
            err.to_string(),
            "Invalid token for 'Status': float 1.5 is not an ordinal"
        );
    }

    #[test]
    fn test_unknown_enumerator_error() {
        let err = CodecError::unknown_enumerator("Products", "mortgage");
        assert_eq!(err.to_string(), "Unknown enumerator 'mortgage' for 'Products'");
    }

    #[test]
    fn test_parse_error() {
        let err = CodecError::parse("toml", "expected a table");
        assert_eq!(err.to_string(), "Parse error in toml: expected a table");
    }

    #[test]
    fn test_invariant_violation_error() {
        let err = CodecError::invariant_violation("cached converter has wrong type");
        assert_eq!(
            err.to_string(),
            "Invariant violation: cached converter has wrong type"
        );
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_log_fields_invalid_token() {
        let err = CodecError::invalid_token("Status", "bool");
        let fields = err.log_fields();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0], ("type", "Status".to_string()));
        assert_eq!(fields[1], ("reason", "bool".to_string()));
    }

    #[test]
    fn test_log_fields_unknown_enumerator() {
        let err = CodecError::unknown_enumerator("Products", "x");
        let fields = err.log_fields();
        assert_eq!(fields[0].0, "type");
        assert_eq!(fields[1].0, "value");
        assert_eq!(fields[1].1, "x");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CodecError = json_err.into();
        assert!(matches!(err, CodecError::ParseError { ref context, .. } if context == "json"));
    }
}
