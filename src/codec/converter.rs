// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Enum converter for non-optional enum types.
//!
//! # Decode
//!
//! 1. An integer token is the enumerator's ordinal.
//! 2. A text token is matched, in order, against declared names (exact, then
//!    case-insensitive) and wire strings (exact, then case-insensitive). A text
//!    token that is itself an integer is treated like step 1.
//! 3. Anything unmatched becomes [`WireEnum::UNDEFINED`]. The protocol can add
//!    enumerators before local types know them; one new value must not fail a
//!    whole response.
//!
//! # Encode
//!
//! Always emits a text token: the canonical wire string, or the lower-cased
//! declared name when the mapping has no entry.

use std::any::Any;
use std::sync::Arc;

use super::descriptor::WireEnum;
use super::dynamic::{DynEnumConverter, EnumValue, TypeKey};
use super::resolver::{WireMapping, WireNameResolver};
use crate::core::{
    CodecConfig, CodecError, FallbackLogLevel, NumericTokenPolicy, Result, WireToken,
};

/// Bidirectional converter between `E` and wire tokens.
#[derive(Debug, Clone)]
pub struct EnumConverter<E: WireEnum> {
    mapping: Arc<WireMapping<E>>,
    config: CodecConfig,
}

impl<E: WireEnum> EnumConverter<E> {
    /// Create a converter, resolving the wire mapping of `E`.
    pub fn new(config: CodecConfig) -> Self {
        Self::with_mapping(Arc::new(WireNameResolver::resolve::<E>()), config)
    }

    /// Create a converter over an already resolved mapping.
    pub fn with_mapping(mapping: Arc<WireMapping<E>>, config: CodecConfig) -> Self {
        Self { mapping, config }
    }

    /// The wire mapping used by this converter.
    pub fn mapping(&self) -> &WireMapping<E> {
        &self.mapping
    }

    /// The configuration this converter was built with.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Decode a token.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnexpectedNull`] for [`WireToken::Null`]. Unknown
    /// tokens are not errors.
    pub fn decode(&self, token: &WireToken) -> Result<E> {
        match token {
            WireToken::Int(ordinal) => Ok(self.decode_ordinal(*ordinal)),
            WireToken::Text(text) => Ok(self.decode_str(text)),
            WireToken::Null => Err(CodecError::unexpected_null(E::TYPE_NAME)),
        }
    }

    /// Decode a JSON scalar.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidToken`] for floats, booleans, arrays and
    /// objects, and [`CodecError::UnexpectedNull`] for `null`.
    pub fn decode_json(&self, value: &serde_json::Value) -> Result<E> {
        let token = WireToken::from_json(value).map_err(|err| match err {
            CodecError::ParseError { message, .. } => {
                CodecError::invalid_token(E::TYPE_NAME, message)
            }
            other => other,
        })?;
        self.decode(&token)
    }

    /// Decode a text token.
    pub fn decode_str(&self, text: &str) -> E {
        if let Some(value) = self.match_text(text) {
            return value;
        }

        if self.config.numeric_tokens == NumericTokenPolicy::Ordinal {
            if let Ok(ordinal) = text.parse::<i64>() {
                return self.decode_ordinal(ordinal);
            }
        }

        self.fallback(text)
    }

    /// Decode an integer token.
    ///
    /// A Rust enum cannot hold an undeclared discriminant, so an ordinal with no
    /// enumerator decodes to `UNDEFINED` instead of being passed through.
    pub fn decode_ordinal(&self, ordinal: i64) -> E {
        if self.config.numeric_tokens == NumericTokenPolicy::Ignore {
            return self.fallback(&ordinal.to_string());
        }

        match self.mapping.by_ordinal(ordinal) {
            Some(value) => value,
            None => self.fallback(&ordinal.to_string()),
        }
    }

    /// Encode an enumerator as a text token.
    pub fn encode(&self, value: E) -> WireToken {
        WireToken::Text(self.wire_string(value))
    }

    /// Canonical wire string of an enumerator.
    pub fn wire_string(&self, value: E) -> String {
        match self.mapping.wire_name(value) {
            Some(wire) => wire.to_string(),
            None => format!("{value:?}").to_lowercase(),
        }
    }

    /// Parse a configuration value: a declared name or wire string, ignoring case.
    ///
    /// Unlike [`decode_str`](Self::decode_str) this does not fall back: values
    /// typed by an operator should be rejected when misspelled.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownEnumerator`] when nothing matches.
    pub fn parse_strict(&self, text: &str) -> Result<E> {
        let text = text.trim();
        self.mapping
            .by_name(text, true)
            .or_else(|| self.mapping.by_wire(text, true))
            .ok_or_else(|| CodecError::unknown_enumerator(E::TYPE_NAME, text))
    }

    /// Parse a comma-separated list with [`parse_strict`](Self::parse_strict).
    ///
    /// Empty items are skipped, so `""` yields an empty list.
    pub fn parse_list(&self, text: &str) -> Result<Vec<E>> {
        text.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| self.parse_strict(item))
            .collect()
    }

    /// Describe an enumerator as a type-erased value.
    pub fn describe(&self, value: E) -> Result<EnumValue> {
        self.mapping
            .entry(value)
            .map(|entry| EnumValue {
                type_name: E::TYPE_NAME,
                name: entry.name,
                ordinal: entry.ordinal,
            })
            .ok_or_else(|| {
                CodecError::invariant_violation(format!(
                    "{value:?} is not a declared member of {}",
                    E::TYPE_NAME
                ))
            })
    }

    pub(crate) fn encode_erased(&self, value: &EnumValue) -> Result<WireToken> {
        if value.type_name != E::TYPE_NAME {
            return Err(CodecError::invariant_violation(format!(
                "{} value handed to {} converter",
                value.type_name,
                E::TYPE_NAME
            )));
        }

        let wire = match self.mapping.by_ordinal(value.ordinal) {
            Some(known) => self.wire_string(known),
            None => value.name.to_lowercase(),
        };
        Ok(WireToken::Text(wire))
    }

    fn match_text(&self, text: &str) -> Option<E> {
        let case_insensitive = self.config.case_insensitive;
        self.mapping
            .by_name(text, case_insensitive)
            .or_else(|| self.mapping.by_wire(text, case_insensitive))
    }

    fn fallback(&self, token: &str) -> E {
        match self.config.fallback_log_level {
            FallbackLogLevel::Off => {}
            FallbackLogLevel::Debug => tracing::debug!(
                enum_type = E::TYPE_NAME,
                token,
                "unknown enum token, using undefined sentinel"
            ),
            FallbackLogLevel::Warn => tracing::warn!(
                enum_type = E::TYPE_NAME,
                token,
                "unknown enum token, using undefined sentinel"
            ),
        }
        E::UNDEFINED
    }
}

impl<E: WireEnum> Default for EnumConverter<E> {
    fn default() -> Self {
        Self::new(CodecConfig::default())
    }
}

impl<E: WireEnum> DynEnumConverter for EnumConverter<E> {
    fn type_key(&self) -> TypeKey {
        TypeKey::of::<E>()
    }

    fn enum_type_name(&self) -> &'static str {
        E::TYPE_NAME
    }

    fn is_nullable(&self) -> bool {
        false
    }

    fn decode_value(&self, token: &WireToken) -> Result<Option<EnumValue>> {
        let value = self.decode(token)?;
        self.describe(value).map(Some)
    }

    fn encode_value(&self, value: Option<&EnumValue>) -> Result<WireToken> {
        match value {
            Some(value) => self.encode_erased(value),
            None => Err(CodecError::unexpected_null(E::TYPE_NAME)),
        }
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}
