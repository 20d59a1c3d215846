// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Converter for the optional form `Option<E>`.
//!
//! Absence is handled here and only here; every present token goes to the
//! wrapped [`EnumConverter`] unchanged.

use std::any::Any;
use std::sync::Arc;

use super::converter::EnumConverter;
use super::descriptor::WireEnum;
use super::dynamic::{DynEnumConverter, EnumValue, TypeKey};
use crate::core::{CodecConfig, Result, WireToken};

/// Converter between `Option<E>` and wire tokens.
#[derive(Debug, Clone)]
pub struct NullableEnumConverter<E: WireEnum> {
    inner: EnumConverter<E>,
}

impl<E: WireEnum> NullableEnumConverter<E> {
    /// Create a nullable converter with a freshly resolved inner converter.
    pub fn new(config: CodecConfig) -> Self {
        Self::wrap(EnumConverter::new(config))
    }

    /// Wrap an existing converter.
    pub fn wrap(inner: EnumConverter<E>) -> Self {
        Self { inner }
    }

    /// The wrapped non-optional converter.
    pub fn inner(&self) -> &EnumConverter<E> {
        &self.inner
    }

    /// Decode a token; the null token yields `None`.
    pub fn decode(&self, token: &WireToken) -> Result<Option<E>> {
        match token {
            WireToken::Null => Ok(None),
            other => self.inner.decode(other).map(Some),
        }
    }

    /// Decode a JSON scalar; `null` yields `None`.
    pub fn decode_json(&self, value: &serde_json::Value) -> Result<Option<E>> {
        match value {
            serde_json::Value::Null => Ok(None),
            other => self.inner.decode_json(other).map(Some),
        }
    }

    /// Encode a value; `None` yields the null token.
    pub fn encode(&self, value: Option<E>) -> WireToken {
        match value {
            Some(value) => self.inner.encode(value),
            None => WireToken::Null,
        }
    }
}

impl<E: WireEnum> Default for NullableEnumConverter<E> {
    fn default() -> Self {
        Self::new(CodecConfig::default())
    }
}

impl<E: WireEnum> DynEnumConverter for NullableEnumConverter<E> {
    fn type_key(&self) -> TypeKey {
        TypeKey::optional::<E>()
    }

    fn enum_type_name(&self) -> &'static str {
        E::TYPE_NAME
    }

    fn is_nullable(&self) -> bool {
        true
    }

    fn decode_value(&self, token: &WireToken) -> Result<Option<EnumValue>> {
        match self.decode(token)? {
            Some(value) => self.inner.describe(value).map(Some),
            None => Ok(None),
        }
    }

    fn encode_value(&self, value: Option<&EnumValue>) -> Result<WireToken> {
        match value {
            Some(value) => self.inner.encode_erased(value),
            None => Ok(WireToken::Null),
        }
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}
