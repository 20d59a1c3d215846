// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Object-safe converter layer.
//!
//! The registry caches converters of many enum types in one map, so it stores
//! them as [`DynEnumConverter`] trait objects keyed by [`TypeKey`]. Typed
//! callers get their concrete converter back through [`DynEnumConverter::into_any`].

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::core::{Result, WireToken};

/// Identity of a requested type: a plain enum `E` or its optional form `Option<E>`.
#[derive(Clone, Copy)]
pub struct TypeKey {
    type_id: TypeId,
    type_name: &'static str,
}

impl TypeKey {
    /// Key of any `'static` type.
    pub fn of<T: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Key of the optional form `Option<T>`.
    pub fn optional<T: 'static>() -> Self {
        Self::of::<Option<T>>()
    }

    /// The underlying `TypeId`.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Fully qualified type name, for diagnostics only.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({})", self.type_name)
    }
}

/// A type-erased enumerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumValue {
    /// Enum type name (`WireEnum::TYPE_NAME`)
    pub type_name: &'static str,
    /// Declared enumerator name
    pub name: &'static str,
    /// Integral discriminant
    pub ordinal: i64,
}

/// Converter interface independent of the concrete enum type.
///
/// Both [`EnumConverter`](super::EnumConverter) and
/// [`NullableEnumConverter`](super::NullableEnumConverter) implement it.
pub trait DynEnumConverter: Send + Sync + fmt::Debug {
    /// Key this converter was built for.
    fn type_key(&self) -> TypeKey;

    /// Name of the underlying enum type.
    fn enum_type_name(&self) -> &'static str;

    /// Whether this converter accepts the "no value" token.
    fn is_nullable(&self) -> bool;

    /// Decode a token. `Ok(None)` only comes from nullable converters.
    fn decode_value(&self, token: &WireToken) -> Result<Option<EnumValue>>;

    /// Encode a value. `None` is only accepted by nullable converters.
    fn encode_value(&self, value: Option<&EnumValue>) -> Result<WireToken>;

    /// Upcast for downcasting to the concrete converter.
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}
