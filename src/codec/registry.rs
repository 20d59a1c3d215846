// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Type-indexed converter registry.
//!
//! The registry answers two questions for a serialization pipeline:
//! - can this type be handled ([`CodecRegistry::can_handle`]), and
//! - which converter handles it ([`CodecRegistry::get_converter`]).
//!
//! Enum types enter the closed set of handled types through
//! [`CodecRegistry::register`] (the typed accessors register implicitly).
//! Registering `E` makes both `E` and `Option<E>` handleable.
//!
//! # Concurrency
//!
//! Both the registration table and the converter cache are immutable maps
//! published through [`ArcSwap`]. Readers load the current snapshot without
//! locking. Writers clone the snapshot, insert, and publish with a
//! compare-and-swap loop ([`ArcSwap::rcu`]), so concurrent first requests never
//! lose an update. Two threads may both build a converter for the same type;
//! whichever publishes first wins and the other adopts the published one.
//!
//! # Example
//!
//! ```
//! use enumcodec::codec::{CodecRegistry, TypeKey};
//! use enumcodec::{wire_enum, WireToken};
//!
//! wire_enum! {
//!     pub enum Status {
//!         Pending as "PENDING",
//!         Complete as "COMPLETE",
//!         Undefined,
//!     }
//! }
//!
//! let registry = CodecRegistry::new();
//! registry.register::<Status>();
//! assert!(registry.can_handle(TypeKey::optional::<Status>()));
//!
//! let converter = registry.converter::<Status>().unwrap();
//! assert_eq!(converter.encode(Status::Complete), WireToken::text("COMPLETE"));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::converter::EnumConverter;
use super::descriptor::WireEnum;
use super::dynamic::{DynEnumConverter, TypeKey};
use super::nullable::NullableEnumConverter;
use crate::core::{CodecConfig, CodecError, Result};

type BuildFn = fn(&CodecConfig) -> Arc<dyn DynEnumConverter>;

/// How to build the converter of one handleable type.
#[derive(Clone, Copy)]
struct KnownType {
    enum_type_name: &'static str,
    nullable: bool,
    build: BuildFn,
}

fn build_plain<E: WireEnum>(config: &CodecConfig) -> Arc<dyn DynEnumConverter> {
    Arc::new(EnumConverter::<E>::new(config.clone()))
}

fn build_nullable<E: WireEnum>(config: &CodecConfig) -> Arc<dyn DynEnumConverter> {
    Arc::new(NullableEnumConverter::<E>::new(config.clone()))
}

/// Registry and cache of enum converters.
pub struct CodecRegistry {
    config: CodecConfig,
    known: ArcSwap<HashMap<TypeKey, KnownType>>,
    converters: ArcSwap<HashMap<TypeKey, Arc<dyn DynEnumConverter>>>,
}

impl CodecRegistry {
    /// Create an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(CodecConfig::default())
    }

    /// Create an empty registry whose converters use `config`.
    pub fn with_config(config: CodecConfig) -> Self {
        Self {
            config,
            known: ArcSwap::from_pointee(HashMap::new()),
            converters: ArcSwap::from_pointee(HashMap::new()),
        }
    }

    /// The configuration handed to every converter this registry builds.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Add `E` and `Option<E>` to the set of handleable types.
    ///
    /// Idempotent; registering an already known type is a cheap lookup.
    pub fn register<E: WireEnum>(&self) {
        let plain = TypeKey::of::<E>();
        if self.known.load().contains_key(&plain) {
            return;
        }

        let optional = TypeKey::optional::<E>();
        self.known.rcu(|known| {
            let mut next: HashMap<_, _> = (**known).clone();
            next.entry(plain).or_insert(KnownType {
                enum_type_name: E::TYPE_NAME,
                nullable: false,
                build: build_plain::<E>,
            });
            next.entry(optional).or_insert(KnownType {
                enum_type_name: E::TYPE_NAME,
                nullable: true,
                build: build_nullable::<E>,
            });
            next
        });

        tracing::debug!(enum_type = E::TYPE_NAME, "registered enum type");
    }

    /// Check if `E` has been registered.
    pub fn is_registered<E: WireEnum>(&self) -> bool {
        self.known.load().contains_key(&TypeKey::of::<E>())
    }

    /// Check if `key` is a registered enum or the optional form of one.
    pub fn can_handle(&self, key: TypeKey) -> bool {
        self.known.load().contains_key(&key)
    }

    /// Get the converter for `key`, building and caching it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnsupportedType`] if [`can_handle`](Self::can_handle)
    /// is false for `key`. That is a caller bug and should not be retried.
    pub fn get_converter(&self, key: TypeKey) -> Result<Arc<dyn DynEnumConverter>> {
        if let Some(converter) = self.converters.load().get(&key) {
            return Ok(Arc::clone(converter));
        }

        let known = self.known.load().get(&key).copied();
        let Some(known) = known else {
            let err = CodecError::unsupported_type(key.type_name());
            tracing::error!(fields = ?err.log_fields(), "converter requested for unsupported type");
            return Err(err);
        };

        let built = (known.build)(&self.config);
        let previous = self.converters.rcu(|current| {
            let mut next: HashMap<_, _> = (**current).clone();
            next.entry(key).or_insert_with(|| Arc::clone(&built));
            next
        });

        match previous.get(&key) {
            Some(winner) => Ok(Arc::clone(winner)),
            None => {
                tracing::debug!(
                    enum_type = known.enum_type_name,
                    nullable = known.nullable,
                    "built enum converter"
                );
                Ok(built)
            }
        }
    }

    /// Typed converter for `E`, registering `E` if needed.
    pub fn converter<E: WireEnum>(&self) -> Result<Arc<EnumConverter<E>>> {
        self.register::<E>();
        self.get_converter(TypeKey::of::<E>())?
            .into_any()
            .downcast::<EnumConverter<E>>()
            .map_err(|_| Self::wrong_converter_type(E::TYPE_NAME))
    }

    /// Typed converter for `Option<E>`, registering `E` if needed.
    pub fn nullable_converter<E: WireEnum>(&self) -> Result<Arc<NullableEnumConverter<E>>> {
        self.register::<E>();
        self.get_converter(TypeKey::optional::<E>())?
            .into_any()
            .downcast::<NullableEnumConverter<E>>()
            .map_err(|_| Self::wrong_converter_type(E::TYPE_NAME))
    }

    /// Number of converters built and cached so far.
    pub fn cached_count(&self) -> usize {
        self.converters.load().len()
    }

    /// Names of the registered enum types, sorted.
    pub fn registered_types(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self
            .known
            .load()
            .values()
            .filter(|known| !known.nullable)
            .map(|known| known.enum_type_name)
            .collect();
        names.sort_unstable();
        names
    }

    fn wrong_converter_type(type_name: &str) -> CodecError {
        CodecError::invariant_violation(format!(
            "cached converter for {type_name} has an unexpected concrete type"
        ))
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("config", &self.config)
            .field("registered", &self.registered_types())
            .field("cached", &self.cached_count())
            .finish()
    }
}

/// Global codec registry.
///
/// Backs the serde integration ([`serde_wire`](super::serde_wire) and types
/// declared with [`wire_enum!`](crate::wire_enum)). For custom configuration
/// call [`install_global_registry`] before first use, or create a
/// `CodecRegistry` directly.
static GLOBAL_REGISTRY: OnceLock<CodecRegistry> = OnceLock::new();

/// Get the global codec registry, creating it with defaults on first use.
pub fn global_registry() -> &'static CodecRegistry {
    GLOBAL_REGISTRY.get_or_init(CodecRegistry::new)
}

/// Initialize the global registry with `config`.
///
/// Returns `false` if the global registry already exists, in which case its
/// configuration is unchanged.
pub fn install_global_registry(config: CodecConfig) -> bool {
    GLOBAL_REGISTRY.set(CodecRegistry::with_config(config)).is_ok()
}
