// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # enumcodec
//!
//! Enum wire-format codec for loosely specified JSON protocols.
//!
//! Converts between strongly typed Rust enums and the string/number tokens an
//! external API emits:
//! - **Forward compatible**: unknown tokens decode to the type's `Undefined`
//!   sentinel instead of failing the surrounding document
//! - **Lenient input**: ordinals, declared names and wire strings are accepted,
//!   case-insensitively by default
//! - **Canonical output**: encode always emits the wire string
//! - **Optional enums**: `Option<E>` maps `None` to the null token
//! - **Shared cache**: converters are built lazily per type and published
//!   lock-free for concurrent readers
//!
//! ## Architecture
//!
//! - `core/` - Errors, wire tokens, configuration
//! - `codec/` - Resolver, converters, registry, serde integration
//!
//! ## Example
//!
//! ```rust
//! use enumcodec::wire_enum;
//! use serde::Deserialize;
//!
//! wire_enum! {
//!     pub enum AccountType {
//!         Depository,
//!         Credit,
//!         Loan,
//!         Investment,
//!         Undefined,
//!     }
//! }
//!
//! #[derive(Deserialize)]
//! struct Account {
//!     #[serde(rename = "type")]
//!     kind: AccountType,
//!     subtype: Option<AccountType>,
//! }
//!
//! let account: Account =
//!     serde_json::from_str(r#"{"type": "brokerage", "subtype": null}"#).unwrap();
//! assert_eq!(account.kind, AccountType::Undefined);
//! assert_eq!(account.subtype, None);
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use crate::core::{
    CodecConfig, CodecError, FallbackLogLevel, NumericTokenPolicy, Result, WireToken,
};

// Enum conversion
pub mod codec;

pub use codec::{
    global_registry, CodecRegistry, DynEnumConverter, EnumConverter, EnumMember, EnumValue,
    NullableEnumConverter, TypeKey, WireEnum, WireMapping, WireNameResolver,
};

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
