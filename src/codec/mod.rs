// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Enum wire-format conversion.
//!
//! This module is organized leaves first:
//! - [`descriptor`] - The [`WireEnum`] trait and member tables
//! - [`resolver`] - Enumerator <-> wire string mapping
//! - [`converter`] - Decode/encode for one enum type, with fallback
//! - [`nullable`] - Optional-form wrapper
//! - [`dynamic`] - Object-safe converter interface and type keys
//! - [`registry`] - Type-indexed factory and cache
//! - [`serde_wire`] - serde field adapters

pub mod converter;
pub mod descriptor;
pub mod dynamic;
mod macros;
pub mod nullable;
pub mod registry;
pub mod resolver;
pub mod serde_wire;

pub use converter::EnumConverter;
pub use descriptor::{EnumMember, WireEnum};
pub use dynamic::{DynEnumConverter, EnumValue, TypeKey};
pub use nullable::NullableEnumConverter;
pub use registry::{global_registry, install_global_registry, CodecRegistry};
pub use resolver::{MappingEntry, WireMapping, WireNameResolver};
