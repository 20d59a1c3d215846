// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Enum type descriptors.
//!
//! Every convertible enum implements [`WireEnum`], exposing a static member
//! table. The table is what the resolver walks to build the wire mapping, so no
//! per-type conversion code is needed. Use [`wire_enum!`](crate::wire_enum) to
//! generate both the enum and its table.

use std::fmt::Debug;
use std::hash::Hash;

/// One declared enumerator of a [`WireEnum`] type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumMember<E: 'static> {
    /// The enumerator itself
    pub value: E,
    /// Declared name, e.g. `"CreditCard"`
    pub name: &'static str,
    /// Integral discriminant
    pub ordinal: i64,
    /// Explicit wire-string annotation, if any
    pub wire_name: Option<&'static str>,
}

impl<E: 'static> EnumMember<E> {
    /// Create a member without a wire annotation.
    pub const fn new(value: E, name: &'static str, ordinal: i64) -> Self {
        Self {
            value,
            name,
            ordinal,
            wire_name: None,
        }
    }

    /// Create a member with an explicit wire annotation.
    pub const fn annotated(
        value: E,
        name: &'static str,
        ordinal: i64,
        wire_name: &'static str,
    ) -> Self {
        Self {
            value,
            name,
            ordinal,
            wire_name: Some(wire_name),
        }
    }
}

/// A closed enum type that can be converted to and from wire tokens.
///
/// # Contract
///
/// - `members()` lists every enumerator exactly once, in declaration order.
/// - `UNDEFINED` is one of the members. It is returned whenever a token cannot
///   be matched, so the wire side can introduce new enumerators without
///   breaking decode.
///
/// # Example
///
/// ```
/// use enumcodec::codec::{EnumMember, WireEnum};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Direction {
///     Inflow,
///     Outflow,
///     Unknown,
/// }
///
/// impl WireEnum for Direction {
///     const TYPE_NAME: &'static str = "Direction";
///     const UNDEFINED: Self = Direction::Unknown;
///
///     fn members() -> &'static [EnumMember<Self>] {
///         const MEMBERS: &[EnumMember<Direction>] = &[
///             EnumMember::annotated(Direction::Inflow, "Inflow", 0, "INFLOW"),
///             EnumMember::annotated(Direction::Outflow, "Outflow", 1, "OUTFLOW"),
///             EnumMember::new(Direction::Unknown, "Unknown", 2),
///         ];
///         MEMBERS
///     }
/// }
/// ```
pub trait WireEnum: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Short type name used in errors and logs.
    const TYPE_NAME: &'static str;

    /// Sentinel returned when a token matches no enumerator.
    const UNDEFINED: Self;

    /// All declared enumerators, in declaration order.
    fn members() -> &'static [EnumMember<Self>];
}
