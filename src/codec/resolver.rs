// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Wire name resolution.
//!
//! [`WireNameResolver`] turns a [`WireEnum`] member table into a
//! [`WireMapping`]: the ordered association between each enumerator and its
//! canonical wire string, plus the lookup indexes decode needs.
//!
//! The wire string of an enumerator is its explicit annotation when present,
//! otherwise its declared name lower-cased. Most protocol tokens are
//! upper-snake-case, so the annotation is the common case and the derived
//! default only covers enumerators the protocol spells like the Rust name.

use std::collections::HashMap;

use super::descriptor::WireEnum;

/// One resolved enumerator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry<E> {
    /// The enumerator
    pub value: E,
    /// Declared name
    pub name: &'static str,
    /// Integral discriminant
    pub ordinal: i64,
    /// Canonical wire string
    pub wire: String,
    /// Whether `wire` came from an explicit annotation
    pub annotated: bool,
}

/// Immutable enumerator <-> wire string mapping for one enum type.
///
/// Duplicate names or wire strings resolve to the first declared enumerator.
#[derive(Debug, Clone)]
pub struct WireMapping<E: WireEnum> {
    entries: Vec<MappingEntry<E>>,
    by_value: HashMap<E, usize>,
    by_ordinal: HashMap<i64, usize>,
    by_name: HashMap<&'static str, usize>,
    by_name_folded: HashMap<String, usize>,
    by_wire: HashMap<String, usize>,
    by_wire_folded: HashMap<String, usize>,
}

impl<E: WireEnum> WireMapping<E> {
    /// Name of the enum type this mapping belongs to.
    pub fn type_name(&self) -> &'static str {
        E::TYPE_NAME
    }

    /// Resolved entries in declaration order.
    pub fn entries(&self) -> &[MappingEntry<E>] {
        &self.entries
    }

    /// Number of enumerators.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the enum has no enumerators.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the resolved entry of an enumerator.
    pub fn entry(&self, value: E) -> Option<&MappingEntry<E>> {
        self.by_value.get(&value).map(|&i| &self.entries[i])
    }

    /// Canonical wire string of an enumerator.
    pub fn wire_name(&self, value: E) -> Option<&str> {
        self.entry(value).map(|e| e.wire.as_str())
    }

    /// Enumerator with the given ordinal.
    pub fn by_ordinal(&self, ordinal: i64) -> Option<E> {
        self.by_ordinal.get(&ordinal).map(|&i| self.entries[i].value)
    }

    /// Enumerator with the given declared name.
    pub fn by_name(&self, name: &str, case_insensitive: bool) -> Option<E> {
        let index = self.by_name.get(name).copied().or_else(|| {
            if case_insensitive {
                self.by_name_folded.get(&fold(name)).copied()
            } else {
                None
            }
        });
        index.map(|i| self.entries[i].value)
    }

    /// Enumerator with the given wire string.
    pub fn by_wire(&self, wire: &str, case_insensitive: bool) -> Option<E> {
        let index = self.by_wire.get(wire).copied().or_else(|| {
            if case_insensitive {
                self.by_wire_folded.get(&fold(wire)).copied()
            } else {
                None
            }
        });
        index.map(|i| self.entries[i].value)
    }
}

/// Builds [`WireMapping`]s from [`WireEnum`] member tables.
pub struct WireNameResolver;

impl WireNameResolver {
    /// Resolve the wire mapping of `E`.
    ///
    /// Pure and infallible: every enumerator yields a wire string.
    pub fn resolve<E: WireEnum>() -> WireMapping<E> {
        let members = E::members();
        let mut mapping = WireMapping {
            entries: Vec::with_capacity(members.len()),
            by_value: HashMap::with_capacity(members.len()),
            by_ordinal: HashMap::with_capacity(members.len()),
            by_name: HashMap::with_capacity(members.len()),
            by_name_folded: HashMap::with_capacity(members.len()),
            by_wire: HashMap::with_capacity(members.len()),
            by_wire_folded: HashMap::with_capacity(members.len()),
        };

        for member in members {
            let index = mapping.entries.len();
            let wire = Self::wire_string(member.name, member.wire_name);

            mapping.by_value.entry(member.value).or_insert(index);
            mapping.by_ordinal.entry(member.ordinal).or_insert(index);
            mapping.by_name.entry(member.name).or_insert(index);
            mapping
                .by_name_folded
                .entry(fold(member.name))
                .or_insert(index);
            mapping.by_wire.entry(wire.clone()).or_insert(index);
            mapping.by_wire_folded.entry(fold(&wire)).or_insert(index);

            mapping.entries.push(MappingEntry {
                value: member.value,
                name: member.name,
                ordinal: member.ordinal,
                wire,
                annotated: member.wire_name.is_some(),
            });
        }

        if !mapping.by_value.contains_key(&E::UNDEFINED) {
            tracing::warn!(
                enum_type = E::TYPE_NAME,
                sentinel = ?E::UNDEFINED,
                "undefined sentinel is not a declared member"
            );
        }

        mapping
    }

    /// Wire string for one enumerator: the annotation, or the lower-cased name.
    pub fn wire_string(name: &str, annotation: Option<&str>) -> String {
        match annotation {
            Some(wire) => wire.to_string(),
            None => name.to_lowercase(),
        }
    }
}

fn fold(text: &str) -> String {
    text.to_lowercase()
}
