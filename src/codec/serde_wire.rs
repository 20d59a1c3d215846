// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! serde field adapters backed by the global registry.
//!
//! ```
//! use enumcodec::codec::{EnumMember, WireEnum};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Channel {
//!     Online,
//!     InStore,
//!     Undefined,
//! }
//!
//! impl WireEnum for Channel {
//!     const TYPE_NAME: &'static str = "Channel";
//!     const UNDEFINED: Self = Channel::Undefined;
//!
//!     fn members() -> &'static [EnumMember<Self>] {
//!         const MEMBERS: &[EnumMember<Channel>] = &[
//!             EnumMember::new(Channel::Online, "Online", 0),
//!             EnumMember::annotated(Channel::InStore, "InStore", 1, "in store"),
//!             EnumMember::new(Channel::Undefined, "Undefined", 2),
//!         ];
//!         MEMBERS
//!     }
//! }
//!
//! #[derive(Serialize, Deserialize)]
//! struct Payment {
//!     #[serde(with = "enumcodec::codec::serde_wire")]
//!     channel: Channel,
//!     #[serde(with = "enumcodec::codec::serde_wire::option", default)]
//!     fallback: Option<Channel>,
//! }
//!
//! let payment: Payment =
//!     serde_json::from_str(r#"{"channel": "in store", "fallback": null}"#).unwrap();
//! assert_eq!(payment.channel, Channel::InStore);
//! assert_eq!(payment.fallback, None);
//! ```

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::descriptor::WireEnum;
use super::registry::global_registry;
use crate::core::WireToken;

/// Serialize an enumerator as its wire string.
pub fn serialize<E, S>(value: &E, serializer: S) -> Result<S::Ok, S::Error>
where
    E: WireEnum,
    S: Serializer,
{
    let converter = global_registry()
        .converter::<E>()
        .map_err(S::Error::custom)?;
    converter.encode(*value).serialize(serializer)
}

/// Deserialize an enumerator from an integer or string token.
///
/// Unknown tokens become `E::UNDEFINED`; `null` is an error.
pub fn deserialize<'de, E, D>(deserializer: D) -> Result<E, D::Error>
where
    E: WireEnum,
    D: Deserializer<'de>,
{
    let token = WireToken::deserialize(deserializer)?;
    let converter = global_registry()
        .converter::<E>()
        .map_err(D::Error::custom)?;
    converter.decode(&token).map_err(D::Error::custom)
}

/// Adapters for `Option<E>` fields.
///
/// Pair with `#[serde(default)]` if the field may be missing entirely.
pub mod option {
    use serde::de::Error as _;
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{global_registry, WireEnum, WireToken};

    /// Serialize `None` as null and `Some` as the wire string.
    pub fn serialize<E, S>(value: &Option<E>, serializer: S) -> Result<S::Ok, S::Error>
    where
        E: WireEnum,
        S: Serializer,
    {
        let converter = global_registry()
            .nullable_converter::<E>()
            .map_err(S::Error::custom)?;
        converter.encode(*value).serialize(serializer)
    }

    /// Deserialize null as `None`, anything else like [`super::deserialize`].
    pub fn deserialize<'de, E, D>(deserializer: D) -> Result<Option<E>, D::Error>
    where
        E: WireEnum,
        D: Deserializer<'de>,
    {
        let token = WireToken::deserialize(deserializer)?;
        let converter = global_registry()
            .nullable_converter::<E>()
            .map_err(D::Error::custom)?;
        converter.decode(&token).map_err(D::Error::custom)
    }
}
