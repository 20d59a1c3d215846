// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Declarative generation of [`WireEnum`](crate::codec::WireEnum) types.

/// Declare a fieldless enum that converts to and from wire tokens.
///
/// Each variant may carry an explicit discriminant (`= 3`) and a wire-string
/// annotation (`as "WIRE_NAME"`). Variants without an annotation use their
/// lower-cased name on the wire. A variant named `Undefined` is required; it
/// is the sentinel for unrecognized tokens.
///
/// The macro derives `Debug, Clone, Copy, PartialEq, Eq, Hash` (do not derive
/// them again) and implements `WireEnum`, `serde::Serialize` and
/// `serde::Deserialize` through the [global registry](crate::codec::global_registry).
///
/// # Example
///
/// ```
/// use enumcodec::wire_enum;
///
/// wire_enum! {
///     /// Status of a pending transfer.
///     pub enum TransferStatus {
///         Pending as "PENDING",
///         Posted as "POSTED",
///         Cancelled = 7 as "CANCELLED",
///         Undefined,
///     }
/// }
///
/// let parsed: TransferStatus = serde_json::from_str("\"posted\"").unwrap();
/// assert_eq!(parsed, TransferStatus::Posted);
/// let parsed: TransferStatus = serde_json::from_str("7").unwrap();
/// assert_eq!(parsed, TransferStatus::Cancelled);
/// assert_eq!(serde_json::to_string(&TransferStatus::Posted).unwrap(), "\"POSTED\"");
/// ```
#[macro_export]
macro_rules! wire_enum {
    (@wire) => {
        ::core::option::Option::None
    };
    (@wire $wire:literal) => {
        ::core::option::Option::Some($wire)
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident $(= $ordinal:literal)? $(as $wire:literal)?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant $(= $ordinal)?,
            )+
        }

        impl $crate::codec::WireEnum for $name {
            const TYPE_NAME: &'static str = ::core::stringify!($name);
            const UNDEFINED: Self = $name::Undefined;

            fn members() -> &'static [$crate::codec::EnumMember<Self>] {
                const MEMBERS: &[$crate::codec::EnumMember<$name>] = &[
                    $(
                        $crate::codec::EnumMember {
                            value: $name::$variant,
                            name: ::core::stringify!($variant),
                            ordinal: $name::$variant as i64,
                            wire_name: $crate::wire_enum!(@wire $($wire)?),
                        },
                    )+
                ];
                MEMBERS
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::codec::serde_wire::serialize(self, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::codec::serde_wire::deserialize(deserializer)
            }
        }
    };
}
