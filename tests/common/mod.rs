// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common fixtures for integration tests.

#![allow(dead_code)]

use enumcodec::codec::WireEnum;
use enumcodec::wire_enum;

// ============================================================================
// Fixture Enums
// ============================================================================

wire_enum! {
    /// The canonical scenario type.
    pub enum Status {
        Pending as "PENDING",
        Complete as "COMPLETE",
        Undefined,
    }
}

wire_enum! {
    /// Account classification as reported by the aggregation API.
    pub enum AccountType {
        Investment as "investment",
        Credit as "credit",
        Depository as "depository",
        Loan as "loan",
        Brokerage as "brokerage",
        Other as "other",
        Undefined,
    }
}

wire_enum! {
    /// Products requested when creating a link token.
    pub enum Products {
        Assets,
        Auth,
        Balance,
        Identity,
        Investments,
        Liabilities,
        PaymentInitiation as "payment_initiation",
        Transactions,
        Undefined,
    }
}

wire_enum! {
    /// Country codes, annotated upper-case on the wire.
    pub enum CountryCode {
        Us = 1 as "US",
        Gb = 2 as "GB",
        Es = 3 as "ES",
        Nl = 4 as "NL",
        Fr = 5 as "FR",
        Ie = 6 as "IE",
        Ca = 7 as "CA",
        Undefined = 0,
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// All declared enumerators of `E`.
pub fn all_values<E: WireEnum>() -> Vec<E> {
    E::members().iter().map(|m| m.value).collect()
}

/// Flip the case of every ASCII letter.
pub fn swap_case(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}
