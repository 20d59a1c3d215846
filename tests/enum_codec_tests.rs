// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Enum converter integration tests.
//!
//! Tests cover:
//! - Encoding every enumerator and decoding it back
//! - Numeric tokens, both as integers and as numeric strings
//! - Tolerance of unknown tokens
//! - Case-insensitive matching of names and wire strings

mod common;

use common::{all_values, swap_case, AccountType, CountryCode, Products, Status};
use enumcodec::{
    CodecConfig, CodecError, EnumConverter, NullableEnumConverter, NumericTokenPolicy, WireEnum,
    WireToken,
};

// ============================================================================
// Round Trips
// ============================================================================

fn assert_round_trips<E: WireEnum>() {
    let converter = EnumConverter::<E>::default();
    for value in all_values::<E>() {
        let token = converter.encode(value);
        assert_eq!(
            converter.decode(&token).unwrap(),
            value,
            "{value:?} did not survive {token}"
        );
    }
}

#[test]
fn test_every_enumerator_round_trips() {
    assert_round_trips::<Status>();
    assert_round_trips::<AccountType>();
    assert_round_trips::<Products>();
    assert_round_trips::<CountryCode>();
}

#[test]
fn test_encode_uses_annotation_or_lowercase_name() {
    let products = EnumConverter::<Products>::default();
    assert_eq!(
        products.encode(Products::PaymentInitiation),
        WireToken::text("payment_initiation")
    );
    assert_eq!(products.encode(Products::Auth), WireToken::text("auth"));

    let countries = EnumConverter::<CountryCode>::default();
    assert_eq!(countries.encode(CountryCode::Gb), WireToken::text("GB"));
    assert_eq!(countries.encode(CountryCode::Undefined), WireToken::text("undefined"));
}

// ============================================================================
// Status Scenario
// ============================================================================

#[test]
fn test_status_scenario() {
    let converter = EnumConverter::<Status>::default();

    assert_eq!(converter.decode(&"COMPLETE".into()).unwrap(), Status::Complete);
    assert_eq!(converter.decode(&"complete".into()).unwrap(), Status::Complete);
    assert_eq!(converter.decode(&"Pending".into()).unwrap(), Status::Pending);
    assert_eq!(converter.decode(&"refunded".into()).unwrap(), Status::Undefined);
    assert_eq!(converter.decode(&WireToken::Int(1)).unwrap(), Status::Complete);
    assert_eq!(converter.encode(Status::Pending), WireToken::text("PENDING"));
}

#[test]
fn test_nullable_status_scenario() {
    let converter = NullableEnumConverter::<Status>::default();
    assert_eq!(converter.decode(&WireToken::Null).unwrap(), None);
    assert_eq!(
        converter.decode(&"PENDING".into()).unwrap(),
        Some(Status::Pending)
    );
    assert_eq!(converter.encode(None), WireToken::Null);
    assert_eq!(
        converter.encode(Some(Status::Complete)),
        WireToken::text("COMPLETE")
    );
}

#[test]
fn test_null_on_required_value_is_error() {
    let converter = EnumConverter::<Status>::default();
    let err = converter.decode(&WireToken::Null).unwrap_err();
    assert!(matches!(err, CodecError::UnexpectedNull { .. }));
    assert!(!err.is_contract_violation());
}

// ============================================================================
// Numeric Tokens
// ============================================================================

#[test]
fn test_integer_tokens_use_declared_ordinals() {
    let converter = EnumConverter::<CountryCode>::default();
    assert_eq!(converter.decode(&WireToken::Int(4)).unwrap(), CountryCode::Nl);
    assert_eq!(converter.decode(&WireToken::Int(0)).unwrap(), CountryCode::Undefined);
    assert_eq!(converter.decode(&WireToken::Int(99)).unwrap(), CountryCode::Undefined);
    assert_eq!(converter.decode(&WireToken::Int(-1)).unwrap(), CountryCode::Undefined);
}

#[test]
fn test_numeric_strings_are_ordinals() {
    let converter = EnumConverter::<CountryCode>::default();
    assert_eq!(converter.decode(&"7".into()).unwrap(), CountryCode::Ca);
    assert_eq!(converter.decode(&"42".into()).unwrap(), CountryCode::Undefined);
}

#[test]
fn test_numeric_tokens_ignored_when_configured() {
    let config = CodecConfig::default().with_numeric_tokens(NumericTokenPolicy::Ignore);
    let converter = EnumConverter::<CountryCode>::new(config);
    assert_eq!(converter.decode(&WireToken::Int(4)).unwrap(), CountryCode::Undefined);
    assert_eq!(converter.decode(&"4".into()).unwrap(), CountryCode::Undefined);
    assert_eq!(converter.decode(&"NL".into()).unwrap(), CountryCode::Nl);
}

// ============================================================================
// Unknown and Case-Insensitive Tokens
// ============================================================================

#[test]
fn test_unknown_tokens_never_fail() {
    let converter = EnumConverter::<AccountType>::default();
    for text in ["", " ", "mortgage", "investment ", "credit card", "ÄÖÜ"] {
        assert_eq!(
            converter.decode(&WireToken::text(text)).unwrap(),
            AccountType::Undefined,
            "{text:?}"
        );
    }
}

#[test]
fn test_any_casing_matches() {
    let converter = EnumConverter::<Products>::default();
    for value in all_values::<Products>() {
        let wire = converter.wire_string(value);
        let flipped = swap_case(&wire);
        assert_eq!(converter.decode(&WireToken::text(flipped)).unwrap(), value);

        let name = format!("{value:?}");
        assert_eq!(converter.decode(&WireToken::text(name.to_uppercase())).unwrap(), value);
    }
}

#[test]
fn test_case_sensitive_config_requires_exact_match() {
    let config = CodecConfig::default().with_case_insensitive(false);
    let converter = EnumConverter::<Status>::new(config);
    assert_eq!(converter.decode(&"COMPLETE".into()).unwrap(), Status::Complete);
    assert_eq!(converter.decode(&"Complete".into()).unwrap(), Status::Complete);
    assert_eq!(converter.decode(&"complete".into()).unwrap(), Status::Undefined);
}

// ============================================================================
// JSON Scalars
// ============================================================================

#[test]
fn test_decode_json_scalars() {
    let converter = EnumConverter::<AccountType>::default();
    assert_eq!(
        converter.decode_json(&serde_json::json!("Depository")).unwrap(),
        AccountType::Depository
    );
    assert_eq!(
        converter.decode_json(&serde_json::json!(3)).unwrap(),
        AccountType::Loan
    );
    assert!(converter.decode_json(&serde_json::json!(1.5)).is_err());
    assert!(converter.decode_json(&serde_json::json!(true)).is_err());
    assert!(converter.decode_json(&serde_json::json!(["loan"])).is_err());
}

// ============================================================================
// Strict Parsing
// ============================================================================

#[test]
fn test_parse_list_of_products() {
    let converter = EnumConverter::<Products>::default();
    let products = converter
        .parse_list("transactions, Auth,payment_initiation,,")
        .unwrap();
    assert_eq!(
        products,
        vec![Products::Transactions, Products::Auth, Products::PaymentInitiation]
    );

    let err = converter.parse_list("auth,wallet").unwrap_err();
    assert_eq!(
        err,
        CodecError::UnknownEnumerator {
            type_name: "Products".to_string(),
            value: "wallet".to_string(),
        }
    );
}

#[test]
fn test_parse_strict_accepts_country_codes() {
    let converter = EnumConverter::<CountryCode>::default();
    assert_eq!(converter.parse_list("US,gb, Fr").unwrap(), vec![
        CountryCode::Us,
        CountryCode::Gb,
        CountryCode::Fr,
    ]);
    assert!(converter.parse_strict("DE").is_err());
}
