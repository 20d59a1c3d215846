// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout enumcodec.
//!
//! This module provides the foundational types for the library:
//! - [`CodecError`] - Error handling
//! - [`WireToken`] - Wire token representation
//! - [`CodecConfig`] - Converter configuration

pub mod config;
pub mod error;
pub mod token;

pub use config::{CodecConfig, FallbackLogLevel, NumericTokenPolicy};
pub use error::{CodecError, Result};
pub use token::WireToken;
