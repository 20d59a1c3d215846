// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Codec configuration.
//!
//! Configuration is fixed when a [`CodecRegistry`](crate::codec::CodecRegistry)
//! is created and copied into every converter it builds.
//!
//! ```
//! use enumcodec::{CodecConfig, NumericTokenPolicy};
//!
//! let config = CodecConfig::from_toml_str(
//!     r#"
//!     numeric_tokens = "ignore"
//!     case_insensitive = true
//!     fallback_log_level = "warn"
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.numeric_tokens, NumericTokenPolicy::Ignore);
//! ```

use serde::{Deserialize, Serialize};

use super::error::Result;

/// How numeric tokens are interpreted during decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericTokenPolicy {
    /// Integers (and integer-looking strings) are enumerator ordinals.
    #[default]
    Ordinal,
    /// Numeric tokens never match; they decode to the undefined sentinel.
    Ignore,
}

/// Log level used when decode falls back to the undefined sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackLogLevel {
    /// Do not log fallbacks
    Off,
    /// Log at debug level
    #[default]
    Debug,
    /// Log at warn level
    Warn,
}

/// Configuration for enum converters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Interpretation of numeric tokens
    pub numeric_tokens: NumericTokenPolicy,
    /// Whether name and wire-string matching falls back to ignoring case
    pub case_insensitive: bool,
    /// Log level for unknown-token fallbacks
    pub fallback_log_level: FallbackLogLevel,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            numeric_tokens: NumericTokenPolicy::Ordinal,
            case_insensitive: true,
            fallback_log_level: FallbackLogLevel::Debug,
        }
    }
}

impl CodecConfig {
    /// Configuration that only accepts exact-case string tokens.
    ///
    /// Useful when validating that a peer emits canonical wire strings.
    pub fn strict() -> Self {
        Self {
            numeric_tokens: NumericTokenPolicy::Ignore,
            case_insensitive: false,
            fallback_log_level: FallbackLogLevel::Warn,
        }
    }

    /// Parse a configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Set the numeric token policy.
    pub fn with_numeric_tokens(mut self, policy: NumericTokenPolicy) -> Self {
        self.numeric_tokens = policy;
        self
    }

    /// Enable or disable case-insensitive matching.
    pub fn with_case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }

    /// Set the fallback log level.
    pub fn with_fallback_log_level(mut self, level: FallbackLogLevel) -> Self {
        self.fallback_log_level = level;
        self
    }
}
