// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Conversions between typed parameter values and their raw string encoding.
//!
//! Every converter obeys the round-trip law `parse(&serialize(&v)) == Ok(v)`,
//! and `serialize` never fails.

mod uri;

pub use uri::{Uri, UriConverter};

use crate::error::ValueFormatError;
use crate::keyword::{KW_RSVP_FALSE, KW_RSVP_TRUE};

/// Value data types a parameter can be converted to (RFC 5545 Section 3.3)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::IntoStaticStr,
)]
#[strum(serialize_all = "UPPERCASE")]
#[allow(missing_docs)]
pub enum ValueType {
    Boolean,
    Text,
    Uri,
}

/// A parse/serialize pair for one value domain.
pub trait ValueConverter {
    /// The typed value produced by [`ValueConverter::parse`]
    type Value;

    /// The value data type handled by this converter
    const VALUE_TYPE: ValueType;

    /// Parse a raw string into a typed value.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not a valid encoding of the value type.
    fn parse(raw: &str) -> Result<Self::Value, ValueFormatError>;

    /// Encode a typed value as a raw string.
    fn serialize(value: &Self::Value) -> String;
}

/// Raw text, stored verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextConverter;

impl ValueConverter for TextConverter {
    type Value = String;

    const VALUE_TYPE: ValueType = ValueType::Text;

    fn parse(raw: &str) -> Result<Self::Value, ValueFormatError> {
        Ok(raw.to_owned())
    }

    fn serialize(value: &Self::Value) -> String {
        value.clone()
    }
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// boolean    = "TRUE" / "FALSE"
/// ```
///
/// Parsing is case-insensitive, serialization always emits upper case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BooleanConverter;

impl ValueConverter for BooleanConverter {
    type Value = bool;

    const VALUE_TYPE: ValueType = ValueType::Boolean;

    fn parse(raw: &str) -> Result<Self::Value, ValueFormatError> {
        if raw.eq_ignore_ascii_case(KW_RSVP_TRUE) {
            Ok(true)
        } else if raw.eq_ignore_ascii_case(KW_RSVP_FALSE) {
            Ok(false)
        } else {
            Err(ValueFormatError::new(Self::VALUE_TYPE, raw))
        }
    }

    fn serialize(value: &Self::Value) -> String {
        if *value { KW_RSVP_TRUE } else { KW_RSVP_FALSE }.to_owned()
    }
}
