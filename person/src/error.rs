// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while reading typed parameters from a raw store.

use crate::value::ValueType;

/// Error type for typed parameter access
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersonError {
    /// A single-valued parameter holds more than one raw value
    #[error("Expected at most one value for parameter '{property}', got {values:?}")]
    Cardinality {
        /// The parameter name
        property: &'static str,
        /// The raw values found in the store
        values: Vec<String>,
    },

    /// A raw value is not a valid encoding of the parameter's value type
    #[error(transparent)]
    ValueFormat(#[from] ValueFormatError),

    /// A dynamically supplied raw store is not a mapping of string sequences
    #[error("Invalid raw property store: {reason}")]
    InvalidStore {
        /// What was wrong with the supplied value
        reason: String,
    },
}

/// A raw string could not be parsed as the expected value type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {expected} value '{value}'")]
pub struct ValueFormatError {
    /// The value type the raw string was expected to encode
    pub expected: ValueType,
    /// The offending raw string
    pub value: String,
}

impl ValueFormatError {
    pub(crate) fn new(expected: ValueType, value: &str) -> Self {
        Self {
            expected,
            value: value.to_owned(),
        }
    }
}
