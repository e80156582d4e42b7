// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use crate::error::ValueFormatError;
use crate::value::{ValueConverter, ValueType};

/// A URI reference such as `mailto:jane@example.com` (RFC 5545 Section 3.3.13).
///
/// Only the scheme is validated, the remainder is kept verbatim so that the
/// raw encoding round-trips byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Uri(String);

impl Uri {
    /// The URI as it appears in the raw store
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The scheme part, e.g. `mailto`
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.0.split_once(':').map_or("", |(scheme, _)| scheme)
    }

    /// Consume the URI, returning the underlying string
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

/// ```txt
/// URI    = scheme ":" hier-part [ "?" query ] [ "#" fragment ]
/// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
/// ```
fn is_valid_uri(s: &str) -> bool {
    let Some((scheme, _)) = s.split_once(':') else {
        return false;
    };

    let mut chars = scheme.chars();
    let scheme_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    scheme_ok && !s.chars().any(|c| c.is_whitespace() || c.is_control())
}

impl FromStr for Uri {
    type Err = ValueFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_valid_uri(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(ValueFormatError::new(ValueType::Uri, s))
        }
    }
}

impl TryFrom<String> for Uri {
    type Error = ValueFormatError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if is_valid_uri(&s) {
            Ok(Self(s))
        } else {
            Err(ValueFormatError {
                expected: ValueType::Uri,
                value: s,
            })
        }
    }
}

impl TryFrom<&str> for Uri {
    type Error = ValueFormatError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// URI values, validated on parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UriConverter;

impl ValueConverter for UriConverter {
    type Value = Uri;

    const VALUE_TYPE: ValueType = ValueType::Uri;

    fn parse(raw: &str) -> Result<Self::Value, ValueFormatError> {
        raw.parse()
    }

    fn serialize(value: &Self::Value) -> String {
        value.0.clone()
    }
}
