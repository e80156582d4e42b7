// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::keyword::{KW_CN, KW_DIR, KW_SENT_BY};
use crate::person::{self, Person, PersonAttrs, PersonKind};
use crate::property::PersonProperty;
use crate::store::RawPropertyStore;
use crate::value::{TextConverter, UriConverter};

/// Organizer of an event or to-do (RFC 5545 Section 3.8.4.3)
///
/// Carries only the shared `SENT-BY`, `CN` and `DIR` accessors of [`Person`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Organizer {
    attrs: PersonAttrs,
}

impl Organizer {
    /// `SENT-BY`: the calendar user acting on behalf of the organizer
    pub const SENT_BY: PersonProperty<UriConverter> = person::SENT_BY;

    /// `CN`: display name
    pub const COMMON_NAME: PersonProperty<TextConverter> = person::COMMON_NAME;

    /// `DIR`: directory entry reference
    pub const DIRECTORY: PersonProperty<UriConverter> = person::DIRECTORY;

    /// Parameter names bound by the typed accessors
    pub const PROPERTY_NAMES: &'static [&'static str] = &[KW_SENT_BY, KW_CN, KW_DIR];

    /// Create an organizer with no parameters
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self::from_attrs(PersonAttrs::new(email))
    }

    /// Create an organizer over an existing raw store
    #[must_use]
    pub fn with_extra(email: impl Into<String>, extra: RawPropertyStore) -> Self {
        Self::from_attrs(PersonAttrs::with_extra(email, extra))
    }
}

impl Person for Organizer {
    const KIND: PersonKind = PersonKind::Organizer;

    fn from_attrs(attrs: PersonAttrs) -> Self {
        Self { attrs }
    }

    fn attrs(&self) -> &PersonAttrs {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut PersonAttrs {
        &mut self.attrs
    }
}
