// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar users: the organizer and the attendees of a component.
//!
//! Both are an email address plus a [`RawPropertyStore`] holding the
//! parameters of the `ORGANIZER` / `ATTENDEE` property. Typed attributes are
//! read and written through the accessors declared on each type, so the
//! store and the typed view never disagree.

mod attendee;
mod builder;
mod organizer;

pub use attendee::Attendee;
pub use builder::PersonBuilder;
pub use organizer::Organizer;

use crate::error::PersonError;
use crate::keyword::{KW_ATTENDEE, KW_CN, KW_DIR, KW_ORGANIZER, KW_SENT_BY};
use crate::property::{PersonProperty, PropertyAccessor};
use crate::store::RawPropertyStore;
use crate::value::{TextConverter, Uri, UriConverter};

/// Which property a calendar user is the value of.
///
/// Descriptive only, accessors never look at it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum PersonKind {
    /// The `ORGANIZER` property (RFC 5545 Section 3.8.4.3)
    Organizer,
    /// The `ATTENDEE` property (RFC 5545 Section 3.8.4.1)
    Attendee,
}

impl PersonKind {
    /// Returns the property name keyword
    #[must_use]
    pub const fn property_name(self) -> &'static str {
        match self {
            Self::Organizer => KW_ORGANIZER,
            Self::Attendee => KW_ATTENDEE,
        }
    }
}

/// `SENT-BY`: the calendar user acting on behalf of this one
pub(crate) const SENT_BY: PersonProperty<UriConverter> = PersonProperty::new(KW_SENT_BY);

/// `CN`: display name
pub(crate) const COMMON_NAME: PersonProperty<TextConverter> = PersonProperty::new(KW_CN);

/// `DIR`: directory entry reference
pub(crate) const DIRECTORY: PersonProperty<UriConverter> = PersonProperty::new(KW_DIR);

/// Fields shared by every calendar user.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonAttrs {
    /// Calendar user address, usually an email
    pub email: String,

    /// Raw parameters, including those without a typed accessor
    #[cfg_attr(feature = "serde", serde(default))]
    pub extra: RawPropertyStore,
}

impl PersonAttrs {
    /// Create attributes with an empty raw store
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self::with_extra(email, RawPropertyStore::new())
    }

    /// Create attributes over an existing raw store
    #[must_use]
    pub fn with_extra(email: impl Into<String>, extra: RawPropertyStore) -> Self {
        Self {
            email: email.into(),
            extra,
        }
    }
}

/// Behavior shared by [`Organizer`] and [`Attendee`].
///
/// Implementors only expose their [`PersonAttrs`]; the email, the raw store
/// and the `SENT-BY`, `CN` and `DIR` accessors come for free. The shared
/// accessors are fixed here and cannot be rebound by an implementor.
pub trait Person: Sized {
    /// Role tag of the implementing type
    const KIND: PersonKind;

    /// Build the entity from its fields
    fn from_attrs(attrs: PersonAttrs) -> Self;

    /// The shared fields
    fn attrs(&self) -> &PersonAttrs;

    /// The shared fields, mutably
    fn attrs_mut(&mut self) -> &mut PersonAttrs;

    /// Start building an entity, see [`PersonBuilder`]
    fn builder(email: impl Into<String>) -> PersonBuilder<Self> {
        PersonBuilder::new(email)
    }

    /// Role tag of this entity
    fn kind(&self) -> PersonKind {
        Self::KIND
    }

    /// Calendar user address
    fn email(&self) -> &str {
        &self.attrs().email
    }

    /// Replace the calendar user address
    fn set_email(&mut self, email: impl Into<String>) {
        self.attrs_mut().email = email.into();
    }

    /// The raw parameter store
    fn extra(&self) -> &RawPropertyStore {
        &self.attrs().extra
    }

    /// The raw parameter store, for parameters without a typed accessor
    fn extra_mut(&mut self) -> &mut RawPropertyStore {
        &mut self.attrs_mut().extra
    }

    /// `SENT-BY` parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter holds several values or an invalid URI.
    fn sent_by(&self) -> Result<Option<Uri>, PersonError> {
        SENT_BY.get(self.extra())
    }

    /// Set the `SENT-BY` parameter
    fn set_sent_by(&mut self, value: Uri) {
        SENT_BY.set(self.extra_mut(), value);
    }

    /// Remove the `SENT-BY` parameter
    fn delete_sent_by(&mut self) {
        SENT_BY.delete(self.extra_mut());
    }

    /// `CN` parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter holds several values.
    fn common_name(&self) -> Result<Option<String>, PersonError> {
        COMMON_NAME.get(self.extra())
    }

    /// Set the `CN` parameter
    fn set_common_name(&mut self, value: impl Into<String>) {
        COMMON_NAME.set(self.extra_mut(), value.into());
    }

    /// Remove the `CN` parameter
    fn delete_common_name(&mut self) {
        COMMON_NAME.delete(self.extra_mut());
    }

    /// `DIR` parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter holds several values or an invalid URI.
    fn directory(&self) -> Result<Option<Uri>, PersonError> {
        DIRECTORY.get(self.extra())
    }

    /// Set the `DIR` parameter
    fn set_directory(&mut self, value: Uri) {
        DIRECTORY.set(self.extra_mut(), value);
    }

    /// Remove the `DIR` parameter
    fn delete_directory(&mut self) {
        DIRECTORY.delete(self.extra_mut());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names() {
        assert_eq!(PersonKind::Organizer.to_string(), "ORGANIZER");
        assert_eq!(PersonKind::Attendee.as_ref(), "ATTENDEE");
        assert_eq!("ATTENDEE".parse::<PersonKind>(), Ok(PersonKind::Attendee));
        assert_eq!(
            PersonKind::Organizer.property_name(),
            PersonKind::Organizer.to_string()
        );
    }

    #[test]
    fn attrs_default_to_empty_store() {
        let attrs = PersonAttrs::new("a@example.com");
        assert_eq!(attrs.email, "a@example.com");
        assert!(attrs.extra.is_empty());
    }
}
