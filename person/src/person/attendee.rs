// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::PersonError;
use crate::keyword::{
    KW_CN, KW_CUTYPE, KW_CUTYPE_INDIVIDUAL, KW_DELEGATED_FROM, KW_DELEGATED_TO, KW_DIR,
    KW_MEMBER, KW_PARTSTAT, KW_PARTSTAT_NEEDS_ACTION, KW_ROLE, KW_ROLE_REQ_PARTICIPANT, KW_RSVP,
    KW_SENT_BY,
};
use crate::person::{self, Person, PersonAttrs, PersonBuilder, PersonKind};
use crate::property::{Defaulted, PersonMultiProperty, PersonProperty, PropertyAccessor};
use crate::store::RawPropertyStore;
use crate::value::{BooleanConverter, TextConverter, Uri, UriConverter};

/// Attendee of an event or to-do (RFC 5545 Section 3.8.4.1)
///
/// Single-valued parameters and their defaults:
///
/// | Attribute   | Parameter  | Default           |
/// |-------------|------------|-------------------|
/// | `user_type` | `CUTYPE`   | `INDIVIDUAL`      |
/// | `role`      | `ROLE`     | `REQ-PARTICIPANT` |
/// | `status`    | `PARTSTAT` | `NEEDS-ACTION`    |
/// | `rsvp`      | `RSVP`     | `false`           |
///
/// `member`, `delegated_to` and `delegated_from` reference other calendar
/// users by URI and may hold any number of values.
///
/// Values are kept as text: `PARTSTAT` for a to-do admits `COMPLETED` and
/// `IN-PROCESS`, and x-name or IANA tokens must survive unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Attendee {
    attrs: PersonAttrs,
}

fn default_user_type() -> String {
    KW_CUTYPE_INDIVIDUAL.to_owned()
}

fn default_role() -> String {
    KW_ROLE_REQ_PARTICIPANT.to_owned()
}

fn default_status() -> String {
    KW_PARTSTAT_NEEDS_ACTION.to_owned()
}

fn default_rsvp() -> bool {
    false
}

impl Attendee {
    /// `SENT-BY`: the calendar user acting on behalf of the attendee
    pub const SENT_BY: PersonProperty<UriConverter> = person::SENT_BY;

    /// `CN`: display name
    pub const COMMON_NAME: PersonProperty<TextConverter> = person::COMMON_NAME;

    /// `DIR`: directory entry reference
    pub const DIRECTORY: PersonProperty<UriConverter> = person::DIRECTORY;

    /// `CUTYPE`: calendar user type
    pub const USER_TYPE: Defaulted<PersonProperty<TextConverter>> =
        PersonProperty::new(KW_CUTYPE).with_default(default_user_type);

    /// `ROLE`: participation role
    pub const ROLE: Defaulted<PersonProperty<TextConverter>> =
        PersonProperty::new(KW_ROLE).with_default(default_role);

    /// `PARTSTAT`: participation status
    pub const STATUS: Defaulted<PersonProperty<TextConverter>> =
        PersonProperty::new(KW_PARTSTAT).with_default(default_status);

    /// `RSVP`: whether a reply is expected
    pub const RSVP: Defaulted<PersonProperty<BooleanConverter>> =
        PersonProperty::new(KW_RSVP).with_default(default_rsvp);

    /// `MEMBER`: groups or lists the attendee belongs to
    pub const MEMBER: PersonMultiProperty<UriConverter> = PersonMultiProperty::new(KW_MEMBER);

    /// `DELEGATED-TO`: users participation has been delegated to
    pub const DELEGATED_TO: PersonMultiProperty<UriConverter> =
        PersonMultiProperty::new(KW_DELEGATED_TO);

    /// `DELEGATED-FROM`: users that delegated their participation to this one
    pub const DELEGATED_FROM: PersonMultiProperty<UriConverter> =
        PersonMultiProperty::new(KW_DELEGATED_FROM);

    /// Parameter names bound by the typed accessors
    pub const PROPERTY_NAMES: &'static [&'static str] = &[
        KW_SENT_BY,
        KW_CN,
        KW_DIR,
        KW_CUTYPE,
        KW_MEMBER,
        KW_ROLE,
        KW_PARTSTAT,
        KW_RSVP,
        KW_DELEGATED_TO,
        KW_DELEGATED_FROM,
    ];

    /// Create an attendee with no parameters
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self::from_attrs(PersonAttrs::new(email))
    }

    /// Create an attendee over an existing raw store
    #[must_use]
    pub fn with_extra(email: impl Into<String>, extra: RawPropertyStore) -> Self {
        Self::from_attrs(PersonAttrs::with_extra(email, extra))
    }

    /// `CUTYPE` parameter, `INDIVIDUAL` if unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter holds several values.
    pub fn user_type(&self) -> Result<String, PersonError> {
        Self::USER_TYPE.get(self.extra())
    }

    /// Set the `CUTYPE` parameter
    pub fn set_user_type(&mut self, value: impl Into<String>) {
        Self::USER_TYPE.set(self.extra_mut(), value.into());
    }

    /// Remove the `CUTYPE` parameter
    pub fn delete_user_type(&mut self) {
        Self::USER_TYPE.delete(self.extra_mut());
    }

    /// `ROLE` parameter, `REQ-PARTICIPANT` if unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter holds several values.
    pub fn role(&self) -> Result<String, PersonError> {
        Self::ROLE.get(self.extra())
    }

    /// Set the `ROLE` parameter
    pub fn set_role(&mut self, value: impl Into<String>) {
        Self::ROLE.set(self.extra_mut(), value.into());
    }

    /// Remove the `ROLE` parameter
    pub fn delete_role(&mut self) {
        Self::ROLE.delete(self.extra_mut());
    }

    /// `PARTSTAT` parameter, `NEEDS-ACTION` if unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter holds several values.
    pub fn status(&self) -> Result<String, PersonError> {
        Self::STATUS.get(self.extra())
    }

    /// Set the `PARTSTAT` parameter
    pub fn set_status(&mut self, value: impl Into<String>) {
        Self::STATUS.set(self.extra_mut(), value.into());
    }

    /// Remove the `PARTSTAT` parameter
    pub fn delete_status(&mut self) {
        Self::STATUS.delete(self.extra_mut());
    }

    /// `RSVP` parameter, `false` if unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter holds several values or is neither
    /// `TRUE` nor `FALSE`.
    pub fn rsvp(&self) -> Result<bool, PersonError> {
        Self::RSVP.get(self.extra())
    }

    /// Set the `RSVP` parameter
    pub fn set_rsvp(&mut self, value: bool) {
        Self::RSVP.set(self.extra_mut(), value);
    }

    /// Remove the `RSVP` parameter
    pub fn delete_rsvp(&mut self) {
        Self::RSVP.delete(self.extra_mut());
    }

    /// `MEMBER` parameter, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is not a valid URI.
    pub fn member(&self) -> Result<Option<Vec<Uri>>, PersonError> {
        Self::MEMBER.get(self.extra())
    }

    /// Set the `MEMBER` parameter
    pub fn set_member(&mut self, values: impl IntoIterator<Item = Uri>) {
        Self::MEMBER.set(self.extra_mut(), values.into_iter().collect());
    }

    /// Remove the `MEMBER` parameter
    pub fn delete_member(&mut self) {
        Self::MEMBER.delete(self.extra_mut());
    }

    /// `DELEGATED-TO` parameter, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is not a valid URI.
    pub fn delegated_to(&self) -> Result<Option<Vec<Uri>>, PersonError> {
        Self::DELEGATED_TO.get(self.extra())
    }

    /// Set the `DELEGATED-TO` parameter
    pub fn set_delegated_to(&mut self, values: impl IntoIterator<Item = Uri>) {
        Self::DELEGATED_TO.set(self.extra_mut(), values.into_iter().collect());
    }

    /// Remove the `DELEGATED-TO` parameter
    pub fn delete_delegated_to(&mut self) {
        Self::DELEGATED_TO.delete(self.extra_mut());
    }

    /// `DELEGATED-FROM` parameter, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is not a valid URI.
    pub fn delegated_from(&self) -> Result<Option<Vec<Uri>>, PersonError> {
        Self::DELEGATED_FROM.get(self.extra())
    }

    /// Set the `DELEGATED-FROM` parameter
    pub fn set_delegated_from(&mut self, values: impl IntoIterator<Item = Uri>) {
        Self::DELEGATED_FROM.set(self.extra_mut(), values.into_iter().collect());
    }

    /// Remove the `DELEGATED-FROM` parameter
    pub fn delete_delegated_from(&mut self) {
        Self::DELEGATED_FROM.delete(self.extra_mut());
    }
}

impl Person for Attendee {
    const KIND: PersonKind = PersonKind::Attendee;

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

impl PersonBuilder<Attendee> {
    /// Initial `CUTYPE` parameter
    #[must_use]
    pub fn user_type(self, value: impl Into<String>) -> Self {
        self.assign(Attendee::USER_TYPE, value.into())
    }

    /// Initial `ROLE` parameter
    #[must_use]
    pub fn role(self, value: impl Into<String>) -> Self {
        self.assign(Attendee::ROLE, value.into())
    }

    /// Initial `PARTSTAT` parameter
    #[must_use]
    pub fn status(self, value: impl Into<String>) -> Self {
        self.assign(Attendee::STATUS, value.into())
    }

    /// Initial `RSVP` parameter
    #[must_use]
    pub fn rsvp(self, value: bool) -> Self {
        self.assign(Attendee::RSVP, value)
    }

    /// Initial `MEMBER` parameter
    #[must_use]
    pub fn member(self, values: impl IntoIterator<Item = Uri>) -> Self {
        self.assign(Attendee::MEMBER, values.into_iter().collect())
    }

    /// Initial `DELEGATED-TO` parameter
    #[must_use]
    pub fn delegated_to(self, values: impl IntoIterator<Item = Uri>) -> Self {
        self.assign(Attendee::DELEGATED_TO, values.into_iter().collect())
    }

    /// Initial `DELEGATED-FROM` parameter
    #[must_use]
    pub fn delegated_from(self, values: impl IntoIterator<Item = Uri>) -> Self {
        self.assign(Attendee::DELEGATED_FROM, values.into_iter().collect())
    }
}
