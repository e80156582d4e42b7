// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::marker::PhantomData;

use crate::person::{COMMON_NAME, DIRECTORY, Person, PersonAttrs, SENT_BY};
use crate::property::PropertyAccessor;
use crate::store::RawPropertyStore;
use crate::value::Uri;

type Assignment = Box<dyn FnOnce(&mut RawPropertyStore)>;

/// Builder applying initial attribute values through the typed accessors.
///
/// Values are recorded in call order and written by [`PersonBuilder::build`]
/// on top of the initial raw store, so they go through exactly the same
/// conversion as a later `set_*` call.
///
/// ```
/// use icalperson::{Attendee, Person};
///
/// let attendee = Attendee::builder("mailto:jane@example.com")
///     .common_name("Jane Doe")
///     .status("ACCEPTED")
///     .rsvp(true)
///     .build();
///
/// assert_eq!(attendee.status().unwrap(), "ACCEPTED");
/// assert_eq!(attendee.extra().get("RSVP"), Some(&["TRUE".to_owned()][..]));
/// ```
///
/// Only the accessors declared by `P` are available, an organizer cannot be
/// given attendee parameters:
///
/// ```compile_fail
/// use icalperson::{Attendee, Organizer, Person};
///
/// let organizer = Organizer::builder("mailto:boss@example.com")
///     .assign(Attendee::RSVP, true)
///     .build();
/// ```
///
/// ```compile_fail
/// use icalperson::{Organizer, Person};
///
/// let organizer = Organizer::builder("mailto:boss@example.com")
///     .rsvp(true)
///     .build();
/// ```
pub struct PersonBuilder<P> {
    email: String,
    extra: RawPropertyStore,
    assignments: Vec<Assignment>,
    person: PhantomData<fn() -> P>,
}

impl<P: Person> PersonBuilder<P> {
    /// Start building an entity with the given calendar user address
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            extra: RawPropertyStore::new(),
            assignments: Vec::new(),
            person: PhantomData,
        }
    }

    /// Initial raw store; typed values are applied on top of it
    #[must_use]
    pub fn extra(mut self, extra: RawPropertyStore) -> Self {
        self.extra = extra;
        self
    }

    /// Record a value to be written through `accessor`
    #[must_use]
    pub(crate) fn assign<A>(mut self, accessor: A, value: A::Value) -> Self
    where
        A: PropertyAccessor + 'static,
        A::Value: 'static,
    {
        self.assignments
            .push(Box::new(move |store: &mut RawPropertyStore| {
                accessor.set(store, value);
            }));
        self
    }

    /// Initial `SENT-BY` parameter
    #[must_use]
    pub fn sent_by(self, value: Uri) -> Self {
        self.assign(SENT_BY, value)
    }

    /// Initial `CN` parameter
    #[must_use]
    pub fn common_name(self, value: impl Into<String>) -> Self {
        self.assign(COMMON_NAME, value.into())
    }

    /// Initial `DIR` parameter
    #[must_use]
    pub fn directory(self, value: Uri) -> Self {
        self.assign(DIRECTORY, value)
    }

    /// Apply the recorded values and build the entity
    #[must_use]
    pub fn build(self) -> P {
        let Self {
            email,
            mut extra,
            assignments,
            ..
        } = self;

        tracing::debug!(
            kind = %P::KIND,
            count = assignments.len(),
            "building calendar user"
        );
        for assign in assignments {
            assign(&mut extra);
        }
        P::from_attrs(PersonAttrs::with_extra(email, extra))
    }
}

impl<P> fmt::Debug for PersonBuilder<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonBuilder")
            .field("email", &self.email)
            .field("extra", &self.extra)
            .field("assignments", &self.assignments.len())
            .finish()
    }
}
