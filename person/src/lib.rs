// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Typed `ORGANIZER` and `ATTENDEE` parameters over a raw multi-valued store.
//!
//! The document parser hands over one [`RawPropertyStore`] per calendar user;
//! [`Organizer`] and [`Attendee`] expose its parameters as typed attributes
//! with the defaults of RFC 5545, writing every change straight back to the
//! store.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]

mod error;
mod keyword;
mod person;
pub mod property;
mod store;
pub mod value;

pub use crate::error::{PersonError, ValueFormatError};
pub use crate::person::{Attendee, Organizer, Person, PersonAttrs, PersonBuilder, PersonKind};
pub use crate::property::{Defaulted, PersonMultiProperty, PersonProperty, PropertyAccessor};
pub use crate::store::RawPropertyStore;
pub use crate::value::{
    BooleanConverter, TextConverter, Uri, UriConverter, ValueConverter, ValueType,
};
