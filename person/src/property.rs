// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Typed accessors over single entries of a [`RawPropertyStore`].
//!
//! An accessor binds a parameter name to a [`ValueConverter`] and, through
//! [`Defaulted`], to a default value. Accessors are `const` descriptors shared
//! by every instance of an entity type; all state lives in the store.
//!
//! - [`PersonProperty`] admits zero or one value. An absent name and an
//!   empty sequence both read as "no value".
//! - [`PersonMultiProperty`] admits any number of values. Only an absent
//!   name reads as "no value", an empty sequence reads as an empty list.

use std::fmt;
use std::marker::PhantomData;

use crate::error::PersonError;
use crate::store::RawPropertyStore;
use crate::value::ValueConverter;

/// Typed get/set/delete over one named entry of a raw store.
///
/// Every operation touches only the entry named by [`PropertyAccessor::name`].
pub trait PropertyAccessor {
    /// The value accepted by [`PropertyAccessor::set`]
    type Value;

    /// The value returned by [`PropertyAccessor::get`]
    type Output;

    /// Parameter name this accessor is bound to
    fn name(&self) -> &'static str;

    /// Read the typed value.
    ///
    /// # Errors
    ///
    /// Returns an error if the raw values cannot be converted or violate the
    /// accessor's cardinality. The store is never modified.
    fn get(&self, store: &RawPropertyStore) -> Result<Self::Output, PersonError>;

    /// Replace the entry with the encoding of `value`.
    fn set(&self, store: &mut RawPropertyStore, value: Self::Value);

    /// Remove the entry, no-op if absent.
    fn delete(&self, store: &mut RawPropertyStore) {
        if store.remove(self.name()).is_some() {
            tracing::debug!(property = self.name(), "parameter deleted");
        }
    }
}

/// Accessor for a parameter admitting at most one value.
pub struct PersonProperty<C> {
    name: &'static str,
    converter: PhantomData<fn() -> C>,
}

impl<C: ValueConverter> PersonProperty<C> {
    /// Bind an accessor to a parameter name
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            converter: PhantomData,
        }
    }

    /// Attach a default returned when the parameter has no value
    #[must_use]
    pub const fn with_default(self, default: fn() -> C::Value) -> Defaulted<Self> {
        Defaulted {
            inner: self,
            default,
        }
    }
}

impl<C: ValueConverter> PropertyAccessor for PersonProperty<C> {
    type Value = C::Value;
    type Output = Option<C::Value>;

    fn name(&self) -> &'static str {
        self.name
    }

    fn get(&self, store: &RawPropertyStore) -> Result<Self::Output, PersonError> {
        match store.get(self.name) {
            None | Some([]) => Ok(None),
            Some([raw]) => Ok(Some(C::parse(raw)?)),
            Some(values) => {
                tracing::warn!(
                    property = self.name,
                    count = values.len(),
                    "single-valued parameter holds multiple values"
                );
                Err(PersonError::Cardinality {
                    property: self.name,
                    values: values.to_vec(),
                })
            }
        }
    }

    fn set(&self, store: &mut RawPropertyStore, value: Self::Value) {
        tracing::debug!(property = self.name, "parameter set");
        store.insert(self.name, vec![C::serialize(&value)]);
    }
}

/// Accessor for a parameter admitting any number of values.
///
/// Raw values keep their order and duplicates on both read and write.
pub struct PersonMultiProperty<C> {
    name: &'static str,
    converter: PhantomData<fn() -> C>,
}

impl<C: ValueConverter> PersonMultiProperty<C> {
    /// Bind an accessor to a parameter name
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            converter: PhantomData,
        }
    }

    /// Attach a default returned when the parameter name is absent
    #[must_use]
    pub const fn with_default(self, default: fn() -> Vec<C::Value>) -> Defaulted<Self> {
        Defaulted {
            inner: self,
            default,
        }
    }
}

impl<C: ValueConverter> PropertyAccessor for PersonMultiProperty<C> {
    type Value = Vec<C::Value>;
    type Output = Option<Vec<C::Value>>;

    fn name(&self) -> &'static str {
        self.name
    }

    fn get(&self, store: &RawPropertyStore) -> Result<Self::Output, PersonError> {
        let Some(values) = store.get(self.name) else {
            return Ok(None);
        };

        let parsed = values
            .iter()
            .map(|raw| C::parse(raw))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(parsed))
    }

    fn set(&self, store: &mut RawPropertyStore, value: Self::Value) {
        tracing::debug!(property = self.name, count = value.len(), "parameter set");
        let raw = value.iter().map(C::serialize).collect();
        store.insert(self.name, raw);
    }
}

/// An accessor paired with the value it reads as when the inner accessor
/// yields `None`.
pub struct Defaulted<P: PropertyAccessor> {
    inner: P,
    default: fn() -> P::Value,
}

impl<P: PropertyAccessor> Defaulted<P> {
    /// The accessor without its default
    #[must_use]
    pub const fn inner(&self) -> &P {
        &self.inner
    }

    /// The configured default value
    #[must_use]
    pub fn default_value(&self) -> P::Value {
        (self.default)()
    }
}

impl<P, T> PropertyAccessor for Defaulted<P>
where
    P: PropertyAccessor<Value = T, Output = Option<T>>,
{
    type Value = T;
    type Output = T;

    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn get(&self, store: &RawPropertyStore) -> Result<Self::Output, PersonError> {
        Ok(self.inner.get(store)?.unwrap_or_else(self.default))
    }

    fn set(&self, store: &mut RawPropertyStore, value: Self::Value) {
        self.inner.set(store, value);
    }

    fn delete(&self, store: &mut RawPropertyStore) {
        self.inner.delete(store);
    }
}

// Manual impls: the converter is a marker, so no bounds on `C` are needed.

impl<C> Clone for PersonProperty<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for PersonProperty<C> {}

impl<C> fmt::Debug for PersonProperty<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonProperty")
            .field("name", &self.name)
            .finish()
    }
}

impl<C> Clone for PersonMultiProperty<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for PersonMultiProperty<C> {}

impl<C> fmt::Debug for PersonMultiProperty<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonMultiProperty")
            .field("name", &self.name)
            .finish()
    }
}

impl<P: PropertyAccessor + Clone> Clone for Defaulted<P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            default: self.default,
        }
    }
}

impl<P: PropertyAccessor + Copy> Copy for Defaulted<P> {}

impl<P: PropertyAccessor + fmt::Debug> fmt::Debug for Defaulted<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Defaulted")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}
