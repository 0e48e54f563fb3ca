// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stored-value accessors.
//!
//! This module provides [`DefaultGetter`], [`DefaultSetter`] and
//! [`DefaultGetterSetter`], accessors that own their value directly. All three
//! are thin wrappers over a single private [`StoredValue`], so the combined
//! form has exactly one copy of the value.

use core::fmt;

use crate::contract::{Getter, RefGetter, Setter};

/// Owns the one value behind a stored-value accessor.
#[derive(Default)]
pub(crate) struct StoredValue<T> {
    value: T,
}

impl<T> StoredValue<T> {
    #[inline]
    pub(crate) const fn new(value: T) -> Self {
        Self { value }
    }

    #[inline]
    pub(crate) fn read_ref(&self) -> &T {
        &self.value
    }

    #[inline]
    pub(crate) fn write(&mut self, value: T) {
        self.value = value;
    }

    #[inline]
    pub(crate) fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Clone> StoredValue<T> {
    #[inline]
    pub(crate) fn read(&self) -> T {
        self.value.clone()
    }
}

impl<T: fmt::Debug> fmt::Debug for StoredValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

/// A read-only accessor that owns its value.
///
/// # Example
///
/// ```rust
/// use understory_accessor::{DefaultGetter, Getter, RefGetter};
///
/// let width = DefaultGetter::new(10.0_f32);
/// assert_eq!(width.get(), 10.0);
/// assert_eq!(width.get_ref(), &10.0);
/// ```
#[derive(Default)]
pub struct DefaultGetter<T> {
    slot: StoredValue<T>,
}

impl<T> DefaultGetter<T> {
    /// Creates a getter holding `init`.
    #[must_use]
    #[inline]
    pub const fn new(init: T) -> Self {
        Self {
            slot: StoredValue::new(init),
        }
    }

    /// Consumes the getter and returns the value it holds.
    #[must_use]
    #[inline]
    pub fn into_inner(self) -> T {
        self.slot.into_inner()
    }
}

impl<T: Clone> Getter<T> for DefaultGetter<T> {
    #[inline]
    fn get(&self) -> T {
        self.slot.read()
    }
}

impl<T> RefGetter<T> for DefaultGetter<T> {
    #[inline]
    fn get_ref(&self) -> &T {
        self.slot.read_ref()
    }
}

impl<T> From<T> for DefaultGetter<T> {
    #[inline]
    fn from(init: T) -> Self {
        Self::new(init)
    }
}

impl<T: fmt::Debug> fmt::Debug for DefaultGetter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultGetter")
            .field("value", &self.slot)
            .finish()
    }
}

/// A write-only accessor that owns its value.
///
/// The stored value cannot be read back through the accessor; its owner can
/// recover it with [`DefaultSetter::into_inner`].
///
/// # Example
///
/// ```rust
/// use understory_accessor::{DefaultSetter, Setter};
///
/// let mut height = DefaultSetter::new(20.0_f32);
/// height.set(15.0);
/// assert_eq!(height.into_inner(), 15.0);
/// ```
#[derive(Default)]
pub struct DefaultSetter<T> {
    slot: StoredValue<T>,
}

impl<T> DefaultSetter<T> {
    /// Creates a setter holding `init`.
    #[must_use]
    #[inline]
    pub const fn new(init: T) -> Self {
        Self {
            slot: StoredValue::new(init),
        }
    }

    /// Consumes the setter and returns the last value written.
    #[must_use]
    #[inline]
    pub fn into_inner(self) -> T {
        self.slot.into_inner()
    }
}

impl<T> Setter<T> for DefaultSetter<T> {
    #[inline]
    fn set(&mut self, value: T) {
        self.slot.write(value);
    }
}

impl<T> From<T> for DefaultSetter<T> {
    #[inline]
    fn from(init: T) -> Self {
        Self::new(init)
    }
}

impl<T: fmt::Debug> fmt::Debug for DefaultSetter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultSetter")
            .field("value", &self.slot)
            .finish()
    }
}

/// A read/write accessor that owns its value.
///
/// Reads and writes go through the same stored value, so a read always
/// observes the most recent write.
///
/// # Example
///
/// ```rust
/// use understory_accessor::{DefaultGetterSetter, Getter, Setter};
///
/// let mut count = DefaultGetterSetter::new(20_i32);
/// assert_eq!(count.get(), 20);
///
/// count.set(200);
/// assert_eq!(count.get(), 200);
/// ```
#[derive(Default)]
pub struct DefaultGetterSetter<T> {
    slot: StoredValue<T>,
}

impl<T> DefaultGetterSetter<T> {
    /// Creates an accessor holding `init`.
    #[must_use]
    #[inline]
    pub const fn new(init: T) -> Self {
        Self {
            slot: StoredValue::new(init),
        }
    }

    /// Consumes the accessor and returns the value it holds.
    #[must_use]
    #[inline]
    pub fn into_inner(self) -> T {
        self.slot.into_inner()
    }
}

impl<T: Clone> Getter<T> for DefaultGetterSetter<T> {
    #[inline]
    fn get(&self) -> T {
        self.slot.read()
    }
}

impl<T> RefGetter<T> for DefaultGetterSetter<T> {
    #[inline]
    fn get_ref(&self) -> &T {
        self.slot.read_ref()
    }
}

impl<T> Setter<T> for DefaultGetterSetter<T> {
    #[inline]
    fn set(&mut self, value: T) {
        self.slot.write(value);
    }
}

impl<T> From<T> for DefaultGetterSetter<T> {
    #[inline]
    fn from(init: T) -> Self {
        Self::new(init)
    }
}

impl<T: fmt::Debug> fmt::Debug for DefaultGetterSetter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultGetterSetter")
            .field("value", &self.slot)
            .finish()
    }
}
