// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runtime-bound instance accessors.
//!
//! This module provides [`ClassGetter`], [`ClassRefGetter`], [`ClassSetter`]
//! and [`ClassGetterSetter`]. Each holds a borrow of one target object and a
//! plain function pointer selecting the method to call on it.
//!
//! The borrow is what guarantees the target outlives the accessor, so there
//! is no runtime liveness check and a dangling target cannot be expressed:
//!
//! ```rust,compile_fail
//! use understory_accessor::{ClassGetter, Getter};
//!
//! struct Counter(i32);
//!
//! let getter = {
//!     let counter = Counter(1);
//!     ClassGetter::new(&counter, |c: &Counter| c.0)
//! };
//! assert_eq!(getter.get(), 1);
//! ```
//!
//! See [`crate::StaticClassGetter`] and friends for variants whose methods are
//! fixed in the type instead of stored per instance.

use core::fmt;

use crate::contract::{Getter, RefGetter, Setter};

/// A read-only accessor calling a method on a borrowed object.
///
/// # Example
///
/// ```rust
/// use understory_accessor::{ClassGetter, Getter};
///
/// struct Counter {
///     var: i32,
/// }
///
/// impl Counter {
///     fn var(&self) -> i32 {
///         self.var
///     }
/// }
///
/// let counter = Counter { var: 0 };
/// let getter = ClassGetter::new(&counter, Counter::var);
/// assert_eq!(getter.get(), 0);
/// ```
pub struct ClassGetter<'a, C: ?Sized, T> {
    target: &'a C,
    getter: fn(&C) -> T,
}

impl<'a, C: ?Sized, T> ClassGetter<'a, C, T> {
    /// Binds `getter` to `target`.
    #[must_use]
    #[inline]
    pub const fn new(target: &'a C, getter: fn(&C) -> T) -> Self {
        Self { target, getter }
    }

    /// Returns the bound object.
    #[must_use]
    #[inline]
    pub const fn target(&self) -> &'a C {
        self.target
    }
}

impl<C: ?Sized, T> Getter<T> for ClassGetter<'_, C, T> {
    #[inline]
    fn get(&self) -> T {
        (self.getter)(self.target)
    }
}

impl<C: ?Sized, T> fmt::Debug for ClassGetter<'_, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassGetter")
            .field("target", &core::any::type_name::<C>())
            .field("type", &core::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

/// A read-only accessor returning a reference from a method on a borrowed
/// object.
///
/// # Example
///
/// ```rust
/// use understory_accessor::{ClassRefGetter, RefGetter};
///
/// struct Document {
///     title: String,
/// }
///
/// impl Document {
///     fn title(&self) -> &str {
///         &self.title
///     }
/// }
///
/// let doc = Document { title: "Notes".into() };
/// let title = ClassRefGetter::new(&doc, Document::title);
/// assert_eq!(title.get_ref(), "Notes");
/// ```
pub struct ClassRefGetter<'a, C: ?Sized, T: ?Sized> {
    target: &'a C,
    getter: fn(&C) -> &T,
}

impl<'a, C: ?Sized, T: ?Sized> ClassRefGetter<'a, C, T> {
    /// Binds `getter` to `target`.
    #[must_use]
    #[inline]
    pub const fn new(target: &'a C, getter: fn(&C) -> &T) -> Self {
        Self { target, getter }
    }

    /// Returns the bound object.
    #[must_use]
    #[inline]
    pub const fn target(&self) -> &'a C {
        self.target
    }
}

impl<C: ?Sized, T: ?Sized> RefGetter<T> for ClassRefGetter<'_, C, T> {
    #[inline]
    fn get_ref(&self) -> &T {
        (self.getter)(self.target)
    }
}

impl<T: Clone, C: ?Sized> Getter<T> for ClassRefGetter<'_, C, T> {
    #[inline]
    fn get(&self) -> T {
        self.get_ref().clone()
    }
}

impl<C: ?Sized, T: ?Sized> fmt::Debug for ClassRefGetter<'_, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassRefGetter")
            .field("target", &core::any::type_name::<C>())
            .field("type", &core::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

/// A write-only accessor calling a mutating method on a borrowed object.
///
/// The accessor holds the exclusive borrow of its target until it is dropped.
///
/// # Example
///
/// ```rust
/// use understory_accessor::{ClassSetter, Setter};
///
/// struct Counter {
///     var: i32,
/// }
///
/// impl Counter {
///     fn set_var(&mut self, var: i32) {
///         self.var = var;
///     }
/// }
///
/// let mut counter = Counter { var: 0 };
/// let mut setter = ClassSetter::new(&mut counter, Counter::set_var);
/// setter.set(10);
/// assert_eq!(counter.var, 10);
/// ```
pub struct ClassSetter<'a, C: ?Sized, T> {
    target: &'a mut C,
    setter: fn(&mut C, T),
}

impl<'a, C: ?Sized, T> ClassSetter<'a, C, T> {
    /// Binds `setter` to `target`.
    #[must_use]
    #[inline]
    pub fn new(target: &'a mut C, setter: fn(&mut C, T)) -> Self {
        Self { target, setter }
    }

    /// Returns the bound object.
    #[must_use]
    #[inline]
    pub fn target(&self) -> &C {
        self.target
    }
}

impl<C: ?Sized, T> Setter<T> for ClassSetter<'_, C, T> {
    #[inline]
    fn set(&mut self, value: T) {
        (self.setter)(self.target, value);
    }
}

impl<C: ?Sized, T> fmt::Debug for ClassSetter<'_, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassSetter")
            .field("target", &core::any::type_name::<C>())
            .field("type", &core::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

/// A read/write accessor calling a pair of methods on one borrowed object.
///
/// The target is bound once at construction. Reads call `getter` and writes
/// call `setter`, both on that same object.
///
/// # Example
///
/// ```rust
/// use understory_accessor::{ClassGetterSetter, Getter, Setter};
///
/// struct Counter {
///     var: i32,
/// }
///
/// impl Counter {
///     fn var(&self) -> i32 {
///         self.var
///     }
///
///     fn set_var(&mut self, var: i32) {
///         self.var = var;
///     }
/// }
///
/// let mut counter = Counter { var: 0 };
/// let mut property = ClassGetterSetter::new(&mut counter, Counter::var, Counter::set_var);
/// assert_eq!(property.get(), 0);
/// property.set(10);
/// assert_eq!(property.get(), 10);
/// ```
pub struct ClassGetterSetter<'a, C: ?Sized, T> {
    target: &'a mut C,
    getter: fn(&C) -> T,
    setter: fn(&mut C, T),
}

impl<'a, C: ?Sized, T> ClassGetterSetter<'a, C, T> {
    /// Binds `getter` and `setter` to `target`.
    #[must_use]
    #[inline]
    pub fn new(target: &'a mut C, getter: fn(&C) -> T, setter: fn(&mut C, T)) -> Self {
        Self {
            target,
            getter,
            setter,
        }
    }

    /// Returns the bound object.
    #[must_use]
    #[inline]
    pub fn target(&self) -> &C {
        self.target
    }
}

impl<C: ?Sized, T> Getter<T> for ClassGetterSetter<'_, C, T> {
    #[inline]
    fn get(&self) -> T {
        (self.getter)(self.target)
    }
}

impl<C: ?Sized, T> Setter<T> for ClassGetterSetter<'_, C, T> {
    #[inline]
    fn set(&mut self, value: T) {
        (self.setter)(self.target, value);
    }
}

impl<C: ?Sized, T> fmt::Debug for ClassGetterSetter<'_, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassGetterSetter")
            .field("target", &core::any::type_name::<C>())
            .field("type", &core::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}
