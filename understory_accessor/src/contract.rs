// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability contracts shared by every accessor.
//!
//! This module provides [`Getter`], [`RefGetter`] and [`Setter`], the read and
//! write interfaces that each binding strategy implements, along with
//! [`GetterSetterExt`] for read-modify-write helpers on anything that is both.
//!
//! # Copying
//!
//! Accessors are bindings, not values. None of the types in this crate
//! implement [`Clone`] or [`Copy`], so duplicating an accessor is rejected at
//! compile time:
//!
//! ```rust,compile_fail
//! use understory_accessor::DefaultGetterSetter;
//!
//! let a = DefaultGetterSetter::new(1_i32);
//! let b = a.clone();
//! ```
//!
//! Assigning one accessor to another moves the binding, and the source can no
//! longer be used:
//!
//! ```rust,compile_fail
//! use understory_accessor::{DefaultGetter, Getter};
//!
//! let a = DefaultGetter::new(1_i32);
//! let b = a;
//! assert_eq!(a.get(), b.get());
//! ```
//!
//! Writing a value always goes through [`Setter::set`].

use alloc::boxed::Box;

/// Read access to a value of type `T`, produced by copy.
///
/// # Example
///
/// ```rust
/// use understory_accessor::{DefaultGetter, FunctionGetter, Getter};
///
/// fn doubled(source: &dyn Getter<i32>) -> i32 {
///     source.get() * 2
/// }
///
/// let stored = DefaultGetter::new(4);
/// let computed = FunctionGetter::new(|| 5);
/// assert_eq!(doubled(&stored), 8);
/// assert_eq!(doubled(&computed), 10);
/// ```
pub trait Getter<T> {
    /// Returns the current value.
    fn get(&self) -> T;
}

/// Read access to a value of type `T` by shared reference.
///
/// Use this instead of [`Getter`] when copying `T` is expensive or when `T`
/// is not [`Clone`] at all.
pub trait RefGetter<T: ?Sized> {
    /// Returns a reference to the current value.
    fn get_ref(&self) -> &T;
}

/// Write access to a value of type `T`.
///
/// The value is moved into the accessor's dispatch path.
pub trait Setter<T> {
    /// Replaces the current value with `value`.
    fn set(&mut self, value: T);
}

impl<T, G: Getter<T> + ?Sized> Getter<T> for &G {
    #[inline]
    fn get(&self) -> T {
        (**self).get()
    }
}

impl<T, G: Getter<T> + ?Sized> Getter<T> for &mut G {
    #[inline]
    fn get(&self) -> T {
        (**self).get()
    }
}

impl<T, G: Getter<T> + ?Sized> Getter<T> for Box<G> {
    #[inline]
    fn get(&self) -> T {
        (**self).get()
    }
}

impl<T: ?Sized, G: RefGetter<T> + ?Sized> RefGetter<T> for &G {
    #[inline]
    fn get_ref(&self) -> &T {
        (**self).get_ref()
    }
}

impl<T: ?Sized, G: RefGetter<T> + ?Sized> RefGetter<T> for Box<G> {
    #[inline]
    fn get_ref(&self) -> &T {
        (**self).get_ref()
    }
}

impl<T, S: Setter<T> + ?Sized> Setter<T> for &mut S {
    #[inline]
    fn set(&mut self, value: T) {
        (**self).set(value);
    }
}

impl<T, S: Setter<T> + ?Sized> Setter<T> for Box<S> {
    #[inline]
    fn set(&mut self, value: T) {
        (**self).set(value);
    }
}

/// Read-modify-write helpers for accessors that can both read and write.
///
/// Every accessor implementing [`Getter`] and [`Setter`] for the same `T` gets
/// these methods. Each helper performs exactly one read followed by exactly
/// one write.
///
/// # Example
///
/// ```rust
/// use understory_accessor::{DefaultGetterSetter, Getter, GetterSetterExt};
///
/// let mut count = DefaultGetterSetter::new(1_u32);
/// count.update(|n| n + 1);
/// assert_eq!(count.get(), 2);
///
/// let previous = count.replace(10);
/// assert_eq!(previous, 2);
/// assert_eq!(count.get(), 10);
/// ```
pub trait GetterSetterExt<T>: Getter<T> + Setter<T> {
    /// Writes `value` and returns the value read just before the write.
    fn replace(&mut self, value: T) -> T {
        let previous = self.get();
        self.set(value);
        previous
    }

    /// Reads the current value, passes it through `f`, and writes the result.
    fn update(&mut self, f: impl FnOnce(T) -> T) {
        let current = self.get();
        self.set(f(current));
    }
}

impl<T, A: Getter<T> + Setter<T> + ?Sized> GetterSetterExt<T> for A {}
