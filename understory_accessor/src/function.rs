// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Free-dispatch accessors.
//!
//! This module provides [`FunctionGetter`], [`FunctionSetter`] and
//! [`FunctionGetterSetter`], accessors that hold boxed callables and invoke
//! them on every read or write. The value itself lives wherever the callables
//! put it.
//!
//! The `'a` lifetime bounds everything the callables capture, so an accessor
//! can never outlive the state it reads or writes.

use alloc::boxed::Box;
use core::cell::RefCell;
use core::fmt;

use crate::contract::{Getter, Setter};
use crate::error::BindingError;

/// Boxed read callable held by a [`FunctionGetter`].
pub type GetterFn<'a, T> = Box<dyn Fn() -> T + 'a>;

/// Boxed write callable held by a [`FunctionSetter`].
pub type SetterFn<'a, T> = Box<dyn FnMut(T) + 'a>;

/// A read-only accessor that calls a closure on every read.
///
/// # Example
///
/// ```rust
/// use core::cell::Cell;
/// use understory_accessor::{FunctionGetter, Getter};
///
/// let source = Cell::new(3);
/// let getter = FunctionGetter::new(|| source.get() * 10);
/// assert_eq!(getter.get(), 30);
///
/// source.set(4);
/// assert_eq!(getter.get(), 40);
/// ```
pub struct FunctionGetter<'a, T> {
    getter: GetterFn<'a, T>,
}

impl<'a, T> FunctionGetter<'a, T> {
    /// Creates a getter that returns the result of `getter` on each read.
    #[must_use]
    pub fn new(getter: impl Fn() -> T + 'a) -> Self {
        Self {
            getter: Box::new(getter),
        }
    }

    /// Creates a getter from a callable that may be absent.
    ///
    /// Returns [`BindingError::MissingGetter`] if `getter` is `None`.
    pub fn from_optional<F>(getter: Option<F>) -> Result<Self, BindingError>
    where
        F: Fn() -> T + 'a,
    {
        match getter {
            Some(getter) => Ok(Self::new(getter)),
            None => Err(rejected(BindingError::MissingGetter)),
        }
    }

    /// Creates a getter that reads `target` through `read` on each read.
    ///
    /// ```rust
    /// use understory_accessor::{FunctionGetter, Getter};
    ///
    /// struct Label {
    ///     text: &'static str,
    /// }
    ///
    /// impl Label {
    ///     fn len(&self) -> usize {
    ///         self.text.len()
    ///     }
    /// }
    ///
    /// let label = Label { text: "hello" };
    /// let len = FunctionGetter::bind(&label, Label::len);
    /// assert_eq!(len.get(), 5);
    /// ```
    #[must_use]
    pub fn bind<C: ?Sized>(target: &'a C, read: impl Fn(&C) -> T + 'a) -> Self {
        Self::new(move || read(target))
    }
}

impl<T> Getter<T> for FunctionGetter<'_, T> {
    #[inline]
    fn get(&self) -> T {
        (self.getter)()
    }
}

impl<T> fmt::Debug for FunctionGetter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionGetter")
            .field("type", &core::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

/// A write-only accessor that calls a closure on every write.
///
/// # Example
///
/// ```rust
/// use understory_accessor::{FunctionSetter, Setter};
///
/// let mut received = Vec::new();
/// {
///     let mut setter = FunctionSetter::new(|value: i32| received.push(value));
///     setter.set(1);
///     setter.set(2);
/// }
/// assert_eq!(received, [1, 2]);
/// ```
pub struct FunctionSetter<'a, T> {
    setter: SetterFn<'a, T>,
}

impl<'a, T> FunctionSetter<'a, T> {
    /// Creates a setter that passes every written value to `setter`.
    #[must_use]
    pub fn new(setter: impl FnMut(T) + 'a) -> Self {
        Self {
            setter: Box::new(setter),
        }
    }

    /// Creates a setter from a callable that may be absent.
    ///
    /// Returns [`BindingError::MissingSetter`] if `setter` is `None`.
    pub fn from_optional<F>(setter: Option<F>) -> Result<Self, BindingError>
    where
        F: FnMut(T) + 'a,
    {
        match setter {
            Some(setter) => Ok(Self::new(setter)),
            None => Err(rejected(BindingError::MissingSetter)),
        }
    }

    /// Creates a setter that writes to `target` through `write` on each write.
    ///
    /// The setter holds the exclusive borrow of `target` until it is dropped.
    #[must_use]
    pub fn bind<C: ?Sized>(target: &'a mut C, mut write: impl FnMut(&mut C, T) + 'a) -> Self {
        Self::new(move |value| write(&mut *target, value))
    }
}

impl<T> Setter<T> for FunctionSetter<'_, T> {
    #[inline]
    fn set(&mut self, value: T) {
        (self.setter)(value);
    }
}

impl<T> fmt::Debug for FunctionSetter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionSetter")
            .field("type", &core::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

/// A read/write accessor composed of a [`FunctionGetter`] and a
/// [`FunctionSetter`].
///
/// Reads go to the getter half and writes go to the setter half. Nothing ties
/// the two together: a write is only visible to a later read if both closures
/// reach the same state.
///
/// # Example
///
/// ```rust
/// use core::cell::Cell;
/// use understory_accessor::{FunctionGetterSetter, Getter, Setter};
///
/// let var = Cell::new(0);
/// let mut property = FunctionGetterSetter::new(|| var.get(), |v| var.set(v));
///
/// property.set(40);
/// assert_eq!(property.get(), 40);
/// ```
pub struct FunctionGetterSetter<'a, T> {
    getter: FunctionGetter<'a, T>,
    setter: FunctionSetter<'a, T>,
}

impl<'a, T> FunctionGetterSetter<'a, T> {
    /// Creates an accessor from a read closure and a write closure.
    #[must_use]
    pub fn new(getter: impl Fn() -> T + 'a, setter: impl FnMut(T) + 'a) -> Self {
        Self::from_parts(FunctionGetter::new(getter), FunctionSetter::new(setter))
    }

    /// Creates an accessor from an existing getter and setter.
    #[must_use]
    #[inline]
    pub fn from_parts(getter: FunctionGetter<'a, T>, setter: FunctionSetter<'a, T>) -> Self {
        Self { getter, setter }
    }

    /// Splits the accessor back into its getter and setter.
    #[must_use]
    #[inline]
    pub fn into_parts(self) -> (FunctionGetter<'a, T>, FunctionSetter<'a, T>) {
        (self.getter, self.setter)
    }

    /// Creates an accessor from callables that may be absent.
    ///
    /// The getter is checked first, so if both are `None` the error is
    /// [`BindingError::MissingGetter`].
    pub fn from_optional<G, S>(
        getter: Option<G>,
        setter: Option<S>,
    ) -> Result<Self, BindingError>
    where
        G: Fn() -> T + 'a,
        S: FnMut(T) + 'a,
    {
        let getter = FunctionGetter::from_optional(getter)?;
        let setter = FunctionSetter::from_optional(setter)?;
        Ok(Self::from_parts(getter, setter))
    }

    /// Creates an accessor that reads and writes the object inside `target`.
    ///
    /// Each read borrows the cell shared for the duration of `read`, and each
    /// write borrows it mutably for the duration of `write`.
    ///
    /// # Panics
    ///
    /// A read panics if the cell is mutably borrowed elsewhere at that moment,
    /// and a write panics if the cell is borrowed at all.
    ///
    /// # Example
    ///
    /// ```rust
    /// use core::cell::RefCell;
    /// use understory_accessor::{FunctionGetterSetter, Getter, Setter};
    ///
    /// #[derive(Default)]
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
    /// let counter = RefCell::new(Counter::default());
    /// let mut property = FunctionGetterSetter::bind(&counter, Counter::var, Counter::set_var);
    /// property.set(30);
    /// assert_eq!(property.get(), 30);
    /// assert_eq!(counter.borrow().var(), 30);
    /// ```
    #[must_use]
    pub fn bind<C: ?Sized>(
        target: &'a RefCell<C>,
        read: impl Fn(&C) -> T + 'a,
        mut write: impl FnMut(&mut C, T) + 'a,
    ) -> Self {
        Self::new(
            move || read(&target.borrow()),
            move |value| write(&mut target.borrow_mut(), value),
        )
    }
}

impl<T> Getter<T> for FunctionGetterSetter<'_, T> {
    #[inline]
    fn get(&self) -> T {
        self.getter.get()
    }
}

impl<T> Setter<T> for FunctionGetterSetter<'_, T> {
    #[inline]
    fn set(&mut self, value: T) {
        self.setter.set(value);
    }
}

impl<T> fmt::Debug for FunctionGetterSetter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionGetterSetter")
            .field("type", &core::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

fn rejected(error: BindingError) -> BindingError {
    log::debug!("rejecting free-dispatch accessor: {error}");
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec::Vec;
    use core::cell::Cell;

    struct Counter {
        var: i32,
    }

    impl Counter {
        fn var(&self) -> i32 {
            self.var
        }

        fn set_var(&mut self, var: i32) {
            self.var = var;
        }
    }

    #[test]
    fn getter_dispatches_on_every_read() {
        let calls = Cell::new(0_u32);
        let getter = FunctionGetter::new(|| {
            calls.set(calls.get() + 1);
            calls.get()
        });
        assert_eq!(getter.get(), 1);
        assert_eq!(getter.get(), 2);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn setter_forwards_each_value_once() {
        let mut seen = Vec::new();
        {
            let mut setter = FunctionSetter::new(|v: u8| seen.push(v));
            setter.set(4);
            setter.set(4);
            setter.set(9);
        }
        assert_eq!(seen, [4, 4, 9]);
    }

    #[test]
    fn setter_then_getter_over_shared_state() {
        let state = Cell::new(0);
        let mut setter = FunctionSetter::new(|v: i32| state.set(v * 2));
        let getter = FunctionGetter::new(|| state.get());

        setter.set(5);
        assert_eq!(getter.get(), 10);
    }

    #[test]
    fn bound_getter_reads_object() {
        let counter = Counter { var: 3 };
        let getter = FunctionGetter::bind(&counter, Counter::var);
        assert_eq!(getter.get(), 3);
    }

    #[test]
    fn bound_setter_writes_object() {
        let mut counter = Counter { var: 0 };
        {
            let mut setter = FunctionSetter::bind(&mut counter, Counter::set_var);
            setter.set(30);
        }
        assert_eq!(counter.var(), 30);
    }

    #[test]
    fn combined_round_trip_over_captured_variable() {
        let var = Cell::new(0);
        let mut property = FunctionGetterSetter::new(|| var.get(), |v| var.set(v));
        property.set(40);
        assert_eq!(property.get(), 40);
        assert_eq!(var.get(), 40);
    }

    #[test]
    fn combined_bind_over_ref_cell() {
        let counter = RefCell::new(Counter { var: 0 });
        let mut property = FunctionGetterSetter::bind(&counter, Counter::var, Counter::set_var);
        assert_eq!(property.get(), 0);
        property.set(12);
        assert_eq!(property.get(), 12);
        assert_eq!(counter.borrow().var, 12);
    }

    #[test]
    #[should_panic(expected = "already mutably borrowed")]
    fn bound_read_panics_while_cell_is_mutably_borrowed() {
        let counter = RefCell::new(Counter { var: 0 });
        let property = FunctionGetterSetter::bind(&counter, Counter::var, Counter::set_var);
        let _guard = counter.borrow_mut();
        let _ = property.get();
    }

    #[test]
    #[should_panic(expected = "already borrowed")]
    fn bound_write_panics_while_cell_is_borrowed() {
        let counter = RefCell::new(Counter { var: 0 });
        let mut property = FunctionGetterSetter::bind(&counter, Counter::var, Counter::set_var);
        let _guard = counter.borrow();
        property.set(1);
    }

    #[test]
    fn combined_halves_are_independent_without_shared_state() {
        let mut sink = 0;
        {
            let mut property = FunctionGetterSetter::new(|| 7, |v| sink = v);
            property.set(1);
            assert_eq!(property.get(), 7);
        }
        assert_eq!(sink, 1);
    }

    #[test]
    fn parts_round_trip() {
        let var = Cell::new(1);
        let property = FunctionGetterSetter::from_parts(
            FunctionGetter::new(|| var.get()),
            FunctionSetter::new(|v| var.set(v)),
        );
        let (getter, mut setter) = property.into_parts();
        setter.set(8);
        assert_eq!(getter.get(), 8);
    }

    #[test]
    fn from_optional_rejects_missing_callables() {
        let none_get: Option<fn() -> i32> = None;
        let none_set: Option<fn(i32)> = None;

        assert_eq!(
            FunctionGetter::from_optional(none_get).err(),
            Some(BindingError::MissingGetter)
        );
        assert_eq!(
            FunctionSetter::from_optional(none_set).err(),
            Some(BindingError::MissingSetter)
        );
        assert_eq!(
            FunctionGetterSetter::from_optional(none_get, none_set).err(),
            Some(BindingError::MissingGetter)
        );
        assert_eq!(
            FunctionGetterSetter::from_optional(Some(|| 1), none_set).err(),
            Some(BindingError::MissingSetter)
        );
    }

    #[test]
    fn from_optional_accepts_present_callables() {
        let var = Cell::new(0);
        let mut property =
            FunctionGetterSetter::from_optional(Some(|| var.get()), Some(|v| var.set(v)))
                .unwrap();
        property.set(3);
        assert_eq!(property.get(), 3);
    }

    #[test]
    fn debug_names_value_type() {
        let getter = FunctionGetter::new(|| 1_i32);
        let debug = format!("{:?}", getter);
        assert!(debug.contains("FunctionGetter"));
        assert!(debug.contains("i32"));
    }
}
