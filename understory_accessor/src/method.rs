// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compile-time-bound instance accessors.
//!
//! The accessors in this module name their methods in the type through a
//! [`ReadMethod`] or [`WriteMethod`] tag, so an instance stores nothing but the
//! borrow of its target. They behave exactly like their runtime-bound
//! counterparts in [`crate::ClassGetter`] and friends.
//!
//! Tags are usually declared with [`read_method!`](crate::read_method) and
//! [`write_method!`](crate::write_method):
//!
//! ```rust
//! use understory_accessor::{
//!     Getter, Setter, StaticClassGetter, StaticClassGetterSetter, read_method, write_method,
//! };
//!
//! struct Counter {
//!     var: i32,
//! }
//!
//! impl Counter {
//!     fn var(&self) -> i32 {
//!         self.var
//!     }
//!
//!     fn set_var(&mut self, var: i32) {
//!         self.var = var;
//!     }
//! }
//!
//! read_method!(Var: Counter => i32 = Counter::var);
//! write_method!(SetVar: Counter => i32 = Counter::set_var);
//!
//! let mut counter = Counter { var: 0 };
//! assert_eq!(StaticClassGetter::<Var>::new(&counter).get(), 0);
//!
//! let mut property = StaticClassGetterSetter::<Var, SetVar>::new(&mut counter);
//! property.set(10);
//! assert_eq!(property.get(), 10);
//! assert_eq!(
//!     size_of::<StaticClassGetter<'_, Var>>(),
//!     size_of::<&Counter>()
//! );
//! ```

use core::fmt;
use core::marker::PhantomData;

use crate::contract::{Getter, Setter};

/// A read method fixed at compile time.
///
/// Implemented by zero-sized tag types; see [`read_method!`](crate::read_method).
pub trait ReadMethod {
    /// The object the method is called on.
    type Target: ?Sized;
    /// The value the method produces.
    type Value;

    /// Calls the method on `target`.
    fn read(target: &Self::Target) -> Self::Value;
}

/// A write method fixed at compile time.
///
/// Implemented by zero-sized tag types; see [`write_method!`](crate::write_method).
pub trait WriteMethod {
    /// The object the method is called on.
    type Target: ?Sized;
    /// The value the method consumes.
    type Value;

    /// Calls the method on `target` with `value`.
    fn write(target: &mut Self::Target, value: Self::Value);
}

/// Declares a [`ReadMethod`] tag type.
///
/// `read_method!(Name: Target => Value = path)` declares an uninhabited type
/// `Name` whose `read` calls `path(&target)`.
///
/// ```rust
/// use understory_accessor::{Getter, StaticClassGetter, read_method};
///
/// struct Rect {
///     w: f64,
///     h: f64,
/// }
///
/// read_method!(
///     /// Area of a rectangle.
///     Area: Rect => f64 = |r: &Rect| r.w * r.h
/// );
///
/// let rect = Rect { w: 2.0, h: 3.0 };
/// assert_eq!(StaticClassGetter::<Area>::new(&rect).get(), 6.0);
/// ```
#[macro_export]
macro_rules! read_method {
    ($(#[$meta:meta])* $vis:vis $name:ident: $target:ty => $value:ty = $method:expr) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $name {}

        impl $crate::ReadMethod for $name {
            type Target = $target;
            type Value = $value;

            #[inline]
            fn read(target: &$target) -> $value {
                ($method)(target)
            }
        }
    };
}

/// Declares a [`WriteMethod`] tag type.
///
/// `write_method!(Name: Target => Value = path)` declares an uninhabited type
/// `Name` whose `write` calls `path(&mut target, value)`.
///
/// ```rust
/// use understory_accessor::{Setter, StaticClassSetter, write_method};
///
/// struct Rect {
///     w: f64,
///     h: f64,
/// }
///
/// write_method!(Scale: Rect => f64 = |r: &mut Rect, k: f64| {
///     r.w *= k;
///     r.h *= k;
/// });
///
/// let mut rect = Rect { w: 2.0, h: 3.0 };
/// StaticClassSetter::<Scale>::new(&mut rect).set(2.0);
/// assert_eq!((rect.w, rect.h), (4.0, 6.0));
/// ```
#[macro_export]
macro_rules! write_method {
    ($(#[$meta:meta])* $vis:vis $name:ident: $target:ty => $value:ty = $method:expr) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $name {}

        impl $crate::WriteMethod for $name {
            type Target = $target;
            type Value = $value;

            #[inline]
            fn write(target: &mut $target, value: $value) {
                ($method)(target, value);
            }
        }
    };
}

/// A read-only accessor whose method is fixed by the tag `M`.
pub struct StaticClassGetter<'a, M: ReadMethod> {
    target: &'a M::Target,
    _method: PhantomData<fn() -> M>,
}

impl<'a, M: ReadMethod> StaticClassGetter<'a, M> {
    /// Binds `M` to `target`.
    #[must_use]
    #[inline]
    pub const fn new(target: &'a M::Target) -> Self {
        Self {
            target,
            _method: PhantomData,
        }
    }

    /// Returns the bound object.
    #[must_use]
    #[inline]
    pub const fn target(&self) -> &'a M::Target {
        self.target
    }
}

impl<M: ReadMethod> Getter<M::Value> for StaticClassGetter<'_, M> {
    #[inline]
    fn get(&self) -> M::Value {
        M::read(self.target)
    }
}

impl<M: ReadMethod> fmt::Debug for StaticClassGetter<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticClassGetter")
            .field("method", &core::any::type_name::<M>())
            .finish_non_exhaustive()
    }
}

/// A write-only accessor whose method is fixed by the tag `M`.
pub struct StaticClassSetter<'a, M: WriteMethod> {
    target: &'a mut M::Target,
    _method: PhantomData<fn() -> M>,
}

impl<'a, M: WriteMethod> StaticClassSetter<'a, M> {
    /// Binds `M` to `target`.
    #[must_use]
    #[inline]
    pub fn new(target: &'a mut M::Target) -> Self {
        Self {
            target,
            _method: PhantomData,
        }
    }

    /// Returns the bound object.
    #[must_use]
    #[inline]
    pub fn target(&self) -> &M::Target {
        self.target
    }
}

impl<M: WriteMethod> Setter<M::Value> for StaticClassSetter<'_, M> {
    #[inline]
    fn set(&mut self, value: M::Value) {
        M::write(self.target, value);
    }
}

impl<M: WriteMethod> fmt::Debug for StaticClassSetter<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticClassSetter")
            .field("method", &core::any::type_name::<M>())
            .finish_non_exhaustive()
    }
}

/// A read/write accessor whose methods are fixed by the tags `R` and `W`.
///
/// Both tags must agree on the target and value types.
pub struct StaticClassGetterSetter<'a, R, W>
where
    R: ReadMethod,
    W: WriteMethod<Target = R::Target, Value = R::Value>,
{
    target: &'a mut R::Target,
    _methods: PhantomData<fn() -> (R, W)>,
}

impl<'a, R, W> StaticClassGetterSetter<'a, R, W>
where
    R: ReadMethod,
    W: WriteMethod<Target = R::Target, Value = R::Value>,
{
    /// Binds `R` and `W` to `target`.
    #[must_use]
    #[inline]
    pub fn new(target: &'a mut R::Target) -> Self {
        Self {
            target,
            _methods: PhantomData,
        }
    }

    /// Returns the bound object.
    #[must_use]
    #[inline]
    pub fn target(&self) -> &R::Target {
        self.target
    }
}

impl<R, W> Getter<R::Value> for StaticClassGetterSetter<'_, R, W>
where
    R: ReadMethod,
    W: WriteMethod<Target = R::Target, Value = R::Value>,
{
    #[inline]
    fn get(&self) -> R::Value {
        R::read(self.target)
    }
}

impl<R, W> Setter<R::Value> for StaticClassGetterSetter<'_, R, W>
where
    R: ReadMethod,
    W: WriteMethod<Target = R::Target, Value = R::Value>,
{
    #[inline]
    fn set(&mut self, value: R::Value) {
        W::write(self.target, value);
    }
}

impl<R, W> fmt::Debug for StaticClassGetterSetter<'_, R, W>
where
    R: ReadMethod,
    W: WriteMethod<Target = R::Target, Value = R::Value>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticClassGetterSetter")
            .field("read", &core::any::type_name::<R>())
            .field("write", &core::any::type_name::<W>())
            .finish_non_exhaustive()
    }
}
