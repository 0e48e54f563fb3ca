// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Accessor: property-style read/write access redirected to code.
//!
//! This crate provides small wrapper types that look like a field to their
//! users, while every read and write is dispatched to a stored value, a pair
//! of closures, or the methods of one specific object.
//!
//! ## Core Concepts
//!
//! ### Capability Contracts
//!
//! - [`Getter<T>`] - read a `T` by value
//! - [`RefGetter<T>`] - read a `T` by reference, without copying
//! - [`Setter<T>`] - write a `T`, moving it into the accessor
//!
//! Anything that is both a getter and a setter also gets
//! [`GetterSetterExt::replace`] and [`GetterSetterExt::update`].
//!
//! ### Binding Strategies
//!
//! | Strategy | Getter | Setter | Both |
//! |----------|--------|--------|------|
//! | **Stored value** | [`DefaultGetter`] | [`DefaultSetter`] | [`DefaultGetterSetter`] |
//! | **Closures** | [`FunctionGetter`] | [`FunctionSetter`] | [`FunctionGetterSetter`] |
//! | **Methods, runtime-bound** | [`ClassGetter`] | [`ClassSetter`] | [`ClassGetterSetter`] |
//! | **Methods, compile-time-bound** | [`StaticClassGetter`] | [`StaticClassSetter`] | [`StaticClassGetterSetter`] |
//!
//! [`ClassRefGetter`] is the by-reference variant of [`ClassGetter`].
//!
//! Runtime-bound method accessors store a function pointer next to the target
//! borrow. Compile-time-bound ones name the method through a [`ReadMethod`] or
//! [`WriteMethod`] tag type and store only the borrow.
//!
//! ## Quick Start
//!
//! ```rust
//! use core::cell::Cell;
//! use understory_accessor::{
//!     ClassGetterSetter, DefaultGetterSetter, FunctionGetterSetter, Getter, Setter,
//! };
//!
//! // A value owned by the accessor.
//! let mut stored = DefaultGetterSetter::new(20);
//! assert_eq!(stored.get(), 20);
//! stored.set(200);
//! assert_eq!(stored.get(), 200);
//!
//! // A value owned by someone else, reached through closures.
//! let var = Cell::new(0);
//! let mut computed = FunctionGetterSetter::new(|| var.get(), |v| var.set(v));
//! computed.set(40);
//! assert_eq!(computed.get(), 40);
//!
//! // A value behind an object's methods.
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
//! let mut counter = Counter { var: 0 };
//! let mut bound = ClassGetterSetter::new(&mut counter, Counter::var, Counter::set_var);
//! bound.set(10);
//! assert_eq!(bound.get(), 10);
//! ```
//!
//! ## Lifetimes
//!
//! Accessors never own the objects they are bound to. Closure and method
//! accessors carry a lifetime `'a` that ties them to whatever they borrow, so
//! the compiler rejects an accessor that would outlive its target. No accessor
//! implements [`Clone`]; moving one moves its binding.
//!
//! ## Errors
//!
//! Reads and writes never fail. The only fallible operations are the
//! `from_optional` constructors of the closure accessors, which reject a
//! missing callable with [`BindingError`].
//!
//! ## Threading
//!
//! Accessors add no synchronization. Sharing the state behind one across
//! threads needs the same locking that state would need without it.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc` for boxed closures. It does not
//! depend on `std`.

#![no_std]

extern crate alloc;

mod class;
mod contract;
mod error;
mod function;
mod method;
mod stored;

pub use class::{ClassGetter, ClassGetterSetter, ClassRefGetter, ClassSetter};
pub use contract::{Getter, GetterSetterExt, RefGetter, Setter};
pub use error::BindingError;
pub use function::{FunctionGetter, FunctionGetterSetter, FunctionSetter, GetterFn, SetterFn};
pub use method::{
    ReadMethod, StaticClassGetter, StaticClassGetterSetter, StaticClassSetter, WriteMethod,
};
pub use stored::{DefaultGetter, DefaultGetterSetter, DefaultSetter};
