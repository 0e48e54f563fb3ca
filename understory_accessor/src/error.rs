// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.

use core::fmt;

/// Error returned when an accessor is constructed without a required callable.
///
/// Reads and writes over a successfully constructed accessor never fail, so
/// this is only produced by the `from_optional` constructors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BindingError {
    /// No read callable was supplied.
    MissingGetter,
    /// No write callable was supplied.
    MissingSetter,
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingGetter => f.write_str("accessor has no getter bound"),
            Self::MissingSetter => f.write_str("accessor has no setter bound"),
        }
    }
}

impl core::error::Error for BindingError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn display_names_the_missing_half() {
        assert_eq!(
            format!("{}", BindingError::MissingGetter),
            "accessor has no getter bound"
        );
        assert_eq!(
            format!("{}", BindingError::MissingSetter),
            "accessor has no setter bound"
        );
    }
}
