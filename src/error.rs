// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Errors raised at the boundary of a `BigInt` operation.

use std::fmt;
use std::fmt::Display;

/// An error returned by a fallible `BigInt` operation.
///
/// Mirrors the three error classes a dynamically-typed host raises around its
/// big integer type: a numeric range violation, a malformed numeric string, or an
/// unsupported mix of operand types.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum BigIntError {
    /// Numeric overflow, an out-of-range parameter, division by zero, or an
    /// invalid radix.
    RangeError(String),
    /// A malformed numeric string could not be parsed.
    SyntaxError(String),
    /// Operands of incompatible types were combined.
    TypeError(String),
}

impl BigIntError {
    pub(crate) fn range(message: impl Into<String>) -> Self {
        BigIntError::RangeError(message.into())
    }

    pub(crate) fn syntax(message: impl Into<String>) -> Self {
        BigIntError::SyntaxError(message.into())
    }

    pub(crate) fn type_error(message: impl Into<String>) -> Self {
        BigIntError::TypeError(message.into())
    }
}

impl Display for BigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigIntError::RangeError(message) => write!(f, "range error: {message}"),
            BigIntError::SyntaxError(message) => write!(f, "syntax error: {message}"),
            BigIntError::TypeError(message) => write!(f, "type error: {message}"),
        }
    }
}

impl std::error::Error for BigIntError {}
