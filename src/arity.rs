// Copyright 2025 the `aclaf` project developers
//
// This file is part of the `aclaf` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Arity description components
//!
//! An [`Arity`] expresses how many values an *option* occurrence or a *positional* slot may
//! consume, as an inclusive `[min, max]` range, where the upper bound is optional (absent meaning
//! unbounded).

use crate::error::SpecError;

/// Permitted range of per-occurrence value counts for an option or positional
///
/// Construction via [`new`](#method.new) enforces that the lower bound does not exceed the upper
/// bound. The constants cover the common cases.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Arity {
    min: u32,
    max: Option<u32>,
}

impl Default for Arity {
    /// Defaults to [`EXACTLY_ONE`](#associatedconstant.EXACTLY_ONE)
    fn default() -> Self {
        Self::EXACTLY_ONE
    }
}

impl Arity {
    /// No values at all (flag semantics)
    pub const ZERO: Arity = Arity { min: 0, max: Some(0) };
    /// An optional single value
    pub const ZERO_OR_ONE: Arity = Arity { min: 0, max: Some(1) };
    /// A mandatory single value
    pub const EXACTLY_ONE: Arity = Arity { min: 1, max: Some(1) };
    /// Any number of values, including none
    pub const ZERO_OR_MORE: Arity = Arity { min: 0, max: None };
    /// At least one value
    pub const ONE_OR_MORE: Arity = Arity { min: 1, max: None };

    /// Create a new arity
    ///
    /// A `max` of `None` means unbounded. Fails with [`SpecError::InvalidArity`] if `min`
    /// exceeds `max`.
    pub fn new(min: u32, max: Option<u32>) -> Result<Self, SpecError> {
        if let Some(max) = max {
            if min > max {
                return Err(SpecError::InvalidArity {
                    reason: format!("minimum ({}) exceeds maximum ({})", min, max),
                });
            }
        }
        Ok(Self { min, max })
    }

    /// The lower bound
    #[inline(always)]
    pub const fn min(&self) -> u32 {
        self.min
    }

    /// The upper bound, `None` meaning unbounded
    #[inline(always)]
    pub const fn max(&self) -> Option<u32> {
        self.max
    }

    /// Checks whether the given value count lies within the bounds
    #[inline]
    pub(crate) fn admits(&self, count: usize) -> bool {
        count >= self.min as usize && self.max.map_or(true, |max| count <= max as usize)
    }

    /// Checks whether the lower bound has been met by the given value count
    #[inline]
    pub(crate) fn is_satisfied(&self, count: usize) -> bool {
        count >= self.min as usize
    }

    /// Checks whether the upper bound has been reached by the given value count
    #[inline]
    pub(crate) fn is_saturated(&self, count: usize) -> bool {
        matches!(self.max, Some(max) if count >= max as usize)
    }
}
