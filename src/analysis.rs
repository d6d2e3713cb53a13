// Copyright 2025 the `aclaf` project developers
//
// This file is part of the `aclaf` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Analysis components
//!
//! A successful parse produces a [`ParseResult`]: a value-equal, deeply immutable record of what
//! was found. Every option and positional declared in the active command appears in it — options
//! never seen carry [`OptionValue::Unset`], which is distinct from an option that was present
//! with no values. Where a subcommand was invoked, the nested level’s result hangs off
//! [`subcommand`](ParseResult::subcommand).
//!
//! Result values are string slices borrowed from the parsed argument list (and names from the
//! specification); take note of this with respect to object lifetimes.

use std::collections::HashMap;

/// Final value of one option after accumulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue<'s> {
    /// The option never occurred on the input
    Unset,
    /// Number of occurrences (`Count` accumulation)
    Count(u32),
    /// The accumulated values; empty for a present option that took none
    Values(Vec<&'s str>),
}

impl<'s> OptionValue<'s> {
    /// Whether the option occurred at all
    #[inline]
    pub fn is_set(&self) -> bool {
        !matches!(self, OptionValue::Unset)
    }

    /// The occurrence count, for `Count`-accumulated options
    #[inline]
    pub fn count(&self) -> Option<u32> {
        match self {
            OptionValue::Count(n) => Some(*n),
            _ => None,
        }
    }

    /// The accumulated values, where there are any to have
    #[inline]
    pub fn values(&self) -> Option<&[&'s str]> {
        match self {
            OptionValue::Values(v) => Some(v),
            _ => None,
        }
    }

    /// The first accumulated value
    #[inline]
    pub fn first(&self) -> Option<&'s str> {
        match self {
            OptionValue::Values(v) => v.first().copied(),
            _ => None,
        }
    }
}

/// Result of parsing an argument list against a command specification
///
/// The lifetime `'r` is that of the specification the parser was built over, `'s` that of the
/// parsed argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult<'r, 's> {
    /* NOTE: these have been left public for direct data access; the mining methods below are
     * usually more convenient */
    /// Name of the command this level was parsed against
    pub command: &'r str,
    /// Accumulated value of every declared option
    pub options: HashMap<&'r str, OptionValue<'s>>,
    /// Arguments captured by every declared positional slot, in input order
    pub positionals: HashMap<&'r str, Vec<&'s str>>,
    /// Result of the nested level, where a subcommand was invoked
    pub subcommand: Option<Box<ParseResult<'r, 's>>>,
}

impl<'r, 's> ParseResult<'r, 's> {
    /// Get the accumulated value of the named option
    #[inline]
    pub fn option(&self, name: &str) -> Option<&OptionValue<'s>> {
        self.options.get(name)
    }

    /// Whether the named option occurred at least once
    #[inline]
    pub fn is_present(&self, name: &str) -> bool {
        self.options.get(name).map_or(false, |v| v.is_set())
    }

    /// Get the occurrence count of the named `Count`-accumulated option
    ///
    /// Returns zero for an option that never occurred.
    #[inline]
    pub fn count(&self, name: &str) -> u32 {
        self.options.get(name).and_then(|v| v.count()).unwrap_or(0)
    }

    /// Get the first accumulated value of the named option
    #[inline]
    pub fn value(&self, name: &str) -> Option<&'s str> {
        self.options.get(name).and_then(|v| v.first())
    }

    /// Get all accumulated values of the named option
    #[inline]
    pub fn values(&self, name: &str) -> Option<&[&'s str]> {
        self.options.get(name).and_then(|v| v.values())
    }

    /// Get the arguments captured by the named positional slot
    #[inline]
    pub fn positional(&self, name: &str) -> Option<&[&'s str]> {
        self.positionals.get(name).map(|v| &v[..])
    }

    /// Get the nested result, where a subcommand was invoked
    #[inline]
    pub fn subcommand(&self) -> Option<&ParseResult<'r, 's>> {
        self.subcommand.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `Unset` must be distinguishable from present-with-no-values
    #[test]
    fn unset_vs_present_empty() {
        assert_ne!(OptionValue::Unset, OptionValue::Values(Vec::new()));
        assert!(!OptionValue::Unset.is_set());
        assert!(OptionValue::Values(Vec::new()).is_set());
    }

    #[test]
    fn value_accessors() {
        let value = OptionValue::Values(vec!["a", "b"]);
        assert_eq!(value.first(), Some("a"));
        assert_eq!(value.values(), Some(&["a", "b"][..]));
        assert_eq!(value.count(), None);
        assert_eq!(OptionValue::Count(3).count(), Some(3));
    }
}
