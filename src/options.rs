// Copyright 2025 the `aclaf` project developers
//
// This file is part of the `aclaf` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Option description components
//!
//! This module contains components to do with describing the *options* “available” within a given
//! program, i.e. those that an argument list will be parsed against. An [`OptionSpec`] describes
//! one option: its long name, optional short `char`, value [`Arity`](crate::arity::Arity), and the
//! [`AccumulationMode`] policy applied when the option occurs more than once.

use std::fmt;
use crate::arity::Arity;

/// Policy for collapsing multiple occurrences of the same option into a single result value
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AccumulationMode {
    /// Occurrences append; the result value is the ordered sequence of every occurrence’s values
    Collect,
    /// The result value is the number of occurrences (value payloads are ignored)
    Count,
    /// The first occurrence’s values are kept; later occurrences are silently discarded
    FirstWins,
    /// The last occurrence’s values are kept
    LastWins,
    /// A second occurrence is a parse error
    Error,
}

/// Description of an available option
///
/// Created with [`new`](#method.new) (value-taking, mandatory single value by default) or
/// [`flag`](#method.flag) (takes no value), then refined with the chainable builder methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    /* NOTE: these have been left public to allow direct construction; `Parser::new` validates */
    /// Long option name, excluding the `--` prefix; unique within a command
    pub long: String,
    /// Optional short option character; unique within a command
    pub short: Option<char>,
    /// Permitted number of values per occurrence
    pub arity: Arity,
    /// Whether this option is a presence-only flag; implies a zero arity
    pub is_flag: bool,
    /// Policy for repeated occurrences
    pub accumulation: AccumulationMode,
    /// Free-form description; not interpreted by the parser
    pub description: String,
}

impl OptionSpec {
    /// Create a new value-taking option descriptor, defaulting to exactly one value per occurrence
    pub fn new<N: Into<String>>(long: N) -> Self {
        Self {
            long: long.into(),
            short: None,
            arity: Arity::EXACTLY_ONE,
            is_flag: false,
            accumulation: AccumulationMode::LastWins,
            description: String::new(),
        }
    }

    /// Create a new flag descriptor (takes no value; “true if present” semantics)
    pub fn flag<N: Into<String>>(long: N) -> Self {
        Self {
            long: long.into(),
            short: None,
            arity: Arity::ZERO,
            is_flag: true,
            accumulation: AccumulationMode::LastWins,
            description: String::new(),
        }
    }

    /// Set the short option character
    pub fn short(mut self, ch: char) -> Self {
        self.short = Some(ch);
        self
    }

    /// Set the per-occurrence value arity
    pub fn arity(mut self, arity: Arity) -> Self {
        self.arity = arity;
        self
    }

    /// Set the accumulation policy for repeated occurrences
    pub fn accumulation(mut self, mode: AccumulationMode) -> Self {
        self.accumulation = mode;
        self
    }

    /// Set the description text
    pub fn description<T: Into<String>>(mut self, text: T) -> Self {
        self.description = text.into();
        self
    }

    /// Whether this option can take values
    #[inline]
    pub(crate) fn takes_values(&self) -> bool {
        self.arity.max() != Some(0)
    }

    /// Validate this option’s identifiers and invariants
    ///
    /// Returns the first flaw identified, if any.
    #[must_use]
    pub(crate) fn validate(&self) -> Result<(), OptionFlaw> {
        if self.long.is_empty() {
            return Err(OptionFlaw::LongEmptyName);
        }
        // An `=` in the name would clash with “in-same-arg” value extraction
        if self.long.contains('=') {
            return Err(OptionFlaw::LongNameHasForbiddenChar(self.long.clone(), '='));
        }
        // A leading dash would clash with recognition of the `--` prefix and of negative numbers
        if self.long.starts_with('-') {
            return Err(OptionFlaw::LongNameHasDashPrefix(self.long.clone()));
        }
        if let Some(ch) = self.short {
            // A dash would clash with correct identification of short option clusters, an equals
            // sign with in-cluster value extraction
            if ch == '-' || ch == '=' {
                return Err(OptionFlaw::ShortIsForbiddenChar(ch));
            }
        }
        if self.is_flag && self.arity != Arity::ZERO {
            return Err(OptionFlaw::FlagWithValueArity(self.long.clone()));
        }
        Ok(())
    }
}

/// Description of a validation issue within an [`OptionSpec`] or a command’s set of them
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionFlaw {
    /// Long option name is an empty string
    LongEmptyName,
    /// Long option name contains a forbidden `char`
    LongNameHasForbiddenChar(String, char),
    /// Long option name begins with a dash
    LongNameHasDashPrefix(String),
    /// Short option `char` is a forbidden `char`
    ShortIsForbiddenChar(char),
    /// Option declared as a flag but given a non-zero arity
    FlagWithValueArity(String),
    /// Duplicate long option name found
    LongDuplicated(String),
    /// Duplicate short option `char` found
    ShortDuplicated(char),
}

impl fmt::Display for OptionFlaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionFlaw::LongEmptyName => {
                write!(f, "long option name is empty")
            },
            OptionFlaw::LongNameHasForbiddenChar(name, ch) => {
                write!(f, "long option `{}` contains forbidden character `{}`", name, ch)
            },
            OptionFlaw::LongNameHasDashPrefix(name) => {
                write!(f, "long option `{}` begins with a dash", name)
            },
            OptionFlaw::ShortIsForbiddenChar(ch) => {
                write!(f, "short option character `{}` is forbidden", ch)
            },
            OptionFlaw::FlagWithValueArity(name) => {
                write!(f, "flag option `{}` declares a non-zero arity", name)
            },
            OptionFlaw::LongDuplicated(name) => {
                write!(f, "long option `{}` is declared more than once", name)
            },
            OptionFlaw::ShortDuplicated(ch) => {
                write!(f, "short option `{}` is declared more than once", ch)
            },
        }
    }
}

/// Option set validation
pub(crate) mod validation {
    use super::{OptionFlaw, OptionSpec};

    /// Checks validity of a command’s options, optionally returning details of any problems
    ///
    /// If `detail` is `false`, it returns early on encountering a problem (with an empty `Vec`),
    /// useful for quick validity checks. Otherwise it builds up a complete list of flaws.
    #[must_use]
    pub fn validate_options(opts: &[OptionSpec], detail: bool) -> Result<(), Vec<OptionFlaw>> {
        let mut flaws = Vec::new();

        for candidate in opts {
            if let Err(f) = candidate.validate() {
                match detail {
                    true => { flaws.push(f); },
                    false => { return Err(flaws); },
                }
            }
        }

        for (i, opt) in opts.iter().enumerate() {
            for other in &opts[i + 1..] {
                if opt.long == other.long {
                    let f = OptionFlaw::LongDuplicated(opt.long.clone());
                    if !flaws.contains(&f) {
                        match detail {
                            true => { flaws.push(f); },
                            false => { return Err(flaws); },
                        }
                    }
                }
                if let (Some(ch), true) = (opt.short, opt.short == other.short) {
                    let f = OptionFlaw::ShortDuplicated(ch);
                    if !flaws.contains(&f) {
                        match detail {
                            true => { flaws.push(f); },
                            false => { return Err(flaws); },
                        }
                    }
                }
            }
        }

        match flaws.is_empty() {
            true => Ok(()),
            false => Err(flaws),
        }
    }
}
