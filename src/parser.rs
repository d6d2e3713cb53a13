// Copyright 2025 the `aclaf` project developers
//
// This file is part of the `aclaf` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! The parser & parser settings
//!
//! A [`Parser`] wraps a description of a program’s [command tree][commands] along with parser
//! [`Settings`], and provides the [`parse`] method that parses a given list of input arguments.
//!
//! Everything that can be rejected up front is rejected at [`Parser::new`]: the command tree is
//! validated, and when negative number support is enabled the matching pattern is vetted and
//! compiled. A constructed parser is immutable; parsing itself touches no shared state, so one
//! parser may be used freely from multiple threads, and repeated parses of equal inputs produce
//! equal results.
//!
//! # Settings
//!
//! By default a token such as `-10` is read as a (probably unknown) short option cluster.
//! Enabling [`allow_negative_numbers`](Settings::allow_negative_numbers) makes the parser test
//! dash-prefixed tokens against a numeric pattern first, wherever a value could be accepted; the
//! pattern can be replaced per parser.
//!
//! [`parse`]: struct.Parser.html#method.parse
//! [commands]: ../commands/index.html

use crate::analysis::ParseResult;
use crate::commands::CommandSpec;
use crate::engine;
use crate::error::{ParseError, SpecError};
use crate::pattern::{self, NumberMatcher};

/// Settings for parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Whether dash-prefixed tokens may be read as negative numeric values
    pub allow_negative_numbers: bool,
    /// Replacement pattern deciding which tokens count as negative numbers; `None` selects
    /// [`pattern::DEFAULT_PATTERN`](crate::pattern::DEFAULT_PATTERN)
    pub negative_number_pattern: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            allow_negative_numbers: false,
            negative_number_pattern: None,
        }
    }
}

impl Settings {
    /// Control whether dash-prefixed tokens may be read as negative numeric values
    #[inline(always)]
    pub fn set_allow_negative_numbers(&mut self, allow: bool) -> &mut Self {
        self.allow_negative_numbers = allow;
        self
    }

    /// Replace the pattern deciding which tokens count as negative numbers
    ///
    /// The pattern is vetted when the parser is built; see
    /// [`Parser::new`](struct.Parser.html#method.new).
    #[inline(always)]
    pub fn set_negative_number_pattern<S: Into<String>>(&mut self, pattern: Option<S>)
        -> &mut Self
    {
        self.negative_number_pattern = pattern.map(Into::into);
        self
    }
}

/// The parser
///
/// Holds the command specification used for parsing input arguments, along with parser settings,
/// and provides the parsing method.
#[derive(Debug, Clone)]
pub struct Parser<'r> {
    spec: &'r CommandSpec,
    settings: Settings,
    matcher: Option<NumberMatcher>,
}

impl<'r> Parser<'r> {
    /// Create a new parser
    ///
    /// Validates the command tree (failing with [`SpecError::InvalidSpec`]) and, when negative
    /// number support is enabled, vets and compiles the matching pattern (failing with
    /// [`SpecError::InvalidPattern`]). Construction is the only point at which these can fail;
    /// [`parse`](#method.parse) never reports specification problems.
    pub fn new(spec: &'r CommandSpec, settings: Settings) -> Result<Self, SpecError> {
        if let Err(flaws) = spec.validate() {
            return Err(SpecError::InvalidSpec { flaws });
        }
        let matcher = match settings.allow_negative_numbers {
            true => {
                let pattern = settings
                    .negative_number_pattern
                    .as_deref()
                    .unwrap_or(pattern::DEFAULT_PATTERN);
                Some(NumberMatcher::compile(pattern)?)
            },
            false => None,
        };
        Ok(Self { spec, settings, matcher })
    }

    /// The command specification parsed against
    #[inline(always)]
    pub fn spec(&self) -> &'r CommandSpec {
        self.spec
    }

    /// The settings in use
    #[inline(always)]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Parses the provided program arguments
    ///
    /// The arguments should be the pre-split argument list, without the program name. Parsing is
    /// a single left-to-right pass; the first problem found aborts it, so either a complete
    /// [`ParseResult`] is returned or a [`ParseError`], never a partial result.
    ///
    /// The returned result holds `&str` references to names in the specification and to strings
    /// in the `args` parameter; take note of this with respect to object lifetimes. The input is
    /// never modified.
    pub fn parse<'s, A>(&self, args: &'s [A]) -> Result<ParseResult<'r, 's>, ParseError>
        where A: AsRef<str>
    {
        let tokens: Vec<&'s str> = args.iter().map(|a| a.as_ref()).collect();
        engine::run(self.spec, self.matcher.as_ref(), &tokens)
    }
}
