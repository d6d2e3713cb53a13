// Copyright 2025 the `aclaf` project developers
//
// This file is part of the `aclaf` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Error components
//!
//! Two families of errors exist. [`SpecError`] covers everything that can go wrong while
//! *building* a parser (bad arity bounds, a flawed command specification, an unusable negative
//! number pattern); these never occur at parse time. [`ParseError`] covers problems found in an
//! input argument list; it carries the problem [kind](ParseErrorKind), the index of the offending
//! argument where one exists, and the command path at which parsing had arrived.

use std::fmt;
use thiserror::Error;
use crate::commands::SpecFlaw;

/// A problem detected while constructing a parser
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    /// Arity bounds are contradictory
    #[error("invalid arity: {reason}")]
    InvalidArity { reason: String },
    /// The command specification tree is flawed
    #[error("invalid specification: {}", format_flaws(.flaws))]
    InvalidSpec { flaws: Vec<SpecFlaw> },
    /// The negative number pattern is unusable
    #[error("invalid negative number pattern: {reason}")]
    InvalidPattern { reason: String },
}

fn format_flaws(flaws: &[SpecFlaw]) -> String {
    let parts: Vec<String> = flaws.iter().map(|f| f.to_string()).collect();
    parts.join("; ")
}

/// The specific problem found in an input argument list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// An option name was not declared at the active command level
    ///
    /// `suggestion` holds the closest declared long option name, when one is close enough.
    /// `looks_numeric` marks tokens that resemble a negative number but could not be accepted as
    /// one, either because negative number support is disabled or because no positional slot
    /// remained to take the value.
    #[error("unknown option `{name}`{}", unknown_hints(.suggestion, .looks_numeric))]
    UnknownOption {
        name: String,
        suggestion: Option<String>,
        looks_numeric: bool,
    },
    /// An inline value was supplied to an option that takes none
    #[error("option `{name}` does not take a value")]
    FlagTakesNoValue { name: String },
    /// An option occurrence received fewer values than its minimum arity
    #[error("option `{name}` requires more values than were supplied")]
    InsufficientOptionValues { name: String },
    /// A second occurrence of an option whose accumulation policy forbids repetition
    #[error("option `{name}` cannot be specified multiple times")]
    OptionCannotBeSpecifiedMultipleTimes { name: String },
    /// A positional argument arrived after every positional slot was saturated
    #[error("unexpected positional argument `{value}`")]
    TooManyPositionals { value: String },
    /// A required positional slot was under-saturated at the end of the argument list
    #[error("missing required positional argument `{name}`")]
    MissingPositional { name: String },
}

fn unknown_hints(suggestion: &Option<String>, looks_numeric: &bool) -> String {
    let mut hints = String::new();
    if *looks_numeric {
        hints.push_str(
            "; to pass a negative number, enable negative number support, place it after `--`, \
             or supply it as an option value",
        );
    }
    if let Some(name) = suggestion {
        hints.push_str(&format!("; did you mean `--{}`?", name));
    }
    hints
}

/// A problem found while parsing an argument list
///
/// All parse errors are terminal; no partial result is produced alongside one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
    index: Option<usize>,
    command_path: Vec<String>,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, index: Option<usize>, command_path: Vec<String>)
        -> Self
    {
        Self { kind, index, command_path }
    }

    /// The specific problem found
    #[inline(always)]
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Index of the offending argument within the input list, where one exists
    #[inline(always)]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Names of the commands leading to the level at which the problem was found, root first
    #[inline(always)]
    pub fn command_path(&self) -> &[String] {
        &self.command_path
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.command_path.len() > 1 {
            write!(f, "{}: ", self.command_path.join(" "))?;
        }
        self.kind.fmt(f)?;
        if let Some(index) = self.index {
            write!(f, " (argument {})", index)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
