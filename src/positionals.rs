// Copyright 2025 the `aclaf` project developers
//
// This file is part of the `aclaf` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Positional argument description components

use crate::arity::Arity;

/// Description of an available positional argument slot
///
/// Positional slots fill greedily in declaration order: a slot consumes arguments until its upper
/// bound is reached, then the next slot takes over. A slot whose upper bound exceeds one (or is
/// unbounded) must therefore be the last declared, as any slot after it would be unreachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalSpec {
    /* NOTE: these have been left public to allow direct construction; `Parser::new` validates */
    /// Slot name; unique within a command
    pub name: String,
    /// Permitted number of arguments for this slot
    pub arity: Arity,
}

impl PositionalSpec {
    /// Create a new positional descriptor, defaulting to exactly one argument
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            arity: Arity::EXACTLY_ONE,
        }
    }

    /// Set the arity
    pub fn arity(mut self, arity: Arity) -> Self {
        self.arity = arity;
        self
    }

    /// Whether this slot can hold more than one argument
    #[inline]
    pub(crate) fn is_variadic(&self) -> bool {
        match self.arity.max() {
            None => true,
            Some(max) => max > 1,
        }
    }
}
