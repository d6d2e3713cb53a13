// Copyright 2025 the `aclaf` project developers
//
// This file is part of the `aclaf` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Command description components
//!
//! This module contains components to do with describing a program’s *command* tree. A
//! [`CommandSpec`] bundles a command name with the options, positional slots and subcommands
//! available at that level; subcommands are themselves full `CommandSpec`s, giving an arbitrarily
//! nested tree. The tree is assembled with the chainable `add_*` methods and validated as a whole
//! when a [`Parser`](crate::parser::Parser) is constructed.

use std::fmt;
use crate::options::{self, OptionFlaw, OptionSpec};
use crate::positionals::PositionalSpec;

/// Description of a command: its options, positional slots and subcommands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /* NOTE: these have been left public to allow direct construction; `Parser::new` validates */
    /// Command name
    pub name: String,
    /// Options available at this level
    pub options: Vec<OptionSpec>,
    /// Positional slots, in fill order
    pub positionals: Vec<PositionalSpec>,
    /// Subcommands reachable from this level
    pub subcommands: Vec<CommandSpec>,
}

impl CommandSpec {
    /// Create a new command descriptor with no options, positionals or subcommands
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
            positionals: Vec::new(),
            subcommands: Vec::new(),
        }
    }

    /// Add an option
    pub fn add_option(&mut self, option: OptionSpec) -> &mut Self {
        self.options.push(option);
        self
    }

    /// Add a positional slot (after any already added)
    pub fn add_positional(&mut self, positional: PositionalSpec) -> &mut Self {
        self.positionals.push(positional);
        self
    }

    /// Add a subcommand
    pub fn add_subcommand(&mut self, subcommand: CommandSpec) -> &mut Self {
        self.subcommands.push(subcommand);
        self
    }

    /// Checks validity of the command tree
    ///
    /// Returns `true` if valid. See also the [`validate`](#method.validate) method.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        validation::validate_spec(self, false).is_ok()
    }

    /// Checks validity of the command tree, returning details of any problems
    #[inline]
    pub fn validate(&self) -> Result<(), Vec<SpecFlaw>> {
        validation::validate_spec(self, true)
    }

    /// Find the option declared with the given long name
    #[inline]
    pub(crate) fn find_long(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.long == name)
    }

    /// Find the option declared with the given short `char`
    #[inline]
    pub(crate) fn find_short(&self, ch: char) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.short == Some(ch))
    }

    /// Find the subcommand with the given name
    #[inline]
    pub(crate) fn find_subcommand(&self, name: &str) -> Option<&CommandSpec> {
        self.subcommands.iter().find(|c| c.name == name)
    }
}

/// Description of a validation issue within a [`CommandSpec`] tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecFlaw {
    /// Command name is an empty string
    CommandEmptyName,
    /// Flaw in one of the command’s options
    Option(OptionFlaw),
    /// Positional name is an empty string
    PositionalEmptyName,
    /// Duplicate positional name found
    PositionalDuplicated(String),
    /// A positional able to hold more than one argument is followed by further positionals,
    /// which could never fill
    VariadicPositionalNotLast(String),
    /// Duplicate subcommand name found
    SubcommandDuplicated(String),
    /// A subcommand shares its name with an option’s long name
    SubcommandClashesWithOption(String),
    /// Flaws within a subcommand’s own tree
    Nested(String, Vec<SpecFlaw>),
}

impl fmt::Display for SpecFlaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecFlaw::CommandEmptyName => {
                write!(f, "command name is empty")
            },
            SpecFlaw::Option(flaw) => flaw.fmt(f),
            SpecFlaw::PositionalEmptyName => {
                write!(f, "positional name is empty")
            },
            SpecFlaw::PositionalDuplicated(name) => {
                write!(f, "positional `{}` is declared more than once", name)
            },
            SpecFlaw::VariadicPositionalNotLast(name) => {
                write!(f, "variadic positional `{}` is not the last declared", name)
            },
            SpecFlaw::SubcommandDuplicated(name) => {
                write!(f, "subcommand `{}` is declared more than once", name)
            },
            SpecFlaw::SubcommandClashesWithOption(name) => {
                write!(f, "subcommand `{}` shares its name with an option", name)
            },
            SpecFlaw::Nested(name, flaws) => {
                let parts: Vec<String> = flaws.iter().map(|fl| fl.to_string()).collect();
                write!(f, "in subcommand `{}`: {}", name, parts.join("; "))
            },
        }
    }
}

/// Command tree validation
pub(crate) mod validation {
    use super::{options, CommandSpec, SpecFlaw};

    /// Checks validity of a command tree, optionally returning details of any problems
    ///
    /// If no problems are found, it returns `Ok(())`, otherwise `Err(_)`.
    ///
    /// If `detail` is `false`, it returns early on encountering a problem (with an empty `Vec`),
    /// useful for quick `is_valid` checks. Otherwise it builds up and provides a complete list of
    /// flaws.
    #[must_use]
    pub fn validate_spec(spec: &CommandSpec, detail: bool) -> Result<(), Vec<SpecFlaw>> {
        let mut flaws: Vec<SpecFlaw> = Vec::new();

        if spec.name.is_empty() {
            match detail {
                true => { flaws.push(SpecFlaw::CommandEmptyName); },
                false => { return Err(flaws); },
            }
        }

        if let Err(f) = options::validation::validate_options(&spec.options, detail) {
            match detail {
                true => { flaws.extend(f.into_iter().map(SpecFlaw::Option)); },
                false => { return Err(flaws); },
            }
        }

        validate_positionals(spec, &mut flaws, detail);
        if !detail && !flaws.is_empty() {
            return Err(Vec::new());
        }

        validate_subcommand_names(spec, &mut flaws, detail);
        if !detail && !flaws.is_empty() {
            return Err(Vec::new());
        }

        // Recurse into each subcommand’s own tree
        for sub in &spec.subcommands {
            if let Err(f) = validate_spec(sub, detail) {
                match detail {
                    true => { flaws.push(SpecFlaw::Nested(sub.name.clone(), f)); },
                    false => { return Err(flaws); },
                }
            }
        }

        match flaws.is_empty() {
            true => Ok(()),
            false => Err(flaws),
        }
    }

    fn validate_positionals(spec: &CommandSpec, flaws: &mut Vec<SpecFlaw>, detail: bool) {
        let positionals = &spec.positionals;
        for (i, pos) in positionals.iter().enumerate() {
            if pos.name.is_empty() {
                flaws.push(SpecFlaw::PositionalEmptyName);
                if !detail { return; }
            }
            // Any slot after a variadic one could never fill
            if pos.is_variadic() && i + 1 < positionals.len() {
                flaws.push(SpecFlaw::VariadicPositionalNotLast(pos.name.clone()));
                if !detail { return; }
            }
            for other in &positionals[i + 1..] {
                if pos.name == other.name {
                    let f = SpecFlaw::PositionalDuplicated(pos.name.clone());
                    if !flaws.contains(&f) {
                        flaws.push(f);
                        if !detail { return; }
                    }
                }
            }
        }
    }

    fn validate_subcommand_names(spec: &CommandSpec, flaws: &mut Vec<SpecFlaw>, detail: bool) {
        for (i, sub) in spec.subcommands.iter().enumerate() {
            if spec.options.iter().any(|o| o.long == sub.name) {
                flaws.push(SpecFlaw::SubcommandClashesWithOption(sub.name.clone()));
                if !detail { return; }
            }
            for other in &spec.subcommands[i + 1..] {
                if sub.name == other.name {
                    let f = SpecFlaw::SubcommandDuplicated(sub.name.clone());
                    if !flaws.contains(&f) {
                        flaws.push(f);
                        if !detail { return; }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arity::Arity;

    /// Check a variadic positional anywhere but last is rejected
    #[test]
    fn variadic_not_last() {
        let mut spec = CommandSpec::new("tool");
        spec.add_positional(PositionalSpec::new("files").arity(Arity::ONE_OR_MORE))
            .add_positional(PositionalSpec::new("dest"));
        let flaws = spec.validate().unwrap_err();
        assert_eq!(flaws, vec![SpecFlaw::VariadicPositionalNotLast("files".to_owned())]);
    }

    /// Check a subcommand sharing an option’s long name is rejected
    #[test]
    fn subcommand_option_clash() {
        let mut spec = CommandSpec::new("tool");
        spec.add_option(OptionSpec::flag("list"));
        spec.add_subcommand(CommandSpec::new("list"));
        let flaws = spec.validate().unwrap_err();
        assert_eq!(flaws, vec![SpecFlaw::SubcommandClashesWithOption("list".to_owned())]);
    }

    /// Check flaws inside a subcommand are reported against it
    #[test]
    fn nested_flaws() {
        let mut sub = CommandSpec::new("push");
        sub.add_option(OptionSpec::new(""));
        let mut spec = CommandSpec::new("tool");
        spec.add_subcommand(sub);
        let flaws = spec.validate().unwrap_err();
        assert_eq!(
            flaws,
            vec![SpecFlaw::Nested(
                "push".to_owned(),
                vec![SpecFlaw::Option(OptionFlaw::LongEmptyName)],
            )]
        );
    }

    /// A well-formed tree passes
    #[test]
    fn valid_tree() {
        let mut sub = CommandSpec::new("add");
        sub.add_positional(PositionalSpec::new("operands").arity(Arity::ONE_OR_MORE));
        let mut spec = CommandSpec::new("calc");
        spec.add_option(OptionSpec::flag("verbose").short('v'));
        spec.add_subcommand(sub);
        assert!(spec.is_valid());
        assert_eq!(spec.validate(), Ok(()));
    }
}
