// Copyright 2025 the `aclaf` project developers
//
// This file is part of the `aclaf` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! A specification-driven command line argument parsing library.
//!
//! A [`CommandSpec`](commands/struct.CommandSpec.html) describes a program’s options, positional
//! slots and subcommands; a [`Parser`](parser/struct.Parser.html) validates the description once,
//! then turns argument lists into immutable
//! [`ParseResult`](analysis/struct.ParseResult.html)s. Values are returned as the strings given;
//! no type coercion is performed.
//!
//! Licensed under the MIT license or the Apache license, Version 2.0, at your option.
//!
//! # Example
//!
//! ```rust
//! use aclaf::arity::Arity;
//! use aclaf::commands::CommandSpec;
//! use aclaf::options::OptionSpec;
//! use aclaf::parser::{Parser, Settings};
//! use aclaf::positionals::PositionalSpec;
//!
//! let mut spec = CommandSpec::new("calc");
//! spec.add_option(OptionSpec::flag("verbose").short('v'));
//! spec.add_positional(PositionalSpec::new("values").arity(Arity::ZERO_OR_MORE));
//!
//! let mut settings = Settings::default();
//! settings.set_allow_negative_numbers(true);
//!
//! let parser = Parser::new(&spec, settings)?;
//! let args = ["-v", "-10", "5"];
//! let result = parser.parse(&args)?;
//! assert!(result.is_present("verbose"));
//! assert_eq!(result.positional("values"), Some(&["-10", "5"][..]));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(bare_trait_objects)]

pub mod analysis;
pub mod arity;
pub mod commands;
pub mod error;
pub mod options;
pub mod parser;
pub mod pattern;
pub mod positionals;

mod accumulate;
mod engine;
#[cfg(feature = "suggestions")]
mod matching;
