// Copyright 2025 the `aclaf` project developers
//
// This file is part of the `aclaf` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Base “available” command specifications used by most tests

use aclaf::arity::Arity;
use aclaf::commands::CommandSpec;
use aclaf::options::{AccumulationMode, OptionSpec};
use aclaf::parser::{Parser, Settings};
use aclaf::positionals::PositionalSpec;

/// Constructs an argument list from string literals
macro_rules! arg_list {
    () => { [] as [&str; 0] };
    ( $($e:expr),+ $(,)? ) => { [ $($e),+ ] };
}

/// A base specification covering the argument forms most tests need
pub fn base_spec() -> CommandSpec {
    let mut spec = CommandSpec::new("tool");
    spec.add_option(OptionSpec::flag("help").short('h'))
        .add_option(
            OptionSpec::flag("verbose")
                .short('v')
                .accumulation(AccumulationMode::Count),
        )
        .add_option(OptionSpec::new("output").short('o'))
        .add_option(
            OptionSpec::new("define")
                .short('D')
                .accumulation(AccumulationMode::Collect),
        )
        .add_positional(PositionalSpec::new("inputs").arity(Arity::ZERO_OR_MORE));
    spec
}

/// A parser over the given specification with default settings
pub fn get_parser(spec: &CommandSpec) -> Parser<'_> {
    Parser::new(spec, Settings::default()).unwrap()
}

/// A parser over the given specification with negative number support enabled
pub fn get_negative_parser(spec: &CommandSpec) -> Parser<'_> {
    let mut settings = Settings::default();
    settings.set_allow_negative_numbers(true);
    Parser::new(spec, settings).unwrap()
}
