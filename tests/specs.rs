// Copyright 2025 the `aclaf` project developers
//
// This file is part of the `aclaf` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Specification validation at parser construction

#[allow(unused_macros)]
#[allow(dead_code)] //Mod shared across test crates
#[macro_use]
mod common;

use aclaf::arity::Arity;
use aclaf::commands::{CommandSpec, SpecFlaw};
use aclaf::error::SpecError;
use aclaf::options::{OptionFlaw, OptionSpec};
use aclaf::parser::{Parser, Settings};
use aclaf::positionals::PositionalSpec;
use common::base_spec;

fn build(spec: &CommandSpec) -> Result<(), SpecError> {
    Parser::new(spec, Settings::default()).map(|_| ())
}

/// Arity construction rejects contradictory bounds
#[test]
fn invalid_arity() {
    assert!(matches!(
        Arity::new(3, Some(2)),
        Err(SpecError::InvalidArity { .. })
    ));
    assert!(Arity::new(0, None).is_ok());
}

/// Construction fails on a duplicated long name
#[test]
fn duplicate_long() {
    let mut spec = CommandSpec::new("tool");
    spec.add_option(OptionSpec::flag("force"))
        .add_option(OptionSpec::new("force"));
    match build(&spec) {
        Err(SpecError::InvalidSpec { flaws }) => {
            assert!(flaws.contains(&SpecFlaw::Option(OptionFlaw::LongDuplicated("force".to_owned()))));
        },
        r => panic!("unexpected result: {:?}", r),
    }
}

/// Construction fails on a duplicated short `char`
#[test]
fn duplicate_short() {
    let mut spec = CommandSpec::new("tool");
    spec.add_option(OptionSpec::flag("force").short('f'))
        .add_option(OptionSpec::new("file").short('f'));
    match build(&spec) {
        Err(SpecError::InvalidSpec { flaws }) => {
            assert!(flaws.contains(&SpecFlaw::Option(OptionFlaw::ShortDuplicated('f'))));
        },
        r => panic!("unexpected result: {:?}", r),
    }
}

/// Construction fails when a subcommand shadows an option
#[test]
fn subcommand_clash() {
    let mut spec = CommandSpec::new("tool");
    spec.add_option(OptionSpec::new("list"))
        .add_subcommand(CommandSpec::new("list"));
    match build(&spec) {
        Err(SpecError::InvalidSpec { flaws }) => {
            assert!(flaws.contains(&SpecFlaw::SubcommandClashesWithOption("list".to_owned())));
        },
        r => panic!("unexpected result: {:?}", r),
    }
}

/// Construction fails when a variadic positional is not last
#[test]
fn variadic_not_last() {
    let mut spec = CommandSpec::new("tool");
    spec.add_positional(PositionalSpec::new("files").arity(Arity::ZERO_OR_MORE))
        .add_positional(PositionalSpec::new("dest"));
    match build(&spec) {
        Err(SpecError::InvalidSpec { flaws }) => {
            assert!(flaws.contains(&SpecFlaw::VariadicPositionalNotLast("files".to_owned())));
        },
        r => panic!("unexpected result: {:?}", r),
    }
}

/// Construction fails on a flag declaring a value arity
#[test]
fn flag_with_arity() {
    let mut spec = CommandSpec::new("tool");
    spec.add_option(OptionSpec::flag("force").arity(Arity::EXACTLY_ONE));
    match build(&spec) {
        Err(SpecError::InvalidSpec { flaws }) => {
            assert!(flaws.contains(&SpecFlaw::Option(OptionFlaw::FlagWithValueArity("force".to_owned()))));
        },
        r => panic!("unexpected result: {:?}", r),
    }
}

/// Flaws in a nested subcommand fail construction of the whole tree
#[test]
fn nested_flaws_rejected() {
    let mut sub = CommandSpec::new("push");
    sub.add_option(OptionSpec::flag("x").short('-'));
    let mut spec = CommandSpec::new("tool");
    spec.add_subcommand(sub);
    assert!(matches!(build(&spec), Err(SpecError::InvalidSpec { .. })));
}

/// Settings default to negative numbers off with no replacement pattern
#[test]
fn settings_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.allow_negative_numbers, false);
    assert_eq!(settings.negative_number_pattern, None);
}

/// A parser is freely shareable across threads
#[test]
fn parser_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Parser<'static>>();
}

/// The same parser serves many parses; results for equal inputs stay equal
#[test]
fn parser_reusable() {
    let spec = base_spec();
    let parser = Parser::new(&spec, Settings::default()).unwrap();
    let args = arg_list!("-vv", "-o", "out", "a");
    let first = parser.parse(&args).unwrap();
    for _ in 0..3 {
        assert_eq!(first, parser.parse(&args).unwrap());
    }
}
