// Copyright 2025 the `aclaf` project developers
//
// This file is part of the `aclaf` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Repeated-occurrence accumulation policies

#[allow(unused_macros)]
#[allow(dead_code)] //Mod shared across test crates
#[macro_use]
mod common;

use aclaf::analysis::OptionValue;
use aclaf::commands::CommandSpec;
use aclaf::error::ParseErrorKind;
use aclaf::options::{AccumulationMode, OptionSpec};
use common::{base_spec, get_parser};

fn spec_with_mode(mode: AccumulationMode) -> CommandSpec {
    let mut spec = CommandSpec::new("tool");
    spec.add_option(OptionSpec::new("pick").short('p').accumulation(mode));
    spec
}

/// Collected values keep the order their tokens appeared in, across every value form
#[test]
fn collect_preserves_order() {
    let spec = base_spec();
    let args = arg_list!("-Da", "-D", "b", "--define=c");
    let result = get_parser(&spec).parse(&args).unwrap();
    assert_eq!(result.values("define"), Some(&["a", "b", "c"][..]));
}

/// Counting reports the occurrence total and ignores value payloads
#[test]
fn count_occurrences() {
    let mut spec = CommandSpec::new("tool");
    spec.add_option(OptionSpec::new("tag").accumulation(AccumulationMode::Count));
    let args = arg_list!("--tag", "a", "--tag", "b");
    let result = get_parser(&spec).parse(&args).unwrap();
    assert_eq!(result.option("tag"), Some(&OptionValue::Count(2)));
    assert_eq!(result.count("tag"), 2);
}

/// First/last selection keeps exactly one occurrence’s values
#[test]
fn first_and_last_wins() {
    let args = arg_list!("--pick", "a", "--pick", "b");

    let spec = spec_with_mode(AccumulationMode::FirstWins);
    let result = get_parser(&spec).parse(&args).unwrap();
    assert_eq!(result.values("pick"), Some(&["a"][..]));

    let spec = spec_with_mode(AccumulationMode::LastWins);
    let result = get_parser(&spec).parse(&args).unwrap();
    assert_eq!(result.values("pick"), Some(&["b"][..]));
}

/// First-wins selection equals the head of the collected sequence for the same input
#[test]
fn first_wins_matches_collect_head() {
    let args = arg_list!("--pick", "a", "--pick", "b", "-pc");

    let spec = spec_with_mode(AccumulationMode::Collect);
    let collected = get_parser(&spec).parse(&args).unwrap();

    let spec = spec_with_mode(AccumulationMode::FirstWins);
    let first = get_parser(&spec).parse(&args).unwrap();

    assert_eq!(
        first.value("pick"),
        collected.values("pick").and_then(|v| v.first().copied()),
    );
}

/// A second occurrence under the error policy fails, reporting where it was
#[test]
fn error_mode() {
    let spec = spec_with_mode(AccumulationMode::Error);

    // A single occurrence is fine
    let args = arg_list!("--pick", "a");
    let result = get_parser(&spec).parse(&args).unwrap();
    assert_eq!(result.values("pick"), Some(&["a"][..]));

    let err = get_parser(&spec).parse(&arg_list!("--pick", "a", "--pick", "b")).unwrap_err();
    assert_eq!(
        *err.kind(),
        ParseErrorKind::OptionCannotBeSpecifiedMultipleTimes { name: "--pick".to_owned() }
    );
    assert_eq!(err.index(), Some(2));

    // The short form counts the same
    let err = get_parser(&spec).parse(&arg_list!("-pa", "-pb")).unwrap_err();
    assert_eq!(
        *err.kind(),
        ParseErrorKind::OptionCannotBeSpecifiedMultipleTimes { name: "--pick".to_owned() }
    );
}

/// Last-wins keeps the whole winning occurrence, not just one value
#[test]
fn last_wins_whole_occurrence() {
    use aclaf::arity::Arity;
    let mut spec = CommandSpec::new("tool");
    spec.add_option(
        OptionSpec::new("pair")
            .arity(Arity::new(2, Some(2)).unwrap())
            .accumulation(AccumulationMode::LastWins),
    );
    let args = arg_list!("--pair", "a", "b", "--pair", "c", "d");
    let result = get_parser(&spec).parse(&args).unwrap();
    assert_eq!(result.values("pair"), Some(&["c", "d"][..]));
}
