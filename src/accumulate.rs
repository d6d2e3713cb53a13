// Copyright 2025 the `aclaf` project developers
//
// This file is part of the `aclaf` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Occurrence accumulation
//!
//! The dispatch phase records one [`Occurrence`] per option use, in input order, without applying
//! any repetition policy. This module collapses those raw occurrence lists into each option’s
//! final [`OptionValue`], as a pure function of the recorded occurrences and the command
//! specification. Keeping the two phases apart keeps the dispatcher free of mode-specific
//! branching.

use std::collections::HashMap;
use crate::analysis::OptionValue;
use crate::commands::CommandSpec;
use crate::error::{ParseError, ParseErrorKind};
use crate::options::AccumulationMode;

/// One recorded use of an option: where it appeared, and the values that use collected
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Occurrence<'s> {
    /// Index of the argument the occurrence started at
    pub index: usize,
    /// Values collected for this occurrence; empty for a bare flag
    pub values: Vec<&'s str>,
}

/// Collapse recorded occurrences into each declared option’s final value
///
/// Every option declared on `spec` gets an entry: [`OptionValue::Unset`] where it never occurred,
/// otherwise its accumulation policy applied over the occurrence list. Each occurrence’s value
/// count is re-checked against the option’s arity bounds; an occurrence recorded from an inline
/// value may fall short of the minimum, since inline values never spill into following arguments.
pub(crate) fn collapse<'r, 's>(
    spec: &'r CommandSpec,
    mut occurrences: HashMap<&'r str, Vec<Occurrence<'s>>>,
    command_path: &[String],
) -> Result<HashMap<&'r str, OptionValue<'s>>, ParseError> {
    let mut out = HashMap::with_capacity(spec.options.len());

    for opt in &spec.options {
        let occ = occurrences.remove(opt.long.as_str()).unwrap_or_default();

        for o in &occ {
            if !opt.arity.admits(o.values.len()) {
                return Err(ParseError::new(
                    ParseErrorKind::InsufficientOptionValues { name: format!("--{}", opt.long) },
                    Some(o.index),
                    command_path.to_vec(),
                ));
            }
        }

        let value = match (occ.is_empty(), opt.accumulation) {
            (true, _) => OptionValue::Unset,
            (false, AccumulationMode::Collect) => {
                OptionValue::Values(occ.iter().flat_map(|o| o.values.iter().copied()).collect())
            },
            (false, AccumulationMode::Count) => OptionValue::Count(occ.len() as u32),
            (false, AccumulationMode::FirstWins) => {
                OptionValue::Values(occ.first().map(|o| o.values.clone()).unwrap_or_default())
            },
            (false, AccumulationMode::LastWins) => {
                OptionValue::Values(occ.last().map(|o| o.values.clone()).unwrap_or_default())
            },
            (false, AccumulationMode::Error) => {
                if let Some(second) = occ.get(1) {
                    return Err(ParseError::new(
                        ParseErrorKind::OptionCannotBeSpecifiedMultipleTimes {
                            name: format!("--{}", opt.long),
                        },
                        Some(second.index),
                        command_path.to_vec(),
                    ));
                }
                OptionValue::Values(occ.first().map(|o| o.values.clone()).unwrap_or_default())
            },
        };
        out.insert(opt.long.as_str(), value);
    }

    Ok(out)
}
