// Copyright 2025 the `aclaf` project developers
//
// This file is part of the `aclaf` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Suggestion matching components
//!
//! This module contains the lookup used to offer a “did you mean ‘*y*’?” hint when an unknown
//! long option is encountered.

/// Find the best matching name for the given unknown string
///
/// Uses the `jaro_winkler` algorithm from the `strsim` crate; filters out any candidates with a
/// metric calculated as less than `0.8`, and returns the first candidate with the highest metric.
pub(crate) fn suggest<'a, T>(unknown: &str, haystack: impl Iterator<Item = &'a T>,
    get_name: fn(&'a T) -> &'a str) -> Option<&'a str>
{
    let mut best: Option<(&'a str, f64)> = None;
    for candidate in haystack {
        let name = get_name(candidate);
        let metric = strsim::jaro_winkler(unknown, name);
        if metric < 0.8 {
            continue;
        }
        match best {
            Some((_, best_metric)) if best_metric >= metric => {},
            _ => { best = Some((name, metric)); },
        }
    }
    best.map(|(name, _)| name)
}
