// Copyright 2025 the `aclaf` project developers
//
// This file is part of the `aclaf` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Negative number pattern components
//!
//! When negative number support is enabled, tokens beginning with a dash are tested against a
//! regular expression to decide whether they are numeric values rather than options. The pattern
//! is user-replaceable, so it is vetted here before use: it must compile, must not match the
//! empty string (which would let `-` alone or spurious tokens classify as numbers), and must not
//! contain an obviously catastrophic nested quantifier. The vetted pattern is compiled exactly
//! once, at parser construction.

use regex::Regex;
use crate::error::SpecError;

/// Pattern applied when none is supplied: plain and scientific-notation decimal numbers
pub const DEFAULT_PATTERN: &str = r"^-\d+\.?\d*([eE][+-]?\d+)?$";

/// A vetted, pre-compiled negative number matcher
#[derive(Debug, Clone)]
pub(crate) struct NumberMatcher {
    regex: Regex,
}

impl NumberMatcher {
    /// Vet and compile the given pattern
    ///
    /// Applies three gates in order, each failing with [`SpecError::InvalidPattern`]: the pattern
    /// must compile, must not match the empty string, and must not contain a quantified group
    /// whose interior itself contains `+`/`*` (e.g. `(a+)+`). The last gate is a heuristic; it
    /// does not catch alternation-based blowup.
    pub(crate) fn compile(pattern: &str) -> Result<Self, SpecError> {
        let regex = Regex::new(pattern).map_err(|e| SpecError::InvalidPattern {
            reason: format!("pattern failed to compile: {}", e),
        })?;
        if regex.is_match("") {
            return Err(SpecError::InvalidPattern {
                reason: "pattern matches the empty string".to_owned(),
            });
        }
        if has_nested_quantifier(pattern) {
            return Err(SpecError::InvalidPattern {
                reason: "pattern contains a quantified group with a nested quantifier".to_owned(),
            });
        }
        Ok(Self { regex })
    }

    /// Test whether the token is a negative number
    ///
    /// A token without a leading dash is never a negative number, whatever the pattern says.
    #[inline]
    pub(crate) fn matches(&self, token: &str) -> bool {
        token.starts_with('-') && self.regex.is_match(token)
    }
}

/// Scan for a group that both contains a `+`/`*` quantifier and is itself quantified
///
/// Textual scan equivalent to matching the pattern source against
/// `\([^)]*[+*][^)]*\)[+*]`.
fn has_nested_quantifier(pattern: &str) -> bool {
    let bytes = pattern.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b != b'(' {
            continue;
        }
        let mut interior_quantified = false;
        let mut j = i + 1;
        while j < bytes.len() && bytes[j] != b')' {
            if bytes[j] == b'+' || bytes[j] == b'*' {
                interior_quantified = true;
            }
            j += 1;
        }
        if j < bytes.len() && interior_quantified {
            if let Some(b'+') | Some(b'*') = bytes.get(j + 1) {
                return true;
            }
        }
    }
    false
}
