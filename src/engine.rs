// Copyright 2025 the `aclaf` project developers
//
// This file is part of the `aclaf` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

use std::collections::HashMap;
use std::mem;
use log::{debug, trace};
use crate::accumulate::{self, Occurrence};
use crate::analysis::ParseResult;
use crate::commands::CommandSpec;
use crate::error::{ParseError, ParseErrorKind};
use crate::options::OptionSpec;
use crate::pattern::NumberMatcher;

/// Parse a token list against a command specification
pub(crate) fn run<'r, 's>(
    spec: &'r CommandSpec,
    matcher: Option<&NumberMatcher>,
    tokens: &[&'s str],
) -> Result<ParseResult<'r, 's>, ParseError> {
    Engine::new(spec, matcher, tokens, 0, vec![spec.name.clone()]).run()
}

/// Classified form of a single raw token, relative to the current dispatch state
enum TokenClass<'r, 's> {
    /// `--name` or `--name=value`; the name may be empty or unknown at this point
    LongOption { name: &'s str, inline: Option<&'s str> },
    /// `-abc`-form token, held without its dash prefix
    ShortCluster { body: &'s str },
    /// The literal `--`
    Delimiter,
    /// A token equal to a declared subcommand, at a point where one may appear
    Subcommand { command: &'r CommandSpec },
    /// A token accepted by the negative number matcher
    NegativeNumber,
    /// Anything else
    Positional,
}

/// An option whose name has been consumed and whose values are still being collected
struct Pending<'r, 's> {
    opt: &'r OptionSpec,
    /// Index of the argument the option appeared in
    index: usize,
    /// The option as the user invoked it, for error messages
    invoked: String,
    values: Vec<&'s str>,
}

/// Single-pass dispatch state machine over one command level
///
/// Consumes tokens left to right, classifying each against the current state and either recording
/// option occurrences, filling positional slots, or descending into a subcommand (which takes over
/// the remaining tokens). Occurrence collapsing is left to the accumulation pass.
struct Engine<'e, 'r, 's> {
    spec: &'r CommandSpec,
    matcher: Option<&'e NumberMatcher>,
    tokens: &'e [&'s str],
    /// Offset of `tokens[0]` within the original argument list, for error reporting
    base: usize,
    /// Command names from the root to this level
    path: Vec<String>,
    cursor: usize,
    positional_cursor: usize,
    positional_buffer: Vec<Vec<&'s str>>,
    occurrences: HashMap<&'r str, Vec<Occurrence<'s>>>,
    after_delimiter: bool,
    /// A token can only be a subcommand keyword before any positional has been consumed at this
    /// level and before the delimiter
    try_subcommands: bool,
    pending: Option<Pending<'r, 's>>,
}

impl<'e, 'r, 's> Engine<'e, 'r, 's> {
    fn new(
        spec: &'r CommandSpec,
        matcher: Option<&'e NumberMatcher>,
        tokens: &'e [&'s str],
        base: usize,
        path: Vec<String>,
    ) -> Self {
        Self {
            spec,
            matcher,
            tokens,
            base,
            path,
            cursor: 0,
            positional_cursor: 0,
            positional_buffer: vec![Vec::new(); spec.positionals.len()],
            occurrences: HashMap::new(),
            after_delimiter: false,
            try_subcommands: true,
            pending: None,
        }
    }

    fn run(mut self) -> Result<ParseResult<'r, 's>, ParseError> {
        while self.cursor < self.tokens.len() {
            let token = self.tokens[self.cursor];
            let index = self.base + self.cursor;

            // An option collecting values examines the next token before anything else: it is
            // consumed as a value unless it ends the occurrence.
            if let Some(mut pending) = self.pending.take() {
                let stop = token == "--"
                    || (pending.opt.arity.is_satisfied(pending.values.len())
                        && self.stops_consumption(token));
                if !stop {
                    trace!("argument {}: `{}` consumed as a value of `{}`",
                        index, token, pending.invoked);
                    pending.values.push(token);
                    self.cursor += 1;
                    match pending.opt.arity.is_saturated(pending.values.len()) {
                        true => self.finalize(pending)?,
                        false => self.pending = Some(pending),
                    }
                    continue;
                }
                self.finalize(pending)?;
                // The current token is then re-examined in the non-pending state
            }

            self.cursor += 1;
            match self.classify(token) {
                TokenClass::LongOption { name, inline } => {
                    self.dispatch_long(index, name, inline)?;
                },
                TokenClass::ShortCluster { body } => {
                    self.dispatch_cluster(index, body)?;
                },
                TokenClass::Delimiter => {
                    debug!("argument {}: end-of-options delimiter", index);
                    self.after_delimiter = true;
                    self.try_subcommands = false;
                },
                TokenClass::Subcommand { command } => {
                    debug!("argument {}: descending into subcommand `{}`", index, command.name);
                    self.check_positionals()?;
                    let tokens = self.tokens;
                    let rest = &tokens[self.cursor..];
                    let mut child_path = self.path.clone();
                    child_path.push(command.name.clone());
                    let child =
                        Engine::new(command, self.matcher, rest, index + 1, child_path).run()?;
                    return self.finish(Some(Box::new(child)));
                },
                TokenClass::NegativeNumber => {
                    trace!("argument {}: `{}` taken as a negative number", index, token);
                    if !self.push_positional(token) {
                        // Nothing left to hold the value, so the token reverts to its option
                        // reading
                        return Err(self.err(
                            ParseErrorKind::UnknownOption {
                                name: token.to_owned(),
                                suggestion: None,
                                looks_numeric: true,
                            },
                            Some(index),
                        ));
                    }
                    self.try_subcommands = false;
                },
                TokenClass::Positional => {
                    if !self.push_positional(token) {
                        return Err(self.err(
                            ParseErrorKind::TooManyPositionals { value: token.to_owned() },
                            Some(index),
                        ));
                    }
                    self.try_subcommands = false;
                },
            }
        }

        if let Some(pending) = self.pending.take() {
            self.finalize(pending)?;
        }
        self.finish(None)
    }

    /// Classify a raw token, relative to the current state
    ///
    /// Total and deterministic; first matching rule wins.
    fn classify(&self, token: &'s str) -> TokenClass<'r, 's> {
        if self.after_delimiter {
            return TokenClass::Positional;
        }
        if token == "--" {
            return TokenClass::Delimiter;
        }
        if let Some(rest) = token.strip_prefix("--") {
            // Anything longer than the delimiter itself is long-option shaped; the name splits
            // from an inline value at the first `=` only
            return match rest.find('=') {
                Some(pos) => TokenClass::LongOption {
                    name: &rest[..pos],
                    inline: Some(&rest[pos + 1..]),
                },
                None => TokenClass::LongOption { name: rest, inline: None },
            };
        }
        if token == "-" {
            // stdin convention
            return TokenClass::Positional;
        }
        if token.starts_with('-') {
            // A token textually equal to a declared subcommand outranks every other reading
            if self.try_subcommands {
                if let Some(command) = self.spec.find_subcommand(token) {
                    return TokenClass::Subcommand { command };
                }
            }
            // A declared short option in the lead position in turn outranks the numeric reading
            if let Some(first) = token.chars().nth(1) {
                if self.spec.find_short(first).is_some() {
                    return TokenClass::ShortCluster { body: &token[1..] };
                }
            }
            if let Some(matcher) = self.matcher {
                if matcher.matches(token) {
                    return TokenClass::NegativeNumber;
                }
            }
            return TokenClass::ShortCluster { body: &token[1..] };
        }
        if self.try_subcommands {
            if let Some(command) = self.spec.find_subcommand(token) {
                return TokenClass::Subcommand { command };
            }
        }
        TokenClass::Positional
    }

    /// Whether this token ends a pending option’s value collection (min arity already met)
    fn stops_consumption(&self, token: &str) -> bool {
        if token == "--" {
            return true;
        }
        if let Some(rest) = token.strip_prefix("--") {
            return !rest.is_empty();
        }
        if token.len() > 1 && token.starts_with('-') {
            // A token equal to a declared subcommand is not an option; it is consumed as a value
            if self.try_subcommands && self.spec.find_subcommand(token).is_some() {
                return false;
            }
            if let Some(first) = token.chars().nth(1) {
                if self.spec.find_short(first).is_some() {
                    return true;
                }
            }
            if let Some(matcher) = self.matcher {
                if matcher.matches(token) {
                    // Negative numbers are values even though they start with a dash
                    return false;
                }
            }
            return true;
        }
        false
    }

    fn dispatch_long(&mut self, index: usize, name: &'s str, inline: Option<&'s str>)
        -> Result<(), ParseError>
    {
        let opt = match self.spec.find_long(name) {
            Some(opt) => opt,
            None => return Err(self.unknown_long(index, name)),
        };
        match inline {
            Some(value) => {
                if !opt.takes_values() {
                    return Err(self.err(
                        ParseErrorKind::FlagTakesNoValue { name: format!("--{}", opt.long) },
                        Some(index),
                    ));
                }
                // An inline value is the occurrence’s only value; it never spills into
                // following arguments
                self.record(opt, index, vec![value]);
            },
            None => {
                if !opt.takes_values() {
                    self.record(opt, index, Vec::new());
                } else {
                    self.pending = Some(Pending {
                        opt,
                        index,
                        invoked: format!("--{}", opt.long),
                        values: Vec::new(),
                    });
                }
            },
        }
        Ok(())
    }

    fn dispatch_cluster(&mut self, index: usize, body: &'s str) -> Result<(), ParseError> {
        for (pos, ch) in body.char_indices() {
            let opt = match self.spec.find_short(ch) {
                Some(opt) => opt,
                None => {
                    let looks_numeric = ch.is_ascii_digit() && self.matcher.is_none();
                    return Err(self.err(
                        ParseErrorKind::UnknownOption {
                            name: format!("-{}", ch),
                            suggestion: None,
                            looks_numeric,
                        },
                        Some(index),
                    ));
                },
            };
            let rest = &body[pos + ch.len_utf8()..];
            if !opt.takes_values() {
                if rest.starts_with('=') {
                    return Err(self.err(
                        ParseErrorKind::FlagTakesNoValue { name: format!("-{}", ch) },
                        Some(index),
                    ));
                }
                self.record(opt, index, Vec::new());
                continue;
            }
            // The first value-taking option ends the cluster: the remainder of the token is its
            // glued value (a leading `=` merely separates), or an occurrence opens to collect
            // values from following arguments
            if let Some(value) = rest.strip_prefix('=') {
                self.record(opt, index, vec![value]);
            } else if rest.is_empty() {
                self.pending = Some(Pending {
                    opt,
                    index,
                    invoked: format!("-{}", ch),
                    values: Vec::new(),
                });
            } else {
                self.record(opt, index, vec![rest]);
            }
            return Ok(());
        }
        Ok(())
    }

    /// Offer the value to the positional slot at the cursor, advancing over saturated slots
    fn push_positional(&mut self, value: &'s str) -> bool {
        while let Some(pos) = self.spec.positionals.get(self.positional_cursor) {
            let filled = self.positional_buffer[self.positional_cursor].len();
            if pos.arity.is_saturated(filled) {
                self.positional_cursor += 1;
                continue;
            }
            self.positional_buffer[self.positional_cursor].push(value);
            if pos.arity.is_saturated(filled + 1) {
                self.positional_cursor += 1;
            }
            return true;
        }
        false
    }

    /// Close a pending occurrence, which must have met its minimum arity
    fn finalize(&mut self, pending: Pending<'r, 's>) -> Result<(), ParseError> {
        if !pending.opt.arity.is_satisfied(pending.values.len()) {
            return Err(self.err(
                ParseErrorKind::InsufficientOptionValues { name: pending.invoked },
                Some(pending.index),
            ));
        }
        self.record(pending.opt, pending.index, pending.values);
        Ok(())
    }

    fn record(&mut self, opt: &'r OptionSpec, index: usize, values: Vec<&'s str>) {
        self.occurrences
            .entry(opt.long.as_str())
            .or_insert_with(Vec::new)
            .push(Occurrence { index, values });
    }

    /// Verify every positional slot has met its minimum arity
    fn check_positionals(&self) -> Result<(), ParseError> {
        for (pos, buffer) in self.spec.positionals.iter().zip(&self.positional_buffer) {
            if !pos.arity.is_satisfied(buffer.len()) {
                return Err(self.err(
                    ParseErrorKind::MissingPositional { name: pos.name.clone() },
                    None,
                ));
            }
        }
        Ok(())
    }

    /// Run the end-of-level checks and accumulation, producing this level’s result
    fn finish(mut self, subcommand: Option<Box<ParseResult<'r, 's>>>)
        -> Result<ParseResult<'r, 's>, ParseError>
    {
        self.check_positionals()?;
        let occurrences = mem::take(&mut self.occurrences);
        let options = accumulate::collapse(self.spec, occurrences, &self.path)?;
        let buffers = mem::take(&mut self.positional_buffer);
        let positionals = self.spec.positionals.iter()
            .map(|p| p.name.as_str())
            .zip(buffers)
            .collect();
        Ok(ParseResult {
            command: self.spec.name.as_str(),
            options,
            positionals,
            subcommand,
        })
    }

    fn unknown_long(&self, index: usize, name: &str) -> ParseError {
        #[cfg(feature = "suggestions")]
        let suggestion = crate::matching::suggest(name, self.spec.options.iter(), |o| {
            o.long.as_str()
        })
        .map(str::to_owned);
        #[cfg(not(feature = "suggestions"))]
        let suggestion = None;
        self.err(
            ParseErrorKind::UnknownOption {
                name: format!("--{}", name),
                suggestion,
                looks_numeric: false,
            },
            Some(index),
        )
    }

    fn err(&self, kind: ParseErrorKind, index: Option<usize>) -> ParseError {
        ParseError::new(kind, index, self.path.clone())
    }
}
