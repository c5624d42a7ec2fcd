// Copyright 2024 The Regex Lens Authors.
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! Running every stage for one set of inputs.
//!
//! A host redraws on each keystroke; [`Analysis::run`] recomputes everything from the raw
//! inputs so that the result never depends on what was shown before.

use std::borrow::Cow;

use crate::{compose, tokenize, CompileError, FlagSet, MatchRecord, PatternBuilder, Segment, Token};

/// The raw inputs of one analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Input<'a> {
    /// The pattern source.
    pub pattern: &'a str,
    /// The text to match against.
    pub text: &'a str,
    /// Matcher options.
    pub flags: FlagSet,
    /// The replacement template, if substitution is wanted.
    pub template: Option<&'a str>,
}

impl<'a> Input<'a> {
    /// Inputs without a template.
    #[must_use]
    pub fn new(pattern: &'a str, text: &'a str, flags: FlagSet) -> Self {
        Input {
            pattern,
            text,
            flags,
            template: None,
        }
    }

    /// Also substitute `template`.
    #[must_use]
    pub fn with_template(self, template: &'a str) -> Self {
        Input {
            template: Some(template),
            ..self
        }
    }
}

/// Everything that needs a compiled pattern.
#[derive(Debug, Clone)]
pub struct Outcome<'a> {
    matches: Vec<MatchRecord<'a>>,
    truncated: bool,
    segments: Vec<Segment<'a>>,
    replaced: Option<Cow<'a, str>>,
}

impl<'a> Outcome<'a> {
    /// The match records, in order.
    #[must_use]
    pub fn matches(&self) -> &[MatchRecord<'a>] {
        &self.matches
    }

    /// Whether the match limit cut the list short.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// The display segments covering the text.
    #[must_use]
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// The substituted text, present when the input had a template.
    #[must_use]
    pub fn replaced(&self) -> Option<&str> {
        self.replaced.as_deref()
    }
}

/// The result of analysing one [`Input`].
///
/// Tokens are always available, even for patterns the engine rejects, so a host can keep
/// showing the structure while the user is halfway through typing a group.
///
/// ```rust
/// # use regex_lens::{Analysis, FlagSet, Input};
/// let analysis = Analysis::run(&Input::new("(a", "aaa", FlagSet::global_unicode()));
/// assert_eq!(analysis.tokens().len(), 2);
/// assert!(analysis.error().is_some());
///
/// let input = Input::new("a+", "baab", FlagSet::global_unicode()).with_template("[$&]");
/// let analysis = Analysis::run(&input);
/// let outcome = analysis.outcome().unwrap();
/// assert_eq!(outcome.matches().len(), 1);
/// assert_eq!(outcome.replaced(), Some("b[aa]b"));
/// ```
#[derive(Debug, Clone)]
pub struct Analysis<'a> {
    tokens: Vec<Token<'a>>,
    outcome: Result<Outcome<'a>, CompileError>,
}

impl<'a> Analysis<'a> {
    /// Analyse `input` with default limits.
    #[must_use]
    pub fn run(input: &Input<'a>) -> Self {
        Analysis::run_with(&PatternBuilder::new(), input)
    }

    /// Analyse `input`, compiling with the limits of `builder`. The flags of `input` take
    /// precedence over those set on the builder.
    #[must_use]
    pub fn run_with(builder: &PatternBuilder, input: &Input<'a>) -> Self {
        let tokens = tokenize(input.pattern);
        let mut builder = *builder;
        let outcome = builder
            .flags(input.flags)
            .build(input.pattern)
            .map(|pattern| {
                let scan = pattern.scan(input.text);
                let truncated = scan.is_truncated();
                let matches = scan.into_records();
                let segments = compose(input.text, &matches);
                let replaced = input
                    .template
                    .map(|template| pattern.substitute(template, input.text));
                Outcome {
                    matches,
                    truncated,
                    segments,
                    replaced,
                }
            });
        Analysis { tokens, outcome }
    }

    /// The structural tokens of the pattern.
    #[must_use]
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// Matches, segments and replacement, or the reason the pattern did not compile.
    ///
    /// # Errors
    ///
    /// Returns the [`CompileError`] if the pattern is invalid.
    pub fn outcome(&self) -> Result<&Outcome<'a>, &CompileError> {
        self.outcome.as_ref()
    }

    /// The compile error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&CompileError> {
        self.outcome.as_ref().err()
    }

    /// Whether the pattern compiled.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Take the outcome out of the analysis.
    ///
    /// # Errors
    ///
    /// Returns the [`CompileError`] if the pattern is invalid.
    pub fn into_outcome(self) -> Result<Outcome<'a>, CompileError> {
        self.outcome
    }
}
