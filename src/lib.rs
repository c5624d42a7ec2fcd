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

/*!
The analysis core of an interactive regular expression visualizer.

Given a pattern, a text and a set of flags, this crate computes everything a visualizer needs to
draw: the structure of the pattern as a flat list of blocks, the matches with their captured
groups, the text split into plain and highlighted segments with a script label for every
highlight, and optionally the text after substitution.

Matching is done by the [regex] crate. Its syntax is what compiles here; look-around and
backreferences are reported as errors. The tokenizer on the other hand never fails: it is meant
to show the shape of a pattern while it is being typed, including patterns that do not compile
yet.

All offsets are byte offsets into UTF-8 strings.

# Usage

## Example: Structure of a pattern

```rust
use regex_lens::{tokenize, TokenKind};

let tokens = tokenize(r"(\d{3})-(?:ab|cd)");
let labels: Vec<_> = tokens.iter().map(|t| t.kind().to_string()).collect();
assert_eq!(
    labels,
    ["Group #1", "Escaped", "End Group", "Literal", "Non-capturing Group",
     "Literal", "Literal", "OR", "Literal", "Literal", "End Group"]
);
assert_eq!(tokens[1].text(), r"\d{3}");
assert_eq!(tokens[1].depth(), 1);
```

## Example: Matches and segments

```rust
use regex_lens::{compose, find_matches, Category, FlagSet};

let text = "user.name@domain.com";
let matches = find_matches("([a-z]+)@([a-z.]+)", FlagSet::global_unicode(), text).unwrap();

assert_eq!(matches.len(), 1);
assert_eq!(matches[0].start(), 5);
assert_eq!(matches[0].as_str(), "name@domain.com");
assert_eq!(matches[0].groups(), [Some("name"), Some("domain.com")]);

let segments = compose(text, &matches);
assert_eq!(segments[0].text(), "user.");
assert_eq!(segments[1].category(), Some(Category::Latin));
```

## Example: Substitution

```rust
use regex_lens::{substitute, FlagSet};

let flags = "g".parse().unwrap();
assert_eq!(substitute(r"(\w+)", flags, "[$1]", "ab cd").unwrap(), "[ab] [cd]");
```

## Example: Everything at once

```rust
use regex_lens::{Analysis, FlagSet, Input};

let input = Input::new(r"[가-힣]+", "안녕 hello", FlagSet::global_unicode());
let analysis = Analysis::run(&input);
let outcome = analysis.outcome().unwrap();
assert_eq!(outcome.matches()[0].as_str(), "안녕");
assert_eq!(outcome.segments()[0].category().unwrap().badge(), "KR");
```

# Limits

A global scan stops after [`DEFAULT_MATCH_LIMIT`] matches, which keeps patterns that match the
empty string everywhere from flooding a display. [`PatternBuilder`] can change this limit and the
engine's size limits. Substitution is not bound by the match limit.

[regex]: https://crates.io/crates/regex
*/

#![doc(html_root_url = "https://docs.rs/regex-lens/0.1.0")]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![warn(clippy::pedantic)]
#![allow(clippy::if_not_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::redundant_else)]
#![allow(clippy::similar_names)]
#![allow(clippy::struct_excessive_bools)]

use std::borrow::Cow;

mod analysis;
mod classify;
mod error;
mod expand;
mod flags;
mod pattern;
mod segment;
mod tokenize;
mod utf8util;

pub use crate::analysis::{Analysis, Input, Outcome};
pub use crate::classify::{classify, Category};
pub use crate::error::{CompileError, ParseFlagsError, Result};
pub use crate::expand::Expander;
pub use crate::flags::FlagSet;
pub use crate::pattern::{
    MatchRecord, Pattern, PatternBuilder, Records, Scan, DEFAULT_MATCH_LIMIT,
};
pub use crate::segment::{compose, Segment, SegmentKind};
pub use crate::tokenize::{tokenize, tokens, Quantifier, Token, TokenKind, Tokens};

/// Compile `pattern` with `flags` and list its matches in `text`: every match up to
/// [`DEFAULT_MATCH_LIMIT`] when `flags.global` is set, otherwise at most the first one.
///
/// After an empty match the search resumes one character further, so every position of `text`
/// is visited.
///
/// ```rust
/// # use regex_lens::{find_matches, FlagSet};
/// let records = find_matches("", FlagSet::global_unicode(), "x").unwrap();
/// let starts: Vec<_> = records.iter().map(|r| r.start()).collect();
/// assert_eq!(starts, [0, 1]);
/// ```
///
/// # Errors
///
/// Returns a [`CompileError`] if the engine rejects the pattern.
pub fn find_matches<'t>(pattern: &str, flags: FlagSet, text: &'t str) -> Result<Vec<MatchRecord<'t>>> {
    Ok(Pattern::new(pattern, flags)?.find_matches(text))
}

/// Compile `pattern` with `flags` and replace its matches in `text` with `template`: all of
/// them when `flags.global` is set, otherwise the first one. See [`Expander`] for the template
/// syntax.
///
/// # Errors
///
/// Returns a [`CompileError`] if the engine rejects the pattern.
pub fn substitute<'t>(
    pattern: &str,
    flags: FlagSet,
    template: &str,
    text: &'t str,
) -> Result<Cow<'t, str>> {
    Ok(Pattern::new(pattern, flags)?.substitute(template, text))
}
