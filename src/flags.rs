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

//! The matcher configuration shared by matching and substitution.

use std::fmt;
use std::str::FromStr;

use crate::ParseFlagsError;

/// Options applied uniformly to [`find_matches`](crate::find_matches) and
/// [`substitute`](crate::substitute).
///
/// Every flag is forwarded to the engine; none is ignored. The textual form is the usual
/// `gimu` letter string:
///
/// ```rust
/// # use regex_lens::FlagSet;
/// let flags: FlagSet = "gu".parse().unwrap();
/// assert!(flags.global && flags.unicode);
/// assert!(!flags.case_insensitive && !flags.multiline);
/// assert_eq!(flags.to_string(), "gu");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct FlagSet {
    /// `g`: collect every match instead of the first one, and replace every occurrence.
    pub global: bool,
    /// `i`: case-insensitive matching.
    pub case_insensitive: bool,
    /// `m`: `^` and `$` match at line boundaries.
    pub multiline: bool,
    /// `u`: Unicode-aware classes and case folding. With this off `\w` and friends are
    /// ASCII-only, and the engine rejects anything that could match part of a character:
    /// `.`, negated classes, non-ASCII class members and escapes such as `\xFF`.
    pub unicode: bool,
}

impl FlagSet {
    /// No flags set.
    #[must_use]
    pub const fn new() -> Self {
        FlagSet {
            global: false,
            case_insensitive: false,
            multiline: false,
            unicode: false,
        }
    }

    /// Global and unicode, the usual starting point of an interactive session.
    #[must_use]
    pub const fn global_unicode() -> Self {
        FlagSet {
            global: true,
            unicode: true,
            ..FlagSet::new()
        }
    }

    fn letters(self) -> [(char, bool); 4] {
        [
            ('g', self.global),
            ('i', self.case_insensitive),
            ('m', self.multiline),
            ('u', self.unicode),
        ]
    }
}

impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, on) in self.letters() {
            if on {
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}

impl FromStr for FlagSet {
    type Err = ParseFlagsError;

    /// Parses a flag string such as `"gi"`. Order does not matter and repeated letters are
    /// accepted.
    fn from_str(s: &str) -> Result<FlagSet, ParseFlagsError> {
        let mut flags = FlagSet::new();
        for letter in s.chars() {
            match letter {
                'g' => flags.global = true,
                'i' => flags.case_insensitive = true,
                'm' => flags.multiline = true,
                'u' => flags.unicode = true,
                _ => return Err(ParseFlagsError { letter }),
            }
        }
        Ok(flags)
    }
}
