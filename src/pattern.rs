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

//! Compiled patterns: match listing and substitution.

use std::borrow::Cow;
use std::iter::FusedIterator;
use std::ops::Range;
use std::str::FromStr;

use regex::Regex;

use crate::expand::Expander;
use crate::utf8util::next_codepoint_ix;
use crate::{CompileError, FlagSet, Result};

/// How many records a global scan collects at most, unless configured otherwise with
/// [`PatternBuilder::match_limit`].
pub const DEFAULT_MATCH_LIMIT: usize = 2000;

/// A pattern compiled together with its [`FlagSet`].
///
/// Compiling is the only place where a pattern is validated. Once built, listing matches and
/// substituting cannot fail.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    flags: FlagSet,
    match_limit: usize,
    has_named_groups: bool,
}

impl Pattern {
    /// Compile `pattern` with `flags` and default limits, see [`PatternBuilder`].
    ///
    /// # Errors
    ///
    /// Returns a [`CompileError`] if the engine rejects the pattern.
    #[inline]
    pub fn new(pattern: &str, flags: FlagSet) -> Result<Pattern> {
        PatternBuilder::new().flags(flags).build(pattern)
    }

    /// Create a builder for configuring flags and limits.
    #[must_use]
    #[inline]
    pub fn builder() -> PatternBuilder {
        PatternBuilder::new()
    }

    /// Returns the source pattern.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns the flags this pattern was compiled with.
    #[must_use]
    #[inline]
    pub fn flags(&self) -> FlagSet {
        self.flags
    }

    /// Returns the cap on records collected by a global scan.
    #[must_use]
    #[inline]
    pub fn match_limit(&self) -> usize {
        self.match_limit
    }

    /// Number of capturing groups, not counting the whole match.
    ///
    /// This is the length of [`MatchRecord::groups`] for every record of this pattern.
    #[must_use]
    #[inline]
    pub fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }

    /// Names of the capturing groups in declaration order, `None` for unnamed groups.
    pub fn capture_names(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.regex.capture_names().skip(1)
    }

    pub(crate) fn has_named_groups(&self) -> bool {
        self.has_named_groups
    }

    pub(crate) fn group_index(&self, name: &str) -> Option<usize> {
        self.regex.capture_names().position(|n| n == Some(name))
    }

    /// Returns a lazy iterator over successive matches in `text`, ignoring the global flag and
    /// the match limit.
    ///
    /// Each search starts where the previous match ended. After an empty match the next search
    /// starts one character further, so the iterator always terminates and yields at most one
    /// record per character boundary.
    ///
    /// ```rust
    /// # use regex_lens::{Pattern, FlagSet};
    /// let pattern = Pattern::new("a*", FlagSet::new()).unwrap();
    /// let found: Vec<_> = pattern.records("baaa").map(|r| (r.start(), r.as_str())).collect();
    /// assert_eq!(found, [(0, ""), (1, "aaa"), (4, "")]);
    /// ```
    #[must_use]
    #[inline]
    pub fn records<'p, 't>(&'p self, text: &'t str) -> Records<'p, 't> {
        Records {
            pattern: self,
            text,
            last_end: 0,
        }
    }

    /// Collect the matches in `text` according to the flags: every match (up to the match
    /// limit) when global, otherwise the first one.
    ///
    /// An empty `text` gives no records without searching.
    #[must_use]
    pub fn scan<'t>(&self, text: &'t str) -> Scan<'t> {
        if text.is_empty() {
            return Scan::default();
        }
        let limit = if self.flags.global {
            self.match_limit
        } else {
            1
        };
        let mut it = self.records(text);
        let records: Vec<_> = it.by_ref().take(limit).collect();
        let truncated = self.flags.global && records.len() == limit && it.next().is_some();
        Scan { records, truncated }
    }

    /// Same as [`Pattern::scan`] without the truncation marker.
    ///
    /// ```rust
    /// # use regex_lens::{Pattern, FlagSet};
    /// let pattern = Pattern::new(r"(\d{4})-(\d{2})?", FlagSet::global_unicode()).unwrap();
    /// let records = pattern.find_matches("2018-04 and 2020-");
    ///
    /// assert_eq!(records.len(), 2);
    /// assert_eq!(records[0].groups(), [Some("2018"), Some("04")]);
    /// assert_eq!(records[1].start(), 12);
    /// assert_eq!(records[1].groups(), [Some("2020"), None]);
    /// ```
    #[must_use]
    #[inline]
    pub fn find_matches<'t>(&self, text: &'t str) -> Vec<MatchRecord<'t>> {
        self.scan(text).into_records()
    }

    /// Replace matches in `text` with the expansion of `template`: all of them when global,
    /// otherwise the first one. See [`Expander`] for the template syntax.
    ///
    /// The replacement is not bound by the match limit. If nothing matches, `text` is returned
    /// borrowed.
    ///
    /// ```rust
    /// # use regex_lens::{Pattern, FlagSet};
    /// let first = Pattern::new(r"(\w+)", FlagSet::new()).unwrap();
    /// assert_eq!(first.substitute("<$1>", "ab cd"), "<ab> cd");
    ///
    /// let all = Pattern::new(r"(\w+)", "g".parse().unwrap()).unwrap();
    /// assert_eq!(all.substitute("<$1>", "ab cd"), "<ab> <cd>");
    /// ```
    #[must_use]
    pub fn substitute<'t>(&self, template: &str, text: &'t str) -> Cow<'t, str> {
        let limit = if self.flags.global { usize::MAX } else { 1 };
        let mut it = self.records(text).take(limit).peekable();
        if it.peek().is_none() {
            return Cow::Borrowed(text);
        }

        // A template without `$` is copied as is for every match.
        let expander = Expander::needs_expansion(template).then(|| Expander::new(self));

        let mut new = String::with_capacity(text.len());
        let mut last_match = 0;
        for record in it {
            new.push_str(&text[last_match..record.start()]);
            match &expander {
                Some(expander) => expander.append_expansion(&mut new, template, &record, text),
                None => new.push_str(template),
            }
            last_match = record.end();
        }
        new.push_str(&text[last_match..]);
        Cow::Owned(new)
    }
}

impl FromStr for Pattern {
    type Err = CompileError;

    /// Compiles a pattern with no flags set.
    fn from_str(s: &str) -> Result<Pattern> {
        Pattern::new(s, FlagSet::new())
    }
}

/// A builder for a [`Pattern`] to allow configuring flags and limits.
#[derive(Debug, Clone, Copy)]
pub struct PatternBuilder {
    flags: FlagSet,
    match_limit: usize,
    size_limit: Option<usize>,
    dfa_size_limit: Option<usize>,
}

impl Default for PatternBuilder {
    fn default() -> Self {
        PatternBuilder {
            flags: FlagSet::new(),
            match_limit: DEFAULT_MATCH_LIMIT,
            size_limit: None,
            dfa_size_limit: None,
        }
    }
}

impl PatternBuilder {
    /// Create a new builder with no flags and default limits.
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the [`Pattern`].
    ///
    /// # Errors
    ///
    /// Returns a [`CompileError`] if the engine rejects the pattern or the compiled program
    /// exceeds the size limit.
    pub fn build(&self, pattern: &str) -> Result<Pattern> {
        let mut builder = regex::RegexBuilder::new(pattern);
        builder
            .case_insensitive(self.flags.case_insensitive)
            .multi_line(self.flags.multiline)
            .unicode(self.flags.unicode);
        if let Some(limit) = self.size_limit {
            builder.size_limit(limit);
        }
        if let Some(limit) = self.dfa_size_limit {
            builder.dfa_size_limit(limit);
        }
        let regex = builder.build()?;
        let has_named_groups = regex.capture_names().flatten().next().is_some();

        Ok(Pattern {
            regex,
            flags: self.flags,
            match_limit: self.match_limit,
            has_named_groups,
        })
    }

    /// Replace all flags.
    #[inline]
    pub fn flags(&mut self, flags: FlagSet) -> &mut Self {
        self.flags = flags;
        self
    }

    /// Set the `g` flag.
    #[inline]
    pub fn global(&mut self, yes: bool) -> &mut Self {
        self.flags.global = yes;
        self
    }

    /// Set the `i` flag.
    #[inline]
    pub fn case_insensitive(&mut self, yes: bool) -> &mut Self {
        self.flags.case_insensitive = yes;
        self
    }

    /// Set the `m` flag.
    #[inline]
    pub fn multiline(&mut self, yes: bool) -> &mut Self {
        self.flags.multiline = yes;
        self
    }

    /// Set the `u` flag.
    #[inline]
    pub fn unicode(&mut self, yes: bool) -> &mut Self {
        self.flags.unicode = yes;
        self
    }

    /// Limit how many records a global scan collects. This protects the caller from patterns
    /// that match at (nearly) every position of a long text.
    ///
    /// Default is `2000`.
    #[inline]
    pub fn match_limit(&mut self, limit: usize) -> &mut Self {
        self.match_limit = limit;
        self
    }

    /// Set the approximate size limit of the compiled program.
    ///
    /// This option is forwarded to the `regex` crate.
    #[inline]
    pub fn size_limit(&mut self, limit: usize) -> &mut Self {
        self.size_limit = Some(limit);
        self
    }

    /// Set the approximate size of the cache used by the DFA.
    ///
    /// This option is forwarded to the `regex` crate.
    #[inline]
    pub fn dfa_size_limit(&mut self, limit: usize) -> &mut Self {
        self.dfa_size_limit = Some(limit);
        self
    }
}

/// One match of a pattern in a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord<'t> {
    text: &'t str,
    start: usize,
    groups: Vec<Option<&'t str>>,
}

impl<'t> MatchRecord<'t> {
    /// Returns the matched text, possibly empty.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &'t str {
        self.text
    }

    /// Returns the starting byte offset of the match in the text.
    #[must_use]
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the ending byte offset of the match in the text.
    #[must_use]
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Returns the range over the starting and ending byte offsets of the match.
    #[must_use]
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Returns the length, in bytes, of this match.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if and only if this match has a length of zero.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The capturing groups in declaration order. `None` means the group did not take part in
    /// this match, which is different from `Some("")`.
    #[must_use]
    #[inline]
    pub fn groups(&self) -> &[Option<&'t str>] {
        &self.groups
    }

    /// Get a group by its number. `0` is the whole match.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&'t str> {
        match i {
            0 => Some(self.text),
            _ => self.groups.get(i - 1).copied().flatten(),
        }
    }
}

impl<'t> AsRef<str> for MatchRecord<'t> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// The records collected by [`Pattern::scan`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan<'t> {
    records: Vec<MatchRecord<'t>>,
    truncated: bool,
}

impl<'t> Scan<'t> {
    /// The records, in increasing order of offset.
    #[must_use]
    #[inline]
    pub fn records(&self) -> &[MatchRecord<'t>] {
        &self.records
    }

    /// Whether the match limit stopped the scan while more matches were available.
    #[must_use]
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Take the records.
    #[must_use]
    #[inline]
    pub fn into_records(self) -> Vec<MatchRecord<'t>> {
        self.records
    }
}

/// An iterator over successive matches, created by [`Pattern::records`].
///
/// `'p` is the lifetime of the compiled pattern and `'t` is the lifetime of the searched text.
#[derive(Debug, Clone)]
pub struct Records<'p, 't> {
    pattern: &'p Pattern,
    text: &'t str,
    last_end: usize,
}

impl<'p, 't> Records<'p, 't> {
    /// Return the text being searched.
    #[must_use]
    #[inline]
    pub fn text(&self) -> &'t str {
        self.text
    }

    /// Return the underlying pattern.
    #[must_use]
    #[inline]
    pub fn pattern(&self) -> &'p Pattern {
        self.pattern
    }
}

impl<'p, 't> Iterator for Records<'p, 't> {
    type Item = MatchRecord<'t>;

    fn next(&mut self) -> Option<MatchRecord<'t>> {
        if self.last_end > self.text.len() {
            return None;
        }

        // `captures_at` rather than slicing, so that anchors and word boundaries still see the
        // text before `last_end`.
        let Some(captures) = self.pattern.regex.captures_at(self.text, self.last_end) else {
            self.last_end = self.text.len() + 1;
            return None;
        };
        let whole = captures.get(0)?;

        self.last_end = if whole.is_empty() {
            next_codepoint_ix(self.text, whole.end())
        } else {
            whole.end()
        };

        Some(MatchRecord {
            text: whole.as_str(),
            start: whole.start(),
            groups: captures
                .iter()
                .skip(1)
                .map(|group| group.map(|m| m.as_str()))
                .collect(),
        })
    }
}

impl<'p, 't> FusedIterator for Records<'p, 't> {}
