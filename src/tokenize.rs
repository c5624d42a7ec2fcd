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

//! Structural tokenizer for patterns.
//!
//! This is not a parser: it never rejects input. It splits a pattern into the blocks a host
//! draws as a flow diagram (literals, classes, escapes, group markers, alternation, any-char),
//! attaches a trailing quantifier to the block it follows, and tracks group numbers and nesting
//! depth. Whether the pattern is actually valid is decided when a [`Pattern`](crate::Pattern)
//! is compiled.
//!
//! The scan is deliberately shallow. `[` runs to the next `]` even if that `]` is escaped,
//! every `(` that is not `(?:` counts as a capturing group, and a `{` swallows everything up
//! to the next `}` as a quantifier. These are the rules the structural view is defined by, so
//! they must not be "fixed" into a real regex grammar.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Range;

/// The kind of a structural block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Any character without structural meaning.
    Literal,
    /// A bracketed class such as `[a-z]`, up to the next `]` or the end of the pattern.
    Class,
    /// A backslash and the character after it, e.g. `\d`.
    Escape,
    /// `(`, opening a capturing group. Carries the 1-based group number, assigned in order of
    /// appearance.
    GroupOpen(usize),
    /// `(?:`, opening a group that does not capture.
    NonCapturingGroupOpen,
    /// `)`.
    GroupClose,
    /// `|`.
    Alternation,
    /// `.`.
    AnyChar,
}

impl TokenKind {
    /// The group number of a capturing group open, `None` for every other kind.
    #[must_use]
    pub fn group_number(self) -> Option<usize> {
        match self {
            TokenKind::GroupOpen(number) => Some(number),
            _ => None,
        }
    }

    /// Whether this token opens a group, capturing or not.
    #[must_use]
    pub fn is_group_open(self) -> bool {
        matches!(
            self,
            TokenKind::GroupOpen(_) | TokenKind::NonCapturingGroupOpen
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Literal => f.write_str("Literal"),
            TokenKind::Class => f.write_str("Class"),
            TokenKind::Escape => f.write_str("Escaped"),
            TokenKind::GroupOpen(number) => write!(f, "Group #{}", number),
            TokenKind::NonCapturingGroupOpen => f.write_str("Non-capturing Group"),
            TokenKind::GroupClose => f.write_str("End Group"),
            TokenKind::Alternation => f.write_str("OR"),
            TokenKind::AnyChar => f.write_str("Any Character"),
        }
    }
}

/// A repetition suffix attached to the token before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quantifier<'p> {
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
    /// `?`
    Optional,
    /// Everything from a `{` up to and including the next `}`. The content is not checked,
    /// so this may hold something that is not a repetition at all, e.g. `{name}`.
    Braced(&'p str),
}

impl<'p> Quantifier<'p> {
    /// The source text of the quantifier.
    #[must_use]
    pub fn as_str(&self) -> &'p str {
        match *self {
            Quantifier::ZeroOrMore => "*",
            Quantifier::OneOrMore => "+",
            Quantifier::Optional => "?",
            Quantifier::Braced(s) => s,
        }
    }

    /// The repetition bounds as `(min, max)`, `max` being `None` when unbounded.
    ///
    /// Returns `None` for a braced span that is not of the form `{m}`, `{m,}` or `{m,n}`.
    ///
    /// ```rust
    /// # use regex_lens::Quantifier;
    /// assert_eq!(Quantifier::Braced("{2,5}").bounds(), Some((2, Some(5))));
    /// assert_eq!(Quantifier::Braced("{3,}").bounds(), Some((3, None)));
    /// assert_eq!(Quantifier::Braced("{,3}").bounds(), None);
    /// assert_eq!(Quantifier::OneOrMore.bounds(), Some((1, None)));
    /// ```
    #[must_use]
    pub fn bounds(&self) -> Option<(usize, Option<usize>)> {
        match *self {
            Quantifier::ZeroOrMore => Some((0, None)),
            Quantifier::OneOrMore => Some((1, None)),
            Quantifier::Optional => Some((0, Some(1))),
            Quantifier::Braced(s) => {
                let inner = s.strip_prefix('{')?.strip_suffix('}')?;
                match inner.split_once(',') {
                    None => {
                        let n = parse_count(inner)?;
                        Some((n, Some(n)))
                    }
                    Some((lo, "")) => Some((parse_count(lo)?, None)),
                    Some((lo, hi)) => Some((parse_count(lo)?, Some(parse_count(hi)?))),
                }
            }
        }
    }
}

// only plain decimal digits, `str::parse` would also take a leading `+`
fn parse_count(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl<'p> fmt::Display for Quantifier<'p> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One structural block of a pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'p> {
    kind: TokenKind,
    text: &'p str,
    start: usize,
    body_len: usize,
    quantifier: Option<Quantifier<'p>>,
    depth: usize,
}

impl<'p> Token<'p> {
    /// The kind of block.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The full source span consumed by this token, including its quantifier.
    ///
    /// Concatenating `text()` over all tokens gives back the pattern.
    #[must_use]
    #[inline]
    pub fn text(&self) -> &'p str {
        self.text
    }

    /// The source span without the quantifier, e.g. `[a-z]` for `[a-z]+`.
    #[must_use]
    #[inline]
    pub fn body(&self) -> &'p str {
        &self.text[..self.body_len]
    }

    /// The quantifier following the body, if any.
    #[must_use]
    #[inline]
    pub fn quantifier(&self) -> Option<Quantifier<'p>> {
        self.quantifier
    }

    /// Group number of a capturing group open.
    #[must_use]
    #[inline]
    pub fn group_number(&self) -> Option<usize> {
        self.kind.group_number()
    }

    /// Nesting depth, 0 being the top level.
    ///
    /// A group open reports the level it introduces and its close reports the same level, so
    /// in `(a)` all three tokens are at depth 1.
    #[must_use]
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Byte range of [`Token::text`] in the pattern.
    #[must_use]
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.text.len()
    }
}

impl<'p> fmt::Display for Token<'p> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// An iterator over the tokens of a pattern, created by [`tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'p> {
    pattern: &'p str,
    ix: usize,
    depth: usize,
    group_count: usize,
}

impl<'p> Tokens<'p> {
    fn quantifier_at(&self, ix: usize) -> Option<Quantifier<'p>> {
        let rest = &self.pattern[ix..];
        match rest.as_bytes().first()? {
            b'*' => Some(Quantifier::ZeroOrMore),
            b'+' => Some(Quantifier::OneOrMore),
            b'?' => Some(Quantifier::Optional),
            b'{' => rest.find('}').map(|close| Quantifier::Braced(&rest[..=close])),
            _ => None,
        }
    }
}

impl<'p> Iterator for Tokens<'p> {
    type Item = Token<'p>;

    fn next(&mut self) -> Option<Token<'p>> {
        let start = self.ix;
        let rest = &self.pattern[start..];
        let c = rest.chars().next()?;
        let after = &rest[c.len_utf8()..];

        let (kind, body_len) = match c {
            '[' => {
                let len = after.find(']').map_or(rest.len(), |close| close + 2);
                (TokenKind::Class, len)
            }
            '\\' => (TokenKind::Escape, 1 + after.chars().next().map_or(0, char::len_utf8)),
            '(' if after.starts_with("?:") => {
                self.depth += 1;
                (TokenKind::NonCapturingGroupOpen, 3)
            }
            '(' => {
                self.depth += 1;
                self.group_count += 1;
                (TokenKind::GroupOpen(self.group_count), 1)
            }
            ')' => (TokenKind::GroupClose, 1),
            '|' => (TokenKind::Alternation, 1),
            '.' => (TokenKind::AnyChar, 1),
            _ => (TokenKind::Literal, c.len_utf8()),
        };
        let depth = self.depth;
        if kind == TokenKind::GroupClose {
            // an unbalanced `)` leaves the depth at the top level
            self.depth = self.depth.saturating_sub(1);
        }

        let quantifier = self.quantifier_at(start + body_len);
        let end = start + body_len + quantifier.map_or(0, |q| q.as_str().len());
        self.ix = end;

        Some(Token {
            kind,
            text: &self.pattern[start..end],
            start,
            body_len,
            quantifier,
            depth,
        })
    }
}

impl<'p> FusedIterator for Tokens<'p> {}

/// Returns a lazy iterator over the tokens of `pattern`.
#[must_use]
pub fn tokens(pattern: &str) -> Tokens<'_> {
    Tokens {
        pattern,
        ix: 0,
        depth: 0,
        group_count: 0,
    }
}

/// Splits `pattern` into its structural tokens.
///
/// This never fails, also not for patterns the engine would reject:
///
/// ```rust
/// # use regex_lens::{tokenize, TokenKind};
/// let tokens = tokenize("([a-z]+|x");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::GroupOpen(1), TokenKind::Class, TokenKind::Alternation, TokenKind::Literal]
/// );
/// assert_eq!(tokens[1].quantifier().unwrap().as_str(), "+");
/// ```
#[must_use]
pub fn tokenize(pattern: &str) -> Vec<Token<'_>> {
    tokens(pattern).collect()
}
