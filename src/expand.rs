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

//! Expansion of `$` references in replacement templates.

use crate::{MatchRecord, Pattern};

/// Expands replacement templates for one match.
///
/// The syntax is the one of `String.prototype.replace` in JavaScript:
///
/// | Template | Expands to |
/// |---|---|
/// | `$$` | a literal `$` |
/// | `$&` | the whole match |
/// | `` $` `` | the text before the match |
/// | `$'` | the text after the match |
/// | `$1` ... `$99` | the numbered group |
/// | `$<name>` | the named group |
///
/// A group that did not take part in the match expands to nothing. A `$` that does not start
/// one of the forms above is kept literally, e.g. `$0`, `$5` in a pattern with fewer than five
/// groups, or `$<name>` in a pattern without named groups.
///
/// For two digits the longer reference wins if that group exists, otherwise the second digit
/// is literal text: with one group, `$10` is group 1 followed by `0`.
///
/// ```rust
/// # use regex_lens::{Expander, Pattern, FlagSet};
/// let pattern = Pattern::new(r"(\w+)@(\w+)", FlagSet::new()).unwrap();
/// let text = "mail user@host now";
/// let record = &pattern.find_matches(text)[0];
///
/// let expander = Expander::new(&pattern);
/// assert_eq!(expander.expansion("$2 at $1", record, text), "host at user");
/// assert_eq!(expander.expansion("[$&] costs $$5", record, text), "[user@host] costs $5");
/// assert_eq!(expander.expansion("$`|$'", record, text), "mail | now");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Expander<'p> {
    pattern: &'p Pattern,
}

impl<'p> Expander<'p> {
    /// Create an expander resolving group references against `pattern`.
    #[must_use]
    pub fn new(pattern: &'p Pattern) -> Self {
        Expander { pattern }
    }

    /// Whether `template` may contain a reference at all. Templates for which this is false
    /// expand to themselves.
    #[must_use]
    pub fn needs_expansion(template: &str) -> bool {
        template.contains('$')
    }

    /// Expand `template` for `record`, a match found in `text`.
    #[must_use]
    pub fn expansion(&self, template: &str, record: &MatchRecord<'_>, text: &str) -> String {
        let mut dst = String::with_capacity(template.len());
        self.append_expansion(&mut dst, template, record, text);
        dst
    }

    /// Expand `template` for `record`, a match found in `text`, appending to `dst`.
    pub fn append_expansion(
        &self,
        dst: &mut String,
        template: &str,
        record: &MatchRecord<'_>,
        text: &str,
    ) {
        let mut rest = template;
        while let Some(ix) = rest.find('$') {
            dst.push_str(&rest[..ix]);
            rest = &rest[ix..];
            let consumed = self.expand_one(dst, rest, record, text);
            rest = &rest[consumed..];
        }
        dst.push_str(rest);
    }

    // `s` starts with `$`; returns how many bytes of it were used
    fn expand_one(&self, dst: &mut String, s: &str, record: &MatchRecord<'_>, text: &str) -> usize {
        let bytes = s.as_bytes();
        match bytes.get(1) {
            Some(b'$') => {
                dst.push('$');
                2
            }
            Some(b'&') => {
                dst.push_str(record.as_str());
                2
            }
            Some(b'`') => {
                dst.push_str(text.get(..record.start()).unwrap_or(""));
                2
            }
            Some(b'\'') => {
                dst.push_str(text.get(record.end()..).unwrap_or(""));
                2
            }
            Some(&d @ b'0'..=b'9') => {
                let n_groups = record.groups().len();
                let one = usize::from(d - b'0');
                if let Some(&d2 @ b'0'..=b'9') = bytes.get(2) {
                    let two = one * 10 + usize::from(d2 - b'0');
                    if (1..=n_groups).contains(&two) {
                        dst.push_str(record.get(two).unwrap_or(""));
                        return 3;
                    }
                }
                if (1..=n_groups).contains(&one) {
                    dst.push_str(record.get(one).unwrap_or(""));
                    return 2;
                }
                dst.push('$');
                1
            }
            Some(b'<') if self.pattern.has_named_groups() => match s[2..].find('>') {
                Some(close) => {
                    let name = &s[2..2 + close];
                    if let Some(ix) = self.pattern.group_index(name) {
                        dst.push_str(record.get(ix).unwrap_or(""));
                    }
                    close + 3
                }
                None => {
                    dst.push('$');
                    1
                }
            },
            _ => {
                dst.push('$');
                1
            }
        }
    }
}
