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

//! Splitting a text into plain and highlighted segments.

use std::ops::Range;

use crate::utf8util::floor_boundary;
use crate::{classify, Category, MatchRecord};

/// Whether a segment is part of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Text between (or around) matches.
    Plain,
    /// The text of a match.
    Matched {
        /// Position of the originating record in the slice given to [`compose`].
        index: usize,
        /// Classification of the matched text.
        category: Category,
    },
}

/// A contiguous slice of the target text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment<'t> {
    kind: SegmentKind,
    text: &'t str,
    start: usize,
}

impl<'t> Segment<'t> {
    /// Plain or matched.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// The text of this segment. Only matched segments can be empty.
    #[must_use]
    #[inline]
    pub fn text(&self) -> &'t str {
        self.text
    }

    /// Byte offset of the segment in the target text.
    #[must_use]
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte range of the segment in the target text.
    #[must_use]
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.text.len()
    }

    /// Whether the segment is part of a match.
    #[must_use]
    #[inline]
    pub fn is_matched(&self) -> bool {
        matches!(self.kind, SegmentKind::Matched { .. })
    }

    /// Index of the originating record for matched segments.
    #[must_use]
    pub fn match_index(&self) -> Option<usize> {
        match self.kind {
            SegmentKind::Matched { index, .. } => Some(index),
            SegmentKind::Plain => None,
        }
    }

    /// Classification for matched segments.
    #[must_use]
    pub fn category(&self) -> Option<Category> {
        match self.kind {
            SegmentKind::Matched { category, .. } => Some(category),
            SegmentKind::Plain => None,
        }
    }
}

struct Composer<'t> {
    text: &'t str,
    cursor: usize,
    segments: Vec<Segment<'t>>,
}

impl<'t> Composer<'t> {
    fn plain_until(&mut self, end: usize) {
        if end > self.cursor {
            self.segments.push(Segment {
                kind: SegmentKind::Plain,
                text: &self.text[self.cursor..end],
                start: self.cursor,
            });
            self.cursor = end;
        }
    }

    fn matched(&mut self, index: usize, range: Range<usize>) {
        let text = &self.text[range.clone()];
        self.segments.push(Segment {
            kind: SegmentKind::Matched {
                index,
                category: classify(text),
            },
            text,
            start: range.start,
        });
        self.cursor = range.end;
    }
}

/// Splits `text` into segments around `matches`, which must be in increasing order of offset
/// as [`find_matches`](crate::find_matches) returns them.
///
/// The segments cover `text` exactly: concatenated they give `text` back. Every record gets
/// one matched segment, also empty ones, so that zero-length matches can be shown. Records that
/// do not fit (they overlap the previous one or lie outside `text`) are clamped into place
/// rather than rejected.
///
/// ```rust
/// # use regex_lens::{compose, find_matches, Category, FlagSet, SegmentKind};
/// let text = "사과를 먹었다";
/// let matches = find_matches("([가-힣]+)(를)", FlagSet::global_unicode(), text).unwrap();
/// let segments = compose(text, &matches);
///
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].text(), "사과를");
/// assert_eq!(
///     segments[0].kind(),
///     SegmentKind::Matched { index: 0, category: Category::Hangul }
/// );
/// assert_eq!(segments[1].kind(), SegmentKind::Plain);
/// ```
#[must_use]
pub fn compose<'t>(text: &'t str, matches: &[MatchRecord<'_>]) -> Vec<Segment<'t>> {
    let mut composer = Composer {
        text,
        cursor: 0,
        segments: Vec::with_capacity(matches.len() * 2 + 1),
    };
    for (index, record) in matches.iter().enumerate() {
        let start = floor_boundary(text, record.start()).max(composer.cursor);
        let end = floor_boundary(text, record.end()).max(start);
        composer.plain_until(start);
        composer.matched(index, start..end);
    }
    composer.plain_until(text.len());
    composer.segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{find_matches, FlagSet, Pattern};

    fn joined(segments: &[Segment<'_>]) -> String {
        segments.iter().map(Segment::text).collect()
    }

    fn layout<'a>(
        segments: &'a [Segment<'a>],
    ) -> Vec<(&'a str, Option<usize>, Option<Category>)> {
        segments
            .iter()
            .map(|s| (s.text(), s.match_index(), s.category()))
            .collect()
    }

    #[test]
    fn no_matches_is_one_plain_segment() {
        let segments = compose("hello", &[]);
        assert_eq!(layout(&segments), [("hello", None, None)]);
        assert!(compose("", &[]).is_empty());
    }

    #[test]
    fn gaps_and_tail() {
        let text = "a1 b2 c";
        let matches = find_matches(r"\d", FlagSet::global_unicode(), text).unwrap();
        let segments = compose(text, &matches);
        assert_eq!(
            layout(&segments),
            [
                ("a", None, None),
                ("1", Some(0), Some(Category::Numeric)),
                (" b", None, None),
                ("2", Some(1), Some(Category::Numeric)),
                (" c", None, None),
            ]
        );
        assert_eq!(joined(&segments), text);
    }

    #[test]
    fn adjacent_matches_have_no_plain_between() {
        let text = "ab";
        let matches = find_matches(".", FlagSet::global_unicode(), text).unwrap();
        let segments = compose(text, &matches);
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(Segment::is_matched));
    }

    #[test]
    fn empty_matches_become_empty_segments() {
        let text = "xy";
        let matches = find_matches("", FlagSet::global_unicode(), text).unwrap();
        let segments = compose(text, &matches);
        assert_eq!(
            layout(&segments),
            [
                ("", Some(0), Some(Category::Empty)),
                ("x", None, None),
                ("", Some(1), Some(Category::Empty)),
                ("y", None, None),
                ("", Some(2), Some(Category::Empty)),
            ]
        );
    }

    #[test]
    fn mixed_scripts() {
        let text = "한국어(Korean)와 日本語(Japanese)와 1234";
        let pattern = r"([가-힣]+)|([぀-ゟ゠-ヿ一-龯]+)|(\w+)";
        let matches = find_matches(pattern, FlagSet::global_unicode(), text).unwrap();
        let segments = compose(text, &matches);
        let categories: Vec<_> = segments.iter().filter_map(Segment::category).collect();
        assert_eq!(
            categories,
            [
                Category::Hangul,
                Category::Latin,
                Category::Hangul,
                Category::Cjk,
                Category::Latin,
                Category::Hangul,
                Category::Numeric,
            ]
        );
        assert_eq!(joined(&segments), text);
    }

    #[test]
    fn ranges_follow_offsets() {
        let text = "x가y";
        let matches = find_matches("가", FlagSet::global_unicode(), text).unwrap();
        let segments = compose(text, &matches);
        let ranges: Vec<_> = segments.iter().map(Segment::range).collect();
        assert_eq!(ranges, [0..1, 1..4, 4..5]);
    }

    #[test]
    fn foreign_records_are_clamped() {
        // records of a longer text applied to a shorter one
        let pattern = Pattern::new("b+", FlagSet::global_unicode()).unwrap();
        let matches = pattern.find_matches("aaaa bbbb");
        let segments = compose("가나", &matches);
        assert_eq!(
            layout(&segments),
            [("가", None, None), ("나", Some(0), Some(Category::Hangul))]
        );
    }

    #[test]
    fn overlapping_records_are_clamped() {
        let pattern = Pattern::new("a+|b", FlagSet::global_unicode()).unwrap();
        let mut matches = pattern.find_matches("aab");
        matches.insert(1, matches[0].clone());
        let segments = compose("aab", &matches);
        assert_eq!(
            layout(&segments),
            [
                ("aa", Some(0), Some(Category::Latin)),
                ("", Some(1), Some(Category::Empty)),
                ("b", Some(2), Some(Category::Latin)),
            ]
        );
    }
}
