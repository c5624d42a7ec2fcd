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

use quickcheck::{quickcheck, Arbitrary, Gen, TestResult};
use regex_lens::{compose, find_matches, tokenize, FlagSet, Pattern};

const PATTERN_PIECES: &[&str] = &[
    "a", "b", "[ab]", "[^a]", r"\d", r"\w", ".", "(", ")", "(?:", "|", "*", "+", "?", "{1,2}",
    "가", "^", "$", "[가-힣]",
];

const TEXT_PIECES: &[&str] = &["a", "b", "1", " ", "가", "日", "ア", ".", "\n"];

fn concat(g: &mut Gen, pieces: &[&str]) -> String {
    let len = usize::arbitrary(g) % (g.size() + 1);
    (0..len).filter_map(|_| g.choose(pieces)).copied().collect()
}

/// A pattern assembled from regex syntax fragments, so that a good share of them compile.
#[derive(Clone, Debug)]
struct Source(String);

impl Arbitrary for Source {
    fn arbitrary(g: &mut Gen) -> Self {
        Source(concat(g, PATTERN_PIECES))
    }
}

#[derive(Clone, Debug)]
struct Text(String);

impl Arbitrary for Text {
    fn arbitrary(g: &mut Gen) -> Self {
        Text(concat(g, TEXT_PIECES))
    }
}

#[derive(Clone, Debug)]
struct Flags(FlagSet);

impl Arbitrary for Flags {
    fn arbitrary(g: &mut Gen) -> Self {
        Flags(FlagSet {
            global: bool::arbitrary(g),
            case_insensitive: bool::arbitrary(g),
            multiline: bool::arbitrary(g),
            unicode: bool::arbitrary(g),
        })
    }
}

quickcheck! {
    fn tokens_reproduce_any_string(pattern: String) -> bool {
        let joined: String = tokenize(&pattern).iter().map(|t| t.text()).collect();
        joined == pattern
    }

    fn tokens_reproduce_pattern(source: Source) -> bool {
        let joined: String = tokenize(&source.0).iter().map(|t| t.text()).collect();
        joined == source.0
    }

    fn group_numbers_are_sequential(pattern: String) -> bool {
        let numbers: Vec<_> = tokenize(&pattern).iter().filter_map(|t| t.group_number()).collect();
        numbers.iter().copied().eq(1..=numbers.len())
    }

    fn segments_cover_text(source: Source, text: Text, flags: Flags) -> TestResult {
        let matches = match find_matches(&source.0, flags.0, &text.0) {
            Ok(matches) => matches,
            Err(_) => return TestResult::discard(),
        };
        let segments = compose(&text.0, &matches);
        let joined: String = segments.iter().map(|s| s.text()).collect();
        let matched = segments.iter().filter(|s| s.is_matched()).count();
        let plain_nonempty = segments
            .iter()
            .filter(|s| !s.is_matched())
            .all(|s| !s.text().is_empty());
        TestResult::from_bool(joined == text.0 && matched == matches.len() && plain_nonempty)
    }

    fn matching_is_idempotent(source: Source, text: Text, flags: Flags) -> TestResult {
        let pattern = match Pattern::new(&source.0, flags.0) {
            Ok(pattern) => pattern,
            Err(_) => return TestResult::discard(),
        };
        TestResult::from_bool(pattern.find_matches(&text.0) == pattern.find_matches(&text.0))
    }

    fn records_are_ordered_and_in_bounds(source: Source, text: Text) -> TestResult {
        let matches = match find_matches(&source.0, FlagSet::global_unicode(), &text.0) {
            Ok(matches) => matches,
            Err(_) => return TestResult::discard(),
        };
        let in_bounds = matches
            .iter()
            .all(|m| m.end() <= text.0.len() && &text.0[m.range()] == m.as_str());
        let ordered = matches
            .windows(2)
            .all(|w| w[0].start() < w[1].start() && w[0].end() <= w[1].start());
        TestResult::from_bool(in_bounds && ordered)
    }

    fn star_is_bounded(text: Text) -> bool {
        let matches = find_matches("a*", FlagSet::global_unicode(), &text.0).unwrap();
        matches.len() <= text.0.chars().count() + 1
    }
}
