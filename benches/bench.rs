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

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use regex_lens::{compose, tokenize, Analysis, FlagSet, Input, Pattern};

const PATTERN: &str = r"([가-힣]+)(을|를)|(\d{1,3}(?:,\d{3})*)|([a-zA-Z]+)";

fn sample_text() -> String {
    "한국어(Korean)와 日本語(Japanese)를 1,234번 읽었다. ".repeat(50)
}

fn tokenize_pattern(c: &mut Criterion) {
    c.bench_function("tokenize", |b| b.iter(|| tokenize(black_box(PATTERN))));
}

fn find_matches(c: &mut Criterion) {
    let pattern = Pattern::new(PATTERN, FlagSet::global_unicode()).unwrap();
    let text = sample_text();
    c.bench_function("find_matches", |b| {
        b.iter(|| pattern.find_matches(black_box(&text)))
    });
}

fn empty_matches_to_limit(c: &mut Criterion) {
    let pattern = Pattern::new("a*", FlagSet::global_unicode()).unwrap();
    let text = "b".repeat(5000);
    c.bench_function("empty_matches_to_limit", |b| {
        b.iter(|| pattern.scan(black_box(&text)))
    });
}

fn compose_segments(c: &mut Criterion) {
    let pattern = Pattern::new(PATTERN, FlagSet::global_unicode()).unwrap();
    let text = sample_text();
    let matches = pattern.find_matches(&text);
    c.bench_function("compose", |b| {
        b.iter(|| compose(black_box(&text), black_box(&matches)))
    });
}

fn substitute(c: &mut Criterion) {
    let pattern = Pattern::new(PATTERN, FlagSet::global_unicode()).unwrap();
    let text = sample_text();
    c.bench_function("substitute_expand", |b| {
        b.iter(|| pattern.substitute(black_box("[$1$3$4]"), black_box(&text)))
    });
    c.bench_function("substitute_literal", |b| {
        b.iter(|| pattern.substitute(black_box("*"), black_box(&text)))
    });
}

fn full_analysis(c: &mut Criterion) {
    let text = sample_text();
    let input = Input::new(PATTERN, &text, FlagSet::global_unicode()).with_template("<$&>");
    c.bench_function("analysis", |b| b.iter(|| Analysis::run(black_box(&input))));
}

criterion_group!(
    benches,
    tokenize_pattern,
    find_matches,
    empty_matches_to_limit,
    compose_segments,
    substitute,
    full_analysis
);
criterion_main!(benches);
