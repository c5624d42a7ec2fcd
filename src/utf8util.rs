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

#[inline]
fn codepoint_len(b: u8) -> usize {
    match b {
        b if b < 0x80 => 1,
        b if b < 0xe0 => 2,
        b if b < 0xf0 => 3,
        _ => 4,
    }
}

/// Index of the character after the one starting at `ix`.
///
/// At the end of `s` this steps one past the end, which is how a scan that just found an
/// empty match at the end knows it is done.
#[inline]
pub fn next_codepoint_ix(s: &str, ix: usize) -> usize {
    s.as_bytes().get(ix).map_or(ix + 1, |&b| ix + codepoint_len(b))
}

/// The largest character boundary of `s` that is not after `ix`, clamped to `s.len()`.
#[inline]
pub fn floor_boundary(s: &str, ix: usize) -> usize {
    if ix >= s.len() {
        return s.len();
    }
    let mut ix = ix;
    while !s.is_char_boundary(ix) {
        ix -= 1;
    }
    ix
}
