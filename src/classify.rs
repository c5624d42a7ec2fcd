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

//! Script classification of matched fragments.

use std::fmt;

/// The script or kind of a matched fragment, used to color it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Contains Hiragana, Katakana or CJK unified ideographs.
    Cjk,
    /// Contains Hangul syllables or compatibility Jamo.
    Hangul,
    /// Contains an ASCII letter.
    Latin,
    /// Contains an ASCII digit.
    Numeric,
    /// None of the above.
    Symbol,
    /// A zero-length fragment.
    Empty,
}

impl Category {
    /// Every category, in legend order.
    pub const ALL: [Category; 6] = [
        Category::Cjk,
        Category::Hangul,
        Category::Latin,
        Category::Numeric,
        Category::Symbol,
        Category::Empty,
    ];

    /// Short legend label.
    #[must_use]
    pub fn badge(self) -> &'static str {
        match self {
            Category::Cjk => "JP",
            Category::Hangul => "KR",
            Category::Latin => "EN",
            Category::Numeric => "123",
            Category::Symbol => "SYM",
            Category::Empty => "EMPTY",
        }
    }

    /// Lowercase name of the category.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Cjk => "cjk",
            Category::Hangul => "hangul",
            Category::Latin => "latin",
            Category::Numeric => "numeric",
            Category::Symbol => "symbol",
            Category::Empty => "empty",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{309F}' // hiragana
        | '\u{30A0}'..='\u{30FF}' // katakana
        | '\u{4E00}'..='\u{9FAF}')
}

fn is_hangul(c: char) -> bool {
    matches!(c, '\u{AC00}'..='\u{D7A3}' | '\u{3131}'..='\u{3163}')
}

/// Classifies a whole fragment.
///
/// The first rule that any character satisfies wins: CJK, then Hangul, then ASCII letters,
/// then ASCII digits, otherwise symbol. An empty fragment is [`Category::Empty`].
///
/// ```rust
/// # use regex_lens::{classify, Category};
/// assert_eq!(classify("user42@example.com"), Category::Latin);
/// assert_eq!(classify("한국어(Korean)"), Category::Hangul);
/// assert_eq!(classify("한국語"), Category::Cjk);
/// assert_eq!(classify(""), Category::Empty);
/// ```
#[must_use]
pub fn classify(text: &str) -> Category {
    if text.is_empty() {
        Category::Empty
    } else if text.chars().any(is_cjk) {
        Category::Cjk
    } else if text.chars().any(is_hangul) {
        Category::Hangul
    } else if text.bytes().any(|b| b.is_ascii_alphabetic()) {
        Category::Latin
    } else if text.bytes().any(|b| b.is_ascii_digit()) {
        Category::Numeric
    } else {
        Category::Symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_scripts() {
        assert_eq!(classify("ひらがな"), Category::Cjk);
        assert_eq!(classify("カタカナ"), Category::Cjk);
        assert_eq!(classify("日本"), Category::Cjk);
        assert_eq!(classify("사과"), Category::Hangul);
        assert_eq!(classify("ㄱㅏ"), Category::Hangul);
        assert_eq!(classify("Korean"), Category::Latin);
        assert_eq!(classify("1234"), Category::Numeric);
        assert_eq!(classify("@-."), Category::Symbol);
        assert_eq!(classify(" "), Category::Symbol);
    }

    #[test]
    fn precedence_is_fixed() {
        assert_eq!(classify("abc日"), Category::Cjk);
        assert_eq!(classify("1가"), Category::Hangul);
        assert_eq!(classify("a1"), Category::Latin);
        assert_eq!(classify("#1"), Category::Numeric);
    }

    #[test]
    fn range_edges() {
        assert_eq!(classify("\u{3040}"), Category::Cjk);
        assert_eq!(classify("\u{30FF}"), Category::Cjk);
        assert_eq!(classify("\u{9FAF}"), Category::Cjk);
        assert_eq!(classify("\u{9FB0}"), Category::Symbol);
        assert_eq!(classify("\u{D7A3}"), Category::Hangul);
        assert_eq!(classify("\u{D7A4}"), Category::Symbol);
        assert_eq!(classify("\u{3164}"), Category::Symbol);
    }

    #[test]
    fn non_ascii_letters_and_digits_are_symbols() {
        assert_eq!(classify("é"), Category::Symbol);
        assert_eq!(classify("٣"), Category::Symbol);
        assert_eq!(classify("ｅ"), Category::Symbol);
    }

    #[test]
    fn badges_and_names() {
        let badges: Vec<_> = Category::ALL.iter().map(|c| c.badge()).collect();
        assert_eq!(badges, ["JP", "KR", "EN", "123", "SYM", "EMPTY"]);
        assert_eq!(Category::Numeric.to_string(), "numeric");
    }
}
