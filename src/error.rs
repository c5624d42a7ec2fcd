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

use std::fmt;

/// Result type for this crate with specific error enum.
pub type Result<T> = ::std::result::Result<T, CompileError>;

/// The pattern was not accepted by the underlying regex engine.
///
/// Tokenizing never produces this error; only compiling a [`Pattern`](crate::Pattern) does, so
/// a host can keep showing the structure of a pattern while it is invalid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum CompileError {
    /// The engine's grammar rejected the pattern (syntax error, unsupported construct such as a
    /// backreference, or a construct that is not allowed with the unicode flag off).
    Syntax(String),
    /// The compiled program would exceed the configured size limit.
    TooBig(usize),
    /// Any other failure reported by the engine.
    Other(String),
}

impl CompileError {
    /// The diagnostic text of the engine, suitable for showing next to the pattern.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl ::std::error::Error for CompileError {}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Syntax(s) => write!(f, "{}", s),
            CompileError::TooBig(limit) => write!(
                f,
                "Compiled regex exceeds size limit of {} bytes",
                limit
            ),
            CompileError::Other(s) => write!(f, "{}", s),
        }
    }
}

impl From<regex::Error> for CompileError {
    fn from(err: regex::Error) -> Self {
        match err {
            regex::Error::Syntax(s) => CompileError::Syntax(s),
            regex::Error::CompiledTooBig(limit) => CompileError::TooBig(limit),
            // regex::Error is non_exhaustive
            other => CompileError::Other(other.to_string()),
        }
    }
}

/// A flag letter that is not one of `g`, `i`, `m` or `u`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseFlagsError {
    pub(crate) letter: char,
}

impl ParseFlagsError {
    /// The offending letter.
    #[must_use]
    pub fn letter(&self) -> char {
        self.letter
    }
}

impl ::std::error::Error for ParseFlagsError {}

impl fmt::Display for ParseFlagsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown flag '{}', expected one of g, i, m, u", self.letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_diagnostic_is_kept() {
        let err: CompileError = regex::Regex::new("(").unwrap_err().into();
        match &err {
            CompileError::Syntax(s) => assert!(s.contains("unclosed group")),
            other => panic!("unexpected error {:?}", other),
        }
        assert_eq!(err.message(), err.to_string());
    }

    #[test]
    fn size_limit_message() {
        let err = CompileError::TooBig(10);
        assert_eq!(
            err.to_string(),
            "Compiled regex exceeds size limit of 10 bytes"
        );
    }

    #[test]
    fn flags_error_names_letter() {
        let err = ParseFlagsError { letter: 'x' };
        assert_eq!(err.letter(), 'x');
        assert!(err.to_string().contains("'x'"));
    }
}
