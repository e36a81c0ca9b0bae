//! Line and token sources for the text readers.
//!
//! Both types borrow from the input blob and are created per parse, so no
//! line buffer is shared between two parses.

use std::str::{FromStr, SplitWhitespace};

use super::error::Error;

/// A single line of input with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub number: usize,
    pub text: &'a str,
}

impl<'a> Line<'a> {
    #[inline]
    pub fn contains(&self, keyword: &str) -> bool {
        self.text.contains(keyword)
    }

    /// Fails with [`Error::MissingKeyword`] unless the line contains `keyword`.
    pub fn require(&self, keyword: &'static str) -> Result<(), Error> {
        if self.contains(keyword) {
            Ok(())
        } else {
            Err(Error::missing_keyword(self.number, keyword, self.text))
        }
    }

    pub fn tokens(&self) -> Tokenizer<'a> {
        Tokenizer::new(self.text, self.number)
    }
}

/// Hands out successive lines of a text blob.
///
/// Accepts both `\n` and `\r\n` line endings.
#[derive(Debug)]
pub struct LineCursor<'a> {
    rest: &'a str,
    consumed: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            rest: text,
            consumed: 0,
        }
    }

    /// Number of lines handed out so far.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Bytes not yet handed out; an upper bound on the lines still available.
    #[inline]
    pub fn remaining_len(&self) -> usize {
        self.rest.len()
    }

    /// Returns the next line, or [`Error::UnexpectedEndOfInput`] naming what
    /// the caller was about to read.
    pub fn next_line(&mut self, expected: impl FnOnce() -> String) -> Result<Line<'a>, Error> {
        if self.rest.is_empty() {
            return Err(Error::end_of_input(self.consumed + 1, expected()));
        }

        let text = match self.rest.split_once('\n') {
            Some((line, tail)) => {
                self.rest = tail;
                line
            }
            None => std::mem::take(&mut self.rest),
        };
        self.consumed += 1;

        Ok(Line {
            number: self.consumed,
            text: text.strip_suffix('\r').unwrap_or(text),
        })
    }

    /// Consumes one line without looking at its content.
    pub fn skip(&mut self, expected: &str) -> Result<(), Error> {
        self.next_line(|| expected.to_string()).map(|_| ())
    }
}

/// Lazy whitespace tokenizer over one line.
///
/// Every call to [`next`](Iterator::next) consumes a token; the sequence
/// cannot be restarted.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    tokens: SplitWhitespace<'a>,
    line: usize,
    consumed: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str, line: usize) -> Self {
        Self {
            tokens: text.split_whitespace(),
            line,
            consumed: 0,
        }
    }

    /// Tokens handed out so far.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Parses the next token as `T`.
    ///
    /// Returns `Ok(None)` once the line is exhausted and
    /// [`Error::MalformedNumber`] when the token does not parse.
    pub fn next_value<T: FromStr>(&mut self, field: &'static str) -> Result<Option<T>, Error> {
        match self.next() {
            Some(token) => token
                .parse::<T>()
                .map(Some)
                .map_err(|_| Error::malformed_number(self.line, field, token)),
            None => Ok(None),
        }
    }

    /// Parses the next token as `T`, treating an exhausted line as a
    /// [`Error::TruncatedRecord`] of `expected` fields.
    pub fn require<T: FromStr>(
        &mut self,
        field: &'static str,
        record: &'static str,
        expected: usize,
    ) -> Result<T, Error> {
        self.next_value(field)?
            .ok_or_else(|| Error::truncated(self.line, record, expected, self.consumed))
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.next()?;
        self.consumed += 1;
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::error::ErrorKind;

    #[test]
    fn cursor_numbers_lines_from_one() {
        let mut cursor = LineCursor::new("title\r\n3 atoms\n");
        let first = cursor.next_line(|| "title".into()).unwrap();
        let second = cursor.next_line(|| "atom count".into()).unwrap();

        assert_eq!(first, Line { number: 1, text: "title" });
        assert_eq!(second, Line { number: 2, text: "3 atoms" });
        assert_eq!(cursor.consumed(), 2);
    }

    #[test]
    fn cursor_reports_end_of_input_with_next_line_number() {
        let mut cursor = LineCursor::new("only line");
        cursor.skip("title").unwrap();

        let err = cursor.next_line(|| "atom count line".into()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEndOfInput);
        assert_eq!(err.line(), Some(2));
        assert_eq!(
            err.to_string(),
            "input ended before atom count line (line 2)"
        );
    }

    #[test]
    fn cursor_yields_interior_blank_lines_but_not_the_final_newline() {
        let mut cursor = LineCursor::new("a\n\nb\n");
        let texts: Vec<_> = std::iter::from_fn(|| cursor.next_line(String::new).ok())
            .map(|line| line.text)
            .collect();

        assert_eq!(texts, vec!["a", "", "b"]);
        assert_eq!(cursor.remaining_len(), 0);
    }

    #[test]
    fn tokenizer_splits_on_any_whitespace() {
        let tokens: Vec<_> = Tokenizer::new("  1\t2   0.5 ", 1).collect();
        assert_eq!(tokens, vec!["1", "2", "0.5"]);
    }

    #[test]
    fn tokenizer_is_not_restartable() {
        let mut tokens = Tokenizer::new("7 8", 1);
        assert_eq!(tokens.next_value::<i32>("id").unwrap(), Some(7));
        assert_eq!(tokens.next_value::<i32>("type").unwrap(), Some(8));
        assert_eq!(tokens.next_value::<i32>("extra").unwrap(), None);
        assert_eq!(tokens.consumed(), 2);
    }

    #[test]
    fn tokenizer_rejects_non_numeric_tokens() {
        let mut tokens = Tokenizer::new("1 one", 4);
        tokens.next_value::<i32>("id").unwrap();

        let err = tokens.next_value::<i32>("type").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedNumber);
        assert_eq!(err.to_string(), "invalid type 'one' on line 4");
    }

    #[test]
    fn require_reports_found_field_count() {
        let mut tokens = Tokenizer::new("1 1 0.0", 9);
        for _ in 0..3 {
            tokens.require::<f32>("field", "atomic atom record", 5).unwrap();
        }

        let err = tokens
            .require::<f32>("y coordinate", "atomic atom record", 5)
            .unwrap_err();
        match err {
            Error::TruncatedRecord {
                line,
                expected,
                found,
                ..
            } => {
                assert_eq!(line, 9);
                assert_eq!(expected, 5);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn require_keyword_passes_and_fails() {
        let line = Line {
            number: 3,
            text: "2 atom types",
        };
        assert!(line.require("atom types").is_ok());

        let err = line.require("atoms").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingKeyword);
    }
}
