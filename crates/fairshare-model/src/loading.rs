// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Problem instance loader for two-agent allocation.
//!
//! Instances are whitespace-delimited token streams: the item count `n`,
//! followed by `n` values of agent 0 and `n` values of agent 1. Line breaks
//! carry no meaning, and everything after a `#` up to the end of the line is a
//! comment. The parsed values go through `Valuation::new`, so a loaded
//! instance is always valid for the solver.
//!
//! ```raw
//! 3            # number of items
//! 1 4 3        # agent 0
//! 6 4 6        # agent 1
//! ```

use crate::valuation::{Valuation, ValuationError};
use num_traits::Float;
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not parse token '{token}' as type {type_name}")]
pub struct ParseTokenError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "f64").
    pub type_name: &'static str,
}

/// The error type for the problem loading process.
#[derive(Debug, thiserror::Error)]
pub enum ProblemLoaderError {
    /// An I/O error occurred while reading the input stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The input stream ended before the instance was complete.
    #[error("unexpected end of input while parsing instance")]
    UnexpectedEof,
    /// A token could not be parsed into the expected numeric type.
    #[error("parse error: {0}")]
    Parse(#[from] ParseTokenError),
    /// Tokens remained after the instance while trailing input is rejected.
    #[error("unexpected trailing token '{0}' after the instance")]
    TrailingInput(String),
    /// The parsed values do not form a valid valuation.
    #[error("invalid valuation: {0}")]
    Valuation(#[from] ValuationError),
}

/// A configurable loader for allocation instances.
///
/// # Configuration
/// * `reject_trailing_input`: If true (the default), any token after the last
///   value of agent 1 is an error. Disable it to read the leading instance of
///   a longer stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemLoader<T> {
    reject_trailing_input: bool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for ProblemLoader<T> {
    fn default() -> Self {
        Self {
            reject_trailing_input: true,
            _phantom: std::marker::PhantomData,
        }
    }
}

/// Upper bound on the row capacity reserved from the declared item count.
const MAX_PREALLOCATED_ITEMS: usize = 4096;

impl<T> ProblemLoader<T>
where
    T: Float + FromStr,
{
    /// Creates a new `ProblemLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether tokens after the instance are an error.
    #[inline]
    pub fn reject_trailing_input(mut self, yes: bool) -> Self {
        self.reject_trailing_input = yes;
        self
    }

    /// Loads an instance from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<Valuation<T>, ProblemLoaderError> {
        let mut sc = Scanner::new(rdr);

        let n: usize = sc.next()?.ok_or(ProblemLoaderError::UnexpectedEof)?;

        let read_row = |sc: &mut Scanner<R>| -> Result<Vec<T>, ProblemLoaderError> {
            // The count is untrusted until the values are actually read.
            let mut row = Vec::with_capacity(n.min(MAX_PREALLOCATED_ITEMS));
            for _ in 0..n {
                row.push(sc.next()?.ok_or(ProblemLoaderError::UnexpectedEof)?);
            }
            Ok(row)
        };

        let values0 = read_row(&mut sc)?;
        let values1 = read_row(&mut sc)?;

        if self.reject_trailing_input
            && let Some(token) = sc.next_token()?
        {
            return Err(ProblemLoaderError::TrailingInput(token));
        }

        Ok(Valuation::new(values0, values1)?)
    }

    /// Loads an instance from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Valuation<T>, ProblemLoaderError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads an instance from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Valuation<T>, ProblemLoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads an instance from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Valuation<T>, ProblemLoaderError> {
        self.from_reader(s.as_bytes())
    }
}

/// Reads whitespace-delimited tokens, skipping `#` comments.
struct Scanner<R> {
    rdr: R,
    buf: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    #[inline]
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: String::new(),
            pos: 0,
        }
    }

    /// Refills the line buffer. Returns `Ok(false)` on EOF.
    #[inline]
    fn fill_line(&mut self) -> Result<bool, ProblemLoaderError> {
        self.buf.clear();
        self.pos = 0;
        Ok(self.rdr.read_line(&mut self.buf)? > 0)
    }

    /// Returns the next raw token, or `None` at the end of the stream.
    fn next_token(&mut self) -> Result<Option<String>, ProblemLoaderError> {
        loop {
            if self.pos >= self.buf.len() && !self.fill_line()? {
                return Ok(None);
            }

            let line = &self.buf[self.pos..];
            let content = line.split('#').next().unwrap_or_default();
            let skipped = content.len() - content.trim_start().len();

            match content.trim_start().split_whitespace().next() {
                Some(token) => {
                    self.pos += skipped + token.len();
                    return Ok(Some(token.to_owned()));
                }
                // The rest of the line is blank or a comment.
                None => self.pos = self.buf.len(),
            }
        }
    }

    /// Reads the next token and parses it into `V`.
    fn next<V: FromStr>(&mut self) -> Result<Option<V>, ProblemLoaderError> {
        let Some(token) = self.next_token()? else {
            return Ok(None);
        };

        token
            .parse::<V>()
            .map(Some)
            .map_err(|_| {
                ProblemLoaderError::Parse(ParseTokenError {
                    token,
                    type_name: std::any::type_name::<V>(),
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{Agent, ItemIndex};

    const SMALL_INSTANCE: &str = r#"
        3           # N=3 items
        1 4 3       # Agent 0
        6 4 6       # Agent 1
    "#;

    #[test]
    fn test_loads_and_maps_correctly() {
        let loader = ProblemLoader::new();
        let valuation: Valuation<f64> = loader.from_str(SMALL_INSTANCE).expect("Failed to load");

        assert_eq!(valuation.num_items(), 3);
        assert_eq!(valuation.values(Agent::First), &[1.0, 4.0, 3.0]);
        assert_eq!(valuation.value(Agent::Second, ItemIndex::new(0)), 6.0);
    }

    #[test]
    fn test_tokens_may_span_lines_and_touch_comments() {
        let data = "2#items\n0.5\n1.5#a\n2 # b\n 3";
        let valuation = ProblemLoader::<f64>::new().from_str(data).unwrap();
        assert_eq!(valuation.values(Agent::First), &[0.5, 1.5]);
        assert_eq!(valuation.values(Agent::Second), &[2.0, 3.0]);
    }

    #[test]
    fn test_empty_instance() {
        let valuation = ProblemLoader::<f64>::new().from_str("0").unwrap();
        assert!(valuation.is_empty());
    }

    #[test]
    fn test_unexpected_eof() {
        let res = ProblemLoader::<f64>::new().from_str("3 1 2 3 4 5");
        assert!(matches!(res, Err(ProblemLoaderError::UnexpectedEof)));

        let res = ProblemLoader::<f64>::new().from_str("# only a comment");
        assert!(matches!(res, Err(ProblemLoaderError::UnexpectedEof)));
    }

    #[test]
    fn test_huge_item_count_is_unexpected_eof() {
        let res = ProblemLoader::<f64>::new().from_str("18446744073709551615 1 2");
        assert!(matches!(res, Err(ProblemLoaderError::UnexpectedEof)));

        let res = ProblemLoader::<f64>::new().from_str("1000000000000 1 2 3");
        assert!(matches!(res, Err(ProblemLoaderError::UnexpectedEof)));
    }

    #[test]
    fn test_parse_error_structure() {
        let res = ProblemLoader::<f64>::new().from_str("2 1 garbage 3 4");

        match res {
            Err(ProblemLoaderError::Parse(e)) => {
                assert_eq!(e.token, "garbage");
                assert!(e.type_name.contains("f64"));
            }
            other => panic!("Expected Parse error with context, got {other:?}"),
        }
    }

    #[test]
    fn test_trailing_input_is_configurable() {
        let data = "1 2 3 extra";
        let res = ProblemLoader::<f64>::new().from_str(data);
        assert!(matches!(res, Err(ProblemLoaderError::TrailingInput(ref t)) if t == "extra"));

        let valuation = ProblemLoader::<f64>::new()
            .reject_trailing_input(false)
            .from_str(data)
            .unwrap();
        assert_eq!(valuation.num_items(), 1);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let res = ProblemLoader::<f64>::new().from_str("1 -2 3");
        assert!(matches!(
            res,
            Err(ProblemLoaderError::Valuation(ValuationError::InvalidValue { .. }))
        ));
    }
}
