//! Parsing utilities
//!
//! Values are written the way they are displayed, lists use brackets and commas:
//! `[1, -2.5, "quoted, text", <END>]`.

use std::{error::Error, fmt, str::FromStr};

/// Element of a parsed list
///
/// Numbers keep the token they were parsed from, so `007` or `2.0` display unchanged.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Plain", into = "Plain"))]
pub enum Value {
    #[allow(missing_docs)]
    Int { value: i64, text: String },

    #[allow(missing_docs)]
    Float { value: f64, text: String },

    #[allow(missing_docs)]
    Text(String),
}

impl Value {
    /// Integer displayed in its shortest form
    pub fn int(value: i64) -> Self {
        Value::Int {
            value,
            text: value.to_string(),
        }
    }

    /// Float displayed in its shortest form
    pub fn float(value: f64) -> Self {
        Value::Float {
            value,
            text: value.to_string(),
        }
    }

    #[allow(missing_docs)]
    pub fn text(text: impl Into<String>) -> Self {
        Value::Text(text.into())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int { text, .. } | Value::Float { text, .. } | Value::Text(text) => {
                f.write_str(text)
            }
        }
    }
}

/// Serialized shape of [`Value`]; numbers written back are normalized
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum Plain {
    Int(i64),
    Float(f64),
    Text(String),
}

#[cfg(feature = "serde")]
impl From<Plain> for Value {
    fn from(plain: Plain) -> Self {
        match plain {
            Plain::Int(value) => Value::int(value),
            Plain::Float(value) => Value::float(value),
            Plain::Text(text) => Value::Text(text),
        }
    }
}

#[cfg(feature = "serde")]
impl From<Value> for Plain {
    fn from(value: Value) -> Self {
        match value {
            Value::Int { value, .. } => Plain::Int(value),
            Value::Float { value, .. } => Plain::Float(value),
            Value::Text(text) => Plain::Text(text),
        }
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (p, value) = Parser::new(s).trim_whitespace().parse_value()?;
        p.trim_whitespace().finish()?;
        Ok(value)
    }
}

/// Parse `[value, value, ...]`
///
/// # Errors
/// When the input is not a single well formed list
pub fn parse_list(input: &str) -> Result<Vec<Value>, ParseError> {
    let (p, values) = Parser::new(input).parse_list()?;
    p.finish()?;
    Ok(values)
}

/// Parse failure with the byte offset it occurred at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Byte offset into the original input
    pub offset: usize,

    #[allow(missing_docs)]
    pub message: &'static str,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error at offset {}: {}", self.offset, self.message)
    }
}

impl Error for ParseError {}

#[must_use]
#[derive(Debug, Clone, Copy)]
/// String parser tracking its position in the original input
pub struct Parser<'s> {
    /// Remaining unparsed input
    pub input: &'s str,

    /// Bytes consumed since construction
    pub offset: usize,
}

const fn is_bare_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '<' | '>' | '.' | '-')
}

impl<'s> Parser<'s> {
    /// Create new parser marking the beginning of the input
    pub const fn new(input: &'s str) -> Parser<'s> {
        Parser { input, offset: 0 }
    }

    /// Skip `n` bytes, `n` must be on a char boundary
    fn advance(self, n: usize) -> Parser<'s> {
        Parser {
            input: &self.input[n..],
            offset: self.offset + n,
        }
    }

    const fn error(self, message: &'static str) -> ParseError {
        ParseError {
            offset: self.offset,
            message,
        }
    }

    /// Fail if any input is left
    ///
    /// # Errors
    /// On leftover input
    pub const fn finish(self) -> Result<(), ParseError> {
        if self.input.is_empty() {
            Ok(())
        } else {
            Err(self.error("leftover input"))
        }
    }

    /// Remove whitespace from the beginning of the input
    pub fn trim_whitespace(self) -> Parser<'s> {
        let rest = self.input.trim_start();
        self.advance(self.input.len() - rest.len())
    }

    /// Parse one ascii char if it matches the `expected`
    pub fn parse_ascii_char(self, expected: char) -> Option<Parser<'s>> {
        debug_assert!(expected.is_ascii());
        self.input
            .starts_with(expected)
            .then(|| self.advance(1))
    }

    fn expect(self, expected: char, message: &'static str) -> Result<Parser<'s>, ParseError> {
        self.parse_ascii_char(expected)
            .ok_or_else(|| self.error(message))
    }

    /// Parse double quoted string with `\"` and `\\` escapes
    ///
    /// # Errors
    /// On missing opening or closing quote and unknown escapes
    pub fn parse_quoted(self) -> Result<(Parser<'s>, String), ParseError> {
        let p = self.expect('"', "expected '\"'")?;
        let mut out = String::new();
        let mut chars = p.input.char_indices();
        while let Some((idx, c)) = chars.next() {
            match c {
                '"' => return Ok((p.advance(idx + 1), out)),
                '\\' => match chars.next() {
                    Some((_, escaped @ ('"' | '\\'))) => out.push(escaped),
                    Some((idx, _)) => return Err(p.advance(idx).error("unknown escape")),
                    None => break,
                },
                c => out.push(c),
            }
        }
        Err(p.advance(p.input.len()).error("unterminated string"))
    }

    /// Parse a number or a bare word
    ///
    /// # Errors
    /// On empty token and integers that do not fit in `i64`
    pub fn parse_bare(self) -> Result<(Parser<'s>, Value), ParseError> {
        let len = self
            .input
            .find(|c: char| !is_bare_char(c))
            .unwrap_or(self.input.len());
        if len == 0 {
            return Err(self.error("expected value"));
        }
        let token = &self.input[..len];
        let digits = token.strip_prefix('-').unwrap_or(token);

        let value = if is_digits(digits) {
            Value::Int {
                value: token
                    .parse()
                    .map_err(|_| self.error("integer out of range"))?,
                text: token.to_owned(),
            }
        } else if let Some((whole, fraction)) = digits.split_once('.')
            && is_digits(whole)
            && is_digits(fraction)
        {
            Value::Float {
                value: token.parse().map_err(|_| self.error("invalid float"))?,
                text: token.to_owned(),
            }
        } else {
            Value::Text(token.to_owned())
        };
        Ok((self.advance(len), value))
    }

    /// Parse a single list element
    ///
    /// # Errors
    /// See [`Parser::parse_quoted`] and [`Parser::parse_bare`]
    pub fn parse_value(self) -> Result<(Parser<'s>, Value), ParseError> {
        if self.input.starts_with('"') {
            let (p, text) = self.parse_quoted()?;
            Ok((p, Value::Text(text)))
        } else {
            self.parse_bare()
        }
    }

    /// Parse bracketed, comma separated list of values. Surrounding whitespace is consumed.
    ///
    /// # Errors
    /// On missing brackets, missing commas or invalid elements
    pub fn parse_list(self) -> Result<(Parser<'s>, Vec<Value>), ParseError> {
        let mut p = self
            .trim_whitespace()
            .expect('[', "expected '['")?
            .trim_whitespace();

        let mut values = Vec::new();
        if let Some(p) = p.parse_ascii_char(']') {
            return Ok((p.trim_whitespace(), values));
        }

        loop {
            let (next, value) = p.parse_value()?;
            values.push(value);
            p = next.trim_whitespace();

            if let Some(next) = p.parse_ascii_char(']') {
                return Ok((next.trim_whitespace(), values));
            }
            p = p.expect(',', "expected ',' or ']'")?.trim_whitespace();
        }
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
