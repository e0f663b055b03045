//! Recursive-descent JSON parser for the supported subset.
//!
//! The parser walks a length-bounded byte slice with a single cursor — no
//! lookahead buffer, no backtracking. The first non-whitespace byte at each
//! recursive entry decides the production: `n`/`t`/`f` for literals, `"` for
//! strings, `[`/`{` for containers, digits for numbers. Containers are
//! created empty and filled one recursive call per child, so a finished tree
//! is assembled incrementally and nothing partially built can escape an
//! error return (locals drop on `?`).
//!
//! # Grammar deviations from standard JSON
//!
//! - Commas between elements/members are consumed when present but never
//!   required; trailing commas are accepted. `[1 2 3]` and `[1,2,3,]` both
//!   parse to a three-element array.
//! - Numbers are non-negative `i64` integers. A leading `-` or a trailing
//!   `.`/`e`/`E` is reported as [`JsonError::Unsupported`].
//! - `\uXXXX` escapes are reported as [`JsonError::Unsupported`].
//! - Trailing content after the top-level value is not inspected.

use crate::error::{JsonError, Result};
use crate::value::Value;

/// Parse exactly one JSON value starting at the first non-whitespace byte.
///
/// Trailing content after the value is ignored. Empty or all-whitespace
/// input is a syntax error.
///
/// ```rust
/// use minijson_core::parse;
///
/// let v = parse("[1, 2, 3]").unwrap();
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.at_number(1), 2);
/// ```
pub fn parse(input: &str) -> Result<Value> {
    Parser::new(input).parse_value()
}

/// Cursor over the input. `pos` is a byte offset; the end of input is
/// `pos == input.len()`, never a terminator byte.
struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Parser<'a> {
        Parser {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    /// Dispatch on the first non-whitespace byte. One recursive call per
    /// nested value.
    fn parse_value(&mut self) -> Result<Value> {
        self.skip_whitespace();
        match self.bytes.get(self.pos).copied() {
            None => Err(self.syntax("unexpected end of input")),
            Some(b'n') => {
                self.expect_literal("null")?;
                Ok(Value::Null)
            }
            Some(b't') => {
                self.expect_literal("true")?;
                Ok(Value::Bool(true))
            }
            Some(b'f') => {
                self.expect_literal("false")?;
                Ok(Value::Bool(false))
            }
            Some(b'"') => Ok(Value::String(self.parse_string()?)),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(b'0'..=b'9') => self.parse_number(),
            Some(b'-') => Err(JsonError::Unsupported {
                offset: self.pos,
                message: "negative numbers are not supported".to_string(),
            }),
            Some(other) => Err(self.syntax(&format!("unexpected character '{}'", other as char))),
        }
    }

    /// `digit+` accumulated into an `i64`. Overflow is rejected rather than
    /// wrapped; a following `.`/`e`/`E` means the input uses a number form
    /// outside the subset and is rejected rather than truncated.
    fn parse_number(&mut self) -> Result<Value> {
        let start = self.pos;
        let mut n: i64 = 0;
        while let Some(digit) = self.bytes.get(self.pos).copied().filter(u8::is_ascii_digit) {
            n = n
                .checked_mul(10)
                .and_then(|n| n.checked_add(i64::from(digit - b'0')))
                .ok_or_else(|| JsonError::Syntax {
                    offset: start,
                    message: "integer literal overflows i64".to_string(),
                })?;
            self.pos += 1;
        }
        match self.bytes.get(self.pos).copied() {
            Some(b'.') | Some(b'e') | Some(b'E') => Err(JsonError::Unsupported {
                offset: self.pos,
                message: "fractional and exponent number forms are not supported".to_string(),
            }),
            _ => Ok(Value::Number(n)),
        }
    }

    /// Decode a string literal into an owned `String`, translating the
    /// escapes `\" \\ \/ \b \f \n \r \t`. Plain runs between escapes are
    /// copied as whole `&str` slices, so multi-byte UTF-8 passes through
    /// untouched (the cursor only ever stops on ASCII `"` and `\`).
    fn parse_string(&mut self) -> Result<String> {
        let open = self.pos;
        self.expect(b'"')?;
        let mut out = String::new();
        let mut run = self.pos;
        loop {
            match self.bytes.get(self.pos).copied() {
                None => {
                    return Err(JsonError::Syntax {
                        offset: open,
                        message: "unterminated string literal".to_string(),
                    })
                }
                Some(b'"') => {
                    out.push_str(&self.input[run..self.pos]);
                    self.pos += 1;
                    return Ok(out);
                }
                Some(b'\\') => {
                    out.push_str(&self.input[run..self.pos]);
                    let escape = self.pos;
                    self.pos += 1;
                    let decoded = match self.bytes.get(self.pos).copied() {
                        None => {
                            return Err(JsonError::Syntax {
                                offset: open,
                                message: "unterminated string literal".to_string(),
                            })
                        }
                        Some(b'"') => '"',
                        Some(b'\\') => '\\',
                        Some(b'/') => '/',
                        Some(b'b') => '\u{0008}',
                        Some(b'f') => '\u{000C}',
                        Some(b'n') => '\n',
                        Some(b'r') => '\r',
                        Some(b't') => '\t',
                        Some(b'u') => {
                            return Err(JsonError::Unsupported {
                                offset: escape,
                                message: "\\u escapes are not supported".to_string(),
                            })
                        }
                        Some(other) => {
                            return Err(JsonError::Syntax {
                                offset: escape,
                                message: format!("invalid escape sequence '\\{}'", other as char),
                            })
                        }
                    };
                    out.push(decoded);
                    self.pos += 1;
                    run = self.pos;
                }
                Some(_) => self.pos += 1,
            }
        }
    }

    /// `[` then children until `]`. The array is created first and filled
    /// one recursive call per element. Commas are optional: consumed when
    /// present, never required.
    fn parse_array(&mut self) -> Result<Value> {
        let open = self.pos;
        self.expect(b'[')?;
        let mut array = Value::new_array();
        loop {
            self.skip_whitespace();
            match self.bytes.get(self.pos).copied() {
                None => {
                    return Err(JsonError::Syntax {
                        offset: open,
                        message: "unterminated array".to_string(),
                    })
                }
                Some(b']') => {
                    self.pos += 1;
                    return Ok(array);
                }
                Some(_) => {
                    array.push(self.parse_value()?);
                    self.skip_whitespace();
                    self.eat(b',');
                }
            }
        }
    }

    /// `{` then `"key": value` members until `}`. Keys must be string
    /// literals; duplicate keys are inserted as-is. Comma handling matches
    /// [`Parser::parse_array`].
    fn parse_object(&mut self) -> Result<Value> {
        let open = self.pos;
        self.expect(b'{')?;
        let mut object = Value::new_object();
        loop {
            self.skip_whitespace();
            match self.bytes.get(self.pos).copied() {
                None => {
                    return Err(JsonError::Syntax {
                        offset: open,
                        message: "unterminated object".to_string(),
                    })
                }
                Some(b'}') => {
                    self.pos += 1;
                    return Ok(object);
                }
                Some(b'"') => {
                    let key = self.parse_string()?;
                    self.skip_whitespace();
                    self.expect(b':')?;
                    let value = self.parse_value()?;
                    object.insert(key, value);
                    self.skip_whitespace();
                    self.eat(b',');
                }
                Some(other) => {
                    return Err(self.syntax(&format!(
                        "expected string key or '}}', found '{}'",
                        other as char
                    )))
                }
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while self
            .bytes
            .get(self.pos)
            .is_some_and(u8::is_ascii_whitespace)
        {
            self.pos += 1;
        }
    }

    /// Consume `byte` if it is next; no-op otherwise. Used for the optional
    /// commas of the permissive grammar.
    fn eat(&mut self, byte: u8) {
        if self.bytes.get(self.pos) == Some(&byte) {
            self.pos += 1;
        }
    }

    /// Require `byte` next, or fail with a syntax error naming what was
    /// found instead.
    fn expect(&mut self, byte: u8) -> Result<()> {
        match self.bytes.get(self.pos) {
            Some(found) if *found == byte => {
                self.pos += 1;
                Ok(())
            }
            Some(found) => Err(self.syntax(&format!(
                "expected '{}', found '{}'",
                byte as char, *found as char
            ))),
            None => Err(self.syntax(&format!(
                "expected '{}', found end of input",
                byte as char
            ))),
        }
    }

    /// Require the exact literal text next (`null`, `true`, `false`).
    fn expect_literal(&mut self, literal: &str) -> Result<()> {
        if self.input[self.pos..].starts_with(literal) {
            self.pos += literal.len();
            Ok(())
        } else {
            Err(self.syntax(&format!("invalid literal, expected '{literal}'")))
        }
    }

    fn syntax(&self, message: &str) -> JsonError {
        JsonError::Syntax {
            offset: self.pos,
            message: message.to_string(),
        }
    }
}
