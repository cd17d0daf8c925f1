// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Recursive-descent parser for type strings.
//!
//! ```text
//! Type   := Base Suffix*
//! Base   := Ident | "(" [ Type { "," Type } ] ")"
//! Suffix := "[" [ Length ] "]"
//! ```
//!
//! Suffixes apply left to right, so in `uint256[][2]` the `[2]` is the outermost dimension.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    #[error("empty type string")]
    Empty,
    #[error("unexpected `{found}` at offset {offset} in `{input}`")]
    Unexpected {
        input: String,
        offset: usize,
        found: char,
    },
    #[error("unexpected end of `{input}`")]
    UnexpectedEnd { input: String },
    #[error("invalid array length at offset {offset} in `{input}`")]
    BadLength { input: String, offset: usize },
    #[error("zero-length array at offset {offset} in `{input}`")]
    ZeroLength { input: String, offset: usize },
    #[error("`{ty}` is not a tuple but has components")]
    ComponentsOnNonTuple { ty: String },
    #[error("malformed struct annotation `{0}`")]
    BadStructAnnotation(String),
}

/// Syntax tree of a type string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeExpr {
    Ident(String),
    Tuple(Vec<TypeExpr>),
    /// Array of the inner expression, with a length when fixed.
    Array(Box<TypeExpr>, Option<usize>),
}

impl TypeExpr {
    pub fn parse(input: &str) -> Result<Self, TypeError> {
        if input.is_empty() {
            return Err(TypeError::Empty);
        }
        let mut parser = Parser { input, pos: 0 };
        let expr = parser.ty()?;
        match parser.peek() {
            None => Ok(expr),
            Some(found) => Err(parser.unexpected(found)),
        }
    }

    /// Splits off the array dimensions, innermost first.
    pub fn split_dims(&self) -> (&TypeExpr, Vec<Option<usize>>) {
        let mut dims = Vec::new();
        let mut base = self;
        while let Self::Array(inner, len) = base {
            dims.push(*len);
            base = inner;
        }
        dims.reverse();
        (base, dims)
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(ident) => f.write_str(ident),
            Self::Tuple(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
            Self::Array(inner, Some(len)) => write!(f, "{inner}[{len}]"),
            Self::Array(inner, None) => write!(f, "{inner}[]"),
        }
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn expect(&mut self, want: char) -> Result<(), TypeError> {
        match self.peek() {
            Some(c) if c == want => {
                self.bump();
                Ok(())
            }
            Some(found) => Err(self.unexpected(found)),
            None => Err(self.end()),
        }
    }

    fn unexpected(&self, found: char) -> TypeError {
        TypeError::Unexpected {
            input: self.input.to_owned(),
            offset: self.pos,
            found,
        }
    }

    fn end(&self) -> TypeError {
        TypeError::UnexpectedEnd {
            input: self.input.to_owned(),
        }
    }

    fn ty(&mut self) -> Result<TypeExpr, TypeError> {
        let mut expr = match self.peek() {
            Some('(') => self.tuple()?,
            Some(c) if c.is_ascii_alphabetic() || c == '_' => self.ident(),
            Some(found) => return Err(self.unexpected(found)),
            None => return Err(self.end()),
        };
        while self.peek() == Some('[') {
            self.bump();
            let len = self.length()?;
            self.expect(']')?;
            expr = TypeExpr::Array(Box::new(expr), len);
        }
        Ok(expr)
    }

    fn ident(&mut self) -> TypeExpr {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.bump();
        }
        TypeExpr::Ident(self.input[start..self.pos].to_owned())
    }

    fn tuple(&mut self) -> Result<TypeExpr, TypeError> {
        self.expect('(')?;
        let mut items = Vec::new();
        if self.peek() == Some(')') {
            self.bump();
            return Ok(TypeExpr::Tuple(items));
        }
        loop {
            items.push(self.ty()?);
            match self.peek() {
                Some(',') => self.bump(),
                Some(')') => {
                    self.bump();
                    return Ok(TypeExpr::Tuple(items));
                }
                Some(found) => return Err(self.unexpected(found)),
                None => return Err(self.end()),
            }
        }
    }

    fn length(&mut self) -> Result<Option<usize>, TypeError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.bump();
        }
        let digits = &self.input[start..self.pos];
        if digits.is_empty() {
            return Ok(None);
        }
        let bad_length = || TypeError::BadLength {
            input: self.input.to_owned(),
            offset: start,
        };
        if digits.len() > 1 && digits.starts_with('0') {
            return Err(bad_length());
        }
        match digits.parse::<usize>() {
            Ok(0) => Err(TypeError::ZeroLength {
                input: self.input.to_owned(),
                offset: start,
            }),
            Ok(len) => Ok(Some(len)),
            Err(_) => Err(bad_length()),
        }
    }
}
