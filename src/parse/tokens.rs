//! The characters of a line, as tokens.
//!
//! Spaces and tabs are skipped, and every other character read is a token.
//! Tokens are numbered from 1 within a line, and the number of the most recent token is the position reported by a parse error.

use std::io::BufRead;

use crate::{
    structures::formula::{BinaryOperator, UnaryOperator},
    types::err::ParseError,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Token {
    /// An atomic proposition.
    Letter(char),

    Unary(UnaryOperator),

    Binary(BinaryOperator),

    /// `(`
    Open,

    /// `)`
    Close,

    /// `\n`
    LineEnd,

    /// There are no more characters to read.
    InputEnd,

    /// Any other character.
    Illegal(char),
}

impl Token {
    fn from_byte(byte: u8) -> Self {
        match byte {
            b'A'..=b'Z' => Self::Letter(byte as char),
            b'(' => Self::Open,
            b')' => Self::Close,
            b'\n' => Self::LineEnd,
            _ => match UnaryOperator::from_symbol(byte) {
                Some(operator) => Self::Unary(operator),
                None => match BinaryOperator::from_symbol(byte) {
                    Some(operator) => Self::Binary(operator),
                    None => Self::Illegal(byte as char),
                },
            },
        }
    }

    /// The character the token was read from.
    pub fn character(&self) -> char {
        match self {
            Self::Letter(letter) => *letter,
            Self::Unary(operator) => operator.symbol(),
            Self::Binary(operator) => operator.symbol(),
            Self::Open => '(',
            Self::Close => ')',
            Self::LineEnd => '\n',
            Self::InputEnd => '\0',
            Self::Illegal(character) => *character,
        }
    }
}

/// A reader of tokens from a single line.
pub(crate) struct Tokens<'r, R: BufRead> {
    reader: &'r mut R,

    /// The number of tokens read.
    position: usize,
}

impl<'r, R: BufRead> Tokens<'r, R> {
    pub fn new(reader: &'r mut R) -> Self {
        Tokens {
            reader,
            position: 0,
        }
    }

    /// The position of the most recent token, from 1.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the most recent token is the first of the line.
    pub fn at_start(&self) -> bool {
        self.position == 1
    }

    fn read_byte(&mut self) -> Result<Option<u8>, ParseError> {
        let buffer = self.reader.fill_buf()?;
        let byte = buffer.first().copied();
        if byte.is_some() {
            self.reader.consume(1);
        }
        Ok(byte)
    }

    /// The next token.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        loop {
            match self.read_byte()? {
                Some(b' ' | b'\t') => continue,

                Some(byte) => {
                    self.position += 1;
                    return Ok(Token::from_byte(byte));
                }

                None => {
                    self.position += 1;
                    return Ok(Token::InputEnd);
                }
            }
        }
    }

    /// Discards every character up to and including the next line end.
    pub fn skip_line(&mut self) -> Result<(), ParseError> {
        loop {
            match self.read_byte()? {
                Some(b'\n') | None => return Ok(()),
                Some(_) => {}
            }
        }
    }

    pub fn illegal(&self, character: char) -> ParseError {
        ParseError::IllegalCharacter {
            character,
            position: self.position,
        }
    }

    pub fn unexpected(&self, token: Token) -> ParseError {
        ParseError::UnexpectedElement {
            character: token.character(),
            position: self.position,
        }
    }

    pub fn redundant(&self, token: Token) -> ParseError {
        ParseError::RedundantElement {
            character: token.character(),
            position: self.position,
        }
    }
}
