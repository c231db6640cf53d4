use super::ast::{atom, Expression};
use super::tokenizer::{Token, TokenType};
use crate::error::{Error, Result};

/// A cursor into an immutable token sequence. Reading advances the cursor;
/// the tokens themselves are never mutated.
#[derive(Debug, Clone, Copy)]
pub struct TokenStream<'a>(&'a [Token]);

impl<'a> TokenStream<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self(tokens)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn peek(&self) -> Option<&'a Token> {
        self.0.first()
    }

    fn next(&mut self) -> Option<&'a Token> {
        let (first, rest) = self.0.split_first()?;
        self.0 = rest;
        Some(first)
    }

    /// Reads exactly one expression from the front of the stream.
    pub fn read(&mut self) -> Result<Expression> {
        let token = self.next().ok_or(Error::UnexpectedEndOfInput)?;
        match token.typ {
            TokenType::LPAR => {
                let mut list = vec![];
                loop {
                    match self.peek() {
                        None => return Err(Error::UnexpectedEndOfInput),
                        Some(t) if t.typ == TokenType::RPAR => {
                            self.next();
                            return Ok(Expression::List(list));
                        }
                        Some(_) => list.push(self.read()?),
                    }
                }
            }
            TokenType::RPAR => Err(Error::UnexpectedCloseParen),
            TokenType::ATOM => Ok(atom(&token.lexeme)),
        }
    }
}

/// Reads one expression; tokens after the first complete expression are
/// ignored.
pub fn read_from_tokens(tokens: &[Token]) -> Result<Expression> {
    TokenStream::new(tokens).read()
}
