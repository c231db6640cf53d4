mod ast;
mod reader;
pub mod tokenizer;

pub use ast::*;
pub use reader::{read_from_tokens, TokenStream};
pub use tokenizer::{tokenize_file, tokenize_string, Token};

use crate::error::Result;

pub fn parse(input: &str) -> Result<Expression> {
    let tokens = tokenize_string(input);
    read_from_tokens(&tokens)
}

/// Reads every expression in `tokens`, for multi-expression programs.
pub fn parse_tokens(tokens: &[Token]) -> Result<Vec<Expression>> {
    let mut stream = TokenStream::new(tokens);
    let mut expressions = vec![];
    while !stream.is_empty() {
        expressions.push(stream.read()?);
    }
    Ok(expressions)
}

pub fn parse_all(input: &str) -> Result<Vec<Expression>> {
    parse_tokens(&tokenize_string(input))
}
