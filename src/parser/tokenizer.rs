use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub(crate) typ: TokenType,
    pub(crate) lexeme: String,
}

impl Token {
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub(crate) enum TokenType {
    LPAR,
    RPAR,
    ATOM,
}

const LPAR: (&str, TokenType) = ("(", TokenType::LPAR);
const RPAR: (&str, TokenType) = (")", TokenType::RPAR);

const PARENS: [(&str, TokenType); 2] = [LPAR, RPAR];

impl From<&str> for Token {
    fn from(lexeme: &str) -> Self {
        let typ = PARENS
            .iter()
            .find(|(paren, _)| *paren == lexeme)
            .map_or(TokenType::ATOM, |(_, typ)| *typ);
        Self {
            typ,
            lexeme: lexeme.to_string(),
        }
    }
}

/// Splits program text into parentheses and atoms. Parentheses always
/// separate tokens, whether or not whitespace surrounds them.
#[derive(Default)]
pub struct Tokenizer {
    tokens: Vec<Token>,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn tokenize(&mut self, input: impl Iterator<Item = String>) {
        for line in input {
            self.tokenize_line(line.as_str());
        }
    }
    pub fn finalize(self) -> Vec<Token> {
        self.tokens
    }
    fn tokenize_line(&mut self, line: &str) {
        let padded = PARENS
            .iter()
            .fold(line.to_string(), |acc, (paren, _)| {
                acc.replace(*paren, &format!(" {paren} "))
            });
        self.tokens
            .extend(padded.split_whitespace().map(Token::from));
    }
}

pub fn tokenize_string(input: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.tokenize(input.lines().map(str::to_string));
    tokenizer.finalize()
}

pub fn tokenize_file<P>(path: P) -> Result<Vec<Token>>
where
    P: AsRef<Path> + std::fmt::Display,
{
    let lines = read_lines(&path)
        .and_then(|lines| lines.collect::<io::Result<Vec<String>>>())
        .map_err(|err| Error::Io(format!("{path}: {err}")))?;
    let mut tokenizer = Tokenizer::new();
    tokenizer.tokenize(lines.into_iter());
    Ok(tokenizer.finalize())
}

fn read_lines<P>(filename: P) -> io::Result<io::Lines<io::BufReader<File>>>
where
    P: AsRef<Path>,
{
    let file = File::open(filename)?;
    Ok(io::BufReader::new(file).lines())
}
