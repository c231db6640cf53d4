use std::path::Path;

use crate::error::Result;
use crate::interpreter::{eval, standard_env, Env};
use crate::parser::{parse, parse_tokens, tokenize_file, Expression};

/// A top-level session: one root environment shared by every line.
pub struct Session {
    env: Env,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            env: standard_env(),
        }
    }

    /// Parses and evaluates one REPL line. Anything after the first
    /// complete expression is ignored.
    pub fn eval_line(&self, line: &str) -> Result<Option<Expression>> {
        let expr = parse(line)?;
        eval(&expr, &self.env)
    }

    /// Evaluates every expression of a program in order, handing each
    /// result to `emit` as soon as it is produced. Stops at the first
    /// failure; results emitted before it stay emitted.
    pub fn run_script<P, F>(&self, path: P, mut emit: F) -> Result<()>
    where
        P: AsRef<Path> + std::fmt::Display,
        F: FnMut(&Expression),
    {
        let tokens = tokenize_file(path)?;
        for expr in parse_tokens(&tokens)? {
            if let Some(value) = eval(&expr, &self.env)? {
                emit(&value);
            }
        }
        Ok(())
    }
}
