use std::rc::Rc;

use derivative::Derivative;

use super::environment::{Env, Environment};
use super::eval::eval;
use crate::error::{Error, Result};
use crate::parser::Expression;

#[derive(Debug, Clone, PartialEq)]
pub enum Procedure {
    Lambda(Rc<Lambda>),
    Primitive(Primitive),
}

/// A closure. Free variables in `body` resolve in `env`, the frame that
/// was active when the `lambda` form was evaluated.
#[derive(Derivative)]
#[derivative(Debug, PartialEq)]
pub struct Lambda {
    pub(crate) params: Vec<String>,
    pub(crate) body: Expression,
    #[derivative(Debug = "ignore", PartialEq(compare_with = "same_frame"))]
    pub(crate) env: Env,
}

fn same_frame(a: &Env, b: &Env) -> bool {
    Rc::ptr_eq(a, b)
}

#[derive(Derivative, Clone, Copy)]
#[derivative(Debug, PartialEq)]
pub struct Primitive {
    pub(crate) name: &'static str,
    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    pub(crate) op: fn(f64, f64) -> Result<f64>,
}

impl Procedure {
    pub fn lambda(params: Vec<String>, body: Expression, env: Env) -> Self {
        Self::Lambda(Rc::new(Lambda { params, body, env }))
    }

    /// Calls the procedure on already evaluated arguments. Every call of a
    /// closure gets a fresh frame below the closure's defining frame.
    pub fn apply(&self, args: Vec<Expression>) -> Result<Option<Expression>> {
        match self {
            Self::Lambda(lambda) => {
                let frame = Environment::new(&lambda.params, args, Some(Rc::clone(&lambda.env)))?;
                eval(&lambda.body, &frame)
            }
            Self::Primitive(primitive) => primitive.apply(&args).map(Some),
        }
    }
}

impl Primitive {
    fn apply(&self, args: &[Expression]) -> Result<Expression> {
        match args {
            [Expression::Number(a), Expression::Number(b)] => (self.op)(*a, *b).map(Expression::Number),
            [a, b] => {
                let culprit = if matches!(a, Expression::Number(_)) { b } else { a };
                Err(Error::NotANumber(culprit.to_string()))
            }
            _ => Err(Error::ArityMismatch {
                expected: 2,
                found: args.len(),
            }),
        }
    }
}

impl std::fmt::Display for Procedure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lambda(lambda) => write!(f, "#<lambda ({})>", lambda.params.join(" ")),
            Self::Primitive(primitive) => write!(f, "#<primitive {}>", primitive.name),
        }
    }
}
