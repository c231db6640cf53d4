use super::environment::Env;
use super::procedure::Procedure;
use crate::error::{Error, Result};
use crate::parser::Expression;

/// Evaluates `expr` in `env`. `Ok(None)` is the "no value" outcome of
/// `define` and `set!`; everything else produces a value.
pub fn eval(expr: &Expression, env: &Env) -> Result<Option<Expression>> {
    match expr {
        Expression::Symbol(name) => env.lookup(name).map(Some),
        Expression::Number(_) | Expression::Procedure(_) => Ok(Some(expr.clone())),
        Expression::List(items) => match items.as_slice() {
            [] => Ok(Some(expr.clone())),
            [single] => match single {
                Expression::Number(_) => Ok(Some(single.clone())),
                Expression::Symbol(name) => env.lookup(name).map(Some),
                other => eval(other, env),
            },
            [head, operands @ ..] => match head.as_symbol() {
                Some("quote") => eval_quote(operands),
                Some("if") => eval_if(operands, env),
                Some("define") => eval_define(operands, env),
                Some("set!") => eval_set(operands, env),
                Some("lambda") => eval_lambda(operands, env),
                _ => eval_application(head, operands, env),
            },
        },
    }
}

/// Like [`eval`], but for positions where a value is required.
pub fn eval_value(expr: &Expression, env: &Env) -> Result<Expression> {
    eval(expr, env)?.ok_or(Error::NoValue)
}

fn eval_quote(operands: &[Expression]) -> Result<Option<Expression>> {
    match operands {
        [exp] => Ok(Some(exp.clone())),
        _ => Err(Error::MalformedForm("quote", "expected exactly one operand")),
    }
}

fn eval_if(operands: &[Expression], env: &Env) -> Result<Option<Expression>> {
    match operands {
        [test, conseq, alt] => {
            if eval_value(test, env)?.is_truthy() {
                eval(conseq, env)
            } else {
                eval(alt, env)
            }
        }
        _ => Err(Error::MalformedForm(
            "if",
            "expected a test, a consequent and an alternative",
        )),
    }
}

fn eval_define(operands: &[Expression], env: &Env) -> Result<Option<Expression>> {
    match operands {
        [Expression::Symbol(name), exp] => {
            let value = eval_value(exp, env)?;
            env.insert(name, value);
            Ok(None)
        }
        _ => Err(Error::MalformedForm("define", "expected a name and one expression")),
    }
}

fn eval_set(operands: &[Expression], env: &Env) -> Result<Option<Expression>> {
    match operands {
        [Expression::Symbol(name), exp] => {
            let value = eval_value(exp, env)?;
            env.find(name)?.insert(name, value);
            Ok(None)
        }
        _ => Err(Error::MalformedForm("set!", "expected a name and one expression")),
    }
}

fn eval_lambda(operands: &[Expression], env: &Env) -> Result<Option<Expression>> {
    match operands {
        [Expression::List(params), body] => {
            let params = params
                .iter()
                .map(|param| param.as_symbol().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .ok_or(Error::MalformedForm("lambda", "parameters must be symbols"))?;
            Ok(Some(Expression::Procedure(Procedure::lambda(
                params,
                body.clone(),
                env.clone(),
            ))))
        }
        _ => Err(Error::MalformedForm(
            "lambda",
            "expected a parameter list and a single body expression",
        )),
    }
}

fn eval_application(
    head: &Expression,
    operands: &[Expression],
    env: &Env,
) -> Result<Option<Expression>> {
    let procedure = match eval_value(head, env)? {
        Expression::Procedure(procedure) => procedure,
        other => return Err(Error::NotAProcedure(other.to_string())),
    };
    let args = operands
        .iter()
        .map(|operand| eval_value(operand, env))
        .collect::<Result<Vec<_>>>()?;
    procedure.apply(args)
}
