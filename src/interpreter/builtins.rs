use super::environment::{Env, Environment};
use super::procedure::{Primitive, Procedure};
use crate::error::{Error, Result};
use crate::parser::Expression;

fn add(a: f64, b: f64) -> Result<f64> {
    Ok(a + b)
}

fn sub(a: f64, b: f64) -> Result<f64> {
    Ok(a - b)
}

fn mul(a: f64, b: f64) -> Result<f64> {
    Ok(a * b)
}

fn div(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(Error::DivisionByZero);
    }
    Ok(a / b)
}

const PRIMITIVES: [Primitive; 4] = [
    Primitive { name: "+", op: add },
    Primitive { name: "-", op: sub },
    Primitive { name: "*", op: mul },
    Primitive { name: "/", op: div },
];

/// The root frame of a session: `+ - * /` and nothing else.
pub fn standard_env() -> Env {
    let env = Environment::root();
    for primitive in PRIMITIVES {
        env.insert(
            primitive.name,
            Expression::Procedure(Procedure::Primitive(primitive)),
        );
    }
    env
}
