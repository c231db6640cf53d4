mod builtins;
mod environment;
mod eval;
mod procedure;

pub use builtins::standard_env;
pub use environment::{Env, Environment};
pub use eval::{eval, eval_value};
pub use procedure::{Lambda, Primitive, Procedure};

#[cfg(test)]
mod test;
