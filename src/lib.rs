mod error;
pub use error::{Error, Result};

mod parser;
pub use parser::tokenizer::{tokenize_file, tokenize_string, Token, Tokenizer};
pub use parser::{atom, parse, parse_all, parse_tokens, read_from_tokens, Expression, TokenStream};

mod interpreter;
pub use interpreter::{eval, eval_value, standard_env, Env, Environment, Lambda, Primitive, Procedure};

mod repl;
pub use repl::Session;
