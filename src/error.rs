#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    UnexpectedEndOfInput,
    UnexpectedCloseParen,
    UnboundSymbol(String),
    ArityMismatch { expected: usize, found: usize },
    NotAProcedure(String),
    NotANumber(String),
    DivisionByZero,
    MalformedForm(&'static str, &'static str),
    NoValue,
    Io(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedEndOfInput => write!(f, "unexpected end of input"),
            Self::UnexpectedCloseParen => write!(f, "unexpected ')'"),
            Self::UnboundSymbol(name) => write!(f, "unbound symbol '{name}'"),
            Self::ArityMismatch { expected, found } => write!(
                f,
                "arity mismatch: expected {expected} argument(s), got {found}"
            ),
            Self::NotAProcedure(repr) => write!(f, "{repr} is not a procedure"),
            Self::NotANumber(repr) => write!(f, "{repr} is not a number"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::MalformedForm(form, reason) => write!(f, "malformed {form}: {reason}"),
            Self::NoValue => write!(f, "expression produced no value"),
            Self::Io(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}
