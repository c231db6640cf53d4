use const_format::concatcp;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::interpreter::Procedure;

/// Code and data share one representation. The reader only ever produces
/// `Number`, `Symbol` and `List`; `Procedure` values come from evaluating
/// `lambda` forms or from the standard environment.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    Symbol(String),
    List(Vec<Expression>),
    Procedure(Procedure),
}

impl Expression {
    pub fn symbol(name: &str) -> Self {
        Self::Symbol(name.to_string())
    }

    /// Zero and the empty list are false, everything else is true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0,
            Self::List(items) => !items.is_empty(),
            Self::Symbol(_) | Self::Procedure(_) => true,
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(name) => Some(name.as_str()),
            _ => None,
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Symbol(name) => write!(f, "{name}"),
            Self::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
            Self::Procedure(proc) => write!(f, "{proc}"),
        }
    }
}

macro_rules! alternative {
    ($t:expr) => {{
        $t
    }};
    ($t:expr, $($ts:expr),+) => {{
        concatcp!($t, "|", alternative!($($ts),+))
    }}
}

macro_rules! group {
    ($($ts:expr),+) => {{
        concatcp!(r"(", alternative!($($ts),+), ")")
    }}
}

macro_rules! maybe {
    ($($ts:expr),+) => {
        concatcp!(group!($($ts),+), r"?")
    }
}

const S_SIGN: &str = r"[+-]";
const S_DIGITS: &str = r"\d+";
const S_FRACTION: &str = concatcp!(r"\.", S_DIGITS);
const S_EXPONENT: &str = concatcp!(r"[eE]", maybe!(S_SIGN), S_DIGITS);
const S_MANTISSA: &str = group!(
    concatcp!(S_DIGITS, maybe!(concatcp!(r"\.", r"\d*"))),
    S_FRACTION
);
const S_WHOLE_NUMBER: &str = concatcp!(
    r"^",
    maybe!(S_SIGN),
    S_MANTISSA,
    maybe!(S_EXPONENT),
    r"$"
);

static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(S_WHOLE_NUMBER).expect("Error compiling regex."));

/// Classifies a single atom token. Deliberately narrower than
/// `f64::from_str`: only plain decimal notation counts as a number, so
/// tokens like `inf` or `nan` stay symbols.
pub fn atom(token: &str) -> Expression {
    if NUMBER.is_match(token) {
        if let Ok(n) = token.parse::<f64>() {
            return Expression::Number(n);
        }
    }
    Expression::Symbol(token.to_string())
}
