//! One-call helpers over a shared parser and evaluator.
//!
//! ```
//! assert_eq!(rpn::parse_and_evaluate_as::<f64>("7/2").unwrap(), 3.5);
//! assert_eq!(rpn::try_parse_and_evaluate("3+4+"), None);
//! ```

use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::parser::{RPNExpr, ShuntingParser};
use crate::rpneval::Evaluator;
use crate::token::Number;

static PARSER: LazyLock<ShuntingParser> = LazyLock::new(ShuntingParser::new);
static EVALUATOR: LazyLock<Evaluator> = LazyLock::new(Evaluator::new);

/// Numeric types an evaluation result can be converted into.
///
/// Integer targets round floats half to even and reject values that are
/// NaN, infinite or out of range. Float targets accept anything.
pub trait FromNumber: Sized {
    fn from_number(n: Number) -> Result<Self>;
}

fn conversion(n: Number, target: &'static str) -> Error {
    Error::Conversion { value: n.to_string(), target }
}

macro_rules! from_number_int {
    ($($t:ty),*) => {$(
        impl FromNumber for $t {
            fn from_number(n: Number) -> Result<$t> {
                let fail = || conversion(n, stringify!($t));
                match n {
                    Number::Integer(i) => <$t>::try_from(i).map_err(|_| fail()),
                    Number::Float(x) => {
                        let x = x.round_ties_even();
                        if x.is_finite() && x >= <$t>::MIN as f64 && x < <$t>::MAX as f64 + 1.0 {
                            Ok(x as $t)
                        } else {
                            Err(fail())
                        }
                    }
                }
            }
        }
    )*};
}

from_number_int!(i32, i64, u32, u64);

impl FromNumber for f64 {
    fn from_number(n: Number) -> Result<f64> { Ok(n.as_f64()) }
}

impl FromNumber for f32 {
    fn from_number(n: Number) -> Result<f32> { Ok(n.as_f64() as f32) }
}

impl FromNumber for Number {
    fn from_number(n: Number) -> Result<Number> { Ok(n) }
}

pub fn parse(expr: &str) -> Result<RPNExpr> {
    PARSER.parse(expr)
}

pub fn parse_and_evaluate(expr: &str) -> Result<Number> {
    EVALUATOR.eval(&parse(expr)?)
}

pub fn parse_and_evaluate_as<T: FromNumber>(expr: &str) -> Result<T> {
    T::from_number(parse_and_evaluate(expr)?)
}

pub fn try_parse_and_evaluate(expr: &str) -> Option<Number> {
    try_parse_and_evaluate_as(expr)
}

pub fn try_parse_and_evaluate_as<T: FromNumber>(expr: &str) -> Option<T> {
    match parse_and_evaluate_as(expr) {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("'{}' did not evaluate: {}", expr, e);
            None
        }
    }
}
