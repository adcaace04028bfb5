use crate::error::OperateError;
use crate::token::{Assoc, Number, Operator, Token};

/// Supplies the operators for a set of symbols and knows how to apply them.
///
/// Providers are registered with a `ProviderFactory`, which hands out the
/// first provider that claims a symbol.
pub trait OperatorProvider: Send + Sync {
    fn can_create(&self, symbol: char) -> bool;

    /// Precedence, associativity and arity for `symbol`, `None` if it isn't
    /// owned by this provider.
    fn create_operator(&self, symbol: char) -> Option<Operator>;

    /// Apply `op` to exactly `op.arity` arguments given in left-to-right order.
    fn operate(&self, op: &Operator, args: &[Token]) -> Result<Number, OperateError>;
}

// check the argument count and unwrap the operands
pub fn operands(op: &Operator, args: &[Token]) -> Result<Vec<Number>, OperateError> {
    if args.len() != op.arity {
        return Err(OperateError::ArgumentCount {
            symbol: op.symbol, expected: op.arity, got: args.len()
        });
    }
    args.iter()
        .map(|arg| match *arg {
            Token::Operand(n) => Ok(n),
            _ => Err(OperateError::NotOperand { symbol: op.symbol }),
        })
        .collect()
}

/// The built-in `! ^ * / % + -` operators.
///
/// Integer operands stay integers under `+ - * %`, any float operand turns
/// the result into a float. `/` always yields a float.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArithmeticProvider;

impl OperatorProvider for ArithmeticProvider {
    fn can_create(&self, symbol: char) -> bool {
        matches!(symbol, '!' | '^' | '*' | '/' | '%' | '+' | '-')
    }

    fn create_operator(&self, symbol: char) -> Option<Operator> {
        match symbol {
            '+' | '-' => Some(Operator::new(symbol, Assoc::Left, 1, 2)),
            '*' | '/' | '%' => Some(Operator::new(symbol, Assoc::Left, 2, 2)),
            '^' => Some(Operator::new(symbol, Assoc::Right, 3, 2)),
            '!' => Some(Operator::new(symbol, Assoc::Right, 3, 1)),
            _ => None,
        }
    }

    fn operate(&self, op: &Operator, args: &[Token]) -> Result<Number, OperateError> {
        let args = operands(op, args)?;
        match op.symbol {
            '!' => factorial(args[0]),
            '^' => power(args[0], args[1]),
            '*' => multiply(args[0], args[1]),
            '/' => Ok(divide(args[0], args[1])),
            '%' => modulo(args[0], args[1]),
            '+' => add(args[0], args[1]),
            '-' => subtract(args[0], args[1]),
            symbol => Err(OperateError::Unsupported { symbol }),
        }
    }
}

// Integer arithmetic when both sides are integers, float otherwise
fn promote(
    symbol: char, lhs: Number, rhs: Number,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Result<Number, OperateError> {
    match (lhs, rhs) {
        (Number::Integer(l), Number::Integer(r)) => int_op(l, r)
            .map(Number::Integer)
            .ok_or(OperateError::Overflow { symbol }),
        _ => Ok(Number::Float(float_op(lhs.as_f64(), rhs.as_f64()))),
    }
}

pub(crate) fn add(lhs: Number, rhs: Number) -> Result<Number, OperateError> {
    promote('+', lhs, rhs, i64::checked_add, |l, r| l + r)
}

pub(crate) fn subtract(lhs: Number, rhs: Number) -> Result<Number, OperateError> {
    promote('-', lhs, rhs, i64::checked_sub, |l, r| l - r)
}

pub(crate) fn multiply(lhs: Number, rhs: Number) -> Result<Number, OperateError> {
    promote('*', lhs, rhs, i64::checked_mul, |l, r| l * r)
}

pub(crate) fn modulo(lhs: Number, rhs: Number) -> Result<Number, OperateError> {
    if let (Number::Integer(_), Number::Integer(0)) = (lhs, rhs) {
        return Err(OperateError::DivideByZero { symbol: '%' });
    }
    promote('%', lhs, rhs, i64::checked_rem, |l, r| l % r)
}

pub(crate) fn divide(lhs: Number, rhs: Number) -> Number {
    Number::Float(lhs.as_f64() / rhs.as_f64())
}

// NaN, infinities and values outside the i64 range don't convert
fn to_i64(x: f64, symbol: char) -> Result<i64, OperateError> {
    if x.is_finite() && x >= i64::MIN as f64 && x < i64::MAX as f64 {
        Ok(x as i64)
    } else {
        Err(OperateError::Overflow { symbol })
    }
}

pub(crate) fn power(lhs: Number, rhs: Number) -> Result<Number, OperateError> {
    let result = lhs.as_f64().powf(rhs.as_f64());
    match (lhs, rhs) {
        (Number::Integer(_), Number::Integer(_)) => Ok(Number::Integer(to_i64(result.trunc(), '^')?)),
        _ => Ok(Number::Float(result)),
    }
}

pub(crate) fn factorial(arg: Number) -> Result<Number, OperateError> {
    let n = match arg {
        Number::Integer(n) => n,
        Number::Float(x) => to_i64(x.round_ties_even(), '!')?,
    };
    (1..=n)
        .try_fold(1i64, |acc, i| acc.checked_mul(i))
        .map(Number::Integer)
        .ok_or(OperateError::Overflow { symbol: '!' })
}
