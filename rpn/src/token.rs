use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Assoc {
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Left,
    Right,
}

/// A scalar operand, either a 64-bit integer or a 64-bit float.
///
/// Equality is per variant: `Integer(8)` never equals `Float(8.0)`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    pub fn is_float(&self) -> bool {
        matches!(*self, Number::Float(_))
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(n) => n as f64,
            Number::Float(x) => x,
        }
    }

    // floats truncate toward zero, saturating at the i64 bounds
    pub fn as_i64(&self) -> i64 {
        match *self {
            Number::Integer(n) => n,
            Number::Float(x) => x as i64,
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Number { Number::Integer(n) }
}

impl From<f64> for Number {
    fn from(x: f64) -> Number { Number::Float(x) }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Number::Integer(n) => write!(f, "{}", n),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Operator {
    pub symbol: char,
    pub assoc: Assoc,
    pub precedence: u32,
    pub arity: usize,
}

impl Operator {
    pub fn new(symbol: char, assoc: Assoc, precedence: u32, arity: usize) -> Operator {
        Operator{symbol, assoc, precedence, arity}
    }

    // Should 'self' arriving from the input pop 'top' off the operator stack?
    pub fn yields_to(&self, top: &Operator) -> bool {
        match self.assoc {
            Assoc::Left => self.precedence <= top.precedence,
            Assoc::Right => self.precedence < top.precedence,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum Token {
    Operand(Number),
    Operator(Operator),
    Paren(Side),
}

impl Token {
    pub fn is_operand(&self) -> bool {
        matches!(*self, Token::Operand(_))
    }

    pub fn is_operator(&self) -> bool {
        matches!(*self, Token::Operator(_))
    }

    pub fn is_parenthesis(&self) -> bool {
        matches!(*self, Token::Paren(_))
    }
}

impl From<Number> for Token {
    fn from(n: Number) -> Token { Token::Operand(n) }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Token { Token::Operator(op) }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Token::Operand(ref n) => write!(f, "{}", n),
            Token::Operator(ref op) => write!(f, "{}", op.symbol),
            Token::Paren(Side::Left) => write!(f, "("),
            Token::Paren(Side::Right) => write!(f, ")"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Assoc, Number, Operator, Side, Token};

    #[test]
    fn operand_equality() {
        assert_eq!(Number::Integer(8), Number::Integer(8));
        assert_eq!(Number::Float(8.0), Number::Float(8.0));
        assert_ne!(Number::Integer(8), Number::Float(8.0));
        assert_ne!(Token::Operand(Number::Float(8.0)), Token::Operand(Number::Integer(8)));
    }

    #[test]
    fn token_kinds() {
        let plus = Token::Operator(Operator::new('+', Assoc::Left, 1, 2));
        assert!(plus.is_operator() && !plus.is_parenthesis() && !plus.is_operand());
        let paren = Token::Paren(Side::Left);
        assert!(paren.is_parenthesis() && !paren.is_operator());
        let num = Token::from(Number::Float(0.5));
        assert!(num.is_operand() && !num.is_operator() && !num.is_parenthesis());
    }

    #[test]
    fn token_display() {
        assert_eq!(Token::from(Number::Integer(42)).to_string(), "42");
        assert_eq!(Token::from(Number::Float(3.5)).to_string(), "3.5");
        assert_eq!(Token::Operator(Operator::new('^', Assoc::Right, 3, 2)).to_string(), "^");
        assert_eq!(Token::Paren(Side::Left).to_string(), "(");
        assert_eq!(Token::Paren(Side::Right).to_string(), ")");
    }

    #[test]
    fn yields_to() {
        let plus = Operator::new('+', Assoc::Left, 1, 2);
        let times = Operator::new('*', Assoc::Left, 2, 2);
        let pow = Operator::new('^', Assoc::Right, 3, 2);
        assert!(plus.yields_to(&times));
        assert!(plus.yields_to(&plus));
        assert!(!times.yields_to(&plus));
        assert!(!pow.yields_to(&pow));
        assert!(times.yields_to(&pow));
    }
}
