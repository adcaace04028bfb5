//! Infix arithmetic to Reverse Polish Notation, and evaluation of the result.
//!
//! Operators are supplied by `OperatorProvider`s registered with a
//! `ProviderFactory`; the built-in `ArithmeticProvider` handles
//! `! ^ * / % + -` over 64-bit integers and floats.

pub use error::{Error, ErrorKind, OperateError, Result};
pub use expressions::{
    parse, parse_and_evaluate, parse_and_evaluate_as,
    try_parse_and_evaluate, try_parse_and_evaluate_as, FromNumber,
};
pub use factory::ProviderFactory;
pub use parser::{RPNExpr, ShuntingParser};
pub use provider::{operands, ArithmeticProvider, OperatorProvider};
pub use rpneval::Evaluator;
pub use token::{Assoc, Number, Operator, Side, Token};

mod error;
mod expressions;
mod factory;
pub mod parser;
mod provider;
mod rpneval;
mod token;
