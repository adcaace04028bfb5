use std::sync::Arc;

use crate::error::{Error, OperateError, Result};
use crate::factory::ProviderFactory;
use crate::parser::RPNExpr;
use crate::provider::OperatorProvider;
use crate::token::{Number, Token};

/// Reduces a postfix expression to a single number with a stack machine.
#[derive(Clone)]
pub struct Evaluator {
    factory: Arc<ProviderFactory>,
}

impl Default for Evaluator {
    fn default() -> Evaluator {
        Evaluator::with_factory(ProviderFactory::shared())
    }
}

impl Evaluator {
    pub fn new() -> Evaluator {
        Evaluator::default()
    }

    pub fn with_factory(factory: Arc<ProviderFactory>) -> Evaluator {
        Evaluator{factory}
    }

    pub fn with_providers(providers: Vec<Arc<dyn OperatorProvider>>) -> Result<Evaluator> {
        Ok(Evaluator::with_factory(Arc::new(ProviderFactory::new(providers)?)))
    }

    pub fn factory(&self) -> &Arc<ProviderFactory> { &self.factory }

    pub fn eval(&self, rpn: &RPNExpr) -> Result<Number> {
        let fail = |message: String, source: Option<OperateError>| Error::Evaluation {
            message,
            expression: rpn.infix().to_string(),
            rpn: rpn.to_string(),
            source,
        };
        let mut operands: Vec<Token> = Vec::new();

        for token in rpn.iter() {
            let op = match *token {
                Token::Operator(ref op) => op,
                _ => {
                    operands.push(token.clone());
                    continue;
                }
            };
            let provider = match self.factory.get_provider(op.symbol) {
                Some(provider) => provider,
                None => return Err(fail(
                    format!("no provider found for operator '{}'", op.symbol), None)),
            };
            if op.arity > operands.len() {
                return Err(fail(format!("not enough operands for '{}'", op.symbol), None));
            }
            let cut = operands.len() - op.arity;
            let args = operands.split_off(cut);
            match provider.operate(op, &args) {
                Ok(n) => operands.push(Token::Operand(n)),
                Err(e) => return Err(fail(
                    format!("error applying operator '{}'", op.symbol), Some(e))),
            }
        }

        match (operands.pop(), operands.is_empty()) {
            (Some(Token::Operand(n)), true) => {
                log::debug!("evaluated '{}' to {}", rpn, n);
                Ok(n)
            }
            _ => Err(fail(format!("invalid expression '{}'", rpn), None)),
        }
    }
}
