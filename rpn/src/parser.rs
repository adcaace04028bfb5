use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use lexers::Scanner;

use crate::error::{Error, Result};
use crate::factory::ProviderFactory;
use crate::provider::OperatorProvider;
use crate::token::{Number, Operator, Side, Token};

/// A postfix token sequence plus the infix text it was parsed from.
#[derive(Clone, PartialEq, Debug)]
pub struct RPNExpr {
    tokens: Vec<Token>,
    infix: String,
}

impl RPNExpr {
    pub fn new(infix: &str, tokens: Vec<Token>) -> RPNExpr {
        RPNExpr{tokens, infix: infix.to_string()}
    }

    pub fn infix(&self) -> &str { &self.infix }

    pub fn into_tokens(self) -> Vec<Token> { self.tokens }
}

impl Deref for RPNExpr {
    type Target = [Token];
    fn deref(&self) -> &[Token] { &self.tokens }
}

// space separated postfix form, eg: "3 4 2 * +"
impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 { write!(f, " ")?; }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

/// Infix to postfix conversion using the shunting-yard algorithm.
///
/// Operator symbols are recognized by asking the `ProviderFactory`, so the
/// set of operators and their ranking is whatever the providers define.
#[derive(Clone)]
pub struct ShuntingParser {
    factory: Arc<ProviderFactory>,
}

impl Default for ShuntingParser {
    fn default() -> ShuntingParser {
        ShuntingParser::with_factory(ProviderFactory::shared())
    }
}

impl ShuntingParser {
    pub fn new() -> ShuntingParser {
        ShuntingParser::default()
    }

    pub fn with_factory(factory: Arc<ProviderFactory>) -> ShuntingParser {
        ShuntingParser{factory}
    }

    pub fn with_providers(providers: Vec<Arc<dyn OperatorProvider>>) -> Result<ShuntingParser> {
        Ok(ShuntingParser::with_factory(Arc::new(ProviderFactory::new(providers)?)))
    }

    pub fn factory(&self) -> &Arc<ProviderFactory> { &self.factory }

    pub fn parse(&self, expr: &str) -> Result<RPNExpr> {
        let mut src = Scanner::new(expr);
        let mut out = Vec::new();
        let mut stack = Vec::new();

        while let Some(c) = src.peek() {
            if let Some(num) = self.read_operand(&mut src) {
                log::trace!("operand {}", num);
                out.push(Token::Operand(num));
            } else if let Some(op) = self.read_operator(&mut src) {
                while let Some(Token::Operator(top)) = stack.last() {
                    if !op.yields_to(top) {
                        break;
                    }
                    if let Some(top) = stack.pop() {
                        log::trace!("operator {}", top);
                        out.push(top);
                    }
                }
                stack.push(Token::Operator(op));
            } else if c == '(' {
                src.next();
                stack.push(Token::Paren(Side::Left));
            } else if c == ')' {
                src.next();
                loop {
                    match stack.pop() {
                        Some(Token::Paren(Side::Left)) => break,
                        Some(token) => out.push(token),
                        None => return Err(Error::parse("mismatched parentheses", expr)),
                    }
                }
            } else if c.is_whitespace() {
                src.skip_whitespace();
            } else {
                return Err(Error::parse(format!("invalid character '{}'", c), expr));
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                Token::Paren(_) => return Err(Error::parse("mismatched parentheses", expr)),
                token => out.push(token),
            }
        }
        let rpn = RPNExpr::new(expr, out);
        log::debug!("parsed '{}' as '{}'", expr, rpn);
        Ok(rpn)
    }

    /// Read a decimal number at the scanner position. On failure the
    /// scanner is left untouched, including for malformed numbers like
    /// a lone '.' or an integer that overflows i64.
    pub fn read_operand(&self, src: &mut Scanner) -> Option<Number> {
        let backtrack = src.pos();
        let text = src.scan_decimal()?;
        let num = if text.contains('.') {
            text.parse::<f64>().ok().map(Number::Float)
        } else {
            text.parse::<i64>().ok().map(Number::Integer)
        };
        if num.is_none() {
            src.set_pos(backtrack);
        }
        num
    }

    /// Read a single char operator owned by one of the factory providers.
    pub fn read_operator(&self, src: &mut Scanner) -> Option<Operator> {
        let c = src.peek().filter(|c| !c.is_whitespace())?;
        let op = self.factory.get_provider(c)?.create_operator(c)?;
        src.next();
        Some(op)
    }
}
