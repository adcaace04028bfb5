//! Errors raised while parsing, evaluating, or configuring the engine.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    Parse,
    Evaluation,
    Configuration,
    Conversion,
}

#[derive(Debug, Error)]
pub enum Error {
    /// The infix text is malformed: mismatched parens or a stray char.
    #[error("{message} (in '{expression}')")]
    Parse { message: String, expression: String },

    /// The postfix sequence could not be reduced to a single operand.
    #[error("{message} (in '{expression}', rpn '{rpn}')")]
    Evaluation {
        message: String,
        expression: String,
        rpn: String,
        #[source]
        source: Option<OperateError>,
    },

    /// A factory, parser or evaluator was built without any provider.
    #[error("{message}")]
    Configuration { message: String },

    /// The result can't be represented by the requested numeric type.
    #[error("cannot convert {value} to {target}")]
    Conversion { value: String, target: &'static str },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match *self {
            Error::Parse { .. } => ErrorKind::Parse,
            Error::Evaluation { .. } => ErrorKind::Evaluation,
            Error::Configuration { .. } => ErrorKind::Configuration,
            Error::Conversion { .. } => ErrorKind::Conversion,
        }
    }

    /// The infix expression that produced this error, when there is one.
    pub fn expression(&self) -> Option<&str> {
        match *self {
            Error::Parse { ref expression, .. } => Some(expression.as_str()),
            Error::Evaluation { ref expression, .. } => Some(expression.as_str()),
            _ => None,
        }
    }

    pub(crate) fn parse(message: impl Into<String>, expression: &str) -> Error {
        Error::Parse { message: message.into(), expression: expression.to_string() }
    }

    pub(crate) fn no_providers() -> Error {
        Error::Configuration {
            message: "at least one operator provider is required".to_string(),
        }
    }
}

/// Failures raised by an `OperatorProvider` while applying an operator.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OperateError {
    #[error("operator '{symbol}' expects {expected} arguments, got {got}")]
    ArgumentCount { symbol: char, expected: usize, got: usize },

    #[error("operator '{symbol}' received a non-operand argument")]
    NotOperand { symbol: char },

    #[error("operator '{symbol}' is not implemented by this provider")]
    Unsupported { symbol: char },

    #[error("integer overflow applying '{symbol}'")]
    Overflow { symbol: char },

    #[error("integer division by zero applying '{symbol}'")]
    DivideByZero { symbol: char },
}
