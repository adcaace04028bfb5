use std::sync::Arc;

use rpn::{
    operands, parse, parse_and_evaluate, parse_and_evaluate_as, try_parse_and_evaluate,
    try_parse_and_evaluate_as, ArithmeticProvider, Assoc, ErrorKind, Evaluator, Number,
    OperateError, Operator, OperatorProvider, ProviderFactory, ShuntingParser, Token,
};

#[test]
fn parse_helper() {
    let rpn = parse("3+4").unwrap();
    assert_eq!(rpn.to_string(), "3 4 +");
    assert_eq!(rpn.infix(), "3+4");
    assert_eq!(parse("(3+4").unwrap_err().kind(), ErrorKind::Parse);
}

#[test]
fn parse_and_evaluate_helpers() {
    assert_eq!(parse_and_evaluate("3+4").unwrap(), Number::Integer(7));
    assert_eq!(parse_and_evaluate_as::<i32>("3+4").unwrap(), 7);
    assert_eq!(parse_and_evaluate_as::<f32>("3+4").unwrap(), 7.0);
    assert_eq!(parse_and_evaluate_as::<f64>("7/2").unwrap(), 3.5);
    // 3.5 rounds half to even
    assert_eq!(parse_and_evaluate_as::<i64>("7/2").unwrap(), 4);
    assert_eq!(parse_and_evaluate_as::<i64>("5/2").unwrap(), 2);
    assert_eq!(parse_and_evaluate_as::<u64>("20!").unwrap(), 2432902008176640000);
}

#[test]
fn lossy_conversions() {
    let err = parse_and_evaluate_as::<u32>("3-4").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conversion);
    assert_eq!(err.to_string(), "cannot convert -1 to u32");

    assert_eq!(parse_and_evaluate_as::<i32>("2^40").unwrap_err().kind(), ErrorKind::Conversion);
    assert_eq!(parse_and_evaluate_as::<i64>("1/0").unwrap_err().kind(), ErrorKind::Conversion);
    assert_eq!(parse_and_evaluate_as::<i64>("0.0/0").unwrap_err().kind(), ErrorKind::Conversion);
}

#[test]
fn try_helpers() {
    assert_eq!(try_parse_and_evaluate("3+4"), Some(Number::Integer(7)));
    assert_eq!(try_parse_and_evaluate_as::<i32>("3+4"), Some(7));
    assert_eq!(try_parse_and_evaluate_as::<f32>("3+4"), Some(7.0));
    assert_eq!(try_parse_and_evaluate_as::<f64>("7/2"), Some(3.5));
    assert_eq!(try_parse_and_evaluate_as::<i64>("7/2"), Some(4));

    assert_eq!(try_parse_and_evaluate("3+4+"), None);
    assert_eq!(try_parse_and_evaluate("3+4)"), None);
    assert_eq!(try_parse_and_evaluate(""), None);
    assert_eq!(try_parse_and_evaluate_as::<u32>("0-1"), None);
}

// Bitwise-and on integers, with the multiplicative ranking
struct BitAnd;

impl OperatorProvider for BitAnd {
    fn can_create(&self, symbol: char) -> bool { symbol == '&' }

    fn create_operator(&self, symbol: char) -> Option<Operator> {
        if symbol == '&' { Some(Operator::new('&', Assoc::Left, 2, 2)) } else { None }
    }

    fn operate(&self, op: &Operator, args: &[Token]) -> Result<Number, OperateError> {
        let args = operands(op, args)?;
        Ok(Number::Integer(args[0].as_i64() & args[1].as_i64()))
    }
}

#[test]
fn extra_provider() {
    let providers = vec![
        Arc::new(ArithmeticProvider) as Arc<dyn OperatorProvider>,
        Arc::new(BitAnd) as Arc<dyn OperatorProvider>,
    ];
    let factory = Arc::new(ProviderFactory::new(providers).unwrap());
    let parser = ShuntingParser::with_factory(Arc::clone(&factory));
    let evaluator = Evaluator::with_factory(factory);

    let rpn = parser.parse("1 + 6 & 3").unwrap();
    assert_eq!(rpn.to_string(), "1 6 3 & +");
    assert_eq!(evaluator.eval(&rpn).unwrap(), Number::Integer(3));

    // the shared parser doesn't know about '&'
    assert_eq!(parse("6 & 3").unwrap_err().kind(), ErrorKind::Parse);
}

#[test]
fn evaluator_without_parser_provider() {
    let providers = vec![Arc::new(BitAnd) as Arc<dyn OperatorProvider>];
    let evaluator = Evaluator::with_providers(providers).unwrap();
    let rpn = parse("6 + 3").unwrap();
    let err = evaluator.eval(&rpn).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Evaluation);
    assert!(err.to_string().contains("no provider found for operator '+'"));

    assert_eq!(Evaluator::with_providers(Vec::new()).err().map(|e| e.kind()),
               Some(ErrorKind::Configuration));
}
