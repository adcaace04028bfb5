mod repl {
    use rpn::{Evaluator, ShuntingParser};

    pub fn evalexpr(parser: &ShuntingParser, evaluator: &Evaluator, input: &str) {
        match parser.parse(input) {
            Err(e) => println!("Parse error: {}", e),
            Ok(expr) => match evaluator.eval(&expr) {
                Err(e) => println!("Eval error: {}", e),
                Ok(result) => println!("{} = {}", expr, result),
            },
        };
    }

    // ':rpn <expr>' only shows the postfix form
    pub fn parse_statement(parser: &ShuntingParser, evaluator: &Evaluator, input: &str) {
        match input.trim_start().strip_prefix(":rpn ") {
            Some(expr) => match parser.parse(expr) {
                Err(e) => println!("Parse error: {}", e),
                Ok(rpn) => println!("{}", rpn),
            },
            None => evalexpr(parser, evaluator, input),
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::builder().format_timestamp(None).init();

    let parser = rpn::ShuntingParser::new();
    let evaluator = rpn::Evaluator::new();

    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        repl::evalexpr(&parser, &evaluator, &input);
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let histpath = dirs::home_dir().map(|h| h.join(".rpn_history"));
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    if let Some(ref path) = histpath {
        if rl.load_history(path).is_err() {
            println!("No history yet");
        }
    }
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                if let Err(e) = rl.add_history_entry(line.as_str()) {
                    log::warn!("couldn't add history entry: {}", e);
                }
                repl::parse_statement(&parser, &evaluator, &line);
            }
        }
    }
    if let Some(ref path) = histpath {
        rl.save_history(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}
