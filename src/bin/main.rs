use anyhow::Result;
use clap::Parser;
use poly_simplify::{simplify, Error, SELF_TEST_CASES};
use std::io::IsTerminal;

/// Expands and simplifies integer polynomials in x, y and z.
///
/// With no arguments, reads one expression per line from standard input.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Expressions to simplify, one result printed per expression
    #[arg(value_name = "EXPRESSION")]
    expressions: Vec<String>,

    /// Run the built-in table of known inputs and expected outputs
    #[arg(long, conflicts_with = "expressions")]
    self_test: bool,
}

fn render(result: Result<String, Error>) -> String {
    result.unwrap_or_else(|error| error.to_string())
}

fn self_test() -> bool {
    let mut passed = true;
    for (i, &(input, expected)) in SELF_TEST_CASES.iter().enumerate() {
        let result = render(simplify(input));
        let expected = expected.map_or_else(|| Error::InvalidExpression.to_string(), String::from);
        let ok = result == expected;
        passed &= ok;
        println!("==========\n{}\n{}", i + 1, if ok { "+" } else { "-" });
        println!("input:    {input}");
        println!("result:   {result}");
        println!("expected: {expected}");
    }
    passed
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.self_test {
        if !self_test() {
            anyhow::bail!("self-test failed");
        }
        return Ok(());
    }

    if !args.expressions.is_empty() {
        for expression in &args.expressions {
            println!("{}", render(simplify(expression)));
        }
        return Ok(());
    }

    let interactive = std::io::stdin().is_terminal();
    while let Some(line) = {
        use std::io::Write;

        if interactive {
            print!("> ");
            std::io::stdout().flush()?;
        }
        std::io::stdin().lines().next().transpose()?
    } {
        println!("{}", render(simplify(line.trim())));
    }
    Ok(())
}
