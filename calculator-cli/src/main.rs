use anyhow::{Context, Result};
use calculator::interpreter::{calculate, to_postfix_string, ERROR_OUTPUT};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::LevelFilter;
use std::env;
use std::io;
use std::io::{BufRead, Write};

/// Calculates the value of arithmetic expressions made of numbers and + - * /
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expressions to calculate. Read line by line from standard input if none are given.
    /// Pass expressions starting with a minus after `--`, e.g. `-- -5+3`
    expressions: Vec<String>,

    /// Print the postfix form of each expression instead of its value
    #[clap(long)]
    postfix: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();

    let mut logger = env_logger::Builder::from_default_env();
    let log_filter_set = env::var_os(env_logger::DEFAULT_FILTER_ENV).is_some();
    if let Some(level) = verbosity_level(&args, log_filter_set) {
        logger.filter_level(level);
    }
    logger.init();

    let stdout = io::stdout();
    let mut output = stdout.lock();

    if args.expressions.is_empty() {
        log::info!("reading expressions from standard input");
        for line in io::stdin().lock().lines() {
            let expression = line.context("Failed to read expression from standard input")?;
            print_result(&mut output, &expression, args.postfix)?;
        }
    } else {
        for expression in &args.expressions {
            print_result(&mut output, expression, args.postfix)?;
        }
    }

    Ok(())
}

/// The level given by `-v`/`-q`, unless `RUST_LOG` already configures logging.
fn verbosity_level(args: &Arguments, log_filter_set: bool) -> Option<LevelFilter> {
    if log_filter_set {
        None
    } else {
        Some(args.verbose.log_level_filter())
    }
}

fn print_result(output: &mut impl Write, expression: &str, postfix: bool) -> Result<()> {
    let result = if postfix {
        to_postfix_string(expression).unwrap_or_else(|error| {
            log::error!("could not convert '{}': {}", expression, error);
            ERROR_OUTPUT.to_string()
        })
    } else {
        calculate(expression)
    };
    writeln!(output, "{}", result).context("Failed to write result")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printed(expression: &str, postfix: bool) -> String {
        let mut output = Vec::new();
        print_result(&mut output, expression, postfix).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn result_is_printed_on_its_own_line() {
        assert_eq!(printed("10-2*3", false), "4\n");
        assert_eq!(printed("", false), "0\n");
        assert_eq!(printed("3+*2", false), "Error\n");
    }

    #[test]
    fn postfix_form_is_printed_on_request() {
        assert_eq!(printed("10-2*3", true), "10 2 3 * -\n");
    }

    #[test]
    fn negative_expression_is_passed_after_double_dash() {
        let args = Arguments::try_parse_from(["calculator-cli", "--", "-5+3"]).unwrap();
        assert_eq!(args.expressions, vec!["-5+3".to_string()]);
    }

    #[test]
    fn verbosity_flag_before_expression_raises_log_level() {
        let args = Arguments::try_parse_from(["calculator-cli", "-v", "1+1"]).unwrap();

        assert_eq!(args.expressions, vec!["1+1".to_string()]);
        assert_eq!(args.verbose.log_level_filter(), LevelFilter::Warn);
        assert_eq!(verbosity_level(&args, false), Some(LevelFilter::Warn));
    }

    #[test]
    fn trailing_postfix_flag_is_not_an_expression() {
        let args = Arguments::try_parse_from(["calculator-cli", "2+3", "--postfix"]).unwrap();

        assert_eq!(args.expressions, vec!["2+3".to_string()]);
        assert!(args.postfix);
    }

    #[test]
    fn rust_log_takes_precedence_over_verbosity_flags() {
        let args = Arguments::try_parse_from(["calculator-cli", "-vv", "1+1"]).unwrap();

        assert_eq!(verbosity_level(&args, true), None);
        assert_eq!(verbosity_level(&args, false), Some(LevelFilter::Info));
    }
}
