mod error;

use clap::{Parser, Subcommand};
use deriva_expr::Expr;
use deriva_parser::{parse, parse_binding, ErrorKind};
use error::Error;
use num_complex::Complex64;
use std::process::ExitCode;

/// A symbolic calculator: parse, evaluate, and differentiate expressions over the real or
/// complex numbers.
///
/// Expressions start out in the real domain. The complex domain is selected when a binding has a
/// nonzero imaginary part, or when the expression itself only parses with imaginary literals
/// (`1i` or the constant `i`).
#[derive(Parser)]
#[command(name = "deriva", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluates an expression, after substituting the given variable bindings.
    Eval {
        /// The expression to evaluate.
        expr: String,

        /// Variable bindings, written as `name=value`. The value can itself be any constant
        /// expression, such as `x=1+2i`.
        bindings: Vec<String>,
    },

    /// Differentiates an expression with respect to a variable and prints the derivative.
    Diff {
        /// The expression to differentiate.
        expr: String,

        /// The variable to differentiate with respect to.
        #[arg(long)]
        by: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Eval { expr, bindings } => run_eval(&expr, &bindings),
        Command::Diff { expr, by } => run_diff(&expr, &by),
    }
}

/// Reports the error against the input it came from, and exits with failure.
fn fail(err: Error, input: &str) -> ExitCode {
    err.report_to_stderr(input);
    ExitCode::FAILURE
}

/// Parses and evaluates each `name=value` binding in the complex domain; real values are complex
/// values with a zero imaginary part.
fn eval_bindings(bindings: &[String]) -> Result<Vec<(String, Complex64)>, ExitCode> {
    let mut values = Vec::with_capacity(bindings.len());

    for binding in bindings {
        let (name, value) = match parse_binding::<Complex64>(binding) {
            Ok(pair) => pair,
            Err(err) => return Err(fail(err.into(), binding)),
        };
        match value.eval() {
            Ok(value) => values.push((name, value)),
            Err(err) => return Err(fail(err.into(), binding)),
        }
    }

    Ok(values)
}

fn run_eval(input: &str, bindings: &[String]) -> ExitCode {
    let values = match eval_bindings(bindings) {
        Ok(values) => values,
        Err(code) => return code,
    };
    let complex = values.iter().any(|(_, value)| value.im != 0.0);

    if !complex {
        match parse::<f64>(input) {
            Ok(expr) => return eval_real(expr, &values, input),
            // `1i` parses as `1` followed by trailing input; retry in the complex domain
            Err(err) if err.kind == ErrorKind::TrailingInput => (),
            Err(err) => return fail(err.into(), input),
        }
    }

    match parse::<Complex64>(input) {
        Ok(expr) => eval_complex(expr, &values, input),
        Err(err) => fail(err.into(), input),
    }
}

fn eval_real(mut expr: Expr<f64>, values: &[(String, Complex64)], input: &str) -> ExitCode {
    for (name, value) in values {
        expr = expr.substitute(name, &Expr::number(value.re));
    }

    match expr.eval() {
        Ok(value) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        Err(err) => fail(err.into(), input),
    }
}

fn eval_complex(mut expr: Expr<Complex64>, values: &[(String, Complex64)], input: &str) -> ExitCode {
    for (name, value) in values {
        expr = expr.substitute(name, &Expr::number(*value));
    }

    match expr.eval() {
        Ok(value) => {
            println!("{} + {}i", value.re, value.im);
            ExitCode::SUCCESS
        }
        Err(err) => fail(err.into(), input),
    }
}

fn run_diff(input: &str, by: &str) -> ExitCode {
    match parse::<f64>(input) {
        Ok(expr) => {
            println!("{}", expr.differentiate(by));
            return ExitCode::SUCCESS;
        }
        Err(err) if err.kind == ErrorKind::TrailingInput => (),
        Err(err) => return fail(err.into(), input),
    }

    match parse::<Complex64>(input) {
        Ok(expr) => {
            println!("{}", expr.differentiate(by));
            ExitCode::SUCCESS
        }
        Err(err) => fail(err.into(), input),
    }
}
