//! End-to-end tests driving the full pipeline: parse, manipulate, then render or evaluate.

use assert_float_eq::assert_float_absolute_eq;
use deriva_expr::{EvalError, Expr};
use deriva_parser::{parse, ErrorKind};
use num_complex::Complex64;
use pretty_assertions::assert_eq;

#[test]
fn differentiate_product_of_variable_and_sine() {
    let expr = parse::<f64>("x * sin(x)").unwrap();
    assert_eq!(expr.differentiate("x").to_string(), "x * cos(x) + sin(x)");
}

#[test]
fn differentiate_square() {
    let expr = parse::<f64>("x ^ 2").unwrap();
    assert_eq!(expr.differentiate("x").to_string(), "x ^ 2 * 2 / x");
}

#[test]
fn literal_evaluates_to_itself() {
    assert_eq!(parse::<f64>("1").unwrap().eval(), Ok(1.0));
}

#[test]
fn substitution_binds_a_variable() {
    let a = parse::<f64>("a").unwrap();
    assert_eq!(a.eval(), Err(EvalError::UnboundVariable("a".into())));

    let one = parse::<f64>("1").unwrap();
    assert_eq!(a.substitute("a", &one).eval(), Ok(1.0));
}

#[test]
fn imaginary_literal_per_domain() {
    let value = parse::<Complex64>("1i").unwrap().eval().unwrap();
    assert_eq!(value, Complex64::new(0.0, 1.0));

    let err = parse::<f64>("1i").unwrap_err();
    assert_eq!(err.kind, ErrorKind::TrailingInput);
}

#[test]
fn division_by_zero_follows_the_domain() {
    let expr = parse::<f64>("a / 0").unwrap();
    let five = Expr::number(5.0);
    assert!(expr.substitute("a", &five).eval().unwrap().is_infinite());

    let expr = parse::<Complex64>("a / 0").unwrap();
    let five = Expr::number(Complex64::new(5.0, 0.0));
    let value = expr.substitute("a", &five).eval().unwrap();
    assert!(value.re.is_nan() || value.re.is_infinite());
}

#[test]
fn derivative_of_a_parsed_quotient() {
    let expr = parse::<f64>("x / y").unwrap();
    assert_eq!(expr.differentiate("y").to_string(), "-x / (y * y)");

    let derivative = expr.differentiate("x");
    assert_eq!(derivative.to_string(), "y / (y * y)");

    // the rendered derivative parses back to the same tree
    assert_eq!(parse::<f64>(&derivative.to_string()), Ok(derivative));
}

#[test]
fn evaluate_with_constants() {
    let value = parse::<f64>("sin(pi / 2) + ln(e)").unwrap().eval().unwrap();
    assert_float_absolute_eq!(value, 2.0);

    let value = parse::<Complex64>("exp(i * pi)").unwrap().eval().unwrap();
    assert_float_absolute_eq!(value.re, -1.0);
    assert_float_absolute_eq!(value.im, 0.0);
}
