//! Numeric evaluation of expression trees.

use crate::domain::Scalar;
use crate::expr::{Expr, Node};
use ariadne::{Report, ReportKind};
use deriva_error::Diagnostic;
use std::fmt;
use std::ops::Range;

/// An error raised while evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A variable with no substituted value was reached. Evaluation is only meaningful once every
    /// variable has been substituted by a constant.
    UnboundVariable(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundVariable(name) => write!(f, "cannot evaluate the unknown `{}`", name),
        }
    }
}

impl std::error::Error for EvalError {}

impl Diagnostic for EvalError {
    fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        let Self::UnboundVariable(name) = self;
        Report::build(ReportKind::Error, src_id, 0)
            .with_message(format!("cannot evaluate the unknown `{}`", name))
            .with_help(format!("substitute a value for `{}` first", name))
            .finish()
    }
}

impl<N: Scalar> Expr<N> {
    /// Evaluates this expression to a scalar.
    ///
    /// Fails with [`EvalError::UnboundVariable`] on the first variable reached; the error
    /// propagates unchanged to the caller, and no partial result is produced. Division follows
    /// the domain's own semantics, including division by zero.
    pub fn eval(&self) -> Result<N, EvalError> {
        match self.node() {
            Node::Num(value) => Ok(value.clone()),
            Node::Var(name) => Err(EvalError::UnboundVariable(name.clone())),
            Node::Sum(lhs, rhs) => Ok(lhs.eval()? + rhs.eval()?),
            Node::Neg(operand) => Ok(-operand.eval()?),
            Node::Mul(lhs, rhs) => Ok(lhs.eval()? * rhs.eval()?),
            Node::Div(lhs, rhs) => Ok(lhs.eval()? / rhs.eval()?),
            Node::Pow(base, exp) => Ok(base.eval()?.pow(&exp.eval()?)),
            Node::Sin(operand) => Ok(operand.eval()?.sin()),
            Node::Cos(operand) => Ok(operand.eval()?.cos()),
            Node::Ln(operand) => Ok(operand.eval()?.ln()),
            Node::Exp(operand) => Ok(operand.eval()?.exp()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::{assert_f64_near, assert_float_absolute_eq};
    use num_complex::Complex64;

    fn num(value: f64) -> Expr<f64> {
        Expr::number(value)
    }

    fn cnum(re: f64, im: f64) -> Expr<Complex64> {
        Expr::number(Complex64::new(re, im))
    }

    #[test]
    fn constants_evaluate_to_themselves() {
        assert_f64_near!(num(1.0).eval().unwrap(), 1.0);
        assert_f64_near!(num(-1.5).eval().unwrap(), -1.5);
    }

    #[test]
    fn arithmetic() {
        assert_f64_near!((num(2.0) * num(3.0)).eval().unwrap(), 6.0);
        assert_f64_near!((num(6.0) / num(3.0)).eval().unwrap(), 2.0);
        assert_f64_near!((num(2.0).pow(num(3.0))).eval().unwrap(), 8.0);
        assert_f64_near!((num(1.0) - num(1.0)).eval().unwrap(), 0.0);
        assert_f64_near!((-num(1.0)).eval().unwrap(), -1.0);
    }

    #[test]
    fn unbound_variable_fails() {
        let a = Expr::<f64>::var("a");
        assert_eq!(a.eval(), Err(EvalError::UnboundVariable("a".into())));

        // substituting a different name does not help
        let still_unbound = a.substitute("b", &num(1.0));
        assert_eq!(
            still_unbound.eval(),
            Err(EvalError::UnboundVariable("a".into()))
        );

        // the innermost unbound name is the one reported
        let nested = (num(2.0) * Expr::var("q")).sin();
        assert_eq!(nested.eval(), Err(EvalError::UnboundVariable("q".into())));
    }

    #[test]
    fn substitute_then_evaluate() {
        let a = Expr::<f64>::var("a");
        assert_f64_near!(a.substitute("a", &num(1.0)).eval().unwrap(), 1.0);

        let sum = Expr::<f64>::var("a") + Expr::var("b");
        let value = sum
            .substitute("a", &num(1.0))
            .substitute("b", &num(2.0))
            .eval()
            .unwrap();
        assert_f64_near!(value, 3.0);
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        let inf = (num(5.0) / num(0.0)).eval().unwrap();
        assert!(inf.is_infinite());

        let nan = (num(0.0) / num(0.0)).eval().unwrap();
        assert!(nan.is_nan());
    }

    #[test]
    fn transcendental_functions() {
        assert_float_absolute_eq!(num(0.0).sin().eval().unwrap(), 0.0);
        assert_float_absolute_eq!(num(0.0).cos().eval().unwrap(), 1.0);
        assert_float_absolute_eq!(num(1.0).ln().eval().unwrap(), 0.0);
        assert_float_absolute_eq!(num(1.0).exp().eval().unwrap(), std::f64::consts::E);
        assert_float_absolute_eq!(
            num(std::f64::consts::FRAC_PI_2).sin().eval().unwrap(),
            1.0
        );
    }

    #[test]
    fn complex_arithmetic() {
        let i = cnum(0.0, 1.0);

        let value = (i.clone() * i.clone()).eval().unwrap();
        assert_float_absolute_eq!(value.re, -1.0);
        assert_float_absolute_eq!(value.im, 0.0);

        let value = (i.clone() + cnum(1.0, 0.0)).eval().unwrap();
        assert_float_absolute_eq!(value.re, 1.0);
        assert_float_absolute_eq!(value.im, 1.0);

        let value = (i.clone() / i).eval().unwrap();
        assert_float_absolute_eq!(value.re, 1.0);
        assert_float_absolute_eq!(value.im, 0.0);
    }

    #[test]
    fn complex_transcendentals() {
        // sin(i) = i sinh(1)
        let value = cnum(0.0, 1.0).sin().eval().unwrap();
        assert_float_absolute_eq!(value.re, 0.0);
        assert_float_absolute_eq!(value.im, 1.0_f64.sinh());

        // ln(i) = i pi/2
        let value = cnum(0.0, 1.0).ln().eval().unwrap();
        assert_float_absolute_eq!(value.re, 0.0);
        assert_float_absolute_eq!(value.im, std::f64::consts::FRAC_PI_2);

        // exp(i) = cos(1) + i sin(1)
        let value = cnum(0.0, 1.0).exp().eval().unwrap();
        assert_float_absolute_eq!(value.re, 1.0_f64.cos());
        assert_float_absolute_eq!(value.im, 1.0_f64.sin());
    }
}
