//! Symbolic differentiation.
//!
//! One structural rewrite rule per node kind, recursing into children and recombining through
//! the simplifying combinators in [`expr`](crate::expr), so intermediate zero and one terms
//! introduced by the rules are pruned as the result is built. No further simplification is
//! attempted; `d/dx x*x` comes out as `x + x`, not `2 * x`.

use crate::domain::Scalar;
use crate::expr::{Expr, Node};

impl<N: Scalar> Expr<N> {
    /// Returns a new tree for the derivative of this expression with respect to `name`.
    ///
    /// The power rule is the generalized `d(f^g) = f^g * (g*f'/f + g'*ln f)`, valid for constant
    /// and variable exponents alike. It is numerically unsound when `f` evaluates to zero or to a
    /// non-positive real (the `ln` leaves its domain); this is a known limitation.
    pub fn differentiate(&self, name: &str) -> Self {
        match self.node() {
            Node::Num(_) => Expr::number(N::zero()),
            Node::Var(var) => {
                if var == name {
                    Expr::number(N::one())
                } else {
                    Expr::number(N::zero())
                }
            }
            Node::Sum(lhs, rhs) => lhs.differentiate(name) + rhs.differentiate(name),
            Node::Neg(operand) => -operand.differentiate(name),
            Node::Mul(lhs, rhs) => {
                lhs.clone() * rhs.differentiate(name) + rhs.clone() * lhs.differentiate(name)
            }
            Node::Div(lhs, rhs) => {
                (rhs.clone() * lhs.differentiate(name) - lhs.clone() * rhs.differentiate(name))
                    / (rhs.clone() * rhs.clone())
            }
            Node::Pow(base, exponent) => {
                base.clone().pow(exponent.clone())
                    * (exponent.clone() * base.differentiate(name) / base.clone()
                        + exponent.differentiate(name) * base.clone().ln())
            }
            Node::Sin(operand) => operand.clone().cos() * operand.differentiate(name),
            Node::Cos(operand) => -operand.clone().sin() * operand.differentiate(name),
            Node::Ln(operand) => operand.differentiate(name) / operand.clone(),
            Node::Exp(operand) => operand.clone().exp() * operand.differentiate(name),
        }
    }
}
