//! The expression tree and its simplifying constructors.
//!
//! [`Expr`] is a shared-ownership handle to an immutable [`Node`]. Because nodes only ever
//! reference sub-expressions created strictly before them, the graph is acyclic and plain
//! reference counting reclaims it.
//!
//! # Local simplification
//!
//! The arithmetic combinators ([`Add`], [`Sub`], [`Mul`], [`Div`], [`Neg`], [`Expr::pow`]) apply
//! a small, fixed set of identity-element rewrites at construction time and otherwise return an
//! existing operand unchanged, preserving sharing:
//!
//! - `a + 0` and `0 + a` become `a`; `-0` stays `0`
//! - `a * 0` and `0 * a` become `0`; `a * 1` and `1 * a` become `a`
//! - `a ^ 1` becomes `a`
//!
//! The checks are purely syntactic: the operand has to *be* the literal identity value, so
//! `x - x` or `x / x` are left alone. Division never simplifies, and division by zero is not
//! special-cased here at all; it surfaces at evaluation time with whatever semantics the domain
//! gives it (IEEE 754 infinities for `f64`). Function constructors always wrap.
//!
//! # Structural equality
//!
//! [`PartialEq`] compares tree *shape*: same node kind and recursively equal payloads. It is not
//! equality of the represented function; `x * y` and `y * x` are unequal.

use crate::domain::Scalar;
use num_traits::{One, Zero};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::Arc;

/// A single node of an expression tree.
#[derive(Debug, PartialEq)]
pub enum Node<N> {
    /// A constant, such as `2` or `1.5i`.
    Num(N),

    /// A free variable, such as `x`.
    Var(String),

    /// The sum of two expressions.
    Sum(Expr<N>, Expr<N>),

    /// The negation of an expression.
    Neg(Expr<N>),

    /// The product of two expressions.
    Mul(Expr<N>, Expr<N>),

    /// The quotient of two expressions.
    Div(Expr<N>, Expr<N>),

    /// An expression raised to a power.
    Pow(Expr<N>, Expr<N>),

    /// The sine of an expression.
    Sin(Expr<N>),

    /// The cosine of an expression.
    Cos(Expr<N>),

    /// The natural logarithm of an expression.
    Ln(Expr<N>),

    /// `e` raised to an expression.
    Exp(Expr<N>),
}

/// A shared, immutable handle to an expression node.
///
/// Cloning is cheap (a reference-count bump), and two expressions may share physical sub-trees;
/// this is intentional and exploited by [`Expr::substitute`]'s unchanged fast path.
#[derive(Debug)]
pub struct Expr<N>(Arc<Node<N>>);

impl<N> Clone for Expr<N> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

/// Structural equality, with a pointer-identity fast path for shared sub-trees.
impl<N: PartialEq> PartialEq for Expr<N> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl<N> Expr<N> {
    fn new(node: Node<N>) -> Self {
        Self(Arc::new(node))
    }

    /// A constant expression.
    pub fn number(value: N) -> Self {
        Self::new(Node::Num(value))
    }

    /// A free variable.
    pub fn var(name: impl Into<String>) -> Self {
        Self::new(Node::Var(name.into()))
    }

    /// Returns the node this handle points at.
    pub fn node(&self) -> &Node<N> {
        &self.0
    }

    /// Returns true if `self` and `other` are the same physical node.
    pub fn shares(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// The precedence class of this node, used only for rendering: `Sum` is 0, `Mul` 1, `Div` 2,
    /// `Pow` 3, and every atomic, unary, or function node 4. A child is parenthesized iff its
    /// class is strictly lower than its parent's.
    pub fn precedence(&self) -> u8 {
        match self.node() {
            Node::Sum(..) => 0,
            Node::Mul(..) => 1,
            Node::Div(..) => 2,
            Node::Pow(..) => 3,
            Node::Num(_)
            | Node::Var(_)
            | Node::Neg(_)
            | Node::Sin(_)
            | Node::Cos(_)
            | Node::Ln(_)
            | Node::Exp(_) => 4,
        }
    }

    /// If this is a `Num` node, returns the contained value.
    pub fn as_number(&self) -> Option<&N> {
        match self.node() {
            Node::Num(value) => Some(value),
            _ => None,
        }
    }
}

impl<N: Scalar> Expr<N> {
    fn is_zero(&self) -> bool {
        self.as_number().is_some_and(|n| n.is_zero())
    }

    fn is_one(&self) -> bool {
        self.as_number().is_some_and(|n| n.is_one())
    }

    /// Raises `self` to the given power. `a ^ 1` simplifies to `a`.
    pub fn pow(self, exponent: Self) -> Self {
        if exponent.is_one() {
            return self;
        }
        Self::new(Node::Pow(self, exponent))
    }

    /// The sine of `self`. Never simplifies.
    pub fn sin(self) -> Self {
        Self::new(Node::Sin(self))
    }

    /// The cosine of `self`. Never simplifies.
    pub fn cos(self) -> Self {
        Self::new(Node::Cos(self))
    }

    /// The natural logarithm of `self`. Never simplifies.
    pub fn ln(self) -> Self {
        Self::new(Node::Ln(self))
    }

    /// `e` raised to `self`. Never simplifies.
    pub fn exp(self) -> Self {
        Self::new(Node::Exp(self))
    }

    /// Replaces every occurrence of the variable `name` with `value`, returning the new tree.
    ///
    /// When the variable does not occur, the original handle is returned unchanged; unaffected
    /// sub-trees are shared with `self` rather than rebuilt.
    pub fn substitute(&self, name: &str, value: &Self) -> Self {
        self.substitute_maybe(name, value)
            .unwrap_or_else(|| self.clone())
    }

    /// Like [`Expr::substitute`], but reports whether anything changed: [`None`] means the
    /// variable does not occur anywhere below this node and the original handle can be reused.
    pub fn substitute_maybe(&self, name: &str, value: &Self) -> Option<Self> {
        // rebuilt branches go back through the simplifying combinators, so substituting an
        // identity value can collapse nodes
        let rebuild2 = |lhs: &Self, rhs: &Self, combine: fn(Self, Self) -> Self| {
            let new_lhs = lhs.substitute_maybe(name, value);
            let new_rhs = rhs.substitute_maybe(name, value);
            if new_lhs.is_none() && new_rhs.is_none() {
                return None;
            }
            Some(combine(
                new_lhs.unwrap_or_else(|| lhs.clone()),
                new_rhs.unwrap_or_else(|| rhs.clone()),
            ))
        };

        match self.node() {
            Node::Num(_) => None,
            Node::Var(var) => (var == name).then(|| value.clone()),
            Node::Sum(lhs, rhs) => rebuild2(lhs, rhs, |l, r| l + r),
            Node::Mul(lhs, rhs) => rebuild2(lhs, rhs, |l, r| l * r),
            Node::Div(lhs, rhs) => rebuild2(lhs, rhs, |l, r| l / r),
            Node::Pow(base, exp) => rebuild2(base, exp, Self::pow),
            Node::Neg(operand) => operand.substitute_maybe(name, value).map(|e| -e),
            Node::Sin(operand) => operand.substitute_maybe(name, value).map(Self::sin),
            Node::Cos(operand) => operand.substitute_maybe(name, value).map(Self::cos),
            Node::Ln(operand) => operand.substitute_maybe(name, value).map(Self::ln),
            Node::Exp(operand) => operand.substitute_maybe(name, value).map(Self::exp),
        }
    }
}

/// Builds a `Sum` node, unless either operand is the additive identity.
impl<N: Scalar> Add for Expr<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        if self.is_zero() {
            return rhs;
        }
        if rhs.is_zero() {
            return self;
        }
        Self::new(Node::Sum(self, rhs))
    }
}

/// `a - b` is `a + (-b)`; there is no dedicated subtraction node.
impl<N: Scalar> Sub for Expr<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

/// Builds a `Mul` node, unless an operand is the additive identity (absorbing) or the
/// multiplicative identity (neutral).
impl<N: Scalar> Mul for Expr<N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_zero() || rhs.is_one() {
            return self;
        }
        if rhs.is_zero() || self.is_one() {
            return rhs;
        }
        Self::new(Node::Mul(self, rhs))
    }
}

/// Always builds a `Div` node. Division by the additive identity is deliberately not caught
/// here; it follows the domain's own division semantics at evaluation time.
impl<N: Scalar> Div for Expr<N> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::new(Node::Div(self, rhs))
    }
}

/// Builds a `Neg` node, unless the operand is the additive identity.
impl<N: Scalar> Neg for Expr<N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.is_zero() {
            return self;
        }
        Self::new(Node::Neg(self))
    }
}
