//! The numeric domains an expression tree can range over.
//!
//! A domain is any type implementing [`Scalar`]: arithmetic, comparison against the additive and
//! multiplicative identities (via [`Zero`] and [`One`]), the four transcendental functions the
//! engine knows about, and the constants `pi` and `e`. Two domains are provided, `f64` and
//! [`Complex64`].
//!
//! The complex domain is distinguished from the real one by a single hook,
//! [`Scalar::imaginary_unit`]: the parser only recognizes the `i` suffix on literals and the bare
//! identifier `i` in domains that return `Some` from it.

use num_complex::Complex64;
use num_traits::{One, Zero};
use std::f64::consts;
use std::fmt;
use std::ops::{Div, Neg, Sub};

/// A scalar type expressions can be evaluated into.
pub trait Scalar:
    Zero
    + One
    + Neg<Output = Self>
    + Sub<Output = Self>
    + Div<Output = Self>
    + Clone
    + PartialEq
    + fmt::Debug
{
    /// Raises `self` to the given power.
    fn pow(&self, exp: &Self) -> Self;

    /// The sine of `self`.
    fn sin(&self) -> Self;

    /// The cosine of `self`.
    fn cos(&self) -> Self;

    /// The natural logarithm of `self`.
    fn ln(&self) -> Self;

    /// `e` raised to the power of `self`.
    fn exp(&self) -> Self;

    /// The circle constant.
    fn pi() -> Self;

    /// Euler's number.
    fn e() -> Self;

    /// Converts a decimal literal into this domain.
    fn from_decimal(value: f64) -> Self;

    /// The imaginary unit of the domain, if it has one. The default implementation returns
    /// [`None`]; only domains that return `Some` accept imaginary literals when parsing.
    fn imaginary_unit() -> Option<Self> {
        None
    }

    /// Writes `self` the way a `Number` node renders inside an expression.
    fn fmt_scalar(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl Scalar for f64 {
    fn pow(&self, exp: &Self) -> Self {
        self.powf(*exp)
    }

    fn sin(&self) -> Self {
        f64::sin(*self)
    }

    fn cos(&self) -> Self {
        f64::cos(*self)
    }

    fn ln(&self) -> Self {
        f64::ln(*self)
    }

    fn exp(&self) -> Self {
        f64::exp(*self)
    }

    fn pi() -> Self {
        consts::PI
    }

    fn e() -> Self {
        consts::E
    }

    fn from_decimal(value: f64) -> Self {
        value
    }

    fn fmt_scalar(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Scalar for Complex64 {
    fn pow(&self, exp: &Self) -> Self {
        self.powc(*exp)
    }

    fn sin(&self) -> Self {
        Complex64::sin(*self)
    }

    fn cos(&self) -> Self {
        Complex64::cos(*self)
    }

    fn ln(&self) -> Self {
        Complex64::ln(*self)
    }

    fn exp(&self) -> Self {
        Complex64::exp(*self)
    }

    fn pi() -> Self {
        Complex64::new(consts::PI, 0.0)
    }

    fn e() -> Self {
        Complex64::new(consts::E, 0.0)
    }

    fn from_decimal(value: f64) -> Self {
        Complex64::new(value, 0.0)
    }

    fn imaginary_unit() -> Option<Self> {
        Some(Complex64::i())
    }

    /// A pure-imaginary value renders as `<im>i`, a pure-real one as `<re>`, and anything else as
    /// `(<re> + <im>i)` so the surrounding expression stays unambiguous.
    fn fmt_scalar(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.re == 0.0 {
            write!(f, "{}i", self.im)
        } else if self.im == 0.0 {
            write!(f, "{}", self.re)
        } else {
            write!(f, "({} + {}i)", self.re, self.im)
        }
    }
}
