//! Immutable symbolic expression trees over a generic numeric domain.
//!
//! The central type is [`Expr`], a cheaply clonable, reference-counted handle to an immutable
//! tree node. Trees are built either by a parser or through the simplifying combinators on
//! [`Expr`] (the `std::ops` impls plus [`Expr::pow`] and the function constructors), and support
//! four operations: numeric evaluation, substitution of a variable by a sub-expression, symbolic
//! differentiation, and canonical infix rendering via [`Display`](std::fmt::Display).
//!
//! Every operation returns a *new* tree (or the original handle unchanged); no node is ever
//! mutated after construction, so trees can be shared freely, including across threads.
//!
//! The scalar type the tree ranges over is abstracted by [`Scalar`], implemented for `f64` and
//! [`Complex64`](num_complex::Complex64).

pub mod derivative;
pub mod domain;
pub mod eval;
pub mod expr;
mod fmt;

pub use domain::Scalar;
pub use eval::EvalError;
pub use expr::Expr;
