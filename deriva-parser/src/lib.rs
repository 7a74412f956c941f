//! Turns infix source text into [`deriva_expr::Expr`] trees.
//!
//! The [`tokenizer`] is a mechanical scanner built on `logos`; the [`parser`] is a
//! recursive-descent, precedence-climbing parser over its token buffer. Parsing is generic over
//! the numeric domain: the complex domain alone recognizes the imaginary-literal suffix `1i` and
//! the bare identifier `i`.
//!
//! ```
//! use deriva_parser::parse;
//!
//! let expr = parse::<f64>("x * sin(x)").unwrap();
//! assert_eq!(expr.differentiate("x").to_string(), "x * cos(x) + sin(x)");
//! ```

pub mod parser;
pub mod tokenizer;

pub use parser::{parse, parse_binding, Error, ErrorKind, Parser};
