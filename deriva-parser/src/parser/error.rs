//! Parse errors, with source spans for rich reporting.

use ariadne::{Fmt, Label, Report, ReportKind};
use deriva_error::{Diagnostic, EXPR};
use std::fmt::{self, Display, Formatter};
use std::ops::Range;

/// The different ways parsing can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A numeric literal could not be converted to a number.
    InvalidLiteral,

    /// A name was called like a function, but no function with that name exists.
    UnknownFunction(String),

    /// A function name appeared without a parenthesized argument.
    MissingArgument(String),

    /// An opening parenthesis was never closed.
    ExpectedCloseParen,

    /// A token appeared where the start of an expression was expected.
    UnexpectedToken,

    /// A complete expression was parsed, but input remained after it.
    TrailingInput,
}

/// A parse error, along with the region of the source code it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The region of the source code that this error applies to.
    pub span: Range<usize>,

    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given span and kind.
    pub fn new(span: Range<usize>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InvalidLiteral => write!(f, "invalid numeric literal"),
            ErrorKind::UnknownFunction(name) => write!(f, "unknown function: `{}`", name),
            ErrorKind::MissingArgument(name) => {
                write!(f, "missing argument for function: `{}`", name)
            }
            ErrorKind::ExpectedCloseParen => write!(f, "expected closing parenthesis"),
            ErrorKind::UnexpectedToken => write!(f, "unexpected token"),
            ErrorKind::TrailingInput => write!(f, "unexpected input after the expression"),
        }
    }
}

impl std::error::Error for Error {}

impl Diagnostic for Error {
    fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        let mut builder = Report::build(ReportKind::Error, src_id, self.span.start)
            .with_message(self.to_string());

        match &self.kind {
            ErrorKind::InvalidLiteral => {
                builder.add_label(
                    Label::new((src_id, self.span.clone()))
                        .with_message("this is not a valid number")
                        .with_color(EXPR),
                );
            }
            ErrorKind::UnknownFunction(name) => {
                builder.add_label(
                    Label::new((src_id, self.span.clone()))
                        .with_message(format!("no function named `{}`", name.fg(EXPR)))
                        .with_color(EXPR),
                );
                builder.set_help("available functions are `sin`, `cos`, `ln`, and `exp`");
            }
            ErrorKind::MissingArgument(name) => {
                builder.add_label(
                    Label::new((src_id, self.span.clone()))
                        .with_message("expected a parenthesized argument after this name")
                        .with_color(EXPR),
                );
                builder.set_help(format!("write `{}(...)`", name.fg(EXPR)));
            }
            ErrorKind::ExpectedCloseParen => {
                builder.add_label(
                    Label::new((src_id, self.span.clone()))
                        .with_message("expected `)` here")
                        .with_color(EXPR),
                );
            }
            ErrorKind::UnexpectedToken => {
                builder.add_label(
                    Label::new((src_id, self.span.clone()))
                        .with_message("expected the start of an expression here")
                        .with_color(EXPR),
                );
            }
            ErrorKind::TrailingInput => {
                builder.add_label(
                    Label::new((src_id, self.span.clone()))
                        .with_message("the expression ended before this input")
                        .with_color(EXPR),
                );
            }
        }

        builder.finish()
    }
}
