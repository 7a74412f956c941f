use ariadne::Source;
use deriva_error::Diagnostic;
use deriva_expr::EvalError;
use deriva_parser::Error as ParseError;

/// Utility enum to package errors that can occur while parsing / evaluating.
pub enum Error {
    /// An error that occurred while parsing.
    Parse(ParseError),

    /// An error that occurred while evaluating.
    Eval(EvalError),
}

impl Error {
    /// Report the error in this [`Error`] to stderr.
    ///
    /// The `ariadne` crate's [`Report`](ariadne::Report) type actually does not have a `Display`
    /// implementation, so we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, input: &str) {
        let report = match self {
            Self::Parse(err) => err.build_report("input"),
            Self::Eval(err) => err.build_report("input"),
        };
        report.eprint(("input", Source::from(input))).unwrap();
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        Self::Eval(err)
    }
}
