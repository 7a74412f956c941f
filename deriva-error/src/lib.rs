//! Contains the common [`Diagnostic`] trait used by all errors to display user-facing error
//! messages.
//!
//! Unlike error types that hide their identity behind a trait object, every error in the deriva
//! crates is a closed `enum`: callers that need to react to a *specific* failure (the CLI's
//! complex-domain fallback, for example) match on the variant directly instead of inspecting
//! message text. [`Diagnostic`] only covers the presentation side.

use ariadne::{Color, Report};
use std::{fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// An error that can be rendered as a report against the source text it came from.
pub trait Diagnostic: Debug {
    /// Builds the report for this error.
    fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)>;
}
