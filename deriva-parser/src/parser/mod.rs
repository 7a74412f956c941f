//! The recursive-descent parser.
//!
//! The grammar, lowest precedence first:
//!
//! ```text
//! sum     := product (("+" | "-") product)*
//! product := power (("*" | "/") power)*
//! power   := unary ("^" power)?
//! unary   := "-" unary | atom
//! atom    := number | name | name "(" sum ")" | "(" sum ")"
//! ```
//!
//! There is no subtraction node: `a - b` parses as `a + (-b)`. Expressions are built with the
//! simplifying constructors of [`deriva_expr::Expr`], so identity operands vanish during parsing
//! (`x + 0` parses to the same tree as `x`).

pub mod error;

use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use deriva_expr::{Expr, Scalar};
use std::ops::Range;

pub use error::{Error, ErrorKind};

/// A parser over a buffer of tokens.
///
/// The parser itself is not generic; the numeric domain is chosen per parse call, so one token
/// buffer can be parsed in the real domain and reparsed in the complex domain.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens of the source expression.
    tokens: Box<[Token<'source>]>,

    /// The index of the next token to examine.
    cursor: usize,

    /// The length of the source expression, in bytes.
    eof: usize,
}

impl<'source> Parser<'source> {
    /// Creates a new parser for the given source expression.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
            eof: source.len(),
        }
    }

    /// An empty span at the end of the source.
    fn eof_span(&self) -> Range<usize> {
        self.eof..self.eof
    }

    /// The span of the next non-whitespace token, or the end of the source.
    fn peek_span(&self) -> Range<usize> {
        self.peek().map_or_else(|| self.eof_span(), |token| token.span)
    }

    /// Returns the next non-whitespace token without consuming it.
    fn peek(&self) -> Option<Token<'source>> {
        self.tokens[self.cursor..]
            .iter()
            .find(|token| !token.is_whitespace())
            .cloned()
    }

    /// Consumes and returns the next non-whitespace token.
    fn advance(&mut self) -> Option<Token<'source>> {
        while let Some(token) = self.tokens.get(self.cursor) {
            self.cursor += 1;
            if !token.is_whitespace() {
                return Some(token.clone());
            }
        }

        None
    }

    /// Consumes the next non-whitespace token if it has the given kind.
    fn eat(&mut self, kind: TokenKind) -> Option<Token<'source>> {
        match self.peek() {
            Some(token) if token.kind == kind => self.advance(),
            _ => None,
        }
    }

    /// Parses the entire source as one expression, failing with
    /// [`ErrorKind::TrailingInput`] if any tokens remain after it.
    pub fn parse_full<N: Scalar>(&mut self) -> Result<Expr<N>, Error> {
        let expr = self.parse_sum()?;
        match self.peek() {
            Some(token) => Err(Error::new(
                token.span.start..self.eof,
                ErrorKind::TrailingInput,
            )),
            None => Ok(expr),
        }
    }

    /// Parses the entire source as a `name = expr` binding.
    pub fn parse_binding_full<N: Scalar>(&mut self) -> Result<(String, Expr<N>), Error> {
        let name = match self.advance() {
            Some(token) if token.kind == TokenKind::Name => token.lexeme.to_string(),
            Some(token) => return Err(Error::new(token.span, ErrorKind::UnexpectedToken)),
            None => return Err(Error::new(self.eof_span(), ErrorKind::UnexpectedToken)),
        };

        if self.eat(TokenKind::Assign).is_none() {
            return Err(Error::new(self.peek_span(), ErrorKind::UnexpectedToken));
        }

        let value = self.parse_full()?;
        Ok((name, value))
    }

    fn parse_sum<N: Scalar>(&mut self) -> Result<Expr<N>, Error> {
        let mut lhs = self.parse_product()?;

        loop {
            if self.eat(TokenKind::Add).is_some() {
                lhs = lhs + self.parse_product()?;
            } else if self.eat(TokenKind::Sub).is_some() {
                lhs = lhs - self.parse_product()?;
            } else {
                return Ok(lhs);
            }
        }
    }

    fn parse_product<N: Scalar>(&mut self) -> Result<Expr<N>, Error> {
        let mut lhs = self.parse_power()?;

        loop {
            if self.eat(TokenKind::Mul).is_some() {
                lhs = lhs * self.parse_power()?;
            } else if self.eat(TokenKind::Div).is_some() {
                lhs = lhs / self.parse_power()?;
            } else {
                return Ok(lhs);
            }
        }
    }

    /// Exponentiation is right-associative: `x ^ y ^ z` is `x ^ (y ^ z)`.
    fn parse_power<N: Scalar>(&mut self) -> Result<Expr<N>, Error> {
        let base = self.parse_unary()?;

        if self.eat(TokenKind::Caret).is_some() {
            Ok(base.pow(self.parse_power()?))
        } else {
            Ok(base)
        }
    }

    fn parse_unary<N: Scalar>(&mut self) -> Result<Expr<N>, Error> {
        if self.eat(TokenKind::Sub).is_some() {
            Ok(-self.parse_unary()?)
        } else {
            self.parse_atom()
        }
    }

    fn parse_atom<N: Scalar>(&mut self) -> Result<Expr<N>, Error> {
        let Some(token) = self.advance() else {
            return Err(Error::new(self.eof_span(), ErrorKind::UnexpectedToken));
        };

        match token.kind {
            TokenKind::Number => self.parse_number(token),
            TokenKind::Name => self.parse_name(token),
            TokenKind::OpenParen => {
                let inner = self.parse_sum()?;
                if self.eat(TokenKind::CloseParen).is_none() {
                    return Err(Error::new(self.peek_span(), ErrorKind::ExpectedCloseParen));
                }

                Ok(inner)
            }
            _ => Err(Error::new(token.span, ErrorKind::UnexpectedToken)),
        }
    }

    /// Parses a numeric literal.
    ///
    /// In a domain with an imaginary unit, a literal directly followed by `i` (no whitespace
    /// between them) is an imaginary literal: `1.5i` is `1.5 * i`, but `1.5 i` is not.
    fn parse_number<N: Scalar>(&mut self, token: Token<'source>) -> Result<Expr<N>, Error> {
        let decimal = token
            .lexeme
            .parse::<f64>()
            .map_err(|_| Error::new(token.span.clone(), ErrorKind::InvalidLiteral))?;
        let mut value = N::from_decimal(decimal);

        if let Some(unit) = N::imaginary_unit() {
            let adjacent_i = self.tokens.get(self.cursor).is_some_and(|next| {
                next.kind == TokenKind::Name
                    && next.lexeme == "i"
                    && next.span.start == token.span.end
            });
            if adjacent_i {
                self.cursor += 1;
                value = value * unit;
            }
        }

        Ok(Expr::number(value))
    }

    /// Parses a name: a function call, a named constant, or a variable.
    fn parse_name<N: Scalar>(&mut self, token: Token<'source>) -> Result<Expr<N>, Error> {
        if let "sin" | "cos" | "ln" | "exp" = token.lexeme {
            if self.eat(TokenKind::OpenParen).is_none() {
                return Err(Error::new(
                    token.span,
                    ErrorKind::MissingArgument(token.lexeme.to_string()),
                ));
            }

            let arg = self.parse_sum()?;
            if self.eat(TokenKind::CloseParen).is_none() {
                return Err(Error::new(self.peek_span(), ErrorKind::ExpectedCloseParen));
            }

            return Ok(match token.lexeme {
                "sin" => arg.sin(),
                "cos" => arg.cos(),
                "ln" => arg.ln(),
                _ => arg.exp(),
            });
        }

        // any other name directly followed by `(` is a call to a function we don't have
        if self.peek().is_some_and(|next| next.kind == TokenKind::OpenParen) {
            return Err(Error::new(
                token.span,
                ErrorKind::UnknownFunction(token.lexeme.to_string()),
            ));
        }

        match token.lexeme {
            "pi" => Ok(Expr::number(N::pi())),
            "e" => Ok(Expr::number(N::e())),
            "i" => match N::imaginary_unit() {
                Some(unit) => Ok(Expr::number(unit)),
                None => Ok(Expr::var(token.lexeme)),
            },
            name => Ok(Expr::var(name)),
        }
    }
}

/// Parses the given source expression in the numeric domain `N`.
pub fn parse<N: Scalar>(source: &str) -> Result<Expr<N>, Error> {
    Parser::new(source).parse_full()
}

/// Parses a `name = expr` binding, as used for variable assignments.
pub fn parse_binding<N: Scalar>(source: &str) -> Result<(String, Expr<N>), Error> {
    Parser::new(source).parse_binding_full()
}
