//! The character-level scanner.
//!
//! Tokens carry their byte span and lexeme; whitespace is a token kind of its own and is skipped
//! by the parser, which uses the spans to tell whether two tokens were adjacent in the source
//! (the imaginary-literal suffix `1i` requires adjacency).

pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows the
/// parser to look ahead and backtrack freely.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(Ok(kind)) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind,
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(
        input: &'source str,
        expected: [(TokenKind, &'source str); N],
    ) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Number, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "2"),
            ],
        );
    }

    #[test]
    fn names_and_operators() {
        compare_tokens(
            "3x - sin(y2) ^ 2",
            [
                (TokenKind::Number, "3"),
                (TokenKind::Name, "x"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Sub, "-"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "sin"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "y2"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Caret, "^"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "2"),
            ],
        );
    }

    #[test]
    fn imaginary_literal_is_two_tokens() {
        compare_tokens(
            "1.5i",
            [(TokenKind::Number, "1.5"), (TokenKind::Name, "i")],
        );
    }

    #[test]
    fn scientific_notation() {
        compare_tokens("2.5e-3", [(TokenKind::Number, "2.5e-3")]);
        compare_tokens("1e10", [(TokenKind::Number, "1e10")]);

        // no exponent digits: the `e` is a name, as strtod would leave it
        compare_tokens(
            "2e",
            [(TokenKind::Number, "2"), (TokenKind::Name, "e")],
        );
    }

    #[test]
    fn unknown_characters() {
        compare_tokens(
            "1 $ 2",
            [
                (TokenKind::Number, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Unknown, "$"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "2"),
            ],
        );
    }
}
