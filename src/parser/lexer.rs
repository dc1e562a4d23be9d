//! Lexer (tokenizer) for msdscript source text
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! Keywords are spelled with a leading underscore (`_let`, `_if`, ...) so they
//! can never collide with variable names, which are plain ASCII letters.

use super::ast::SourceLocation;
use std::fmt;
use thiserror::Error;

/// All token variants produced by the lexer.
///
/// Every variant carries a [`SourceLocation`] so that parse errors can report
/// an accurate line and column without a separate token→location table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // Literals
    Number(i32, SourceLocation),

    // Identifiers
    Ident(String, SourceLocation),

    // Keywords
    Let(SourceLocation),
    In(SourceLocation),
    If(SourceLocation),
    Then(SourceLocation),
    Else(SourceLocation),
    True(SourceLocation),
    False(SourceLocation),

    // Operators
    Plus(SourceLocation), // +
    Star(SourceLocation), // *
    EqEq(SourceLocation), // ==
    Eq(SourceLocation),   // =

    // Punctuation
    LParen(SourceLocation), // (
    RParen(SourceLocation), // )

    // End of input
    Eof(SourceLocation),
}

impl Token {
    /// Returns the source location where this token appears.
    pub fn location(&self) -> SourceLocation {
        match self {
            Token::Number(_, loc)
            | Token::Ident(_, loc)
            | Token::Let(loc)
            | Token::In(loc)
            | Token::If(loc)
            | Token::Then(loc)
            | Token::Else(loc)
            | Token::True(loc)
            | Token::False(loc)
            | Token::Plus(loc)
            | Token::Star(loc)
            | Token::EqEq(loc)
            | Token::Eq(loc)
            | Token::LParen(loc)
            | Token::RParen(loc)
            | Token::Eof(loc) => *loc,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n, _) => write!(f, "number {}", n),
            Token::Ident(s, _) => write!(f, "identifier '{}'", s),
            Token::Let(_) => write!(f, "'_let'"),
            Token::In(_) => write!(f, "'_in'"),
            Token::If(_) => write!(f, "'_if'"),
            Token::Then(_) => write!(f, "'_then'"),
            Token::Else(_) => write!(f, "'_else'"),
            Token::True(_) => write!(f, "'_true'"),
            Token::False(_) => write!(f, "'_false'"),
            Token::Plus(_) => write!(f, "'+'"),
            Token::Star(_) => write!(f, "'*'"),
            Token::EqEq(_) => write!(f, "'=='"),
            Token::Eq(_) => write!(f, "'='"),
            Token::LParen(_) => write!(f, "'('"),
            Token::RParen(_) => write!(f, "')'"),
            Token::Eof(_) => write!(f, "end of input"),
        }
    }
}

/// What went wrong while tokenizing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),

    #[error("unknown keyword '{0}'")]
    UnknownKeyword(String),

    #[error("expected a digit after '-'")]
    MissingDigits,

    #[error("integer literal {0} is out of range")]
    InvalidNumber(String),
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {location}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub location: SourceLocation,
}

/// Lexer for msdscript source text
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input. The result always ends with [`Token::Eof`].
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_at_end() {
                tokens.push(Token::Eof(self.current_location()));
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token, LexError> {
        let loc = self.current_location();
        let Some(ch) = self.advance() else {
            return Ok(Token::Eof(loc));
        };

        match ch {
            '0'..='9' => self.number_literal(ch, loc),
            '-' => {
                if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.number_literal(ch, loc)
                } else {
                    Err(LexError {
                        kind: LexErrorKind::MissingDigits,
                        location: loc,
                    })
                }
            }

            'a'..='z' | 'A'..='Z' => Ok(Token::Ident(self.take_word(ch), loc)),
            '_' => self.keyword(loc),

            '+' => Ok(Token::Plus(loc)),
            '*' => Ok(Token::Star(loc)),
            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::EqEq(loc))
                } else {
                    Ok(Token::Eq(loc))
                }
            }
            '(' => Ok(Token::LParen(loc)),
            ')' => Ok(Token::RParen(loc)),

            _ => Err(LexError {
                kind: LexErrorKind::UnexpectedChar(ch),
                location: loc,
            }),
        }
    }

    /// Parse an integer literal; `first` is either a digit or a leading '-'
    fn number_literal(
        &mut self,
        first: char,
        loc: SourceLocation,
    ) -> Result<Token, LexError> {
        let mut num_str = String::new();
        num_str.push(first);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                num_str.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let value = num_str.parse::<i32>().map_err(|_| LexError {
            kind: LexErrorKind::InvalidNumber(num_str.clone()),
            location: loc,
        })?;

        Ok(Token::Number(value, loc))
    }

    /// Parse a keyword; the leading '_' has already been consumed
    fn keyword(&mut self, loc: SourceLocation) -> Result<Token, LexError> {
        let word = match self.peek() {
            Some(ch) if ch.is_ascii_alphabetic() => {
                self.advance();
                self.take_word(ch)
            }
            _ => String::new(),
        };

        match word.as_str() {
            "let" => Ok(Token::Let(loc)),
            "in" => Ok(Token::In(loc)),
            "if" => Ok(Token::If(loc)),
            "then" => Ok(Token::Then(loc)),
            "else" => Ok(Token::Else(loc)),
            "true" => Ok(Token::True(loc)),
            "false" => Ok(Token::False(loc)),
            _ => Err(LexError {
                kind: LexErrorKind::UnknownKeyword(format!("_{}", word)),
                location: loc,
            }),
        }
    }

    /// Collect a run of ASCII letters starting with `first`
    fn take_word(&mut self, first: char) -> String {
        let mut word = String::new();
        word.push(first);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphabetic() {
                word.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        word
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}
