//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, options, helper methods, and the [`parse_expr`]
//! entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `expressions`: one method per grammar production (`parse_eqs`,
//!   `parse_adds`, `parse_mults`, ...)
//!
//! # Implementation
//!
//! Parser methods are split across files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.

use crate::parser::ast::{ExprRef, SourceLocation};
use crate::parser::constants::DEFAULT_MAX_DEPTH;
use crate::parser::lexer::{LexError, Lexer, Token};
use thiserror::Error;
use tracing::debug;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("expected {expected}, found {found} at {location}")]
    UnexpectedToken {
        expected: String,
        found: String,
        location: SourceLocation,
    },

    #[error("unexpected {found} after expression at {location}")]
    TrailingInput {
        found: String,
        location: SourceLocation,
    },

    #[error(
        "expression nesting exceeds maximum depth of {max_depth} at {location}"
    )]
    MaxDepthExceeded {
        max_depth: usize,
        location: SourceLocation,
    },
}

impl ParseError {
    /// Location of the token (or character) that caused the error
    pub fn location(&self) -> SourceLocation {
        match self {
            ParseError::Lex(err) => err.location,
            ParseError::UnexpectedToken { location, .. }
            | ParseError::TrailingInput { location, .. }
            | ParseError::MaxDepthExceeded { location, .. } => *location,
        }
    }
}

/// Parser configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum expression nesting before [`ParseError::MaxDepthExceeded`].
    ///
    /// Operators are right-associative, so each `+`, `*` or `==` in a flat
    /// chain opens one level: `1 + 1 + ... + 1` with 300 operands needs a
    /// limit of at least 299.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parse a complete msdscript expression.
///
/// The whole input must form a single expression; anything left over after it
/// (other than whitespace) is a [`ParseError::TrailingInput`].
pub fn parse_expr(source: &str) -> Result<ExprRef, ParseError> {
    parse_expr_with_options(source, &ParseOptions::default())
}

/// [`parse_expr`] with explicit options
pub fn parse_expr_with_options(
    source: &str,
    options: &ParseOptions,
) -> Result<ExprRef, ParseError> {
    let result = Parser::with_options(source, options.clone())
        .and_then(|mut parser| parser.parse_expr());

    match &result {
        Ok(expr) => debug!(nodes = expr.node_count(), "parsed expression"),
        Err(err) => debug!(%err, "failed to parse expression"),
    }

    result
}

/// Recursive descent parser for msdscript expressions
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    depth: usize,
    options: ParseOptions,
}

impl Parser {
    pub fn new(source: &str) -> Result<Self, ParseError> {
        Self::with_options(source, ParseOptions::default())
    }

    pub fn with_options(
        source: &str,
        options: ParseOptions,
    ) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        debug!(
            chars = source.chars().count(),
            tokens = tokens.len(),
            "tokenized expression source"
        );
        Ok(Self {
            tokens,
            position: 0,
            depth: 0,
            options,
        })
    }

    /// Parse one expression and require that it consumes all input
    pub fn parse_expr(&mut self) -> Result<ExprRef, ParseError> {
        let expr = self.parse_eqs()?;

        if !self.is_at_end() {
            return Err(ParseError::TrailingInput {
                found: self.describe_current(),
                location: self.current_location(),
            });
        }

        Ok(expr)
    }

    // ===== Helper methods =====

    pub(crate) fn match_token(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(self.peek()) == std::mem::discriminant(token)
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek(), Token::Eof(_))
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position.saturating_sub(1)]
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location()
    }

    /// Spelling of the current token if it is a keyword
    pub(crate) fn peek_keyword(&self) -> Option<&'static str> {
        match self.peek() {
            Token::Let(_) => Some("_let"),
            Token::In(_) => Some("_in"),
            Token::If(_) => Some("_if"),
            Token::Then(_) => Some("_then"),
            Token::Else(_) => Some("_else"),
            Token::True(_) => Some("_true"),
            Token::False(_) => Some("_false"),
            _ => None,
        }
    }

    fn describe_current(&self) -> String {
        match self.peek_keyword() {
            Some(keyword) => format!("keyword '{keyword}'"),
            None => self.peek().to_string(),
        }
    }

    /// Error for the current token when `expected` was required
    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::UnexpectedToken {
            expected: expected.to_string(),
            found: self.describe_current(),
            location: self.current_location(),
        }
    }

    pub(crate) fn expect_token(
        &mut self,
        token: &Token,
        expected: &str,
    ) -> Result<(), ParseError> {
        if self.match_token(token) {
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        if let Token::Ident(name, _) = self.peek() {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(self.unexpected("variable name"))
        }
    }

    /// Run `parse` one nesting level deeper, failing once
    /// `options.max_depth` levels are already open
    pub(crate) fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= self.options.max_depth {
            return Err(ParseError::MaxDepthExceeded {
                max_depth: self.options.max_depth,
                location: self.current_location(),
            });
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }
}
