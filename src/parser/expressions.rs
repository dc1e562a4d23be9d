//! Expression parsing implementation
//!
//! One method per grammar production:
//!
//! ```text
//! expr    = comparg [ "==" expr ]
//! comparg = addend [ "+" comparg ]
//! addend  = inner [ "*" addend ]
//! inner   = number | "(" expr ")" | variable
//!         | "_let" variable "=" expr "_in" expr
//!         | "_if" expr "_then" expr "_else" expr
//!         | "_true" | "_false"
//! ```
//!
//! The binary operators are right-associative, and `_let` bodies and `_if`
//! else-branches extend as far to the right as possible.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::{Expr, ExprRef};
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse equality (==), the lowest-precedence level
    pub(crate) fn parse_eqs(&mut self) -> Result<ExprRef, ParseError> {
        let lhs = self.parse_adds()?;

        if self.match_token(&Token::EqEq(self.current_location())) {
            let rhs = self.nested(Self::parse_eqs)?;
            return Ok(Expr::equality(lhs, rhs));
        }

        Ok(lhs)
    }

    /// Parse addition (+)
    pub(crate) fn parse_adds(&mut self) -> Result<ExprRef, ParseError> {
        let lhs = self.parse_mults()?;

        if self.match_token(&Token::Plus(self.current_location())) {
            let rhs = self.nested(Self::parse_adds)?;
            return Ok(Expr::add(lhs, rhs));
        }

        Ok(lhs)
    }

    /// Parse multiplication (*)
    pub(crate) fn parse_mults(&mut self) -> Result<ExprRef, ParseError> {
        let lhs = self.parse_inner()?;

        if self.match_token(&Token::Star(self.current_location())) {
            let rhs = self.nested(Self::parse_mults)?;
            return Ok(Expr::mult(lhs, rhs));
        }

        Ok(lhs)
    }

    /// Parse an operand: literal, variable, parenthesized expression,
    /// `_let` or `_if`
    pub(crate) fn parse_inner(&mut self) -> Result<ExprRef, ParseError> {
        match self.peek() {
            Token::Number(..) => self.parse_num(),
            Token::Ident(..) => self.parse_var(),
            Token::LParen(_) => self.parse_paren(),
            Token::Let(_) => self.parse_let(),
            Token::If(_) => self.parse_if(),
            Token::True(_) | Token::False(_) => self.parse_bool(),
            _ => Err(self.unexpected("expression")),
        }
    }

    pub(crate) fn parse_num(&mut self) -> Result<ExprRef, ParseError> {
        if let Token::Number(value, _) = *self.peek() {
            self.advance();
            Ok(Expr::num(value))
        } else {
            Err(self.unexpected("number"))
        }
    }

    pub(crate) fn parse_var(&mut self) -> Result<ExprRef, ParseError> {
        let name = self.expect_identifier()?;
        Ok(Expr::var(name))
    }

    /// Parse ( expr )
    pub(crate) fn parse_paren(&mut self) -> Result<ExprRef, ParseError> {
        self.expect_token(&Token::LParen(self.current_location()), "'('")?;
        let expr = self.nested(Self::parse_eqs)?;
        self.expect_token(&Token::RParen(self.current_location()), "')'")?;
        Ok(expr)
    }

    /// Parse _let name = rhs _in body
    pub(crate) fn parse_let(&mut self) -> Result<ExprRef, ParseError> {
        self.expect_token(&Token::Let(self.current_location()), "'_let'")?;
        let name = self.expect_identifier()?;
        self.expect_token(&Token::Eq(self.current_location()), "'='")?;
        let rhs = self.nested(Self::parse_eqs)?;
        self.expect_token(&Token::In(self.current_location()), "'_in'")?;
        let body = self.nested(Self::parse_eqs)?;
        Ok(Expr::let_in(name, rhs, body))
    }

    /// Parse _if condition _then then_branch _else else_branch
    pub(crate) fn parse_if(&mut self) -> Result<ExprRef, ParseError> {
        self.expect_token(&Token::If(self.current_location()), "'_if'")?;
        let condition = self.nested(Self::parse_eqs)?;
        self.expect_token(&Token::Then(self.current_location()), "'_then'")?;
        let then_branch = self.nested(Self::parse_eqs)?;
        self.expect_token(&Token::Else(self.current_location()), "'_else'")?;
        let else_branch = self.nested(Self::parse_eqs)?;
        Ok(Expr::if_then_else(condition, then_branch, else_branch))
    }

    pub(crate) fn parse_bool(&mut self) -> Result<ExprRef, ParseError> {
        if self.match_token(&Token::True(self.current_location())) {
            Ok(Expr::boolean(true))
        } else if self.match_token(&Token::False(self.current_location())) {
            Ok(Expr::boolean(false))
        } else {
            Err(self.unexpected("'_true' or '_false'"))
        }
    }
}
