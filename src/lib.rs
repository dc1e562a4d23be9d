//! # Introduction
//!
//! Parser for msdscript, a small expression language of integers, booleans,
//! variables, `+`, `*`, `==`, `_let` and `_if`.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → Rc<Expr>
//! ```
//!
//! 1. [`parser::lexer`]: tokenises the source.
//! 2. [`parser::parse`]: recursive descent over the tokens, producing an
//!    immutable tree of [`Expr`] nodes behind shared [`ExprRef`] handles.
//!
//! ```
//! use msdscript::{parse_expr, Expr};
//!
//! let expr = parse_expr("_let x = 5 _in x * 2").unwrap();
//! assert_eq!(
//!     expr,
//!     Expr::let_in("x", Expr::num(5), Expr::mult(Expr::var("x"), Expr::num(2)))
//! );
//! ```

pub mod parser;

pub use parser::ast::{Expr, ExprRef, SourceLocation};
pub use parser::parse::{ParseError, ParseOptions, Parser};
pub use parser::{parse_expr, parse_expr_with_options};
