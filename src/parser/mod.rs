//! msdscript expression parser
//!
//! This module transforms msdscript source text into an expression tree:
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parser state, errors, options and the [`parse_expr`] entry point
//! - `expressions`: Grammar productions (tokens → tree)
//! - [`ast`]: Expression node definitions
//! - [`constants`]: Parser limits
//!
//! # Language
//!
//! - Integers (`5`, `-3`), booleans (`_true`, `_false`), variables (`x`)
//! - `+`, `*` and `==`, all right-associative; `*` binds tightest, `==` loosest
//! - `_let x = rhs _in body`
//! - `_if cond _then a _else b`
//! - Parentheses for grouping
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser, one method per grammar production.
//! No external parser generator dependencies.

pub mod ast;
pub mod constants;
mod expressions;
pub mod lexer;
pub mod parse;

pub use parse::{parse_expr, parse_expr_with_options};
