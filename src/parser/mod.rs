//! C-like source code parser
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Supported Subset
//!
//! The parser supports a small C-like language:
//! - Types: `int`, `float`, `void`
//! - Statements: declarations, control flow (`if`, `while`, `for`), `return`,
//!   blocks, expression statements
//! - Expressions: arithmetic, comparison, logical, assignment, unary prefix,
//!   function calls
//! - No preprocessor, pointers, arrays, structs, or typedefs
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with precedence climbing for binary
//! operators. No external parser generator dependencies. Parsing methods are
//! split across `declarations`, `statements`, and `expressions` as
//! `impl Parser` blocks on the struct defined in [`parse`].

pub mod ast;
pub mod lexer;
pub mod parse;

mod declarations;
mod expressions;
mod statements;

pub use parse::{parse, ParseError, Parser, SyntaxError};
