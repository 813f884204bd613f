//! # Introduction
//!
//! Castor is the front end of a miniature C-like language: it tokenizes
//! source text, parses it by recursive descent into a typed AST, and can
//! serialize that tree as JSON for downstream tools.  It performs no
//! semantic analysis and no execution; a syntactically valid program with
//! undeclared names still parses.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → JSON export
//! ```
//!
//! 1. [`parser`]: tokenizes the source and builds the AST; the whole
//!    front end is reachable through [`parser::parse`].
//! 2. [`export`]: converts the typed tree into uniform
//!    `{kind, value, lineno, col, children}` records and pretty JSON.
//!
//! ## Supported subset
//!
//! Types: `int`, `float`, `void`.
//! Control flow: `if/else`, `while`, `for`, `return`.
//! Expressions: arithmetic, comparison, logical operators with C precedence,
//! assignment, unary prefix `-` `!` `++` `--`, function calls.
//! No preprocessor, pointers, arrays, structs, or initializing declarations.
//!
//! ## Example
//!
//! ```
//! use castor::parser::parse;
//!
//! let ast = parse("int main() { return 0; }").unwrap();
//! let json = castor::export::to_json_pretty(&ast).unwrap();
//! assert!(json.contains("\"kind\": \"Function\""));
//! ```

pub mod export;
pub mod parser;
