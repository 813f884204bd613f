//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, helper methods, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: Parsing top-level functions and global variables
//! - `statements`: Parsing statements (if, while, for, etc.)
//! - `expressions`: Parsing expressions with precedence climbing
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state. The cursor is a plain index
//! into the materialized token list; one token of lookahead suffices for the
//! whole grammar, so there is no rewinding or backtracking anywhere.

use crate::parser::ast::*;
use crate::parser::lexer::{LexError, Lexer, Token};
use thiserror::Error;

/// Syntax error: the token stream violates the grammar.
///
/// The message names the expected construct and the token actually found;
/// the location is where that token starts.
#[derive(Debug, Clone, Error)]
#[error("Syntax error at line {}, column {}: {message}", .location.line, .location.column)]
pub struct SyntaxError {
    pub message: String,
    pub location: SourceLocation,
}

/// Any front-end failure: lexical or syntactic.
///
/// Parsing stops at the first violation; there is no recovery and no partial
/// tree.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lexical(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl ParseError {
    /// Returns the source location of the failure.
    pub fn location(&self) -> SourceLocation {
        match self {
            ParseError::Lexical(err) => err.location,
            ParseError::Syntax(err) => err.location,
        }
    }
}

/// Parse a complete source string into its root [`AstNode::Program`].
///
/// This is the front end's single library entry point: it tokenizes the whole
/// input, then runs the recursive descent over the token list.
pub fn parse(source: &str) -> Result<AstNode, ParseError> {
    let mut parser = Parser::new(source)?;
    parser.parse_program()
}

/// Recursive descent parser for the C-like language
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
}

impl Parser {
    /// Tokenize the source eagerly; lexical failures surface here as
    /// [`ParseError::Lexical`] before any grammar work starts.
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        Ok(Self {
            tokens,
            position: 0,
        })
    }

    /// Parse the entire program (top-level declarations until end of input).
    ///
    /// An empty source yields an empty `Program`; the root always reports
    /// line 1, column 1.
    pub fn parse_program(&mut self) -> Result<AstNode, ParseError> {
        let mut items = Vec::new();

        while !self.is_at_end() {
            items.push(self.parse_external_decl()?);
        }

        Ok(AstNode::Program {
            items,
            location: SourceLocation::new(1, 1),
        })
    }

    // ===== Helper methods =====

    pub(crate) fn is_type_keyword(&self) -> bool {
        matches!(
            self.peek_token(),
            Token::Int(_) | Token::Float(_) | Token::Void(_)
        )
    }

    pub(crate) fn match_token(&mut self, token: &Token) -> bool {
        if std::mem::discriminant(&self.peek_token())
            == std::mem::discriminant(token)
        {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(&self.peek_token())
            == std::mem::discriminant(token)
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek_token(), Token::Eof(_))
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn peek_token(&self) -> Token {
        self.tokens[self.position].clone()
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position - 1]
    }

    pub(crate) fn previous_location(&self) -> SourceLocation {
        self.previous().location()
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location()
    }

    pub(crate) fn expect_token(
        &mut self,
        token: &Token,
        message: &str,
    ) -> Result<(), SyntaxError> {
        if self.check(token) {
            self.advance();
            Ok(())
        } else {
            Err(SyntaxError {
                message: format!("{}, found {}", message, self.peek()),
                location: self.current_location(),
            })
        }
    }

    pub(crate) fn expect_lparen(
        &mut self,
        ctx: &str,
    ) -> Result<(), SyntaxError> {
        self.expect_token(
            &Token::LParen(self.current_location()),
            &format!("Expected '(' {ctx}"),
        )
    }

    pub(crate) fn expect_rparen(
        &mut self,
        ctx: &str,
    ) -> Result<(), SyntaxError> {
        self.expect_token(
            &Token::RParen(self.current_location()),
            &format!("Expected ')' {ctx}"),
        )
    }

    pub(crate) fn expect_lbrace(
        &mut self,
        ctx: &str,
    ) -> Result<(), SyntaxError> {
        self.expect_token(
            &Token::LBrace(self.current_location()),
            &format!("Expected '{{' {ctx}"),
        )
    }

    pub(crate) fn expect_rbrace(
        &mut self,
        ctx: &str,
    ) -> Result<(), SyntaxError> {
        self.expect_token(
            &Token::RBrace(self.current_location()),
            &format!("Expected '}}' {ctx}"),
        )
    }

    pub(crate) fn expect_semicolon(
        &mut self,
        ctx: &str,
    ) -> Result<(), SyntaxError> {
        self.expect_token(
            &Token::Semicolon(self.current_location()),
            &format!("Expected ';' {ctx}"),
        )
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<String, SyntaxError> {
        if let Token::Ident(name, _) = self.peek_token() {
            self.advance();
            Ok(name)
        } else {
            Err(SyntaxError {
                message: format!("Expected identifier, found {}", self.peek()),
                location: self.current_location(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_function() {
        let source = "int main() { return 0; }";
        let program = parse(source).unwrap();

        match program {
            AstNode::Program { items, location } => {
                assert_eq!(location, SourceLocation::new(1, 1));
                assert_eq!(items.len(), 1);
                match &items[0] {
                    AstNode::Function {
                        return_type,
                        name,
                        params,
                        body,
                        ..
                    } => {
                        assert_eq!(*return_type, TypeName::Int);
                        assert_eq!(name, "main");
                        assert_eq!(params.len(), 0);
                        assert!(matches!(**body, AstNode::Block { .. }));
                    }
                    other => panic!("Expected function, got {:?}", other),
                }
            }
            other => panic!("Expected program, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_empty_input() {
        let program = parse("").unwrap();
        match program {
            AstNode::Program { items, .. } => assert!(items.is_empty()),
            other => panic!("Expected program, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_multiple_top_level_items() {
        let source = "int g;\nfloat h;\nvoid run() { }";
        let program = parse(source).unwrap();
        match program {
            AstNode::Program { items, .. } => {
                assert_eq!(items.len(), 3);
                assert!(matches!(items[0], AstNode::GlobalVar { .. }));
                assert!(matches!(items[1], AstNode::GlobalVar { .. }));
                assert!(matches!(items[2], AstNode::Function { .. }));
            }
            other => panic!("Expected program, got {:?}", other),
        }
    }

    #[test]
    fn test_lex_failure_surfaces_as_lexical_error() {
        let err = parse("int main() { int x = 1 @ 2; }").unwrap_err();
        match err {
            ParseError::Lexical(lex) => {
                assert!(lex.message.contains("'@'"));
            }
            other => panic!("Expected lexical error, got {:?}", other),
        }
    }

    #[test]
    fn test_syntax_failure_reports_found_token() {
        // "int ;" is missing the declared name
        let err = parse("int ;").unwrap_err();
        match err {
            ParseError::Syntax(syn) => {
                assert!(syn.message.contains("Expected identifier"));
                assert!(syn.message.contains("';'"));
                assert_eq!(syn.location, SourceLocation::new(1, 5));
            }
            other => panic!("Expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_location_accessor() {
        let err = parse("@").unwrap_err();
        assert_eq!(err.location(), SourceLocation::new(1, 1));
    }
}
