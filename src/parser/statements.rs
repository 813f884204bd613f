//! Statement parsing implementation
//!
//! This module handles parsing of all statement forms:
//!
//! - Local variable declarations: `int x;`
//! - Control flow: `if`, `while`, `for`
//! - Return statements: `return expr;`
//! - Compound statements: `{ ... }`
//! - Expression statements: function calls, assignments
//!
//! # Grammar
//!
//! ```text
//! statement ::= decl_stmt | if_stmt | while_stmt | for_stmt
//!             | return_stmt | block | expr_stmt
//! decl_stmt ::= ("int" | "float") identifier ";"
//! for_stmt  ::= "for" "(" expr? ";" expr? ";" expr? ")" statement
//! ```
//!
//! Control-flow bodies are single statements; a braced block is itself a
//! statement, so `if (c) { ... }` needs no separate rule. A dangling `else`
//! binds to the nearest unmatched `if`, which recursive descent gives for
//! free. Local declarations trigger only on `int` and `float`: a leading
//! `void` falls through to expression parsing and fails there, so `void`
//! locals are rejected.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{Parser, SyntaxError};

impl Parser {
    /// Parse a block: statements up to and including the closing brace.
    /// The opening brace is already consumed; its location becomes the
    /// block's location.
    pub(crate) fn parse_block(&mut self, loc: SourceLocation) -> Result<AstNode, SyntaxError> {
        let mut statements = Vec::new();

        while !self.check(&Token::RBrace(self.current_location())) && !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        self.expect_rbrace("after block")?;

        Ok(AstNode::Block {
            statements,
            location: loc,
        })
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<AstNode, SyntaxError> {
        let loc = self.current_location();

        // Check for keywords first
        if self.match_token(&Token::Return(loc)) {
            return self.parse_return_statement();
        }

        if self.match_token(&Token::If(loc)) {
            return self.parse_if_statement();
        }

        if self.match_token(&Token::While(loc)) {
            return self.parse_while_statement();
        }

        if self.match_token(&Token::For(loc)) {
            return self.parse_for_statement();
        }

        if self.match_token(&Token::LBrace(loc)) {
            return self.parse_block(loc);
        }

        // Local declaration: 'int' or 'float' only. 'void' is not checked
        // here, so a void local reaches expression parsing and fails at the
        // primary.
        if self.check(&Token::Int(loc)) || self.check(&Token::Float(loc)) {
            return self.parse_declaration_statement();
        }

        // Otherwise, it's an expression statement
        let expr = self.parse_expression()?;
        self.expect_semicolon("after expression")?;

        Ok(AstNode::ExprStmt {
            expr: Box::new(expr),
            location: loc,
        })
    }

    /// Parse local variable declaration: type name;
    fn parse_declaration_statement(&mut self) -> Result<AstNode, SyntaxError> {
        let loc = self.current_location();

        let var_type = self.parse_type_name()?;
        let name = self.expect_identifier()?;
        self.expect_semicolon("after declaration")?;

        Ok(AstNode::Decl {
            var_type,
            name,
            location: loc,
        })
    }

    /// Parse return statement
    fn parse_return_statement(&mut self) -> Result<AstNode, SyntaxError> {
        let loc = self.previous_location();

        let expr = if self.check(&Token::Semicolon(self.current_location())) {
            None
        } else {
            Some(Box::new(self.parse_expression()?))
        };

        self.expect_semicolon("after return")?;

        Ok(AstNode::Return {
            expr,
            location: loc,
        })
    }

    /// Parse if statement
    fn parse_if_statement(&mut self) -> Result<AstNode, SyntaxError> {
        let loc = self.previous_location();

        self.expect_lparen("after 'if'")?;
        let condition = Box::new(self.parse_expression()?);
        self.expect_rparen("after if condition")?;

        let then_branch = Box::new(self.parse_statement()?);

        let else_branch = if self.match_token(&Token::Else(self.current_location())) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(AstNode::If {
            condition,
            then_branch,
            else_branch,
            location: loc,
        })
    }

    /// Parse while statement
    fn parse_while_statement(&mut self) -> Result<AstNode, SyntaxError> {
        let loc = self.previous_location();

        self.expect_lparen("after 'while'")?;
        let condition = Box::new(self.parse_expression()?);
        self.expect_rparen("after while condition")?;

        let body = Box::new(self.parse_statement()?);

        Ok(AstNode::While {
            condition,
            body,
            location: loc,
        })
    }

    /// Parse for statement: any of the three clauses may be empty
    fn parse_for_statement(&mut self) -> Result<AstNode, SyntaxError> {
        let loc = self.previous_location();

        self.expect_lparen("after 'for'")?;

        let init = if self.check(&Token::Semicolon(self.current_location())) {
            None
        } else {
            Some(Box::new(self.parse_expression()?))
        };
        self.expect_semicolon("after for initializer")?;

        let condition = if self.check(&Token::Semicolon(self.current_location())) {
            None
        } else {
            Some(Box::new(self.parse_expression()?))
        };
        self.expect_semicolon("after for condition")?;

        let post = if self.check(&Token::RParen(self.current_location())) {
            None
        } else {
            Some(Box::new(self.parse_expression()?))
        };
        self.expect_rparen("after for clauses")?;

        let body = Box::new(self.parse_statement()?);

        Ok(AstNode::For {
            init,
            condition,
            post,
            body,
            location: loc,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse::parse;

    /// Parse a single function body and return its statements.
    fn parse_body(body: &str) -> Vec<AstNode> {
        let source = format!("int main() {{ {} }}", body);
        match parse(&source).unwrap() {
            AstNode::Program { items, .. } => match items.into_iter().next() {
                Some(AstNode::Function { body, .. }) => match *body {
                    AstNode::Block { statements, .. } => statements,
                    other => panic!("Expected block body, got {:?}", other),
                },
                other => panic!("Expected function, got {:?}", other),
            },
            other => panic!("Expected program, got {:?}", other),
        }
    }

    #[test]
    fn test_local_declarations() {
        let stmts = parse_body("int x; float y;");

        assert_eq!(stmts.len(), 2);
        assert!(matches!(
            stmts[0],
            AstNode::Decl {
                var_type: TypeName::Int,
                ..
            }
        ));
        assert!(matches!(
            stmts[1],
            AstNode::Decl {
                var_type: TypeName::Float,
                ..
            }
        ));
    }

    #[test]
    fn test_declaration_initializer_rejected() {
        let err = parse("int main() { int x = 1; }").unwrap_err();
        assert!(err.to_string().contains("Expected ';' after declaration"));
    }

    #[test]
    fn test_void_local_rejected() {
        let err = parse("int main() { void x; }").unwrap_err();
        assert!(err.to_string().contains("Expected expression"));
        assert!(err.to_string().contains("'void'"));
    }

    #[test]
    fn test_if_without_else() {
        let stmts = parse_body("if (x) return 1;");

        match &stmts[0] {
            AstNode::If {
                then_branch,
                else_branch,
                ..
            } => {
                assert!(matches!(**then_branch, AstNode::Return { .. }));
                assert!(else_branch.is_none());
            }
            other => panic!("Expected if, got {:?}", other),
        }
    }

    #[test]
    fn test_dangling_else_binds_innermost() {
        let stmts = parse_body("if (a) if (b) return 1; else return 2;");

        match &stmts[0] {
            AstNode::If {
                then_branch,
                else_branch,
                ..
            } => {
                // The outer if has no else; the inner one took it
                assert!(else_branch.is_none());
                match &**then_branch {
                    AstNode::If { else_branch, .. } => {
                        assert!(else_branch.is_some());
                    }
                    other => panic!("Expected nested if, got {:?}", other),
                }
            }
            other => panic!("Expected if, got {:?}", other),
        }
    }

    #[test]
    fn test_while_with_block_body() {
        let stmts = parse_body("while (i < 10) { i = i + 1; }");

        match &stmts[0] {
            AstNode::While { body, .. } => {
                assert!(matches!(**body, AstNode::Block { .. }));
            }
            other => panic!("Expected while, got {:?}", other),
        }
    }

    #[test]
    fn test_while_with_single_statement_body() {
        let stmts = parse_body("while (i < 10) i = i + 1;");

        match &stmts[0] {
            AstNode::While { body, .. } => {
                assert!(matches!(**body, AstNode::ExprStmt { .. }));
            }
            other => panic!("Expected while, got {:?}", other),
        }
    }

    #[test]
    fn test_for_with_all_clauses() {
        let stmts = parse_body("for (i = 0; i < 10; ++i) total = total + i;");

        match &stmts[0] {
            AstNode::For {
                init,
                condition,
                post,
                body,
                ..
            } => {
                assert!(matches!(init.as_deref(), Some(AstNode::Assign { .. })));
                assert!(matches!(
                    condition.as_deref(),
                    Some(AstNode::BinaryOp { op: BinOp::Lt, .. })
                ));
                assert!(matches!(post.as_deref(), Some(AstNode::UnaryOp { .. })));
                assert!(matches!(**body, AstNode::ExprStmt { .. }));
            }
            other => panic!("Expected for, got {:?}", other),
        }
    }

    #[test]
    fn test_for_with_empty_clauses() {
        let stmts = parse_body("for (;;) run();");

        match &stmts[0] {
            AstNode::For {
                init,
                condition,
                post,
                ..
            } => {
                assert!(init.is_none());
                assert!(condition.is_none());
                assert!(post.is_none());
            }
            other => panic!("Expected for, got {:?}", other),
        }
    }

    #[test]
    fn test_return_without_value() {
        let stmts = parse_body("return;");

        match &stmts[0] {
            AstNode::Return { expr, .. } => assert!(expr.is_none()),
            other => panic!("Expected return, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_blocks() {
        let stmts = parse_body("{ int x; { int y; } }");

        match &stmts[0] {
            AstNode::Block { statements, .. } => {
                assert_eq!(statements.len(), 2);
                assert!(matches!(statements[1], AstNode::Block { .. }));
            }
            other => panic!("Expected block, got {:?}", other),
        }
    }

    #[test]
    fn test_statement_locations_use_leading_token() {
        // "int main() { " is 13 characters, so 'return' starts at column 14
        let stmts = parse_body("return 0;");
        assert_eq!(stmts[0].location(), SourceLocation::new(1, 14));
    }

    #[test]
    fn test_unclosed_block() {
        let err = parse("int main() { return 0;").unwrap_err();
        assert!(err.to_string().contains("Expected '}' after block"));
        assert!(err.to_string().contains("end of input"));
    }
}
