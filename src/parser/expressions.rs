//! Expression parsing implementation
//!
//! This module handles parsing of expressions using precedence climbing
//! for binary operators and recursive descent for other expression forms.
//!
//! # Supported Expressions
//!
//! - Literals: integers, floats, strings, characters
//! - Identifiers and variables
//! - Binary operators: arithmetic, comparison, logical
//! - Unary prefix operators: `-`, `!`, `++`, `--`
//! - Assignment: `=` (right-associative)
//! - Function calls: `name(args)`
//! - Parenthesized expressions
//!
//! # Precedence
//!
//! Lowest to highest: assignment, `||`, `&&`, equality (`==` `!=`),
//! relational (`<` `<=` `>` `>=`), additive (`+` `-`), multiplicative
//! (`*` `/` `%`), unary prefix, primary. One method per level; each binary
//! level folds left-associatively over the level above it.
//!
//! There is no unary plus and no postfix `++`/`--`; `x++` fails at whatever
//! expected the expression to end. The assignment target is syntactically
//! unrestricted, so `1 = 2` parses (the front end does no semantic checks).
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{Parser, SyntaxError};

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<AstNode, SyntaxError> {
        self.parse_assignment()
    }

    /// Parse assignment (right-associative)
    fn parse_assignment(&mut self) -> Result<AstNode, SyntaxError> {
        let expr = self.parse_logical_or()?;

        let loc = self.current_location();
        if self.match_token(&Token::Eq(loc)) {
            let rhs = Box::new(self.parse_assignment()?);
            return Ok(AstNode::Assign {
                lhs: Box::new(expr),
                rhs,
                location: loc,
            });
        }

        Ok(expr)
    }

    /// Parse logical OR (||)
    fn parse_logical_or(&mut self) -> Result<AstNode, SyntaxError> {
        let mut left = self.parse_logical_and()?;

        while self.match_token(&Token::OrOr(self.current_location())) {
            let loc = self.previous_location();
            let right = Box::new(self.parse_logical_and()?);
            left = AstNode::BinaryOp {
                op: BinOp::Or,
                left: Box::new(left),
                right,
                location: loc,
            };
        }

        Ok(left)
    }

    /// Parse logical AND (&&)
    fn parse_logical_and(&mut self) -> Result<AstNode, SyntaxError> {
        let mut left = self.parse_equality()?;

        while self.match_token(&Token::AndAnd(self.current_location())) {
            let loc = self.previous_location();
            let right = Box::new(self.parse_equality()?);
            left = AstNode::BinaryOp {
                op: BinOp::And,
                left: Box::new(left),
                right,
                location: loc,
            };
        }

        Ok(left)
    }

    /// Parse equality (== !=)
    fn parse_equality(&mut self) -> Result<AstNode, SyntaxError> {
        let mut left = self.parse_relational()?;

        loop {
            let loc = self.current_location();
            let op = if self.match_token(&Token::EqEq(loc)) {
                BinOp::Eq
            } else if self.match_token(&Token::NotEq(loc)) {
                BinOp::Ne
            } else {
                break;
            };

            let right = Box::new(self.parse_relational()?);
            left = AstNode::BinaryOp {
                op,
                left: Box::new(left),
                right,
                location: loc,
            };
        }

        Ok(left)
    }

    /// Parse relational (< <= > >=)
    fn parse_relational(&mut self) -> Result<AstNode, SyntaxError> {
        let mut left = self.parse_additive()?;

        loop {
            let loc = self.current_location();
            let op = if self.match_token(&Token::Lt(loc)) {
                BinOp::Lt
            } else if self.match_token(&Token::Le(loc)) {
                BinOp::Le
            } else if self.match_token(&Token::Gt(loc)) {
                BinOp::Gt
            } else if self.match_token(&Token::Ge(loc)) {
                BinOp::Ge
            } else {
                break;
            };

            let right = Box::new(self.parse_additive()?);
            left = AstNode::BinaryOp {
                op,
                left: Box::new(left),
                right,
                location: loc,
            };
        }

        Ok(left)
    }

    /// Parse additive (+ -)
    fn parse_additive(&mut self) -> Result<AstNode, SyntaxError> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let loc = self.current_location();
            let op = if self.match_token(&Token::Plus(loc)) {
                BinOp::Add
            } else if self.match_token(&Token::Minus(loc)) {
                BinOp::Sub
            } else {
                break;
            };

            let right = Box::new(self.parse_multiplicative()?);
            left = AstNode::BinaryOp {
                op,
                left: Box::new(left),
                right,
                location: loc,
            };
        }

        Ok(left)
    }

    /// Parse multiplicative (* / %)
    fn parse_multiplicative(&mut self) -> Result<AstNode, SyntaxError> {
        let mut left = self.parse_unary()?;

        loop {
            let loc = self.current_location();
            let op = if self.match_token(&Token::Star(loc)) {
                BinOp::Mul
            } else if self.match_token(&Token::Slash(loc)) {
                BinOp::Div
            } else if self.match_token(&Token::Percent(loc)) {
                BinOp::Mod
            } else {
                break;
            };

            let right = Box::new(self.parse_unary()?);
            left = AstNode::BinaryOp {
                op,
                left: Box::new(left),
                right,
                location: loc,
            };
        }

        Ok(left)
    }

    /// Parse unary prefix (- ! ++ --), right-recursive
    fn parse_unary(&mut self) -> Result<AstNode, SyntaxError> {
        let loc = self.current_location();

        if self.match_token(&Token::Minus(loc)) {
            let operand = Box::new(self.parse_unary()?);
            return Ok(AstNode::UnaryOp {
                op: UnOp::Neg,
                operand,
                location: loc,
            });
        }

        if self.match_token(&Token::Bang(loc)) {
            let operand = Box::new(self.parse_unary()?);
            return Ok(AstNode::UnaryOp {
                op: UnOp::Not,
                operand,
                location: loc,
            });
        }

        if self.match_token(&Token::PlusPlus(loc)) {
            let operand = Box::new(self.parse_unary()?);
            return Ok(AstNode::UnaryOp {
                op: UnOp::PreInc,
                operand,
                location: loc,
            });
        }

        if self.match_token(&Token::MinusMinus(loc)) {
            let operand = Box::new(self.parse_unary()?);
            return Ok(AstNode::UnaryOp {
                op: UnOp::PreDec,
                operand,
                location: loc,
            });
        }

        self.parse_primary()
    }

    /// Parse primary (literals, variables, calls, parenthesized expressions)
    fn parse_primary(&mut self) -> Result<AstNode, SyntaxError> {
        let loc = self.current_location();

        // Integer literal
        if let Token::IntLiteral(text, loc) = self.peek_token() {
            self.advance();
            return Ok(AstNode::IntLiteral(text, loc));
        }

        // Float literal
        if let Token::FloatLiteral(text, loc) = self.peek_token() {
            self.advance();
            return Ok(AstNode::FloatLiteral(text, loc));
        }

        // String literal
        if let Token::StringLiteral(text, loc) = self.peek_token() {
            self.advance();
            return Ok(AstNode::StringLiteral(text, loc));
        }

        // Character literal
        if let Token::CharLiteral(text, loc) = self.peek_token() {
            self.advance();
            return Ok(AstNode::CharLiteral(text, loc));
        }

        // Identifier: a call when '(' follows directly, a variable otherwise
        if let Token::Ident(name, loc) = self.peek_token() {
            self.advance();

            if self.match_token(&Token::LParen(self.current_location())) {
                let args = self.parse_argument_list()?;
                self.expect_rparen("after function arguments")?;
                return Ok(AstNode::Call {
                    name,
                    args,
                    location: loc,
                });
            }

            return Ok(AstNode::Var(name, loc));
        }

        // Parenthesized expression
        if self.match_token(&Token::LParen(loc)) {
            let expr = self.parse_expression()?;
            self.expect_rparen("after expression")?;
            return Ok(expr);
        }

        Err(SyntaxError {
            message: format!("Expected expression, found {}", self.peek()),
            location: loc,
        })
    }

    /// Parse argument list: expr, expr, ...
    fn parse_argument_list(&mut self) -> Result<Vec<AstNode>, SyntaxError> {
        let mut args = Vec::new();

        if self.check(&Token::RParen(self.current_location())) {
            return Ok(args);
        }

        loop {
            args.push(self.parse_expression()?);

            if !self.match_token(&Token::Comma(self.current_location())) {
                break;
            }
        }

        Ok(args)
    }
}
