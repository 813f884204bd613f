//! Declaration parsing implementation
//!
//! This module handles parsing of top-level declarations:
//!
//! - Function definitions: `type name(params) { ... }`
//! - Global variables: `type name;`
//! - Type names and function parameters
//!
//! # Grammar
//!
//! ```text
//! external_decl ::= type identifier ( "(" params? ")" block | ";" )
//! params        ::= param ("," param)*
//! param         ::= type identifier?
//! type          ::= "int" | "float" | "void"
//! ```
//!
//! The two top-level forms share their `type identifier` prefix; the token
//! after the identifier decides which one it is, so no backtracking is
//! needed. `(void)` parameter lists are not special-cased: they parse as a
//! single nameless `void` parameter.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{Parser, SyntaxError};

impl Parser {
    /// Parse a top-level declaration (function definition or global variable)
    pub(crate) fn parse_external_decl(&mut self) -> Result<AstNode, SyntaxError> {
        let loc = self.current_location();

        let decl_type = self.parse_type_name()?;
        let name = self.expect_identifier()?;

        if self.match_token(&Token::LParen(self.current_location())) {
            let params = self.parse_parameter_list()?;
            self.expect_rparen("after parameters")?;

            let brace_loc = self.current_location();
            self.expect_lbrace("before function body")?;
            let body = self.parse_block(brace_loc)?;

            Ok(AstNode::Function {
                return_type: decl_type,
                name,
                params,
                body: Box::new(body),
                location: loc,
            })
        } else {
            self.expect_semicolon("after global variable name")?;

            Ok(AstNode::GlobalVar {
                var_type: decl_type,
                name,
                location: loc,
            })
        }
    }

    /// Parse parameter list: type name, type name, ...
    ///
    /// An empty list is only the immediate `)`; once a comma is consumed the
    /// next parameter is mandatory, so `f(int a,)` and `f(,)` are rejected.
    pub(crate) fn parse_parameter_list(&mut self) -> Result<Vec<Param>, SyntaxError> {
        let mut params = Vec::new();

        if self.check(&Token::RParen(self.current_location())) {
            return Ok(params);
        }

        loop {
            params.push(self.parse_parameter()?);

            if !self.match_token(&Token::Comma(self.current_location())) {
                break;
            }
        }

        Ok(params)
    }

    /// Parse a single parameter: type with an optional name
    fn parse_parameter(&mut self) -> Result<Param, SyntaxError> {
        if !self.is_type_keyword() {
            return Err(SyntaxError {
                message: format!("Expected parameter type, found {}", self.peek()),
                location: self.current_location(),
            });
        }

        let param_type = self.parse_type_name()?;

        let name = if let Token::Ident(name, _) = self.peek_token() {
            self.advance();
            Some(name)
        } else {
            None
        };

        Ok(Param { param_type, name })
    }

    /// Parse a type name: int, float or void
    pub(crate) fn parse_type_name(&mut self) -> Result<TypeName, SyntaxError> {
        if self.match_token(&Token::Int(self.current_location())) {
            Ok(TypeName::Int)
        } else if self.match_token(&Token::Float(self.current_location())) {
            Ok(TypeName::Float)
        } else if self.match_token(&Token::Void(self.current_location())) {
            Ok(TypeName::Void)
        } else {
            Err(SyntaxError {
                message: format!("Expected type specifier, found {}", self.peek()),
                location: self.current_location(),
            })
        }
    }
}
