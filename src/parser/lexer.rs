//! Lexer (tokenizer) for the C-like source language
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser. Literal tokens keep their raw source text (string and character
//! literals include their quotes, escape pairs are consumed but not
//! validated) because the front end performs no semantic interpretation.
//!
//! Rule priority is fixed and significant: comments are tried before
//! operators (so `/*` never lexes as division) and multi-character operators
//! before their single-character prefixes (so `==` never lexes as two `=`).
//! Keywords are recognized only after a full identifier has been read, so
//! `intx` is an identifier, not `int` followed by `x`.

use super::ast::SourceLocation;
use std::fmt;
use thiserror::Error;

/// All token variants produced by the lexer.
///
/// Every variant carries a [`SourceLocation`] recorded at the first character
/// of the token's text, so that parse errors can report an accurate line and
/// column without a separate token→location table.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals (raw source text, quotes included for strings and chars)
    IntLiteral(String, SourceLocation),
    FloatLiteral(String, SourceLocation),
    StringLiteral(String, SourceLocation),
    CharLiteral(String, SourceLocation),

    // Identifiers
    Ident(String, SourceLocation),

    // Keywords
    Int(SourceLocation),
    Float(SourceLocation),
    Void(SourceLocation),
    If(SourceLocation),
    Else(SourceLocation),
    While(SourceLocation),
    For(SourceLocation),
    Return(SourceLocation),

    // Operators
    Plus(SourceLocation),       // +
    Minus(SourceLocation),      // -
    Star(SourceLocation),       // *
    Slash(SourceLocation),      // /
    Percent(SourceLocation),    // %
    EqEq(SourceLocation),       // ==
    NotEq(SourceLocation),      // !=
    Lt(SourceLocation),         // <
    Le(SourceLocation),         // <=
    Gt(SourceLocation),         // >
    Ge(SourceLocation),         // >=
    AndAnd(SourceLocation),     // &&
    OrOr(SourceLocation),       // ||
    Bang(SourceLocation),       // !
    Eq(SourceLocation),         // =
    PlusPlus(SourceLocation),   // ++
    MinusMinus(SourceLocation), // --

    // Punctuation
    Semicolon(SourceLocation), // ;
    Comma(SourceLocation),     // ,
    LParen(SourceLocation),    // (
    RParen(SourceLocation),    // )
    LBrace(SourceLocation),    // {
    RBrace(SourceLocation),    // }

    // Synthetic end-of-input marker
    Eof(SourceLocation),
}

impl Token {
    /// Returns the source location where this token appears.
    pub fn location(&self) -> SourceLocation {
        match self {
            Token::IntLiteral(_, loc)
            | Token::FloatLiteral(_, loc)
            | Token::StringLiteral(_, loc)
            | Token::CharLiteral(_, loc)
            | Token::Ident(_, loc)
            | Token::Int(loc)
            | Token::Float(loc)
            | Token::Void(loc)
            | Token::If(loc)
            | Token::Else(loc)
            | Token::While(loc)
            | Token::For(loc)
            | Token::Return(loc)
            | Token::Plus(loc)
            | Token::Minus(loc)
            | Token::Star(loc)
            | Token::Slash(loc)
            | Token::Percent(loc)
            | Token::EqEq(loc)
            | Token::NotEq(loc)
            | Token::Lt(loc)
            | Token::Le(loc)
            | Token::Gt(loc)
            | Token::Ge(loc)
            | Token::AndAnd(loc)
            | Token::OrOr(loc)
            | Token::Bang(loc)
            | Token::Eq(loc)
            | Token::PlusPlus(loc)
            | Token::MinusMinus(loc)
            | Token::Semicolon(loc)
            | Token::Comma(loc)
            | Token::LParen(loc)
            | Token::RParen(loc)
            | Token::LBrace(loc)
            | Token::RBrace(loc)
            | Token::Eof(loc) => *loc,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::IntLiteral(text, _) => write!(f, "integer literal {}", text),
            Token::FloatLiteral(text, _) => write!(f, "float literal {}", text),
            // Raw text already carries the quotes
            Token::StringLiteral(text, _) => write!(f, "string literal {}", text),
            Token::CharLiteral(text, _) => write!(f, "char literal {}", text),
            Token::Ident(name, _) => write!(f, "identifier '{}'", name),
            Token::Int(_) => write!(f, "'int'"),
            Token::Float(_) => write!(f, "'float'"),
            Token::Void(_) => write!(f, "'void'"),
            Token::If(_) => write!(f, "'if'"),
            Token::Else(_) => write!(f, "'else'"),
            Token::While(_) => write!(f, "'while'"),
            Token::For(_) => write!(f, "'for'"),
            Token::Return(_) => write!(f, "'return'"),
            Token::Plus(_) => write!(f, "'+'"),
            Token::Minus(_) => write!(f, "'-'"),
            Token::Star(_) => write!(f, "'*'"),
            Token::Slash(_) => write!(f, "'/'"),
            Token::Percent(_) => write!(f, "'%'"),
            Token::EqEq(_) => write!(f, "'=='"),
            Token::NotEq(_) => write!(f, "'!='"),
            Token::Lt(_) => write!(f, "'<'"),
            Token::Le(_) => write!(f, "'<='"),
            Token::Gt(_) => write!(f, "'>'"),
            Token::Ge(_) => write!(f, "'>='"),
            Token::AndAnd(_) => write!(f, "'&&'"),
            Token::OrOr(_) => write!(f, "'||'"),
            Token::Bang(_) => write!(f, "'!'"),
            Token::Eq(_) => write!(f, "'='"),
            Token::PlusPlus(_) => write!(f, "'++'"),
            Token::MinusMinus(_) => write!(f, "'--'"),
            Token::Semicolon(_) => write!(f, "';'"),
            Token::Comma(_) => write!(f, "','"),
            Token::LParen(_) => write!(f, "'('"),
            Token::RParen(_) => write!(f, "')'"),
            Token::LBrace(_) => write!(f, "'{{'"),
            Token::RBrace(_) => write!(f, "'}}'"),
            Token::Eof(_) => write!(f, "end of input"),
        }
    }
}

/// Lexer error: a character (or unterminated construct) no rule accepts.
#[derive(Debug, Clone, Error)]
#[error("Lexer error at line {}, column {}: {message}", .location.line, .location.column)]
pub struct LexError {
    pub message: String,
    pub location: SourceLocation,
}

/// Lexer for the C-like source language
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input, appending a synthetic [`Token::Eof`] that
    /// carries the scan position after the final character.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments()?;

            if self.is_at_end() {
                tokens.push(Token::Eof(self.current_location()));
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }

    /// Get next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        let loc = self.current_location();
        let ch = self.advance().ok_or_else(|| LexError {
            message: "Unexpected end of input".to_string(),
            location: loc,
        })?;

        match ch {
            // String literals
            '"' => self.string_literal(loc),

            // Character literals
            '\'' => self.char_literal(loc),

            // Numeric literals (float form wins when '.' is followed by a digit)
            '0'..='9' => Ok(self.number_literal(ch, loc)),

            // Identifiers and keywords
            'a'..='z' | 'A'..='Z' | '_' => Ok(self.identifier_or_keyword(ch, loc)),

            // Operators and punctuation
            '+' => {
                if self.peek() == Some('+') {
                    self.advance();
                    Ok(Token::PlusPlus(loc))
                } else {
                    Ok(Token::Plus(loc))
                }
            }
            '-' => {
                if self.peek() == Some('-') {
                    self.advance();
                    Ok(Token::MinusMinus(loc))
                } else {
                    Ok(Token::Minus(loc))
                }
            }
            '*' => Ok(Token::Star(loc)),
            '/' => Ok(Token::Slash(loc)),
            '%' => Ok(Token::Percent(loc)),
            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::EqEq(loc))
                } else {
                    Ok(Token::Eq(loc))
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::NotEq(loc))
                } else {
                    Ok(Token::Bang(loc))
                }
            }
            '<' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::Le(loc))
                } else {
                    Ok(Token::Lt(loc))
                }
            }
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::Ge(loc))
                } else {
                    Ok(Token::Gt(loc))
                }
            }
            // The grammar has no bitwise operators: a lone '&' or '|' is an
            // error, only the doubled logical forms are tokens.
            '&' => {
                if self.peek() == Some('&') {
                    self.advance();
                    Ok(Token::AndAnd(loc))
                } else {
                    Err(LexError {
                        message: "Unexpected character: '&'".to_string(),
                        location: loc,
                    })
                }
            }
            '|' => {
                if self.peek() == Some('|') {
                    self.advance();
                    Ok(Token::OrOr(loc))
                } else {
                    Err(LexError {
                        message: "Unexpected character: '|'".to_string(),
                        location: loc,
                    })
                }
            }
            ';' => Ok(Token::Semicolon(loc)),
            ',' => Ok(Token::Comma(loc)),
            '(' => Ok(Token::LParen(loc)),
            ')' => Ok(Token::RParen(loc)),
            '{' => Ok(Token::LBrace(loc)),
            '}' => Ok(Token::RBrace(loc)),

            _ => Err(LexError {
                message: format!("Unexpected character: '{}'", ch),
                location: loc,
            }),
        }
    }

    /// Scan a string literal; the opening quote is already consumed and the
    /// returned raw text includes both quotes. A backslash consumes the
    /// following character blindly; escape legality is not checked here.
    fn string_literal(&mut self, loc: SourceLocation) -> Result<Token, LexError> {
        let mut text = String::from('"');

        while let Some(ch) = self.advance() {
            text.push(ch);
            if ch == '"' {
                return Ok(Token::StringLiteral(text, loc));
            }
            if ch == '\\' {
                match self.advance() {
                    Some(escaped) => text.push(escaped),
                    None => break,
                }
            }
        }

        Err(LexError {
            message: "Unterminated string literal".to_string(),
            location: loc,
        })
    }

    /// Scan a character literal. Same escaping rule as strings; any number
    /// of characters is accepted between the quotes (`''` and `'ab'` both
    /// lex), since no width check happens at this stage.
    fn char_literal(&mut self, loc: SourceLocation) -> Result<Token, LexError> {
        let mut text = String::from('\'');

        while let Some(ch) = self.advance() {
            text.push(ch);
            if ch == '\'' {
                return Ok(Token::CharLiteral(text, loc));
            }
            if ch == '\\' {
                match self.advance() {
                    Some(escaped) => text.push(escaped),
                    None => break,
                }
            }
        }

        Err(LexError {
            message: "Unterminated character literal".to_string(),
            location: loc,
        })
    }

    /// Scan a numeric literal. A `.` continues the token only when a digit
    /// follows it, so `1.5` is one float but `1.` lexes as `1` and leaves the
    /// dot (which no other rule accepts) to fail as an unexpected character.
    fn number_literal(&mut self, first_digit: char, loc: SourceLocation) -> Token {
        let mut text = String::new();
        text.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if self.peek() == Some('.') && self.peek_ahead(1).is_some_and(|c| c.is_ascii_digit()) {
            text.push('.');
            self.advance();
            while let Some(ch) = self.peek() {
                if ch.is_ascii_digit() {
                    text.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }
            return Token::FloatLiteral(text, loc);
        }

        Token::IntLiteral(text, loc)
    }

    /// Scan an identifier, then promote it to a keyword token if it matches
    /// one of the reserved words.
    fn identifier_or_keyword(&mut self, first_char: char, loc: SourceLocation) -> Token {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match ident.as_str() {
            "int" => Token::Int(loc),
            "float" => Token::Float(loc),
            "void" => Token::Void(loc),
            "if" => Token::If(loc),
            "else" => Token::Else(loc),
            "while" => Token::While(loc),
            "for" => Token::For(loc),
            "return" => Token::Return(loc),
            _ => Token::Ident(ident, loc),
        }
    }

    /// Skip whitespace and comments
    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            match self.peek() {
                Some(' ') | Some('\t') | Some('\r') | Some('\n') => {
                    self.advance();
                }
                Some('/') => {
                    if self.peek_ahead(1) == Some('/') {
                        self.skip_line_comment();
                    } else if self.peek_ahead(1) == Some('*') {
                        self.skip_block_comment()?;
                    } else {
                        break;
                    }
                }
                _ => break,
            }
        }
        Ok(())
    }

    /// Skip single-line comment (// ...)
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            self.advance();
            if ch == '\n' {
                break;
            }
        }
    }

    /// Skip multi-line comment (/* ... */), ending at the first `*/`.
    /// Reaching end of input without one is a lexer error reported at the
    /// comment's opening position.
    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let start_loc = self.current_location();
        self.advance(); // skip '/'
        self.advance(); // skip '*'

        while !self.is_at_end() {
            if self.peek() == Some('*') && self.peek_ahead(1) == Some('/') {
                self.advance(); // skip '*'
                self.advance(); // skip '/'
                return Ok(());
            }
            self.advance();
        }

        Err(LexError {
            message: "Unterminated block comment".to_string(),
            location: start_loc,
        })
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character, maintaining 1-based line/column counters
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}
