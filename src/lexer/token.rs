/*
 * ==========================================================================
 * LOXFRONT - Scanner & Parser for Lox Expressions
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the lexical token types produced by the scanner and
 *            consumed by the parser.
 *
 * Author:    Sam Wilcox
 * Email:     sam@pawx-lang.com
 * Website:   https://www.pawx-lang.com
 * GitHub:    https://github.com/samwilcox/loxfront
 *
 * License:
 * This file is part of the LOXFRONT project.
 *
 * LOXFRONT is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::span::Span;

/// Represents the **category of a lexical token**.
///
/// The set is closed: punctuation, operators, literals, every reserved
/// keyword, and the end-of-input marker.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Scanner → TokenKind → Parser → AST
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Single-character tokens
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    /// End-of-file marker.
    ///
    /// Always the **final token** of a scan; the parser never advances
    /// past it.
    Eof,
}

/// The value a literal token carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    /// Text strictly between the quotes.
    String(String),

    /// Parsed value of the full numeric lexeme.
    Number(f64),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "{}", s),
            Literal::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Represents a **single lexical token** produced by the scanner.
///
/// Tokens are immutable once created.
///
/// # Example Tokens
/// ```text
/// 3     →  { kind: Number,     lexeme: "3",   literal: Some(Number(3.0)) }
/// +     →  { kind: Plus,       lexeme: "+",   literal: None }
/// "hi"  →  { kind: String,     lexeme: "\"hi\"", literal: Some(String("hi")) }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    ///
    /// Empty for the end-of-input marker.
    pub lexeme: String,

    /// Literal value for `String` and `Number` tokens, `None` otherwise.
    pub literal: Option<Literal>,

    /// The line the token ends on. Differs from `span.line` only for
    /// string literals containing newlines.
    pub line: usize,

    /// Where the token starts, for error reporting.
    pub span: Span,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Option<Literal>,
        span: Span,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            line: span.line,
            span,
        }
    }

    /// Records the line the lexeme ends on.
    pub fn on_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    /// The end-of-input marker for the given line.
    pub fn eof(span: Span) -> Self {
        Self::new(TokenKind::Eof, "", None, span)
    }

    /// The 1-based source line the token was scanned on.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    /// Formats a token in the classic `KIND lexeme literal` debug form.
    ///
    /// ```text
    /// Number 3 3
    /// Plus + None
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{:?} {} {}", self.kind, self.lexeme, literal),
            None => write!(f, "{:?} {} None", self.kind, self.lexeme),
        }
    }
}
