/*
 * ==========================================================================
 * LOXFRONT - Scanner & Parser for Lox Expressions
 * ==========================================================================
 *
 * File:      parser/parser.rs
 * Purpose:   Parser state, the syntax-error type, and the top-level parse
 *            driver.
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

use log::debug;
use std::fmt;

use crate::ast::Expr;
use crate::diagnostics::Reporter;
use crate::error::LoxError;
use crate::lexer::token::Token;
use crate::span::Span;

/// A parse was abandoned.
///
/// By the time a caller sees this value the wrapped diagnostic has
/// already been delivered to the reporter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub error: LoxError,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

pub(crate) type ParseResult<T> = Result<T, ParseError>;

/// The recursive-descent expression parser.
///
/// This structure maintains:
/// - The full token stream produced by the scanner
/// - The current cursor position into that stream
/// - The sink syntax errors are reported to
///
/// The grammar itself lives in `expressions.rs`, token navigation in
/// `helpers.rs`, both as additional `impl Parser` blocks.
pub struct Parser<'r> {
    /// Token stream, always terminated by an `Eof` token.
    pub(crate) tokens: Vec<Token>,

    /// Index of the first unconsumed token.
    pub(crate) current: usize,

    pub(crate) reporter: &'r mut dyn Reporter,
}

impl<'r> Parser<'r> {
    /// Creates a parser over a scanned token stream.
    ///
    /// A stream that does not end in `Eof` gets one appended, so the
    /// cursor always has a token to rest on.
    pub fn new(mut tokens: Vec<Token>, reporter: &'r mut dyn Reporter) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let line = tokens.last().map_or(1, Token::line);
            tokens.push(Token::eof(Span::new(line, 0)));
        }

        Self {
            tokens,
            current: 0,
            reporter,
        }
    }

    /// Parses exactly one expression from the front of the stream.
    ///
    /// The first syntax error is reported and aborts the whole parse;
    /// there is no recovery inside an expression. Tokens after the
    /// expression are left unconsumed.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        debug!("parsing expression from {} tokens", self.tokens.len());
        self.expression()
    }
}
