/*
 * ==========================================================================
 * LOXFRONT - Scanner & Parser for Lox Expressions
 * ==========================================================================
 *
 * File:      parser/helpers.rs
 * Purpose:   Token navigation, matching and error helpers shared by the
 *            grammar rules.
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

use crate::error::LoxError;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::{ParseError, ParseResult, Parser};

impl Parser<'_> {
    /// Consumes the current token if its kind is any of `kinds`.
    ///
    /// The stream is left untouched when nothing matches.
    pub(crate) fn match_token(&mut self, kinds: &[TokenKind]) -> bool {
        for &kind in kinds {
            if self.check(kind) {
                self.advance();
                return true;
            }
        }

        false
    }

    /// Checks the current token's kind without consuming it. Never
    /// matches at `Eof`.
    pub fn check(&self, kind: TokenKind) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.peek().kind == kind
    }

    /// Consumes a required token or raises a syntax error at the current
    /// token, carrying `help` when given.
    pub(crate) fn consume(
        &mut self,
        kind: TokenKind,
        message: &str,
        help: Option<String>,
    ) -> ParseResult<Token> {
        if self.check(kind) {
            return Ok(self.advance());
        }

        let token = self.peek().clone();
        Err(self.error_with_help(&token, message, help))
    }

    /// Advances one token forward, except at `Eof`, and returns the
    /// token that was current.
    pub(crate) fn advance(&mut self) -> Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous().clone()
    }

    /// Returns true if the parser is at EOF.
    pub fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    /// The current, unconsumed token.
    pub fn peek(&self) -> &Token {
        // `new` guarantees a trailing Eof and `advance` never moves past it.
        &self.tokens[self.current]
    }

    /// Returns the most recently consumed token.
    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    /// Reports a syntax error at `token` and builds the value that
    /// unwinds the parse.
    pub(crate) fn error(&mut self, token: &Token, message: &str) -> ParseError {
        self.error_with_help(token, message, None)
    }

    pub(crate) fn error_with_help(
        &mut self,
        token: &Token,
        message: &str,
        help: Option<String>,
    ) -> ParseError {
        let location = if token.is_eof() {
            " at end".to_string()
        } else {
            format!(" at '{}'", token.lexeme)
        };

        debug!("syntax error on line {}{}: {}", token.line(), location, message);

        let mut error = LoxError::syntax(message, token.span, location).on_line(token.line());
        if let Some(help) = help {
            error = error.with_help(help);
        }

        self.reporter.report(&error);
        ParseError { error }
    }

    /// Discards tokens until a likely statement boundary: just after a
    /// `;`, or just before a keyword that starts a statement.
    ///
    /// Expression parsing never recovers; this is the hook the
    /// statement layer uses to resume after an error.
    pub fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }

            match self.peek().kind {
                TokenKind::Class
                | TokenKind::Fun
                | TokenKind::Var
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Return => return,
                _ => {
                    self.advance();
                }
            }
        }
    }
}
