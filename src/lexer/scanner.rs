/*
 * ==========================================================================
 * LOXFRONT - Scanner & Parser for Lox Expressions
 * ==========================================================================
 *
 * File:      scanner.rs
 * Purpose:   Converts raw source text into a flat sequence of tokens with
 *            position information.
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

use log::{debug, trace};

use crate::diagnostics::Reporter;
use crate::error::{LoxError, UNEXPECTED_CHARACTER, UNTERMINATED_STRING};
use crate::lexer::keywords::keyword;
use crate::lexer::token::{Literal, Token, TokenKind};
use crate::span::Span;

/// Single-pass, longest-match scanner.
///
/// One instance scans one source text. The cursor state is private to the
/// instance, so separate scans on separate threads never interfere.
pub struct Scanner<'r> {
    chars: Vec<char>,
    tokens: Vec<Token>,

    /// Offset of the first character of the lexeme being scanned.
    start: usize,

    /// Offset of the next unconsumed character.
    current: usize,

    /// 1-based line of `current`.
    line: usize,

    /// Offset of the first character of the current line.
    line_start: usize,

    /// Line and column of `start`.
    start_line: usize,
    start_column: usize,

    reporter: &'r mut dyn Reporter,
    error_count: usize,
}

impl<'r> Scanner<'r> {
    /// Creates a scanner over `source` with the cursor at offset `0` and
    /// the line counter at `1`.
    pub fn new(source: &str, reporter: &'r mut dyn Reporter) -> Self {
        Self {
            chars: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            line_start: 0,
            start_line: 1,
            start_column: 0,
            reporter,
            error_count: 0,
        }
    }

    /// Performs complete lexical analysis over the entire source input.
    ///
    /// # Behavior
    /// - Ignores whitespace and `//` comments
    /// - Reports unrecognized characters and unterminated strings, then
    ///   carries on
    /// - Guarantees a terminating `TokenKind::Eof` marker
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.start_column = self.current - self.line_start;
            self.scan_token();
        }

        let column = self.current - self.line_start;
        self.tokens.push(Token::eof(Span::new(self.line, column)));

        debug!(
            "scanned {} tokens over {} lines ({} lexical errors)",
            self.tokens.len(),
            self.line,
            self.error_count
        );

        self.tokens
    }

    /// Scans a single lexeme starting at `self.start`.
    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),

            // One or two character operators
            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }

            // Line comment or division
            '/' => {
                if self.match_char('/') {
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            // Whitespace
            ' ' | '\r' | '\t' => {}
            '\n' => self.newline(),

            '"' => self.string(),

            '0'..='9' => self.number(),

            'a'..='z' | 'A'..='Z' | '_' => self.identifier(),

            _ => self.error(UNEXPECTED_CHARACTER, "Unexpected character."),
        }
    }

    /// Scans the rest of a string literal after its opening quote.
    ///
    /// Embedded newlines are allowed and counted. If input ends before
    /// the closing quote nothing is emitted.
    fn string(&mut self) {
        while self.peek() != '"' && !self.is_at_end() {
            let c = self.advance();
            if c == '\n' {
                self.newline();
            }
        }

        if self.is_at_end() {
            self.error(UNTERMINATED_STRING, "Unterminated string.");
            return;
        }

        self.advance(); // closing quote

        let value: String = self.chars[self.start + 1..self.current - 1].iter().collect();
        self.add_literal(TokenKind::String, Literal::String(value));
    }

    /// Scans the rest of a number literal.
    ///
    /// A `.` is only part of the number when a digit follows it, so `1.`
    /// scans as `Number(1)` followed by `Dot`.
    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance(); // consume '.'
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        // A digit run with an optional fraction always parses.
        let value = self.lexeme().parse::<f64>().unwrap_or_default();
        self.add_literal(TokenKind::Number, Literal::Number(value));
    }

    /// Scans the rest of an identifier and classifies it as a keyword or
    /// a plain `Identifier`.
    fn identifier(&mut self) {
        while self.peek().is_ascii_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let kind = keyword(&self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.push(kind, None);
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Literal) {
        self.push(kind, Some(literal));
    }

    fn push(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let token = Token::new(kind, self.lexeme(), literal, self.start_span())
            .on_line(self.line);
        trace!("token {}", token);
        self.tokens.push(token);
    }

    /// Reports at the line the scan has reached, pointing at the lexeme
    /// start.
    fn error(&mut self, code: &'static str, message: &str) {
        self.error_count += 1;
        let err = LoxError::lexical(code, message, self.start_span()).on_line(self.line);
        self.reporter.report(&err);
    }

    fn start_span(&self) -> Span {
        Span::new(self.start_line, self.start_column)
    }

    /// The source text of the lexeme currently being scanned.
    fn lexeme(&self) -> String {
        self.chars[self.start..self.current].iter().collect()
    }

    /// Records that a `\n` was just consumed.
    fn newline(&mut self) {
        self.line += 1;
        self.line_start = self.current;
    }

    /// Consumes the next character only if it equals `expected`.
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.chars[self.current] != expected {
            return false;
        }
        self.current += 1;
        true
    }

    /// Advances the cursor by one character. Caller must ensure EOF has
    /// not been reached.
    fn advance(&mut self) -> char {
        let c = self.chars[self.current];
        self.current += 1;
        c
    }

    /// Current character, or `'\0'` at end of input.
    fn peek(&self) -> char {
        self.chars.get(self.current).copied().unwrap_or('\0')
    }

    /// Character after the current one, or `'\0'` past the end.
    fn peek_next(&self) -> char {
        self.chars.get(self.current + 1).copied().unwrap_or('\0')
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}
