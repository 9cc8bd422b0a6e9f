/*
 * ==========================================================================
 * LOXFRONT - Scanner & Parser for Lox Expressions
 * ==========================================================================
 *
 * File:      lexer/mod.rs
 * Purpose:   Root module for lexical analysis: tokens, keywords and the
 *            scanner itself.
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

/// Token model: `TokenKind`, `Literal`, `Token`.
pub mod token;

/// Fixed keyword table.
pub mod keywords;

/// The character-level scanner.
pub mod scanner;

pub use scanner::Scanner;
pub use token::{Literal, Token, TokenKind};

use crate::diagnostics::Reporter;

/// Converts source text into an ordered sequence of tokens.
///
/// Lexical errors are delivered to `reporter` and never stop the scan;
/// the result always ends with exactly one `Eof` token.
///
/// # Example
/// ```
/// use loxfront::{lexer, ErrorCollector, TokenKind};
///
/// let mut errors = ErrorCollector::new();
/// let tokens = lexer::scan("3 + 4", &mut errors);
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Plus, TokenKind::Number, TokenKind::Eof]);
/// assert!(!errors.had_error());
/// ```
pub fn scan(source: &str, reporter: &mut dyn Reporter) -> Vec<Token> {
    Scanner::new(source, reporter).scan_tokens()
}
