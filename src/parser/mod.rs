/*
 * ==========================================================================
 * LOXFRONT - Scanner & Parser for Lox Expressions
 * ==========================================================================
 *
 * File:      parser/mod.rs
 * Purpose:   Root module for the recursive-descent expression parser.
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

/// Core parser orchestration:
/// - Owns the `Parser` struct and `ParseError`
/// - Exposes `Parser::parse`
pub mod parser;

/// Expression grammar: equality → comparison → term → factor → unary → primary
pub mod expressions;

/// Shared parser helpers:
/// - token matching and lookahead
/// - required-token consumption
/// - error reporting and statement synchronization
pub mod helpers;

pub use parser::{ParseError, Parser};

use crate::ast::Expr;
use crate::diagnostics::Reporter;
use crate::lexer::token::Token;

/// Public entry point for the parsing phase.
///
/// # Pipeline
/// ```text
/// Source → Scanner → Tokens → Parser → AST → Visitor
/// ```
///
/// # Example
/// ```
/// use loxfront::{lexer, parser, AstPrinter, ErrorCollector};
///
/// let mut errors = ErrorCollector::new();
/// let tokens = lexer::scan("1 - 2 - 3", &mut errors);
/// let expr = parser::parse(tokens, &mut errors).unwrap();
///
/// assert_eq!(AstPrinter::new().print(&expr), "(- (- 1 2) 3)");
/// ```
pub fn parse(tokens: Vec<Token>, reporter: &mut dyn Reporter) -> Result<Expr, ParseError> {
    Parser::new(tokens, reporter).parse()
}
