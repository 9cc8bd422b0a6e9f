/*
 * ==========================================================================
 * LOXFRONT - Scanner & Parser for Lox Expressions
 * ==========================================================================
 *
 * File:      lib.rs
 * Purpose:   Crate root: module wiring, re-exports and the scan → parse
 *            pipeline helper.
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

//! Lexical and syntactic front end for Lox expressions.
//!
//! ```text
//! source text → lexer::scan → Vec<Token> → parser::parse → Expr → Visitor
//! ```
//!
//! Diagnostics never travel as panics: both stages deliver them to a
//! caller-supplied [`Reporter`].

pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod logger;
pub mod parser;
pub mod span;

pub use ast::{AstPrinter, Expr, LiteralValue, Visitor};
pub use diagnostics::{DiagnosticPrinter, ErrorCollector, Reporter};
pub use error::LoxError;
pub use lexer::{Literal, Scanner, Token, TokenKind};
pub use parser::{ParseError, Parser};
pub use span::Span;

/// Everything one pass over a source text produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub tokens: Vec<Token>,

    /// `None` when parsing failed or was skipped.
    pub expr: Option<Expr>,

    /// Every diagnostic, lexical first, in the order reported.
    pub errors: Vec<LoxError>,
}

impl RunOutcome {
    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The prefix rendering of the parsed expression, if there is one.
    pub fn printed(&self) -> Option<String> {
        self.expr.as_ref().map(|expr| AstPrinter::new().print(expr))
    }
}

/// Scans and parses `source`, collecting every diagnostic.
///
/// If scanning reported anything the parse still runs, so its syntax
/// errors are reported as well, but the resulting tree is discarded:
/// an expression built from a token stream with holes in it is not
/// trustworthy.
pub fn run_source(source: &str) -> RunOutcome {
    let mut errors = ErrorCollector::new();

    let tokens = lexer::scan(source, &mut errors);
    let scan_failed = errors.had_error();

    let expr = parser::parse(tokens.clone(), &mut errors).ok();
    let expr = if scan_failed { None } else { expr };

    RunOutcome {
        tokens,
        expr,
        errors: errors.into_errors(),
    }
}
