/*
 * ==========================================================================
 * LOXFRONT - Scanner & Parser for Lox Expressions
 * ==========================================================================
 *
 * Author:    Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * Github:   https://github.com/samwilcox/loxfront
 *
 * License:
 * This file is part of the LOXFRONT project.
 *
 * LOXFRONT is dual-licensed under the terms of:
 *   - The MIT license
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

use std::fmt::Write;

use crate::error::LoxError;
use crate::span::Span;

/// The sink every scanner and parser diagnostic is delivered to.
///
/// The front end never keeps a "had error" flag of its own. Callers that
/// need one track it in their reporter (see [`ErrorCollector`]).
///
/// Any `FnMut(&LoxError)` closure is a reporter:
///
/// ```
/// use loxfront::{lexer, LoxError};
///
/// let mut count = 0;
/// let tokens = lexer::scan("[]", &mut |_: &LoxError| count += 1);
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(count, 2);
/// ```
pub trait Reporter {
    fn report(&mut self, error: &LoxError);
}

impl<F> Reporter for F
where
    F: FnMut(&LoxError),
{
    fn report(&mut self, error: &LoxError) {
        self(error)
    }
}

/// A reporter that simply records every diagnostic in arrival order.
#[derive(Debug, Default, Clone)]
pub struct ErrorCollector {
    errors: Vec<LoxError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[LoxError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<LoxError> {
        self.errors
    }

    /// Forgets everything recorded so far, so one collector can serve
    /// several scans.
    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl Reporter for ErrorCollector {
    fn report(&mut self, error: &LoxError) {
        self.errors.push(error.clone());
    }
}

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// for scanner and parser errors.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
pub struct DiagnosticPrinter {
    /// Full source text being scanned. Kept whole so single lines can
    /// be pulled out on demand.
    source: String,

    /// Name shown in the `-->` pointer (`<repl>` for prompt input).
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Renders one diagnostic.
    ///
    /// # Output Example
    /// ```text
    /// error[P0001]: Expect ')' after expression.
    ///   --> script.lox:1:7
    ///    |
    ///  1 | (1 + 2
    ///    |       ^
    /// ```
    pub fn render(&self, error: &LoxError) -> String {
        let Span { line, column } = error.span;

        // Lines are 1-indexed in diagnostics; `saturating_sub` keeps a
        // line of 0 from underflowing.
        let src_line = self.source.lines().nth(line.saturating_sub(1)).unwrap_or("");

        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "error[{}]: {}\n  --> {}:{}:{}",
            error.code,
            error.message,
            self.file_name,
            line,
            column + 1
        );
        let _ = writeln!(out, "   |");
        let _ = writeln!(out, "{:>3} | {}", line, src_line);
        let _ = writeln!(out, "   | {}^", " ".repeat(column));

        if let Some(help) = &error.help {
            let _ = writeln!(out, "\nhelp: {}", help);
        }

        out
    }

    /// Prints a formatted error diagnostic to stderr.
    pub fn print(&self, error: &LoxError) {
        eprint!("{}", self.render(error));
    }
}
