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

use std::fmt;

use crate::span::Span;

/// Stable code for an unrecognized character.
pub const UNEXPECTED_CHARACTER: &str = "L0001";

/// Stable code for a string literal that runs into end of input.
pub const UNTERMINATED_STRING: &str = "L0002";

/// Stable code for any failed grammar expectation.
pub const SYNTAX_ERROR: &str = "P0001";

/// A single diagnostic produced by the scanner or the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct LoxError {
    /// Stable error code (L0001, P0001, …)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Line shown in the `[line N]` prefix.
    ///
    /// Equal to `span.line` except for lexemes spanning several lines,
    /// which are reported on the line they end on.
    pub line: usize,

    /// Where the offending lexeme starts; drives the caret rendering.
    pub span: Span,

    /// Where on the line the error sits, as shown after "Error".
    ///
    /// Empty for lexical errors, `" at end"` or `" at 'lexeme'"` for
    /// syntax errors.
    pub location: String,

    /// Optional note / help text
    pub help: Option<String>,
}

impl LoxError {
    /// Generic constructor
    pub fn new(
        code: &'static str,
        message: impl Into<String>,
        span: Span,
        location: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            line: span.line,
            span,
            location: location.into(),
            help: None,
        }
    }

    /// Lexical error (unrecognized character, unterminated string)
    pub fn lexical(code: &'static str, message: impl Into<String>, span: Span) -> Self {
        Self::new(code, message, span, "")
    }

    /// Syntax error raised while parsing
    pub fn syntax(
        message: impl Into<String>,
        span: Span,
        location: impl Into<String>,
    ) -> Self {
        Self::new(SYNTAX_ERROR, message, span, location)
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Reports the error on `line` while keeping the start position.
    pub fn on_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    pub fn line(&self) -> usize {
        self.line
    }
}

impl fmt::Display for LoxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] Error{}: {}",
            self.line, self.location, self.message
        )
    }
}

impl std::error::Error for LoxError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexical_errors_have_no_location() {
        let err = LoxError::lexical(UNEXPECTED_CHARACTER, "Unexpected character.", Span::new(3, 4));
        assert_eq!(err.to_string(), "[line 3] Error: Unexpected character.");
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn syntax_errors_show_their_location() {
        let err = LoxError::syntax("Expect ')' after expression.", Span::new(1, 6), " at end");
        assert_eq!(err.code, SYNTAX_ERROR);
        assert_eq!(
            err.to_string(),
            "[line 1] Error at end: Expect ')' after expression."
        );
    }

    #[test]
    fn reported_line_can_differ_from_start() {
        let err = LoxError::lexical(UNTERMINATED_STRING, "Unterminated string.", Span::new(1, 4))
            .on_line(2);
        assert_eq!(err.span, Span::new(1, 4));
        assert_eq!(err.to_string(), "[line 2] Error: Unterminated string.");
    }

    #[test]
    fn help_is_attached_by_builder() {
        let err = LoxError::syntax("Unexpected token.", Span::new(1, 0), " at ')'")
            .with_help("remove the stray ')'");
        assert_eq!(err.help.as_deref(), Some("remove the stray ')'"));
    }
}
