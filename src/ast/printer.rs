/*
 * ==========================================================================
 * LOXFRONT - Scanner & Parser for Lox Expressions
 * ==========================================================================
 *
 * File:      ast/printer.rs
 * Purpose:   Reference visitor rendering an expression tree in fully
 *            parenthesized prefix notation.
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

use crate::ast::expr::{Expr, LiteralValue, Visitor};
use crate::lexer::token::Token;

/// Renders an expression as a Lisp-like prefix string:
///
/// ```text
/// -123 * (45.67)   →   (* (- 123) (group 45.67))
/// ```
///
/// Used to check parser output in tests and by the REPL. It is not a
/// pretty-printer: the output is not valid source.
#[derive(Debug, Default)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn new() -> Self {
        AstPrinter
    }

    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut out = String::from("(");
        out.push_str(name);

        for expr in exprs {
            let rendered: String = expr.accept(self);
            out.push(' ');
            out.push_str(&rendered);
        }

        out.push(')');
        out
    }
}

impl Visitor<String> for AstPrinter {
    fn visit_assign_expr(&mut self, name: &Token, value: &Expr) -> String {
        self.parenthesize(&format!("= {}", name.lexeme), &[value])
    }

    fn visit_binary_expr(&mut self, left: &Expr, operator: &Token, right: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[left, right])
    }

    fn visit_call_expr(&mut self, callee: &Expr, _paren: &Token, arguments: &[Expr]) -> String {
        let mut exprs = vec![callee];
        exprs.extend(arguments.iter());
        self.parenthesize("call", &exprs)
    }

    fn visit_get_expr(&mut self, object: &Expr, name: &Token) -> String {
        let object: String = object.accept(self);
        format!("(. {} {})", object, name.lexeme)
    }

    fn visit_grouping_expr(&mut self, expression: &Expr) -> String {
        self.parenthesize("group", &[expression])
    }

    fn visit_literal_expr(&mut self, value: &LiteralValue) -> String {
        value.to_string()
    }

    fn visit_logical_expr(&mut self, left: &Expr, operator: &Token, right: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[left, right])
    }

    fn visit_set_expr(&mut self, object: &Expr, name: &Token, value: &Expr) -> String {
        let object: String = object.accept(self);
        let value: String = value.accept(self);
        format!("(set {} {} {})", object, name.lexeme, value)
    }

    fn visit_super_expr(&mut self, _keyword: &Token, method: &Token) -> String {
        format!("(super {})", method.lexeme)
    }

    fn visit_this_expr(&mut self, _keyword: &Token) -> String {
        "this".to_string()
    }

    fn visit_unary_expr(&mut self, operator: &Token, right: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[right])
    }

    fn visit_variable_expr(&mut self, name: &Token) -> String {
        name.lexeme.clone()
    }
}
