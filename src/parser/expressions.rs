/*
 * ==========================================================================
 * LOXFRONT - Scanner & Parser for Lox Expressions
 * ==========================================================================
 *
 * File:      parser/expressions.rs
 * Purpose:   The expression grammar, one method per precedence level.
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
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * Grammar, lowest to highest precedence:
 *
 *   expression → equality
 *   equality   → comparison ( ( "!=" | "==" ) comparison )*
 *   comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )*
 *   term       → factor ( ( "-" | "+" ) factor )*
 *   factor     → unary ( ( "/" | "*" ) unary )*
 *   unary      → ( "!" | "-" ) unary | primary
 *   primary    → NUMBER | STRING | "true" | "false" | "nil"
 *              | "(" expression ")"
 *
 * Every binary level is a loop that folds into the left operand, so
 * operators of equal precedence associate to the left. `unary` recurses
 * on itself, so `--x` is `-(-x)`.
 *
 * ==========================================================================
 */

use crate::ast::{Expr, LiteralValue};
use crate::lexer::token::TokenKind;
use crate::parser::parser::{ParseResult, Parser};

impl Parser<'_> {
    /// expression → equality
    pub(crate) fn expression(&mut self) -> ParseResult<Expr> {
        self.equality()
    }

    /// equality → comparison ( ( "!=" | "==" ) comparison )*
    fn equality(&mut self) -> ParseResult<Expr> {
        let mut expr = self.comparison()?;

        while self.match_token(&[TokenKind::BangEqual, TokenKind::EqualEqual]) {
            let operator = self.previous().clone();
            let right = self.comparison()?;
            expr = Expr::binary(expr, operator, right);
        }

        Ok(expr)
    }

    /// comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )*
    fn comparison(&mut self) -> ParseResult<Expr> {
        let mut expr = self.term()?;

        while self.match_token(&[
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
        ]) {
            let operator = self.previous().clone();
            let right = self.term()?;
            expr = Expr::binary(expr, operator, right);
        }

        Ok(expr)
    }

    /// term → factor ( ( "-" | "+" ) factor )*
    fn term(&mut self) -> ParseResult<Expr> {
        let mut expr = self.factor()?;

        while self.match_token(&[TokenKind::Minus, TokenKind::Plus]) {
            let operator = self.previous().clone();
            let right = self.factor()?;
            expr = Expr::binary(expr, operator, right);
        }

        Ok(expr)
    }

    /// factor → unary ( ( "/" | "*" ) unary )*
    fn factor(&mut self) -> ParseResult<Expr> {
        let mut expr = self.unary()?;

        while self.match_token(&[TokenKind::Slash, TokenKind::Star]) {
            let operator = self.previous().clone();
            let right = self.unary()?;
            expr = Expr::binary(expr, operator, right);
        }

        Ok(expr)
    }

    /// unary → ( "!" | "-" ) unary | primary
    fn unary(&mut self) -> ParseResult<Expr> {
        if self.match_token(&[TokenKind::Bang, TokenKind::Minus]) {
            let operator = self.previous().clone();
            let right = self.unary()?;
            return Ok(Expr::unary(operator, right));
        }

        self.primary()
    }

    /// primary → NUMBER | STRING | "true" | "false" | "nil" | "(" expression ")"
    fn primary(&mut self) -> ParseResult<Expr> {
        if self.match_token(&[TokenKind::False]) {
            return Ok(Expr::literal(LiteralValue::Bool(false)));
        }
        if self.match_token(&[TokenKind::True]) {
            return Ok(Expr::literal(LiteralValue::Bool(true)));
        }
        if self.match_token(&[TokenKind::Nil]) {
            return Ok(Expr::literal(LiteralValue::Nil));
        }

        if self.match_token(&[TokenKind::Number, TokenKind::String]) {
            let value = self
                .previous()
                .literal
                .clone()
                .map_or(LiteralValue::Nil, LiteralValue::from);
            return Ok(Expr::literal(value));
        }

        if self.match_token(&[TokenKind::LeftParen]) {
            let open = self.previous().span;
            let expr = self.expression()?;
            let help = format!(
                "the '(' at line {}, column {} is never closed",
                open.line,
                open.column + 1
            );
            self.consume(TokenKind::RightParen, "Expect ')' after expression.", Some(help))?;
            return Ok(Expr::grouping(expr));
        }

        let token = self.peek().clone();
        Err(self.error(&token, "Unexpected token."))
    }
}
