/*
 * ==========================================================================
 * LOXFRONT - Scanner & Parser for Lox Expressions
 * ==========================================================================
 *
 * File:      ast/expr.rs
 * Purpose:   Expression node definitions and the visitor protocol.
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

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::lexer::token::{Literal, Token};

/// The value held by a `Literal` node.
///
/// "No value" is the explicit `Nil` variant, so `0`, `""` and `false`
/// are never confused with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiteralValue {
    Nil,
    Bool(bool),
    Number(f64),
    String(String),
}

impl From<Literal> for LiteralValue {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::String(s) => LiteralValue::String(s),
            Literal::Number(n) => LiteralValue::Number(n),
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Nil => write!(f, "nil"),
            LiteralValue::Bool(b) => write!(f, "{}", b),
            LiteralValue::Number(n) => write!(f, "{}", n),
            LiteralValue::String(s) => write!(f, "{}", s),
        }
    }
}

/// An expression node.
///
/// The parser only ever builds `Literal`, `Grouping`, `Unary` and
/// `Binary`. The remaining variants belong to the statement and
/// evaluation layers and are defined here so every visitor handles the
/// full set.
///
/// Every child is exclusively owned, so an `Expr` is always a tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Assign {
        name: Token,
        value: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        /// Closing parenthesis, kept for error locations.
        paren: Token,
        arguments: Vec<Expr>,
    },
    Get {
        object: Box<Expr>,
        name: Token,
    },
    Grouping {
        expression: Box<Expr>,
    },
    Literal {
        value: LiteralValue,
    },
    Logical {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    Set {
        object: Box<Expr>,
        name: Token,
        value: Box<Expr>,
    },
    Super {
        keyword: Token,
        method: Token,
    },
    This {
        keyword: Token,
    },
    Unary {
        operator: Token,
        right: Box<Expr>,
    },
    Variable {
        name: Token,
    },
}

/// One handler per `Expr` variant.
///
/// New analyses over the tree (printing, evaluation, resolution, …)
/// implement this trait; the node definitions never change.
pub trait Visitor<R> {
    fn visit_assign_expr(&mut self, name: &Token, value: &Expr) -> R;
    fn visit_binary_expr(&mut self, left: &Expr, operator: &Token, right: &Expr) -> R;
    fn visit_call_expr(&mut self, callee: &Expr, paren: &Token, arguments: &[Expr]) -> R;
    fn visit_get_expr(&mut self, object: &Expr, name: &Token) -> R;
    fn visit_grouping_expr(&mut self, expression: &Expr) -> R;
    fn visit_literal_expr(&mut self, value: &LiteralValue) -> R;
    fn visit_logical_expr(&mut self, left: &Expr, operator: &Token, right: &Expr) -> R;
    fn visit_set_expr(&mut self, object: &Expr, name: &Token, value: &Expr) -> R;
    fn visit_super_expr(&mut self, keyword: &Token, method: &Token) -> R;
    fn visit_this_expr(&mut self, keyword: &Token) -> R;
    fn visit_unary_expr(&mut self, operator: &Token, right: &Expr) -> R;
    fn visit_variable_expr(&mut self, name: &Token) -> R;
}

impl Expr {
    /// Dispatches to the visitor method matching this node's variant and
    /// returns its result.
    pub fn accept<R, V>(&self, visitor: &mut V) -> R
    where
        V: Visitor<R> + ?Sized,
    {
        match self {
            Expr::Assign { name, value } => visitor.visit_assign_expr(name, value),
            Expr::Binary {
                left,
                operator,
                right,
            } => visitor.visit_binary_expr(left, operator, right),
            Expr::Call {
                callee,
                paren,
                arguments,
            } => visitor.visit_call_expr(callee, paren, arguments),
            Expr::Get { object, name } => visitor.visit_get_expr(object, name),
            Expr::Grouping { expression } => visitor.visit_grouping_expr(expression),
            Expr::Literal { value } => visitor.visit_literal_expr(value),
            Expr::Logical {
                left,
                operator,
                right,
            } => visitor.visit_logical_expr(left, operator, right),
            Expr::Set {
                object,
                name,
                value,
            } => visitor.visit_set_expr(object, name, value),
            Expr::Super { keyword, method } => visitor.visit_super_expr(keyword, method),
            Expr::This { keyword } => visitor.visit_this_expr(keyword),
            Expr::Unary { operator, right } => visitor.visit_unary_expr(operator, right),
            Expr::Variable { name } => visitor.visit_variable_expr(name),
        }
    }

    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn unary(operator: Token, right: Expr) -> Self {
        Expr::Unary {
            operator,
            right: Box::new(right),
        }
    }

    pub fn grouping(expression: Expr) -> Self {
        Expr::Grouping {
            expression: Box::new(expression),
        }
    }

    pub fn literal(value: LiteralValue) -> Self {
        Expr::Literal { value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::token::TokenKind;
    use crate::span::Span;

    /// Records which handler ran.
    struct Tag;

    impl Visitor<&'static str> for Tag {
        fn visit_assign_expr(&mut self, _: &Token, _: &Expr) -> &'static str {
            "assign"
        }
        fn visit_binary_expr(&mut self, _: &Expr, _: &Token, _: &Expr) -> &'static str {
            "binary"
        }
        fn visit_call_expr(&mut self, _: &Expr, _: &Token, _: &[Expr]) -> &'static str {
            "call"
        }
        fn visit_get_expr(&mut self, _: &Expr, _: &Token) -> &'static str {
            "get"
        }
        fn visit_grouping_expr(&mut self, _: &Expr) -> &'static str {
            "grouping"
        }
        fn visit_literal_expr(&mut self, _: &LiteralValue) -> &'static str {
            "literal"
        }
        fn visit_logical_expr(&mut self, _: &Expr, _: &Token, _: &Expr) -> &'static str {
            "logical"
        }
        fn visit_set_expr(&mut self, _: &Expr, _: &Token, _: &Expr) -> &'static str {
            "set"
        }
        fn visit_super_expr(&mut self, _: &Token, _: &Token) -> &'static str {
            "super"
        }
        fn visit_this_expr(&mut self, _: &Token) -> &'static str {
            "this"
        }
        fn visit_unary_expr(&mut self, _: &Token, _: &Expr) -> &'static str {
            "unary"
        }
        fn visit_variable_expr(&mut self, _: &Token) -> &'static str {
            "variable"
        }
    }

    fn tok(kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme, None, Span::new(1, 0))
    }

    #[test]
    fn accept_calls_the_matching_handler() {
        let one = || Expr::literal(LiteralValue::Number(1.0));
        let name = || tok(TokenKind::Identifier, "a");

        let cases = vec![
            (Expr::Assign { name: name(), value: Box::new(one()) }, "assign"),
            (Expr::binary(one(), tok(TokenKind::Plus, "+"), one()), "binary"),
            (
                Expr::Call {
                    callee: Box::new(Expr::Variable { name: name() }),
                    paren: tok(TokenKind::RightParen, ")"),
                    arguments: vec![one()],
                },
                "call",
            ),
            (Expr::Get { object: Box::new(one()), name: name() }, "get"),
            (Expr::grouping(one()), "grouping"),
            (one(), "literal"),
            (
                Expr::Logical {
                    left: Box::new(one()),
                    operator: tok(TokenKind::Or, "or"),
                    right: Box::new(one()),
                },
                "logical",
            ),
            (
                Expr::Set {
                    object: Box::new(one()),
                    name: name(),
                    value: Box::new(one()),
                },
                "set",
            ),
            (
                Expr::Super {
                    keyword: tok(TokenKind::Super, "super"),
                    method: name(),
                },
                "super",
            ),
            (Expr::This { keyword: tok(TokenKind::This, "this") }, "this"),
            (Expr::unary(tok(TokenKind::Minus, "-"), one()), "unary"),
            (Expr::Variable { name: name() }, "variable"),
        ];

        for (expr, expected) in cases {
            assert_eq!(expr.accept(&mut Tag), expected);
        }
    }

    #[test]
    fn falsy_literals_are_not_nil() {
        assert_eq!(LiteralValue::Number(0.0).to_string(), "0");
        assert_eq!(LiteralValue::String(String::new()).to_string(), "");
        assert_eq!(LiteralValue::Bool(false).to_string(), "false");
        assert_eq!(LiteralValue::Nil.to_string(), "nil");
    }

    #[test]
    fn token_literals_convert() {
        assert_eq!(
            LiteralValue::from(Literal::Number(2.5)),
            LiteralValue::Number(2.5)
        );
        assert_eq!(
            LiteralValue::from(Literal::String("s".into())),
            LiteralValue::String("s".into())
        );
    }
}
