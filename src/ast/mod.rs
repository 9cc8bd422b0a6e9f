/*
 * ==========================================================================
 * LOXFRONT - Scanner & Parser for Lox Expressions
 * ==========================================================================
 *
 * File:      ast/mod.rs
 * Purpose:   Root module for the expression syntax tree.
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

/// Expression nodes and the `Visitor` protocol.
pub mod expr;

/// `AstPrinter`, the reference visitor.
pub mod printer;

pub use expr::{Expr, LiteralValue, Visitor};
pub use printer::AstPrinter;
