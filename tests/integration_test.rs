use std::thread;

use loxfront::{
    lexer, parser, run_source, AstPrinter, DiagnosticPrinter, ErrorCollector, Expr, LiteralValue,
    LoxError, TokenKind,
};
use serde_json::json;

fn print(source: &str) -> String {
    let outcome = run_source(source);
    assert!(!outcome.had_error(), "unexpected errors: {:?}", outcome.errors);
    outcome.printed().unwrap_or_default()
}

#[test]
fn prints_prefix_form() {
    assert_eq!(print("-123 * (45.67)"), "(* (- 123) (group 45.67))");
    assert_eq!(print("1 - 2 - 3"), "(- (- 1 2) 3)");
    assert_eq!(print("!(1 >= 2) == false"), "(== (! (group (>= 1 2))) false)");
}

#[test]
fn comments_and_newlines_are_transparent() {
    assert_eq!(print("1 + // one\n2 // two\n"), "(+ 1 2)");
}

#[test]
fn missing_paren_produces_no_tree() {
    let outcome = run_source("(1 + 2");

    assert!(outcome.expr.is_none());
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(
        outcome.errors[0].to_string(),
        "[line 1] Error at end: Expect ')' after expression."
    );
}

#[test]
fn unterminated_string_reports_once() {
    let outcome = run_source("\"abc");

    let kinds: Vec<TokenKind> = outcome.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Eof]);

    let messages: Vec<&str> = outcome.errors.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages[0], "Unterminated string.");
    assert!(outcome.expr.is_none());
}

#[test]
fn multi_line_string_caret_lands_on_opening_quote() {
    let source = "    \"abc\nx";
    let outcome = run_source(source);
    let err = &outcome.errors[0];

    assert_eq!(err.to_string(), "[line 2] Error: Unterminated string.");

    let rendered = DiagnosticPrinter::new("f", source).render(err);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[1], "  --> f:1:5");
    assert_eq!(lines[3], "  1 |     \"abc");
    assert_eq!(lines[4], "   |     ^");
}

#[test]
fn missing_paren_renders_help() {
    let source = "(1 + 2";
    let outcome = run_source(source);
    assert_eq!(outcome.errors.len(), 1);

    let rendered = DiagnosticPrinter::new("f", source).render(&outcome.errors[0]);
    assert!(rendered.ends_with("\nhelp: the '(' at line 1, column 1 is never closed\n"));
}

#[test]
fn lexical_errors_discard_the_tree() {
    let outcome = run_source("1 + 2 @");

    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].message, "Unexpected character.");
    assert!(outcome.expr.is_none());
}

#[test]
fn lexical_and_syntax_errors_are_both_reported() {
    let outcome = run_source("# (1");

    let messages: Vec<&str> = outcome.errors.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(
        messages,
        vec!["Unexpected character.", "Expect ')' after expression."]
    );
}

#[test]
fn closure_reporter_receives_every_diagnostic() {
    let mut seen: Vec<(usize, String, String)> = Vec::new();
    let mut reporter = |err: &LoxError| {
        seen.push((err.line(), err.location.clone(), err.message.clone()));
    };

    let tokens = lexer::scan("[\n]", &mut reporter);
    let result = parser::parse(tokens, &mut reporter);
    assert!(result.is_err());

    assert_eq!(
        seen,
        vec![
            (1, String::new(), "Unexpected character.".to_string()),
            (2, String::new(), "Unexpected character.".to_string()),
            (2, " at end".to_string(), "Unexpected token.".to_string()),
        ]
    );
}

#[test]
fn tokens_serialize_to_json() {
    let tokens = lexer::scan("3 \"hi\"", &mut ErrorCollector::new());
    let value = serde_json::to_value(&tokens).unwrap_or_default();

    assert_eq!(
        value,
        json!([
            {
                "kind": "Number",
                "lexeme": "3",
                "literal": { "Number": 3.0 },
                "line": 1,
                "span": { "line": 1, "column": 0 }
            },
            {
                "kind": "String",
                "lexeme": "\"hi\"",
                "literal": { "String": "hi" },
                "line": 1,
                "span": { "line": 1, "column": 2 }
            },
            {
                "kind": "Eof",
                "lexeme": "",
                "literal": null,
                "line": 1,
                "span": { "line": 1, "column": 6 }
            }
        ])
    );
}

#[test]
fn tree_serializes_to_json() {
    let outcome = run_source("-nil");
    let value = outcome
        .expr
        .as_ref()
        .and_then(|expr| serde_json::to_value(expr).ok())
        .unwrap_or_default();

    assert_eq!(value["Unary"]["operator"]["lexeme"], "-");
    assert_eq!(value["Unary"]["right"]["Literal"]["value"], "Nil");
}

#[test]
fn tree_is_owned_and_independent_of_tokens() {
    let mut errors = ErrorCollector::new();
    let tokens = lexer::scan("(1)", &mut errors);
    let expr = parser::parse(tokens, &mut errors);

    assert_eq!(
        expr,
        Ok(Expr::grouping(Expr::literal(LiteralValue::Number(1.0))))
    );
}

#[test]
fn independent_parses_run_in_parallel() {
    let sources = ["1 + 2", "(3 * 4) - 5", "!true == false", "\"a\" < \"b\""];

    let handles: Vec<_> = sources
        .iter()
        .map(|&source| thread::spawn(move || run_source(source).printed()))
        .collect();

    let printed: Vec<Option<String>> = handles
        .into_iter()
        .map(|h| h.join().ok().flatten())
        .collect();

    assert_eq!(
        printed,
        vec![
            Some("(+ 1 2)".to_string()),
            Some("(- (group (* 3 4)) 5)".to_string()),
            Some("(== (! true) false)".to_string()),
            Some("(< a b)".to_string()),
        ]
    );
}

#[test]
fn printer_is_reusable_across_trees() {
    let mut printer = AstPrinter::new();
    let mut errors = ErrorCollector::new();

    for (source, expected) in [("1", "1"), ("2 * 3", "(* 2 3)"), ("nil", "nil")] {
        let tokens = lexer::scan(source, &mut errors);
        let expr = parser::parse(tokens, &mut errors);
        assert_eq!(expr.map(|e| printer.print(&e)).ok().as_deref(), Some(expected));
    }
    assert!(!errors.had_error());
}
