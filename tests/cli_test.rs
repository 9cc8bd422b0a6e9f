use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn loxfront(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_loxfront"))
        .args(args)
        .output()
        .unwrap_or_else(|err| panic!("could not start loxfront: {}", err))
}

fn script(name: &str, source: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("loxfront-{}-{}.lox", name, std::process::id()));
    fs::write(&path, source).unwrap_or_else(|err| panic!("could not write {:?}: {}", path, err));
    path
}

#[test]
fn valid_script_prints_tree_and_exits_zero() {
    let path = script("valid", "1 - 2 - 3\n");
    let output = loxfront(&[path.to_str().unwrap_or_default()]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "(- (- 1 2) 3)");
    let _ = fs::remove_file(path);
}

#[test]
fn script_with_diagnostics_exits_65() {
    let path = script("broken", "(1 + 2");
    let output = loxfront(&[path.to_str().unwrap_or_default()]);

    assert_eq!(output.status.code(), Some(65));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[line 1] Error at end: Expect ')' after expression."));
    assert!(stderr.contains("help: the '(' at line 1, column 1 is never closed"));
    let _ = fs::remove_file(path);
}

#[test]
fn unreadable_script_exits_74() {
    let missing = std::env::temp_dir().join("loxfront-does-not-exist.lox");
    let output = loxfront(&[missing.to_str().unwrap_or_default()]);

    assert_eq!(output.status.code(), Some(74));
    assert!(String::from_utf8_lossy(&output.stderr).contains("could not read"));
}
