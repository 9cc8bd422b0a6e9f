/*
 * ==========================================================================
 * LOXFRONT - Scanner & Parser for Lox Expressions
 * ==========================================================================
 *
 * File:      main.rs
 * Purpose:   `loxfront` binary: interactive prompt and script runner.
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

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

use loxfront::{logger, run_source, DiagnosticPrinter, RunOutcome};

/// Exit status when the script produced any diagnostic.
const EXIT_DATA_ERR: i32 = 65;

/// Exit status when an internal step (stdout, stdin, JSON output) failed.
const EXIT_SOFTWARE: i32 = 70;

/// Exit status when the script could not be read.
const EXIT_IO_ERR: i32 = 74;

#[derive(Parser)]
#[command(name = "loxfront")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan and parse Lox expressions", long_about = None)]
struct Cli {
    /// Script to run. Without one an interactive prompt starts.
    script: Option<PathBuf>,

    /// Print the token stream as JSON before the expression
    #[arg(long)]
    tokens: bool,

    /// Print the expression tree as JSON instead of prefix form
    #[arg(long)]
    json: bool,

    /// Log level (off, error, warn, info, debug, trace). Falls back to
    /// the LOXFRONT_LOG environment variable, then `warn`.
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let level = logger::resolve_level(cli.log_level.as_deref(), LevelFilter::Warn);
    if let Err(err) = logger::init(level) {
        eprintln!("warning: logging disabled: {}", err);
    }

    let result = match &cli.script {
        Some(path) => run_file(path, &cli),
        None => run_prompt(&cli),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("error: {:#}", err);
            process::exit(EXIT_SOFTWARE);
        }
    }
}

/// Runs one script. An unreadable file is reported here and mapped to
/// `EXIT_IO_ERR`; any error returned is a failure after reading.
fn run_file(path: &Path, cli: &Cli) -> Result<i32> {
    let source = match read_script(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {:#}", err);
            return Ok(EXIT_IO_ERR);
        }
    };

    info!("running {}", path.display());

    let outcome = run_source(&source);
    emit(&outcome, cli, &path.display().to_string(), &source)?;

    Ok(if outcome.had_error() { EXIT_DATA_ERR } else { 0 })
}

fn read_script(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("could not read '{}'", path.display()))
}

/// Reads one line at a time until stdin closes. Errors on one line never
/// carry over to the next.
fn run_prompt(cli: &Cli) -> Result<i32> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let outcome = run_source(&line);
        emit(&outcome, cli, "<repl>", &line)?;
    }

    Ok(0)
}

/// Prints diagnostics to stderr and the requested views of the result to
/// stdout.
fn emit(outcome: &RunOutcome, cli: &Cli, file_name: &str, source: &str) -> Result<()> {
    let diagnostics = DiagnosticPrinter::new(file_name, source);
    for err in &outcome.errors {
        eprintln!("{}", err);
        diagnostics.print(err);
    }

    if cli.tokens {
        println!("{}", serde_json::to_string_pretty(&outcome.tokens)?);
    }

    if let Some(expr) = &outcome.expr {
        if cli.json {
            println!("{}", serde_json::to_string_pretty(expr)?);
        } else if let Some(printed) = outcome.printed() {
            println!("{}", printed);
        }
    }

    Ok(())
}
