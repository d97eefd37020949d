//! # snol
//!
//! snol is an interpreter for SNOL, a small statement-based expression
//! language in which every line of input is one complete command: a numeric
//! expression, a variable assignment, an input-read (`BEG`), an output
//! (`PRINT`), or the exit directive (`EXIT!`). Commands are interpreted one
//! at a time against a variable environment that lives for the session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Command,
    interpreter::{
        console::Console,
        environment::Environment,
        evaluator::core::Outcome,
        lexer, parser,
    },
};

/// Defines the structure of parsed commands.
///
/// This module declares the `Command` and `Expr` enums that represent a
/// parsed line as a tree. The AST is built by the parser and traversed by the
/// evaluator.
///
/// # Responsibilities
/// - Defines the command kinds: assignment, input, output, exit, expression.
/// - Defines expression nodes: literals, variables, binary chains, grouping.
/// - Carries the restricted sign-prefix form recognized at the factor level.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating a command. Any error aborts the whole line: the command has
/// no visible effect and the session moves on to the next line.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Renders each as the one-line message shown after the `Error: ` prefix.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the process of command execution.
///
/// This module ties together lexing, parsing, evaluation, the value and
/// environment data model, and the console seam to provide a complete
/// runtime for SNOL commands.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, environment.
/// - Declares the console abstraction the session is driven through.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Exactly convert `f64` results to `i64` without silent data loss.
pub mod util;

/// Runs one command against the environment, propagating failures.
///
/// The line is tokenized, parsed into a single command, and evaluated. Errors
/// from any stage abort the whole line and are returned to the caller; a
/// failed command never leaves a partial binding behind.
///
/// # Errors
/// Returns the `ParseError` or `RuntimeError` raised by the failing stage.
///
/// # Examples
/// ```
/// use snol::{
///     execute,
///     interpreter::{console::Console, environment::Environment},
/// };
///
/// struct Captured(Vec<String>);
///
/// impl Console for Captured {
///     fn read_line(&mut self, _prompt: &str) -> Option<String> {
///         None
///     }
///     fn write_line(&mut self, text: &str) {
///         self.0.push(text.to_owned());
///     }
/// }
///
/// let mut env = Environment::new();
/// let mut console = Captured(Vec::new());
///
/// execute("x = 2 + 3", &mut env, &mut console).unwrap();
/// execute("PRINT x", &mut env, &mut console).unwrap();
/// assert_eq!(console.0, vec!["5".to_owned()]);
///
/// // 'y' is not defined, so the command fails as a whole.
/// assert!(execute("PRINT y", &mut env, &mut console).is_err());
/// ```
pub fn execute<C: Console>(command: &str,
                           env: &mut Environment,
                           console: &mut C)
                           -> Result<Outcome, Box<dyn std::error::Error>> {
    let tokens = lexer::tokenize(command)?;
    let parsed: Command = parser::core::parse(&tokens)?;
    let outcome = env.eval_command(&parsed, console)?;

    Ok(outcome)
}

/// Interprets one command, reporting any failure on the console.
///
/// This is the session loop's entry point: it runs the command via
/// [`execute`] and, when any stage fails, writes a single `Error: ...` line
/// to the console and lets the session continue. It never retries and never
/// ends the session itself; only `EXIT!` produces [`Outcome::Exit`].
pub fn interpret<C: Console>(command: &str, env: &mut Environment, console: &mut C) -> Outcome {
    match execute(command, env, console) {
        Ok(outcome) => outcome,
        Err(e) => {
            console.write_line(&format!("Error: {e}"));
            Outcome::Proceed
        },
    }
}

/// Interprets a script one line at a time, in order.
///
/// Each non-blank line is one command, interpreted via [`interpret`] against
/// the same environment. Blank lines are skipped; `EXIT!` stops the run with
/// the remaining lines unprocessed, exactly as it would end an interactive
/// session.
///
/// # Returns
/// [`Outcome::Exit`] when the script reached `EXIT!`, otherwise
/// [`Outcome::Proceed`].
pub fn run_script<C: Console>(script: &str, env: &mut Environment, console: &mut C) -> Outcome {
    for line in script.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if interpret(line, env, console) == Outcome::Exit {
            return Outcome::Exit;
        }
    }
    Outcome::Proceed
}
