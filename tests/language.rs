use std::collections::VecDeque;

use snol::{
    execute, interpret, run_script,
    interpreter::{console::Console, environment::Environment, evaluator::core::Outcome},
};

/// A console fed from a script instead of a terminal: `BEG` reads pop from
/// `input`, and everything written is captured in `output`.
struct ScriptedConsole {
    input:  VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    fn new(input: &[&str]) -> Self {
        Self { input:  input.iter().map(|s| (*s).to_owned()).collect(),
               output: Vec::new(), }
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        self.input.pop_front()
    }

    fn write_line(&mut self, text: &str) {
        self.output.push(text.to_owned());
    }
}

/// Interprets the commands in order against one fresh environment, stopping
/// at `EXIT!` like the session loop does, and returns everything printed
/// (error lines included).
fn run_session(commands: &[&str], input: &[&str]) -> Vec<String> {
    let mut env = Environment::new();
    let mut console = ScriptedConsole::new(input);

    for command in commands {
        if interpret(command, &mut env, &mut console) == Outcome::Exit {
            break;
        }
    }
    console.output
}

fn assert_prints(commands: &[&str], expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|s| (*s).to_owned()).collect();
    assert_eq!(run_session(commands, &[]), expected, "commands: {commands:?}");
}

/// Runs all commands but the last, which must fail; returns its message.
fn failure_message(commands: &[&str]) -> String {
    let mut env = Environment::new();
    let mut console = ScriptedConsole::new(&[]);

    let (last, setup) = commands.split_last().expect("at least one command");
    for command in setup {
        if let Err(e) = execute(command, &mut env, &mut console) {
            panic!("Setup command {command:?} failed: {e}");
        }
    }

    match execute(last, &mut env, &mut console) {
        Ok(_) => panic!("Command {last:?} succeeded but was expected to fail"),
        Err(e) => e.to_string(),
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_prints(&["x = 1 + 2", "PRINT x"], &["3"]);
    assert_prints(&["x = 7 * 9", "PRINT x"], &["63"]);
    assert_prints(&["x = 8 - 5", "PRINT x"], &["3"]);
    assert_prints(&["x = 10 / 2", "PRINT x"], &["5"]);
    assert_prints(&["x = 10 % 3", "PRINT x"], &["1"]);
}

#[test]
fn integer_division_and_modulo_floor() {
    assert_prints(&["x = -7 / 2", "PRINT x"], &["-4"]);
    assert_prints(&["x = 7 / -2", "PRINT x"], &["-4"]);
    assert_prints(&["x = -7 / -2", "PRINT x"], &["3"]);
    assert_prints(&["x = -7 % 2", "PRINT x"], &["1"]);
    assert_prints(&["x = 7 % -2", "PRINT x"], &["-1"]);
    assert_prints(&["x = -7 % -2", "PRINT x"], &["-1"]);
}

#[test]
fn float_arithmetic_never_truncates() {
    assert_prints(&["x = 1.5 + 2.25", "PRINT x"], &["3.75"]);
    assert_prints(&["x = 7.0 / 2.0", "PRINT x"], &["3.5"]);
    assert_prints(&["x = 0.5 * 3.0", "PRINT x"], &["1.5"]);
    assert_prints(&["x = 3.5 - 1.25", "PRINT x"], &["2.25"]);
    assert_prints(&["x = 7.5 % 2.0", "PRINT x"], &["1.5"]);
    // Floor-based modulo for floats too: the sign follows the divisor.
    assert_prints(&["x = -7.5 % 2.0", "PRINT x"], &["0.5"]);
}

#[test]
fn mixed_types_never_combine() {
    assert_eq!(failure_message(&["5 + 2.5"]),
               "Cannot add INT to FLOAT. Type mismatch.");
    assert_eq!(failure_message(&["x = 1", "y = 2.5", "x + y"]),
               "Cannot add INT to FLOAT. Type mismatch.");
    assert_eq!(failure_message(&["2.5 * 2"]),
               "Cannot multiply FLOAT to INT. Type mismatch.");
    assert_eq!(failure_message(&["x = 1", "x = x - 0.5"]),
               "Cannot subtract INT to FLOAT. Type mismatch.");
}

#[test]
fn precedence_and_grouping() {
    assert_prints(&["x = (5 + 3) * 2", "PRINT x"], &["16"]);
    assert_prints(&["x = 5 + 3 * 2", "PRINT x"], &["11"]);
    assert_prints(&["x = 2 * (3 + 4)", "PRINT x"], &["14"]);
    assert_prints(&["x = ((2))", "PRINT x"], &["2"]);
}

#[test]
fn subtraction_is_left_associative() {
    assert_prints(&["x = 10 - 3 - 2", "PRINT x"], &["5"]);
    assert_prints(&["x = 100 / 10 / 2", "PRINT x"], &["5"]);
}

#[test]
fn assign_then_read_back() {
    assert_prints(&["x = 7", "PRINT x"], &["7"]);
    assert_prints(&["y = 2.5", "PRINT y"], &["2.5"]);
}

#[test]
fn reassignment_may_change_type() {
    assert_prints(&["x = 5", "x = 2.5", "PRINT x"], &["2.5"]);
    assert_prints(&["x = 2.5", "x = 5", "PRINT x"], &["5"]);
}

#[test]
fn integral_float_results_collapse_on_assignment() {
    // 4.0 / 2.0 is exactly 2, so the binding becomes an integer...
    assert_prints(&["x = 4.0 / 2.0", "PRINT x"], &["2"]);
    assert_prints(&["x = 1.5 + 2.5", "PRINT x"], &["4"]);
    // ...while a fractional result stays a float.
    assert_prints(&["x = 5.0 / 2.0", "PRINT x"], &["2.5"]);
}

#[test]
fn undefined_variables_are_reported_by_name() {
    assert_eq!(failure_message(&["PRINT z"]), "Variable 'z' is not defined");
    assert_eq!(failure_message(&["z + 1"]), "Variable 'z' is not defined");
    assert_eq!(failure_message(&["x = num * 2"]),
               "Variable 'num' is not defined");
}

#[test]
fn sign_prefix_is_factor_only() {
    assert_prints(&["y = -4", "PRINT y"], &["-4"]);
    assert_prints(&["x = 4", "y = 0 - x", "PRINT y"], &["-4"]);
    assert_prints(&["x = 4", "y = -x", "PRINT y"], &["-4"]);
    assert_prints(&["x = -2.5", "PRINT x"], &["-2.5"]);
    assert_prints(&["x = -9223372036854775808", "PRINT x"],
                  &["-9223372036854775808"]);

    // PRINT takes only a bare number or variable, and there is no general
    // unary production.
    assert_eq!(failure_message(&["x = 4", "PRINT -x"]), "Invalid command");
    assert_eq!(failure_message(&["x = -(4 + 1)"]), "Invalid command");
}

#[test]
fn invalid_tokens_abort_the_line() {
    assert_eq!(failure_message(&["#"]), "Invalid token '#'");
    assert_eq!(failure_message(&["x = 5 & 2"]), "Invalid token '&'");
    assert_eq!(failure_message(&["x_1 = 5"]), "Invalid token '_'");
}

#[test]
fn malformed_commands() {
    assert_eq!(failure_message(&[""]), "Invalid command");
    assert_eq!(failure_message(&["= 5"]), "Invalid command");
    assert_eq!(failure_message(&["BEG 5"]), "Invalid command");
    assert_eq!(failure_message(&["PRINT 1 + 2"]),
               "Parser did not reach end of line");
    assert_eq!(failure_message(&["x = 5 5"]),
               "Parser did not reach end of line");
    assert_eq!(failure_message(&["x = (5 + 3"]),
               "Expected right parenthesis");
    assert_eq!(failure_message(&["x = "]), "Unexpected end of line");
}

#[test]
fn keywords_need_an_exact_match() {
    // BEGIN, and EXIT without the bang, are ordinary variable names.
    assert_prints(&["BEGIN = 2", "PRINT BEGIN"], &["2"]);
    assert_prints(&["EXIT = 1", "PRINT EXIT"], &["1"]);
}

#[test]
fn print_literals_verbatim() {
    assert_prints(&["PRINT 5.0"], &["5.0"]);
    assert_prints(&["PRINT 007"], &["007"]);
    assert_prints(&["PRINT 42"], &["42"]);
}

#[test]
fn bare_expressions_evaluate_silently() {
    assert_prints(&["x = 7", "x + 1"], &[]);
    assert_prints(&["5 * 5"], &[]);
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(failure_message(&["5 / 0"]), "Division by zero");
    assert_eq!(failure_message(&["5 % 0"]), "Division by zero");
    assert_eq!(failure_message(&["5.0 / 0.0"]), "Division by zero");
}

#[test]
fn modulo_at_the_integer_minimum() {
    // The remainder of i64::MIN % -1 is exactly zero even though the
    // matching quotient does not fit.
    assert_prints(&["x = -9223372036854775808 % -1", "PRINT x"], &["0"]);
    assert_eq!(failure_message(&["-9223372036854775808 / -1"]),
               "Integer overflow while trying to compute result");
}

#[test]
fn integer_overflow_is_an_error() {
    assert_eq!(failure_message(&["9223372036854775807 + 1"]),
               "Integer overflow while trying to compute result");
    assert_eq!(failure_message(&["x = -9223372036854775808", "y = -x"]),
               "Integer overflow while trying to compute result");
}

#[test]
fn oversized_integer_literals_become_floats() {
    assert_eq!(failure_message(&["99999999999999999999 + 1"]),
               "Cannot add FLOAT to INT. Type mismatch.");
}

#[test]
fn beg_reads_and_types_input() {
    let output = run_session(&["BEG x", "PRINT x"], &["5"]);
    assert_eq!(output, vec!["5".to_owned()]);

    let output = run_session(&["BEG x", "PRINT x"], &["2.5"]);
    assert_eq!(output, vec!["2.5".to_owned()]);

    // "2.0" is not an integer literal, so the variable becomes a float and
    // no assignment-style collapse applies.
    let output = run_session(&["BEG x", "PRINT x"], &["2.0"]);
    assert_eq!(output, vec!["2.0".to_owned()]);

    let output = run_session(&["BEG x", "PRINT x"], &["-12"]);
    assert_eq!(output, vec!["-12".to_owned()]);
}

#[test]
fn beg_replaces_binding_and_type() {
    let output = run_session(&["x = 1", "BEG x", "PRINT x"], &["2.5"]);
    assert_eq!(output, vec!["2.5".to_owned()]);
}

#[test]
fn beg_rejects_non_numeric_input() {
    assert_eq!(failure_message(&["BEG x"]),
               "No input available for variable 'x'");

    let output = run_session(&["BEG x", "PRINT x"], &["abc"]);
    assert_eq!(output,
               vec!["Error: Input 'abc' is not a valid integer or float".to_owned(),
                    "Error: Variable 'x' is not defined".to_owned()]);
}

#[test]
fn scripts_skip_blank_lines_and_stop_at_exit() {
    let mut env = Environment::new();
    let mut console = ScriptedConsole::new(&[]);

    let script = "x = 2 + 3\n\n   \nPRINT x\nEXIT!\nPRINT x\n";
    let outcome = run_script(script, &mut env, &mut console);

    assert_eq!(outcome, Outcome::Exit);
    assert_eq!(console.output,
               vec!["5".to_owned(), "\nExiting SNOL Program...".to_owned()]);
}

#[test]
fn scripts_without_exit_run_to_the_end() {
    let mut env = Environment::new();
    let mut console = ScriptedConsole::new(&[]);

    let outcome = run_script("x = 1\nPRINT x\n", &mut env, &mut console);

    assert_eq!(outcome, Outcome::Proceed);
    assert_eq!(console.output, vec!["1".to_owned()]);
}

#[test]
fn exit_ends_the_session() {
    let output = run_session(&["EXIT!", "x = 1", "PRINT x"], &[]);
    assert_eq!(output, vec!["\nExiting SNOL Program...".to_owned()]);
}

#[test]
fn errors_do_not_end_the_session() {
    let output = run_session(&["x = 5 + 2.5", "x = 5", "PRINT x"], &[]);
    assert_eq!(output,
               vec!["Error: Cannot add INT to FLOAT. Type mismatch.".to_owned(),
                    "5".to_owned()]);
}

#[test]
fn failed_assignments_leave_no_binding() {
    let output = run_session(&["x = 1 + 2.5", "PRINT x"], &[]);
    assert_eq!(output,
               vec!["Error: Cannot add INT to FLOAT. Type mismatch.".to_owned(),
                    "Error: Variable 'x' is not defined".to_owned()]);
}
