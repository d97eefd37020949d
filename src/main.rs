use std::fs;

use clap::Parser;
use snol::{
    interpret, run_script,
    interpreter::{
        console::{Console, StdConsole},
        environment::Environment,
        evaluator::core::Outcome,
    },
};

/// snol is an interpreter for SNOL, a one-command-per-line numeric language
/// with variables, typed arithmetic, and console input/output.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells snol to interpret a file of commands instead of a single
    /// command.
    #[arg(short, long)]
    file: bool,

    /// The command to interpret. Omit it to start an interactive session.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let mut console = match StdConsole::new() {
        Ok(console) => console,
        Err(e) => {
            eprintln!("Failed to set up the console: {e}");
            std::process::exit(1);
        },
    };
    let mut env = Environment::new();

    match args.contents {
        Some(contents) if args.file => {
            let script = fs::read_to_string(&contents).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });
            run_script(&script, &mut env, &mut console);
        },
        Some(contents) => {
            interpret(&contents, &mut env, &mut console);
        },
        None => eval_loop(&mut env, &mut console),
    }
}

/// The evaluation loop of the interactive session.
///
/// Reads one command per prompt until `EXIT!` or the end of input.
fn eval_loop(env: &mut Environment, console: &mut StdConsole) {
    println!("The SNOL Environment is now active, you may proceed with giving your commands\n");

    loop {
        let Some(command) = console.read_line("\nSNOL $> ") else {
            break;
        };
        if interpret(&command, env, console) == Outcome::Exit {
            break;
        }
    }
}
