use crate::{
    ast::{Command, Expr, OutputTarget},
    error::RuntimeError,
    interpreter::{
        console::Console,
        environment::Environment,
        evaluator::binary::eval_binary,
        value::Value,
    },
    util::num::f64_to_i64_exact,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// What the session loop should do after a command completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading commands.
    Proceed,
    /// `EXIT!` was evaluated; the session ends with success.
    Exit,
}

impl Environment {
    /// Evaluates a single command against this environment.
    ///
    /// This is the main entry point of the evaluator. The command either
    /// completes — possibly printing, reading input, or mutating the
    /// environment — or fails with a `RuntimeError` and leaves no other
    /// visible effect. Assignment in particular binds only after its whole
    /// expression has evaluated successfully.
    ///
    /// # Parameters
    /// - `command`: Command to evaluate.
    /// - `console`: Console used by `BEG`, `PRINT`, and `EXIT!`.
    ///
    /// # Returns
    /// [`Outcome::Exit`] for `EXIT!`, otherwise [`Outcome::Proceed`].
    pub fn eval_command<C: Console>(&mut self,
                                    command: &Command,
                                    console: &mut C)
                                    -> EvalResult<Outcome> {
        match command {
            Command::Exit => {
                console.write_line("\nExiting SNOL Program...");
                return Ok(Outcome::Exit);
            },
            Command::Input { name } => self.eval_input(name, console)?,
            Command::Output { target } => self.eval_output(target, console)?,
            Command::Assignment { name, value } => self.eval_assignment(name, value)?,
            Command::Expression { expr } => {
                self.eval(expr)?;
            },
        }
        Ok(Outcome::Proceed)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Expressions only read the environment; nothing in an expression can
    /// create or change a binding.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed [`Value`].
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value } => Ok(Value::from(*value)),
            Expr::Variable { name, negated } => {
                let value = self.lookup(name)?;
                if *negated { value.negated() } else { Ok(value) }
            },
            Expr::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                eval_binary(*op, left, right)
            },
            Expr::Grouping { inner } => self.eval(inner),
        }
    }

    /// Looks up a variable, reporting undefined names by name.
    fn lookup(&self, name: &str) -> EvalResult<Value> {
        self.get(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_owned(), })
    }

    /// Evaluates an assignment: computes the right-hand expression, then
    /// binds the variable.
    ///
    /// A float result that is exactly representable as an integer collapses
    /// to an integer binding, so `x = 4.0 / 2.0` leaves `x` an `INT` while
    /// `x = 5.0 / 2.0` leaves it a `FLOAT`.
    fn eval_assignment(&mut self, name: &str, value: &Expr) -> EvalResult<()> {
        let result = self.eval(value)?;

        let result = match result {
            Value::Float(f) => f64_to_i64_exact(f).map_or(result, Value::Integer),
            Value::Integer(_) => result,
        };
        self.bind(name, result);
        Ok(())
    }

    /// Evaluates a `BEG` command: prompts for one line of input, parses it as
    /// an integer first and a float second, and binds the variable.
    ///
    /// The variable's prior binding and type, if any, are replaced by
    /// whatever the input denotes.
    fn eval_input<C: Console>(&mut self, name: &str, console: &mut C) -> EvalResult<()> {
        let prompt = format!("\nProvide a value for variable {name} >> ");
        let line = console.read_line(&prompt)
                          .ok_or_else(|| RuntimeError::InputUnavailable { name: name.to_owned(), })?;

        let text = line.trim();
        let value = if let Ok(n) = text.parse::<i64>() {
            Value::Integer(n)
        } else if let Ok(f) = text.parse::<f64>() {
            Value::Float(f)
        } else {
            return Err(RuntimeError::InvalidInput { input: text.to_owned(), });
        };

        self.bind(name, value);
        Ok(())
    }

    /// Evaluates a `PRINT` command.
    ///
    /// A number target prints its lexeme verbatim; a variable target prints
    /// the bound value in its native representation (integers without a
    /// decimal point, floats with one).
    fn eval_output<C: Console>(&self, target: &OutputTarget, console: &mut C) -> EvalResult<()> {
        match target {
            OutputTarget::Literal(text) => console.write_line(text),
            OutputTarget::Variable(name) => {
                let value = self.lookup(name)?;
                console.write_line(&value.to_string());
            },
        }
        Ok(())
    }
}
