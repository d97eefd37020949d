/// Represents a literal numeric value appearing directly in a command.
///
/// SNOL has exactly two numeric types. A literal is an integer when its
/// lexeme parses as one, otherwise a float. The two never mix implicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Float(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions are built from literals, variable references, left-associative
/// binary chains, and parenthesized groups. There is no general unary
/// production: a leading `-` is only recognized at the factor level, directly
/// in front of a number or variable token, and is folded into the literal or
/// the `negated` flag by the parser. `-(...)` does not parse.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal number.
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:    String,
        /// Whether the factor carried a `-` sign prefix; the looked-up value
        /// is negated during evaluation.
        negated: bool,
    },
    /// A binary operation (addition, subtraction, etc.).
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// A parenthesized sub-expression. Grouping has no semantic effect beyond
    /// precedence; evaluation passes straight through to the inner node.
    Grouping {
        /// The inner expression.
        inner: Box<Self>,
    },
}

/// The target of a `PRINT` command.
///
/// `PRINT` only accepts a bare number or variable token; anything else,
/// including a signed factor like `-x`, is rejected as an invalid command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// A number literal, printed verbatim as it was written.
    Literal(String),
    /// A variable, printed in its current value's native representation.
    Variable(String),
}

/// Represents one complete command, the unit parsed from a single line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A variable assignment binding a name to an expression result.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The expression whose result is bound.
        value: Expr,
    },
    /// A `BEG` command reading one value from the console into a variable.
    Input {
        /// The name of the variable to bind.
        name: String,
    },
    /// A `PRINT` command writing a literal or a variable's value.
    Output {
        /// What to print.
        target: OutputTarget,
    },
    /// The `EXIT!` directive ending the session.
    Exit,
    /// A standalone expression; it is evaluated and its result discarded.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
}

impl BinaryOperator {
    /// Returns the verb used when reporting a type mismatch for this
    /// operator, as in `Cannot add INT to FLOAT`.
    ///
    /// ## Example
    /// ```
    /// use snol::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Mod.verb(), "modulo");
    /// ```
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "subtract",
            Self::Mul => "multiply",
            Self::Div => "divide",
            Self::Mod => "modulo",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        };
        write!(f, "{operator}")
    }
}
