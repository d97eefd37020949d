/// The console module defines how the interpreter talks to the user.
///
/// `BEG` and `PRINT` are console-bound operations, and the session loop
/// itself reads commands from a prompt. The `Console` trait captures both
/// capabilities so the pipeline can be driven by a real terminal or by a
/// scripted stand-in in tests.
///
/// # Responsibilities
/// - Declares the `Console` trait: prompt-and-read one line, write one line.
/// - Provides `StdConsole`, the line-editing terminal implementation.
pub mod console;
/// The environment module holds the session's variable state.
///
/// SNOL has a single flat namespace that lives for one session. Variables are
/// created or overwritten by assignment and `BEG`, and are never deleted.
///
/// # Responsibilities
/// - Defines the `Environment` map from variable names to typed values.
/// - Provides lookup and binding operations used by the evaluator.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST produced by the parser, reads and writes the
/// environment, performs typed arithmetic, and drives the console for `BEG`
/// and `PRINT`. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Dispatches on command kind: assignment, input, output, exit, expression.
/// - Enforces the strict same-type rule for every binary operator.
/// - Reports runtime errors such as undefined variables or division by zero.
pub mod evaluator;
/// The lexer module tokenizes a command line for further parsing.
///
/// The lexer reads the raw line and produces the token sequence the parser
/// consumes. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input line into tokens, discarding whitespace.
/// - Handles numeric literals, variable names, keywords, and operators.
/// - Rejects the whole line when any character matches no token class.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a single `Command` node representing the whole line.
///
/// # Responsibilities
/// - Dispatches between assignment, `BEG`, `PRINT`, `EXIT!`, and expression.
/// - Validates the expression grammar, reporting descriptive errors.
/// - Rejects lines with trailing tokens after a complete command.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// SNOL values are integers or floats, and a variable's type is simply the
/// type of the value currently bound to it. The module also provides the kind
/// tags compared before every binary operation.
///
/// # Responsibilities
/// - Defines the `Value` enum and its `ValueKind` tags.
/// - Implements display formatting (floats keep their decimal point).
/// - Provides negation for the sign-prefixed factor form.
pub mod value;
