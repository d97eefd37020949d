use std::collections::HashMap;

use crate::interpreter::value::Value;

/// Stores the session's variable bindings.
///
/// The environment is a single flat mapping from variable name to the value
/// currently bound to it. It is created empty at session start, owned by the
/// session loop, passed by reference into each interpreted command, and
/// discarded when the process exits. Entries are created or overwritten by
/// assignment and `BEG`; nothing ever deletes one.
#[derive(Debug)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

#[allow(clippy::new_without_default)]
impl Environment {
    /// Creates a new, empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new(), }
    }

    /// Looks up the value currently bound to `name`, if any.
    ///
    /// # Example
    /// ```
    /// use snol::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut env = Environment::new();
    /// assert_eq!(env.get("x"), None);
    ///
    /// env.bind("x", Value::Integer(7));
    /// assert_eq!(env.get("x"), Some(Value::Integer(7)));
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.variables.get(name).copied()
    }

    /// Binds `name` to `value`, replacing any prior binding.
    ///
    /// Rebinding may change the variable's type: the environment tracks only
    /// the current value, not a locked type tag.
    pub fn bind(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_owned(), value);
    }
}
