use rustyline::DefaultEditor;

/// The interpreter's view of the terminal.
///
/// SNOL is console-bound in two places: the session loop reads the next
/// command at a prompt, and `BEG` prompts for a variable's value mid-command.
/// Both go through this trait, so the pipeline can be driven by a real
/// terminal or by scripted input in tests.
pub trait Console {
    /// Shows `prompt` and reads one line of input.
    ///
    /// Returns `None` when no more input is available (end of input, or the
    /// user interrupted the prompt).
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    /// Writes one line of output.
    fn write_line(&mut self, text: &str);
}

/// The standard terminal console, with line editing and history.
pub struct StdConsole {
    editor: DefaultEditor,
}

impl StdConsole {
    /// Creates a console over the current terminal.
    ///
    /// # Errors
    /// Returns an error when the line editor cannot be initialized.
    pub fn new() -> rustyline::Result<Self> {
        Ok(Self { editor: DefaultEditor::new()?, })
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let _ = self.editor.add_history_entry(&line);
                Some(line)
            },
            // Ctrl-D and Ctrl-C end the input stream; any other editor
            // failure is treated the same way rather than crashing a session.
            Err(_) => None,
        }
    }

    fn write_line(&mut self, text: &str) {
        println!("{text}");
    }
}
