use crate::env::Environment;
use crate::error::CommandError;
use std::io::Write;

/// What the session should do once a command has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Look around again and ask for the next command.
    Continue,
    /// The player asked to leave.
    Quit,
    /// The input ran dry before a command could be read.
    EndOfInput,
}

/// Object-safe trait for any command the interpreter can run.
///
/// Built-in verbs get it through a blanket impl.
pub trait ExecutableCommand {
    /// Executes the command, writing any text for the player to `stdout`.
    fn execute(
        self: Box<Self>,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow, CommandError>;
}

/// Factory that tries to create a command from a verb and its arguments.
///
/// Returns `None` when the factory doesn't recognize the `verb`.
pub trait CommandFactory {
    fn try_create(&self, verb: &str, args: &[&str]) -> Option<Box<dyn ExecutableCommand>>;
}
