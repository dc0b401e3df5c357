use crate::command::{CommandFactory, ExecutableCommand, Flow};
use crate::env::Environment;
use crate::error::{CommandError, NavigationError};
use crate::interpreter::Factory;
use std::io::Write;

/// Verbs known to the explorer at compile time.
///
/// Each verb has a full name and a one-letter alias and is executed directly
/// against the [`Environment`].
pub(crate) trait BuiltinCommand: Sized {
    /// Canonical name of the verb, e.g. "go".
    fn name() -> &'static str;

    /// Short form accepted in place of the name, e.g. "g".
    fn alias() -> &'static str;

    /// Build the command from the words that followed the verb.
    fn from_args(args: &[&str]) -> Self;

    fn execute(self, stdout: &mut dyn Write, env: &mut Environment) -> Result<Flow, CommandError>;
}

impl<T: BuiltinCommand> ExecutableCommand for T {
    fn execute(
        self: Box<Self>,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow, CommandError> {
        <T as BuiltinCommand>::execute(*self, stdout, env)
    }
}

impl<T: BuiltinCommand + 'static> CommandFactory for Factory<T> {
    fn try_create(&self, verb: &str, args: &[&str]) -> Option<Box<dyn ExecutableCommand>> {
        if verb == T::name() || verb == T::alias() {
            Some(Box::new(T::from_args(args)))
        } else {
            None
        }
    }
}

/// Display the command summary.
pub struct Help;

impl BuiltinCommand for Help {
    fn name() -> &'static str {
        "help"
    }

    fn alias() -> &'static str {
        "h"
    }

    fn from_args(_args: &[&str]) -> Self {
        Help
    }

    fn execute(self, stdout: &mut dyn Write, _env: &mut Environment) -> Result<Flow, CommandError> {
        write!(
            stdout,
            "Commands:\n\
             \x20 [h]elp\t\tDisplay this help screen\n\
             \x20 [q]uit\t\tQuit the program\n\
             \x20 [g]o [exit-name]\tGo through an exit from a room\n\
             \n"
        )?;
        Ok(Flow::Continue)
    }
}

/// Say goodbye and leave the dungeon.
pub struct Quit;

impl BuiltinCommand for Quit {
    fn name() -> &'static str {
        "quit"
    }

    fn alias() -> &'static str {
        "q"
    }

    fn from_args(_args: &[&str]) -> Self {
        Quit
    }

    fn execute(self, stdout: &mut dyn Write, _env: &mut Environment) -> Result<Flow, CommandError> {
        writeln!(stdout, "Goodbye!")?;
        stdout.flush()?;
        Ok(Flow::Quit)
    }
}

/// Go through an exit of the current room.
pub struct Go {
    /// Exit name, rejoined with single spaces. `None` when no words were given.
    pub destination: Option<String>,
}

impl BuiltinCommand for Go {
    fn name() -> &'static str {
        "go"
    }

    fn alias() -> &'static str {
        "g"
    }

    fn from_args(args: &[&str]) -> Self {
        let destination = (!args.is_empty()).then(|| args.join(" "));
        Go { destination }
    }

    fn execute(self, _stdout: &mut dyn Write, env: &mut Environment) -> Result<Flow, CommandError> {
        let dest = self.destination.ok_or(NavigationError::MissingArgument)?;
        env.change_dir(&dest)?;
        Ok(Flow::Continue)
    }
}
