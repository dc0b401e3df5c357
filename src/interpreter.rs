use crate::command::{CommandFactory, Flow};
use crate::env::Environment;
use crate::error::{CommandError, SessionError};
use crate::io_adapters::LineInput;
use crate::parser::{self, CommandLine};
use std::io::Write;
use tracing::debug;

const PROMPT: &str = "Enter command> ";

/// Factory allows creating instances of ExecutableCommand.
///
/// Only supports the verbs defined in this crate.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// The command interpreter: prompts, parses and dispatches verbs.
///
/// Verbs are looked up in a fixed table of [`CommandFactory`] objects. See
/// [`Default`] for the verbs included out of the box.
pub struct Interpreter {
    commands: Vec<Box<dyn CommandFactory>>,
}

impl Interpreter {
    /// Create a new interpreter with a custom set of command factories.
    pub fn new(commands: Vec<Box<dyn CommandFactory>>) -> Self {
        Self { commands }
    }

    /// Run one parsed command line.
    pub fn dispatch(
        &self,
        line: &CommandLine,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow, CommandError> {
        let args: Vec<&str> = line.args.iter().map(String::as_str).collect();
        for factory in &self.commands {
            if let Some(cmd) = factory.try_create(&line.verb, &args) {
                debug!(verb = %line.verb, ?args, "dispatching");
                return cmd.execute(stdout, env);
            }
        }
        Err(CommandError::InvalidCommand(line.verb.clone()))
    }

    /// Prompt until a command has run successfully.
    ///
    /// Blank lines are ignored and retryable errors are reported to the player
    /// before prompting again. Only broken input or output streams end the loop
    /// with an error.
    pub fn prompt_command(
        &self,
        input: &mut dyn LineInput,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow, SessionError> {
        loop {
            if !input.shows_prompt() {
                write!(stdout, "{PROMPT}").map_err(SessionError::Output)?;
                stdout.flush().map_err(SessionError::Output)?;
            }
            let Some(raw) = input.read_line(PROMPT).map_err(SessionError::Input)? else {
                return Ok(Flow::EndOfInput);
            };
            let Some(line) = parser::parse_line(&raw) else {
                continue;
            };

            match self.dispatch(&line, stdout, env) {
                Ok(flow) => return Ok(flow),
                Err(err) if err.is_retryable() => {
                    debug!(%err, "retrying");
                    writeln!(stdout, "{err} (try again)").map_err(SessionError::Output)?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}

impl Default for Interpreter {
    /// Create an interpreter with the default verbs: `help`, `quit` and `go`.
    fn default() -> Self {
        use crate::builtin::*;
        Self::new(vec![
            Box::new(Factory::<Help>::default()),
            Box::new(Factory::<Quit>::default()),
            Box::new(Factory::<Go>::default()),
        ])
    }
}
