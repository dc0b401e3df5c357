use crate::command::Flow;
use crate::env::Environment;
use crate::error::SessionError;
use crate::interpreter::Interpreter;
use crate::io_adapters::LineInput;
use crate::render::render_room;
use crate::room::Room;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// How a session came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The player typed `quit`.
    Quit,
    /// The input was closed.
    EndOfInput,
}

/// An exploration session: look around, render the room when it changed, ask
/// for a command, repeat.
pub struct Session {
    env: Environment,
    interpreter: Interpreter,
    last_rendered: Option<PathBuf>,
}

impl Session {
    pub fn new(env: Environment) -> Self {
        Self {
            env,
            interpreter: Interpreter::default(),
            last_rendered: None,
        }
    }

    /// Where the player currently stands.
    pub fn location(&self) -> &Path {
        self.env.current_dir()
    }

    /// Run the interactive loop until the player quits or the input ends.
    pub fn run(
        &mut self,
        input: &mut dyn LineInput,
        out: &mut dyn Write,
    ) -> Result<Ending, SessionError> {
        write!(out, "Welcome to Filesystem Explorer!\n\n").map_err(SessionError::Output)?;

        loop {
            self.look(out)?;
            match self.interpreter.prompt_command(input, out, &mut self.env)? {
                Flow::Continue => {}
                Flow::Quit => return Ok(Ending::Quit),
                Flow::EndOfInput => {
                    writeln!(out, "\nGoodbye!").map_err(SessionError::Output)?;
                    out.flush().map_err(SessionError::Output)?;
                    return Ok(Ending::EndOfInput);
                }
            }
        }
    }

    /// Look at the current room, rendering it only if it isn't the one shown last.
    fn look(&mut self, out: &mut dyn Write) -> Result<(), SessionError> {
        let room = Room::load(self.env.fs(), self.env.current_dir()).map_err(|source| {
            SessionError::Room {
                path: self.env.current_dir().display().to_string(),
                source,
            }
        })?;
        if self.last_rendered.as_deref() == Some(room.name()) {
            return Ok(());
        }

        debug!(room = %room.name().display(), "entering room");
        render_room(&room, out).map_err(SessionError::Output)?;
        self.last_rendered = Some(room.name().to_path_buf());
        Ok(())
    }
}
