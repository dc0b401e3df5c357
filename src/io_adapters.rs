use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, BufRead};

/// A source of command lines.
pub trait LineInput {
    /// Read the next line, or `None` once the input is exhausted.
    ///
    /// `prompt` is only used by inputs that draw it themselves, see
    /// [`LineInput::shows_prompt`].
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Whether this input displays the prompt itself. When it doesn't, the
    /// caller writes the prompt to its output before reading.
    fn shows_prompt(&self) -> bool {
        false
    }
}

/// Line input over any buffered reader, e.g. piped stdin or a test script.
pub struct ReaderInput<R> {
    reader: R,
}

impl<R: BufRead> ReaderInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineInput for ReaderInput<R> {
    /// Bytes that aren't valid UTF-8 are replaced rather than rejected, so a
    /// garbled line is just a command nobody knows.
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Interactive line editing on a terminal through rustyline.
pub struct EditorInput {
    editor: DefaultEditor,
    history: bool,
}

impl EditorInput {
    /// Set up the editor. With `history` on, every non-blank line is kept in
    /// the in-memory history for the rest of the session.
    pub fn new(history: bool) -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            history,
        })
    }
}

impl LineInput for EditorInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if self.history && !line.trim().is_empty() {
                    self.editor
                        .add_history_entry(line.as_str())
                        .map_err(into_io)?;
                }
                Ok(Some(line))
            }
            // Ctrl-D and Ctrl-C both walk out of the dungeon.
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
            Err(err) => Err(into_io(err)),
        }
    }

    fn shows_prompt(&self) -> bool {
        true
    }
}

fn into_io(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(e) => e,
        other => io::Error::other(other.to_string()),
    }
}
