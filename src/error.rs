use std::io;

/// Why a `go` command could not take the player anywhere.
///
/// Every variant is retryable: the player stays where they are and is asked
/// for another command.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    #[error("Where do you want to go?")]
    MissingArgument,
    #[error("There is no door to {0:?} here")]
    NotFound(String),
    #[error("The door is tightly bolted")]
    PermissionDenied,
    #[error("You can't go to {0:?} from here")]
    Other(String),
}

impl NavigationError {
    /// Classify a failed attempt to enter `dest` by its I/O error kind.
    pub fn from_io(dest: &str, err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(dest.to_string()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Other(dest.to_string()),
        }
    }
}

/// Errors produced while handling a single command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0:?} is not a valid command")]
    InvalidCommand(String),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    /// The output stream failed while the command was writing to it.
    #[error("output failed: {0}")]
    Io(#[from] io::Error),
}

impl CommandError {
    /// Retryable errors are reported to the player and the prompt is shown again.
    /// Anything else ends the session.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::InvalidCommand(_) | Self::Navigation(_) => true,
            Self::Io(_) => false,
        }
    }
}

/// Unrecoverable failures that end a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("can't read command: {0}")]
    Input(#[source] io::Error),
    #[error("can't write output: {0}")]
    Output(#[source] io::Error),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("can't enter {path}: {source}")]
    Room {
        path: String,
        #[source]
        source: io::Error,
    },
}
