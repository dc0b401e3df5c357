use argh::FromArgs;
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Explore the filesystem as if it were a dungeon.
/// Directories are rooms, subdirectories are exits and files are items.
pub struct Args {
    #[argh(option, short = 's')]
    /// directory to start exploring from. Defaults to the current directory.
    pub start: Option<PathBuf>,

    #[argh(switch)]
    /// read commands line by line from stdin even on a terminal.
    pub plain: bool,

    #[argh(switch)]
    /// do not remember entered commands in the line editor history.
    pub no_history: bool,
}

/// Settings for one run of the explorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub start: PathBuf,
    /// Use the rustyline editor for input.
    pub interactive: bool,
    pub history: bool,
}

impl Config {
    /// Combine parsed arguments with what is known about the terminal.
    pub fn from_args(args: Args, stdin_is_terminal: bool) -> Self {
        Self {
            start: args.start.unwrap_or_else(|| PathBuf::from(".")),
            interactive: stdin_is_terminal && !args.plain,
            history: !args.no_history,
        }
    }
}
