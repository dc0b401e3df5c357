use crate::error::NavigationError;
use crate::fs::Filesystem;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where the player is and how the world around them is looked up.
///
/// The current directory lives here rather than in the process: exploring never
/// changes the working directory of the program itself.
pub struct Environment {
    fs: Box<dyn Filesystem>,
    current_dir: PathBuf,
}

impl Environment {
    /// Start exploring at `start`, which is resolved to an absolute path.
    pub fn new(fs: Box<dyn Filesystem>, start: &Path) -> io::Result<Self> {
        let current_dir = fs.resolve(start)?;
        debug!(start = %current_dir.display(), "environment ready");
        Ok(Self { fs, current_dir })
    }

    pub fn fs(&self) -> &dyn Filesystem {
        self.fs.as_ref()
    }

    /// The room the player is standing in.
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// Walk through the exit `dest` of the current room.
    ///
    /// `dest` is always taken relative to the current room, a leading `/` is
    /// ignored. On failure the current directory is left untouched.
    pub fn change_dir(&mut self, dest: &str) -> Result<&Path, NavigationError> {
        let target = self.current_dir.join(dest.trim_start_matches('/'));
        match self.fs.enter(&target) {
            Ok(entered) => {
                info!(from = %self.current_dir.display(), to = %entered.display(), "moved");
                self.current_dir = entered;
                Ok(&self.current_dir)
            }
            Err(err) => {
                debug!(path = %target.display(), %err, "can't go there");
                Err(NavigationError::from_io(dest, &err))
            }
        }
    }
}
