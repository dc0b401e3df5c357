use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// What kind of thing a directory entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A subdirectory. `readable` is false when listing it was refused for
    /// lack of permission.
    Directory { readable: bool },
    /// Anything that is not a directory: regular files, symlinks, sockets...
    File,
}

/// One immediate child of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// The filesystem as seen by the game.
///
/// Everything the explorer needs from the outside world goes through this trait,
/// so tests can substitute an in-memory tree.
pub trait Filesystem {
    /// Turn `path` into an absolute, canonical path.
    fn resolve(&self, path: &Path) -> io::Result<PathBuf>;

    /// List the immediate children of `dir`, sorted by name.
    ///
    /// Never descends further than one level. Children that can't be inspected
    /// are left out, except directories that refuse to be listed, which are
    /// reported with `readable: false`.
    fn list(&self, dir: &Path) -> io::Result<Vec<Entry>>;

    /// Check that `path` is a directory the player may walk into and return its
    /// canonical path. The error keeps its [`io::ErrorKind`] for classification.
    fn enter(&self, path: &Path) -> io::Result<PathBuf>;
}

/// [`Filesystem`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn resolve(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }

    fn list(&self, dir: &Path) -> io::Result<Vec<Entry>> {
        let mut entries = Vec::new();
        for dent in fs::read_dir(dir)? {
            let dent = match dent {
                Ok(d) => d,
                Err(err) => {
                    warn!(dir = %dir.display(), %err, "skipping unreadable entry");
                    continue;
                }
            };
            // A lossy name could never be walked through, leave it out.
            let name = match dent.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    warn!(name = ?raw, "skipping entry with a non UTF-8 name");
                    continue;
                }
            };
            // Links are not followed, a link to a directory is just an item.
            let file_type = match dent.file_type() {
                Ok(t) => t,
                Err(err) => {
                    warn!(%name, %err, "skipping entry without metadata");
                    continue;
                }
            };

            let kind = if file_type.is_dir() {
                match check_enterable(&dent.path()) {
                    Ok(()) => EntryKind::Directory { readable: true },
                    Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                        EntryKind::Directory { readable: false }
                    }
                    Err(err) => {
                        warn!(%name, %err, "skipping directory that can't be listed");
                        continue;
                    }
                }
            } else {
                EntryKind::File
            };
            entries.push(Entry { name, kind });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn enter(&self, path: &Path) -> io::Result<PathBuf> {
        let canonical = fs::canonicalize(path)?;
        if !fs::metadata(&canonical)?.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("{} is not a directory", canonical.display()),
            ));
        }
        // A directory we can't list or search is as good as a bolted door.
        check_enterable(&canonical)?;
        Ok(canonical)
    }
}

/// Listing a directory needs read permission, stepping inside also needs
/// search permission, which stat-ing `dir/.` checks.
fn check_enterable(dir: &Path) -> io::Result<()> {
    fs::read_dir(dir)?;
    fs::metadata(dir.join("."))?;
    Ok(())
}
