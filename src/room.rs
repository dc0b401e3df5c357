use crate::fs::{EntryKind, Filesystem};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// A way out of a room, i.e. a subdirectory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    pub name: String,
    /// Set when the directory refused to be listed.
    pub locked: bool,
}

impl fmt::Display for Exit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.locked {
            write!(f, "{} (locked)", self.name)
        } else {
            f.write_str(&self.name)
        }
    }
}

/// A directory seen as a dungeon room.
///
/// Rooms are plain data gathered with a single directory listing. They are
/// rebuilt whenever they are needed and never cached across a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    path: PathBuf,
    exits: Vec<Exit>,
    items: Vec<String>,
}

impl Room {
    pub fn new(path: impl Into<PathBuf>, exits: Vec<Exit>, items: Vec<String>) -> Self {
        Self {
            path: path.into(),
            exits,
            items,
        }
    }

    /// Look around the directory at `path`.
    ///
    /// Fails only when the directory itself can't be resolved or listed.
    pub fn load(fs: &dyn Filesystem, path: &Path) -> io::Result<Self> {
        let path = fs.resolve(path)?;
        let mut exits = Vec::new();
        let mut items = Vec::new();
        for entry in fs.list(&path)? {
            match entry.kind {
                EntryKind::Directory { readable } => exits.push(Exit {
                    name: entry.name,
                    locked: !readable,
                }),
                EntryKind::File => items.push(entry.name),
            }
        }
        Ok(Self { path, exits, items })
    }

    /// The absolute path of the room. Two rooms are the same place when their
    /// names are equal.
    pub fn name(&self) -> &Path {
        &self.path
    }

    /// Short title: the last path segment, or the whole path for the root.
    pub fn display_name(&self) -> String {
        match self.path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.path.display().to_string(),
        }
    }

    pub fn description(&self) -> String {
        format!(
            "You stand in a dusty dungeon chamber, not much different from the rest. The\n\
             room is full of cobwebs and everything is coated in an undisturbed layer of\n\
             dust.\n\
             \n\
             On one wall there is a metal plaque rusted with age. It reads:\n\
             \t{}\n\
             \n",
            self.path.display()
        )
    }

    pub fn exits(&self) -> &[Exit] {
        &self.exits
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::fake::FakeFilesystem;

    fn dungeon() -> FakeFilesystem {
        FakeFilesystem::new()
            .dir("/keep")
            .file("/keep/a.txt")
            .file("/keep/b.txt")
            .dir("/keep/c")
            .file("/keep/c/deep.txt")
            .dir("/keep/c/cellar")
            .dir("/keep/d")
            .locked_dir("/keep/vault")
    }

    #[test]
    fn test_load_splits_exits_and_items() {
        let room = Room::load(&dungeon(), Path::new("/keep")).unwrap();
        assert_eq!(room.name(), Path::new("/keep"));
        assert_eq!(room.items(), ["a.txt", "b.txt"]);
        let exits: Vec<String> = room.exits().iter().map(|e| e.to_string()).collect();
        assert_eq!(exits, ["c", "d", "vault (locked)"]);
    }

    #[test]
    fn test_load_missing_room_fails() {
        let err = Room::load(&dungeon(), Path::new("/nowhere")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_display_name() {
        let room = Room::new("/keep/c", vec![], vec![]);
        assert_eq!(room.display_name(), "c");
        let root = Room::new("/", vec![], vec![]);
        assert_eq!(root.display_name(), "/");
    }

    #[test]
    fn test_description_mentions_path() {
        let room = Room::new("/keep/c", vec![], vec![]);
        let desc = room.description();
        assert!(desc.starts_with("You stand in a dusty dungeon chamber"));
        assert!(desc.ends_with("It reads:\n\t/keep/c\n\n"));
    }
}
