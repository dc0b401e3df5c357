//! A tiny text adventure over the filesystem.
//!
//! The directory you stand in is a room, its subdirectories are exits and its
//! files are items lying around. A read-eval-print loop lets the player walk
//! through the tree with a handful of short commands.
//!
//! The main entry point is [`Session`], which ties a [`Filesystem`] capability,
//! a [`LineInput`] and an output stream together. Filesystem access goes through
//! the [`Filesystem`] trait so the whole game can be driven against a fake tree
//! in tests.

mod builtin;
pub mod command;
pub mod config;
pub mod env;
pub mod error;
pub mod fs;
mod interpreter;
pub mod io_adapters;
pub mod parser;
pub mod render;
pub mod room;
mod session;

pub use error::{CommandError, NavigationError, SessionError};
pub use fs::{Entry, EntryKind, Filesystem, OsFilesystem};
pub use interpreter::Interpreter;
pub use io_adapters::{EditorInput, LineInput, ReaderInput};
pub use room::{Exit, Room};

/// Just a convenient re-export of the session driver.
///
/// See [`Session`] for the high-level API.
pub use session::{Ending, Session};
