use fs_explorer::env::Environment;
use fs_explorer::{Ending, OsFilesystem, ReaderInput, Session};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn dungeon() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    let root = dir.path();
    fs::write(root.join("a.txt"), "a").expect("write file");
    fs::write(root.join("b.txt"), "b").expect("write file");
    fs::create_dir_all(root.join("c").join("catacombs")).expect("create dir");
    fs::write(root.join("c").join("skull.txt"), "x").expect("write file");
    fs::create_dir_all(root.join("d").join("old library")).expect("create dir");
    dir
}

fn start(dir: &Path) -> Session {
    Session::new(Environment::new(Box::new(OsFilesystem), dir).expect("environment"))
}

fn play(session: &mut Session, script: &str) -> (Ending, String) {
    let mut input = ReaderInput::new(Cursor::new(script.as_bytes().to_vec()));
    let mut out: Vec<u8> = Vec::new();
    let ending = session.run(&mut input, &mut out).expect("session");
    (ending, String::from_utf8(out).expect("utf8"))
}

fn canonical(path: PathBuf) -> PathBuf {
    fs::canonicalize(path).expect("canonicalize")
}

#[test]
fn first_room_lists_items_and_exits_one_level_deep() {
    let dir = dungeon();
    let (ending, out) = play(&mut start(dir.path()), "quit\n");

    assert_eq!(ending, Ending::Quit);
    assert!(out.contains("Items:\n\ta.txt\n\tb.txt\nExits:\n\tc\n\td\nEnter command> "));
    assert!(!out.contains("skull.txt"));
    assert!(!out.contains("catacombs"));
    assert!(!out.contains("old library"));
    assert!(out.ends_with("Goodbye!\n"));
}

#[test]
fn walking_follows_the_joined_path() {
    let dir = dungeon();
    let mut session = start(dir.path());
    let (_, out) = play(&mut session, "go d\ng old library\nq\n");

    assert_eq!(
        session.location(),
        canonical(dir.path().join("d").join("old library"))
    );
    assert!(out.contains("old library\n===========\n\n"));
}

#[test]
fn failed_moves_stay_put_without_rerendering() {
    let dir = dungeon();
    let mut session = start(dir.path());
    let (_, out) = play(&mut session, "go\ngo nonexistent-xyz\ngo a.txt\nfly\nq\n");

    assert_eq!(session.location(), canonical(dir.path().to_path_buf()));
    assert!(out.contains("Where do you want to go? (try again)\n"));
    assert!(out.contains("There is no door to \"nonexistent-xyz\" here (try again)\n"));
    assert!(out.contains("You can't go to \"a.txt\" from here (try again)\n"));
    assert!(out.contains("\"fly\" is not a valid command (try again)\n"));
    assert_eq!(out.matches("Exits:\n").count(), 1);
}

#[test]
fn going_back_up_renders_the_parent_again() {
    let dir = dungeon();
    let mut session = start(&dir.path().join("c"));
    let (_, out) = play(&mut session, "go catacombs\ngo ..\ngo ..\nq\n");

    assert_eq!(session.location(), canonical(dir.path().to_path_buf()));
    assert_eq!(out.matches("Exits:\n").count(), 4);
}

#[test]
fn quit_wins_over_pending_mistakes() {
    let dir = dungeon();
    let (ending, out) = play(&mut start(dir.path()), "go nowhere\nq\ngo c\n");

    assert_eq!(ending, Ending::Quit);
    assert!(out.ends_with("Enter command> Goodbye!\n"));
}

#[test]
fn closed_input_ends_the_session() {
    let dir = dungeon();
    let (ending, out) = play(&mut start(dir.path()), "help\n");

    assert_eq!(ending, Ending::EndOfInput);
    assert!(out.contains("Commands:\n"));
    assert!(out.ends_with("\nGoodbye!\n"));
}

/// Root ignores permission bits, so the permission tests below can only check
/// something when run as an ordinary user. They report the skip on stderr
/// instead of passing silently.
#[cfg(unix)]
fn permissions_enforced(dir: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(dir, fs::Permissions::from_mode(0o000)).expect("chmod");
    let enforced = fs::read_dir(dir).is_err();
    fs::set_permissions(dir, fs::Permissions::from_mode(0o755)).expect("chmod");
    if !enforced {
        eprintln!("skipped: permission bits are not enforced for this user (running as root?)");
    }
    enforced
}

#[cfg(unix)]
#[test]
fn unlistable_exit_is_locked_and_bolted() {
    use std::os::unix::fs::PermissionsExt;

    let dir = dungeon();
    let vault = dir.path().join("vault");
    fs::create_dir(&vault).expect("create dir");
    if !permissions_enforced(&vault) {
        return;
    }
    fs::set_permissions(&vault, fs::Permissions::from_mode(0o000)).expect("chmod");

    let mut session = start(dir.path());
    let (_, out) = play(&mut session, "go vault\nq\n");
    fs::set_permissions(&vault, fs::Permissions::from_mode(0o755)).expect("chmod");

    assert!(out.contains("\tvault (locked)\n"));
    assert!(out.contains("The door is tightly bolted (try again)\n"));
    assert_eq!(session.location(), canonical(dir.path().to_path_buf()));
}

#[cfg(unix)]
#[test]
fn readable_but_unsearchable_exit_is_bolted() {
    use std::os::unix::fs::PermissionsExt;

    let dir = dungeon();
    let gallery = dir.path().join("gallery");
    fs::create_dir_all(gallery.join("alcove")).expect("create dir");
    if !permissions_enforced(&gallery) {
        return;
    }
    // Listable but not enterable.
    fs::set_permissions(&gallery, fs::Permissions::from_mode(0o444)).expect("chmod");

    let mut session = start(dir.path());
    let (_, out) = play(&mut session, "go gallery\nq\n");
    fs::set_permissions(&gallery, fs::Permissions::from_mode(0o755)).expect("chmod");

    assert!(out.contains("\tgallery (locked)\n"));
    assert!(out.contains("The door is tightly bolted (try again)\n"));
    assert!(!out.contains("alcove"));
    assert_eq!(session.location(), canonical(dir.path().to_path_buf()));
}
