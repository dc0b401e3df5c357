use crate::room::Room;
use std::io::{self, Write};

/// Write a depiction of `room` to `out`.
///
/// The items section is left out when the room is empty; exits are always
/// listed, even when there are none.
pub fn render_room(room: &Room, out: &mut dyn Write) -> io::Result<()> {
    let title = room.display_name();
    writeln!(out, "{title}")?;
    writeln!(out, "{}\n", "=".repeat(title.chars().count()))?;

    write!(out, "{}", room.description())?;

    if !room.items().is_empty() {
        writeln!(out, "Items:")?;
        for item in room.items() {
            writeln!(out, "\t{item}")?;
        }
    }

    writeln!(out, "Exits:")?;
    for exit in room.exits() {
        writeln!(out, "\t{exit}")?;
    }
    Ok(())
}
