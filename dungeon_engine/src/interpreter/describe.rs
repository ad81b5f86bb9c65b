//! Text shown for rooms and for the `--debug` world dump.

use dungeon_world::{Room, World};

/// Lines describing `room` at the top of a turn.
///
/// The long description is included only while the room is unvisited.
pub fn describe_room(room: &Room) -> Vec<String> {
    let mut lines = vec![format!("You are in {}", room.id)];
    if !room.visited {
        lines.push(room.description.clone());
    }
    lines.extend(room.items.iter().map(|item| item.description.clone()));
    if room.paths.is_empty() {
        lines.push("There are no exits".to_string());
    } else {
        let exits: Vec<&str> = room.exits().collect();
        lines.push(format!("Exits are: {}", exits.join(", ")));
    }
    lines
}

/// Full dump of a loaded world, printed before play with `--debug`.
pub fn world_report(world: &World) -> Vec<String> {
    let mut lines = vec![
        "Debugging information:".to_string(),
        format!("Number of rooms: {}", world.room_count()),
        "List of rooms:".to_string(),
    ];
    for (index, room) in world.rooms().iter().enumerate() {
        lines.push(format!("  Room #{}: {} ({})", index, room.id, room.name));
        lines.push(format!("        {}", room.description));
        if !room.paths.is_empty() {
            lines.push("  Paths:".to_string());
        }
        for path in &room.paths {
            lines.push(format!("    Path: {} to {}", path.direction, path.destination));
        }
        if !room.items.is_empty() {
            lines.push("  Items:".to_string());
        }
        for item in &room.items {
            lines.push(format!("    {}", item.description));
        }
    }
    lines.push(format!(
        "Starting room: {}",
        world.start_room().unwrap_or_default()
    ));
    lines.push("And now... on to the game".to_string());
    lines
}
