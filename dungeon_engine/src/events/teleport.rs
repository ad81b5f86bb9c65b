//! The `xyzzy` teleport between a fixed pair of rooms.

use dungeon_world::{Item, Sequence, World};

use crate::config::TeleportConfig;

/// Result of saying the magic word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeleportOutcome {
    /// The player moves to this room.
    Moved(String),
    /// Carrying the item, but not standing in one of the paired rooms.
    NothingHappens,
    /// Not carrying the required item.
    Taunt,
}

/// Work out where `xyzzy` takes a player standing in `current`.
pub fn teleport(
    world: &World,
    current: &str,
    inventory: &Sequence<Item>,
    config: &TeleportConfig,
) -> TeleportOutcome {
    if !inventory.iter().any(|item| item.is_named(&config.required_item)) {
        return TeleportOutcome::Taunt;
    }

    let [first, second] = &config.rooms;
    let destination = if current == first {
        second
    } else if current == second {
        first
    } else {
        return TeleportOutcome::NothingHappens;
    };

    match world.find_room(destination) {
        Some(room) => TeleportOutcome::Moved(room.id.clone()),
        None => TeleportOutcome::NothingHappens,
    }
}
