//! World graph - owns every room and resolves rooms, paths and items by key.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::entities::{Item, Path, Room};
use crate::errors::WorldError;
use crate::sequence::Sequence;

/// The complete dungeon: all rooms, plus the room play starts in.
///
/// Rooms are looked up by id, never by position, so paths and items may be
/// declared against any room that has already been added.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    rooms: Sequence<Room>,
    start_room: Option<String>,
}

impl World {
    /// Create a new empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room. Fails if a room with the same id exists.
    pub fn add_room(&mut self, room: Room) -> Result<(), WorldError> {
        if self.find_room(&room.id).is_some() {
            return Err(WorldError::DuplicateRoom(room.id));
        }
        debug!("adding room '{}'", room.id);
        self.rooms.push_back(room);
        Ok(())
    }

    /// Add an exit to the room `room_id`.
    pub fn add_path(&mut self, room_id: &str, path: Path) -> Result<(), WorldError> {
        let Some(room) = self.find_room_mut(room_id) else {
            return Err(WorldError::UnknownSourceRoom {
                room: room_id.to_string(),
                direction: path.direction,
            });
        };
        room.add_path(path)
    }

    /// Place an item in the room named by its `location`.
    pub fn add_item(&mut self, item: Item) -> Result<(), WorldError> {
        let Some(room) = self.find_room_mut(&item.location) else {
            return Err(WorldError::UnknownRoom {
                room: item.location,
                item: item.name,
            });
        };
        room.add_item(item);
        Ok(())
    }

    /// Set the room play starts in. Checked by [`World::finalize`].
    pub fn set_start_room(&mut self, id: impl Into<String>) {
        self.start_room = Some(id.into());
    }

    /// Finish construction and return the starting room id.
    ///
    /// Defaults the start to the first room added when none was set.
    pub fn finalize(&mut self) -> Result<&str, WorldError> {
        let first = self
            .rooms
            .peek_front()
            .map_err(|_| WorldError::EmptyWorld)?
            .id
            .clone();
        let start = self.start_room.get_or_insert(first);
        if self.rooms.find(|room| room.id == *start).is_none() {
            return Err(WorldError::UnknownStartRoom(start.clone()));
        }
        Ok(start.as_str())
    }

    /// The starting room id, if one has been set or finalized.
    pub fn start_room(&self) -> Option<&str> {
        self.start_room.as_deref()
    }

    /// Find a room by id.
    pub fn find_room(&self, id: &str) -> Option<&Room> {
        self.rooms.find(|room| room.id == id)
    }

    /// Find a room by id, mutably.
    pub fn find_room_mut(&mut self, id: &str) -> Option<&mut Room> {
        self.rooms.find_mut(|room| room.id == id)
    }

    /// Find the exit leading `direction` out of room `room_id`.
    pub fn find_path(&self, room_id: &str, direction: &str) -> Option<&Path> {
        self.find_room(room_id)?.path(direction)
    }

    /// Find the first item called `name` in room `room_id`.
    pub fn find_item(&self, room_id: &str, name: &str) -> Option<&Item> {
        self.find_room(room_id)?.item(name)
    }

    /// All rooms in the order they were added.
    pub fn rooms(&self) -> &Sequence<Room> {
        &self.rooms
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_rooms() -> World {
        let mut world = World::new();
        world.add_room(Room::new("start", "Start", "Where it begins.")).unwrap();
        world.add_room(Room::new("hall", "Hall", "A hall.")).unwrap();
        world
    }

    #[test]
    fn test_duplicate_room_rejected() {
        let mut world = two_rooms();
        let err = world.add_room(Room::new("hall", "Other", "Other.")).unwrap_err();
        assert_eq!(err, WorldError::DuplicateRoom("hall".to_string()));
        assert_eq!(world.room_count(), 2);
    }

    #[test]
    fn test_path_from_unknown_room_rejected() {
        let mut world = two_rooms();
        let err = world.add_path("attic", Path::new("d", "hall")).unwrap_err();
        assert_eq!(
            err,
            WorldError::UnknownSourceRoom {
                room: "attic".to_string(),
                direction: "d".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let mut world = two_rooms();
        world.add_path("start", Path::new("e", "hall")).unwrap();
        let err = world.add_path("start", Path::new("e", "start")).unwrap_err();
        assert!(matches!(err, WorldError::DuplicatePath { .. }));

        // Same direction in a different room is fine.
        world.add_path("hall", Path::new("e", "start")).unwrap();
    }

    #[test]
    fn test_path_may_point_at_missing_room() {
        let mut world = two_rooms();
        world.add_path("start", Path::new("w", "nowhere")).unwrap();
        assert_eq!(world.find_path("start", "w").unwrap().destination, "nowhere");
        assert!(world.find_room("nowhere").is_none());
    }

    #[test]
    fn test_item_in_unknown_room_rejected() {
        let mut world = two_rooms();
        let err = world
            .add_item(Item::new("key", "A key.", "attic"))
            .unwrap_err();
        assert_eq!(
            err,
            WorldError::UnknownRoom {
                item: "key".to_string(),
                room: "attic".to_string()
            }
        );

        world.add_item(Item::new("key", "A key.", "hall")).unwrap();
        assert!(world.find_item("hall", "key").is_some());
        assert!(world.find_item("start", "key").is_none());
        assert!(world.find_item("attic", "key").is_none());
    }

    #[test]
    fn test_finalize_empty_world() {
        let mut world = World::new();
        assert_eq!(world.finalize().unwrap_err(), WorldError::EmptyWorld);
    }

    #[test]
    fn test_finalize_defaults_to_first_room() {
        let mut world = two_rooms();
        assert_eq!(world.finalize().unwrap(), "start");
        assert_eq!(world.start_room(), Some("start"));
    }

    #[test]
    fn test_finalize_keeps_explicit_start() {
        let mut world = two_rooms();
        world.set_start_room("hall");
        assert_eq!(world.finalize().unwrap(), "hall");

        world.set_start_room("attic");
        assert_eq!(
            world.finalize().unwrap_err(),
            WorldError::UnknownStartRoom("attic".to_string())
        );
    }

    #[test]
    fn test_find_room_mut_edits_in_place() {
        let mut world = two_rooms();
        world.find_room_mut("hall").unwrap().visited = true;
        assert!(world.find_room("hall").unwrap().visited);
        assert!(!world.find_room("start").unwrap().visited);
    }
}
