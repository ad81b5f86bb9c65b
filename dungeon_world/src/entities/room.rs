//! Room definitions.

use serde::{Deserialize, Serialize};

use super::{Item, Path};
use crate::errors::WorldError;
use crate::sequence::Sequence;

/// A room in the dungeon, with its exits and the items lying in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique key across the whole world.
    pub id: String,
    pub name: String,
    /// Long description, shown while `visited` is false.
    pub description: String,
    #[serde(default)]
    pub visited: bool,
    /// Exits in the order they were declared.
    #[serde(default)]
    pub paths: Sequence<Path>,
    #[serde(default)]
    pub items: Sequence<Item>,
}

impl Room {
    /// Create a new room with no exits and no items.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            visited: false,
            paths: Sequence::new(),
            items: Sequence::new(),
        }
    }

    /// Find the exit leading `direction`.
    pub fn path(&self, direction: &str) -> Option<&Path> {
        self.paths.find(|path| path.direction == direction)
    }

    /// Find the first item called `name`.
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.find(|item| item.is_named(name))
    }

    /// Check if an item called `name` lies here.
    pub fn has_item(&self, name: &str) -> bool {
        self.item(name).is_some()
    }

    /// Add an exit. Fails if the room already has one in that direction.
    pub fn add_path(&mut self, path: Path) -> Result<(), WorldError> {
        if self.path(&path.direction).is_some() {
            return Err(WorldError::DuplicatePath {
                room: self.id.clone(),
                direction: path.direction,
            });
        }
        self.paths.push_back(path);
        Ok(())
    }

    /// Put an item down at the end of the room's item list.
    pub fn add_item(&mut self, item: Item) {
        self.items.push_back(item);
    }

    /// Remove and return the first item called `name`.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        self.items.remove_first_where(|item| item.is_named(name))
    }

    /// Exit directions in declaration order.
    pub fn exits(&self) -> impl Iterator<Item = &str> + '_ {
        self.paths.iter().map(|path| path.direction.as_str())
    }

    /// Make the next description of this room the long one again.
    pub fn forget_visit(&mut self) {
        self.visited = false;
    }

    /// Replace the last occurrence of `find` in the description.
    ///
    /// Returns whether anything was replaced.
    pub fn rewrite_description(&mut self, find: &str, replace: &str) -> bool {
        if find.is_empty() {
            return false;
        }
        match self.description.rfind(find) {
            Some(at) => {
                self.description.replace_range(at..at + find.len(), replace);
                true
            }
            None => false,
        }
    }
}
