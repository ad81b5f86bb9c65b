//! Values held inside a room: exits and items.

use serde::{Deserialize, Serialize};

/// A one-way exit from a room.
///
/// `direction` is the key; it is unique within one room's paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub direction: String,
    /// Id of the room this path leads to. Not checked at load time.
    pub destination: String,
}

impl Path {
    /// Create a new path.
    pub fn new(direction: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            direction: direction.into(),
            destination: destination.into(),
        }
    }
}

/// Something the player can pick up and put down.
///
/// Equality compares every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Line shown when the item lies in the room being described.
    pub description: String,
    /// Id of the room the world file placed the item in.
    pub location: String,
}

impl Item {
    /// Create a new item.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            location: location.into(),
        }
    }

    /// Check if this item answers to `name`.
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_equality_uses_all_fields() {
        let key = Item::new("key", "A brass key lies here.", "hall");
        assert_eq!(key, Item::new("key", "A brass key lies here.", "hall"));
        assert_ne!(key, Item::new("key", "A brass key lies here.", "cellar"));
        assert_ne!(key, Item::new("key", "A rusty key lies here.", "hall"));
        assert!(key.is_named("key"));
        assert!(!key.is_named("Key"));
    }

    #[test]
    fn test_path_equality() {
        assert_eq!(Path::new("n", "hall"), Path::new("n", "hall"));
        assert_ne!(Path::new("n", "hall"), Path::new("s", "hall"));
    }
}
