use thiserror::Error;

/// Errors raised while building a [`World`](crate::World).
///
/// All of these are fatal: a world that fails to build is never played.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    /// A room with this id was already added.
    #[error("duplicate room id '{0}'")]
    DuplicateRoom(String),

    /// A path was declared from a room that does not exist (yet).
    #[error("path '{direction}' leaves unknown room '{room}'")]
    UnknownSourceRoom { room: String, direction: String },

    /// The room already has a path in this direction.
    #[error("room '{room}' already has a path '{direction}'")]
    DuplicatePath { room: String, direction: String },

    /// An item was placed in a room that does not exist.
    #[error("item '{item}' placed in unknown room '{room}'")]
    UnknownRoom { item: String, room: String },

    /// No rooms were ever added.
    #[error("no rooms in dungeon")]
    EmptyWorld,

    /// The starting room named by `INIT:` does not exist.
    #[error("starting room '{0}' does not exist")]
    UnknownStartRoom(String),
}
