//! Loader - builds a [`World`] from the line-oriented world-file format.
//!
//! ```text
//! ROOM: <id> : <name> : <description>
//! PATH: <direction> : <roomId> : <destinationId>
//! ITEM: <name> : <description> : <roomId>
//! INIT: <roomId>
//! ```
//!
//! Records are applied in file order, so a `PATH:` or `ITEM:` must come after
//! the `ROOM:` it refers to. A path's destination is not checked.

mod record;

pub use record::*;

use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use thiserror::Error;

use crate::entities::{Item, Path, Room};
use crate::errors::WorldError;
use crate::world_state::World;

/// Errors raised while reading a world file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("could not read world file: {0}")]
    Io(#[from] std::io::Error),

    /// A record did not have the expected shape.
    #[error("line {line}: malformed record: {reason}")]
    Malformed { line: usize, reason: &'static str },

    /// A well-formed record was rejected by the world.
    #[error("line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: WorldError,
    },

    /// The world as a whole is unusable.
    #[error(transparent)]
    World(#[from] WorldError),
}

impl World {
    /// Apply one parsed record.
    pub fn apply(&mut self, record: Record) -> Result<(), WorldError> {
        match record {
            Record::Room {
                id,
                name,
                description,
            } => self.add_room(Room::new(id, name, description)),
            Record::Path {
                direction,
                room,
                destination,
            } => self.add_path(&room, Path::new(direction, destination)),
            Record::Item {
                name,
                description,
                room,
            } => self.add_item(Item::new(name, description, room)),
            Record::Init { room } => {
                if room.is_empty() {
                    warn!("empty INIT: record ignored");
                } else {
                    self.set_start_room(room);
                }
                Ok(())
            }
        }
    }

    /// Read every record from `input` and finalize the world.
    pub fn load<R: BufRead>(input: R) -> Result<Self, LoadError> {
        let mut world = World::new();
        for entry in RecordReader::new(input) {
            let (line, record) = entry?;
            debug!("line {}: {:?}", line, record);
            world
                .apply(record)
                .map_err(|source| LoadError::Record { line, source })?;
        }

        let start = world.finalize()?.to_string();
        info!(
            "loaded world with {} rooms, starting in '{}'",
            world.room_count(),
            start
        );
        Ok(world)
    }

    /// Open and load the world file at `path`.
    pub fn load_path(path: impl AsRef<std::path::Path>) -> Result<Self, LoadError> {
        let file = File::open(path.as_ref())?;
        Self::load(BufReader::new(file))
    }
}
