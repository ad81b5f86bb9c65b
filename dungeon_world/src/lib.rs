//! # Dungeon World
//!
//! The world model for the dungeon game: a file-defined graph of rooms joined by
//! one-way paths, with items lying around in the rooms.
//!
//! ## Core Components
//!
//! - **sequence**: The ordered container used for every aggregate (rooms, paths, items)
//! - **entities**: `Room`, `Path` and `Item` records
//! - **world_state**: The `World` graph - keyed lookups and duplicate-free construction
//! - **loader**: Reads `ROOM:` / `PATH:` / `ITEM:` / `INIT:` records into a `World`
//!
//! Lookups by key return `Option`, so "no such room" is an ordinary branch for
//! callers rather than an error.

pub mod entities;
pub mod errors;
pub mod loader;
pub mod sequence;
pub mod world_state;

pub use entities::*;
pub use errors::*;
pub use loader::*;
pub use sequence::*;
pub use world_state::*;
