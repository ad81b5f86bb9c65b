//! Entity definitions for the dungeon: rooms and the paths and items they hold.

mod components;
mod room;

pub use components::*;
pub use room::*;
